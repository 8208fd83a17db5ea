/// A sequence with random access to its elements, viewed as a slice.
///
/// The [`algorithms`](crate::algorithms) accept anything implementing this,
/// which covers slices, arrays, `Vec`, [`List`](crate::List) and
/// [`IterWrapper`](crate::IterWrapper).
pub trait RandomAccess {
    type Item;

    fn as_slice(&self) -> &[Self::Item];

    #[inline]
    fn count(&self) -> usize { self.as_slice().len() }
}

/// A [`RandomAccess`] sequence whose elements may be rearranged in place.
pub trait RandomAccessMut: RandomAccess {
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

impl<T> RandomAccess for [T] {
    type Item = T;
    #[inline]
    fn as_slice(&self) -> &[T] { self }
}

impl<T> RandomAccessMut for [T] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] { self }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item = T;
    #[inline]
    fn as_slice(&self) -> &[T] { self }
}

impl<T, const N: usize> RandomAccessMut for [T; N] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] { self }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;
    #[inline]
    fn as_slice(&self) -> &[T] { self }
}

impl<T> RandomAccessMut for Vec<T> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] { self }
}

impl<R: RandomAccess + ?Sized> RandomAccess for &R {
    type Item = R::Item;
    #[inline]
    fn as_slice(&self) -> &[R::Item] { (**self).as_slice() }
}

impl<R: RandomAccess + ?Sized> RandomAccess for &mut R {
    type Item = R::Item;
    #[inline]
    fn as_slice(&self) -> &[R::Item] { (**self).as_slice() }
}

impl<R: RandomAccessMut + ?Sized> RandomAccessMut for &mut R {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [R::Item] { (**self).as_mut_slice() }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn total<R: RandomAccess<Item = i32> + ?Sized>(range: &R) -> i32 {
        range.as_slice().iter().sum()
    }

    #[test]
    fn shapes() {
        let arr = [1, 2, 3];
        let vec = vec![1, 2, 3];

        assert_eq!(total(&arr), 6);
        assert_eq!(total(&vec), 6);
        assert_eq!(total(&vec[1..]), 5);
        assert_eq!(total(&&arr), 6);
        assert_eq!(arr.count(), 3);
    }

    #[test]
    fn mutable() {
        let mut vec = vec![1, 2, 3];
        RandomAccessMut::as_mut_slice(&mut vec)[0] = 9;
        assert_eq!(vec, [9, 2, 3]);
    }
}
