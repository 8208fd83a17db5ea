use std::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr::NonNull};

use super::{allocation::deallocate, raw_iter::RawIter, List};


/// An owning iterator over the elements of a [`List`].
///
/// Created by [`List::into_iter`](IntoIterator::into_iter). Elements not
/// yielded are dropped with the iterator, and the buffer is freed.
pub struct IntoIter<T> {
    buf: Option<NonNull<T>>,
    capacity: usize,
    iter: RawIter<T>,
}

unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    #[inline]
    pub(super) fn new(list: List<T>) -> Self {
        let list = ManuallyDrop::new(list);
        let iter = unsafe { RawIter::new(list.data_ptr().as_ptr(), list.count) };
        Self { buf: list.buf, capacity: list.capacity, iter }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] { self.iter.as_slice() }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.iter.next() }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.iter.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in &mut *self {}
        if let Some(buf) = self.buf {
            unsafe { deallocate(buf, self.capacity) };
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn into_iter() {
        let list = List::from([1, 2, 3, 4]);
        let mut iter = list.into_iter();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.as_slice(), [2, 3]);
        assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn drops_remaining() {
        let shared = Rc::new(());
        let list: List<_> = (0..5).map(|_| Rc::clone(&shared)).collect();

        let mut iter = list.into_iter();
        let first = iter.next();
        assert_eq!(Rc::strong_count(&shared), 6);

        drop(iter);
        assert_eq!(Rc::strong_count(&shared), 2);
        drop(first);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn empty_and_zero_sized() {
        assert_eq!(List::<String>::new().into_iter().next(), None);

        let units: List<()> = List::from([(), (), ()]);
        assert_eq!(units.into_iter().count(), 3);
    }
}
