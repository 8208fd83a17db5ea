use std::{fmt, mem, slice};

use crate::range::RandomAccess;


/// A borrowed `[first, last)` pointer range over contiguous elements.
///
/// Holds no data of its own; it lets any pointer pair or contiguous sequence
/// be handed to code expecting a [`RandomAccess`] range, such as
/// [`List::add_range`](crate::List::add_range) or the
/// [`algorithms`](crate::algorithms).
///
/// ```
/// use anylist::{IterWrapper, List};
///
/// let data = [1, 2, 3, 4];
/// let mut list = List::new();
/// list.add_range(&IterWrapper::new(&data[1..]));
///
/// assert_eq!(list, [2, 3, 4]);
/// ```
pub struct IterWrapper<'a, T> {
    items: &'a [T],
}

impl<'a, T> IterWrapper<'a, T> {

    /// Wraps the elements of any contiguous range.
    #[inline]
    pub fn new<R: RandomAccess<Item = T> + ?Sized>(range: &'a R) -> Self {
        Self::from_slice(range.as_slice())
    }

    #[inline]
    pub const fn from_slice(items: &'a [T]) -> Self { Self { items } }

    /// Wraps a raw pointer pair. [`begin`](Self::begin) returns `first`
    /// unchanged, also when the range is empty.
    ///
    /// # Safety
    ///
    /// `first` and `last` must satisfy the requirements of
    /// [`slice::from_raw_parts`] for the range between them: both derived from
    /// the same allocation, `first` non-null and aligned, `first <= last`,
    /// every element in between initialized and not mutated for `'a`. A pair
    /// of zero-sized `T` pointers always describes the empty range.
    #[inline]
    pub unsafe fn from_raw(first: *const T, last: *const T) -> Self {
        let len = match mem::size_of::<T>() {
            0 => 0,
            _ => unsafe { last.offset_from(first) as usize },
        };
        Self { items: unsafe { slice::from_raw_parts(first, len) } }
    }

    #[inline]
    pub const fn begin(&self) -> *const T { self.items.as_ptr_range().start }

    /// One past the last element. Equal to [`begin`](Self::begin) for
    /// zero-sized `T`.
    #[inline]
    pub const fn end(&self) -> *const T { self.items.as_ptr_range().end }

    #[inline]
    pub const fn len(&self) -> usize { self.items.len() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.items.is_empty() }

    #[inline]
    pub const fn as_slice(&self) -> &'a [T] { self.items }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, T> { self.items.iter() }
}

impl<T> Clone for IterWrapper<'_, T> {
    #[inline]
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for IterWrapper<'_, T> {}

impl<'a, T> From<&'a [T]> for IterWrapper<'a, T> {
    #[inline]
    fn from(items: &'a [T]) -> Self { Self::from_slice(items) }
}

impl<T> RandomAccess for IterWrapper<'_, T> {
    type Item = T;
    #[inline]
    fn as_slice(&self) -> &[T] { IterWrapper::as_slice(self) }
}

impl<'a, T> IntoIterator for IterWrapper<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &IterWrapper<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(not(tarpaulin_include))]
impl<T: fmt::Debug> fmt::Debug for IterWrapper<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterWrapper").field(&self.as_slice()).finish()
    }
}
