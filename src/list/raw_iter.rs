use std::{mem, ptr::NonNull, slice};


/// Moves elements out of a `[start, end)` block. Remaining elements are not
/// dropped; the owner decides what happens to them.
pub(super) struct RawIter<T> {
    start: *const T,
    end: *const T,
}

impl<T> RawIter<T> {

    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// # Safety
    ///
    /// `start` must point at `len` initialized elements that the caller gives
    /// up ownership of.
    pub(super) unsafe fn new(start: *const T, len: usize) -> Self {
        Self {
            start,
            end: match (Self::IS_ZST, len) {
                (true, len) => start.wrapping_byte_add(len),
                (_, 0) => start,
                (_, len) => unsafe { start.add(len) },
            },
        }
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        match Self::IS_ZST {
            true => self.end as usize - self.start as usize,
            false => unsafe { self.end.offset_from(self.start) as usize },
        }
    }

    #[inline]
    pub(super) fn as_slice(&self) -> &[T] {
        match Self::IS_ZST {
            true => unsafe { slice::from_raw_parts(NonNull::dangling().as_ptr(), self.len()) },
            false => unsafe { slice::from_raw_parts(self.start, self.len()) },
        }
    }

    #[inline]
    pub(super) fn next(&mut self) -> Option<T> {
        match (self.start == self.end, Self::IS_ZST) {
            (true, _) => None,
            (_, true) => unsafe {
                self.end = self.end.wrapping_byte_sub(1);
                Some(NonNull::<T>::dangling().read())
            },
            (_, false) => unsafe {
                let item = self.start.read();
                self.start = self.start.add(1);
                Some(item)
            },
        }
    }

    #[inline]
    pub(super) fn next_back(&mut self) -> Option<T> {
        match (self.start == self.end, Self::IS_ZST) {
            (true, _) => None,
            (_, true) => unsafe {
                self.end = self.end.wrapping_byte_sub(1);
                Some(NonNull::<T>::dangling().read())
            },
            (_, false) => unsafe {
                self.end = self.end.sub(1);
                Some(self.end.read())
            },
        }
    }

    #[inline]
    pub(super) fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::ManuallyDrop;

    #[test]
    fn both_ends() {
        let data = ManuallyDrop::new([String::from("a"), String::from("b"), String::from("c")]);
        let mut iter = unsafe { RawIter::new(data.as_ptr(), data.len()) };

        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.as_slice(), ["b", "c"]);
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.next().as_deref(), Some("b"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn zero_sized() {
        let data = [(); 4];
        let mut iter = unsafe { RawIter::new(data.as_ptr(), data.len()) };

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(()));
        assert_eq!(iter.next_back(), Some(()));
        assert_eq!(iter.as_slice().len(), 2);
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn empty() {
        let data: [u32; 0] = [];
        let mut iter = unsafe { RawIter::new(data.as_ptr(), 0) };

        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }
}
