use std::{fmt, iter::FusedIterator, marker::PhantomData, ops, ptr::{self, NonNull}, slice};

use super::List;


/// Moves an element out from behind a shared reference into the drained range.
#[inline]
const fn take_item<T>(slot: &T) -> T { unsafe { ptr::read(slot) } }


/// Resolves `range` against `..len`.
///
/// # Panics
///
/// If the range starts after it ends or ends past `len`.
#[inline]
pub(super) fn slice_range<R>(range: R, bounds: ops::RangeTo<usize>) -> ops::Range<usize>
where
    R: ops::RangeBounds<usize>,
{
    let len = bounds.end;

    let start = match range.start_bound() {
        ops::Bound::Included(&start) => start,
        ops::Bound::Excluded(start) => start.checked_add(1)
            .unwrap_or_else(|| panic!("attempted to index list from after maximum usize")),
        ops::Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        ops::Bound::Included(end) => end.checked_add(1)
            .unwrap_or_else(|| panic!("attempted to index list up to maximum usize")),
        ops::Bound::Excluded(&end) => end,
        ops::Bound::Unbounded => len,
    };

    if start > end {
        panic!("list index starts at {start} but ends at {end}")
    }

    if end > len {
        panic!("range end index {end} out of range for list of length {len}")
    }

    ops::Range { start, end }
}


/// A draining iterator over a range of a [`List`], created by
/// [`List::drain`].
///
/// Elements not yielded are dropped with the iterator, after which the tail
/// is moved down to close the gap.
pub struct Drain<'a, T> {
    tail_start: usize,
    tail_len: usize,
    iter: slice::Iter<'a, T>,
    list: NonNull<List<T>>,
    _list: PhantomData<&'a mut List<T>>,
}

impl<'a, T> Drain<'a, T> {
    #[inline]
    pub(super) fn new(
        iter: slice::Iter<'a, T>,
        tail_start: usize,
        tail_len: usize,
        list: &'a mut List<T>,
    ) -> Self {
        Self { tail_start, tail_len, iter, list: NonNull::from(list), _list: PhantomData }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] { self.iter.as_slice() }
}

#[cfg(not(tarpaulin_include))]
impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.iter.as_slice()).finish()
    }
}

unsafe impl<T: Sync> Sync for Drain<'_, T> {}
unsafe impl<T: Send> Send for Drain<'_, T> {}

// Yielded elements are read out of the list's buffer; the slots they leave
// are outside `count` until `close_gap` runs on drop.
impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> { self.iter.next().map(take_item) }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> { self.iter.next_back().map(take_item) }
}

impl<T> ExactSizeIterator for Drain<'_, T> {
    #[inline]
    fn len(&self) -> usize { self.iter.len() }
}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.by_ref().for_each(drop);
        unsafe { self.list.as_mut().close_gap(self.tail_start, self.tail_len) }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::{panic, rc::Rc};

    #[test]
    fn slice_range_() {

        // unbounded start, unbounded end
        assert_eq!(slice_range(.., ..10), 0..10);

        // bounded start, excluded end
        assert_eq!(slice_range(1..5, ..10), 1..5);

        // bounded start, included end
        assert_eq!(slice_range(1..=5, ..10), 1..6);

        // excluded start
        let bounds = (ops::Bound::Excluded(2), ops::Bound::Unbounded);
        assert_eq!(slice_range(bounds, ..10), 3..10);

        // start is greater than end
        assert!(panic::catch_unwind(|| slice_range(5..0, ..10)).is_err());

        // end is greater than limit
        assert!(panic::catch_unwind(|| slice_range(0..11, ..10)).is_err());
    }

    #[test]
    fn drain_len() {
        let mut list = List::from([1, 2, 3]);
        let mut drain = list.drain(..);

        assert_eq!(drain.len(), 3);
        let _ = drain.next();
        assert_eq!(drain.len(), 2);
        assert_eq!(drain.as_slice(), [2, 3]);
    }

    #[test]
    fn drain_middle() {
        let mut list = List::from([1, 2, 3, 4, 5]);
        let drained: Vec<_> = list.drain(1..3).collect();

        assert_eq!(drained, [2, 3]);
        assert_eq!(list, [1, 4, 5]);
        assert_eq!(list.capacity(), 5);
    }

    #[test]
    fn drain_back_to_front() {
        let mut list = List::from([1, 2, 3, 4]);
        let drained: Vec<_> = list.drain(2..).rev().collect();

        assert_eq!(drained, [4, 3]);
        assert_eq!(list, [1, 2]);
    }

    #[test]
    fn dropped_early() {
        let shared = Rc::new(());
        let mut list: List<_> = (0..6).map(|_| Rc::clone(&shared)).collect();

        let mut drain = list.drain(1..4);
        let kept = drain.next();
        drop(drain);

        assert_eq!(list.len(), 3);
        assert_eq!(Rc::strong_count(&shared), 5);
        drop(kept);
        drop(list);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn leaked_drain_shortens() {
        let mut list = List::from([1, 2, 3, 4]);
        std::mem::forget(list.drain(1..));
        assert_eq!(list, [1]);
    }
}
