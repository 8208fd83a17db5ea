//! Searching, reversing and sorting over any [`RandomAccess`] sequence.
//!
//! Predicates and comparators are plain closures. Searches that miss return
//! `None`; [`NOT_FOUND`] is provided for callers that want the numeric
//! sentinel instead (`index_of(..).unwrap_or(NOT_FOUND)`).

use std::cmp::Ordering;

use crate::range::{RandomAccess, RandomAccessMut};


/// The "not found" index.
pub const NOT_FOUND: usize = usize::MAX;

/// Returns `true` if any element satisfies `matches`. Stops at the first hit.
pub fn exists<R, F>(range: &R, mut matches: F) -> bool
where
    R: RandomAccess + ?Sized,
    F: FnMut(&R::Item) -> bool,
{
    range.as_slice().iter().any(|x| matches(x))
}

/// First element satisfying `matches`.
pub fn find<R, F>(range: &R, mut matches: F) -> Option<&R::Item>
where
    R: RandomAccess + ?Sized,
    F: FnMut(&R::Item) -> bool,
{
    range.as_slice().iter().find(|x| matches(x))
}

/// Last element satisfying `matches`, scanning back to front.
pub fn find_last<R, F>(range: &R, mut matches: F) -> Option<&R::Item>
where
    R: RandomAccess + ?Sized,
    F: FnMut(&R::Item) -> bool,
{
    range.as_slice().iter().rev().find(|x| matches(x))
}

pub fn find_index<R, F>(range: &R, matches: F) -> Option<usize>
where
    R: RandomAccess + ?Sized,
    F: FnMut(&R::Item) -> bool,
{
    range.as_slice().iter().position(matches)
}

pub fn find_last_index<R, F>(range: &R, matches: F) -> Option<usize>
where
    R: RandomAccess + ?Sized,
    F: FnMut(&R::Item) -> bool,
{
    range.as_slice().iter().rposition(matches)
}

/// Collects clones of every element satisfying `matches`, in order, into a
/// new container of type `O`.
///
/// ```
/// use anylist::{algorithms, List};
///
/// let odd: List<i32> = algorithms::find_all(&[1, 2, 3, 4, 5], |x| x % 2 == 1);
/// assert_eq!(odd, [1, 3, 5]);
/// ```
pub fn find_all<R, F, O>(range: &R, mut matches: F) -> O
where
    R: RandomAccess + ?Sized,
    R::Item: Clone,
    F: FnMut(&R::Item) -> bool,
    O: FromIterator<R::Item>,
{
    let items = range.as_slice();

    // Scratch space for the worst case, every element matching.
    let mut found = Vec::with_capacity(items.len());
    found.extend(items.iter().filter(|x| matches(x)).cloned());

    found.into_iter().collect()
}

pub fn index_of<R>(range: &R, value: &R::Item) -> Option<usize>
where
    R: RandomAccess + ?Sized,
    R::Item: PartialEq,
{
    range.as_slice().iter().position(|x| x == value)
}

pub fn last_index_of<R>(range: &R, value: &R::Item) -> Option<usize>
where
    R: RandomAccess + ?Sized,
    R::Item: PartialEq,
{
    range.as_slice().iter().rposition(|x| x == value)
}

/// Reverses the sequence in place by swapping from both ends inward.
pub fn reverse<R: RandomAccessMut + ?Sized>(range: &mut R) {
    let items = range.as_mut_slice();
    let count = items.len();

    for i in 0..count / 2 {
        items.swap(i, count - i - 1);
    }
}

/// Sorts the sequence in place in ascending order. See [`sort_by`].
#[inline]
pub fn sort<R>(range: &mut R)
where
    R: RandomAccessMut + ?Sized,
    R::Item: Ord,
{
    sort_by(range, <R::Item as Ord>::cmp)
}

/// Heap sorts the sequence in place using `compare`.
///
/// *O*(*n* log *n*) worst case, no allocation, no recursion. Not stable.
///
/// ```
/// use anylist::algorithms;
///
/// let mut words = ["pear", "fig", "banana"];
/// algorithms::sort_by(&mut words, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(words, ["fig", "pear", "banana"]);
/// ```
pub fn sort_by<R, F>(range: &mut R, mut compare: F)
where
    R: RandomAccessMut + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    let items = range.as_mut_slice();
    let mut end = items.len();
    let mut start = end / 2;

    // The first `len / 2` rounds heapify; every later round moves the
    // current maximum behind the shrinking heap.
    while end > 1 {
        if start > 0 {
            start -= 1;
        } else {
            end -= 1;
            items.swap(0, end);
        }

        let mut root = start;
        while root * 2 + 1 < end {
            let mut child = root * 2 + 1;
            if child + 1 < end && compare(&items[child], &items[child + 1]) == Ordering::Less {
                child += 1;
            }

            match compare(&items[root], &items[child]) {
                Ordering::Less => {
                    items.swap(root, child);
                    root = child;
                }
                _ => break,
            }
        }
    }
}
