mod allocation;
mod drain;
mod into_iter;
mod raw_iter;

use std::{
    any, cmp::Ordering, fmt, marker::PhantomData, mem,
    ops::{Deref, DerefMut, Index, IndexMut, Range, RangeBounds},
    ptr::{self, NonNull},
    slice::{self, SliceIndex},
};

use log::trace;

use crate::{
    algorithms,
    errors::{AllocErr, ListError},
    range::{RandomAccess, RandomAccessMut},
};
use allocation::{allocate, deallocate, infallible, reallocate, FillGuard};
use drain::slice_range;

pub use drain::Drain;
pub use into_iter::IntoIter;


/// A contiguous growable array with explicit capacity management.
///
/// A `List` tracks how many slots it has allocated ([`capacity`](Self::capacity))
/// separately from how many hold live elements ([`count`](Self::count)).
/// Appending grows the buffer by doubling; range insertion grows it to
/// `count * 2 + added`. Search, sort and reverse delegate to the
/// [`algorithms`](crate::algorithms).
///
/// # Examples
///
/// ```
/// use anylist::List;
///
/// let mut list = List::new();
/// list.add(5);
/// list.add(3);
/// list.add(9);
///
/// assert_eq!(list.count(), 3);
/// assert_eq!(list, [5, 3, 9]);
///
/// list.sort();
/// assert_eq!(list, [3, 5, 9]);
///
/// list.insert(1, 4).unwrap();
/// assert_eq!(list.index_of(&4), Some(1));
///
/// for v in &list {
///     println!("{v}");
/// }
/// ```
///
/// # Indexing
///
/// There are three ways to reach an element, trading checks for speed:
///
/// * [`at`](Self::at) and [`at_mut`](Self::at_mut) return a [`Result`] and
///   report [`ListError::IndexOutOfRange`] on a bad index.
/// * The [`Index`] operator panics on a bad index, like a slice.
/// * [`get_unchecked`](Self::get_unchecked) does no checking at all and is
///   `unsafe`.
///
/// ```
/// use anylist::{List, ListError};
///
/// let list = List::from([1, 2, 3]);
/// assert_eq!(list[1], 2);
/// assert_eq!(list.at(5), Err(ListError::IndexOutOfRange { index: 5, len: 3 }));
/// ```
///
/// ```should_panic
/// use anylist::List;
///
/// let list = List::from([1, 2, 3]);
/// println!("{}", list[3]); // Panics!
/// ```
///
/// # Slicing
///
/// A `List` derefs to a slice, so every read-only slice method is available.
/// ```
/// use anylist::List;
///
/// fn total(slice: &[i32]) -> i32 { slice.iter().sum() }
///
/// let list = List::from([1, 2, 3]);
/// assert_eq!(total(&list), 6);
/// assert_eq!(list.first(), Some(&1));
/// ```
///
/// # Capacity
///
/// No memory is allocated until the first element arrives, and elements of
/// zero-sized types never allocate at all. The buffer is held if and only if
/// the capacity is non-zero.
///
/// ```
/// use anylist::List;
///
/// let mut list = List::new();
/// assert_eq!(list.capacity(), 0);
///
/// for i in 0..5 { list.add(i); }
/// assert_eq!(list.capacity(), 8);
///
/// list.resize(2);
/// assert_eq!(list.capacity(), 2);
/// ```
///
/// # Panic safety
///
/// Any operation that moves elements into a new buffer does so bitwise and
/// cannot fail part way. Operations that clone or pull elements from a
/// caller's iterator write them into fresh slots first; if that panics the
/// list's elements are left as they were. The exceptions are
/// [`with_len`](Self::with_len), [`resize`](Self::resize) and
/// [`clone_from`](Clone::clone_from), which keep whatever was constructed
/// before the panic.
pub struct List<T> {
    capacity: usize,
    count: usize,
    buf: Option<NonNull<T>>,
    _owns: PhantomData<T>,
}

unsafe impl<T: Send> Send for List<T> {}
unsafe impl<T: Sync> Sync for List<T> {}

impl<T> List<T> {

    /// Capacity of the first allocation made by [`add`](Self::add).
    pub const INITIAL_CAPACITY: usize = 1;

    /// Constructs a new, empty `List<T>` without allocating.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let list = List::<i32>::new();
    /// assert_eq!(list.capacity(), 0);
    /// assert!(!list.is_allocated());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { capacity: 0, count: 0, buf: None, _owns: PhantomData }
    }

    /// Constructs an empty list with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut list = Self::new();
        list.reallocate(capacity);
        list
    }

    /// Constructs a list holding a clone of every element of `range`.
    ///
    /// The capacity is exactly the length of `range`.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let list = List::from_range(&vec![1, 2, 3]);
    /// assert_eq!(list, [1, 2, 3]);
    /// assert_eq!(list.capacity(), 3);
    /// ```
    pub fn from_range<R>(range: &R) -> Self
    where
        R: RandomAccess<Item = T> + ?Sized,
        T: Clone,
    {
        let mut list = Self::with_capacity(range.as_slice().len());
        list.add_range(range);
        list
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize { self.capacity }

    /// Number of live elements.
    #[inline(always)]
    pub const fn count(&self) -> usize { self.count }

    /// Same as [`count`](Self::count).
    #[inline(always)]
    pub const fn len(&self) -> usize { self.count }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Returns `true` if the list holds a buffer, which is the case exactly
    /// when its capacity is non-zero.
    #[inline(always)]
    pub const fn is_allocated(&self) -> bool { self.buf.is_some() }

    #[inline(always)]
    const fn data_ptr(&self) -> NonNull<T> {
        match self.buf {
            Some(ptr) => ptr,
            None => NonNull::dangling(),
        }
    }

    /// Extracts a slice of the live elements.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data_ptr().as_ptr(), self.count) }
    }

    /// Extracts a mutable slice of the live elements.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data_ptr().as_ptr(), self.count) }
    }

    /// Moves the live elements into a buffer of exactly `new_capacity` slots.
    fn reallocate(&mut self, new_capacity: usize) {
        infallible(self.try_reallocate(new_capacity))
    }

    fn try_reallocate(&mut self, new_capacity: usize) -> Result<(), AllocErr> {
        debug_assert!(new_capacity >= self.count);
        if new_capacity == self.capacity { return Ok(()) }

        trace!(
            "list of `{}` reallocating from {} to {} slots",
            any::type_name::<T>(),
            self.capacity,
            new_capacity
        );

        self.buf = match (self.buf, new_capacity) {
            (None, _) => Some(allocate(new_capacity)?),
            (Some(ptr), 0) => {
                unsafe { deallocate(ptr, self.capacity) };
                None
            }
            (Some(ptr), _) => Some(unsafe { reallocate(ptr, self.capacity, new_capacity)? }),
        };
        self.capacity = new_capacity;
        Ok(())
    }

    /// Adopts `buf` once every live element has been moved into it.
    fn replace_buffer(&mut self, buf: NonNull<T>, capacity: usize) {
        trace!(
            "list of `{}` moved from {} to {} slots",
            any::type_name::<T>(),
            self.capacity,
            capacity
        );

        if let Some(old) = self.buf.replace(buf) {
            unsafe { deallocate(old, self.capacity) };
        }
        self.capacity = capacity;
    }

    #[cold]
    fn grow_one(&mut self) {
        let new_capacity = match self.capacity {
            0 => Self::INITIAL_CAPACITY,
            cap => infallible(cap.checked_mul(2).ok_or(AllocErr::Overflow)),
        };
        self.reallocate(new_capacity);
    }

    /// Appends an element to the back of the list.
    ///
    /// When the list is full its capacity doubles, starting from
    /// [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY).
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// list.add(3);
    /// assert_eq!(list, [1, 2, 3]);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes amortized *O*(1) time.
    #[inline]
    pub fn add(&mut self, value: T) {
        if self.count == self.capacity { self.grow_one() }
        unsafe { self.data_ptr().as_ptr().add(self.count).write(value) };
        self.count += 1;
    }

    /// Appends a clone of every element of `range`.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([1]);
    /// list.add_range(&[2, 3]);
    /// assert_eq!(list, [1, 2, 3]);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn add_range<R>(&mut self, range: &R)
    where
        R: RandomAccess<Item = T> + ?Sized,
        T: Clone,
    {
        let items = range.as_slice();
        self.splice_in(self.count, items.len(), items.iter().cloned());
    }

    /// Moves every item of `items` onto the back of the list.
    ///
    /// At most `items.len()` items are taken.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([String::from("a")]);
    /// list.append(vec![String::from("b"), String::from("c")]);
    /// assert_eq!(list, ["a", "b", "c"]);
    /// ```
    pub fn append<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        self.splice_in(self.count, items.len(), items);
    }

    /// Inserts an element at `index`, shifting all elements after it to the
    /// right. `index == count` appends.
    ///
    /// A full list moves into a buffer of twice the capacity, placing the new
    /// element between the moved prefix and suffix.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index > count`.
    ///
    /// # Examples
    ///
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.insert(1, 99).unwrap();
    /// assert_eq!(list, [1, 99, 2, 3]);
    ///
    /// assert!(list.insert(9, 0).is_err());
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`count - index`) time, or *O*(`count`) when it reallocates.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.count {
            return Err(ListError::IndexOutOfRange { index, len: self.count })
        }
        if index == self.count {
            self.add(value);
            return Ok(())
        }

        if self.count == self.capacity {
            let new_capacity = infallible(self.capacity.checked_mul(2).ok_or(AllocErr::Overflow));
            let dst = infallible(allocate::<T>(new_capacity));
            unsafe {
                let src = self.data_ptr().as_ptr();
                let dst = dst.as_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), self.count - index);
            }
            self.replace_buffer(dst, new_capacity);
        } else {
            unsafe {
                let at = self.data_ptr().as_ptr().add(index);
                ptr::copy(at, at.add(1), self.count - index);
                at.write(value);
            }
        }

        self.count += 1;
        Ok(())
    }

    /// Inserts a clone of every element of `range` at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index > count`.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([1, 5]);
    /// list.insert_range(1, &[2, 3, 4]).unwrap();
    /// assert_eq!(list, [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_range<R>(&mut self, index: usize, range: &R) -> Result<(), ListError>
    where
        R: RandomAccess<Item = T> + ?Sized,
        T: Clone,
    {
        if index > self.count {
            return Err(ListError::IndexOutOfRange { index, len: self.count })
        }
        let items = range.as_slice();
        self.splice_in(index, items.len(), items.iter().cloned());
        Ok(())
    }

    /// Moves every item of `items` into the list at `index`.
    ///
    /// At most `items.len()` items are taken.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index > count`.
    pub fn insert_all<I>(&mut self, index: usize, items: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        if index > self.count {
            return Err(ListError::IndexOutOfRange { index, len: self.count })
        }
        let items = items.into_iter();
        self.splice_in(index, items.len(), items);
        Ok(())
    }

    /// Writes up to `additional` items at `index`, shifting the tail up.
    ///
    /// New items land in unused slots before any live element moves, so a
    /// panic in `items` leaves the elements untouched.
    fn splice_in<I: Iterator<Item = T>>(&mut self, index: usize, additional: usize, items: I) {
        debug_assert!(index <= self.count);
        if additional == 0 { return }

        if additional > self.capacity - self.count {
            let new_capacity = infallible(
                self.count
                    .checked_mul(2)
                    .and_then(|cap| cap.checked_add(additional))
                    .ok_or(AllocErr::Overflow),
            );
            let dst = infallible(allocate::<T>(new_capacity));

            let guard = unsafe { FillGuard::new(dst.as_ptr().add(index), Some((dst, new_capacity))) };
            let written = guard.fill(items.take(additional));

            unsafe {
                let src = self.data_ptr().as_ptr();
                ptr::copy_nonoverlapping(src, dst.as_ptr(), index);
                ptr::copy_nonoverlapping(
                    src.add(index),
                    dst.as_ptr().add(index + written),
                    self.count - index,
                );
            }
            self.replace_buffer(dst, new_capacity);
            self.count += written;
        } else {
            let guard = unsafe { FillGuard::new(self.data_ptr().as_ptr().add(self.count), None) };
            let written = guard.fill(items.take(additional));

            self.count += written;
            self.as_mut_slice()[index..].rotate_right(written);
        }
    }

    /// Removes and returns the element at `index`, shifting all elements
    /// after it to the left.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= count`.
    ///
    /// # Examples
    ///
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// assert_eq!(list.remove_at(2), Ok(3));
    /// assert_eq!(list, [1, 2, 4, 5]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.count {
            return Err(ListError::IndexOutOfRange { index, len: self.count })
        }
        Ok(unsafe { self.remove_unchecked(index) })
    }

    /// # Safety
    ///
    /// `index` must be less than `count`.
    unsafe fn remove_unchecked(&mut self, index: usize) -> T {
        debug_assert!(index < self.count);
        self.count -= 1;
        unsafe {
            let at = self.data_ptr().as_ptr().add(index);
            let removed = at.read();
            ptr::copy(at.add(1), at, self.count - index);
            removed
        }
    }

    /// Moves the `len` elements at `from` down to `count` and makes them live.
    ///
    /// # Safety
    ///
    /// `from >= count`, `from + len` is within capacity, and the slots in
    /// `from..from + len` hold initialized elements nothing else owns.
    unsafe fn close_gap(&mut self, from: usize, len: usize) {
        debug_assert!(from >= self.count && from + len <= self.capacity);
        if len == 0 {
            return
        }
        if from != self.count {
            let base = self.data_ptr().as_ptr();
            unsafe { ptr::copy(base.add(from), base.add(self.count), len) }
        }
        self.count += len;
    }

    /// Drops `count` elements starting at `index` and closes the gap.
    ///
    /// # Errors
    ///
    /// [`ListError::RangeOutOfRange`] if `index + count` exceeds the list's
    /// count.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// list.remove_range(1, 3).unwrap();
    /// assert_eq!(list, [1, 5]);
    /// assert!(list.remove_range(1, 2).is_err());
    /// ```
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<(), ListError> {
        let end = index
            .checked_add(count)
            .filter(|&end| end <= self.count)
            .ok_or(ListError::RangeOutOfRange { index, count, len: self.count })?;

        drop(self.drain(index..end));
        Ok(())
    }

    /// Removes the first element equal to `value`. Returns `false` only if
    /// there is no such element.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([1, 2, 1]);
    /// assert!(list.remove(&1));
    /// assert_eq!(list, [2, 1]);
    /// assert!(!list.remove(&7));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                drop(unsafe { self.remove_unchecked(index) });
                true
            }
            None => false,
        }
    }

    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        match self.count == 0 {
            true => None,
            false => unsafe {
                self.count -= 1;
                Some(self.data_ptr().as_ptr().add(self.count).read())
            },
        }
    }

    /// Removes the given range from the list, returning its elements as an
    /// iterator. Whatever the iterator does not yield is dropped with it.
    ///
    /// # Panics
    ///
    /// If the range starts after it ends or ends past the list's count.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4]);
    /// let tail: Vec<_> = list.drain(2..).collect();
    /// assert_eq!(tail, [3, 4]);
    /// assert_eq!(list, [1, 2]);
    /// ```
    pub fn drain<R: RangeBounds<usize>>(&mut self, range: R) -> Drain<'_, T> {
        let Range { start, end } = slice_range(range, ..self.count);
        let len = self.count;

        // Shortened first so a leaked `Drain` cannot expose moved-out slots.
        self.count = start;

        let items = unsafe {
            slice::from_raw_parts(self.data_ptr().as_ptr().add(start), end - start)
        };
        Drain::new(items.iter(), end, len - end, self)
    }

    /// Drops every element. The capacity is kept.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.data_ptr().as_ptr(), self.count);
        self.count = 0;
        unsafe { ptr::drop_in_place(live) };
    }

    /// Moves the contents into a new list, leaving this one empty and
    /// unallocated.
    #[inline]
    pub fn take(&mut self) -> Self { mem::take(self) }

    /// Borrows the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= count`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, ListError> {
        let len = self.count;
        self.as_slice().get(index).ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Mutably borrows the element at `index`. Fails like [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.count;
        self.as_mut_slice().get_mut(index).ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Borrows the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`count`](Self::count). Anything else is
    /// [undefined behavior](<https://doc.rust-lang.org/reference/behavior-considered-undefined.html>).
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.count);
        unsafe { &*self.data_ptr().as_ptr().add(index) }
    }

    /// Mutably borrows the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Same as [`get_unchecked`](Self::get_unchecked).
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.count);
        unsafe { &mut *self.data_ptr().as_ptr().add(index) }
    }

    /// Returns `true` if any element satisfies `matches`.
    #[inline]
    pub fn exists<F: FnMut(&T) -> bool>(&self, matches: F) -> bool {
        algorithms::exists(self, matches)
    }

    #[inline]
    pub fn find<F: FnMut(&T) -> bool>(&self, matches: F) -> Option<&T> {
        algorithms::find(self, matches)
    }

    #[inline]
    pub fn find_last<F: FnMut(&T) -> bool>(&self, matches: F) -> Option<&T> {
        algorithms::find_last(self, matches)
    }

    #[inline]
    pub fn find_index<F: FnMut(&T) -> bool>(&self, matches: F) -> Option<usize> {
        algorithms::find_index(self, matches)
    }

    #[inline]
    pub fn find_last_index<F: FnMut(&T) -> bool>(&self, matches: F) -> Option<usize> {
        algorithms::find_last_index(self, matches)
    }

    /// Clones every element satisfying `matches` into a new list.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let list = List::from([1, 2, 3, 4]);
    /// assert_eq!(list.find_all(|x| x % 2 == 0), [2, 4]);
    /// ```
    #[inline]
    pub fn find_all<F: FnMut(&T) -> bool>(&self, matches: F) -> List<T>
    where
        T: Clone,
    {
        algorithms::find_all(self, matches)
    }

    /// Index of the first element equal to `value`.
    ///
    /// # Examples
    /// ```
    /// use anylist::{algorithms::NOT_FOUND, List};
    ///
    /// let list = List::from([10, 20, 30]);
    /// assert_eq!(list.index_of(&20), Some(1));
    /// assert_eq!(list.index_of(&99).unwrap_or(NOT_FOUND), NOT_FOUND);
    /// ```
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        algorithms::index_of(self, value)
    }

    #[inline]
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        algorithms::last_index_of(self, value)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    #[inline]
    pub fn reverse(&mut self) { algorithms::reverse(self) }

    /// Heap sorts the list in ascending order. See
    /// [`algorithms::sort_by`](crate::algorithms::sort_by).
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        algorithms::sort(self)
    }

    #[inline]
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algorithms::sort_by(self, compare)
    }

    /// Maps every element through `converter` into a new list of the same
    /// count.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let strings = list.convert_all(|x| x.to_string());
    /// assert_eq!(strings, ["1", "2", "3"]);
    /// ```
    pub fn convert_all<U, F: FnMut(&T) -> U>(&self, converter: F) -> List<U> {
        let mut out = List::with_capacity(self.count);
        out.extend(self.iter().map(converter));
        out
    }

    /// Clone-assigns every element into the front of `dst`.
    ///
    /// # Errors
    ///
    /// [`ListError::DestinationTooShort`] if `dst` is shorter than the list.
    pub fn copy_to(&self, dst: &mut [T]) -> Result<(), ListError>
    where
        T: Clone,
    {
        match dst.get_mut(..self.count) {
            Some(dst) => {
                dst.clone_from_slice(self);
                Ok(())
            }
            None => Err(ListError::DestinationTooShort {
                required: self.count,
                available: dst.len(),
            }),
        }
    }
}

impl<T: Default> List<T> {

    /// Constructs a list of `len` default values with capacity exactly `len`.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let list = List::<u8>::with_len(3);
    /// assert_eq!(list, [0, 0, 0]);
    /// assert_eq!(list.capacity(), 3);
    /// ```
    pub fn with_len(len: usize) -> Self {
        let mut list = Self::with_capacity(len);
        list.fill_default(len);
        list
    }

    fn fill_default(&mut self, len: usize) {
        while self.count < len {
            unsafe { self.data_ptr().as_ptr().add(self.count).write(T::default()) };
            self.count += 1;
        }
    }

    /// Sets the count to `len`, dropping trailing elements or appending
    /// default values. The capacity becomes exactly `len`.
    ///
    /// # Examples
    /// ```
    /// use anylist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.resize(5);
    /// assert_eq!(list, [1, 2, 3, 0, 0]);
    ///
    /// list.resize(1);
    /// assert_eq!(list, [1]);
    /// assert_eq!(list.capacity(), 1);
    /// ```
    pub fn resize(&mut self, len: usize) {
        if len < self.count {
            let tail = unsafe {
                ptr::slice_from_raw_parts_mut(self.data_ptr().as_ptr().add(len), self.count - len)
            };
            self.count = len;
            unsafe { ptr::drop_in_place(tail) };
        }
        self.reallocate(len);
        self.fill_default(len);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
        if let Some(buf) = self.buf {
            trace!("list of `{}` freeing {} slots", any::type_name::<T>(), self.capacity);
            unsafe { deallocate(buf, self.capacity) };
        }
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self { Self::from_range(self) }

    /// Reuses the buffer when it can hold every element of `source`;
    /// otherwise reallocates to exactly `source.count()` slots.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if self.capacity < source.count {
            self.reallocate(source.count);
        }
        self.add_range(source);
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T> Deref for List<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target { self.as_slice() }
}

impl<T> DerefMut for List<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target { self.as_mut_slice() }
}

impl<T, I: SliceIndex<[T]>> Index<I> for List<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output { Index::index(self.as_slice(), index) }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for List<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, U> PartialEq<List<U>> for List<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &List<U>) -> bool {
        self.count == other.count && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for List<T> {
    fn eq(&self, other: &[U; N]) -> bool { self.as_slice() == other }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<&[U; N]> for List<T> {
    fn eq(&self, other: &&[U; N]) -> bool { self.as_slice() == *other }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for List<T> {
    fn eq(&self, other: &[U]) -> bool { self.as_slice() == other }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for List<T> {
    fn eq(&self, other: &&[U]) -> bool { self.as_slice() == *other }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for List<T> {
    fn eq(&self, other: &Vec<U>) -> bool { self.as_slice() == other.as_slice() }
}

#[cfg(not(tarpaulin_include))]
impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> RandomAccess for List<T> {
    type Item = T;
    #[inline]
    fn as_slice(&self) -> &[T] { List::as_slice(self) }
}

impl<T> RandomAccessMut for List<T> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] { List::as_mut_slice(self) }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { IntoIter::new(self) }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        items.into_iter().for_each(|item| self.add(item));
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items = items.into_iter();
        let mut list = Self::with_capacity(items.size_hint().0);
        list.extend(items);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(items: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.append(items);
        list
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        let mut list = Self::with_capacity(items.len());
        list.append(items);
        list
    }
}

impl<T: Clone> From<&[T]> for List<T> {
    #[inline]
    fn from(items: &[T]) -> Self { Self::from_range(items) }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(list: List<T>) -> Self { list.into_iter().collect() }
}
