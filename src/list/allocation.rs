use std::{alloc::{self, Layout}, mem, ptr::{self, NonNull}};

use crate::errors::AllocErr;


#[inline]
pub(super) fn infallible<T>(result: Result<T, AllocErr>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocErr::Layout) => panic!("invalid parameters to Layout::from_size_align"),
        Err(AllocErr::Overflow) => panic!("capacity overflow"),
        Err(AllocErr::Alloc { layout }) => alloc::handle_alloc_error(layout),
    }
}

#[inline]
pub(super) fn layout_array<T>(n: usize) -> Result<Layout, AllocErr> {

    let size = mem::size_of::<T>()
        .checked_mul(n)
        .ok_or(AllocErr::Overflow)?;

    let align = mem::align_of::<T>();

    Layout::from_size_align(size, align).map_err(AllocErr::layout)
}

/// Allocates uninitialized space for `cap` elements.
///
/// Zero-sized requests never reach the allocator and yield a dangling pointer.
pub(super) fn allocate<T>(cap: usize) -> Result<NonNull<T>, AllocErr> {
    let layout = layout_array::<T>(cap)?;
    if layout.size() == 0 { return Ok(NonNull::dangling()) }

    NonNull::new(unsafe { alloc::alloc(layout) })
        .map(NonNull::cast)
        .ok_or(AllocErr::alloc(layout))
}

/// # Safety
///
/// `ptr` must come from [`allocate`] or [`reallocate`] with the same `cap`.
pub(super) unsafe fn deallocate<T>(ptr: NonNull<T>, cap: usize) {
    let Ok(layout) = layout_array::<T>(cap) else { return };
    if layout.size() == 0 { return }

    unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) };
}

/// Resizes the block at `ptr` from `old_cap` to `new_cap` elements, keeping
/// the leading `min(old_cap, new_cap)` slots' bytes.
///
/// # Safety
///
/// `ptr` must come from [`allocate`] or [`reallocate`] with `old_cap`. On
/// success the old pointer is invalid.
pub(super) unsafe fn reallocate<T>(
    ptr: NonNull<T>,
    old_cap: usize,
    new_cap: usize,
) -> Result<NonNull<T>, AllocErr> {
    let prev_layout = layout_array::<T>(old_cap)?;
    let layout = layout_array::<T>(new_cap)?;

    match (prev_layout.size(), layout.size()) {
        (0, _) => allocate(new_cap),
        (_, 0) => {
            unsafe { deallocate(ptr, old_cap) };
            Ok(NonNull::dangling())
        }
        _ => {
            let ptr = unsafe { alloc::realloc(ptr.as_ptr().cast(), prev_layout, layout.size()) };
            NonNull::new(ptr)
                .map(NonNull::cast)
                .ok_or(AllocErr::alloc(layout))
        }
    }
}


/// Writes items into consecutive uninitialized slots.
///
/// If writing is cut short by a panic, the slots written so far are dropped
/// and the owned block, if any, is freed.
pub(super) struct FillGuard<T> {
    dst: *mut T,
    written: usize,
    owned: Option<(NonNull<T>, usize)>,
}

impl<T> FillGuard<T> {

    /// # Safety
    ///
    /// `dst` must be valid for writes of as many items as will be filled.
    /// `owned` names the block `dst` points into when the guard must free it
    /// on unwind.
    #[inline]
    pub(super) unsafe fn new(dst: *mut T, owned: Option<(NonNull<T>, usize)>) -> Self {
        Self { dst, written: 0, owned }
    }

    /// Writes every item and returns how many were written.
    pub(super) fn fill<I: Iterator<Item = T>>(mut self, items: I) -> usize {
        for item in items {
            unsafe { self.dst.add(self.written).write(item) };
            self.written += 1;
        }

        let written = self.written;
        mem::forget(self);
        written
    }
}

impl<T> Drop for FillGuard<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.dst, self.written)) };
        if let Some((block, cap)) = self.owned {
            unsafe { deallocate(block, cap) };
        }
    }
}
