use std::alloc::{Layout, LayoutError};

use thiserror::Error;


/// Errors returned by the bounds-checked operations of [`List`](crate::List).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index or insertion point lies past the end of the list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// `index + count` lies past the end of the list (or overflows).
    #[error("range of {count} elements at {index} out of range for list of length {len}")]
    RangeOutOfRange { index: usize, count: usize, len: usize },

    /// A destination slice cannot hold every element of the list.
    #[error("destination holds {available} elements but {required} are required")]
    DestinationTooShort { required: usize, available: usize },
}

/// Errors returned when reading a value out of an [`AnyBox`](crate::AnyBox).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnyError {
    #[error("Attempted to get the value of an empty object.")]
    Empty,

    /// `expected` is the requested type, `found` the held one. Both are
    /// informational only.
    #[error("Attempted to convert a value to an incompatible or unpermitted target type. (expected `{expected}`, found `{found}`)")]
    BadCast { expected: &'static str, found: &'static str },
}

#[derive(Debug, Clone, Error)]
pub(crate) enum AllocErr {
    #[error("capacity overflow")]
    Overflow,
    #[error("invalid parameters to Layout::from_size_align")]
    Layout,
    #[error("allocation of {layout:?} failed")]
    Alloc { layout: Layout }
}

impl AllocErr {
    #[inline]
    pub(crate) const fn layout(_err: LayoutError) -> Self { Self::Layout }

    #[inline]
    pub(crate) const fn alloc(layout: Layout) -> Self { Self::Alloc { layout } }
}
