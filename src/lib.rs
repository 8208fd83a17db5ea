//! Contiguous containers with explicit storage control, and a type-tagged
//! value box.
//!
//! * [`List`] is a growable array that keeps its allocated capacity apart
//!   from its live count.
//! * [`AnyBox`] owns one value of any `Clone + 'static` type and checks every
//!   read against the [`TypeTag`] it was stored with.
//! * [`algorithms`] holds searching, reversing and heap sorting over anything
//!   implementing [`RandomAccess`].
//! * [`IterWrapper`] hands a borrowed pointer range to code expecting a
//!   [`RandomAccess`] sequence.
//!
//! ```
//! use anylist::{AnyBox, List};
//!
//! let mut list: List<AnyBox> = List::new();
//! list.add(AnyBox::new(1u8));
//! list.add(AnyBox::new("two"));
//!
//! assert_eq!(list[0].get::<u8>(), Ok(&1));
//! assert!(list[1].get::<u8>().is_err());
//! ```

mod any_box;
mod iter_wrapper;
mod list;
mod range;
mod type_tag;

pub(crate) mod errors;
pub mod algorithms;

pub use any_box::AnyBox;
pub use errors::{AnyError, ListError};
pub use iter_wrapper::IterWrapper;
pub use list::{Drain, IntoIter, List};
pub use range::{RandomAccess, RandomAccessMut};
pub use type_tag::TypeTag;
