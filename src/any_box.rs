use std::{
    any::{self, Any},
    fmt,
    mem,
};

use log::trace;

use crate::{errors::AnyError, TypeTag};


/// Capabilities every storage cell provides, whatever it holds.
trait ValueStorage: Any {
    /// Clone-assigns this cell's value into `dst`, reusing `dst`'s value.
    fn assign_copy_to(&self, dst: &mut dyn ValueStorage);
    fn create_copy(&self) -> Box<dyn ValueStorage>;
    fn type_tag(&self) -> &'static TypeTag;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

struct Cell<T> {
    tag: &'static TypeTag,
    value: T,
}

impl<T: Clone + 'static> Cell<T> {
    #[inline]
    fn boxed(value: T) -> Box<dyn ValueStorage> {
        Box::new(Self { tag: TypeTag::of::<T>(), value })
    }
}

impl<T: Clone + 'static> ValueStorage for Cell<T> {
    fn assign_copy_to(&self, dst: &mut dyn ValueStorage) {
        let found = dst.type_tag().name();
        match dst.as_any_mut().downcast_mut::<Self>() {
            Some(dst) => dst.value.clone_from(&self.value),
            None => unreachable!(
                "copy-assign from a `{}` cell into a `{}` cell",
                self.tag.name(),
                found
            ),
        }
    }

    fn create_copy(&self) -> Box<dyn ValueStorage> {
        Box::new(Self { tag: self.tag, value: self.value.clone() })
    }

    #[inline]
    fn type_tag(&self) -> &'static TypeTag { self.tag }

    #[inline]
    fn as_any(&self) -> &dyn Any { self }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any { self }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> { self }
}

fn bad_cast<T>(cell: &dyn ValueStorage) -> AnyError {
    AnyError::BadCast {
        expected: any::type_name::<T>(),
        found: cell.type_tag().name(),
    }
}


/// An owning box for a single value of any `Clone + 'static` type.
///
/// The held type is fixed by the static type at the point of construction or
/// assignment, and reported as a [`TypeTag`]. Reads name the type they expect
/// and are checked against the held type.
///
/// # Examples
///
/// ```
/// use anylist::{AnyBox, AnyError};
///
/// let mut value = AnyBox::new(42i32);
/// assert_eq!(value.get::<i32>(), Ok(&42));
///
/// value.assign(String::from("x"));
/// assert!(matches!(value.get::<i32>(), Err(AnyError::BadCast { .. })));
/// assert_eq!(value.release::<String>().unwrap(), "x");
/// assert!(value.is_empty());
/// ```
#[derive(Default)]
pub struct AnyBox {
    cell: Option<Box<dyn ValueStorage>>,
}

impl AnyBox {

    /// Creates a box holding nothing.
    #[inline]
    pub const fn empty() -> Self { Self { cell: None } }

    /// Creates a box holding `value`.
    #[inline]
    pub fn new<T: Clone + 'static>(value: T) -> Self {
        Self { cell: Some(Cell::boxed(value)) }
    }

    /// Tag of the held type, or [`TypeTag::empty`] when nothing is held.
    #[inline]
    pub fn current_type(&self) -> &'static TypeTag {
        match &self.cell {
            Some(cell) => cell.type_tag(),
            None => TypeTag::empty(),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.cell.is_none() }

    /// Returns `true` if the box holds a `T`.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.cell.as_ref().is_some_and(|cell| cell.as_any().is::<Cell<T>>())
    }

    /// Borrows the held value as a `T`.
    ///
    /// Reads compare the cell's own type id and never touch the tag registry.
    ///
    /// # Errors
    ///
    /// [`AnyError::Empty`] if nothing is held, [`AnyError::BadCast`] if the
    /// held value is not a `T`.
    pub fn get<T: 'static>(&self) -> Result<&T, AnyError> {
        let cell = self.cell.as_deref().ok_or(AnyError::Empty)?;
        cell.as_any()
            .downcast_ref::<Cell<T>>()
            .map(|cell| &cell.value)
            .ok_or_else(|| bad_cast::<T>(cell))
    }

    /// Mutably borrows the held value as a `T`. Fails like [`get`](Self::get).
    pub fn get_mut<T: 'static>(&mut self) -> Result<&mut T, AnyError> {
        let cell = self.cell.as_deref_mut().ok_or(AnyError::Empty)?;
        let err = bad_cast::<T>(cell);
        cell.as_any_mut()
            .downcast_mut::<Cell<T>>()
            .map(|cell| &mut cell.value)
            .ok_or(err)
    }

    /// Returns a copy of the held value as a `T`. Fails like [`get`](Self::get).
    #[inline]
    pub fn cast<T: Clone + 'static>(&self) -> Result<T, AnyError> {
        self.get::<T>().cloned()
    }

    /// Moves the held value out as a `T`, leaving the box empty.
    ///
    /// On error the box is left untouched.
    pub fn release<T: 'static>(&mut self) -> Result<T, AnyError> {
        self.get::<T>()?;
        match self.cell.take().map(|cell| cell.into_any()) {
            Some(cell) => match cell.downcast::<Cell<T>>() {
                Ok(cell) => Ok(cell.value),
                Err(_) => unreachable!("cell changed type between check and release"),
            },
            None => Err(AnyError::Empty),
        }
    }

    /// Stores `value`.
    ///
    /// If a value of the same type is already held it is overwritten in place
    /// and its cell reused; otherwise the old cell is dropped and a new one
    /// allocated.
    pub fn assign<T: Clone + 'static>(&mut self, value: T) -> &mut Self {
        match self.get_mut::<T>() {
            Ok(held) => *held = value,
            Err(_) => {
                if let Some(old) = &self.cell {
                    trace!(
                        "any box changes type from `{}` to `{}`",
                        old.type_tag().name(),
                        any::type_name::<T>()
                    );
                }
                self.cell = Some(Cell::boxed(value));
            }
        }
        self
    }

    /// Drops the held value, if any.
    #[inline]
    pub fn reset(&mut self) { self.cell = None; }

    /// Moves the contents into a new box, leaving this one empty.
    #[inline]
    pub fn take(&mut self) -> Self { mem::take(self) }
}

impl Clone for AnyBox {
    fn clone(&self) -> Self {
        Self { cell: self.cell.as_ref().map(|cell| cell.create_copy()) }
    }

    /// Copy-assigns from `source`, reusing the current cell when both hold the
    /// same type.
    fn clone_from(&mut self, source: &Self) {
        match (&mut self.cell, &source.cell) {
            (Some(dst), Some(src)) if dst.type_tag() == src.type_tag() => {
                src.assign_copy_to(&mut **dst)
            }
            (dst, src) => *dst = src.as_ref().map(|cell| cell.create_copy()),
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for AnyBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cell {
            Some(cell) => f.debug_tuple("AnyBox").field(&cell.type_tag().name()).finish(),
            None => f.write_str("AnyBox(<empty>)"),
        }
    }
}
