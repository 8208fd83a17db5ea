use std::{
    any::{self, TypeId},
    collections::{hash_map::Entry, HashMap},
    fmt,
    ptr,
    sync::{atomic::{AtomicU64, Ordering}, OnceLock, PoisonError, RwLock},
};

use log::debug;


/// A process-lifetime identity token for a single static type.
///
/// Tokens are created lazily the first time [`TypeTag::of`] is called for a
/// type and are never freed. Two tokens are equal only if they are the *same*
/// token, i.e. they were produced for the same type.
///
/// ```
/// use anylist::TypeTag;
///
/// assert_eq!(TypeTag::of::<i32>(), TypeTag::of::<i32>());
/// assert_ne!(TypeTag::of::<i32>(), TypeTag::of::<u32>());
/// ```
pub struct TypeTag {
    id: u64,
    name: &'static str,
}

/// Stands in for the held type of an empty box. Uninhabited, so no value can
/// ever carry this tag.
enum Void {}

type Registry = RwLock<HashMap<TypeId, &'static TypeTag>>;

pub(crate) fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

impl TypeTag {

    /// Returns the token of `T`, registering it on first use.
    ///
    /// Known types only take the registry's read lock. No lock is held while
    /// a registration is logged, so a logger may itself ask for tags.
    pub fn of<T: ?Sized + 'static>() -> &'static TypeTag {
        let key = TypeId::of::<T>();

        let known = registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied();
        if let Some(tag) = known {
            return tag
        }

        // Check and insert under one write lock so racing first uses share
        // a single leaked token.
        let registered = match registry()
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
        {
            Entry::Occupied(entry) => return *entry.get(),
            Entry::Vacant(entry) => {
                let tag: &'static TypeTag = Box::leak(Box::new(TypeTag {
                    id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
                    name: any::type_name::<T>(),
                }));
                *entry.insert(tag)
            }
        };

        debug!("registered type tag {} for `{}`", registered.id, registered.name);
        registered
    }

    /// The token reported by an empty [`AnyBox`](crate::AnyBox).
    #[inline]
    pub fn empty() -> &'static TypeTag { Self::of::<Void>() }

    /// Registration-order id of this token. Unique per type within a process.
    #[inline]
    pub const fn id(&self) -> u64 { self.id }

    /// Name of the type, for diagnostics only.
    #[inline]
    pub const fn name(&self) -> &'static str { self.name }
}

impl PartialEq for TypeTag {
    #[inline]
    fn eq(&self, other: &Self) -> bool { ptr::eq(self, other) }
}

impl Eq for TypeTag {}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeTag")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
