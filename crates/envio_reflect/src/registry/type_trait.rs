use alloc::sync::Arc;
use core::any::{Any, TypeId};
use core::fmt;

use envio_utils::TypeIdMap;

// -----------------------------------------------------------------------------
// TypeTrait

/// A capability that can be stored in a [`TypeTraits`] table.
///
/// Implementors are small function tables, usually built with
/// [`FromType`](crate::registry::FromType).
pub trait TypeTrait: Any + Send + Sync {}

impl dyn TypeTrait {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: TypeTrait>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: TypeTrait>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

// -----------------------------------------------------------------------------
// TypeTraits

/// A table of [`TypeTrait`]s, keyed by the trait's own [`TypeId`].
///
/// Entries are reference counted, so cloning a [`TypeInfo`] (as
/// transparent wrappers do) does not copy the capability data.
///
/// # Examples
///
/// ```
/// use envio_reflect::registry::{TypeTrait, TypeTraits};
///
/// struct Marker(u32);
/// impl TypeTrait for Marker {}
///
/// let mut traits = TypeTraits::new();
/// assert!(traits.is_empty());
///
/// traits.insert(Marker(7));
/// assert_eq!(traits.get::<Marker>().map(|m| m.0), Some(7));
/// ```
///
/// [`TypeInfo`]: crate::info::TypeInfo
#[derive(Clone, Default)]
pub struct TypeTraits(TypeIdMap<Arc<dyn TypeTrait>>);

impl TypeTraits {
    /// Creates an empty table.
    #[inline]
    pub const fn new() -> Self {
        Self(TypeIdMap::new())
    }

    /// Insert a [`TypeTrait`], replacing the previous one of the same type.
    #[inline]
    pub fn insert<T: TypeTrait>(&mut self, data: T) {
        self.insert_by_id(TypeId::of::<T>(), Arc::new(data));
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn insert_by_id(&mut self, id: TypeId, data: Arc<dyn TypeTrait>) {
        self.0.insert(id, data);
    }

    /// Get a [`TypeTrait`] reference, or return `None` if it does not exist.
    #[inline]
    pub fn get<T: TypeTrait>(&self) -> Option<&T> {
        self.0
            .get(&TypeId::of::<T>())
            .and_then(|data| <dyn TypeTrait>::downcast_ref(&**data))
    }

    /// Return `true` if the specific [`TypeTrait`] exists.
    #[inline]
    pub fn contains<T: TypeTrait>(&self) -> bool {
        self.0.contains(&TypeId::of::<T>())
    }

    /// Returns the number of stored traits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no trait is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for TypeTraits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeTraits")
            .field("len", &self.0.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
