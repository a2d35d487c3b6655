use crate::info::{Type, TypeInfo, Typed, impl_traits_fn, impl_type_fn};
use crate::ops::Array;
use crate::registry::TypeTraits;

/// A container for compile-time array info, e.g. `[i32; 5]`.
///
/// # Examples
///
/// ```
/// use envio_reflect::info::Typed;
///
/// let info = <[i32; 5]>::type_info().as_array().unwrap();
/// assert_eq!(info.capacity(), 5);
/// assert!(info.item().type_is::<i32>());
/// ```
#[derive(Debug, Clone)]
pub struct ArrayInfo {
    ty: Type,
    item: fn() -> &'static TypeInfo,
    capacity: usize,
    traits: TypeTraits,
}

impl ArrayInfo {
    impl_type_fn!(ty);
    impl_traits_fn!(traits);

    /// Create a new [`ArrayInfo`] for `T` holding `capacity` items of type `I`.
    #[inline]
    pub fn new<T: Array, I: Typed>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<T>(),
            item: I::type_info,
            capacity,
            traits: TypeTraits::new(),
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item(&self) -> &'static TypeInfo {
        (self.item)()
    }
}
