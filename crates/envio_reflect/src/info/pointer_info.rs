use crate::info::{Type, TypeInfo, Typed, impl_traits_fn, impl_type_fn};
use crate::ops::Pointer;
use crate::registry::TypeTraits;

/// Metadata for nullable indirections such as `Option<T>`.
#[derive(Debug, Clone)]
pub struct PointerInfo {
    ty: Type,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    pointee: fn() -> &'static TypeInfo,
    traits: TypeTraits,
}

impl PointerInfo {
    impl_type_fn!(ty);
    impl_traits_fn!(traits);

    /// Create a new [`PointerInfo`] for `T` pointing at `P`.
    #[inline]
    pub fn new<T: Pointer, P: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            pointee: P::type_info,
            traits: TypeTraits::new(),
        }
    }

    /// Returns the [`TypeInfo`] of the pointee.
    #[inline]
    pub fn pointee(&self) -> &'static TypeInfo {
        (self.pointee)()
    }
}
