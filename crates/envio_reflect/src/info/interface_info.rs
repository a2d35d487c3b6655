use crate::Reflect;
use crate::info::{Type, impl_traits_fn, impl_type_fn};
use crate::registry::TypeTraits;

/// Metadata for dynamically typed slots, see [`Interface`](crate::ops::Interface).
///
/// The concrete type is only known from the value, so there is nothing
/// else to describe.
#[derive(Debug, Clone)]
pub struct InterfaceInfo {
    ty: Type,
    traits: TypeTraits,
}

impl InterfaceInfo {
    impl_type_fn!(ty);
    impl_traits_fn!(traits);

    /// Create a new [`InterfaceInfo`].
    #[inline]
    pub fn new<T: Reflect>() -> Self {
        Self {
            ty: Type::of::<T>(),
            traits: TypeTraits::new(),
        }
    }
}
