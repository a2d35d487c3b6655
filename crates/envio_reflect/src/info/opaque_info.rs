use crate::Reflect;
use crate::info::{Type, impl_traits_fn, impl_type_fn};
use crate::registry::TypeTraits;

/// Metadata for types whose internals are not visible to reflection.
///
/// The engine cannot marshal an opaque type on its own. It only works when
/// the trait table carries one of the capabilities, e.g.
/// [`TypeTraitEnvDecode`](crate::registry::TypeTraitEnvDecode).
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
    traits: TypeTraits,
}

impl OpaqueInfo {
    impl_type_fn!(ty);
    impl_traits_fn!(traits);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: Reflect>() -> Self {
        Self {
            ty: Type::of::<T>(),
            traits: TypeTraits::new(),
        }
    }
}
