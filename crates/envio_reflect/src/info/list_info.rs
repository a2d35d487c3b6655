use crate::info::{Type, TypeInfo, Typed, impl_traits_fn, impl_type_fn};
use crate::ops::List;
use crate::registry::TypeTraits;

/// A container for compile-time list info, e.g. `Vec<bool>`.
#[derive(Debug, Clone)]
pub struct ListInfo {
    ty: Type,
    item: fn() -> &'static TypeInfo,
    traits: TypeTraits,
}

impl ListInfo {
    impl_type_fn!(ty);
    impl_traits_fn!(traits);

    /// Create a new [`ListInfo`] for `T` holding items of type `I`.
    #[inline]
    pub fn new<T: List, I: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            item: I::type_info,
            traits: TypeTraits::new(),
        }
    }

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item(&self) -> &'static TypeInfo {
        (self.item)()
    }
}
