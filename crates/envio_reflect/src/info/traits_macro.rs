/// Implement `traits`, `get_trait`, `has_trait` and `with_trait` for an info
/// struct holding a `traits: TypeTraits` field.
macro_rules! impl_traits_fn {
    ($field:ident) => {
        /// Returns the [`TypeTraits`](crate::registry::TypeTraits) table of the type.
        #[inline]
        pub const fn traits(&self) -> &$crate::registry::TypeTraits {
            &self.$field
        }

        /// Get a [`TypeTrait`](crate::registry::TypeTrait) reference,
        /// or return `None` if it does not exist.
        #[inline]
        pub fn get_trait<T: $crate::registry::TypeTrait>(&self) -> Option<&T> {
            self.$field.get::<T>()
        }

        /// Return `true` if the specific [`TypeTrait`](crate::registry::TypeTrait) exists.
        #[inline]
        pub fn has_trait<T: $crate::registry::TypeTrait>(&self) -> bool {
            self.$field.contains::<T>()
        }

        /// Insert a [`TypeTrait`](crate::registry::TypeTrait), replacing the previous
        /// one of the same type.
        #[inline]
        pub fn with_trait<T: $crate::registry::TypeTrait>(mut self, data: T) -> Self {
            self.$field.insert(data);
            self
        }

        // Same shape under another type identity, without its traits.
        pub(crate) fn retype(mut self, ty: $crate::info::Type) -> Self {
            self.ty = ty;
            self.$field = $crate::registry::TypeTraits::new();
            self
        }
    };
}

pub(crate) use impl_traits_fn;
