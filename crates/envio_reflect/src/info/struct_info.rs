use alloc::boxed::Box;

use crate::info::{NamedField, Type, impl_traits_fn, impl_type_fn};
use crate::ops::Struct;
use crate::registry::TypeTraits;

/// A container for compile-time named struct info.
///
/// Fields are kept in declaration order. Fields marked `#[reflect(ignore)]`
/// are absent; private fields are present but not exported.
///
/// # Examples
///
/// ```rust
/// use envio_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     pub val: f32,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.name(), "A");
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    name: &'static str,
    fields: Box<[NamedField]>,
    traits: TypeTraits,
}

impl StructInfo {
    impl_type_fn!(ty);
    impl_traits_fn!(traits);

    /// Create a new [`StructInfo`].
    ///
    /// `name` is the bare struct identifier, used when reporting errors.
    /// The order of fields depends on the input order.
    pub fn new<T: Struct>(name: &'static str, fields: &[NamedField]) -> Self {
        Self {
            ty: Type::of::<T>(),
            name,
            fields: fields.into(),
            traits: TypeTraits::new(),
        }
    }

    /// Returns the struct identifier.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the index for the given field `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
