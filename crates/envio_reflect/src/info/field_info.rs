use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// Besides the name and type, a field records what the engine needs to
/// decide whether and how it participates:
///
/// - `tag`: the raw `#[env("...")]` string, if any.
/// - `flatten`: set by `#[reflect(flatten)]`, the field's own fields are
///   lifted into the parent.
/// - `exported`: whether the field has any `pub` visibility.
///
/// # Examples
///
/// ```
/// use envio_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[env("FOO_LIMIT,m")]
///     pub limit: u32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field = info.field_at(0).unwrap();
///
/// assert!(field.type_is::<u32>());
/// assert_eq!(field.name(), "limit");
/// assert_eq!(field.tag(), Some("FOO_LIMIT,m"));
/// assert!(field.is_exported());
/// assert!(!field.is_flatten());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    tag: Option<&'static str>,
    flatten: bool,
    exported: bool,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a new, exported, untagged [`NamedField`] for `name` with type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            tag: None,
            flatten: false,
            exported: true,
            type_info: T::type_info,
        }
    }

    /// Attach the raw tag string.
    #[inline]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Mark the field as flattened into its parent.
    #[inline]
    pub const fn with_flatten(mut self) -> Self {
        self.flatten = true;
        self
    }

    /// Set the visibility of the field.
    #[inline]
    pub const fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the raw tag string.
    #[inline]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Returns `true` if the field is flattened into its parent.
    #[inline]
    pub const fn is_flatten(&self) -> bool {
        self.flatten
    }

    /// Returns `true` if the field is visible outside its module.
    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
