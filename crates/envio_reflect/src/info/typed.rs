use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Manually Impl
///
/// Store the info in a [`NonGenericTypeInfoCell`] (or a
/// [`GenericTypeInfoCell`] for generic types) so it is built once:
///
/// ```
/// use envio_reflect::{
///     Reflect,
///     info::{Typed, TypeInfo, OpaqueInfo},
///     impls::NonGenericTypeInfoCell,
///     ops::{ReflectRef, ReflectMut},
/// };
///
/// struct Token([u8; 32]);
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// impl Reflect for Token {
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
///     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Opaque(self) }
///     fn reflect_is_zero(&self) -> bool { self.0 == [0; 32] }
/// }
///
/// assert!(Token::type_info().type_is::<Token>());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Implemented for every `T: Typed`, and a supertrait of
/// [`Reflect`](crate::Reflect).
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
