use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::{DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The value-access trait the engine walks.
///
/// `Reflect` extends [`DynamicTyped`], so every value can report its
/// [`TypeInfo`](crate::info::TypeInfo), and exposes a kind-specific view
/// through [`reflect_ref`] and [`reflect_mut`].
///
/// # Recommendations
///
/// Use [the derive macro](crate::derive::Reflect). It implements this trait
/// together with [`Typed`](crate::info::Typed) and, for records,
/// [`Struct`](crate::ops::Struct).
///
/// # Type Identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` returns the id of the box.
/// Use [`Reflect::ty_id`] instead:
///
/// ```
/// use envio_reflect::Reflect;
/// use core::any::TypeId;
///
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
/// assert_eq!(x.ty_id(), TypeId::of::<i32>());
/// assert_eq!(x.downcast_ref::<i32>(), Some(&32));
/// ```
///
/// # Zero Value
///
/// [`reflect_is_zero`] decides whether a value counts as "unset": numbers
/// equal to `0`, `false`, empty strings and lists, `None`, nil interfaces,
/// and records whose fields are all zero.
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`reflect_is_zero`]: Reflect::reflect_is_zero
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the structural kind, same as `reflect_type_info().kind()`.
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_type_info().kind()
    }

    /// Returns an immutable kind-specific view.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable kind-specific view.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns `true` if the value is the zero value of its type.
    fn reflect_is_zero(&self) -> bool;
}

// -----------------------------------------------------------------------------
// Casting

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Upcasts to `&dyn Any`.
    #[inline]
    pub fn as_any(&self) -> &dyn Any {
        self
    }

    /// Upcasts to `&mut dyn Any`.
    #[inline]
    pub fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    /// Upcasts to `Box<dyn Any>`.
    #[inline]
    pub fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Downcasts the value to type `T`, handing the box back on failure.
    pub fn downcast<T: Any>(self: Box<Self>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            // The check above makes the second branch unreachable.
            match self.into_any().downcast::<T>() {
                Ok(value) => Ok(value),
                Err(_) => unreachable!(),
            }
        } else {
            Err(self)
        }
    }
}
