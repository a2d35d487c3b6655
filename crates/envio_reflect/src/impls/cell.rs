//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! ## NonGenericTypeInfoCell
//!
//! For non generic types. Internally an [`OnceLock`], almost no additional expenses.
//!
//! ## GenericTypeInfoCell
//!
//! If the type is generic, the `static CELL` inside the function is shared by
//! every instantiation. Therefore, the inner of this container is a
//! [`TypeIdMap`] wrapped in [`RwLock`], and each info is leaked once.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use envio_utils::TypeIdMap;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// # Examples
///
/// ```
/// use envio_reflect::impls::NonGenericTypeInfoCell;
/// use envio_reflect::info::{OpaqueInfo, TypeInfo, Typed};
/// # use envio_reflect::{Reflect, ops::{ReflectRef, ReflectMut}};
///
/// struct Foo;
///
/// impl Typed for Foo {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
/// # impl Reflect for Foo {
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// #     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Opaque(self) }
/// #     fn reflect_is_zero(&self) -> bool { true }
/// # }
///
/// assert!(core::ptr::eq(Foo::type_info(), Foo::type_info()));
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

impl Default for NonGenericTypeInfoCell {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Container for static storage of type information of generic types.
///
/// # Examples
///
/// ```
/// use envio_reflect::impls::GenericTypeInfoCell;
/// use envio_reflect::info::{OpaqueInfo, TypeInfo, Typed};
/// # use envio_reflect::{Reflect, ops::{ReflectRef, ReflectMut}};
/// use core::marker::PhantomData;
///
/// struct Tagged<T>(PhantomData<fn() -> T>);
///
/// impl<T: 'static> Typed for Tagged<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
/// # impl<T: 'static> Reflect for Tagged<T> {
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// #     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Opaque(self) }
/// #     fn reflect_is_zero(&self) -> bool { true }
/// # }
///
/// assert!(Tagged::<u8>::type_info().type_is::<Tagged<u8>>());
/// assert!(Tagged::<i8>::type_info().type_is::<Tagged<i8>>());
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the info stored for `G`, building it with `f` on first access.
    ///
    /// When two threads race, `f` may run twice but only one result is kept.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

impl Default for GenericTypeInfoCell {
    fn default() -> Self {
        Self::new()
    }
}
