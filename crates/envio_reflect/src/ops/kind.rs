use alloc::string::String;

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Array, List, Pointer, Struct};

// -----------------------------------------------------------------------------
// Scalar views

/// A float read at its declared width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatRef {
    F32(f32),
    F64(f64),
}

/// A mutable signed integer at its exact width.
#[derive(Debug)]
pub enum IntMut<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
}

/// A mutable unsigned integer at its exact width.
#[derive(Debug)]
pub enum UintMut<'a> {
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
}

/// A mutable float at its exact width.
#[derive(Debug)]
pub enum FloatMut<'a> {
    F32(&'a mut f32),
    F64(&'a mut f64),
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind-specific view of a reflected value.
///
/// # Examples
///
/// ```
/// use envio_reflect::{Reflect, ops::ReflectRef};
///
/// let value: u16 = 8080;
/// assert!(matches!(value.reflect_ref(), ReflectRef::Uint(8080)));
///
/// let value = Some(String::from("x"));
/// let ReflectRef::Pointer(ptr) = value.reflect_ref() else { unreachable!() };
/// assert!(ptr.pointee().is_some());
/// ```
pub enum ReflectRef<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(FloatRef),
    String(&'a str),
    Pointer(&'a dyn Pointer),
    Interface(Option<&'a dyn Reflect>),
    Array(&'a dyn Array),
    List(&'a dyn List),
    Struct(&'a dyn Struct),
    Opaque(&'a dyn Reflect),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable, kind-specific view of a reflected value.
pub enum ReflectMut<'a> {
    Bool(&'a mut bool),
    Int(IntMut<'a>),
    Uint(UintMut<'a>),
    Float(FloatMut<'a>),
    String(&'a mut String),
    Pointer(&'a mut dyn Pointer),
    Interface(Option<&'a mut dyn Reflect>),
    Array(&'a mut dyn Array),
    List(&'a mut dyn List),
    Struct(&'a mut dyn Struct),
    Opaque(&'a mut dyn Reflect),
}

// -----------------------------------------------------------------------------
// Kind

macro_rules! impl_kind_fn {
    ($name:ident) => {
        impl $name<'_> {
            /// Returns the [`ReflectKind`] of this view.
            pub const fn kind(&self) -> ReflectKind {
                match self {
                    Self::Bool(_)
                    | Self::Int(_)
                    | Self::Uint(_)
                    | Self::Float(_)
                    | Self::String(_) => ReflectKind::Scalar,
                    Self::Pointer(_) => ReflectKind::Pointer,
                    Self::Interface(_) => ReflectKind::Interface,
                    Self::Array(_) => ReflectKind::Array,
                    Self::List(_) => ReflectKind::List,
                    Self::Struct(_) => ReflectKind::Struct,
                    Self::Opaque(_) => ReflectKind::Opaque,
                }
            }
        }
    };
}

impl_kind_fn!(ReflectRef);
impl_kind_fn!(ReflectMut);
