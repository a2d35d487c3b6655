use core::{error, fmt};

use crate::info::{ArrayInfo, InterfaceInfo, ListInfo, OpaqueInfo};
use crate::info::{PointerInfo, ScalarInfo, StructInfo, Type, Typed};
use crate::registry::{TypeTrait, TypeTraits};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the structural "kinds" of a reflected type.
///
/// Each kind has a matching [`TypeInfo`] variant and a matching
/// [`ReflectRef`](crate::ops::ReflectRef) / [`ReflectMut`](crate::ops::ReflectMut) view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Scalar,
    Pointer,
    Interface,
    Array,
    List,
    Struct,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::Pointer => f.pad("Pointer"),
            Self::Interface => f.pad("Interface"),
            Self::Array => f.pad("Array"),
            Self::List => f.pad("List"),
            Self::Struct => f.pad("Struct"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// ScalarKind

/// The family of a scalar type.
///
/// Every integer width shares one family; the exact width lives in
/// [`ScalarInfo::bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int,
    Uint,
    Float,
    String,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("bool"),
            Self::Int => f.pad("int"),
            Self::Uint => f.pad("uint"),
            Self::Float => f.pad("float"),
            Self::String => f.pad("string"),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// A `TypeInfo` tells the structural kind of a type, its [`Type`] identity,
/// the kind-specific details (fields, item type, capacity, bit width...) and
/// the [`TypeTraits`] table holding optional capabilities.
///
/// It is obtained through [`Typed::type_info`] or, from a value,
/// through [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped).
///
/// # Examples
///
/// ```
/// use envio_reflect::info::{Typed, ReflectKind, ScalarKind};
///
/// let info = <[u8; 4]>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Array);
///
/// let item = info.as_array().unwrap().item();
/// assert_eq!(item.scalar_kind(), Some(ScalarKind::Uint));
/// assert!(item.is_byte());
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    Pointer(PointerInfo),
    Interface(InterfaceInfo),
    Array(ArrayInfo),
    List(ListInfo),
    Struct(StructInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

// Dispatch a method call to the inner info of every variant.
macro_rules! dispatch {
    ($self:ident, $info:ident => $expr:expr) => {
        match $self {
            Self::Scalar($info) => $expr,
            Self::Pointer($info) => $expr,
            Self::Interface($info) => $expr,
            Self::Array($info) => $expr,
            Self::List($info) => $expr,
            Self::Struct($info) => $expr,
            Self::Opaque($info) => $expr,
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_interface: Interface => InterfaceInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        dispatch!(self, info => info.ty())
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envio_reflect::info::{Typed, ReflectKind};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Scalar);
    /// assert_eq!(<Option<i32>>::type_info().kind(), ReflectKind::Pointer);
    /// assert_eq!(char::type_info().kind(), ReflectKind::Opaque);
    /// ```
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Interface(_) => ReflectKind::Interface,
            Self::Array(_) => ReflectKind::Array,
            Self::List(_) => ReflectKind::List,
            Self::Struct(_) => ReflectKind::Struct,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the [`ScalarKind`] if this is a scalar type.
    #[inline]
    pub const fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Self::Scalar(info) => Some(info.kind()),
            _ => None,
        }
    }

    /// Returns `true` for single-byte unsigned scalars, the element type
    /// of raw byte sequences.
    #[inline]
    pub const fn is_byte(&self) -> bool {
        match self {
            Self::Scalar(info) => info.is_byte(),
            _ => false,
        }
    }

    /// Returns the [`TypeTraits`] table of the type.
    pub const fn traits(&self) -> &TypeTraits {
        dispatch!(self, info => info.traits())
    }

    /// Get a [`TypeTrait`] reference, or return `None` if it does not exist.
    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.traits().get::<T>()
    }

    /// Return `true` if the specific [`TypeTrait`] exists.
    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.traits().contains::<T>()
    }

    /// Insert a [`TypeTrait`] into the inner info.
    pub fn with_trait<T: TypeTrait>(self, data: T) -> Self {
        match self {
            Self::Scalar(info) => Self::Scalar(info.with_trait(data)),
            Self::Pointer(info) => Self::Pointer(info.with_trait(data)),
            Self::Interface(info) => Self::Interface(info.with_trait(data)),
            Self::Array(info) => Self::Array(info.with_trait(data)),
            Self::List(info) => Self::List(info.with_trait(data)),
            Self::Struct(info) => Self::Struct(info.with_trait(data)),
            Self::Opaque(info) => Self::Opaque(info.with_trait(data)),
        }
    }

    /// Describe `T` as a type with the same shape as `self`.
    ///
    /// This is how single-field tuple structs are described: they keep their
    /// own identity and trait table but expose the kind of the wrapped type.
    ///
    /// # Examples
    ///
    /// ```
    /// use envio_reflect::info::{Typed, TypeInfo, ScalarKind};
    ///
    /// struct Port(u16);
    ///
    /// let info = u16::type_info().transparent::<Port>();
    /// assert!(info.type_is::<Port>());
    /// assert_eq!(info.scalar_kind(), Some(ScalarKind::Uint));
    /// ```
    pub fn transparent<T: ?Sized + 'static>(&self) -> Self {
        let ty = Type::of::<T>();
        match self.clone() {
            Self::Scalar(info) => Self::Scalar(info.retype(ty)),
            Self::Pointer(info) => Self::Pointer(info.retype(ty)),
            Self::Interface(info) => Self::Interface(info.retype(ty)),
            Self::Array(info) => Self::Array(info.retype(ty)),
            Self::List(info) => Self::List(info.retype(ty)),
            Self::Struct(info) => Self::Struct(info.retype(ty)),
            Self::Opaque(info) => Self::Opaque(info.retype(ty)),
        }
    }

    /// Shorthand for `T::type_info()`.
    #[inline(always)]
    pub fn of<T: Typed>() -> &'static Self {
        T::type_info()
    }
}
