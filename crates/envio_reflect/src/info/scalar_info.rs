use crate::Reflect;
use crate::info::{ScalarKind, Type, impl_traits_fn, impl_type_fn};
use crate::registry::TypeTraits;

/// Metadata for scalar types: `bool`, integers, floats and `String`.
///
/// `bits` is the exact width used to bound parsing (`0` for strings).
///
/// # Examples
///
/// ```
/// use envio_reflect::info::{Typed, ScalarKind};
///
/// let info = f32::type_info().as_scalar().unwrap();
/// assert_eq!(info.kind(), ScalarKind::Float);
/// assert_eq!(info.bits(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
    bits: u32,
    traits: TypeTraits,
}

impl ScalarInfo {
    impl_type_fn!(ty);
    impl_traits_fn!(traits);

    /// Create a new [`ScalarInfo`].
    #[inline]
    pub fn new<T: Reflect>(kind: ScalarKind, bits: u32) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
            bits,
            traits: TypeTraits::new(),
        }
    }

    /// Returns the scalar family.
    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// Returns the exact bit width.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Returns `true` for `u8` and types wrapping it.
    #[inline]
    pub const fn is_byte(&self) -> bool {
        matches!(self.kind, ScalarKind::Uint) && self.bits == 8
    }
}
