use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::info::Typed;
use crate::registry::{BoxError, FromType, MismatchedValue, TypeTrait};

/// A type that formats its own external value.
///
/// The returned bytes are stored verbatim; built-in formatting, separators
/// and the `raw` flag do not apply.
///
/// Register it with `#[reflect(encode)]`.
pub trait EnvEncode {
    fn encode_env(&self) -> Result<Vec<u8>, BoxError>;
}

/// The [`EnvEncode`] capability, stored in a type's trait table.
#[derive(Clone, Copy)]
pub struct TypeTraitEnvEncode {
    func: fn(&dyn Reflect) -> Result<Vec<u8>, BoxError>,
}

impl TypeTraitEnvEncode {
    /// Formats `value`, which must be of the type this capability was built for.
    #[inline]
    pub fn encode(&self, value: &dyn Reflect) -> Result<Vec<u8>, BoxError> {
        (self.func)(value)
    }
}

impl<T: EnvEncode + Reflect + Typed> FromType<T> for TypeTraitEnvEncode {
    fn from_type() -> Self {
        Self {
            func: |value| match value.downcast_ref::<T>() {
                Some(value) => value.encode_env(),
                None => Err(Box::new(MismatchedValue {
                    expected: T::type_info().type_path(),
                    received: value.reflect_type_info().type_path(),
                })),
            },
        }
    }
}

impl TypeTrait for TypeTraitEnvEncode {}

impl fmt::Debug for TypeTraitEnvEncode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeTraitEnvEncode").finish_non_exhaustive()
    }
}
