use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::info::Typed;
use crate::registry::{BoxError, FromType, MismatchedValue, TypeTrait};

/// A type that parses its own external value.
///
/// `decode_env` receives the exact bytes read from the store. It is also
/// called with empty bytes when the variable is absent and the field is not
/// mandatory, so the implementor decides what "absent" means. The result
/// replaces the previous value.
///
/// Register it with `#[reflect(decode)]`.
pub trait EnvDecode: Sized {
    fn decode_env(raw: &[u8]) -> Result<Self, BoxError>;
}

/// The [`EnvDecode`] capability, stored in a type's trait table.
#[derive(Clone, Copy)]
pub struct TypeTraitEnvDecode {
    func: fn(&[u8], &mut dyn Reflect) -> Result<(), BoxError>,
}

impl TypeTraitEnvDecode {
    /// Parses `raw` and assigns the result to `target`, which must be of the
    /// type this capability was built for.
    ///
    /// `target` is left untouched on failure.
    #[inline]
    pub fn decode(&self, raw: &[u8], target: &mut dyn Reflect) -> Result<(), BoxError> {
        (self.func)(raw, target)
    }
}

impl<T: EnvDecode + Reflect + Typed> FromType<T> for TypeTraitEnvDecode {
    fn from_type() -> Self {
        Self {
            func: |raw, target| {
                let received = target.reflect_type_info().type_path();
                match target.downcast_mut::<T>() {
                    Some(target) => {
                        *target = T::decode_env(raw)?;
                        Ok(())
                    }
                    None => Err(Box::new(MismatchedValue {
                        expected: T::type_info().type_path(),
                        received,
                    })),
                }
            },
        }
    }
}

impl TypeTrait for TypeTraitEnvDecode {}

impl fmt::Debug for TypeTraitEnvDecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeTraitEnvDecode").finish_non_exhaustive()
    }
}
