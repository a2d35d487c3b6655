use alloc::boxed::Box;
use core::{error, fmt};

mod env_decode;
mod env_encode;

pub use env_decode::{EnvDecode, TypeTraitEnvDecode};
pub use env_encode::{EnvEncode, TypeTraitEnvEncode};

/// The error type returned by user-owned conversions.
pub type BoxError = Box<dyn error::Error + Send + Sync>;

/// A capability was invoked with a value of another type.
///
/// Only reachable when a capability is copied onto a type it was not
/// built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MismatchedValue {
    pub expected: &'static str,
    pub received: &'static str,
}

impl fmt::Display for MismatchedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capability for `{}` invoked with `{}`",
            self.expected, self.received
        )
    }
}

impl error::Error for MismatchedValue {}
