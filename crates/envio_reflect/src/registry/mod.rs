//! Per-type capability tables.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: a capability supported by a type.
//! - [`TypeTraits`]: the table of capabilities stored in every [`TypeInfo`].
//! - [`FromType`]: create a `TypeTrait` from a type.
//! - Capabilities:
//!     - [`EnvEncode`] / [`TypeTraitEnvEncode`]: the type formats itself.
//!     - [`EnvDecode`] / [`TypeTraitEnvDecode`]: the type parses itself.
//!
//! Capabilities are attached when the type info is built, usually by the
//! derive macro (`#[reflect(encode, decode)]`):
//!
//! ```
//! use envio_reflect::derive::Reflect;
//! use envio_reflect::info::Typed;
//! use envio_reflect::registry::{BoxError, EnvEncode, TypeTraitEnvEncode};
//!
//! #[derive(Reflect)]
//! #[reflect(encode)]
//! struct Level(u8);
//!
//! impl EnvEncode for Level {
//!     fn encode_env(&self) -> Result<Vec<u8>, BoxError> {
//!         Ok(format!("L{}", self.0).into_bytes())
//!     }
//! }
//!
//! assert!(Level::type_info().has_trait::<TypeTraitEnvEncode>());
//! ```
//!
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod traits;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use traits::{BoxError, MismatchedValue};
pub use traits::{EnvDecode, TypeTraitEnvDecode};
pub use traits::{EnvEncode, TypeTraitEnvEncode};
pub use type_trait::{TypeTrait, TypeTraits};
