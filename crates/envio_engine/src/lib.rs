//! Marshals record values to and from environment variables.
//!
//! Each field of a record maps to one variable, named by the field's `env`
//! tag or by its declared name. Scalars are written as text, sequences as
//! items joined by a separator, optional values through their pointee, and
//! flattened records as if their fields were declared in the parent.
//! Types can take over their own text form through the
//! [`EnvEncode`](envio_reflect::registry::EnvEncode) and
//! [`EnvDecode`](envio_reflect::registry::EnvDecode) capabilities.
//!
//! ## Menu
//!
//! - [`Engine`]: the entry point, owning the per-type caches.
//! - [`get`] / [`set`]: shorthands for the global engine on the process
//!   environment.
//! - [`EnvStore`]: where variables live, [`ProcessEnv`] or [`MemoryEnv`].
//! - [`Tag`]: the `env` tag grammar.
//! - [`EnvError`]: everything that can go wrong.
//!
//! ## Example
//!
//! ```
//! use envio_engine::{Engine, MemoryEnv};
//! use envio_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Default)]
//! struct Limits {
//!     #[env("MAX_CONN")]
//!     pub max_conn: u32,
//!     #[env("RATIO")]
//!     pub ratio: Option<f64>,
//! }
//!
//! let env = MemoryEnv::new().with_var("MAX_CONN", "64");
//! let mut limits = Limits::default();
//! Engine::new().get_with(&env, &mut limits).unwrap();
//!
//! assert_eq!(limits.max_conn, 64);
//! assert_eq!(limits.ratio, None);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod config;
mod decode;
mod encode;
mod engine;
mod error;
mod fields;
mod routines;
mod scalar;
mod store;
mod tag;

// -----------------------------------------------------------------------------
// Exports

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{ConfigError, EnvError, FieldError, Op, StoreError};
pub use fields::Field;
pub use routines::{Decoder, Encoder, Routines};
pub use store::{EnvStore, MemoryEnv, ProcessEnv};
pub use tag::Tag;

use envio_reflect::Reflect;

// -----------------------------------------------------------------------------
// Global shorthands

/// Fills `value` from the process environment, using [`Engine::global`].
#[inline]
pub fn get(value: &mut dyn Reflect) -> Result<(), EnvError> {
    Engine::global().get(value)
}

/// Writes `value` to the process environment, using [`Engine::global`].
#[inline]
pub fn set(value: &dyn Reflect) -> Result<(), EnvError> {
    Engine::global().set(value)
}
