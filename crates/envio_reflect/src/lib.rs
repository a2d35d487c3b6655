//! Static type descriptions and value access for the `envio` engine.
//!
//! The engine never sees concrete types. It walks values through
//! [`Reflect`] and decides what to do from the [`TypeInfo`] every type
//! publishes through [`Typed`].
//!
//! ## Menu
//!
//! - [`info`]: compile-time type information ([`TypeInfo`], [`StructInfo`], ...).
//! - [`ops`]: kind-specific access ([`Struct`], [`Array`], [`List`], [`Pointer`])
//!   and the [`Interface`] holder.
//! - [`impls`]: implementations for primitives, `String`, `Option`, `Vec` and arrays,
//!   plus the static cells used to store type information.
//! - [`registry`]: the per-type trait table and the two capability
//!   contracts ([`EnvEncode`], [`EnvDecode`]).
//! - [`derive`]: `#[derive(Reflect)]`.
//!
//! ## Example
//!
//! ```
//! use envio_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
//!
//! #[derive(Reflect)]
//! struct Database {
//!     #[env("DB_HOST,m")]
//!     pub host: String,
//!     pub port: u16,
//!     password: String,
//! }
//!
//! let TypeInfo::Struct(info) = Database::type_info() else { unreachable!() };
//! assert_eq!(info.name(), "Database");
//! assert_eq!(info.field_at(0).unwrap().tag(), Some("DB_HOST,m"));
//! assert!(!info.field_at(2).unwrap().is_exported());
//! ```
//!
//! [`TypeInfo`]: info::TypeInfo
//! [`Typed`]: info::Typed
//! [`StructInfo`]: info::StructInfo
//! [`Struct`]: ops::Struct
//! [`Array`]: ops::Array
//! [`List`]: ops::List
//! [`Pointer`]: ops::Pointer
//! [`Interface`]: ops::Interface
//! [`EnvEncode`]: registry::EnvEncode
//! [`EnvDecode`]: registry::EnvDecode
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate through `::envio_reflect`, which must
// also resolve inside the crate itself.
extern crate self as envio_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use envio_reflect_derive as derive;
pub use reflection::Reflect;
