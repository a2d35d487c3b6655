//! See [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static ENV_ATTRIBUTE_NAME: &str = "env";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `Typed` and `Reflect`, plus `Struct` for
/// structs with named fields.
///
/// The shape of the type decides its kind:
///
/// - `struct T { .. }`: a record (`TypeInfo::Struct`).
/// - `struct T(U);`: a transparent wrapper. It has its own identity and
///   capability table, but the structural kind of `U`.
/// - `struct T;`: opaque.
///
/// Enums and tuple structs with more than one field are not supported.
///
/// ## Field Attributes
///
/// ### Tag
///
/// `#[env("NAME[,m][,raw]")]` names the environment variable and sets the
/// flags: `m` marks it mandatory, `raw` stores byte sequences verbatim.
/// `#[env("-")]` skips the field.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Config {
///     #[env("APP_HOST,m")]
///     pub host: String,
///     #[env("APP_KEY,raw")]
///     pub key: Vec<u8>,
///     #[env("-")]
///     pub cache: String,
/// }
/// ```
///
/// Fields without `pub` visibility are recorded as unexported.
///
/// ### Flatten
///
/// `#[reflect(flatten)]` embeds a record: its fields are handled as if
/// they were declared in the parent. The field may also be an `Option`
/// of a record.
///
/// ### Ignore
///
/// `#[reflect(ignore)]` hides the field from reflection entirely. Its type
/// does not need to implement `Reflect`.
///
/// ## Type Attributes
///
/// - `opaque`: treat the type as opaque regardless of its shape.
/// - `encode`: register the `EnvEncode` capability (the type must implement it).
/// - `decode`: register the `EnvDecode` capability (the type must implement it).
/// - `default`, `partial_eq`: with both, an opaque value is zero when it
///   equals `Default::default()`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, PartialEq)]
/// #[reflect(opaque, decode, default, partial_eq)]
/// struct Duration { /* ... */ }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect, env))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
