//! Provide compile-time type information.
//!
//! ## Menu
//!
//! - [`Type`]: a [`TypeId`] plus the type's path, with a short display name.
//!
//! - [`TypeInfo`]: an enum describing the structural kind of a type, the inner is one of:
//!     - [`ScalarInfo`]: `bool`, signed and unsigned integers, floats and `String`,
//!       with the exact bit width.
//!     - [`PointerInfo`]: nullable indirection (`Option<T>`), with the pointee info.
//!     - [`InterfaceInfo`]: a dynamically typed slot ([`Interface`](crate::ops::Interface)).
//!     - [`ArrayInfo`]: fixed capacity sequences (`[T; N]`), with the item info.
//!     - [`ListInfo`]: growable sequences (`Vec<T>`), with the item info.
//!     - [`StructInfo`]: named records, with the ordered [`NamedField`] list.
//!     - [`OpaqueInfo`]: everything else.
//!
//! - [`NamedField`]: a record field: declared name, raw `env` tag, flatten
//!   marker, visibility and the field's type info.
//!
//! - Kind:
//!     - [`ReflectKind`]: the variant of a [`TypeInfo`].
//!     - [`ScalarKind`]: the scalar family of a [`ScalarInfo`].
//!
//! - [`Typed`]: a trait for obtaining `TypeInfo` data.
//! - [`DynamicTyped`]: provide dynamic dispatch for `Typed`.
//!
//! Every info carries a [`TypeTraits`](crate::registry::TypeTraits) table, which is
//! where capabilities such as [`EnvEncode`](crate::registry::EnvEncode) are looked up.
//!
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod field_info;
mod interface_info;
mod list_info;
mod opaque_info;
mod pointer_info;
mod scalar_info;
mod struct_info;
mod traits_macro;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

use traits_macro::impl_traits_fn;
use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use field_info::NamedField;
pub use interface_info::InterfaceInfo;
pub use list_info::ListInfo;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use scalar_info::ScalarInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, ScalarKind, TypeInfo};
pub use type_path::Type;
pub use typed::{DynamicTyped, Typed};
