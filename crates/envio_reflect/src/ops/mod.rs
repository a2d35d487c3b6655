//! Kind-specific access to reflected values.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`], one per composite kind:
//!
//! - [`Struct`]: records (e.g. `A { .. }`), fields addressed by declaration index.
//! - [`Array`]: fixed capacity sequences (e.g. `[i32; 5]`).
//! - [`List`]: growable sequences (e.g. `Vec<i32>`).
//! - [`Pointer`]: nullable indirection (e.g. `Option<i32>`).
//!
//! [`Interface`] is a holder for a dynamically typed value, the equivalent of
//! a trait-object field that may be nil.
//!
//! [`ReflectRef`] and [`ReflectMut`] are the views returned by
//! [`Reflect::reflect_ref`] and [`Reflect::reflect_mut`]. Scalars are
//! exposed directly, widened to 64 bits on read and kept at their exact
//! width on write ([`IntMut`], [`UintMut`], [`FloatMut`]).
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
//! [`Reflect::reflect_mut`]: crate::Reflect::reflect_mut

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod interface;
mod kind;
mod list_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use array_ops::{Array, ArrayItemIter};
pub use interface::Interface;
pub use kind::{FloatMut, FloatRef, IntMut, ReflectMut, ReflectRef, UintMut};
pub use list_ops::List;
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
