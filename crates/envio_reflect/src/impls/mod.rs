//! Provide implementations and helpers for reflection traits.
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - [`struct_is_zero`]: Used to implement [`Reflect::reflect_is_zero`] for records.
//!
//! ## Implemented Menu
//!
//! - scalar: `bool`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`, `String`
//! - pointer: `Option<T>`
//! - array: `[T; N]`
//! - list: `Vec<T>`
//! - interface: [`Interface`](crate::ops::Interface)
//! - opaque: `i128`, `u128`, `char`, `()`
//!
//! [`Typed`]: crate::info::Typed
//! [`Reflect::reflect_is_zero`]: crate::Reflect::reflect_is_zero

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod interface;
mod opaque;
mod option;
mod scalar;
mod sequence;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};

use crate::Reflect;
use crate::ops::{Struct, StructFieldIter};

/// Returns `true` if every reflected field of `value` is zero.
///
/// # Examples
///
/// ```
/// use envio_reflect::{derive::Reflect, impls::struct_is_zero};
///
/// #[derive(Reflect)]
/// struct Flags {
///     pub verbose: bool,
///     pub level: Option<u8>,
/// }
///
/// assert!(struct_is_zero(&Flags { verbose: false, level: None }));
/// assert!(!struct_is_zero(&Flags { verbose: false, level: Some(0) }));
/// ```
pub fn struct_is_zero(value: &dyn Struct) -> bool {
    StructFieldIter::new(value).all(|field| <dyn Reflect>::reflect_is_zero(field))
}
