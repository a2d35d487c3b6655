//! Code generation, one module per shape.

// -----------------------------------------------------------------------------
// Modules

mod match_reflect;
mod opaque_kind;
mod struct_kind;
mod trait_typed;
mod transparent_kind;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use opaque_kind::impl_opaque;
use struct_kind::impl_struct;
use trait_typed::impl_trait_typed;
use transparent_kind::impl_transparent;
