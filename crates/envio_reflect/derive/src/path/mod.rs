//! This independent module is used to provide the required paths,
//! so as to minimize changes when the `envio_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `envio_reflect` crate.
///
/// 1. For crates that depend on `envio_reflect`, `::envio_reflect` is returned.
/// 2. For crates that depend on `envio`, `::envio::reflect` is returned.
/// 3. Otherwise `::envio_reflect` is returned, which may be incorrect.
///
/// The manifest is read once per crate, so callers pass the path around
/// rather than calling this again.
pub(crate) fn envio_reflect() -> syn::Path {
    envio_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("envio_reflect"))
}

// -----------------------------------------------------------------------------
// Items

macro_rules! item_path {
    ($($name:ident => $($seg:ident)::+;)*) => {$(
        #[inline(always)]
        pub(crate) fn $name(envio_reflect_path: &syn::Path) -> TokenStream {
            quote! { #envio_reflect_path::$($seg)::+ }
        }
    )*};
}

item_path! {
    reflect_ => Reflect;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    struct_info_ => info::StructInfo;
    opaque_info_ => info::OpaqueInfo;
    named_field_ => info::NamedField;
    struct_ => ops::Struct;
    reflect_ref_ => ops::ReflectRef;
    reflect_mut_ => ops::ReflectMut;
    struct_is_zero_ => impls::struct_is_zero;
    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
    generic_type_info_cell_ => impls::GenericTypeInfoCell;
    from_type_ => registry::FromType;
    type_trait_env_encode_ => registry::TypeTraitEnvEncode;
    type_trait_env_decode_ => registry::TypeTraitEnvDecode;
}
