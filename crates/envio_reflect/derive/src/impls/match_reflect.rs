use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectDerive;

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> TokenStream {
    // Parse type kind, attribute and fields infomation.
    let reflect_derive = match ReflectDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls: proc_macro2::TokenStream = match &reflect_derive {
        ReflectDerive::Struct(info) => super::impl_struct(info),
        ReflectDerive::Transparent(info) => super::impl_transparent(info),
        ReflectDerive::Opaque { meta, unit } => super::impl_opaque(meta, *unit),
    };

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
