use proc_macro2::TokenStream;
use quote::quote;

use super::impl_trait_typed;
use crate::derive_data::ReflectStruct;

/// Implement `Typed`, `Reflect` and `Struct` for a struct with named fields.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());
    let struct_trait_tokens = impl_trait_struct(info);

    let envio_reflect_path = meta.envio_reflect_path();
    let reflect_ = crate::path::reflect_(envio_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(envio_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(envio_reflect_path);
    let struct_is_zero_ = crate::path::struct_is_zero_(envio_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        #typed_trait_tokens

        #struct_trait_tokens

        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                #struct_is_zero_(self)
            }
        }
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let envio_reflect_path = meta.envio_reflect_path();
    let struct_ = crate::path::struct_(envio_reflect_path);
    let reflect_ = crate::path::reflect_(envio_reflect_path);

    let field_indices = info
        .active_fields()
        .map(|field| field.reflection_index)
        .collect::<Vec<_>>();
    let members = info
        .active_fields()
        .map(|field| field.member())
        .collect::<Vec<_>>();
    let field_count = field_indices.len();

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(#reflect_::as_reflect(&self.#members)),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(#reflect_::as_reflect_mut(&mut self.#members)),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    }
}
