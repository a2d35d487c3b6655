use proc_macro2::TokenStream;
use quote::quote;

use super::impl_trait_typed;
use crate::derive_data::ReflectMeta;

/// Implement `Typed` and `Reflect` for an opaque type.
///
/// The zero test needs both `default` and `partial_eq`; without them only
/// unit structs are zero.
pub(crate) fn impl_opaque(meta: &ReflectMeta, unit: bool) -> TokenStream {
    let envio_reflect_path = meta.envio_reflect_path();
    let type_info_ = crate::path::type_info_(envio_reflect_path);
    let opaque_info_ = crate::path::opaque_info_(envio_reflect_path);
    let reflect_ = crate::path::reflect_(envio_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(envio_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(envio_reflect_path);

    let with_traits = meta.with_traits_expression();
    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! {
            #type_info_::Opaque(#opaque_info_::new::<Self>())
            #with_traits
        },
    );

    let avail = &meta.attrs().avail_traits;
    let is_zero_tokens = if avail.default.is_some() && avail.partial_eq.is_some() {
        quote! {
            <Self as ::core::cmp::PartialEq>::eq(self, &<Self as ::core::default::Default>::default())
        }
    } else if unit {
        quote!(true)
    } else {
        quote!(false)
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        #typed_trait_tokens

        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Opaque(self)
            }

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                #is_zero_tokens
            }
        }
    }
}
