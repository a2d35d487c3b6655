use proc_macro2::TokenStream;
use quote::quote;

use super::impl_trait_typed;
use crate::derive_data::ReflectTransparent;

/// Implement `Typed` and `Reflect` for a single-field tuple struct.
///
/// Every view is delegated to the wrapped value.
pub(crate) fn impl_transparent(info: &ReflectTransparent) -> TokenStream {
    let meta = info.meta();

    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    let envio_reflect_path = meta.envio_reflect_path();
    let reflect_ = crate::path::reflect_(envio_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(envio_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(envio_reflect_path);

    let ty = &info.field().ty;
    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        #typed_trait_tokens

        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                <#ty as #reflect_>::reflect_ref(&self.0)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                <#ty as #reflect_>::reflect_mut(&mut self.0)
            }

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                <#ty as #reflect_>::reflect_is_zero(&self.0)
            }
        }
    }
}
