use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;

/// Type-level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    envio_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // Field types that take part in reflection, used for generic bounds.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("envio_reflect_path", &self.envio_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            envio_reflect_path: crate::path::envio_reflect(),
            attrs,
            ident,
            generics,
            active_types: Vec::new(),
        }
    }

    /// Set the active field types during initialization.
    #[inline]
    pub(super) fn set_active_types(&mut self, active_types: Vec<Type>) {
        self.active_types = active_types;
    }

    #[inline]
    pub fn envio_reflect_path(&self) -> &Path {
        &self.envio_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// Returns `true` if the type info must be stored per instantiation.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    /// Generate the `.with_trait(...)` calls for the declared capabilities.
    ///
    /// ```ignore
    /// .with_trait(<_path_::registry::TypeTraitEnvEncode as _path_::registry::FromType<Self>>::from_type())
    /// ```
    pub fn with_traits_expression(&self) -> TokenStream {
        let path = &self.envio_reflect_path;
        let from_type_ = crate::path::from_type_(path);

        let mut tokens = TokenStream::new();
        if self.attrs.avail_traits.encode.is_some() {
            let encode_ = crate::path::type_trait_env_encode_(path);
            tokens.extend(quote! {
                .with_trait(<#encode_ as #from_type_<Self>>::from_type())
            });
        }
        if self.attrs.avail_traits.decode.is_some() {
            let decode_ = crate::path::type_trait_env_decode_(path);
            tokens.extend(quote! {
                .with_trait(<#decode_ as #from_type_<Self>>::from_type())
            });
        }
        tokens
    }

    /// Split generics for an impl block, adding the bounds reflection needs.
    ///
    /// - `Self: Any + Send + Sync` when the type has parameters.
    /// - `FieldTy: Reflect + Typed` for every field type naming a type parameter.
    pub fn split_generics(&self) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        if self.generics.type_params().next().is_some() {
            generic_where_clause.extend(quote! {
                Self: ::core::any::Any + ::core::marker::Send + ::core::marker::Sync,
            });
        } else if self.generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let type_param_idents = self
            .generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<Ident>>();

        if !type_param_idents.is_empty() {
            let reflect_ = crate::path::reflect_(&self.envio_reflect_path);
            let typed_ = crate::path::typed_(&self.envio_reflect_path);

            for ty in &self.active_types {
                if is_any_ident_in_token_stream(&type_param_idents, ty.to_token_stream()) {
                    generic_where_clause.extend(quote! { #ty: #reflect_ + #typed_, });
                }
            }
        }

        (impl_generics, ty_generics, generic_where_clause)
    }
}

// Do any of the identifiers in `idents` appear in `token_stream`?
fn is_any_ident_in_token_stream(idents: &[Ident], token_stream: TokenStream) -> bool {
    for token_tree in token_stream {
        match token_tree {
            proc_macro2::TokenTree::Ident(ident) => {
                if idents.contains(&ident) {
                    return true;
                }
            }
            proc_macro2::TokenTree::Group(group) => {
                if is_any_ident_in_token_stream(idents, group.stream()) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
