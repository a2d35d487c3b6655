use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Field, Member, Visibility};

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// StructField

/// A named field that takes part in reflection.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Position among the reflected fields, `#[reflect(ignore)]` excluded.
    pub reflection_index: usize,
}

impl StructField<'_> {
    /// Returns the member used to access the field (`self.name`).
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(self.reflection_index.into()),
        }
    }

    /// The declared name, without the `r#` prefix.
    pub fn name(&self) -> String {
        match &self.data.ident {
            Some(ident) => ident.unraw().to_string(),
            None => self.reflection_index.to_string(),
        }
    }

    /// Any `pub` form makes the field exported.
    pub fn is_exported(&self) -> bool {
        !matches!(self.data.vis, Visibility::Inherited)
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> Self {
        meta.set_active_types(fields.iter().map(|f| f.data.ty.clone()).collect());
        Self { meta, fields }
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields visible to reflection, in declaration order.
    #[inline]
    pub fn active_fields(&self) -> impl ExactSizeIterator<Item = &StructField<'a>> {
        self.fields.iter()
    }

    /// Generate the `TypeInfo` expression.
    ///
    /// ```ignore
    /// _path_::info::TypeInfo::Struct(
    ///     _path_::info::StructInfo::new::<Self>("Name", &[
    ///         _path_::info::NamedField::new::<Ty>("field")
    ///             .with_tag("...")
    ///             .with_exported(true),
    ///         ...
    ///     ])
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let path = self.meta.envio_reflect_path();
        let type_info_ = crate::path::type_info_(path);
        let struct_info_ = crate::path::struct_info_(path);
        let named_field_ = crate::path::named_field_(path);

        let name = self.meta.ident().to_string();

        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let field_name = field.name();
            let exported = field.is_exported();
            let with_tag = field.attrs.tag.as_ref().map(|tag| quote!(.with_tag(#tag)));
            let with_flatten = field.attrs.flatten.map(|_| quote!(.with_flatten()));

            quote! {
                #named_field_::new::<#ty>(#field_name)
                    #with_tag
                    #with_flatten
                    .with_exported(#exported)
            }
        });

        let with_traits = self.meta.with_traits_expression();

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(#name, &[ #(#fields),* ])
            )
            #with_traits
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectTransparent

/// A tuple struct with exactly one field.
pub(crate) struct ReflectTransparent<'a> {
    meta: ReflectMeta<'a>,
    field: &'a Field,
}

impl<'a> ReflectTransparent<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, field: &'a Field) -> Self {
        meta.set_active_types(vec![field.ty.clone()]);
        Self { meta, field }
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn field(&self) -> &'a Field {
        self.field
    }

    /// Generate the `TypeInfo` expression.
    ///
    /// ```ignore
    /// <Inner as _path_::info::Typed>::type_info().transparent::<Self>()
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let typed_ = crate::path::typed_(self.meta.envio_reflect_path());
        let ty = &self.field.ty;
        let with_traits = self.meta.with_traits_expression();

        quote! {
            <#ty as #typed_>::type_info().transparent::<Self>()
            #with_traits
        }
    }
}
