use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use super::{FieldAttributes, ReflectMeta, ReflectStruct, ReflectTransparent};
use super::{StructField, TypeAttributes};

/// The parsed input of `#[derive(Reflect)]`, one variant per generated shape.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Transparent(ReflectTransparent<'a>),
    Opaque { meta: ReflectMeta<'a>, unit: bool },
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "#[derive(Reflect)] does not support enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "#[derive(Reflect)] does not support unions",
                ));
            }
        };

        if opaque {
            return Ok(Self::Opaque { meta, unit: false });
        }

        match &data.fields {
            Fields::Unit => Ok(Self::Opaque { meta, unit: true }),
            Fields::Named(named) => {
                let mut fields = Vec::with_capacity(named.named.len());
                for field in &named.named {
                    let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                    if attrs.ignore.is_some() {
                        continue;
                    }
                    fields.push(StructField {
                        data: field,
                        attrs,
                        reflection_index: fields.len(),
                    });
                }
                Ok(Self::Struct(ReflectStruct::new(meta, fields)))
            }
            Fields::Unnamed(unnamed) => {
                if unnamed.unnamed.len() != 1 {
                    return Err(syn::Error::new(
                        unnamed.span(),
                        "#[derive(Reflect)] supports tuple structs with exactly one field, \
                         use `#[reflect(opaque)]` for other shapes",
                    ));
                }
                let field = &unnamed.unnamed[0];
                if !FieldAttributes::parse_attrs(&field.attrs)?.is_empty() {
                    return Err(syn::Error::new(
                        field.span(),
                        "field attributes are not allowed on a transparent wrapper",
                    ));
                }
                Ok(Self::Transparent(ReflectTransparent::new(meta, field)))
            }
        }
    }
}
