use proc_macro2::Span;
use syn::{Attribute, meta::ParseNestedMeta};

use super::TraitAvailableFlags;
use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level `#[reflect(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(opaque)]`
    pub opaque: Option<Span>,
    pub avail_traits: TraitAvailableFlags,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.require_ident()?.span();

        let slot = if meta.path.is_ident("opaque") {
            &mut self.opaque
        } else if meta.path.is_ident("default") {
            &mut self.avail_traits.default
        } else if meta.path.is_ident("partial_eq") {
            &mut self.avail_traits.partial_eq
        } else if meta.path.is_ident("encode") {
            &mut self.avail_traits.encode
        } else if meta.path.is_ident("decode") {
            &mut self.avail_traits.decode
        } else if meta.path.is_ident("flatten") || meta.path.is_ident("ignore") {
            return Err(meta.error("this attribute can only be applied to fields"));
        } else {
            return Err(meta.error(
                "unknown type attribute, expected one of: \
                 `opaque`, `encode`, `decode`, `default`, `partial_eq`",
            ));
        };

        if slot.is_some() {
            return Err(meta.error("duplicate attribute"));
        }
        *slot = Some(span);
        Ok(())
    }
}
