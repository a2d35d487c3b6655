use proc_macro2::Span;
use syn::{Attribute, LitStr, meta::ParseNestedMeta};

use crate::{ENV_ATTRIBUTE_NAME, REFLECT_ATTRIBUTE_NAME};

/// Field level attributes: `#[env("...")]` and `#[reflect(...)]`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// The raw `#[env("...")]` string.
    pub tag: Option<LitStr>,
    /// `#[reflect(flatten)]`
    pub flatten: Option<Span>,
    /// `#[reflect(ignore)]`
    pub ignore: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(ENV_ATTRIBUTE_NAME) {
                if this.tag.is_some() {
                    return Err(syn::Error::new_spanned(attr, "duplicate `env` attribute"));
                }
                this.tag = Some(attr.parse_args::<LitStr>()?);
            } else if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }

        if let (Some(span), true) = (this.ignore, this.tag.is_some() || this.flatten.is_some()) {
            return Err(syn::Error::new(
                span,
                "`ignore` cannot be combined with `env` or `flatten`",
            ));
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.require_ident()?.span();

        let slot = if meta.path.is_ident("flatten") {
            &mut self.flatten
        } else if meta.path.is_ident("ignore") {
            &mut self.ignore
        } else {
            return Err(meta.error("unknown field attribute, expected `flatten` or `ignore`"));
        };

        if slot.is_some() {
            return Err(meta.error("duplicate attribute"));
        }
        *slot = Some(span);
        Ok(())
    }

    /// Returns `true` if nothing was specified.
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.flatten.is_none() && self.ignore.is_none()
    }
}
