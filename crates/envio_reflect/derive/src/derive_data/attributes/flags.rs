use proc_macro2::Span;

/// A struct used to record whether the specified trait is available.
#[derive(Default, Debug)]
pub(crate) struct TraitAvailableFlags {
    pub default: Option<Span>,
    pub partial_eq: Option<Span>,
    pub encode: Option<Span>,
    pub decode: Option<Span>,
}
