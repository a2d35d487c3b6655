use crate::info::Typed;

/// Creates a [`TypeTrait`](crate::registry::TypeTrait) for the type `T`.
///
/// The derive macro calls this for every capability listed in
/// `#[reflect(...)]`, so the capability is resolved once per type.
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
