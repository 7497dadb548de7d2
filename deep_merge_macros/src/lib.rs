//! Procedural macros for `deep_merge`.
//!
//! `#[derive(DeepPartial)]` generates a companion struct in which every field
//! is optional, together with an implementation of
//! `deep_merge::DeepPartial` pointing at it. Fields marked
//! `#[deep_partial(nested)]` recurse into the field type's own partial, so
//! updates can target a single leaf of a nested structure.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `deep_merge::DeepPartial`.
///
/// See the `deep_merge` crate documentation for the supported attributes.
#[proc_macro_derive(DeepPartial, attributes(deep_partial))]
pub fn derive_deep_partial(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
