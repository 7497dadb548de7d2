//! Expansion of `#[derive(DeepPartial)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

mod generate;
mod parse;

use generate::{generate_partial_struct, generate_trait_impl, resolve_crate_path};
use parse::parse_input;

/// Expand the derive, returning a `syn::Error` for unsupported input.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse_input(input)?;
    let krate = resolve_crate_path(parsed.attrs.crate_path.as_ref());
    let partial_struct = generate_partial_struct(&parsed, &krate)?;
    let trait_impl = generate_trait_impl(&parsed, &krate);
    Ok(quote! {
        #partial_struct
        #trait_impl
    })
}
