//! Unit tests for partial struct generation.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, Type, parse_quote};

use super::{
    generate_partial_struct, generate_trait_impl, partial_field_type, partial_ident,
    rename_meta, resolve_crate_path,
};
use crate::derive::parse::{FieldAttrs, SerdeRename, parse_input};

/// Normalises token spacing so assertions are insensitive to formatting.
fn compact(tokens: &proc_macro2::TokenStream) -> String {
    tokens.to_string().split_whitespace().collect()
}

#[rstest]
#[case::default(None, "::deep_merge")]
#[case::custom(Some("my_alias"), "my_alias")]
#[case::nested(Some("my_ns::deep_merge"), "my_ns::deep_merge")]
fn crate_path_resolves(#[case] input: Option<&str>, #[case] expected: &str) -> Result<()> {
    let parsed = input
        .map(syn::parse_str::<syn::Path>)
        .transpose()
        .map_err(|e| anyhow!(e))?;
    let tokens = resolve_crate_path(parsed.as_ref());
    ensure!(compact(&tokens) == expected, "got {tokens}");
    Ok(())
}

#[rstest]
#[case::plain(parse_quote!(u32), false, "::core::option::Option<u32>")]
#[case::optional(parse_quote!(Option<String>), false, "::core::option::Option<String>")]
#[case::nested(
    parse_quote!(Inner),
    true,
    "::core::option::Option<<Inneras::deep_merge::DeepPartial>::Partial>"
)]
#[case::optional_nested(
    parse_quote!(Option<Inner>),
    true,
    "::core::option::Option<<Inneras::deep_merge::DeepPartial>::Partial>"
)]
fn field_types_are_made_optional(
    #[case] ty: Type,
    #[case] nested: bool,
    #[case] expected: &str,
) -> Result<()> {
    let krate = resolve_crate_path(None);
    let tokens = partial_field_type(&ty, FieldAttrs { nested }, &krate);
    ensure!(compact(&tokens) == expected, "got {tokens}");
    Ok(())
}

#[test]
fn partial_struct_forwards_names_and_derives() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[serde(rename_all = "camelCase")]
        #[deep_partial(derive(Debug))]
        pub struct Settings {
            /// Colour scheme.
            pub dark_mode: bool,
            #[serde(rename = "alerts")]
            #[deep_partial(nested)]
            notifications: Notifications,
        }
    };
    let parsed = parse_input(&input).map_err(|e| anyhow!(e))?;
    let krate = resolve_crate_path(None);
    let tokens = compact(&generate_partial_struct(&parsed, &krate).map_err(|e| anyhow!(e))?);

    ensure!(tokens.contains("pubstructSettingsPartial"), "tokens: {tokens}");
    ensure!(tokens.contains("#[serde(rename_all=\"camelCase\")]"), "tokens: {tokens}");
    ensure!(tokens.contains(",Debug)]"), "tokens: {tokens}");
    ensure!(tokens.contains("rename=\"alerts\""), "tokens: {tokens}");
    ensure!(tokens.contains("Colourscheme."), "field docs missing: {tokens}");
    Ok(())
}

#[test]
fn custom_names_flow_into_the_impl() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[deep_partial(name = "Patch")]
        struct Settings { theme: String }
    };
    let parsed = parse_input(&input).map_err(|e| anyhow!(e))?;
    ensure!(partial_ident(&parsed) == "Patch", "unexpected ident");
    let tokens = compact(&generate_trait_impl(&parsed, &resolve_crate_path(None)));
    ensure!(
        tokens == "impl::deep_merge::DeepPartialforSettings{typePartial=Patch;}",
        "tokens: {tokens}"
    );
    Ok(())
}

#[rstest]
#[case::none(None, None, None)]
#[case::symmetric(Some("id"), Some("id"), Some("rename=\"id\""))]
#[case::asymmetric(Some("out"), Some("in"), Some("rename(serialize=\"out\",deserialize=\"in\")"))]
#[case::serialize_only(Some("out"), None, Some("rename(serialize=\"out\")"))]
#[case::deserialize_only(None, Some("in"), Some("rename(deserialize=\"in\")"))]
fn rename_meta_keeps_each_direction(
    #[case] serialize: Option<&str>,
    #[case] deserialize: Option<&str>,
    #[case] expected: Option<&str>,
) -> Result<()> {
    let lit = |value: &str| syn::LitStr::new(value, proc_macro2::Span::call_site());
    let rename = SerdeRename {
        serialize: serialize.map(lit),
        deserialize: deserialize.map(lit),
    };
    let observed = rename_meta("rename", &rename).map(|tokens| compact(&tokens));
    ensure!(
        observed.as_deref() == expected,
        "expected {expected:?}, got {observed:?}"
    );
    Ok(())
}

#[test]
fn asymmetric_field_renames_reach_the_partial() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Record {
            #[serde(rename(serialize = "out", deserialize = "in"))]
            value: u32,
        }
    };
    let parsed = parse_input(&input).map_err(|e| anyhow!(e))?;
    let tokens = compact(
        &generate_partial_struct(&parsed, &resolve_crate_path(None)).map_err(|e| anyhow!(e))?,
    );
    ensure!(
        tokens.contains("rename(serialize=\"out\",deserialize=\"in\")"),
        "tokens: {tokens}"
    );
    Ok(())
}
