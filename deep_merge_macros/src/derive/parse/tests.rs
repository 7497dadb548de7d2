//! Unit tests for attribute and input parsing.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, Type, parse_quote};

use super::{
    option_inner, parse_field_attrs, parse_input, parse_struct_attrs, serde_field_rename,
    serde_rename_all,
};

#[rstest]
#[case(parse_quote!(Option<u32>))]
#[case(parse_quote!(std::option::Option<u32>))]
#[case(parse_quote!(::core::option::Option<u32>))]
fn option_inner_matches_various_prefixes(#[case] ty: Type) -> Result<()> {
    let expected: Type = parse_quote!(u32);
    let inner = option_inner(&ty).ok_or_else(|| anyhow!("expected Option"))?;
    ensure!(inner == &expected, "expected {expected:?}, got {inner:?}");
    Ok(())
}

#[rstest]
#[case(parse_quote!(u32))]
#[case(parse_quote!(Vec<Option<u32>>))]
#[case(parse_quote!(<T as Trait>::Option))]
fn option_inner_rejects_other_types(#[case] ty: Type) {
    assert!(option_inner(&ty).is_none());
}

#[test]
fn struct_attrs_collect_name_crate_and_derives() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[deep_partial(name = "SettingsPatch", crate = "my_merge")]
        #[deep_partial(derive(Debug, Clone, PartialEq))]
        struct Settings { theme: String }
    };
    let attrs = parse_struct_attrs(&input.attrs).map_err(|e| anyhow!(e))?;
    let name = attrs.name.ok_or_else(|| anyhow!("expected name"))?;
    ensure!(name == "SettingsPatch", "unexpected name {name}");
    ensure!(attrs.crate_path.is_some(), "expected crate path");
    ensure!(attrs.derives.len() == 3, "expected three derives");
    Ok(())
}

#[test]
fn unknown_struct_attrs_are_rejected() {
    let input: DeriveInput = parse_quote! {
        #[deep_partial(nmae = "Typo")]
        struct Settings { theme: String }
    };
    assert!(parse_struct_attrs(&input.attrs).is_err());
}

#[rstest]
#[case::nested(parse_quote!(#[deep_partial(nested)]), true)]
#[case::plain(parse_quote!(#[doc = "plain field"]), false)]
fn field_attrs_detect_nested(#[case] attr: syn::Attribute, #[case] expected: bool) -> Result<()> {
    let attrs = parse_field_attrs(&[attr]).map_err(|e| anyhow!(e))?;
    ensure!(attrs.nested == expected, "expected nested = {expected}");
    Ok(())
}

#[test]
fn unknown_field_attrs_are_rejected() {
    let attr: syn::Attribute = parse_quote!(#[deep_partial(flatten)]);
    assert!(parse_field_attrs(&[attr]).is_err());
}

#[rstest]
#[case::plain(parse_quote!(#[serde(rename = "userName")]), Some("userName"), Some("userName"))]
#[case::both(parse_quote!(#[serde(rename(serialize = "out", deserialize = "in"))]), Some("out"), Some("in"))]
#[case::serialize_only(parse_quote!(#[serde(rename(serialize = "out"))]), Some("out"), None)]
#[case::deserialize_only(parse_quote!(#[serde(rename(deserialize = "in"))]), None, Some("in"))]
#[case::other_keys(parse_quote!(#[serde(default, skip_serializing_if = "Option::is_none")]), None, None)]
fn serde_field_rename_reads_both_directions(
    #[case] attr: syn::Attribute,
    #[case] serialize: Option<&str>,
    #[case] deserialize: Option<&str>,
) -> Result<()> {
    let rename = serde_field_rename(&[attr]).map_err(|e| anyhow!(e))?;
    let observed = (
        rename.serialize.map(|lit| lit.value()),
        rename.deserialize.map(|lit| lit.value()),
    );
    ensure!(
        observed.0.as_deref() == serialize && observed.1.as_deref() == deserialize,
        "expected ({serialize:?}, {deserialize:?}), got {observed:?}"
    );
    Ok(())
}

#[test]
fn serde_rename_all_is_read_from_struct() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[serde(deny_unknown_fields, rename_all = "camelCase")]
        struct Settings { dark_mode: bool }
    };
    let rule = serde_rename_all(&input.attrs).map_err(|e| anyhow!(e))?;
    ensure!(
        rule.serialize.map(|lit| lit.value()).as_deref() == Some("camelCase"),
        "expected camelCase"
    );
    Ok(())
}

#[rstest]
#[case::tuple(parse_quote!(struct Pair(u32, u32);))]
#[case::unit(parse_quote!(struct Unit;))]
#[case::enumeration(parse_quote!(enum Mode { Fast, Slow }))]
#[case::generic(parse_quote!(struct Wrapper<T> { inner: T }))]
fn unsupported_inputs_are_rejected(#[case] input: DeriveInput) {
    assert!(parse_input(&input).is_err());
}

#[test]
fn named_structs_are_parsed() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        pub struct Settings {
            theme: String,
            #[deep_partial(nested)]
            notifications: Notifications,
        }
    };
    let parsed = parse_input(&input).map_err(|e| anyhow!(e))?;
    ensure!(parsed.ident == "Settings", "unexpected ident");
    ensure!(parsed.fields.len() == 2, "expected two fields");
    let nested: Vec<bool> = parsed.fields.iter().map(|(_, attrs)| attrs.nested).collect();
    ensure!(nested == [false, true], "unexpected nested flags {nested:?}");
    Ok(())
}
