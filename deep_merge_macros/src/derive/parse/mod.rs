//! Parsing utilities for the `DeepPartial` derive macro.
//!
//! Struct attributes:
//! - `#[deep_partial(name = "Ident")]` renames the generated struct.
//! - `#[deep_partial(crate = "path")]` changes the path used to reach the
//!   `deep_merge` crate in generated code.
//! - `#[deep_partial(derive(Debug, Clone))]` adds derives to the generated
//!   struct.
//!
//! Field attributes:
//! - `#[deep_partial(nested)]` makes the field's partial type recurse into
//!   the field type's own `DeepPartial::Partial`.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Token, parenthesized};

mod literals;
mod serde_attrs;
#[cfg(test)]
mod tests;
mod type_utils;

use literals::lit_str;
pub(crate) use serde_attrs::{SerdeRename, serde_field_rename};
use serde_attrs::serde_rename_all;
pub(crate) use type_utils::option_inner;

/// Struct-level `#[deep_partial(...)]` settings.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    pub name: Option<Ident>,
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
    pub derives: Vec<syn::Path>,
}

/// Field-level `#[deep_partial(...)]` settings.
#[derive(Default, Clone, Copy)]
pub(crate) struct FieldAttrs {
    pub nested: bool,
}

/// The pieces of the annotated struct the generator needs.
pub(crate) struct ParsedInput {
    pub ident: Ident,
    pub vis: syn::Visibility,
    pub attrs: StructAttrs,
    /// Rule from `#[serde(rename_all = ...)]`, forwarded so both structs
    /// use the same keys.
    pub rename_all: SerdeRename,
    pub fields: Vec<(syn::Field, FieldAttrs)>,
}

/// Validates the derive input and collects its attributes in one pass.
///
/// Only non-generic structs with named fields are accepted.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let ident = input.ident.clone();
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect::<Vec<_>>(),
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "DeepPartial requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &ident,
                "DeepPartial can only be derived for structs",
            ));
        }
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "DeepPartial does not support generic structs",
        ));
    }

    let attrs = parse_struct_attrs(&input.attrs)?;
    let rename_all = serde_rename_all(&input.attrs)?;
    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let field_attrs = parse_field_attrs(&field.attrs)?;
        fields.push((field, field_attrs));
    }
    Ok(ParsedInput {
        ident,
        vis: input.vis.clone(),
        attrs,
        rename_all,
        fields,
    })
}

/// Iterate all `#[deep_partial(...)]` attributes once and apply a callback.
fn parse_deep_partial<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("deep_partial")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Extracts `#[deep_partial(...)]` metadata applied to the struct.
///
/// Unknown keys are rejected so typos surface at compile time.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_deep_partial(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("name") => {
                let s = lit_str(meta, "name")?;
                let ident: Ident = s.parse()?;
                out.name = Some(ident);
                Ok(())
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            Some("derive") => meta.parse_nested_meta(|nested| {
                out.derives.push(nested.path.clone());
                Ok(())
            }),
            _ => Err(meta.error(
                "unknown deep_partial struct attribute; expected `name`, `crate`, or `derive(...)`",
            )),
        }
    })?;
    Ok(out)
}

/// Extracts `#[deep_partial(...)]` metadata applied to a field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_deep_partial(attrs, |meta| {
        if meta.path.is_ident("nested") {
            out.nested = true;
            Ok(())
        } else {
            Err(meta.error("unknown deep_partial field attribute; expected `nested`"))
        }
    })?;
    Ok(out)
}
