//! Serde attribute parsing helpers.
//!
//! The generated partial struct must serialise its fields under the same
//! keys as the source struct, otherwise the merge would add keys the source
//! never reads, and must read the same keys back. These helpers recover
//! both directions of a rename so they can be forwarded.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token};

use super::discard_unknown;

/// Names recovered from a serde `rename` or `rename_all` attribute.
///
/// The plain `key = "..."` form fills both directions; the
/// `key(serialize = "...", deserialize = "...")` form may fill either.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SerdeRename {
    pub serialize: Option<LitStr>,
    pub deserialize: Option<LitStr>,
}

impl SerdeRename {
    pub(crate) const fn is_empty(&self) -> bool {
        self.serialize.is_none() && self.deserialize.is_none()
    }
}

/// Reads a struct's `#[serde(rename_all = ...)]`.
pub(crate) fn serde_rename_all(attrs: &[Attribute]) -> syn::Result<SerdeRename> {
    serde_key(attrs, "rename_all")
}

/// Reads a field's `#[serde(rename = ...)]`.
pub(crate) fn serde_field_rename(attrs: &[Attribute]) -> syn::Result<SerdeRename> {
    serde_key(attrs, "rename")
}

fn serde_key(attrs: &[Attribute], key: &str) -> syn::Result<SerdeRename> {
    let mut out = SerdeRename::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident(key) {
                return discard_unknown(&meta);
            }

            if meta.input.peek(Token![=]) {
                let name = meta.value()?.parse::<LitStr>()?;
                out.serialize = Some(name.clone());
                out.deserialize = Some(name);
                return Ok(());
            }

            if !meta.input.peek(syn::token::Paren) {
                return Ok(());
            }

            meta.parse_nested_meta(|nested| parse_directional_name(&nested, &mut out))
        })?;
    }
    Ok(out)
}

fn parse_directional_name(nested: &ParseNestedMeta, out: &mut SerdeRename) -> syn::Result<()> {
    let slot = if nested.path.is_ident("serialize") {
        &mut out.serialize
    } else if nested.path.is_ident("deserialize") {
        &mut out.deserialize
    } else {
        return discard_unknown(nested);
    };
    *slot = Some(nested.value()?.parse::<LitStr>()?);
    Ok(())
}
