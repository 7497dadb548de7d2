//! Token generation for the `DeepPartial` derive macro.
//!
//! Emits the `<Name>Partial` struct and the `DeepPartial` impl that links
//! the two types.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Field, Ident, Type};

use super::parse::{FieldAttrs, ParsedInput, SerdeRename, option_inner, serde_field_rename};

#[cfg(test)]
mod tests;

/// Resolve the path used to reach the `deep_merge` crate.
///
/// Defaults to `::deep_merge`; `#[deep_partial(crate = "...")]` swaps in an
/// aliased dependency name.
pub(crate) fn resolve_crate_path(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::deep_merge }, |path| quote! { #path })
}

/// Name of the generated struct.
pub(crate) fn partial_ident(parsed: &ParsedInput) -> Ident {
    parsed
        .attrs
        .name
        .clone()
        .unwrap_or_else(|| format_ident!("{}Partial", parsed.ident))
}

/// The optional type stored for one field of the partial struct.
///
/// `Option<T>` is not wrapped a second time. Nested fields point at the
/// inner type's own partial.
pub(crate) fn partial_field_type(ty: &Type, attrs: FieldAttrs, krate: &TokenStream) -> TokenStream {
    let inner = option_inner(ty).unwrap_or(ty);
    if attrs.nested {
        quote! { ::core::option::Option<<#inner as #krate::DeepPartial>::Partial> }
    } else {
        quote! { ::core::option::Option<#inner> }
    }
}

/// Serde meta item reproducing `rename`, or `None` when nothing is renamed.
///
/// Symmetric renames keep the plain `key = "..."` form; asymmetric ones are
/// written out per direction.
pub(crate) fn rename_meta(key: &str, rename: &SerdeRename) -> Option<TokenStream> {
    if rename.is_empty() {
        return None;
    }
    let key = format_ident!("{key}");
    if let (Some(ser), Some(de)) = (&rename.serialize, &rename.deserialize)
        && ser.value() == de.value()
    {
        return Some(quote! { #key = #ser });
    }
    let ser = rename.serialize.as_ref().map(|lit| quote! { serialize = #lit });
    let de = rename.deserialize.as_ref().map(|lit| quote! { deserialize = #lit });
    let parts = ser.into_iter().chain(de);
    Some(quote! { #key( #( #parts ),* ) })
}

fn partial_field(field: &Field, attrs: FieldAttrs, krate: &TokenStream) -> syn::Result<TokenStream> {
    let name = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "DeepPartial requires named fields"))?;
    let vis = &field.vis;
    let ty = partial_field_type(&field.ty, attrs, krate);
    let docs = field.attrs.iter().filter(|attr| attr.path().is_ident("doc"));
    let rename = rename_meta("rename", &serde_field_rename(&field.attrs)?)
        .map(|meta| quote! { , #meta });
    Ok(quote! {
        #( #docs )*
        #[serde(default, skip_serializing_if = "::core::option::Option::is_none" #rename)]
        #vis #name: #ty
    })
}

/// Generate the partial struct definition.
pub(crate) fn generate_partial_struct(
    parsed: &ParsedInput,
    krate: &TokenStream,
) -> syn::Result<TokenStream> {
    let ident = &parsed.ident;
    let partial = partial_ident(parsed);
    let vis = &parsed.vis;
    let derives = &parsed.attrs.derives;
    let doc = format!("Deep-partial companion of [`{ident}`]; every field is optional.");
    let rename_all =
        rename_meta("rename_all", &parsed.rename_all).map(|meta| quote! { #[serde(#meta)] });
    let fields = parsed
        .fields
        .iter()
        .map(|(field, attrs)| partial_field(field, *attrs, krate))
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        #[doc = #doc]
        #[derive(::core::default::Default, ::serde::Serialize, ::serde::Deserialize #(, #derives)*)]
        #rename_all
        #vis struct #partial {
            #( #fields, )*
        }
    })
}

/// Generate the `DeepPartial` impl tying the source struct to its partial.
pub(crate) fn generate_trait_impl(parsed: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &parsed.ident;
    let partial = partial_ident(parsed);
    quote! {
        impl #krate::DeepPartial for #ident {
            type Partial = #partial;
        }
    }
}
