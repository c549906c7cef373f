//! `#[datastore]` expansion.

use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;
use syn::{spanned::Spanned, ImplItem, ItemImpl};

const GENERATED: &str = "capabilities";

pub fn expand_datastore(mut item: ItemImpl) -> syn::Result<TokenStream2> {
    let Some((_, trait_path, _)) = &item.trait_ else {
        return Err(syn::Error::new(
            item.self_ty.span(),
            "#[datastore] must be placed on an `impl Datastore for ...` block",
        ));
    };
    let is_datastore = trait_path
        .segments
        .last()
        .is_some_and(|seg| seg.ident == "Datastore");
    if !is_datastore {
        return Err(syn::Error::new(
            trait_path.span(),
            "#[datastore] only applies to impls of `Datastore`",
        ));
    }

    if !item.generics.params.is_empty() {
        return Err(syn::Error::new(
            item.generics.span(),
            "#[datastore] cannot detect capabilities through generic parameters; \
             implement `capabilities()` by hand for generic stores",
        ));
    }

    if let Some(existing) = item.items.iter().find_map(|it| match it {
        ImplItem::Fn(f) if f.sig.ident == GENERATED => Some(f),
        _ => None,
    }) {
        return Err(syn::Error::new(
            existing.sig.ident.span(),
            "`capabilities` is derived by #[datastore]; remove the manual definition",
        ));
    }

    item.items.push(syn::parse_quote! {
        fn capabilities(&self) -> ::scopestore::Capabilities<'_> {
            ::scopestore::capabilities_of!(self)
        }
    });

    Ok(item.into_token_stream())
}
