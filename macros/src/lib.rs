//! Procedural macros for the scopestore capability registry
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[datastore]` | `impl Datastore for T` | Derive `capabilities()` from `T`'s capability traits |
//!
//! ## Example
//!
//! ```ignore
//! #[datastore]
//! impl Datastore for MapStore {
//!     fn get(&self, key: &Key) -> Result<Vec<u8>> { ... }
//!     // has, put, delete, sync, close
//! }
//!
//! // Picked up automatically: MapStore now reports "Batching".
//! impl BatchingFeature for MapStore { ... }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod datastore;

/// Complete an `impl Datastore for T` block with a type-derived
/// `capabilities()` method.
///
/// The generated body is `::scopestore::capabilities_of!(self)`, so the
/// reported features always match the capability traits `T` implements.
/// Writing `capabilities` by hand inside the block is rejected, and so are
/// generic impls: detection needs the concrete store type.
///
/// # Usage
/// ```ignore
/// #[datastore]
/// impl Datastore for NullStore {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn datastore(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[datastore] takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    let item_impl = parse_macro_input!(item as syn::ItemImpl);
    datastore::expand_datastore(item_impl)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
