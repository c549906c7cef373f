//! # Layer 3: Capability Detection
//!
//! Which catalog features does a store support?
//!
//! - [`features_for_datastore`] answers for a store value, including type-erased
//!   `&dyn Datastore` values and scoped views.
//! - [`features_of!`](crate::features_of) answers for a concrete type at compile
//!   time, without any value.
//!
//! Capability is a property of the type. The holder behind a store value is
//! generated from its type with [`capabilities_of!`](crate::capabilities_of),
//! so two values of one type always report the same set.
//!
//! ```ignore
//! use scopestore::{features_for_datastore, features_of};
//!
//! let store = MapStore::default();
//! assert_eq!(features_for_datastore(Some(&store)), features_of!(MapStore));
//! ```

pub mod autoref;
pub mod capabilities;

pub use capabilities::Capabilities;

use crate::registry::{feature, features, Feature};
use crate::store::Datastore;

/// Features supported by `store`, in catalog order. `None` supports nothing.
pub fn features_for_datastore(store: Option<&dyn Datastore>) -> Vec<Feature> {
    let Some(store) = store else {
        return Vec::new();
    };
    let caps = store.capabilities();
    features().iter().filter(|f| f.is_present(&caps)).copied().collect()
}

/// Whether `store` supports the named feature.
pub fn supports(store: &dyn Datastore, name: &str) -> bool {
    feature(name).is_some_and(|f| f.is_present(&store.capabilities()))
}
