//! # scopestore
//!
//! Capability registry and capability-scoped views for key/value datastores.
//!
//! A base store implements the minimal [`Datastore`] contract and, optionally,
//! any of a fixed set of capability traits (batching, TTL, transactions, ...).
//! This crate answers two questions without knowing the store's concrete type:
//!
//! 1. *What can this store do?* ([`features_for_datastore`], [`features_of!`])
//! 2. *Give me this store, but only able to do X and Y.* ([`scope`])
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Base Store                                              |
//! |  - Key, Error, Datastore, Batch, Txn                              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability Interfaces                                   |
//! |  - BatchingFeature .. TxnFeature, BatchingDatastore .. TxnDatastore |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Feature Registry                                        |
//! |  - features(), features_by_name(), Feature, TypeHandle            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Detection                                               |
//! |  - Capabilities holder, capabilities_of!, features_of!            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Scoped Views                                            |
//! |  - scope(), with_features(), View                                 |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Capability is a type property
//!
//! A store's capability surface is generated from its type by the
//! `#[datastore]` attribute, using autoref fallback detection. Two values of
//! the same type always report the same features, and reporting them never
//! reads store data.
//!
//! ## Quick Start
//!
//! ```ignore
//! use scopestore::prelude::*;
//!
//! #[derive(Default)]
//! struct MapStore { /* ... */ }
//!
//! #[datastore]
//! impl Datastore for MapStore {
//!     // get, has, put, delete, sync, close
//! }
//!
//! impl BatchingFeature for MapStore { /* ... */ }
//!
//! let store = MapStore::default();
//! let view = scope(Some(&store), ["Batching", "TTL"]).unwrap();
//!
//! // TTL was requested but MapStore cannot do it.
//! assert_eq!(view.features(), features_by_name(["Batching"]));
//! if let Some(batching) = view.capabilities().batching {
//!     let mut batch = batching.batch()?;
//!     batch.put(&Key::new("/a"), b"1")?;
//!     batch.commit()?;
//! }
//! ```

// =============================================================================
// Layer 0: Base Store
// =============================================================================
pub mod store;

// =============================================================================
// Layer 1: Capability Interfaces
// =============================================================================
pub mod features;

// =============================================================================
// Layer 2: Feature Registry
// =============================================================================
pub mod registry;

// =============================================================================
// Layer 3: Detection
// =============================================================================
pub mod detect;

// Detection macros (capabilities_of!, features_of!)
pub mod syntax_macros;

// =============================================================================
// Layer 4: Scoped Views
// =============================================================================
pub mod scoped;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use detect::{features_for_datastore, supports, Capabilities};
pub use features::{
    BatchingDatastore, BatchingFeature, CheckedDatastore, CheckedFeature, GcDatastore,
    GcFeature, PersistentDatastore, PersistentFeature, ScrubbedDatastore, ScrubbedFeature,
    TtlDatastore, TtlFeature, TxnDatastore, TxnFeature,
};
pub use registry::{feature, features, features_by_name, Feature, TypeHandle};
pub use scoped::{scope, with_features, Scoped, View};
pub use store::{Batch, Datastore, Error, Key, Result, Txn};

// Re-export proc-macros
#[cfg(feature = "derive")]
pub use macros::datastore;

/// Common items for implementing and scoping stores.
pub mod prelude {
    pub use crate::detect::{features_for_datastore, supports, Capabilities};
    pub use crate::features::*;
    pub use crate::registry::{features, features_by_name, Feature};
    pub use crate::scoped::{scope, with_features, View};
    pub use crate::store::{Batch, Datastore, Error, Key, Result, Txn};
    #[cfg(feature = "derive")]
    pub use macros::datastore;
    // Note: capabilities_of!, features_of! are #[macro_export] so they're at crate root
}
