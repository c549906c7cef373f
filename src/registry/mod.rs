//! # Layer 2: Feature Registry
//!
//! A fixed, append-only catalog of the optional datastore capabilities, built
//! once on first use and read-only afterwards.
//!
//! ```text
//! index  name         capability trait      decorated store
//! 0      Batching     BatchingFeature       BatchingDatastore
//! 1      Checked      CheckedFeature        CheckedDatastore
//! 2      GC           GcFeature             GcDatastore
//! 3      Persistent   PersistentFeature     PersistentDatastore
//! 4      Scrubbed     ScrubbedFeature       ScrubbedDatastore
//! 5      TTL          TtlFeature            TtlDatastore
//! 6      Transaction  TxnFeature            TxnDatastore
//! ```

pub mod catalog;
pub mod feature;

pub use catalog::{feature, features, features_by_name, intersection};
pub use feature::{Feature, TypeHandle};
