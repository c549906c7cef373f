//! # Layer 1: Capability Interfaces
//!
//! One trait per optional behaviour a store may implement, and one
//! "decorated store" trait per capability (`Datastore` + that capability).
//!
//! | Feature | Capability trait | Decorated store |
//! |---------|------------------|-----------------|
//! | Batching | [`BatchingFeature`] | [`BatchingDatastore`] |
//! | Checked | [`CheckedFeature`] | [`CheckedDatastore`] |
//! | GC | [`GcFeature`] | [`GcDatastore`] |
//! | Persistent | [`PersistentFeature`] | [`PersistentDatastore`] |
//! | Scrubbed | [`ScrubbedFeature`] | [`ScrubbedDatastore`] |
//! | TTL | [`TtlFeature`] | [`TtlDatastore`] |
//! | Transaction | [`TxnFeature`] | [`TxnDatastore`] |
//!
//! Decorated traits are blanket-implemented; a store only ever implements the
//! capability traits.

use std::time::{Duration, SystemTime};

use crate::store::{Batch, Datastore, Key, Result, Txn};

/// Produces batches of deferred writes.
pub trait BatchingFeature: Send + Sync {
    fn batch(&self) -> Result<Box<dyn Batch + '_>>;
}

/// Runs an internal consistency check.
pub trait CheckedFeature: Send + Sync {
    fn check(&self) -> Result<()>;
}

/// Reclaims space held by deleted or expired entries.
pub trait GcFeature: Send + Sync {
    fn collect_garbage(&self) -> Result<()>;
}

pub trait PersistentFeature: Send + Sync {
    /// Bytes used on durable media.
    fn disk_usage(&self) -> Result<u64>;
}

/// Runs a scrub pass (bit-rot detection and repair).
pub trait ScrubbedFeature: Send + Sync {
    fn scrub(&self) -> Result<()>;
}

/// Entries with a time-to-live.
pub trait TtlFeature: Send + Sync {
    fn put_with_ttl(&self, key: &Key, value: &[u8], ttl: Duration) -> Result<()>;

    fn set_ttl(&self, key: &Key, ttl: Duration) -> Result<()>;

    fn get_expiration(&self, key: &Key) -> Result<SystemTime>;
}

pub trait TxnFeature: Send + Sync {
    fn new_transaction(&self, read_only: bool) -> Result<Box<dyn Txn + '_>>;
}

// =============================================================================
// Decorated stores (generated)
// =============================================================================

/// Declare `$Store: Datastore + $Feature` with its blanket impl.
macro_rules! decorated {
    ($(#[$doc:meta])* $Store:ident: $Feature:ident) => {
        $(#[$doc])*
        pub trait $Store: Datastore + $Feature {}
        impl<T: Datastore + $Feature + ?Sized> $Store for T {}
    };
}

decorated!(
    /// A store that batches writes.
    BatchingDatastore: BatchingFeature
);
decorated!(CheckedDatastore: CheckedFeature);
decorated!(GcDatastore: GcFeature);
decorated!(PersistentDatastore: PersistentFeature);
decorated!(ScrubbedDatastore: ScrubbedFeature);
decorated!(
    /// A store whose entries can expire.
    TtlDatastore: TtlFeature
);
decorated!(TxnDatastore: TxnFeature);
