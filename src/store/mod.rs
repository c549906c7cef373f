//! # Layer 0: Base Store Contract
//!
//! The minimal contract every store and every scoped view satisfies:
//! get, put, delete, has, sync and close over byte values.
//!
//! Besides the data plane, a store reports its capability surface through
//! [`Datastore::capabilities`]. That method is derived from the store's type,
//! never written by hand:
//!
//! ```ignore
//! use scopestore::prelude::*;
//!
//! struct MapStore { /* ... */ }
//!
//! #[datastore]
//! impl Datastore for MapStore {
//!     fn get(&self, key: &Key) -> Result<Vec<u8>> { /* ... */ }
//!     // put, delete, has, sync, close
//! }
//!
//! impl BatchingFeature for MapStore { /* ... */ }
//! ```

pub mod error;
pub mod key;

pub use error::{Error, Result};
pub use key::Key;

use crate::detect::Capabilities;

/// A key/value store.
///
/// Methods take `&self`; stores own whatever synchronization they need.
pub trait Datastore: Send + Sync {
    /// Returns the value stored under `key`, or [`Error::NotFound`].
    fn get(&self, key: &Key) -> Result<Vec<u8>>;

    fn has(&self, key: &Key) -> Result<bool>;

    fn put(&self, key: &Key, value: &[u8]) -> Result<()>;

    /// Removes `key`. Deleting an absent key is not an error.
    fn delete(&self, key: &Key) -> Result<()>;

    /// Flushes every pending write under `prefix` to its backing medium.
    fn sync(&self, prefix: &Key) -> Result<()>;

    fn close(&self) -> Result<()>;

    /// The optional capabilities of this store's type.
    ///
    /// Generated by `#[datastore]` or `capabilities_of!(self)`. Must not read
    /// store data: the result depends on the concrete type only.
    fn capabilities(&self) -> Capabilities<'_>;
}

impl<D: Datastore + ?Sized> Datastore for Box<D> {
    fn get(&self, key: &Key) -> Result<Vec<u8>> {
        (**self).get(key)
    }
    fn has(&self, key: &Key) -> Result<bool> {
        (**self).has(key)
    }
    fn put(&self, key: &Key, value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }
    fn delete(&self, key: &Key) -> Result<()> {
        (**self).delete(key)
    }
    fn sync(&self, prefix: &Key) -> Result<()> {
        (**self).sync(prefix)
    }
    fn close(&self) -> Result<()> {
        (**self).close()
    }
    fn capabilities(&self) -> Capabilities<'_> {
        (**self).capabilities()
    }
}

/// Deferred writes produced by a batching store.
///
/// Nothing is visible in the store until [`Batch::commit`].
pub trait Batch: Send {
    fn put(&mut self, key: &Key, value: &[u8]) -> Result<()>;

    fn delete(&mut self, key: &Key) -> Result<()>;

    fn commit(self: Box<Self>) -> Result<()>;
}

/// A transaction opened by a transactional store.
pub trait Txn: Send {
    fn get(&self, key: &Key) -> Result<Vec<u8>>;

    fn has(&self, key: &Key) -> Result<bool>;

    fn put(&mut self, key: &Key, value: &[u8]) -> Result<()>;

    fn delete(&mut self, key: &Key) -> Result<()>;

    fn commit(self: Box<Self>) -> Result<()>;

    /// Drops every change made in this transaction.
    fn discard(self: Box<Self>);
}
