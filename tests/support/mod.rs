//! Fixture stores shared by the integration tests.
//!
//! | Store | Capabilities |
//! |-------|--------------|
//! | `MapDatastore` | Batching |
//! | `NullDatastore` | Batching |
//! | `LogDatastore` | Batching, Checked, GC, Persistent, Scrubbed |
//! | `FullDatastore` | all seven |
//! | `BareDatastore` | none |

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime};

use parking_lot::{Mutex, RwLock};
use scopestore::prelude::*;

// =============================================================================
// MapDatastore
// =============================================================================

/// In-memory store. Writes stay unsynced until `sync` covers their key, and
/// every call after `close` fails with [`Error::Closed`].
#[derive(Default)]
pub struct MapDatastore {
    values: RwLock<BTreeMap<Key, Vec<u8>>>,
    unsynced: Mutex<BTreeSet<Key>>,
    closed: AtomicBool,
}

impl MapDatastore {
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Keys written or deleted since the last `sync` covering them.
    pub fn unsynced(&self) -> Vec<Key> {
        self.unsynced.lock().iter().cloned().collect()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(Error::Closed);
        }
        Ok(())
    }

    fn apply(&self, ops: Vec<(Key, Option<Vec<u8>>)>) {
        let mut values = self.values.write();
        let mut unsynced = self.unsynced.lock();
        for (key, value) in ops {
            match value {
                Some(value) => values.insert(key.clone(), value),
                None => values.remove(&key),
            };
            unsynced.insert(key);
        }
    }

    fn bytes_used(&self) -> u64 {
        self.values.read().values().map(|v| v.len() as u64).sum()
    }
}

#[datastore]
impl Datastore for MapDatastore {
    fn get(&self, key: &Key) -> Result<Vec<u8>> {
        self.ensure_open()?;
        self.values.read().get(key).cloned().ok_or(Error::NotFound)
    }
    fn has(&self, key: &Key) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.values.read().contains_key(key))
    }
    fn put(&self, key: &Key, value: &[u8]) -> Result<()> {
        self.ensure_open()?;
        self.apply(vec![(key.clone(), Some(value.to_vec()))]);
        Ok(())
    }
    fn delete(&self, key: &Key) -> Result<()> {
        self.ensure_open()?;
        self.apply(vec![(key.clone(), None)]);
        Ok(())
    }
    fn sync(&self, prefix: &Key) -> Result<()> {
        self.ensure_open()?;
        self.unsynced
            .lock()
            .retain(|key| key != prefix && !prefix.is_ancestor_of(key));
        Ok(())
    }
    fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Err(Error::Closed);
        }
        Ok(())
    }
}

impl BatchingFeature for MapDatastore {
    fn batch(&self) -> Result<Box<dyn Batch + '_>> {
        Ok(Box::new(MapBatch { store: self, ops: Vec::new() }))
    }
}

pub struct MapBatch<'a> {
    store: &'a MapDatastore,
    ops: Vec<(Key, Option<Vec<u8>>)>,
}

impl Batch for MapBatch<'_> {
    fn put(&mut self, key: &Key, value: &[u8]) -> Result<()> {
        self.ops.push((key.clone(), Some(value.to_vec())));
        Ok(())
    }
    fn delete(&mut self, key: &Key) -> Result<()> {
        self.ops.push((key.clone(), None));
        Ok(())
    }
    fn commit(self: Box<Self>) -> Result<()> {
        self.store.ensure_open()?;
        self.store.apply(self.ops);
        Ok(())
    }
}

// =============================================================================
// NullDatastore
// =============================================================================

/// Stores nothing; every read misses.
#[derive(Default)]
pub struct NullDatastore;

#[datastore]
impl Datastore for NullDatastore {
    fn get(&self, _key: &Key) -> Result<Vec<u8>> {
        Err(Error::NotFound)
    }
    fn has(&self, _key: &Key) -> Result<bool> {
        Ok(false)
    }
    fn put(&self, _key: &Key, _value: &[u8]) -> Result<()> {
        Ok(())
    }
    fn delete(&self, _key: &Key) -> Result<()> {
        Ok(())
    }
    fn sync(&self, _prefix: &Key) -> Result<()> {
        Ok(())
    }
    fn close(&self) -> Result<()> {
        Ok(())
    }
}

struct NullBatch;

impl Batch for NullBatch {
    fn put(&mut self, _key: &Key, _value: &[u8]) -> Result<()> {
        Ok(())
    }
    fn delete(&mut self, _key: &Key) -> Result<()> {
        Ok(())
    }
    fn commit(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

impl BatchingFeature for NullDatastore {
    fn batch(&self) -> Result<Box<dyn Batch + '_>> {
        Ok(Box::new(NullBatch))
    }
}

// =============================================================================
// LogDatastore
// =============================================================================

/// Records every call, then forwards to an inner map store.
#[derive(Default)]
pub struct LogDatastore {
    pub child: MapDatastore,
    log: Mutex<Vec<String>>,
}

impl LogDatastore {
    fn record(&self, line: impl Into<String>) {
        self.log.lock().push(line.into());
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().clone()
    }
}

#[datastore]
impl Datastore for LogDatastore {
    fn get(&self, key: &Key) -> Result<Vec<u8>> {
        self.record(format!("get {key}"));
        self.child.get(key)
    }
    fn has(&self, key: &Key) -> Result<bool> {
        self.record(format!("has {key}"));
        self.child.has(key)
    }
    fn put(&self, key: &Key, value: &[u8]) -> Result<()> {
        self.record(format!("put {key}"));
        self.child.put(key, value)
    }
    fn delete(&self, key: &Key) -> Result<()> {
        self.record(format!("delete {key}"));
        self.child.delete(key)
    }
    fn sync(&self, prefix: &Key) -> Result<()> {
        self.record(format!("sync {prefix}"));
        self.child.sync(prefix)
    }
    fn close(&self) -> Result<()> {
        self.record("close");
        self.child.close()
    }
}

impl BatchingFeature for LogDatastore {
    fn batch(&self) -> Result<Box<dyn Batch + '_>> {
        self.record("batch");
        self.child.batch()
    }
}

impl CheckedFeature for LogDatastore {
    fn check(&self) -> Result<()> {
        self.record("check");
        Ok(())
    }
}

impl GcFeature for LogDatastore {
    fn collect_garbage(&self) -> Result<()> {
        self.record("gc");
        Ok(())
    }
}

impl PersistentFeature for LogDatastore {
    fn disk_usage(&self) -> Result<u64> {
        self.record("disk_usage");
        Ok(self.child.bytes_used())
    }
}

impl ScrubbedFeature for LogDatastore {
    fn scrub(&self) -> Result<()> {
        self.record("scrub");
        Ok(())
    }
}

// =============================================================================
// FullDatastore
// =============================================================================

/// Supports every catalog feature.
#[derive(Default)]
pub struct FullDatastore {
    pub map: MapDatastore,
    expirations: Mutex<HashMap<Key, SystemTime>>,
}

#[datastore]
impl Datastore for FullDatastore {
    fn get(&self, key: &Key) -> Result<Vec<u8>> {
        self.map.get(key)
    }
    fn has(&self, key: &Key) -> Result<bool> {
        self.map.has(key)
    }
    fn put(&self, key: &Key, value: &[u8]) -> Result<()> {
        self.map.put(key, value)
    }
    fn delete(&self, key: &Key) -> Result<()> {
        self.expirations.lock().remove(key);
        self.map.delete(key)
    }
    fn sync(&self, prefix: &Key) -> Result<()> {
        self.map.sync(prefix)
    }
    fn close(&self) -> Result<()> {
        self.map.close()
    }
}

impl BatchingFeature for FullDatastore {
    fn batch(&self) -> Result<Box<dyn Batch + '_>> {
        self.map.batch()
    }
}

impl CheckedFeature for FullDatastore {
    fn check(&self) -> Result<()> {
        Ok(())
    }
}

impl GcFeature for FullDatastore {
    fn collect_garbage(&self) -> Result<()> {
        let now = SystemTime::now();
        let expired: Vec<Key> = self
            .expirations
            .lock()
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(k, _)| k.clone())
            .collect();
        for key in expired {
            self.delete(&key)?;
        }
        Ok(())
    }
}

impl PersistentFeature for FullDatastore {
    fn disk_usage(&self) -> Result<u64> {
        Ok(self.map.bytes_used())
    }
}

impl ScrubbedFeature for FullDatastore {
    fn scrub(&self) -> Result<()> {
        Ok(())
    }
}

impl TtlFeature for FullDatastore {
    fn put_with_ttl(&self, key: &Key, value: &[u8], ttl: Duration) -> Result<()> {
        self.map.put(key, value)?;
        self.set_ttl(key, ttl)
    }
    fn set_ttl(&self, key: &Key, ttl: Duration) -> Result<()> {
        if !self.map.has(key)? {
            return Err(Error::NotFound);
        }
        self.expirations.lock().insert(key.clone(), SystemTime::now() + ttl);
        Ok(())
    }
    fn get_expiration(&self, key: &Key) -> Result<SystemTime> {
        self.expirations.lock().get(key).copied().ok_or(Error::NotFound)
    }
}

impl TxnFeature for FullDatastore {
    fn new_transaction(&self, read_only: bool) -> Result<Box<dyn Txn + '_>> {
        Ok(Box::new(MapTxn { store: &self.map, read_only, pending: BTreeMap::new() }))
    }
}

pub struct MapTxn<'a> {
    store: &'a MapDatastore,
    read_only: bool,
    pending: BTreeMap<Key, Option<Vec<u8>>>,
}

impl MapTxn<'_> {
    fn writable(&self) -> Result<()> {
        if self.read_only {
            return Err(Error::backend("read-only transaction"));
        }
        Ok(())
    }
}

impl Txn for MapTxn<'_> {
    fn get(&self, key: &Key) -> Result<Vec<u8>> {
        match self.pending.get(key) {
            Some(Some(value)) => Ok(value.clone()),
            Some(None) => Err(Error::NotFound),
            None => self.store.get(key),
        }
    }
    fn has(&self, key: &Key) -> Result<bool> {
        match self.pending.get(key) {
            Some(value) => Ok(value.is_some()),
            None => self.store.has(key),
        }
    }
    fn put(&mut self, key: &Key, value: &[u8]) -> Result<()> {
        self.writable()?;
        self.pending.insert(key.clone(), Some(value.to_vec()));
        Ok(())
    }
    fn delete(&mut self, key: &Key) -> Result<()> {
        self.writable()?;
        self.pending.insert(key.clone(), None);
        Ok(())
    }
    fn commit(self: Box<Self>) -> Result<()> {
        self.store.ensure_open()?;
        self.store.apply(self.pending.into_iter().collect());
        Ok(())
    }
    fn discard(self: Box<Self>) {}
}

// =============================================================================
// BareDatastore
// =============================================================================

/// Implements the base contract and nothing else.
///
/// Written without `#[datastore]` to exercise `capabilities_of!` directly.
#[derive(Default)]
pub struct BareDatastore {
    inner: MapDatastore,
}

impl Datastore for BareDatastore {
    fn get(&self, key: &Key) -> Result<Vec<u8>> {
        self.inner.get(key)
    }
    fn has(&self, key: &Key) -> Result<bool> {
        self.inner.has(key)
    }
    fn put(&self, key: &Key, value: &[u8]) -> Result<()> {
        self.inner.put(key, value)
    }
    fn delete(&self, key: &Key) -> Result<()> {
        self.inner.delete(key)
    }
    fn sync(&self, prefix: &Key) -> Result<()> {
        self.inner.sync(prefix)
    }
    fn close(&self) -> Result<()> {
        self.inner.close()
    }
    fn capabilities(&self) -> Capabilities<'_> {
        scopestore::capabilities_of!(self)
    }
}

// =============================================================================
// Helpers
// =============================================================================

pub fn names(features: &[Feature]) -> Vec<&'static str> {
    features.iter().map(Feature::name).collect()
}
