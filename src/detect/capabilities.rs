//! The per-store capability holder.

use core::fmt;

use crate::features::*;
use crate::registry::{feature, features, Feature};

/// Handle table of the optional capabilities of one store.
///
/// Each slot is either a borrowed handle to the store's implementation of that
/// capability, or `None` when the capability is absent. Absence is structural:
/// there is no handle to call, so there is nothing that could fail.
///
/// Holders are produced by [`capabilities_of!`](crate::capabilities_of) (or the
/// `#[datastore]` attribute) and narrowed by [`Capabilities::restrict`].
#[derive(Clone, Copy, Default)]
pub struct Capabilities<'a> {
    pub batching: Option<&'a dyn BatchingFeature>,
    pub checked: Option<&'a dyn CheckedFeature>,
    pub gc: Option<&'a dyn GcFeature>,
    pub persistent: Option<&'a dyn PersistentFeature>,
    pub scrubbed: Option<&'a dyn ScrubbedFeature>,
    pub ttl: Option<&'a dyn TtlFeature>,
    pub txn: Option<&'a dyn TxnFeature>,
}

impl<'a> Capabilities<'a> {
    /// A holder with every slot empty.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether the named capability is present. Unknown names are never present.
    pub fn has(&self, name: &str) -> bool {
        feature(name).is_some_and(|f| f.is_present(self))
    }

    pub fn is_empty(&self) -> bool {
        features().iter().all(|f| !f.is_present(self))
    }

    /// Present capabilities, in catalog order.
    pub fn features(&self) -> Vec<Feature> {
        features().iter().filter(|f| f.is_present(self)).copied().collect()
    }

    /// Drops every slot whose feature is not in `keep`.
    pub fn restrict(mut self, keep: &[Feature]) -> Self {
        for f in features() {
            if !keep.contains(f) {
                f.revoke_from(&mut self);
            }
        }
        self
    }
}

impl fmt::Debug for Capabilities<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(features().iter().filter(|feat| feat.is_present(self)).map(Feature::name))
            .finish()
    }
}
