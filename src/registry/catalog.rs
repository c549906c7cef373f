//! The process-wide feature catalog.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, trace};

use super::feature::{Feature, TypeHandle};
use crate::features::*;

/// Ordered feature list plus a name index derived from it.
struct Catalog {
    features: Vec<Feature>,
    by_name: HashMap<&'static str, usize>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// Build a descriptor whose probe/revoke touch the `$slot` field of the holder.
macro_rules! feature {
    ($name:literal, $Feature:ident, $Store:ident, $slot:ident) => {
        Feature {
            name: $name,
            interface: TypeHandle::of::<dyn $Feature>(),
            datastore_interface: TypeHandle::of::<dyn $Store>(),
            index: 0,
            probe: |caps| caps.$slot.is_some(),
            revoke: |caps| caps.$slot = None,
        }
    };
}

/// Every known feature. Append only: existing entries never move.
fn declared() -> Vec<Feature> {
    vec![
        feature!("Batching", BatchingFeature, BatchingDatastore, batching),
        feature!("Checked", CheckedFeature, CheckedDatastore, checked),
        feature!("GC", GcFeature, GcDatastore, gc),
        feature!("Persistent", PersistentFeature, PersistentDatastore, persistent),
        feature!("Scrubbed", ScrubbedFeature, ScrubbedDatastore, scrubbed),
        feature!("TTL", TtlFeature, TtlDatastore, ttl),
        feature!("Transaction", TxnFeature, TxnDatastore, txn),
    ]
}

impl Catalog {
    fn build() -> Self {
        let features: Vec<Feature> = declared()
            .into_iter()
            .enumerate()
            .map(|(index, feature)| Feature { index, ..feature })
            .collect();
        let by_name = features.iter().map(|f| (f.name, f.index)).collect();
        debug!(count = features.len(), "datastore feature catalog built");
        Catalog { features, by_name }
    }
}

/// All datastore features, in canonical order.
///
/// The order is authoritative: every feature list this crate returns follows it.
pub fn features() -> &'static [Feature] {
    &CATALOG.features
}

/// Looks up a single feature by name.
pub fn feature(name: &str) -> Option<Feature> {
    CATALOG.by_name.get(name).map(|&i| CATALOG.features[i])
}

/// The known features among `names`.
///
/// Unknown names are skipped. The result is in catalog order, without
/// duplicates, whatever the order or repetition of `names`.
pub fn features_by_name<I, S>(names: I) -> Vec<Feature>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut wanted = vec![false; CATALOG.features.len()];
    for name in names {
        let name = name.as_ref();
        match CATALOG.by_name.get(name) {
            Some(&i) => wanted[i] = true,
            None => trace!(name, "ignoring unknown datastore feature"),
        }
    }
    select(&wanted)
}

/// Catalog-ordered intersection of two feature lists.
pub fn intersection(a: &[Feature], b: &[Feature]) -> Vec<Feature> {
    let len = CATALOG.features.len();
    let mut in_a = vec![false; len];
    for f in a {
        in_a[f.index] = true;
    }
    let mut both = vec![false; len];
    for f in b {
        both[f.index] = in_a[f.index];
    }
    select(&both)
}

fn select(mask: &[bool]) -> Vec<Feature> {
    CATALOG
        .features
        .iter()
        .zip(mask)
        .filter_map(|(f, &on)| on.then_some(*f))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
