//! Detection macros.
//!
//! Both macros expand at the call site so that the autoref fallback resolves
//! against the concrete store type written there.

// =============================================================================
// capabilities_of! - Build the capability holder of a store value
// =============================================================================

/// Build the [`Capabilities`](crate::Capabilities) holder of a concrete store.
///
/// Every slot is filled with a handle to the store if its type implements the
/// matching capability trait, and left empty otherwise. This is the body of
/// [`Datastore::capabilities`](crate::Datastore::capabilities); the
/// `#[datastore]` attribute inserts it for you.
///
/// # Usage
///
/// ```ignore
/// impl Datastore for MapStore {
///     // get, has, put, delete, sync, close ...
///
///     fn capabilities(&self) -> Capabilities<'_> {
///         scopestore::capabilities_of!(self)
///     }
/// }
/// ```
#[macro_export]
macro_rules! capabilities_of {
    ($store:expr) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::*;

        let probe = $crate::detect::autoref::Probe($store);
        $crate::detect::Capabilities {
            batching: probe.batching(),
            checked: probe.checked(),
            gc: probe.gc(),
            persistent: probe.persistent(),
            scrubbed: probe.scrubbed(),
            ttl: probe.ttl(),
            txn: probe.txn(),
        }
    }};
}

// =============================================================================
// features_of! - Type-level detection (concrete types only)
// =============================================================================

/// Features a concrete store type supports, in catalog order.
///
/// Uses the "Inherent Const Fallback" pattern, so no value of the type is
/// needed and nothing is ever called on one.
///
/// # Usage
///
/// ```ignore
/// assert_eq!(features_of!(MapStore), features_by_name(["Batching"]));
/// ```
#[macro_export]
macro_rules! features_of {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::*;

        $crate::detect::autoref::from_flags(&[
            ("Batching", Detect::<$T>::IS_BATCHING),
            ("Checked", Detect::<$T>::IS_CHECKED),
            ("GC", Detect::<$T>::IS_GC),
            ("Persistent", Detect::<$T>::IS_PERSISTENT),
            ("Scrubbed", Detect::<$T>::IS_SCRUBBED),
            ("TTL", Detect::<$T>::IS_TTL),
            ("Transaction", Detect::<$T>::IS_TXN),
        ])
    }};
}

// =============================================================================
// Tests
// =============================================================================
