//! # Layer 4: Scoped Views
//!
//! Narrow a store down to a requested subset of its capabilities.
//!
//! ```text
//! requested names --> features_by_name --+
//!                                        +--> intersection --> Scoped view
//! store ----------> features_for_datastore
//! ```
//!
//! A scoped view forwards the base contract unconditionally and carries a
//! copy of the store's capability holder with every non-granted slot revoked.
//! Revocation goes through each catalog entry's own revoke function, so the
//! builder never inspects the store's concrete type.
//!
//! Views borrow the store. Dropping a view leaves the store untouched, and
//! views can themselves be scoped again: `scope(scope(s, A), B)` grants
//! `A ∩ B ∩ supported(s)`.

use tracing::{debug, trace};

use crate::detect::{features_for_datastore, Capabilities};
use crate::registry::{features_by_name, intersection, Feature};
use crate::store::{Datastore, Key, Result};

/// A store seen through a capability scope.
#[derive(Clone, Copy)]
pub enum View<'a> {
    /// No scoping was requested: the store itself.
    Base(&'a dyn Datastore),
    /// The store restricted to a granted feature set.
    Scoped(Scoped<'a>),
}

/// A store restricted to a granted feature set.
#[derive(Clone, Copy)]
pub struct Scoped<'a> {
    inner: &'a dyn Datastore,
    granted: Capabilities<'a>,
}

impl<'a> Scoped<'a> {
    /// Restricts `store` to `requested ∩ supported`.
    pub fn new(store: &'a dyn Datastore, requested: &[Feature]) -> Self {
        Scoped { inner: store, granted: store.capabilities().restrict(requested) }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &'a dyn Datastore {
        self.inner
    }

    /// Granted features, in catalog order.
    pub fn granted(&self) -> Vec<Feature> {
        self.granted.features()
    }
}

impl<'a> View<'a> {
    pub fn is_scoped(&self) -> bool {
        matches!(self, View::Scoped(_))
    }

    /// The wrapped store.
    pub fn inner(&self) -> &'a dyn Datastore {
        match self {
            View::Base(store) => *store,
            View::Scoped(scoped) => scoped.inner,
        }
    }

    /// Features this view exposes, in catalog order.
    pub fn features(&self) -> Vec<Feature> {
        features_for_datastore(Some(self))
    }

    fn as_datastore(&self) -> &dyn Datastore {
        match self {
            View::Base(store) => *store,
            View::Scoped(scoped) => scoped,
        }
    }
}

/// Restricts `store` to the given features.
///
/// Always wraps: an empty `features` list yields a view that exposes only the
/// base contract.
pub fn with_features<'a>(store: &'a dyn Datastore, features: &[Feature]) -> View<'a> {
    let scoped = Scoped::new(store, features);
    debug!(
        requested = ?feature_names(features),
        granted = ?feature_names(&scoped.granted()),
        "scoped datastore"
    );
    View::Scoped(scoped)
}

/// Restricts `store` to the named features it actually supports.
///
/// - `None` store: `None` view.
/// - no names at all: the unwrapped store ([`View::Base`]).
/// - otherwise: a [`View::Scoped`] exposing `features_by_name(names) ∩
///   features_for_datastore(store)`, possibly nothing.
pub fn scope<'a, I, S>(store: Option<&'a dyn Datastore>, names: I) -> Option<View<'a>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let store = store?;
    let mut names = names.into_iter().peekable();
    if names.peek().is_none() {
        trace!("no features requested, returning base datastore");
        return Some(View::Base(store));
    }

    let requested = features_by_name(names);
    let supported = features_for_datastore(Some(store));
    let granted = intersection(&requested, &supported);
    debug!(
        requested = ?feature_names(&requested),
        supported = ?feature_names(&supported),
        granted = ?feature_names(&granted),
        "scoped datastore"
    );
    Some(View::Scoped(Scoped::new(store, &granted)))
}

fn feature_names(features: &[Feature]) -> Vec<&'static str> {
    features.iter().map(Feature::name).collect()
}

// =============================================================================
// Forwarding
// =============================================================================

impl Datastore for Scoped<'_> {
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
        self.granted
    }
}

impl Datastore for View<'_> {
    fn get(&self, key: &Key) -> Result<Vec<u8>> {
        self.as_datastore().get(key)
    }
    fn has(&self, key: &Key) -> Result<bool> {
        self.as_datastore().has(key)
    }
    fn put(&self, key: &Key, value: &[u8]) -> Result<()> {
        self.as_datastore().put(key, value)
    }
    fn delete(&self, key: &Key) -> Result<()> {
        self.as_datastore().delete(key)
    }
    fn sync(&self, prefix: &Key) -> Result<()> {
        self.as_datastore().sync(prefix)
    }
    fn close(&self) -> Result<()> {
        self.as_datastore().close()
    }
    fn capabilities(&self) -> Capabilities<'_> {
        self.as_datastore().capabilities()
    }
}

impl core::fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            View::Base(store) => f.debug_tuple("Base").field(&store.capabilities()).finish(),
            View::Scoped(scoped) => f.debug_tuple("Scoped").field(&scoped.granted).finish(),
        }
    }
}
