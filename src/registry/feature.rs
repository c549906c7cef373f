//! Feature descriptors.

use core::any::{type_name, TypeId};
use core::fmt;

use crate::detect::Capabilities;

/// Type-level handle standing in for an interface, e.g. `dyn BatchingFeature`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeHandle {
    id: TypeId,
    name: &'static str,
}

impl TypeHandle {
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeHandle { id: TypeId::of::<T>(), name: type_name::<T>() }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True when this handle identifies `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A catalog entry: one optional datastore capability.
///
/// Descriptors are only created by the catalog, which also assigns each its
/// ordinal. Besides the public metadata, a descriptor knows how to find and
/// drop its own slot in a [`Capabilities`] holder, which is what lets scoping
/// work without naming any concrete store type.
#[derive(Clone, Copy)]
pub struct Feature {
    pub(crate) name: &'static str,
    pub(crate) interface: TypeHandle,
    pub(crate) datastore_interface: TypeHandle,
    pub(crate) index: usize,
    pub(crate) probe: fn(&Capabilities<'_>) -> bool,
    pub(crate) revoke: fn(&mut Capabilities<'_>),
}

impl Feature {
    /// Stable name; never reused for a different meaning.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Handle of the capability trait object, e.g. `dyn TtlFeature`.
    pub fn interface(&self) -> TypeHandle {
        self.interface
    }

    /// Handle of the decorated store trait object, e.g. `dyn TtlDatastore`.
    pub fn datastore_interface(&self) -> TypeHandle {
        self.datastore_interface
    }

    /// Position in the catalog.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether `caps` carries a handle for this capability.
    pub fn is_present(&self, caps: &Capabilities<'_>) -> bool {
        (self.probe)(caps)
    }

    pub(crate) fn revoke_from(&self, caps: &mut Capabilities<'_>) {
        (self.revoke)(caps)
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.interface == other.interface
            && self.datastore_interface == other.datastore_interface
    }
}

impl Eq for Feature {}

impl fmt::Debug for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feature")
            .field("name", &self.name)
            .field("interface", &self.interface)
            .field("datastore_interface", &self.datastore_interface)
            .finish()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
