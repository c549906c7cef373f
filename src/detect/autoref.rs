//! Autoref-based capability detection machinery.
//!
//! Two flavours of the "inherent beats trait" fallback trick, one per
//! capability trait `F`:
//!
//! 1. `Detect::<T>::IS_F`: an inherent const `true` when `T: F`, otherwise the
//!    fallback trait const `false`. Needs no value at all.
//! 2. `Probe(&value).f()`: an inherent method returning `Some(&value as &dyn F)`
//!    when `T: F`, otherwise the fallback trait method returning `None`.
//!
//! Both resolve at compile time from the type alone; neither touches the
//! value's data.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`, where the fallback
//! always wins.

use core::marker::PhantomData;

use crate::features::*;
use crate::registry::{features_by_name, Feature};

/// Type-only detection wrapper.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

/// Value detection wrapper borrowing the store.
#[doc(hidden)]
pub struct Probe<'a, T>(pub &'a T);

/// Generate fallback traits, inherent const and inherent probe for a capability.
macro_rules! impl_detect {
    ($Feature:ident => $slot:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Feature Fallback>] { const [<IS_ $slot:upper>]: bool = false; }
            impl<T> [<$Feature Fallback>] for Detect<T> {}
            impl<T: $Feature> Detect<T> { pub const [<IS_ $slot:upper>]: bool = true; }

            #[doc(hidden)]
            pub trait [<$Feature ProbeFallback>]<'a> {
                fn $slot(&self) -> Option<&'a dyn $Feature> { None }
            }
            impl<'a, T> [<$Feature ProbeFallback>]<'a> for Probe<'a, T> {}
            impl<'a, T: $Feature + 'a> Probe<'a, T> {
                pub fn $slot(&self) -> Option<&'a dyn $Feature> { Some(self.0) }
            }
        }
    };
}

impl_detect!(BatchingFeature => batching);
impl_detect!(CheckedFeature => checked);
impl_detect!(GcFeature => gc);
impl_detect!(PersistentFeature => persistent);
impl_detect!(ScrubbedFeature => scrubbed);
impl_detect!(TtlFeature => ttl);
impl_detect!(TxnFeature => txn);

/// Turns `(name, detected)` pairs into a catalog-ordered feature list.
#[doc(hidden)]
pub fn from_flags(flags: &[(&str, bool)]) -> Vec<Feature> {
    features_by_name(flags.iter().filter(|(_, on)| *on).map(|(name, _)| *name))
}
