use alloc::sync::Arc;
use core::any::TypeId;
use std::sync::{PoisonError, RwLock};

use envio_reflect::info::Type;
use envio_utils::TypeIdMap;

// -----------------------------------------------------------------------------
// Cache

/// A write-once map from a type to something derived from it.
///
/// Derivation runs outside the lock, so a deriver may recursively query the
/// same cache for other types. When two threads derive the same type, the
/// first insert wins and the loser adopts the stored value, so every caller
/// observes the same `Arc`.
pub(crate) struct Cache<V: ?Sized> {
    label: &'static str,
    map: RwLock<TypeIdMap<Arc<V>>>,
}

impl<V: ?Sized> Cache<V> {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            map: RwLock::new(TypeIdMap::new()),
        }
    }

    pub fn get_or_derive(&self, ty: &Type, derive: impl FnOnce() -> Arc<V>) -> Arc<V> {
        if let Some(value) = self.get(ty.id()) {
            return value;
        }

        log::trace!("deriving {} for {}", self.label, ty.name());
        let derived = derive();

        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        let stored = map.get_or_insert(ty.id(), || derived.clone()).clone();
        if !Arc::ptr_eq(&stored, &derived) {
            log::debug!(
                "{} for {} derived concurrently, keeping the first",
                self.label,
                ty.name()
            );
        }
        stored
    }

    fn get(&self, type_id: TypeId) -> Option<Arc<V>> {
        self.map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.map.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

// -----------------------------------------------------------------------------
// Tests
