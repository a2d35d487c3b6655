use core::any::TypeId;
use core::hash::{BuildHasher, Hasher};

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdHasher

/// Keeps the `u64` a [`TypeId`] writes as its hash.
#[derive(Default)]
struct TypeIdHasher(u64);

impl Hasher for TypeIdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(*byte);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }
}

#[derive(Clone, Copy, Default)]
struct TypeIdState;

impl BuildHasher for TypeIdState {
    type Hasher = TypeIdHasher;

    #[inline]
    fn build_hasher(&self) -> TypeIdHasher {
        TypeIdHasher::default()
    }
}

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map with [`TypeId`] as the fixed key type.
///
/// `TypeId` is already a hash, so keys are passed through unchanged.
/// [`get_or_insert`](Self::get_or_insert) never replaces an existing entry,
/// which is what the write-once caches built on top of this map rely on.
pub struct TypeIdMap<V>(HashMap<TypeId, V, TypeIdState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envio_utils::TypeIdMap;
    /// let map = TypeIdMap::<&str>::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(TypeIdState))
    }

    /// Returns the value for `type_id`, inserting the result of `f` first if
    /// the key is not present.
    ///
    /// An existing value always wins: `f` is only called for a vacant key.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::any::TypeId;
    /// use envio_utils::TypeIdMap;
    ///
    /// let mut map = TypeIdMap::new();
    /// assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || "first"), "first");
    /// assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || "second"), "first");
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Inserts a value, returning the one it replaced.
    #[inline]
    pub fn insert(&mut self, type_id: TypeId, value: V) -> Option<V> {
        self.0.insert(type_id, value)
    }

    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TypeIdMap<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;
    use core::hash::BuildHasher;

    use super::{TypeIdMap, TypeIdState};

    #[test]
    fn first_value_wins() {
        let mut map = TypeIdMap::new();
        let mut calls = 0;
        for value in [1, 2] {
            map.get_or_insert(TypeId::of::<i32>(), || {
                calls += 1;
                value
            });
        }
        assert_eq!(calls, 1);
        assert_eq!(map.get(&TypeId::of::<i32>()), Some(&1));

        assert_eq!(map.insert(TypeId::of::<i32>(), 3), Some(1));
        assert!(map.contains(&TypeId::of::<i32>()));
        assert!(!map.contains(&TypeId::of::<u32>()));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn u64_keys_pass_through() {
        assert_eq!(TypeIdState.hash_one(7_u64), 7);
        assert_ne!(
            TypeIdState.hash_one(TypeId::of::<u8>()),
            TypeIdState.hash_one(TypeId::of::<i8>())
        );
    }
}
