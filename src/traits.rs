//! The common eviction-cache interface.
//!
//! [`EvictionCache`] abstracts over the eviction discipline so callers (most
//! notably the concurrent read-through wrapper) can be written once against
//! either engine. Construction is not part of the trait: the two engines
//! encode different capacity rules in their constructor types.

use core::hash::{BuildHasher, Hash};

use crate::lfu::LfuCache;
use crate::lru::LruCache;

/// A bounded key-value cache that evicts on overflow.
///
/// `get` is `&mut self` on purpose: both eviction disciplines update their
/// ordering state on a hit. `peek` is the non-mutating probe for callers
/// that hold only shared access.
pub trait EvictionCache<K, V> {
    /// Returns the maximum number of entries the cache can hold.
    fn capacity(&self) -> usize;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value for `key` without recording an access.
    fn peek(&self, key: &K) -> Option<&V>;

    /// Returns the value for `key`, recording an access (recency or
    /// frequency, per discipline).
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Inserts `key`/`value`, returning the evicted pair on overflow or the
    /// replaced pair when the key was already present.
    fn put(&mut self, key: K, value: V) -> Option<(K, V)>;

    /// Removes `key`, returning its value if present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Drops every entry. Capacity is unchanged.
    fn clear(&mut self);
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> EvictionCache<K, V> for LruCache<K, V, S> {
    fn capacity(&self) -> usize {
        self.cap()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn peek(&self, key: &K) -> Option<&V> {
        self.peek(key)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.put(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> EvictionCache<K, V> for LfuCache<K, V, S> {
    fn capacity(&self) -> usize {
        self.cap()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn peek(&self, key: &K) -> Option<&V> {
        self.peek(key)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.put(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::num::NonZeroUsize;

    fn exercise(cache: &mut dyn EvictionCache<u32, u32>) {
        assert!(cache.is_empty());
        assert_eq!(cache.put(1, 10), None);
        assert_eq!(cache.put(2, 20), None);
        assert_eq!(cache.get(&1), Some(&10));
        assert_eq!(cache.peek(&2), Some(&20));
        assert_eq!(cache.len(), 2);

        // Both disciplines evict key 2 here: it is least recently used and
        // tied for lowest frequency with the older touch.
        let evicted = cache.put(3, 30);
        assert_eq!(evicted, Some((2, 20)));
        assert_eq!(cache.get(&2), None);

        assert_eq!(cache.remove(&1), Some(10));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 2);
    }

    #[test]
    fn test_lru_through_trait() {
        let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
        exercise(&mut cache);
    }

    #[test]
    fn test_lfu_through_trait() {
        let mut cache = LfuCache::new(2);
        exercise(&mut cache);
    }
}
