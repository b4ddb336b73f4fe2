//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides an LRU cache with O(1) `get` and `put`. The cache
//! keeps its entries in a fixed-capacity circular ring of slots allocated
//! once at construction; a hit or an insert is index surgery on the ring
//! plus one hash-map operation, with no allocation on the hot path.
//!
//! # Algorithm
//!
//! The ring's head slot always holds the least recently used entry, which is
//! also the next eviction victim. Touching an entry splices its slot to the
//! most-recently-used position; inserting a new key claims the head slot,
//! evicting whatever key occupied it, and then promotes it the same way.
//! A slot that has never been claimed evicts nothing when reused, which is
//! how the cache fills up to capacity.
//!
//! # Capacity
//!
//! Capacity zero is rejected at the type level: construction takes
//! [`NonZeroUsize`]. The ring always holds exactly `cap` slots.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe, and `get` mutates recency state,
//! so concurrent unsynchronized use is a precondition violation even for
//! lookups. Wrap the cache in
//! [`ReadThroughCache`](crate::concurrent::ReadThroughCache) or a lock of
//! your own for concurrent access.

#[cfg(test)]
extern crate alloc;

use crate::config::LruCacheConfig;
use crate::ring::Ring;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When a new key is inserted
/// at capacity, the least recently used entry is evicted to make room.
///
/// # Examples
///
/// ```
/// use bounded_cache::LruCache;
/// use core::num::NonZeroUsize;
///
/// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing an entry updates its recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used entry
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    ring: Ring<(K, V)>,
    map: HashMap<K, usize, S>,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a new LRU cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache from a configuration.
    pub fn init(config: LruCacheConfig) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::new(config.capacity)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        let map_capacity = cap.get().next_power_of_two();
        LruCache {
            ring: Ring::new(cap),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
        }
    }

    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn cap(&self) -> usize {
        self.ring.cap()
    }

    /// Returns the current number of key-value pairs in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a reference to the value corresponding to the key and marks
    /// the entry as most recently used.
    ///
    /// A miss is a normal outcome, reported as `None`.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key)?;
        self.ring.promote(idx);
        self.ring.value(idx).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value corresponding to the key and
    /// marks the entry as most recently used.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key)?;
        self.ring.promote(idx);
        self.ring.value_mut(idx).map(|(_, v)| v)
    }

    /// Returns a reference to the value corresponding to the key without
    /// updating recency.
    ///
    /// This is the probe used by read-locked callers that cannot take
    /// exclusive access.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key)?;
        self.ring.value(idx).map(|(_, v)| v)
    }

    /// Returns `true` if the cache holds a value for `key`, without updating
    /// recency.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Clears the cache, removing all key-value pairs. Capacity is
    /// unchanged.
    pub fn clear(&mut self) {
        self.map.clear();
        self.ring.clear();
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the key is already present its value is updated in place and the
    /// entry is promoted to most recently used; the old pair is returned.
    /// Otherwise the head slot of the ring is claimed for the new entry and
    /// the pair it previously held, if any, is returned as the eviction.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            let old = self.ring.replace(idx, (key, value));
            self.ring.promote(idx);
            return old;
        }

        let idx = self.ring.head();
        let evicted = self.ring.replace(idx, (key.clone(), value));
        if let Some((old_key, _)) = evicted.as_ref() {
            self.map.remove(old_key);
        }
        self.map.insert(key, idx);
        self.ring.promote(idx);
        evicted
    }

    /// Removes a key from the cache, returning its value if it was present.
    ///
    /// The freed slot becomes the next one claimed by `put`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.map.remove(key)?;
        let (_, value) = self.ring.take(idx)?;
        self.ring.retire(idx);
        Some(value)
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.ring.cap())
            .field("len", &self.map.len())
            .finish()
    }
}
