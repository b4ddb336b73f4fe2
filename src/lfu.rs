//! Least Frequently Used (LFU) Cache Implementation.
//!
//! The LFU cache evicts the least frequently accessed entry when it reaches
//! capacity. Entries live in an index-addressed arena; a key map and a
//! frequency index both refer to entries by arena index, so no entry data is
//! ever duplicated between the two views.
//!
//! # Algorithm
//!
//! Every entry carries an access frequency, starting at 1 on insertion and
//! incremented by exactly 1 on each hit. The frequency index maps each
//! frequency value to an intrusive list of the entries currently at that
//! frequency, ordered most-recently-touched first. A scalar `min_frequency`
//! tracks the smallest frequency with a non-empty list.
//!
//! On a hit the entry moves from the front region of its old frequency list
//! to the front of the next one; because frequencies only ever grow in steps
//! of one, `min_frequency` can be maintained with a single increment when
//! the old minimum's list empties out. On overflow the eviction victim is
//! the *back* of the `min_frequency` list: among entries tied at the lowest
//! frequency, the one least recently inserted or touched at that frequency
//! goes first. This tie-break is part of the contract and is covered by
//! tests.
//!
//! # Capacity
//!
//! A capacity of zero is a valid degenerate configuration: every `get` is a
//! miss and every `put` is a no-op. Nothing is ever stored.
//!
//! # Thread Safety
//!
//! Not thread-safe; `get` mutates frequency state. External synchronization
//! is required for concurrent use, and unsynchronized sharing is a
//! precondition violation.

extern crate alloc;

use crate::arena::Arena;
use crate::config::LfuCacheConfig;
use alloc::collections::BTreeMap;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A cache entry plus its intrusive links within its frequency list.
struct LfuEntry<K, V> {
    key: K,
    value: V,
    frequency: u64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Head and tail of one frequency list. Entries link to each other through
/// their arena indices; the list itself stores no entry data.
#[derive(Default)]
struct FreqList {
    head: Option<usize>,
    tail: Option<usize>,
}

/// An implementation of a Least Frequently Used (LFU) cache.
///
/// The cache tracks an access frequency per entry and evicts the least
/// frequently used entry when it reaches capacity. Ties at the minimum
/// frequency are broken by evicting the entry least recently touched at
/// that frequency.
///
/// # Examples
///
/// ```
/// use bounded_cache::LfuCache;
///
/// let mut cache = LfuCache::new(2);
/// cache.put(1, 1);
/// cache.put(2, 2);
/// assert_eq!(cache.get(&1), Some(&1)); // frequency of 1 is now 2
///
/// cache.put(3, 3);                     // evicts 2 (frequency 1 < 2)
/// assert_eq!(cache.get(&2), None);
/// assert_eq!(cache.get(&3), Some(&3));
/// assert_eq!(cache.get(&1), Some(&1));
/// ```
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    capacity: usize,
    min_frequency: u64,
    map: HashMap<K, usize, S>,
    entries: Arena<LfuEntry<K, V>>,
    freq_lists: BTreeMap<u64, FreqList>,
}

impl<K: Hash + Eq, V> LfuCache<K, V> {
    /// Creates a new LFU cache holding at most `cap` entries.
    ///
    /// `cap == 0` yields a cache that never stores anything: every `get`
    /// misses and every `put` is a no-op.
    pub fn new(cap: usize) -> LfuCache<K, V, DefaultHashBuilder> {
        LfuCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates a new LFU cache from a configuration.
    pub fn init(config: LfuCacheConfig) -> LfuCache<K, V, DefaultHashBuilder> {
        LfuCache::new(config.capacity)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates a new LFU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: usize, hash_builder: S) -> Self {
        LfuCache {
            capacity: cap,
            min_frequency: 1,
            map: HashMap::with_capacity_and_hasher(cap, hash_builder),
            entries: Arena::with_capacity(cap),
            freq_lists: BTreeMap::new(),
        }
    }

    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn cap(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of key-value pairs in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unlinks entry `idx` from its frequency list, dropping the list if it
    /// empties. Returns `true` if the list was dropped.
    ///
    /// `min_frequency` is deliberately left alone; each caller knows how it
    /// must move.
    fn unlink(&mut self, idx: usize) -> bool {
        let (freq, prev, next) = {
            let e = self.entries.get(idx).expect("linked entry is live");
            (e.frequency, e.prev, e.next)
        };

        if let Some(p) = prev {
            self.entries.get_mut(p).expect("linked entry is live").next = next;
        }
        if let Some(n) = next {
            self.entries.get_mut(n).expect("linked entry is live").prev = prev;
        }

        let list = self
            .freq_lists
            .get_mut(&freq)
            .expect("live entry has a frequency list");
        if list.head == Some(idx) {
            list.head = next;
        }
        if list.tail == Some(idx) {
            list.tail = prev;
        }
        let emptied = list.head.is_none();
        if emptied {
            self.freq_lists.remove(&freq);
        }

        let e = self.entries.get_mut(idx).expect("linked entry is live");
        e.prev = None;
        e.next = None;
        emptied
    }

    /// Links entry `idx` at the front (most-recently-touched end) of the
    /// list for `freq`, creating the list on first use, and stamps the
    /// entry's frequency.
    fn push_front(&mut self, idx: usize, freq: u64) {
        let old_head = {
            let list = self.freq_lists.entry(freq).or_default();
            let old_head = list.head;
            list.head = Some(idx);
            if list.tail.is_none() {
                list.tail = Some(idx);
            }
            old_head
        };

        if let Some(h) = old_head {
            self.entries.get_mut(h).expect("list head is live").prev = Some(idx);
        }
        let e = self.entries.get_mut(idx).expect("linked entry is live");
        e.frequency = freq;
        e.prev = None;
        e.next = old_head;
    }

    /// Bumps entry `idx` by one frequency step and relinks it at the front
    /// of its new frequency list.
    fn touch(&mut self, idx: usize) {
        let freq = self.entries.get(idx).expect("touched entry is live").frequency;
        let emptied = self.unlink(idx);
        if emptied && freq == self.min_frequency {
            // Frequencies move in steps of exactly one, so when the old
            // minimum's list empties the new minimum is one above it.
            self.min_frequency = freq + 1;
        }
        self.push_front(idx, freq + 1);
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// A hit increments the entry's frequency by 1 and moves it to the
    /// most-recently-touched position at the new frequency.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key)?;
        self.touch(idx);
        self.entries.get(idx).map(|e| &e.value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// Counts as an access: the entry's frequency is incremented.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key)?;
        self.touch(idx);
        self.entries.get_mut(idx).map(|e| &mut e.value)
    }

    /// Returns a reference to the value corresponding to the key without
    /// touching its frequency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key)?;
        self.entries.get(idx).map(|e| &e.value)
    }

    /// Returns the current access frequency of `key`, if present. Does not
    /// count as an access.
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key)?;
        self.entries.get(idx).map(|e| e.frequency)
    }

    /// Returns `true` if the cache holds a value for `key`, without touching
    /// its frequency.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Removes a key from the cache, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.map.remove(key)?;
        let freq = self.entries.get(idx)?.frequency;
        let emptied = self.unlink(idx);
        let entry = self.entries.remove(idx)?;
        if emptied && freq == self.min_frequency {
            // Unlike the hit path there is no adjacent frequency to step
            // to; fall back to the smallest remaining list.
            self.min_frequency = self.freq_lists.keys().next().copied().unwrap_or(1);
        }
        Some(entry.value)
    }

    /// Clears the cache, removing all key-value pairs. Capacity is
    /// unchanged.
    pub fn clear(&mut self) {
        self.map.clear();
        self.entries.clear();
        self.freq_lists.clear();
        self.min_frequency = 1;
    }

    /// Removes and returns the current eviction victim: the entry at the
    /// back of the minimum-frequency list.
    fn evict(&mut self) -> Option<(K, V)> {
        let victim = self.freq_lists.get(&self.min_frequency)?.tail?;
        self.unlink(victim);
        let entry = self.entries.remove(victim)?;
        self.map.remove(&entry.key);
        Some((entry.key, entry.value))
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the key is already present its value is replaced and the entry
    /// takes a frequency bump exactly as a `get` would; the old pair is
    /// returned. Otherwise, at capacity, the back of the minimum-frequency
    /// list is evicted first and returned, and the new entry is inserted
    /// with frequency 1, resetting `min_frequency` to 1.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(&idx) = self.map.get(&key) {
            let slot = &mut self.entries.get_mut(idx).expect("mapped entry is live").value;
            let old = mem::replace(slot, value);
            self.touch(idx);
            return Some((key, old));
        }

        let mut evicted = None;
        if self.len() >= self.capacity {
            evicted = self.evict();
            // min_frequency is stale here; the insert below resets it.
        }

        let idx = self.entries.insert(LfuEntry {
            key: key.clone(),
            value,
            frequency: 1,
            prev: None,
            next: None,
        });
        self.map.insert(key, idx);
        self.push_front(idx, 1);
        self.min_frequency = 1;

        evicted
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> fmt::Debug for LfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("min_frequency", &self.min_frequency)
            .finish()
    }
}
