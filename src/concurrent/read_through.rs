//! Read-through cache wrapper.
//!
//! [`ReadThroughCache`] composes one eviction engine with a
//! `parking_lot::RwLock` and an injected loader. Hits are served under a
//! shared read lock; a miss escalates to the exclusive write lock,
//! re-queries the engine there (another thread may have populated the key
//! while this one waited), and only then invokes the loader and stores the
//! result. Under concurrent misses on one key the loader therefore runs at
//! most once for that key.
//!
//! # Read path and recency
//!
//! The read-locked probe uses [`EvictionCache::peek`], which records no
//! access: promoting an entry mutates engine state and would need exclusive
//! access. Ordering state moves only on the write-locked paths (miss
//! population and explicit `put`). Callers who want every hit promoted can
//! take the write path themselves via [`ReadThroughCache::touch`].
//!
//! # Validity protocol
//!
//! The wrapper carries a cache-wide validity flag. [`invalidate`] clears it;
//! [`validate_and_read`] performs the classic downgrade dance: probe the
//! flag under the read lock, and when it is clear, *release* the read lock,
//! take the write lock, re-check the flag there, refresh if still clear,
//! then downgrade the write lock to a read lock and perform the read while
//! still continuously protected. The lock is never upgraded read-to-write:
//! two readers upgrading at once would deadlock, which is why `parking_lot`
//! offers `RwLockWriteGuard::downgrade` and no unconditional upgrade.
//!
//! [`invalidate`]: ReadThroughCache::invalidate
//! [`validate_and_read`]: ReadThroughCache::validate_and_read

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{RwLock, RwLockWriteGuard};

use crate::traits::EvictionCache;

/// A thread-safe read-through wrapper around an eviction engine.
///
/// `C` is the wrapped engine ([`LruCache`](crate::LruCache) or
/// [`LfuCache`](crate::LfuCache)); `F` is the loader invoked on a miss.
///
/// # Examples
///
/// ```
/// use bounded_cache::concurrent::ReadThroughCache;
/// use bounded_cache::LfuCache;
///
/// let cache = ReadThroughCache::new(LfuCache::new(128), |key: &u32| key * 10);
/// assert_eq!(cache.get(&3), 30); // miss: loaded and stored
/// assert_eq!(cache.get(&3), 30); // hit: served under the read lock
/// ```
pub struct ReadThroughCache<C, F> {
    engine: RwLock<C>,
    loader: F,
    valid: AtomicBool,
}

impl<C, F> ReadThroughCache<C, F> {
    /// Wraps `engine`, populating future misses through `loader`. The
    /// validity flag starts set.
    pub fn new(engine: C, loader: F) -> Self {
        ReadThroughCache {
            engine: RwLock::new(engine),
            loader,
            valid: AtomicBool::new(true),
        }
    }

    /// Clears the validity flag. The next [`validate_and_read`] will run
    /// its refresh closure before reading.
    ///
    /// [`validate_and_read`]: ReadThroughCache::validate_and_read
    pub fn invalidate(&self) {
        self.valid.store(false, Ordering::Release);
    }

    /// Returns the current state of the validity flag.
    pub fn is_valid(&self) -> bool {
        self.valid.load(Ordering::Acquire)
    }
}

impl<C> ReadThroughCache<C, ()> {
    /// Wraps `engine` with no resident loader. Misses are served only
    /// through [`get_or_try_load_with`](ReadThroughCache::get_or_try_load_with).
    pub fn without_loader(engine: C) -> Self {
        ReadThroughCache::new(engine, ())
    }
}

impl<C, F> ReadThroughCache<C, F> {
    /// Returns the value for `key`, loading and caching it on a miss.
    ///
    /// The fast path holds only the read lock. On a miss the write lock is
    /// taken and the engine re-queried before the loader runs, so threads
    /// racing on the same absent key trigger a single load.
    pub fn get<K, V>(&self, key: &K) -> V
    where
        K: Clone,
        V: Clone,
        C: EvictionCache<K, V>,
        F: Fn(&K) -> V,
    {
        {
            let engine = self.engine.read();
            if let Some(value) = engine.peek(key) {
                return value.clone();
            }
        }

        let mut engine = self.engine.write();
        // Double-check under the write lock; a racing thread may have won.
        if let Some(value) = engine.get(key).cloned() {
            return value;
        }

        let value = (self.loader)(key);
        engine.put(key.clone(), value.clone());
        value
    }

    /// Like [`get`](ReadThroughCache::get) but with a fallible, per-call
    /// loader. A load error is propagated to the caller and nothing is
    /// cached; the same double-check protocol keeps concurrent misses from
    /// loading twice when the first load succeeds.
    pub fn get_or_try_load_with<K, V, E>(
        &self,
        key: &K,
        load: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<V, E>
    where
        K: Clone,
        V: Clone,
        C: EvictionCache<K, V>,
    {
        {
            let engine = self.engine.read();
            if let Some(value) = engine.peek(key) {
                return Ok(value.clone());
            }
        }

        let mut engine = self.engine.write();
        if let Some(value) = engine.get(key).cloned() {
            return Ok(value);
        }

        let value = load(key)?;
        engine.put(key.clone(), value.clone());
        Ok(value)
    }

    /// Inserts `key`/`value` under the write lock, returning the evicted or
    /// replaced pair as the engine reports it.
    pub fn put<K, V>(&self, key: K, value: V) -> Option<(K, V)>
    where
        C: EvictionCache<K, V>,
    {
        self.engine.write().put(key, value)
    }

    /// Removes `key` under the write lock.
    pub fn remove<K, V>(&self, key: &K) -> Option<V>
    where
        C: EvictionCache<K, V>,
    {
        self.engine.write().remove(key)
    }

    /// Records an access on `key` under the write lock, returning the value.
    /// This is the promoting counterpart of the non-promoting read-locked
    /// probe in [`get`](ReadThroughCache::get).
    pub fn touch<K, V>(&self, key: &K) -> Option<V>
    where
        V: Clone,
        C: EvictionCache<K, V>,
    {
        self.engine.write().get(key).cloned()
    }

    /// Returns the number of entries currently cached.
    pub fn len<K, V>(&self) -> usize
    where
        C: EvictionCache<K, V>,
    {
        self.engine.read().len()
    }

    /// Drops every cached entry under the write lock.
    pub fn clear<K, V>(&self)
    where
        C: EvictionCache<K, V>,
    {
        self.engine.write().clear()
    }

    /// Ensures the cache is valid, then performs `read` under continuous
    /// read protection.
    ///
    /// When the validity flag is clear the read lock is released, the write
    /// lock taken, the flag re-checked, and `refresh` run over the engine
    /// only if the flag is still clear (at most one thread refreshes per
    /// invalidation). The write lock is then downgraded to a read lock, so
    /// `read` observes the refreshed state with no unprotected window in
    /// between.
    pub fn validate_and_read<R>(
        &self,
        refresh: impl FnOnce(&mut C),
        read: impl FnOnce(&C) -> R,
    ) -> R {
        let engine = self.engine.read();
        if self.valid.load(Ordering::Acquire) {
            return read(&engine);
        }
        // Upgrading a held read lock is not offered; two upgraders would
        // deadlock. Release, then contend for the write lock.
        drop(engine);

        let mut engine = self.engine.write();
        if !self.valid.load(Ordering::Acquire) {
            refresh(&mut engine);
            self.valid.store(true, Ordering::Release);
        }
        let engine = RwLockWriteGuard::downgrade(engine);
        read(&engine)
    }
}

impl<C, F> fmt::Debug for ReadThroughCache<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadThroughCache")
            .field("valid", &self.valid.load(Ordering::Relaxed))
            .finish()
    }
}
