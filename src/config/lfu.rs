//! Configuration for the Least Frequently Used (LFU) cache.
//!
//! Unlike the LRU cache, the LFU cache accepts a capacity of zero: the
//! resulting cache stores nothing, misses on every `get`, and treats every
//! `put` as a no-op. This degenerate form is occasionally useful for
//! disabling a cache through configuration alone.
//!
//! # Examples
//!
//! ```
//! use bounded_cache::config::LfuCacheConfig;
//! use bounded_cache::LfuCache;
//!
//! let config = LfuCacheConfig { capacity: 10_000 };
//! let cache: LfuCache<String, i32> = LfuCache::init(config);
//! ```

use core::fmt;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Zero is valid
///   and yields a cache that never stores anything.
#[derive(Clone, Copy)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
