//! Configuration for the Least Recently Used (LRU) cache.
//!
//! The LRU cache pre-allocates its full slot ring at construction, so the
//! capacity is the one sizing decision. It is a [`NonZeroUsize`]: a zero-slot
//! ring has no slot to claim on insert, and ruling it out in the type keeps
//! the engine free of an empty-ring special case.
//!
//! # Examples
//!
//! ```
//! use bounded_cache::config::LruCacheConfig;
//! use bounded_cache::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(10_000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config);
//! ```

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. All slots are
///   allocated up front; memory use is proportional to capacity, not to the
///   number of live entries.
#[derive(Clone, Copy)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_config_creation() {
        let config = LruCacheConfig {
            capacity: NonZeroUsize::new(1000).unwrap(),
        };
        assert_eq!(config.capacity.get(), 1000);
    }
}
