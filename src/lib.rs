#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Choosing an engine
//!
//! | Engine | Evicts | Best Use Case |
//! |--------|--------|---------------|
//! | [`LruCache`] | Least recently used entry | Temporal locality, general purpose |
//! | [`LfuCache`] | Least frequently used entry | Stable popularity patterns |
//!
//! Both engines are `get`/`put`/`remove` in O(1) and never allocate
//! proportionally to an operation: the LRU ring is fully pre-allocated at
//! construction, and the LFU arena recycles freed slots.
//!
//! ## Code Examples
//!
//! ### LRU (Least Recently Used)
//!
//! ```rust
//! use bounded_cache::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ### LFU (Least Frequently Used)
//!
//! ```rust
//! use bounded_cache::LfuCache;
//!
//! let mut cache = LfuCache::new(2);
//! cache.put("rare", 1);
//! cache.put("popular", 2);
//!
//! // Access "popular" multiple times
//! for _ in 0..10 { cache.get(&"popular"); }
//!
//! cache.put("new", 3);  // "rare" evicted (lowest frequency)
//! assert!(cache.peek(&"popular").is_some());
//! ```
//!
//! ### Read-through wrapper (feature `concurrent`)
//!
//! ```rust
//! # #[cfg(feature = "concurrent")] {
//! use bounded_cache::concurrent::ReadThroughCache;
//! use bounded_cache::LfuCache;
//!
//! let cache = ReadThroughCache::new(LfuCache::new(1024), |key: &u64| key.to_string());
//! assert_eq!(cache.get(&42), "42"); // miss: loader invoked once
//! assert_eq!(cache.get(&42), "42"); // hit under the read lock
//! # }
//! ```
//!
//! ### Object pool (feature `concurrent`)
//!
//! ```rust
//! # #[cfg(feature = "concurrent")] {
//! use bounded_cache::concurrent::ObjectPool;
//! use core::num::NonZeroUsize;
//!
//! let pool = ObjectPool::new(NonZeroUsize::new(4).unwrap(), || Vec::<u8>::new());
//! pool.execute(|buf| buf.extend_from_slice(b"reused scratch space"));
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`lfu`]: Least Frequently Used cache implementation
//! - [`traits`]: The [`EvictionCache`] abstraction over both engines
//! - [`config`]: Configuration structures
//! - [`concurrent`]: Read-through wrapper and object pool (requires the
//!   `concurrent` feature)

#![no_std]

/// Index-addressed slot arena used by the LFU cache.
pub(crate) mod arena;

/// Fixed-capacity circular slot ring used by the LRU cache.
pub(crate) mod ring;

/// Cache configuration structures.
///
/// Provides configuration structures for both cache engines and the object
/// pool.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items
/// when the capacity is reached.
pub mod lru;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used items
/// when capacity is reached. Items are tracked by their access frequency.
pub mod lfu;

/// The common [`EvictionCache`](traits::EvictionCache) interface implemented
/// by both engines.
pub mod traits;

/// Thread-safe building blocks: the read-through wrapper and the bounded
/// object pool.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

// Re-export cache types
pub use lfu::LfuCache;
pub use lru::LruCache;
pub use traits::EvictionCache;

#[cfg(feature = "concurrent")]
pub use concurrent::{ObjectPool, ReadThroughCache};
