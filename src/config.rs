//! Cache Configuration Module
//!
//! This module provides configuration structures for the cache engines and
//! the object pool. Each type has its own dedicated configuration struct
//! with public fields.
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: No constructors or builder methods needed
//!
//! Capacity constraints are carried in the types. The LRU ring cannot be
//! empty, so `LruCacheConfig::capacity` is a `NonZeroUsize`; the LFU cache
//! supports a zero-capacity always-miss mode, so `LfuCacheConfig::capacity`
//! is a plain `usize`.
//!
//! | Config | Type | Description |
//! |--------|------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | `LfuCacheConfig` | [`LfuCache`](crate::LfuCache) | Least Frequently Used |
//! | `PoolConfig` | [`ObjectPool`](crate::concurrent::ObjectPool) | Bounded object pool (`concurrent` feature) |
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

pub mod lfu;
pub mod lru;

#[cfg(feature = "concurrent")]
pub mod pool;

pub use lfu::LfuCacheConfig;
pub use lru::LruCacheConfig;

#[cfg(feature = "concurrent")]
pub use pool::PoolConfig;
