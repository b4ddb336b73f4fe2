//! Thread-safe building blocks.
//!
//! This module carries the two concurrency-facing pieces of the crate, both
//! built on `parking_lot` primitives:
//!
//! - [`ReadThroughCache`]: an eviction engine behind an `RwLock`, with
//!   read-through miss population and a write-to-read lock-downgrade
//!   validity protocol.
//! - [`ObjectPool`]: a fixed set of reusable resources gated by a counting
//!   semaphore, with panic-safe checkout.
//!
//! The engines themselves stay single-threaded; all cross-thread
//! coordination lives here. Available when the `concurrent` feature is
//! enabled.

pub mod pool;
pub mod read_through;

pub use pool::ObjectPool;
pub use read_through::ReadThroughCache;
