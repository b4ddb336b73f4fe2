//! Configuration for the bounded object pool.
//!
//! Available when the `concurrent` feature is enabled.
//!
//! # Examples
//!
//! ```
//! use bounded_cache::config::PoolConfig;
//! use bounded_cache::concurrent::ObjectPool;
//! use core::num::NonZeroUsize;
//!
//! let config = PoolConfig {
//!     size: NonZeroUsize::new(8).unwrap(),
//! };
//! let pool = ObjectPool::init(config, || Vec::<u8>::with_capacity(4096));
//! ```

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an [`ObjectPool`](crate::concurrent::ObjectPool).
///
/// # Fields
///
/// - `size`: Number of pooled resources, which is also the maximum number of
///   borrowers running at once. A pool of zero resources could never serve a
///   borrower, so the size is a [`NonZeroUsize`].
#[derive(Clone, Copy)]
pub struct PoolConfig {
    /// Number of resources the pool creates up front and hands out.
    pub size: NonZeroUsize,
}

impl fmt::Debug for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolConfig")
            .field("size", &self.size)
            .finish()
    }
}
