//! Bounded object pool.
//!
//! [`ObjectPool`] owns a fixed set of reusable resources and hands them out
//! one borrower at a time, gated by a counting semaphore initialized to the
//! pool size. `execute` blocks for a permit, pops an idle resource, runs the
//! caller's closure over it, and puts the resource back on every exit path.
//! The return leg rides a drop guard, so a panicking closure still restores
//! the resource and its permit before the panic continues unwinding.
//!
//! Invariant: idle resources plus outstanding checkouts always equals the
//! configured size, and the semaphore's permit count always equals the
//! number of idle resources.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

use parking_lot::{Condvar, Mutex};

use crate::config::PoolConfig;

/// A counting semaphore over a mutex-guarded counter.
///
/// `parking_lot` ships no semaphore; a `Mutex<usize>` paired with a
/// `Condvar` is the standard rendition and the pool's only blocking point.
struct Semaphore {
    permits: Mutex<usize>,
    available: Condvar,
}

impl Semaphore {
    fn new(permits: usize) -> Self {
        Semaphore {
            permits: Mutex::new(permits),
            available: Condvar::new(),
        }
    }

    /// Blocks until a permit is available, then takes it.
    fn acquire(&self) {
        let mut permits = self.permits.lock();
        while *permits == 0 {
            self.available.wait(&mut permits);
        }
        *permits -= 1;
    }

    /// Returns a permit and wakes one waiter.
    fn release(&self) {
        let mut permits = self.permits.lock();
        *permits += 1;
        self.available.notify_one();
    }

    fn permits(&self) -> usize {
        *self.permits.lock()
    }
}

/// A fixed-size pool of reusable resources.
///
/// All `size` resources are built up front from the supplied factory; none
/// are created or destroyed afterwards. At most `size` borrowers run
/// concurrently; the `size + 1`-th caller of [`execute`](ObjectPool::execute)
/// blocks until a resource comes back.
///
/// # Examples
///
/// ```
/// use bounded_cache::concurrent::ObjectPool;
/// use core::num::NonZeroUsize;
///
/// let pool = ObjectPool::new(NonZeroUsize::new(4).unwrap(), || Vec::<u8>::with_capacity(4096));
/// let n = pool.execute(|buf| {
///     buf.extend_from_slice(b"scratch");
///     buf.len()
/// });
/// assert_eq!(n, 7);
/// ```
pub struct ObjectPool<T> {
    shelf: Mutex<Vec<T>>,
    semaphore: Semaphore,
    size: NonZeroUsize,
}

impl<T> ObjectPool<T> {
    /// Creates a pool of `size` resources, each built by one call to
    /// `factory`.
    pub fn new(size: NonZeroUsize, mut factory: impl FnMut() -> T) -> Self {
        let shelf: Vec<T> = (0..size.get()).map(|_| factory()).collect();
        ObjectPool {
            shelf: Mutex::new(shelf),
            semaphore: Semaphore::new(size.get()),
            size,
        }
    }

    /// Creates a pool from a configuration.
    pub fn init(config: PoolConfig, factory: impl FnMut() -> T) -> Self {
        ObjectPool::new(config.size, factory)
    }

    /// Returns the configured pool size.
    #[inline]
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Returns the number of resources currently idle in the pool. Racy by
    /// nature; useful for diagnostics and tests, not for control flow.
    pub fn idle(&self) -> usize {
        self.semaphore.permits()
    }

    /// Borrows a resource and runs `op` over it, blocking while the pool is
    /// exhausted.
    ///
    /// The resource is returned and the permit released on every exit path.
    /// A panic in `op` propagates to the caller after the return, so user
    /// code failure never leaks pool capacity.
    pub fn execute<R>(&self, op: impl FnOnce(&mut T) -> R) -> R {
        self.semaphore.acquire();
        let resource = self
            .shelf
            .lock()
            .pop()
            .expect("held permit implies an idle resource");

        let mut checkout = Checkout {
            pool: self,
            resource: Some(resource),
        };
        op(checkout
            .resource
            .as_mut()
            .expect("resource present until guard drops"))
    }
}

/// Drop guard for a checked-out resource. Restores the resource and the
/// permit whether `op` returns or panics.
struct Checkout<'a, T> {
    pool: &'a ObjectPool<T>,
    resource: Option<T>,
}

impl<T> Drop for Checkout<'_, T> {
    fn drop(&mut self) {
        if let Some(resource) = self.resource.take() {
            self.pool.shelf.lock().push(resource);
        }
        self.pool.semaphore.release();
    }
}

impl<T> fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("size", &self.size)
            .field("idle", &self.idle())
            .finish()
    }
}
