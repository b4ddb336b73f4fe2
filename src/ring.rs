//! Fixed-capacity circular slot ring used by the LRU cache.
//!
//! All `cap` slots are allocated once at construction and linked into a
//! circular doubly linked list. Links are stored as indices into the slot
//! array rather than pointers, so reordering is plain index surgery with no
//! allocation and no unsafe code.
//!
//! ```text
//!        next: ──►        prev: ◄──
//!
//!    ┌──────────────────────────────────┐
//!    ▼                                  │
//! [slot a] ──► [slot b] ──► [slot c] ──►┘
//!  (MRU)                     (head)
//! ```
//!
//! The `head` index always names the next slot to be evicted (the least
//! recently used one). The slot just after `head` in `next` direction is the
//! most recently used; walking `next` from there visits slots in decreasing
//! recency until the walk arrives back at `head`.
//!
//! Slots are never added or removed; an unoccupied slot simply carries no
//! value. Promoting a slot is at most six link updates.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

/// A single ring slot. `value` is `None` while the slot has never been
/// claimed (or was explicitly retired).
struct Slot<T> {
    value: Option<T>,
    prev: usize,
    next: usize,
}

/// A circular doubly linked list of exactly `cap` pre-allocated slots,
/// addressed by index.
pub(crate) struct Ring<T> {
    slots: Box<[Slot<T>]>,
    head: usize,
}

impl<T> Ring<T> {
    /// Creates a ring of `cap` empty slots linked in a circle.
    pub(crate) fn new(cap: NonZeroUsize) -> Self {
        let cap = cap.get();
        let slots: Vec<Slot<T>> = (0..cap)
            .map(|i| Slot {
                value: None,
                prev: (i + cap - 1) % cap,
                next: (i + 1) % cap,
            })
            .collect();
        Ring {
            slots: slots.into_boxed_slice(),
            head: 0,
        }
    }

    /// Returns the number of slots in the ring.
    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the index of the next-to-evict slot.
    #[inline]
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    /// Returns a reference to the value stored in `idx`, if the slot is
    /// occupied.
    #[inline]
    pub(crate) fn value(&self, idx: usize) -> Option<&T> {
        self.slots[idx].value.as_ref()
    }

    /// Returns a mutable reference to the value stored in `idx`, if the slot
    /// is occupied.
    #[inline]
    pub(crate) fn value_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots[idx].value.as_mut()
    }

    /// Stores `value` in slot `idx`, returning the previous occupant.
    #[inline]
    pub(crate) fn replace(&mut self, idx: usize, value: T) -> Option<T> {
        self.slots[idx].value.replace(value)
    }

    /// Removes and returns the value stored in slot `idx`.
    #[inline]
    pub(crate) fn take(&mut self, idx: usize) -> Option<T> {
        self.slots[idx].value.take()
    }

    /// Moves slot `idx` to the most-recently-used position, just after
    /// `head` in `next` direction.
    ///
    /// Touching the head slot itself only rotates `head` one position
    /// backwards: the old head becomes the slot just after the new head,
    /// which is exactly the MRU position.
    pub(crate) fn promote(&mut self, idx: usize) {
        if idx == self.head {
            self.head = self.slots[self.head].prev;
            return;
        }
        // Already at the MRU position; nothing to relink.
        if self.slots[self.head].next == idx {
            return;
        }

        // Detach.
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;

        // Reattach just after head.
        let after = self.slots[self.head].next;
        self.slots[idx].next = after;
        self.slots[after].prev = idx;
        self.slots[self.head].next = idx;
        self.slots[idx].prev = self.head;
    }

    /// Moves slot `idx` to the head position so it becomes the next slot to
    /// be claimed. Used after an explicit removal.
    ///
    /// Eviction walks the ring in `prev` direction starting at `head`, so
    /// the retired slot is spliced in just after the old head and the head
    /// index is pointed at it: the old head stays next in line after `idx`.
    pub(crate) fn retire(&mut self, idx: usize) {
        if idx == self.head {
            return;
        }
        self.promote(idx);
        self.head = idx;
    }

    /// Empties every slot. Link order is left as-is; any circular order is a
    /// valid starting state.
    pub(crate) fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.value = None;
        }
    }
}

impl<T> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring")
            .field("cap", &self.slots.len())
            .field("head", &self.head)
            .finish()
    }
}
