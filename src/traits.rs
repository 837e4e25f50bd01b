//! The priority-queue capability contract
//!
//! This module provides the two traits every backend implements:
//!
//! - [`PriorityQueue`]: the operations an engine drives (insert, extract-min,
//!   decrease-key, emptiness checks)
//! - [`Backend`]: a [`PriorityQueue`] that can be constructed from a capacity
//!   hint, so callers can pick one at the call site of an engine
//!
//! Keys are `i64` priorities and values are `usize` vertex ids. Handles returned
//! by `insert` are generational arena keys: once their entry is extracted they
//! stop resolving, and any later `decrease_key` reports
//! [`HeapError::InvalidHandle`].

use std::fmt;

/// Priority type stored in every queue (distance estimate or edge weight)
pub type Key = i64;

/// Value type stored alongside each key (a vertex id)
pub type Vertex = usize;

/// Errors reported by priority-queue operations
///
/// Every variant is a contract violation; callers abort the current run when
/// they see one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// `extract_min` was called on an empty queue
    #[error("extract_min called on an empty queue")]
    Empty,
    /// The new priority is greater than the current priority
    #[error("new priority {new} is greater than current priority {current}")]
    PriorityNotDecreased {
        /// Priority currently stored for the entry
        current: Key,
        /// Priority that was requested
        new: Key,
    },
    /// The handle is no longer valid (element was extracted or cleared)
    #[error("handle is no longer valid (element was removed)")]
    InvalidHandle,
    /// An internal structural invariant does not hold
    #[error("internal heap structure is corrupted: {0}")]
    Corrupted(&'static str),
}

/// A handle to an element in the queue, used for `decrease_key`
///
/// This is an opaque type that identifies a specific entry. All backends in
/// this crate use `slotmap` keys, so handles are small, `Copy`, and detect use
/// after extraction.
pub trait Handle: Copy + Eq + fmt::Debug {}

/// Operations every priority-queue backend supports
///
/// The engines in [`crate::pathfinding`] and [`crate::spanning`] are written
/// only against this trait.
///
/// # Example
///
/// ```rust
/// use heapswap::{Backend, PriorityQueue};
/// use heapswap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert(10, 7);
/// heap.insert(5, 3);
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.extract_min(), Ok((1, 7)));
/// assert_eq!(heap.extract_min(), Ok((5, 3)));
/// assert!(heap.is_empty());
/// ```
pub trait PriorityQueue {
    /// The handle type for this queue, used to reference entries for `decrease_key`
    type Handle: Handle;

    /// Returns true if no entries remain
    fn is_empty(&self) -> bool;

    /// Returns the number of live entries
    fn len(&self) -> usize;

    /// Inserts an entry, returning a handle for later `decrease_key` calls
    ///
    /// # Time Complexity
    /// - Binary Heap: O(log n)
    /// - Fibonacci Heap: O(1) amortized
    /// - Pairing Heap: O(1)
    fn insert(&mut self, key: Key, value: Vertex) -> Self::Handle;

    /// Returns the minimum entry without removing it
    fn peek(&self) -> Option<(Key, Vertex)>;

    /// Removes and returns the entry with the smallest key
    ///
    /// Ties are broken deterministically for a given backend, but not
    /// consistently across backends.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue has no entries.
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap, O(log n) amortized for the others.
    fn extract_min(&mut self) -> Result<(Key, Vertex), HeapError>;

    /// Removes and returns the minimum entry, or `None` when empty
    fn pop(&mut self) -> Option<(Key, Vertex)> {
        if self.is_empty() {
            None
        } else {
            self.extract_min().ok()
        }
    }

    /// Lowers the key of the entry referenced by `handle`
    ///
    /// A `new_key` equal to the current key leaves the queue unchanged.
    ///
    /// # Errors
    /// - [`HeapError::PriorityNotDecreased`] if `new_key` is greater than the
    ///   entry's current key
    /// - [`HeapError::InvalidHandle`] if the entry was already extracted
    ///
    /// # Time Complexity
    /// - Binary Heap: O(log n)
    /// - Fibonacci Heap: O(1) amortized
    /// - Pairing Heap: O(log n) amortized
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: Key) -> Result<(), HeapError>;

    /// Removes every entry, invalidating all outstanding handles
    fn clear(&mut self);
}

/// A priority queue that can be created at an engine's call site
///
/// Dropping a backend releases every entry it still owns.
pub trait Backend: PriorityQueue + Sized {
    /// Short name used in reports ("Binary", "Fibonacci", "Pairing")
    const NAME: &'static str;

    /// Creates an empty queue. The capacity is only a hint.
    fn with_capacity(capacity_hint: usize) -> Self;

    /// Creates an empty queue with no capacity hint
    fn new() -> Self {
        Self::with_capacity(0)
    }
}
