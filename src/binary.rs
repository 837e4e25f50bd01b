//! Binary Heap implementation
//!
//! An array-backed binary min-heap with `decrease_key` support.
//!
//! Entries live in a `slotmap` arena; the heap array stores arena keys, and
//! every entry caches its current array index. Each swap updates the cached
//! index of both entries so `decrease_key` can sift up from the right place
//! without searching.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `peek`         | O(1)       |
//! | `decrease_key` | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use heapswap::{Backend, PriorityQueue};
//! use heapswap::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::with_capacity(3);
//! heap.insert(3, 30);
//! let h = heap.insert(5, 50);
//! heap.insert(4, 40);
//! heap.decrease_key(&h, 1).unwrap();
//!
//! assert_eq!(heap.extract_min(), Ok((1, 50)));
//! assert_eq!(heap.extract_min(), Ok((3, 30)));
//! assert_eq!(heap.extract_min(), Ok((4, 40)));
//! ```

use crate::traits::{Backend, Handle, HeapError, Key, PriorityQueue, Vertex};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to an element in a binary heap
    pub struct BinaryHandle;
}

impl Handle for BinaryHandle {}

#[derive(Debug)]
struct Entry {
    key: Key,
    value: Vertex,
    /// Position of this entry in `BinaryHeap::heap`
    index: usize,
}

/// A binary min-heap with addressable entries
#[derive(Debug, Default)]
pub struct BinaryHeap {
    entries: SlotMap<BinaryHandle, Entry>,
    /// Complete binary tree, zero-indexed
    heap: Vec<BinaryHandle>,
}

impl Backend for BinaryHeap {
    const NAME: &'static str = "Binary";

    fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            entries: SlotMap::with_capacity_and_key(capacity_hint),
            heap: Vec::with_capacity(capacity_hint),
        }
    }
}

impl PriorityQueue for BinaryHeap {
    type Handle = BinaryHandle;

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, key: Key, value: Vertex) -> BinaryHandle {
        let index = self.heap.len();
        let handle = self.entries.insert(Entry { key, value, index });
        self.heap.push(handle);
        self.sift_up(index);
        handle
    }

    fn peek(&self) -> Option<(Key, Vertex)> {
        let root = self.heap.first()?;
        let entry = &self.entries[*root];
        Some((entry.key, entry.value))
    }

    fn extract_min(&mut self) -> Result<(Key, Vertex), HeapError> {
        if self.heap.is_empty() {
            return Err(HeapError::Empty);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let root = self
            .heap
            .pop()
            .ok_or(HeapError::Corrupted("heap array shrank unexpectedly"))?;
        let entry = self
            .entries
            .remove(root)
            .ok_or(HeapError::Corrupted("heap array references a freed entry"))?;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok((entry.key, entry.value))
    }

    fn decrease_key(&mut self, handle: &BinaryHandle, new_key: Key) -> Result<(), HeapError> {
        let entry = self
            .entries
            .get_mut(*handle)
            .ok_or(HeapError::InvalidHandle)?;

        if new_key > entry.key {
            return Err(HeapError::PriorityNotDecreased {
                current: entry.key,
                new: new_key,
            });
        }

        entry.key = new_key;
        let index = entry.index;
        self.sift_up(index);
        Ok(())
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.entries.clear();
    }
}

impl BinaryHeap {
    #[inline]
    fn key_at(&self, index: usize) -> Key {
        self.entries[self.heap[index]].key
    }

    /// Swaps two array slots and refreshes both cached indices
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.entries[self.heap[a]].index = a;
        self.entries[self.heap[b]].index = b;
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.key_at(index) < self.key_at(parent) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.key_at(left) < self.key_at(smallest) {
                smallest = left;
            }
            if right < len && self.key_at(right) < self.key_at(smallest) {
                smallest = right;
            }

            if smallest != index {
                self.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        for (i, handle) in self.heap.iter().enumerate() {
            assert_eq!(self.entries[*handle].index, i, "stale cached index");
            if i > 0 {
                assert!(self.key_at((i - 1) / 2) <= self.key_at(i), "heap order");
            }
        }
        assert_eq!(self.entries.len(), self.heap.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = BinaryHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert(3, 3);
        heap.insert(1, 1);
        heap.insert(2, 2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some((1, 1)));

        assert_eq!(heap.extract_min(), Ok((1, 1)));
        assert_eq!(heap.extract_min(), Ok((2, 2)));
        assert_eq!(heap.extract_min(), Ok((3, 3)));
        assert_eq!(heap.extract_min(), Err(HeapError::Empty));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut heap = BinaryHeap::new();

        heap.insert(1, 10);
        heap.insert(1, 11);
        heap.insert(1, 12);

        let mut values: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        values.sort_unstable();
        assert_eq!(values, vec![(1, 10), (1, 11), (1, 12)]);
    }

    #[test]
    fn test_cached_indices_follow_swaps() {
        let mut heap = BinaryHeap::new();
        let handles: Vec<_> = (0..64).rev().map(|i| heap.insert(i * 10, i as usize)).collect();
        heap.assert_invariants();

        for (i, handle) in handles.iter().enumerate().step_by(3) {
            heap.decrease_key(handle, -(i as Key)).unwrap();
            heap.assert_invariants();
        }

        let mut last = Key::MIN;
        while let Ok((key, _)) = heap.extract_min() {
            assert!(key >= last);
            last = key;
            heap.assert_invariants();
        }
    }

    #[test]
    fn test_decrease_key_rejects_increase() {
        let mut heap = BinaryHeap::new();
        let h = heap.insert(5, 0);
        assert_eq!(
            heap.decrease_key(&h, 6),
            Err(HeapError::PriorityNotDecreased { current: 5, new: 6 })
        );
        assert_eq!(heap.decrease_key(&h, 5), Ok(()));
        assert_eq!(heap.peek(), Some((5, 0)));
    }

    #[test]
    fn test_stale_handle_detected() {
        let mut heap = BinaryHeap::new();
        let h = heap.insert(5, 0);
        heap.insert(7, 1);
        assert_eq!(heap.extract_min(), Ok((5, 0)));
        assert_eq!(heap.decrease_key(&h, 1), Err(HeapError::InvalidHandle));
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut heap = BinaryHeap::with_capacity(4);
        let h = heap.insert(5, 0);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.decrease_key(&h, 1), Err(HeapError::InvalidHandle));
        heap.insert(2, 2);
        assert_eq!(heap.peek(), Some((2, 2)));
    }
}
