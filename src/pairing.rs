//! Pairing Heap implementation
//!
//! A pairing heap is a type of heap-ordered tree with:
//! - O(1) insert
//! - O(log n) amortized extract_min
//! - O(log n) amortized decrease_key (the proven bound is weaker than for
//!   Fibonacci heaps, but pairing heaps are fast in practice)
//!
//! A single root holds its children in a singly linked sibling list. Each
//! child also links back through `prev`: the leftmost child to its parent,
//! every other child to its previous sibling. `meld` is the only restructuring
//! primitive; `extract_min` recombines the root's children with two-pass
//! pairing.

use crate::traits::{Backend, Handle, HeapError, Key, PriorityQueue, Vertex};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to an element in a Pairing heap
    pub struct PairingHandle;
}

impl Handle for PairingHandle {}

type NodeRef = PairingHandle;

#[derive(Debug)]
struct Node {
    key: Key,
    value: Vertex,
    child: Option<NodeRef>,
    sibling: Option<NodeRef>,
    prev: Option<NodeRef>, // parent for a leftmost child, previous sibling otherwise
}

/// Pairing Heap
///
/// # Example
///
/// ```rust
/// use heapswap::{Backend, PriorityQueue};
/// use heapswap::pairing::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// let handle = heap.insert(5, 0);
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.peek(), Some((1, 0)));
/// ```
#[derive(Debug, Default)]
pub struct PairingHeap {
    nodes: SlotMap<NodeRef, Node>,
    root: Option<NodeRef>,
}

impl Backend for PairingHeap {
    const NAME: &'static str = "Pairing";

    fn with_capacity(_capacity_hint: usize) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
        }
    }
}

impl PriorityQueue for PairingHeap {
    type Handle = PairingHandle;

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, key: Key, value: Vertex) -> PairingHandle {
        let node = self.nodes.insert(Node {
            key,
            value,
            child: None,
            sibling: None,
            prev: None,
        });
        self.root = Some(match self.root {
            Some(root) => self.meld(root, node),
            None => node,
        });
        node
    }

    fn peek(&self) -> Option<(Key, Vertex)> {
        self.root.map(|root| {
            let node = &self.nodes[root];
            (node.key, node.value)
        })
    }

    fn extract_min(&mut self) -> Result<(Key, Vertex), HeapError> {
        let root = self.root.ok_or(HeapError::Empty)?;

        self.root = match self.nodes[root].child {
            Some(first) => Some(self.merge_pairs(first)?),
            None => None,
        };

        let node = self
            .nodes
            .remove(root)
            .ok_or(HeapError::Corrupted("root missing from arena"))?;
        Ok((node.key, node.value))
    }

    fn decrease_key(&mut self, handle: &PairingHandle, new_key: Key) -> Result<(), HeapError> {
        let x = *handle;
        let node = self.nodes.get_mut(x).ok_or(HeapError::InvalidHandle)?;

        if new_key > node.key {
            return Err(HeapError::PriorityNotDecreased {
                current: node.key,
                new: new_key,
            });
        }
        if new_key == node.key {
            return Ok(());
        }
        node.key = new_key;

        let root = self
            .root
            .ok_or(HeapError::Corrupted("live node in a heap without root"))?;
        if root == x {
            return Ok(());
        }

        // Excise the subtree rooted at x and meld it back with the root
        self.cut(x)?;
        self.root = Some(self.meld(root, x));
        Ok(())
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl PairingHeap {
    /// Melds two detached trees, returning the new root
    ///
    /// The tree with the larger root key becomes the leftmost child of the other.
    fn meld(&mut self, a: NodeRef, b: NodeRef) -> NodeRef {
        let (parent, child) = if self.nodes[b].key < self.nodes[a].key {
            (b, a)
        } else {
            (a, b)
        };

        let first = self.nodes[parent].child;
        self.nodes[child].sibling = first;
        self.nodes[child].prev = Some(parent);
        if let Some(first) = first {
            self.nodes[first].prev = Some(child);
        }
        self.nodes[parent].child = Some(child);
        parent
    }

    /// Recombines a sibling list into one tree with two-pass pairing
    fn merge_pairs(&mut self, first: NodeRef) -> Result<NodeRef, HeapError> {
        let bound = self.nodes.len();
        let mut pairs = Vec::new();
        let mut current = Some(first);

        // First pass: meld adjacent pairs left to right
        while let Some(a) = current {
            if pairs.len() >= bound {
                return Err(HeapError::Corrupted("sibling list does not terminate"));
            }
            let b = self.next_sibling(a)?;
            match b {
                Some(b) => {
                    current = self.next_sibling(b)?;
                    pairs.push(self.meld(a, b));
                }
                None => {
                    pairs.push(a);
                    current = None;
                }
            }
        }

        // Second pass: fold right to left
        let mut result = pairs
            .pop()
            .ok_or(HeapError::Corrupted("empty sibling list"))?;
        while let Some(tree) = pairs.pop() {
            result = self.meld(tree, result);
        }
        Ok(result)
    }

    /// Clears a node's sibling links, returning its former next sibling
    fn detach(&mut self, x: NodeRef) -> Option<NodeRef> {
        let node = &mut self.nodes[x];
        node.prev = None;
        node.sibling.take()
    }

    /// Detaches `x` and returns its next sibling, checking the back link
    fn next_sibling(&mut self, x: NodeRef) -> Result<Option<NodeRef>, HeapError> {
        let next = self.detach(x);
        if let Some(next) = next {
            if self.nodes[next].prev != Some(x) {
                return Err(HeapError::Corrupted("sibling links disagree"));
            }
        }
        Ok(next)
    }

    /// Unlinks non-root `x` (with its subtree) from its parent's child list
    fn cut(&mut self, x: NodeRef) -> Result<(), HeapError> {
        let prev = self.nodes[x]
            .prev
            .ok_or(HeapError::Corrupted("non-root node without prev link"))?;
        let sibling = self.nodes[x].sibling;

        if self.nodes[prev].child == Some(x) {
            // x is the leftmost child: prev is its parent
            self.nodes[prev].child = sibling;
        } else {
            self.nodes[prev].sibling = sibling;
        }
        if let Some(sibling) = sibling {
            self.nodes[sibling].prev = Some(prev);
        }

        self.nodes[x].sibling = None;
        self.nodes[x].prev = None;
        Ok(())
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        let Some(root) = self.root else {
            assert!(self.nodes.is_empty());
            return;
        };
        assert!(self.nodes[root].prev.is_none());
        assert!(self.nodes[root].sibling.is_none());

        let mut seen = 0;
        let mut stack = vec![root];
        while let Some(x) = stack.pop() {
            seen += 1;
            let mut prev = x;
            let mut child = self.nodes[x].child;
            while let Some(c) = child {
                assert_eq!(self.nodes[c].prev, Some(prev), "broken prev link");
                assert!(self.nodes[x].key <= self.nodes[c].key, "heap order");
                stack.push(c);
                prev = c;
                child = self.nodes[c].sibling;
            }
        }
        assert_eq!(seen, self.nodes.len());
    }
}
