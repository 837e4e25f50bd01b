//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized insert and decrease_key
//! - O(log n) amortized extract_min
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list. The heap maintains the minimum root.
//!
//! Nodes live in a `slotmap` arena and refer to each other by key, so the
//! circular sibling lists never form ownership cycles and the whole heap is
//! released in one pass when it is dropped or cleared.
//!
//! Every walk around a circular list is bounded by the number of live nodes;
//! a list that does not close within that bound is reported as
//! [`HeapError::Corrupted`].

use crate::traits::{Backend, Handle, HeapError, Key, PriorityQueue, Vertex};
use slotmap::{new_key_type, SlotMap};
use smallvec::{smallvec, SmallVec};

new_key_type! {
    /// Handle to an element in a Fibonacci heap
    ///
    /// The handle is a generational arena key: it stops resolving once its
    /// entry is extracted.
    pub struct FibonacciHandle;
}

impl Handle for FibonacciHandle {}

type NodeRef = FibonacciHandle;

#[derive(Debug)]
struct Node {
    key: Key,
    value: Vertex,
    parent: Option<NodeRef>,
    child: Option<NodeRef>,
    left: NodeRef,
    right: NodeRef,
    degree: usize,
    /// Lost a child since becoming a child itself
    marked: bool,
}

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use heapswap::{Backend, PriorityQueue};
/// use heapswap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert(5, 0);
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.peek(), Some((1, 0)));
/// ```
#[derive(Debug, Default)]
pub struct FibonacciHeap {
    nodes: SlotMap<NodeRef, Node>,
    min: Option<NodeRef>,
}

impl Backend for FibonacciHeap {
    const NAME: &'static str = "Fibonacci";

    fn with_capacity(_capacity_hint: usize) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            min: None,
        }
    }
}

impl PriorityQueue for FibonacciHeap {
    type Handle = FibonacciHandle;

    fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, key: Key, value: Vertex) -> FibonacciHandle {
        let node = self.nodes.insert_with_key(|me| Node {
            key,
            value,
            parent: None,
            child: None,
            left: me,
            right: me,
            degree: 0,
            marked: false,
        });
        self.add_root(node);
        node
    }

    fn peek(&self) -> Option<(Key, Vertex)> {
        self.min.map(|min| {
            let node = &self.nodes[min];
            (node.key, node.value)
        })
    }

    fn extract_min(&mut self) -> Result<(Key, Vertex), HeapError> {
        let z = self.min.ok_or(HeapError::Empty)?;

        // Promote children to the root list
        if let Some(child) = self.nodes[z].child.take() {
            for c in self.walk(child)? {
                let node = &mut self.nodes[c];
                node.parent = None;
                node.marked = false;
                self.splice_root(c, z);
            }
            self.nodes[z].degree = 0;
        }

        if self.nodes[z].right == z {
            self.min = None;
        } else {
            self.min = Some(self.nodes[z].right);
            self.unlink(z);
            self.consolidate()?;
        }

        let node = self
            .nodes
            .remove(z)
            .ok_or(HeapError::Corrupted("minimum root missing from arena"))?;
        Ok((node.key, node.value))
    }

    fn decrease_key(&mut self, handle: &FibonacciHandle, new_key: Key) -> Result<(), HeapError> {
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
        let parent = node.parent;

        if let Some(parent) = parent {
            if new_key < self.nodes[parent].key {
                self.cut(x, parent)?;
                self.cascading_cut(parent)?;
            }
        }

        match self.min {
            Some(min) if new_key < self.nodes[min].key => self.min = Some(x),
            Some(_) => {}
            None => return Err(HeapError::Corrupted("live node in a heap without minimum")),
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.min = None;
    }
}

impl FibonacciHeap {
    /// Returns the largest child count of any node
    pub fn max_degree(&self) -> usize {
        self.nodes.values().map(|n| n.degree).max().unwrap_or(0)
    }

    /// Returns the number of trees in the root list
    pub fn root_count(&self) -> Result<usize, HeapError> {
        match self.min {
            Some(min) => Ok(self.walk(min)?.len()),
            None => Ok(0),
        }
    }

    /// Collects a circular sibling list starting at `start`
    fn walk(&self, start: NodeRef) -> Result<Vec<NodeRef>, HeapError> {
        let bound = self.nodes.len();
        let mut out = Vec::new();
        let mut current = start;
        loop {
            if out.len() >= bound {
                return Err(HeapError::Corrupted("circular list does not close"));
            }
            out.push(current);
            current = self.nodes[current].right;
            if current == start {
                return Ok(out);
            }
        }
    }

    /// Inserts `x` into the circular list right of `anchor`
    fn splice_root(&mut self, x: NodeRef, anchor: NodeRef) {
        let anchor_right = self.nodes[anchor].right;
        self.nodes[x].right = anchor_right;
        self.nodes[x].left = anchor;
        self.nodes[anchor_right].left = x;
        self.nodes[anchor].right = x;
    }

    /// Adds a detached node to the root list, updating the minimum
    fn add_root(&mut self, x: NodeRef) {
        match self.min {
            None => {
                self.nodes[x].left = x;
                self.nodes[x].right = x;
                self.min = Some(x);
            }
            Some(min) => {
                self.splice_root(x, min);
                if self.nodes[x].key < self.nodes[min].key {
                    self.min = Some(x);
                }
            }
        }
    }

    /// Removes `x` from whatever circular list it is in, leaving it a singleton
    fn unlink(&mut self, x: NodeRef) {
        let left = self.nodes[x].left;
        let right = self.nodes[x].right;
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.nodes[x].left = x;
        self.nodes[x].right = x;
    }

    /// Merges roots of equal degree until every root degree is unique
    fn consolidate(&mut self) -> Result<(), HeapError> {
        let start = self.min.ok_or(HeapError::Corrupted("consolidating an empty root list"))?;
        let roots = self.walk(start)?;

        let buckets = self.nodes.len().max(1).ilog2() as usize + 2;
        let mut by_degree: SmallVec<[Option<NodeRef>; 64]> = smallvec![None; buckets];

        for root in roots {
            let mut x = root;
            let mut d = self.nodes[x].degree;
            loop {
                if d >= by_degree.len() {
                    by_degree.resize(d + 1, None);
                }
                let Some(mut y) = by_degree[d].take() else {
                    break;
                };
                if self.nodes[y].key < self.nodes[x].key {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                d += 1;
            }
            by_degree[d] = Some(x);
        }

        self.min = None;
        for root in by_degree.into_iter().flatten() {
            self.add_root(root);
        }
        Ok(())
    }

    /// Links root `y` beneath root `x`
    fn link(&mut self, y: NodeRef, x: NodeRef) {
        self.unlink(y);
        self.nodes[y].parent = Some(x);
        self.nodes[y].marked = false;

        match self.nodes[x].child {
            Some(child) => self.splice_root(y, child),
            None => self.nodes[x].child = Some(y),
        }
        self.nodes[x].degree += 1;
    }

    /// Cuts `x` from its parent `y` and moves it to the root list
    fn cut(&mut self, x: NodeRef, y: NodeRef) -> Result<(), HeapError> {
        if self.nodes[y].degree == 0 {
            return Err(HeapError::Corrupted("cut from a parent without children"));
        }
        if self.nodes[y].child == Some(x) {
            let right = self.nodes[x].right;
            self.nodes[y].child = if right != x { Some(right) } else { None };
        }
        self.unlink(x);
        self.nodes[y].degree -= 1;

        self.nodes[x].parent = None;
        self.nodes[x].marked = false;
        self.add_root(x);
        Ok(())
    }

    /// Marks `y`, or cuts it and continues upward if it is already marked
    ///
    /// Every cut clears one parent link, so the climb ends even on a
    /// corrupted parent chain.
    fn cascading_cut(&mut self, mut y: NodeRef) -> Result<(), HeapError> {
        while let Some(z) = self.nodes[y].parent {
            if !self.nodes[y].marked {
                self.nodes[y].marked = true;
                return Ok(());
            }
            self.cut(y, z)?;
            y = z;
        }
        Ok(())
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        let Some(min) = self.min else {
            assert!(self.nodes.is_empty());
            return;
        };
        let mut seen = 0;
        let mut stack: Vec<(NodeRef, Option<NodeRef>)> =
            self.walk(min).unwrap().into_iter().map(|r| (r, None)).collect();
        for (r, _) in &stack {
            assert!(self.nodes[min].key <= self.nodes[*r].key, "min is not minimal");
        }
        while let Some((x, parent)) = stack.pop() {
            seen += 1;
            let node = &self.nodes[x];
            assert_eq!(node.parent, parent);
            if let Some(p) = parent {
                assert!(self.nodes[p].key <= node.key, "heap order");
            }
            let children = node.child.map(|c| self.walk(c).unwrap()).unwrap_or_default();
            assert_eq!(children.len(), node.degree, "degree mismatch");
            stack.extend(children.into_iter().map(|c| (c, Some(x))));
        }
        assert_eq!(seen, self.nodes.len());
    }
}
