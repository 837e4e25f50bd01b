//! Swappable priority queues for graph algorithms
//!
//! This crate provides three priority-queue backends with efficient
//! `decrease_key` support behind one contract, and two classic graph
//! algorithms written generically against that contract so the backend can be
//! chosen at the call site.
//!
//! # Backends
//!
//! - **Binary Heap**: O(log n) insert, extract_min and decrease_key
//! - **Fibonacci Heap**: O(1) amortized insert and decrease_key; O(log n) amortized extract_min
//! - **Pairing Heap**: O(1) insert; O(log n) amortized extract_min and decrease_key
//!
//! All three keep their entries in a `slotmap` arena and hand out generational
//! keys as handles, so a handle used after its entry was extracted is reported
//! as [`HeapError::InvalidHandle`] rather than touching freed memory.
//!
//! # Engines
//!
//! - [`pathfinding`]: single-source shortest paths (Dijkstra)
//! - [`spanning`]: minimum spanning tree of the root's component (Prim)
//!
//! # Example
//!
//! ```rust
//! use heapswap::fibonacci::FibonacciHeap;
//! use heapswap::graph::Graph;
//! use heapswap::pathfinding::dijkstra;
//! use heapswap::spanning::prim;
//!
//! let mut graph = Graph::undirected(5);
//! for (u, v, w) in [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)] {
//!     graph.add_edge(u, v, w).unwrap();
//! }
//!
//! let paths = dijkstra::<FibonacciHeap>(&graph, 0).unwrap();
//! assert_eq!(paths.distances, vec![Some(0), Some(3), Some(1), Some(4), Some(7)]);
//!
//! let tree = prim::<FibonacciHeap>(&graph, 0).unwrap();
//! assert_eq!(tree.total_weight, 7);
//! ```

pub mod binary;
pub mod error;
pub mod fibonacci;
pub mod graph;
pub mod pairing;
pub mod pathfinding;
pub mod spanning;
pub mod traits;

// Re-export the contract for convenience
pub use error::AlgorithmError;
pub use traits::{Backend, Handle, HeapError, Key, PriorityQueue, Vertex};
