//! Errors reported by the shortest-path and spanning-tree engines

use crate::traits::{HeapError, Vertex};

/// Reasons an engine run aborts
///
/// None of these are recoverable within a run: the engine returns as soon as
/// it detects one and the partially computed state is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    /// The source or root is not a vertex of the graph
    #[error("start vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The requested start vertex
        vertex: Vertex,
        /// Number of vertices in the graph
        vertex_count: usize,
    },
    /// The queue handed to the engine already holds entries
    #[error("priority queue must be empty at the start of a run, found {len} entries")]
    QueueNotEmpty {
        /// Entries found in the queue
        len: usize,
    },
    /// The spanning-tree weight would not fit in the key type
    #[error("tree weight overflows when adding vertex {vertex}")]
    DistanceOverflow {
        /// Vertex whose edge overflowed the running total
        vertex: Vertex,
    },
    /// The priority queue reported a contract violation
    #[error(transparent)]
    Heap(#[from] HeapError),
}
