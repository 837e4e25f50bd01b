//! Weighted adjacency-list graph
//!
//! Vertices are identified by `0..vertex_count`. Edges are added during setup;
//! the engines only ever borrow the graph immutably.

use crate::traits::{Key, Vertex};

/// Sentinel priority for "no path known yet"
///
/// Edge weights must stay below this value so that the engines can keep it
/// out of band.
pub const INFINITY: Key = Key::MAX / 4;

/// Errors reported while building a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An endpoint is not in `0..vertex_count`
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id
        vertex: Vertex,
        /// Number of vertices in the graph
        vertex_count: usize,
    },
    /// The weight is negative or collides with the infinite sentinel
    #[error("edge weight {weight} is outside 0..{max}", max = INFINITY)]
    WeightOutOfRange {
        /// The offending weight
        weight: Key,
    },
}

/// Adjacency-list graph with non-negative integer weights
///
/// Each vertex keeps its outgoing `(neighbor, weight)` pairs in insertion
/// order. For undirected graphs every edge is stored in both directions.
///
/// # Example
///
/// ```rust
/// use heapswap::graph::Graph;
///
/// let mut graph = Graph::undirected(3);
/// graph.add_edge(0, 1, 4).unwrap();
/// graph.add_edge(1, 2, 2).unwrap();
/// assert_eq!(graph.neighbors(1), &[(0, 4), (2, 2)]);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    directed: bool,
    adjacency: Vec<Vec<(Vertex, Key)>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            directed,
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates an empty directed graph
    pub fn directed(vertex_count: usize) -> Self {
        Self::new(vertex_count, true)
    }

    /// Creates an empty undirected graph
    pub fn undirected(vertex_count: usize) -> Self {
        Self::new(vertex_count, false)
    }

    /// Adds an edge `u -> v` (and `v -> u` when undirected)
    ///
    /// A self-loop is stored once even in an undirected graph.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, weight: Key) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if !(0..INFINITY).contains(&weight) {
            return Err(GraphError::WeightOutOfRange { weight });
        }

        self.adjacency[u].push((v, weight));
        if !self.directed && u != v {
            self.adjacency[v].push((u, weight));
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added (an undirected edge counts once)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if edges are one-way, false if each edge is mirrored
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Outgoing `(neighbor, weight)` pairs of `u`, in insertion order
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn neighbors(&self, u: Vertex) -> &[(Vertex, Key)] {
        &self.adjacency[u]
    }

    /// Number of outgoing adjacency entries of `u`
    pub fn degree(&self, u: Vertex) -> usize {
        self.adjacency[u].len()
    }

    /// Returns an error unless `v` names a vertex of this graph
    pub fn check_vertex(&self, v: Vertex) -> Result<(), GraphError> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
