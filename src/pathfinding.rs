//! Single-source shortest paths (Dijkstra's algorithm)
//!
//! The engine is written only against [`PriorityQueue`], so any backend in
//! this crate (or a wrapper around one) can drive it. Each vertex keeps at most
//! one live handle; a better path found for a queued vertex becomes a
//! `decrease_key` instead of a second entry.
//!
//! Two insertion disciplines are available:
//!
//! - [`Insertion::Lazy`] (used by [`shortest_path`]): only the source is queued
//!   up front; other vertices are inserted the first time they are reached.
//! - [`Insertion::Eager`] (used by [`shortest_path_eager`]): every vertex is
//!   queued up front, the source with key 0 and the rest with [`INFINITY`].
//!
//! Edge weights must be non-negative, which [`Graph::add_edge`] enforces.
//!
//! # Example
//!
//! ```rust
//! use heapswap::graph::Graph;
//! use heapswap::pairing::PairingHeap;
//! use heapswap::pathfinding::dijkstra;
//!
//! let mut graph = Graph::directed(3);
//! graph.add_edge(0, 1, 10).unwrap();
//! graph.add_edge(0, 2, 1).unwrap();
//! graph.add_edge(2, 1, 5).unwrap();
//!
//! let result = dijkstra::<PairingHeap>(&graph, 0).unwrap();
//! assert_eq!(result.distances, vec![Some(0), Some(6), Some(1)]);
//! assert_eq!(result.path_to(1), Some(vec![0, 2, 1]));
//! ```

use crate::error::AlgorithmError;
use crate::graph::{Graph, INFINITY};
use crate::traits::{Backend, Key, PriorityQueue, Vertex};
use tracing::{debug, trace};

/// When vertices enter the priority queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Insert a vertex the first time it is discovered
    Lazy,
    /// Insert every vertex before the main loop, with an infinite key
    Eager,
}

/// Result of a single-source shortest-path run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    /// The vertex distances are measured from
    pub source: Vertex,
    /// Shortest distance to each vertex, `None` if unreachable
    pub distances: Vec<Option<Key>>,
    /// Predecessor on a shortest path, `None` for the source and unreachable vertices
    pub parents: Vec<Option<Vertex>>,
}

impl ShortestPaths {
    /// Distance from the source to `v`, if `v` is reachable
    pub fn distance(&self, v: Vertex) -> Option<Key> {
        self.distances.get(v).copied().flatten()
    }

    /// Number of vertices reachable from the source (including the source)
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Reconstructs the path from the source to `target` (inclusive)
    ///
    /// Returns `None` if `target` is unreachable or out of range.
    pub fn path_to(&self, target: Vertex) -> Option<Vec<Vertex>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.parents[current] {
            if path.len() > self.parents.len() {
                return None;
            }
            path.push(prev);
            current = prev;
        }

        path.reverse();
        Some(path)
    }
}

/// Runs Dijkstra's algorithm from `source` with lazy insertion
///
/// `queue` must be empty; it is consumed and dropped when the run finishes.
///
/// # Errors
/// - [`AlgorithmError::VertexOutOfRange`] if `source` is not in the graph
/// - [`AlgorithmError::QueueNotEmpty`] if `queue` already holds entries
/// - [`AlgorithmError::Heap`] if the queue reports a contract violation
pub fn shortest_path<Q: PriorityQueue>(
    graph: &Graph,
    source: Vertex,
    queue: Q,
) -> Result<ShortestPaths, AlgorithmError> {
    search(graph, source, queue, Insertion::Lazy)
}

/// Runs Dijkstra's algorithm from `source` with every vertex queued up front
///
/// Produces the same distances as [`shortest_path`]; parents can differ only
/// between equally short paths.
pub fn shortest_path_eager<Q: PriorityQueue>(
    graph: &Graph,
    source: Vertex,
    queue: Q,
) -> Result<ShortestPaths, AlgorithmError> {
    search(graph, source, queue, Insertion::Eager)
}

/// Runs [`shortest_path`] on a fresh queue of backend `B`
///
/// # Example
/// ```rust
/// use heapswap::fibonacci::FibonacciHeap;
/// use heapswap::graph::Graph;
/// use heapswap::pathfinding::dijkstra;
///
/// let mut graph = Graph::undirected(2);
/// graph.add_edge(0, 1, 3).unwrap();
/// let result = dijkstra::<FibonacciHeap>(&graph, 1).unwrap();
/// assert_eq!(result.distance(0), Some(3));
/// ```
pub fn dijkstra<B: Backend>(graph: &Graph, source: Vertex) -> Result<ShortestPaths, AlgorithmError> {
    shortest_path(graph, source, B::with_capacity(graph.vertex_count()))
}

/// Checks the preconditions shared by both engines
pub(crate) fn check_start<Q: PriorityQueue>(
    graph: &Graph,
    start: Vertex,
    queue: &Q,
) -> Result<(), AlgorithmError> {
    if start >= graph.vertex_count() {
        return Err(AlgorithmError::VertexOutOfRange {
            vertex: start,
            vertex_count: graph.vertex_count(),
        });
    }
    if !queue.is_empty() {
        return Err(AlgorithmError::QueueNotEmpty { len: queue.len() });
    }
    Ok(())
}

/// Internal search implementation.
fn search<Q: PriorityQueue>(
    graph: &Graph,
    source: Vertex,
    mut queue: Q,
    insertion: Insertion,
) -> Result<ShortestPaths, AlgorithmError> {
    check_start(graph, source, &queue)?;

    let n = graph.vertex_count();
    debug!(vertices = n, source, ?insertion, "shortest path search started");

    let mut dist = vec![INFINITY; n];
    let mut parents = vec![None; n];
    let mut handles: Vec<Option<Q::Handle>> = vec![None; n];

    dist[source] = 0;
    match insertion {
        Insertion::Lazy => handles[source] = Some(queue.insert(0, source)),
        Insertion::Eager => {
            for (v, slot) in handles.iter_mut().enumerate() {
                *slot = Some(queue.insert(dist[v], v));
            }
        }
    }

    let mut settled = 0usize;
    let mut stale = 0usize;

    while !queue.is_empty() {
        let (du, u) = queue.extract_min()?;
        handles[u] = None;

        if du != dist[u] {
            stale += 1;
            trace!(vertex = u, key = du, "skipping stale entry");
            continue;
        }
        if du == INFINITY {
            // Only unreachable vertices remain (eager insertion)
            break;
        }
        settled += 1;

        for &(v, weight) in graph.neighbors(u) {
            // du and weight are both below INFINITY = Key::MAX / 4
            let candidate = du + weight;
            if candidate < dist[v] {
                dist[v] = candidate;
                parents[v] = Some(u);
                match handles[v] {
                    Some(handle) => queue.decrease_key(&handle, candidate)?,
                    None => handles[v] = Some(queue.insert(candidate, v)),
                }
            }
        }
    }

    debug!(settled, stale, "shortest path search finished");

    Ok(ShortestPaths {
        source,
        distances: dist
            .into_iter()
            .map(|d| (d < INFINITY).then_some(d))
            .collect(),
        parents,
    })
}
