//! Minimum spanning tree construction (Prim's algorithm)
//!
//! Grows a tree from a root vertex, always attaching the cheapest edge that
//! leaves the tree. Like [`crate::pathfinding`], the engine only talks to the
//! [`PriorityQueue`] contract.
//!
//! [`spanning_tree`] uses eager insertion: every vertex is queued up front with
//! key [`INFINITY`] (the root with 0) and keys only ever drop through
//! `decrease_key`. [`spanning_tree_lazy`] queues vertices as they are first
//! reached instead.
//!
//! Only the root's connected component is covered. When the cheapest remaining
//! vertex is unreachable, construction stops and the result is a tree over the
//! reached vertices; [`SpanningTree::is_spanning`] tells the two cases apart.

use crate::error::AlgorithmError;
use crate::graph::{Graph, INFINITY};
use crate::pathfinding::{check_start, Insertion};
use crate::traits::{Backend, Key, PriorityQueue, Vertex};
use tracing::{debug, trace, warn};

/// Result of a spanning-tree run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// The vertex the tree was grown from
    pub root: Vertex,
    /// Sum of the weights of all tree edges
    pub total_weight: Key,
    /// Tree parent of each vertex; `None` for the root and unreached vertices
    pub parents: Vec<Option<Vertex>>,
    /// Weight of the edge joining each vertex to its parent
    pub weights: Vec<Option<Key>>,
    /// Whether each vertex is part of the tree
    pub reached: Vec<bool>,
}

impl SpanningTree {
    /// Tree edges as `(parent, child, weight)`, ordered by child
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, Key)> + '_ {
        self.parents
            .iter()
            .zip(&self.weights)
            .enumerate()
            .filter_map(|(child, (parent, weight))| Some(((*parent)?, child, (*weight)?)))
    }

    /// Number of vertices in the tree, root included
    pub fn reached_count(&self) -> usize {
        self.reached.iter().filter(|r| **r).count()
    }

    /// True if the tree covers every vertex of the graph
    pub fn is_spanning(&self) -> bool {
        self.reached.iter().all(|r| *r)
    }
}

/// Builds a minimum spanning tree of `root`'s component with eager insertion
///
/// `queue` must be empty; it is consumed and dropped when the run finishes.
///
/// # Errors
/// - [`AlgorithmError::VertexOutOfRange`] if `root` is not in the graph
/// - [`AlgorithmError::QueueNotEmpty`] if `queue` already holds entries
/// - [`AlgorithmError::DistanceOverflow`] if the total weight exceeds `Key::MAX`
/// - [`AlgorithmError::Heap`] if the queue reports a contract violation
pub fn spanning_tree<Q: PriorityQueue>(
    graph: &Graph,
    root: Vertex,
    queue: Q,
) -> Result<SpanningTree, AlgorithmError> {
    grow(graph, root, queue, Insertion::Eager)
}

/// Builds a minimum spanning tree of `root`'s component with lazy insertion
pub fn spanning_tree_lazy<Q: PriorityQueue>(
    graph: &Graph,
    root: Vertex,
    queue: Q,
) -> Result<SpanningTree, AlgorithmError> {
    grow(graph, root, queue, Insertion::Lazy)
}

/// Runs [`spanning_tree`] on a fresh queue of backend `B`
///
/// # Example
/// ```rust
/// use heapswap::binary::BinaryHeap;
/// use heapswap::graph::Graph;
/// use heapswap::spanning::prim;
///
/// let mut graph = Graph::undirected(3);
/// graph.add_edge(0, 1, 1).unwrap();
/// graph.add_edge(1, 2, 2).unwrap();
/// graph.add_edge(0, 2, 5).unwrap();
///
/// let tree = prim::<BinaryHeap>(&graph, 0).unwrap();
/// assert_eq!(tree.total_weight, 3);
/// assert_eq!(tree.parents, vec![None, Some(0), Some(1)]);
/// ```
pub fn prim<B: Backend>(graph: &Graph, root: Vertex) -> Result<SpanningTree, AlgorithmError> {
    spanning_tree(graph, root, B::with_capacity(graph.vertex_count()))
}

fn grow<Q: PriorityQueue>(
    graph: &Graph,
    root: Vertex,
    mut queue: Q,
    insertion: Insertion,
) -> Result<SpanningTree, AlgorithmError> {
    check_start(graph, root, &queue)?;

    let n = graph.vertex_count();
    debug!(vertices = n, root, ?insertion, "spanning tree construction started");

    let mut key = vec![INFINITY; n];
    let mut parents = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut handles: Vec<Option<Q::Handle>> = vec![None; n];

    key[root] = 0;
    match insertion {
        Insertion::Lazy => handles[root] = Some(queue.insert(0, root)),
        Insertion::Eager => {
            for (v, slot) in handles.iter_mut().enumerate() {
                *slot = Some(queue.insert(key[v], v));
            }
        }
    }

    let mut total_weight: Key = 0;

    while !queue.is_empty() {
        let (ku, u) = queue.extract_min()?;
        handles[u] = None;

        if in_tree[u] {
            trace!(vertex = u, key = ku, "skipping finalized vertex");
            continue;
        }
        if ku == INFINITY {
            warn!(
                unreached = queue.len() + 1,
                "remaining vertices are unreachable from the root"
            );
            break;
        }

        in_tree[u] = true;
        total_weight = total_weight
            .checked_add(ku)
            .ok_or(AlgorithmError::DistanceOverflow { vertex: u })?;

        for &(v, weight) in graph.neighbors(u) {
            if !in_tree[v] && weight < key[v] {
                key[v] = weight;
                parents[v] = Some(u);
                match handles[v] {
                    Some(handle) => queue.decrease_key(&handle, weight)?,
                    None => handles[v] = Some(queue.insert(weight, v)),
                }
            }
        }
    }

    // Vertices touched but never finalized do not belong to the tree
    for (v, parent) in parents.iter_mut().enumerate() {
        if !in_tree[v] {
            *parent = None;
        }
    }
    let weights = parents
        .iter()
        .zip(&key)
        .map(|(parent, k)| parent.map(|_| *k))
        .collect();

    debug!(total_weight, "spanning tree construction finished");

    Ok(SpanningTree {
        root,
        total_weight,
        parents,
        weights,
        reached: in_tree,
    })
}
