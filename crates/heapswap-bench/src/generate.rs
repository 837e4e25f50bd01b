//! Random graph generation for the benchmark driver

use heapswap::graph::{Graph, GraphError};
use heapswap::Key;
use rand::Rng;

/// Smallest edge weight drawn by [`random_graph`]
pub const MIN_WEIGHT: Key = 1;
/// Largest edge weight drawn by [`random_graph`]
pub const MAX_WEIGHT: Key = 20;

/// Builds a graph with `n` vertices and `m` random edges
///
/// Endpoints are drawn uniformly and self-loops are redrawn, so exactly `m`
/// edges are added (parallel edges are allowed). Weights are uniform in
/// `MIN_WEIGHT..=MAX_WEIGHT`. A graph with fewer than two vertices cannot
/// hold a non-loop edge and is returned without edges.
///
/// # Errors
///
/// Returns the [`GraphError`] of the first edge the graph rejects.
///
/// # Example
///
/// ```rust
/// use heapswap_bench::generate::random_graph;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let graph = random_graph(10, 40, true, &mut rng).unwrap();
/// assert_eq!(graph.edge_count(), 40);
/// ```
pub fn random_graph<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    directed: bool,
    rng: &mut R,
) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(n, directed);
    if n < 2 {
        return Ok(graph);
    }

    while graph.edge_count() < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        graph.add_edge(u, v, rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT))?;
    }
    Ok(graph)
}
