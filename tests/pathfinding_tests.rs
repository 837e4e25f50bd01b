//! Tests for the shortest-path and spanning-tree engines
//!
//! Tests cover:
//! - The same fixed graphs driven by every backend
//! - Edge cases (unreachable vertices, single vertex, disconnected graphs)
//! - Lazy versus eager insertion
//! - Random graphs checked against simple reference algorithms

use heapswap::binary::BinaryHeap;
use heapswap::fibonacci::FibonacciHeap;
use heapswap::graph::{Graph, INFINITY};
use heapswap::pairing::PairingHeap;
use heapswap::pathfinding::{dijkstra, shortest_path, shortest_path_eager};
use heapswap::spanning::{prim, spanning_tree, spanning_tree_lazy};
use heapswap::{AlgorithmError, Backend, Key, Vertex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Fixtures
// ============================================================================

/// The five-vertex undirected graph used throughout the crate docs
fn five_vertex_graph() -> Graph {
    let mut graph = Graph::undirected(5);
    for (u, v, w) in [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)] {
        graph.add_edge(u, v, w).unwrap();
    }
    graph
}

fn random_graph(rng: &mut ChaCha8Rng, n: usize, m: usize, directed: bool) -> Graph {
    let mut graph = Graph::new(n, directed);
    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=20)).unwrap();
        }
    }
    graph
}

// ============================================================================
// Reference implementations
// ============================================================================

/// Bellman-Ford distances; fine for the small graphs used here
fn reference_distances(graph: &Graph, source: Vertex) -> Vec<Option<Key>> {
    let n = graph.vertex_count();
    let mut dist = vec![INFINITY; n];
    dist[source] = 0;
    for _ in 0..n {
        let mut changed = false;
        for u in 0..n {
            if dist[u] == INFINITY {
                continue;
            }
            for &(v, w) in graph.neighbors(u) {
                if dist[u] + w < dist[v] {
                    dist[v] = dist[u] + w;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist.into_iter().map(|d| (d < INFINITY).then_some(d)).collect()
}

/// Kruskal's total weight over the component containing `root`
fn reference_tree_weight(graph: &Graph, root: Vertex) -> Key {
    let n = graph.vertex_count();
    let mut edges: Vec<(Key, Vertex, Vertex)> = (0..n)
        .flat_map(|u| graph.neighbors(u).iter().map(move |&(v, w)| (w, u, v)))
        .collect();
    edges.sort_unstable();

    fn find(parent: &mut [usize], x: usize) -> usize {
        let mut root = x;
        while parent[root] != root {
            root = parent[root];
        }
        let mut x = x;
        while parent[x] != root {
            let next = parent[x];
            parent[x] = root;
            x = next;
        }
        root
    }

    let mut parent: Vec<usize> = (0..n).collect();
    let mut chosen = Vec::new();
    for (w, u, v) in edges {
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        if ru != rv {
            parent[ru] = rv;
            chosen.push((w, u));
        }
    }

    let component = find(&mut parent, root);
    chosen
        .into_iter()
        .filter(|&(_, u)| find(&mut parent, u) == component)
        .map(|(w, _)| w)
        .sum()
}

// ============================================================================
// Generic tests
// ============================================================================

fn test_five_vertex_shortest_paths<B: Backend>() {
    let graph = five_vertex_graph();
    let result = dijkstra::<B>(&graph, 0).unwrap();

    assert_eq!(
        result.distances,
        vec![Some(0), Some(3), Some(1), Some(4), Some(7)]
    );
    assert_eq!(result.parents, vec![None, Some(2), Some(0), Some(1), Some(3)]);
    assert_eq!(result.path_to(4), Some(vec![0, 2, 1, 3, 4]));
    assert_eq!(result.reachable_count(), 5);
}

fn test_five_vertex_spanning_tree<B: Backend>() {
    let graph = five_vertex_graph();
    let tree = prim::<B>(&graph, 0).unwrap();

    assert_eq!(tree.total_weight, 7);
    assert_eq!(tree.parents, vec![None, Some(2), Some(0), Some(1), Some(3)]);
    assert_eq!(
        tree.edges().collect::<Vec<_>>(),
        vec![(2, 1, 2), (0, 2, 1), (1, 3, 1), (3, 4, 3)]
    );
    assert!(tree.is_spanning());
}

fn test_insertion_disciplines_agree<B: Backend>() {
    let graph = five_vertex_graph();

    let lazy = shortest_path(&graph, 0, B::new()).unwrap();
    let eager = shortest_path_eager(&graph, 0, B::new()).unwrap();
    assert_eq!(lazy.distances, eager.distances);

    let eager_tree = spanning_tree(&graph, 0, B::new()).unwrap();
    let lazy_tree = spanning_tree_lazy(&graph, 0, B::new()).unwrap();
    assert_eq!(eager_tree.total_weight, lazy_tree.total_weight);
}

fn test_isolated_vertex<B: Backend>() {
    let mut graph = Graph::undirected(4);
    graph.add_edge(0, 1, 2).unwrap();
    graph.add_edge(1, 2, 2).unwrap();

    let paths = dijkstra::<B>(&graph, 0).unwrap();
    assert_eq!(paths.distance(3), None);
    assert_eq!(paths.parents[3], None);
    assert_eq!(paths.path_to(3), None);

    let eager = shortest_path_eager(&graph, 0, B::new()).unwrap();
    assert_eq!(eager.distances, paths.distances);

    let tree = prim::<B>(&graph, 0).unwrap();
    assert_eq!(tree.total_weight, 4);
    assert_eq!(tree.parents[3], None);
    assert_eq!(tree.reached, vec![true, true, true, false]);
    assert!(!tree.is_spanning());
}

fn test_runs_are_repeatable<B: Backend>() {
    let graph = five_vertex_graph();
    let before = graph.clone();

    let first = dijkstra::<B>(&graph, 0).unwrap();
    let second = dijkstra::<B>(&graph, 0).unwrap();
    assert_eq!(first, second);

    let first = prim::<B>(&graph, 4).unwrap();
    let second = prim::<B>(&graph, 4).unwrap();
    assert_eq!(first, second);

    assert_eq!(graph, before);
}

fn test_zero_weight_edges<B: Backend>() {
    let mut graph = Graph::directed(3);
    graph.add_edge(0, 1, 0).unwrap();
    graph.add_edge(1, 2, 0).unwrap();
    graph.add_edge(0, 2, 5).unwrap();

    let result = dijkstra::<B>(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![Some(0), Some(0), Some(0)]);
    assert_eq!(result.path_to(2), Some(vec![0, 1, 2]));
}

fn test_rejects_bad_start<B: Backend>() {
    let graph = five_vertex_graph();
    let expected = AlgorithmError::VertexOutOfRange {
        vertex: 5,
        vertex_count: 5,
    };
    assert_eq!(dijkstra::<B>(&graph, 5), Err(expected));
    assert_eq!(prim::<B>(&graph, 5), Err(expected));
}

fn test_rejects_used_queue<B: Backend>() {
    let graph = five_vertex_graph();
    let mut queue = B::new();
    queue.insert(3, 3);
    queue.insert(4, 4);
    assert_eq!(
        spanning_tree(&graph, 0, queue),
        Err(AlgorithmError::QueueNotEmpty { len: 2 })
    );
}

fn test_random_graphs_match_reference<B: Backend>() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    for trial in 0..20 {
        let n = 5 + trial * 3;
        let directed = trial % 2 == 0;
        let graph = random_graph(&mut rng, n, n * 3, directed);

        let paths = dijkstra::<B>(&graph, 0).unwrap();
        assert_eq!(paths.distances, reference_distances(&graph, 0), "trial {trial}");

        // Every reported parent lies on a shortest path
        for v in 0..n {
            if let Some(p) = paths.parents[v] {
                let w = graph
                    .neighbors(p)
                    .iter()
                    .filter(|(to, _)| *to == v)
                    .map(|(_, w)| *w)
                    .min()
                    .unwrap();
                assert_eq!(paths.distance(p).unwrap() + w, paths.distance(v).unwrap());
            }
        }

        if !directed {
            let tree = prim::<B>(&graph, 0).unwrap();
            assert_eq!(tree.total_weight, reference_tree_weight(&graph, 0), "trial {trial}");
            assert_eq!(tree.reached_count(), paths.reachable_count());
        }
    }
}

macro_rules! engine_tests {
    ($heap_type:ty, $mod_name:ident) => {
        mod $mod_name {
            use super::*;

            #[test]
            fn five_vertex_shortest_paths() {
                test_five_vertex_shortest_paths::<$heap_type>();
            }

            #[test]
            fn five_vertex_spanning_tree() {
                test_five_vertex_spanning_tree::<$heap_type>();
            }

            #[test]
            fn insertion_disciplines_agree() {
                test_insertion_disciplines_agree::<$heap_type>();
            }

            #[test]
            fn isolated_vertex() {
                test_isolated_vertex::<$heap_type>();
            }

            #[test]
            fn runs_are_repeatable() {
                test_runs_are_repeatable::<$heap_type>();
            }

            #[test]
            fn zero_weight_edges() {
                test_zero_weight_edges::<$heap_type>();
            }

            #[test]
            fn rejects_bad_start() {
                test_rejects_bad_start::<$heap_type>();
            }

            #[test]
            fn rejects_used_queue() {
                test_rejects_used_queue::<$heap_type>();
            }

            #[test]
            fn random_graphs_match_reference() {
                test_random_graphs_match_reference::<$heap_type>();
            }
        }
    };
}

engine_tests!(BinaryHeap, binary);
engine_tests!(FibonacciHeap, fibonacci);
engine_tests!(PairingHeap, pairing);

#[test]
fn backends_agree_on_random_graphs() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..10 {
        let graph = random_graph(&mut rng, 60, 240, false);
        let source = rng.gen_range(0..60);

        let binary = dijkstra::<BinaryHeap>(&graph, source).unwrap();
        let fibonacci = dijkstra::<FibonacciHeap>(&graph, source).unwrap();
        let pairing = dijkstra::<PairingHeap>(&graph, source).unwrap();
        assert_eq!(binary.distances, fibonacci.distances);
        assert_eq!(binary.distances, pairing.distances);

        let binary = prim::<BinaryHeap>(&graph, source).unwrap();
        let fibonacci = prim::<FibonacciHeap>(&graph, source).unwrap();
        let pairing = prim::<PairingHeap>(&graph, source).unwrap();
        assert_eq!(binary.total_weight, fibonacci.total_weight);
        assert_eq!(binary.total_weight, pairing.total_weight);
    }
}
