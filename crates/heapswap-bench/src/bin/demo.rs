//! Runs both engines on a small fixed graph with every backend

use heapswap::binary::BinaryHeap;
use heapswap::fibonacci::FibonacciHeap;
use heapswap::graph::{Graph, GraphError};
use heapswap::pairing::PairingHeap;
use heapswap::pathfinding::dijkstra;
use heapswap::spanning::prim;
use heapswap::{AlgorithmError, Backend};
use std::process::ExitCode;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

fn example_graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::undirected(5);
    for (u, v, w) in [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)] {
        graph.add_edge(u, v, w)?;
    }
    Ok(graph)
}

fn show<B: Backend>(graph: &Graph) -> Result<(), AlgorithmError> {
    println!("=== {} ===", B::NAME);

    let paths = dijkstra::<B>(graph, 0)?;
    println!("Dijkstra dist from 0:");
    for v in 0..graph.vertex_count() {
        match paths.distance(v) {
            Some(d) => println!("  {v}: {d}"),
            None => println!("  {v}: unreachable"),
        }
    }

    let tree = prim::<B>(graph, 0)?;
    println!("\nPrim MST total weight (root=0): {}", tree.total_weight);
    println!("Parent array:");
    for (v, parent) in tree.parents.iter().enumerate() {
        match parent {
            Some(p) => println!("  parent[{v}] = {p}"),
            None => println!("  parent[{v}] = -"),
        }
    }
    println!();
    Ok(())
}

fn run() -> Result<(), DemoError> {
    let graph = example_graph()?;
    show::<BinaryHeap>(&graph)?;
    show::<FibonacciHeap>(&graph)?;
    show::<PairingHeap>(&graph)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
