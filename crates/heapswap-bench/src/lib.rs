//! Benchmark harness for the `heapswap` backends
//!
//! Runs both engines with every backend behind a [`profile::ProfiledQueue`],
//! producing one [`report::CsvRow`] per run.

pub mod config;
pub mod generate;
pub mod profile;
pub mod report;

use heapswap::graph::Graph;
use heapswap::pathfinding::shortest_path;
use heapswap::spanning::spanning_tree;
use heapswap::{AlgorithmError, Backend, Vertex};
use profile::{OpProfile, ProfiledQueue};
use report::CsvRow;
use std::time::Instant;
use tracing::debug;

/// The engines the driver can time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    Prim,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::Prim];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Prim => "Prim",
        }
    }
}

/// Runs `algo` from `start` on a fresh profiled `B` and times it
///
/// The engine result itself is discarded; only timings and counts are kept.
pub fn run_case<B: Backend>(
    algo: Algorithm,
    graph: &Graph,
    start: Vertex,
) -> Result<CsvRow, AlgorithmError> {
    let mut profile = OpProfile::default();
    let queue = ProfiledQueue::new(B::with_capacity(graph.vertex_count()), &mut profile);

    let started = Instant::now();
    match algo {
        Algorithm::Dijkstra => {
            shortest_path(graph, start, queue)?;
        }
        Algorithm::Prim => {
            spanning_tree(graph, start, queue)?;
        }
    }
    let total = started.elapsed();

    debug!(
        algo = algo.name(),
        heap = B::NAME,
        n = graph.vertex_count(),
        ops = profile.total_ops(),
        "case finished"
    );

    Ok(CsvRow {
        algo: algo.name(),
        heap: B::NAME,
        n: graph.vertex_count(),
        total,
        profile,
    })
}
