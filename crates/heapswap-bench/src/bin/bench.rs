//! Benchmark driver: Dijkstra and Prim with every backend on random graphs
//!
//! ## Running
//!
//! ```bash
//! cargo run --release -p heapswap-bench --bin heapswap-bench > results.csv
//! cargo run --release -p heapswap-bench --bin heapswap-bench -- --sizes 2000 --trials 3
//! ```
//!
//! CSV goes to stdout; progress and the summary table go to stderr.

use heapswap::binary::BinaryHeap;
use heapswap::fibonacci::FibonacciHeap;
use heapswap::graph::{Graph, GraphError};
use heapswap::pairing::PairingHeap;
use heapswap::AlgorithmError;
use heapswap_bench::config::{BenchConfig, Command, USAGE};
use heapswap_bench::generate::random_graph;
use heapswap_bench::report::{self, Summary};
use heapswap_bench::{run_case, Algorithm};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Debug, thiserror::Error)]
enum DriverError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

fn run_graph<W: Write>(
    out: &mut W,
    summary: &mut Summary,
    graph: &Graph,
    density: &str,
) -> Result<(), DriverError> {
    for algo in Algorithm::ALL {
        let rows = [
            {
                eprintln!("[progress] {} Binary ({density})", algo.name());
                run_case::<BinaryHeap>(algo, graph, 0)?
            },
            {
                eprintln!("[progress] {} Fibonacci ({density})", algo.name());
                run_case::<FibonacciHeap>(algo, graph, 0)?
            },
            {
                eprintln!("[progress] {} Pairing ({density})", algo.name());
                run_case::<PairingHeap>(algo, graph, 0)?
            },
        ];
        for row in &rows {
            report::write_row(out, row)?;
            summary.record(row);
        }
        out.flush()?;
    }
    Ok(())
}

fn run(config: &BenchConfig) -> Result<Summary, DriverError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_header(&mut out)?;
    out.flush()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut summary = Summary::new();

    for &n in &config.sizes {
        let m_sparse = config.sparse_edges(n);
        let m_dense = config.dense_edges(n);

        for trial in 0..config.trials {
            eprintln!("\n[progress] building SPARSE graph n={n} m={m_sparse} trial={trial}");
            let sparse = random_graph(n, m_sparse, config.directed, &mut rng)?;
            run_graph(&mut out, &mut summary, &sparse, "sparse")?;
            drop(sparse);

            eprintln!("\n[progress] building DENSE graph n={n} m={m_dense} trial={trial}");
            let dense = random_graph(n, m_dense, config.directed, &mut rng)?;
            run_graph(&mut out, &mut summary, &dense, "dense")?;
        }
    }

    eprintln!("\n[progress] bench done");
    Ok(summary)
}

fn main() -> ExitCode {
    let config = match BenchConfig::from_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(summary) => {
            eprintln!();
            if let Err(e) = summary.write_table(&mut io::stderr()) {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
