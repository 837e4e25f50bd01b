//! Benchmark driver configuration
//!
//! Defaults reproduce the standard comparison run; every field can be
//! overridden from the command line.

use thiserror::Error;

/// Errors produced while parsing command-line flags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
    #[error("flag `{0}` expects a value")]
    MissingValue(&'static str),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },
    #[error("`{0}` must be at least 1")]
    Zero(&'static str),
}

/// What the driver should do after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the benchmarks
    Run(BenchConfig),
    /// Print usage and exit
    Help,
}

/// Parameters of one benchmark session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Vertex counts to benchmark
    pub sizes: Vec<usize>,
    /// Fresh random graphs per size and density
    pub trials: usize,
    /// Seed for the graph generator
    pub seed: u64,
    /// Generate directed graphs
    pub directed: bool,
    /// Sparse graphs get `sparse_factor * n` edges
    pub sparse_factor: usize,
    /// Dense graphs get `n * n / dense_divisor` edges
    pub dense_divisor: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![200, 500, 1000],
            trials: 5,
            seed: 123_456_789,
            directed: true,
            sparse_factor: 4,
            dense_divisor: 8,
        }
    }
}

pub const USAGE: &str = "\
Usage: heapswap-bench [OPTIONS]

Runs Dijkstra and Prim with every backend on random sparse and dense graphs
and writes one CSV line per run to stdout.

Options:
  --sizes N,N,...   vertex counts to benchmark (default 200,500,1000)
  --trials N        random graphs per size and density (default 5)
  --seed N          generator seed (default 123456789)
  --undirected      generate undirected graphs
  -h, --help        print this message";

impl BenchConfig {
    /// Edge count for the sparse graphs of size `n`
    pub fn sparse_edges(&self, n: usize) -> usize {
        self.sparse_factor * n
    }

    /// Edge count for the dense graphs of size `n`
    pub fn dense_edges(&self, n: usize) -> usize {
        n * n / self.dense_divisor
    }

    /// Parses flags (without the program name) on top of the defaults
    pub fn from_args<I, S>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-h" | "--help" => return Ok(Command::Help),
                "--undirected" => config.directed = false,
                "--sizes" => {
                    let value = next_value(&mut args, "--sizes")?;
                    config.sizes = value
                        .split(',')
                        .map(|s| parse_count("--sizes", s.trim()))
                        .collect::<Result<_, _>>()?;
                }
                "--trials" => {
                    let value = next_value(&mut args, "--trials")?;
                    config.trials = parse_count("--trials", &value)?;
                }
                "--seed" => {
                    let value = next_value(&mut args, "--seed")?;
                    config.seed = value.parse().map_err(|_| ConfigError::InvalidValue {
                        flag: "--seed",
                        value: value.clone(),
                    })?;
                }
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }

        Ok(Command::Run(config))
    }
}

fn next_value<I, S>(args: &mut I, flag: &'static str) -> Result<String, ConfigError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    args.next()
        .map(|s| s.as_ref().to_string())
        .ok_or(ConfigError::MissingValue(flag))
}

fn parse_count(flag: &'static str, value: &str) -> Result<usize, ConfigError> {
    let n: usize = value.parse().map_err(|_| ConfigError::InvalidValue {
        flag,
        value: value.to_string(),
    })?;
    if n == 0 {
        return Err(ConfigError::Zero(flag));
    }
    Ok(n)
}
