//! CSV rows and a console summary for benchmark runs

use crate::profile::OpProfile;
use std::io::{self, Write};
use std::time::Duration;

/// Column names, in output order
pub const CSV_HEADER: &str =
    "algo,heap,n,total_ns,insert_count,extract_count,decrease_count,insert_ns,extract_ns,decrease_ns";

/// One measured engine run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// Engine name, e.g. `Dijkstra` or `Prim`
    pub algo: &'static str,
    /// Backend name as given by `Backend::NAME`
    pub heap: &'static str,
    /// Number of vertices in the graph
    pub n: usize,
    /// Wall time of the whole run
    pub total: Duration,
    /// Per-operation counters for the run
    pub profile: OpProfile,
}

/// Writes [`CSV_HEADER`] followed by a newline
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")
}

/// Writes `row` as one CSV line
pub fn write_row<W: Write>(out: &mut W, row: &CsvRow) -> io::Result<()> {
    let p = &row.profile;
    writeln!(
        out,
        "{},{},{},{},{},{},{},{},{},{}",
        row.algo,
        row.heap,
        row.n,
        row.total.as_nanos(),
        p.insert_count,
        p.extract_count,
        p.decrease_count,
        p.insert_time.as_nanos(),
        p.extract_time.as_nanos(),
        p.decrease_time.as_nanos(),
    )
}

#[derive(Debug, Clone)]
struct SummaryEntry {
    algo: &'static str,
    heap: &'static str,
    n: usize,
    runs: u32,
    total: Duration,
}

/// Mean total time per (algorithm, backend, n), in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Summary {
    entries: Vec<SummaryEntry>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one run to its group
    pub fn record(&mut self, row: &CsvRow) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.algo == row.algo && e.heap == row.heap && e.n == row.n)
        {
            Some(entry) => {
                entry.runs += 1;
                entry.total += row.total;
            }
            None => self.entries.push(SummaryEntry {
                algo: row.algo,
                heap: row.heap,
                n: row.n,
                runs: 1,
                total: row.total,
            }),
        }
    }

    /// Mean wall time of the group, if any run was recorded for it
    pub fn mean(&self, algo: &str, heap: &str, n: usize) -> Option<Duration> {
        self.entries
            .iter()
            .find(|e| e.algo == algo && e.heap == heap && e.n == n)
            .map(|e| e.total / e.runs)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes an aligned table with one line per group
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{:<10} {:<10} {:>8} {:>6} {:>14}",
            "algo", "heap", "n", "runs", "mean"
        )?;
        writeln!(out, "{}", "-".repeat(52))?;
        for e in &self.entries {
            writeln!(
                out,
                "{:<10} {:<10} {:>8} {:>6} {:>14}",
                e.algo,
                e.heap,
                e.n,
                e.runs,
                format!("{:.3?}", e.total / e.runs)
            )?;
        }
        Ok(())
    }
}
