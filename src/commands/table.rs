//! Expected-entropy table over a range of sample sizes
//!
//! Sweeps `n = 1..=max_n` for each requested bin count.

use crate::core::EntropyError;
use crate::stats::{EntropyCalculator, max_entropy};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// One row of the table: a sample size and its expectation per bin count
#[derive(Debug, Clone)]
pub struct TableRow {
    pub n: u64,
    /// Expected entropy for each entry of [`EntropyTable::bins`], same order
    pub expected: Vec<f64>,
    /// Upper bound log₂(min(n, `N_bins`)), same order
    pub bounds: Vec<f64>,
}

/// Expected entropies for every `(n, N_bins)` pair in the sweep
#[derive(Debug, Clone)]
pub struct EntropyTable {
    pub bins: Vec<u64>,
    pub rows: Vec<TableRow>,
    pub total_time: Duration,
}

/// Compute the table, reusing `calculator`'s cache across calls
///
/// # Errors
///
/// Returns an error if any bin count is zero.
pub fn run_table(
    calculator: &mut EntropyCalculator,
    max_n: u64,
    bins: &[u64],
    show_progress: bool,
) -> Result<EntropyTable, EntropyError> {
    if bins.contains(&0) {
        return Err(EntropyError::NoBins);
    }

    let cells = max_n * bins.len() as u64;
    let pb = if show_progress {
        ProgressBar::new(cells)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut rows = Vec::new();

    for n in 1..=max_n {
        let mut expected = Vec::with_capacity(bins.len());
        let mut bounds = Vec::with_capacity(bins.len());

        for &n_bins in bins {
            expected.push(calculator.expected_entropy(n, n_bins)?);
            bounds.push(max_entropy(n, n_bins));
            pb.inc(1);
        }

        pb.set_message(format!("n = {n}"));
        rows.push(TableRow {
            n,
            expected,
            bounds,
        });
    }

    pb.finish_with_message("Complete!");
    let total_time = start.elapsed();

    tracing::debug!(
        max_n,
        columns = bins.len(),
        cached = calculator.cache_len(),
        elapsed_ms = total_time.as_millis() as u64,
        "table complete"
    );

    Ok(EntropyTable {
        bins: bins.to_vec(),
        rows,
        total_time,
    })
}
