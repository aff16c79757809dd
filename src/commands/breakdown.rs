//! Per-partition breakdown command

use crate::core::EntropyError;
use crate::stats::{Breakdown, EntropyCalculator};

/// Decompose the expectation for `(n, n_bins)` into partition terms
///
/// # Errors
///
/// Returns an error if `n_bins` is zero.
pub fn run_breakdown(
    calculator: &mut EntropyCalculator,
    n: u64,
    n_bins: u64,
) -> Result<Breakdown, EntropyError> {
    let result = calculator.breakdown(n, n_bins)?;

    let deviation = (result.total_probability - 1.0).abs();
    if deviation > 1e-9 {
        tracing::warn!(n, n_bins, deviation, "partition probabilities do not sum to 1");
    }

    Ok(result)
}
