//! Expected entropy command
//!
//! Computes the expectation for one `(n, N_bins)` pair and relates it to the
//! largest entropy reachable.

use crate::core::{EntropyError, partitions};
use crate::stats::{avg_entropy, max_entropy};
use std::time::{Duration, Instant};

/// Result of an expected-entropy computation
pub struct ExpectedResult {
    pub n: u64,
    pub n_bins: u64,
    pub expected: f64,
    pub max_entropy: f64,
    /// Partitions of `n` that fit in `n_bins` bins
    pub partitions_considered: usize,
    pub duration: Duration,
}

impl ExpectedResult {
    /// Expected entropy as a fraction of the maximum (1.0 when the maximum is 0)
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        if self.max_entropy > 0.0 {
            self.expected / self.max_entropy
        } else {
            1.0
        }
    }
}

/// Compute the expected entropy of `n` elements in `n_bins` bins
///
/// # Errors
///
/// Returns an error if `n_bins` is zero.
pub fn compute_expected(n: u64, n_bins: u64) -> Result<ExpectedResult, EntropyError> {
    let start = Instant::now();
    let expected = avg_entropy(n, n_bins)?;
    let duration = start.elapsed();

    Ok(ExpectedResult {
        n,
        n_bins,
        expected,
        max_entropy: max_entropy(n, n_bins),
        partitions_considered: partitions(n).filter(|p| p.fits(n_bins)).count(),
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_valid_input() {
        let result = compute_expected(5, 8).unwrap();

        assert_eq!(result.n, 5);
        assert_eq!(result.n_bins, 8);
        assert_eq!(result.partitions_considered, 7);
        assert!(result.expected > 0.0);
        assert!(result.expected <= result.max_entropy);
        assert!((result.max_entropy - 5.0_f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn expected_filters_partitions() {
        // Partitions of 5 with at most 2 parts: [5], [4, 1], [3, 2]
        let result = compute_expected(5, 2).unwrap();
        assert_eq!(result.partitions_considered, 3);
    }

    #[test]
    fn expected_invalid_bins() {
        assert!(compute_expected(5, 0).is_err());
    }

    #[test]
    fn efficiency_properties() {
        let result = compute_expected(6, 6).unwrap();
        assert!(result.efficiency() > 0.0 && result.efficiency() <= 1.0);

        let degenerate = compute_expected(1, 4).unwrap();
        assert!((degenerate.efficiency() - 1.0).abs() < f64::EPSILON);
    }
}
