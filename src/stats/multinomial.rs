//! Multinomial probability mass under equiprobable bins
//!
//! Works in log space with `statrs` log-factorials so that `n!` and
//! `N_bins^n` never have to be formed explicitly.

use crate::core::Distribution;
use statrs::function::factorial::ln_factorial;

/// Log of the multinomial PMF of one labeled occupancy vector
///
/// `counts` lists the occupied bins only; empty bins contribute `ln 0! = 0`
/// and may be omitted. `n` is the already validated sum of `counts`.
/// Every bin has probability `1 / n_bins`.
///
/// ln P = ln n! - Σ ln xᵢ! - n ln `N_bins`
pub(crate) fn uniform_ln_pmf(counts: &[u64], n: u64, n_bins: u64) -> f64 {
    debug_assert_eq!(
        counts.iter().map(|&c| u128::from(c)).sum::<u128>(),
        u128::from(n)
    );

    let coefficient = counts
        .iter()
        .filter(|&&c| c > 1)
        .fold(ln_factorial(n), |acc, &c| acc - ln_factorial(c));

    coefficient - n as f64 * (n_bins as f64).ln()
}

/// Probability of observing exactly this labeled distribution
///
/// Each of the `n` elements lands in one of the distribution's bins with
/// equal probability.
///
/// # Examples
/// ```
/// use average_entropy::{Distribution, prob_of_distribution};
///
/// // Two elements in two bins: one per bin happens half the time
/// let d = Distribution::new(vec![1, 1]).unwrap();
/// assert!((prob_of_distribution(&d) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn prob_of_distribution(distribution: &Distribution) -> f64 {
    uniform_ln_pmf(
        distribution.counts(),
        distribution.total(),
        distribution.bins(),
    )
    .exp()
}
