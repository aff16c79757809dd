//! Probability mass of an occupancy pattern

use super::counting::{count_distributions, ln_biguint};
use super::multinomial::uniform_ln_pmf;
use crate::core::{EntropyError, Partition};

/// Probability that `n = Σ partition` elements, placed uniformly at random in
/// `n_bins` bins, produce the occupancy pattern `partition` in any labeling
///
/// Every labeled distribution with the same multiset of counts is equally
/// likely, so this is the number of such distributions times the
/// probability of any one of them. Both factors are combined in log space.
///
/// # Errors
///
/// Returns [`EntropyError::NoBins`] if `n_bins` is zero.
///
/// # Examples
/// ```
/// use average_entropy::{Partition, prob_of_partition};
///
/// // Five elements in eight bins: two bins hold 2, one holds 1
/// let p = Partition::new(vec![2, 2, 1]).unwrap();
/// let prob = prob_of_partition(&p, 8).unwrap();
/// assert!((prob - 0.1538).abs() < 1e-3);
/// ```
pub fn prob_of_partition(partition: &Partition, n_bins: u64) -> Result<f64, EntropyError> {
    if n_bins == 0 {
        return Err(EntropyError::NoBins);
    }
    if !partition.fits(n_bins) {
        return Ok(0.0);
    }

    let ln_count = ln_biguint(&count_distributions(partition, n_bins));
    let ln_one = uniform_ln_pmf(partition.parts(), partition.total(), n_bins);

    Ok((ln_count + ln_one).exp().min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::partitions;

    fn prob(parts: &[u64], n_bins: u64) -> f64 {
        prob_of_partition(&Partition::new(parts.to_vec()).unwrap(), n_bins).unwrap()
    }

    #[test]
    fn documented_example() {
        // 168 * 30 / 32768
        let expected = 168.0 * 30.0 / 32768.0;
        assert!((prob(&[2, 2, 1], 8) - expected).abs() < 1e-12);
        assert!((prob(&[2, 2, 1], 8) - 0.1538).abs() < 1e-3);
    }

    #[test]
    fn probabilities_are_normalized() {
        for (n, n_bins) in [(5, 8), (1, 1), (4, 2), (7, 3), (10, 10), (12, 50)] {
            let total: f64 = partitions(n)
                .filter(|p| p.fits(n_bins))
                .map(|p| prob_of_partition(&p, n_bins).unwrap())
                .sum();
            assert!((total - 1.0).abs() < 1e-9, "n={n}, bins={n_bins}: {total}");
        }
    }

    #[test]
    fn single_bin_holds_everything() {
        assert!((prob(&[6], 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn two_elements_two_bins() {
        // Same bin or different bins, each with probability 1/2
        assert!((prob(&[2], 2) - 0.5).abs() < 1e-12);
        assert!((prob(&[1, 1], 2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn impossible_partition_has_zero_probability() {
        assert!(prob(&[1, 1, 1], 2).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_bins_rejected() {
        let p = Partition::new(vec![1]).unwrap();
        assert_eq!(prob_of_partition(&p, 0), Err(EntropyError::NoBins));
    }

    #[test]
    fn probability_stays_in_unit_interval_for_many_bins() {
        let p = prob(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1], 1_000_000);
        assert!(p > 0.99 && p <= 1.0);
    }
}
