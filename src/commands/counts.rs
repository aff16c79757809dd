//! Commands for explicit count vectors and partitions

use crate::core::{EntropyError, Partition};
use crate::stats::{count_distributions, entropy, prob_of_partition};
use num_bigint::BigUint;

/// Entropy of an explicit count vector
pub struct CountsResult {
    pub counts: Vec<u64>,
    pub total: u128,
    pub entropy: f64,
    /// log₂ of the number of non-zero entries
    pub max_entropy: f64,
}

/// Compute the entropy of a count vector
///
/// # Errors
///
/// Returns an error if the counts are empty or all zero.
pub fn analyze_counts(counts: Vec<u64>) -> Result<CountsResult, EntropyError> {
    let entropy = entropy(&counts)?;
    let occupied = counts.iter().filter(|&&c| c > 0).count();

    Ok(CountsResult {
        total: counts.iter().map(|&c| u128::from(c)).sum(),
        max_entropy: (occupied as f64).log2(),
        counts,
        entropy,
    })
}

/// How a single partition is realized in `n_bins` bins
pub struct PartitionResult {
    pub partition: Partition,
    pub n_bins: u64,
    pub distributions: BigUint,
    pub probability: f64,
    pub entropy: f64,
}

/// Count and weigh the distributions behind a partition string like `"2,2,1"`
///
/// # Errors
///
/// Returns an error if the partition cannot be parsed or `n_bins` is zero.
pub fn analyze_partition(partition: &str, n_bins: u64) -> Result<PartitionResult, EntropyError> {
    let partition: Partition = partition.parse()?;
    let probability = prob_of_partition(&partition, n_bins)?;

    Ok(PartitionResult {
        distributions: count_distributions(&partition, n_bins),
        entropy: entropy(partition.parts())?,
        partition,
        n_bins,
        probability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_uniform() {
        let result = analyze_counts(vec![3, 3, 0, 3]).unwrap();

        assert_eq!(result.total, 9);
        assert!((result.entropy - 3.0_f64.log2()).abs() < 1e-12);
        assert!((result.max_entropy - 3.0_f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn counts_total_beyond_u64() {
        let result = analyze_counts(vec![u64::MAX, 1]).unwrap();

        assert_eq!(result.total, u128::from(u64::MAX) + 1);
        assert!(result.entropy >= 0.0);
        assert!(result.entropy < 1e-15);
    }

    #[test]
    fn counts_all_zero_rejected() {
        assert_eq!(
            analyze_counts(vec![0, 0]).err(),
            Some(EntropyError::EmptyCounts)
        );
    }

    #[test]
    fn partition_documented_example() {
        let result = analyze_partition("2,2,1", 8).unwrap();

        assert_eq!(result.distributions, BigUint::from(168u32));
        assert!((result.probability - 0.1538).abs() < 1e-3);
        assert!(result.entropy > 0.0);
    }

    #[test]
    fn partition_that_does_not_fit() {
        let result = analyze_partition("1 1 1", 2).unwrap();
        assert_eq!(result.distributions, BigUint::from(0u32));
        assert!(result.probability.abs() < f64::EPSILON);
    }

    #[test]
    fn partition_total_beyond_u64_rejected() {
        assert_eq!(
            analyze_partition("18446744073709551615,1", 2).err(),
            Some(EntropyError::TotalOverflow)
        );
    }

    #[test]
    fn partition_invalid_input() {
        assert!(analyze_partition("two,one", 8).is_err());
        assert!(analyze_partition("2,1", 0).is_err());
    }
}
