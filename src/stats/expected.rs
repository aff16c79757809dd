//! Expected Shannon entropy of a uniform sample
//!
//! Sums, over every partition of `n` that fits in `N_bins` bins, the
//! probability of the partition times the entropy of its occupancy pattern.

use super::counting::count_distributions;
use super::entropy::entropy_with_total;
use super::probability::prob_of_partition;
use crate::core::{EntropyError, Partition, partitions};
use num_bigint::BigUint;
use rustc_hash::FxHashMap;

/// Expected entropy (bits) of the occupancy of `n_bins` equiprobable bins
/// after `n` elements are placed uniformly at random
///
/// `n = 0` leaves every bin empty and is defined to have entropy 0.
///
/// # Errors
///
/// Returns [`EntropyError::NoBins`] if `n_bins` is zero.
///
/// # Examples
/// ```
/// use average_entropy::avg_entropy;
///
/// // Two elements, two bins: same bin (0 bits) or split (1 bit), equally likely
/// let h = avg_entropy(2, 2).unwrap();
/// assert!((h - 0.5).abs() < 1e-12);
/// ```
pub fn avg_entropy(n: u64, n_bins: u64) -> Result<f64, EntropyError> {
    if n_bins == 0 {
        return Err(EntropyError::NoBins);
    }
    if n == 0 {
        return Ok(0.0);
    }

    let mut expected = 0.0;
    let mut considered = 0usize;

    for partition in partitions(n).filter(|p| p.fits(n_bins)) {
        let probability = prob_of_partition(&partition, n_bins)?;
        // Zero padding up to n_bins adds nothing to the entropy
        let entropy = entropy_with_total(partition.parts(), n as f64);
        expected += probability * entropy;
        considered += 1;
    }

    tracing::debug!(n, n_bins, considered, expected, "avg_entropy");
    Ok(expected)
}

/// Largest entropy reachable with `n` elements in `n_bins` bins: log₂(min(n, `N_bins`))
#[must_use]
pub fn max_entropy(n: u64, n_bins: u64) -> f64 {
    match n.min(n_bins) {
        0 => 0.0,
        k => (k as f64).log2(),
    }
}

/// Total probability mass of all admissible partitions (≈ 1.0)
///
/// # Errors
///
/// Returns [`EntropyError::NoBins`] if `n_bins` is zero.
pub fn total_probability(n: u64, n_bins: u64) -> Result<f64, EntropyError> {
    if n_bins == 0 {
        return Err(EntropyError::NoBins);
    }
    partitions(n)
        .filter(|p| p.fits(n_bins))
        .map(|p| prob_of_partition(&p, n_bins))
        .sum()
}

/// One partition's share of the expectation
#[derive(Debug, Clone)]
pub struct PartitionTerm {
    pub partition: Partition,
    /// Number of labeled distributions realizing the partition
    pub distributions: BigUint,
    pub probability: f64,
    /// Entropy of the occupancy pattern in bits
    pub entropy: f64,
}

impl PartitionTerm {
    /// probability × entropy
    #[must_use]
    pub fn contribution(&self) -> f64 {
        self.probability * self.entropy
    }
}

/// Per-partition decomposition of the expected entropy
#[derive(Debug, Clone)]
pub struct Breakdown {
    pub n: u64,
    pub n_bins: u64,
    /// Admissible partitions in enumeration order
    pub terms: Vec<PartitionTerm>,
    pub expected: f64,
    pub total_probability: f64,
}

impl Breakdown {
    /// Terms sorted by descending contribution
    #[must_use]
    pub fn by_contribution(&self) -> Vec<&PartitionTerm> {
        let mut terms: Vec<&PartitionTerm> = self.terms.iter().collect();
        terms.sort_by(|a, b| b.contribution().total_cmp(&a.contribution()));
        terms
    }

    /// The most likely occupancy pattern
    #[must_use]
    pub fn most_likely(&self) -> Option<&PartitionTerm> {
        self.terms
            .iter()
            .max_by(|a, b| a.probability.total_cmp(&b.probability))
    }
}

/// Decompose the expected entropy into per-partition terms
///
/// # Errors
///
/// Returns [`EntropyError::NoBins`] if `n_bins` is zero.
///
/// # Examples
/// ```
/// use average_entropy::stats::breakdown;
///
/// let b = breakdown(5, 8).unwrap();
/// assert_eq!(b.terms.len(), 7); // every partition of 5 fits in 8 bins
/// assert!((b.total_probability - 1.0).abs() < 1e-9);
/// ```
pub fn breakdown(n: u64, n_bins: u64) -> Result<Breakdown, EntropyError> {
    if n_bins == 0 {
        return Err(EntropyError::NoBins);
    }

    let terms = partitions(n)
        .filter(|p| p.fits(n_bins))
        .map(|partition| {
            let probability = prob_of_partition(&partition, n_bins)?;
            let entropy = if n == 0 {
                0.0
            } else {
                entropy_with_total(partition.parts(), n as f64)
            };
            Ok(PartitionTerm {
                distributions: count_distributions(&partition, n_bins),
                partition,
                probability,
                entropy,
            })
        })
        .collect::<Result<Vec<_>, EntropyError>>()?;

    let expected: f64 = terms.iter().map(PartitionTerm::contribution).sum();
    let total_probability: f64 = terms.iter().map(|t| t.probability).sum();

    Ok(Breakdown {
        n,
        n_bins,
        terms,
        expected,
        total_probability,
    })
}

/// Options for [`EntropyCalculator`]
#[derive(Debug, Clone, Copy)]
pub struct CalculatorConfig {
    /// Remember expectations already computed by this calculator
    pub memoize: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self { memoize: true }
    }
}

/// Reusable expected-entropy calculator with an optional result cache
///
/// Useful when sweeping many `(n, N_bins)` pairs that repeat, as in a table.
#[derive(Debug, Default)]
pub struct EntropyCalculator {
    config: CalculatorConfig,
    cache: FxHashMap<(u64, u64), f64>,
}

impl EntropyCalculator {
    /// Create a calculator with the given options
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            cache: FxHashMap::default(),
        }
    }

    /// Expected entropy for `(n, n_bins)`, served from the cache when possible
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::NoBins`] if `n_bins` is zero.
    pub fn expected_entropy(&mut self, n: u64, n_bins: u64) -> Result<f64, EntropyError> {
        if !self.config.memoize {
            return avg_entropy(n, n_bins);
        }

        if let Some(&cached) = self.cache.get(&(n, n_bins)) {
            tracing::trace!(n, n_bins, "cache hit");
            return Ok(cached);
        }

        let value = avg_entropy(n, n_bins)?;
        self.cache.insert((n, n_bins), value);
        Ok(value)
    }

    /// Per-partition decomposition; only its expectation is cached
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::NoBins`] if `n_bins` is zero.
    pub fn breakdown(&mut self, n: u64, n_bins: u64) -> Result<Breakdown, EntropyError> {
        let result = breakdown(n, n_bins)?;
        if self.config.memoize {
            self.cache.insert((n, n_bins), result.expected);
        }
        Ok(result)
    }

    /// Number of cached expectations
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached expectation
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Current options
    #[must_use]
    pub const fn config(&self) -> CalculatorConfig {
        self.config
    }
}
