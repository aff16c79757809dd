//! Shannon entropy of occupancy counts

use crate::core::EntropyError;

/// Calculate Shannon entropy (bits) of a vector of counts
///
/// H = -Σ (c/N) * log₂(c/N), with N = Σ c
///
/// # Properties
/// - Zero entries contribute nothing (0 · log 0 = 0)
/// - Returns 0.0 when exactly one entry is non-zero
/// - Always in range [0, log₂(k)] for k non-zero entries
///
/// # Errors
///
/// Returns [`EntropyError::EmptyCounts`] if the counts are empty or all zero.
///
/// # Examples
/// ```
/// use average_entropy::entropy;
///
/// let h = entropy(&[1, 1, 1, 1]).unwrap();
/// assert!((h - 2.0).abs() < 1e-12); // log2(4) = 2 bits
/// ```
pub fn entropy(counts: &[u64]) -> Result<f64, EntropyError> {
    let total: u128 = counts.iter().map(|&c| u128::from(c)).sum();

    if total == 0 {
        return Err(EntropyError::EmptyCounts);
    }

    Ok(entropy_with_total(counts, total as f64))
}

/// Entropy of counts whose positive total is already known
pub(crate) fn entropy_with_total(counts: &[u64], total: f64) -> f64 {
    let h: f64 = counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single occupied bin gives -1 * log2(1) = -0.0
    if h > 0.0 { h } else { 0.0 }
}
