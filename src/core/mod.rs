//! Core domain types
//!
//! Partitions (occupancy patterns), distributions (labeled occupancy vectors)
//! and the error type shared by every computation.

mod distribution;
mod error;
mod partition;

pub use distribution::Distribution;
pub use error::EntropyError;
pub use partition::{Partition, Partitions, partitions};

/// Sum of counts, or [`EntropyError::TotalOverflow`] if it does not fit in a `u64`
pub(crate) fn checked_total(counts: &[u64]) -> Result<u64, EntropyError> {
    counts
        .iter()
        .try_fold(0u64, |acc, &c| acc.checked_add(c))
        .ok_or(EntropyError::TotalOverflow)
}
