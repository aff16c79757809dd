//! Labeled bin occupancy vectors

use super::{EntropyError, Partition, checked_total};

/// One concrete assignment of counts to `N_bins` labeled bins, zeros included
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Distribution {
    counts: Vec<u64>,
    total: u64,
}

impl Distribution {
    /// Wrap a full occupancy vector
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::NoBins`] if `counts` is empty and
    /// [`EntropyError::TotalOverflow`] if the counts sum past `u64::MAX`.
    pub fn new(counts: Vec<u64>) -> Result<Self, EntropyError> {
        if counts.is_empty() {
            return Err(EntropyError::NoBins);
        }
        let total = checked_total(&counts)?;
        Ok(Self { counts, total })
    }

    /// Place the partition's parts in the first bins and leave the rest empty
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::NoBins`] for zero bins and
    /// [`EntropyError::TooManyParts`] when the partition does not fit.
    ///
    /// # Examples
    /// ```
    /// use average_entropy::core::{Distribution, Partition};
    ///
    /// let p = Partition::new(vec![2, 2, 1]).unwrap();
    /// let d = Distribution::from_partition(&p, 6).unwrap();
    /// assert_eq!(d.counts(), &[2, 2, 1, 0, 0, 0]);
    /// ```
    pub fn from_partition(partition: &Partition, n_bins: u64) -> Result<Self, EntropyError> {
        if n_bins == 0 {
            return Err(EntropyError::NoBins);
        }
        if !partition.fits(n_bins) {
            return Err(EntropyError::TooManyParts {
                parts: partition.len(),
                bins: n_bins,
            });
        }

        let n_bins = usize::try_from(n_bins).map_err(|_| EntropyError::TooManyParts {
            parts: partition.len(),
            bins: n_bins,
        })?;
        let mut counts = Vec::with_capacity(n_bins);
        counts.extend_from_slice(partition.parts());
        counts.resize(n_bins, 0);
        Ok(Self {
            counts,
            total: partition.total(),
        })
    }

    /// Per-bin counts
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of bins
    #[inline]
    #[must_use]
    pub fn bins(&self) -> u64 {
        self.counts.len() as u64
    }

    /// Number of elements placed (`n`)
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }
}
