//! Integer partitions and their enumeration
//!
//! A partition of `n` is stored as its non-zero parts in non-increasing order.
//! Empty bins are implicit: a partition says how full the occupied bins are,
//! never which bins they are.

use super::{EntropyError, checked_total};
use rustc_hash::FxHashMap;
use std::fmt;

/// Occupancy counts of the non-empty bins, largest first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition {
    parts: Vec<u64>,
    total: u64,
}

impl Partition {
    /// Create a partition from non-zero parts given in any order
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::ZeroPart`] if any part is zero and
    /// [`EntropyError::TotalOverflow`] if the parts sum past `u64::MAX`.
    ///
    /// # Examples
    /// ```
    /// use average_entropy::core::Partition;
    ///
    /// let p = Partition::new(vec![1, 2, 2]).unwrap();
    /// assert_eq!(p.parts(), &[2, 2, 1]);
    /// assert_eq!(p.total(), 5);
    /// ```
    pub fn new(mut parts: Vec<u64>) -> Result<Self, EntropyError> {
        if parts.contains(&0) {
            return Err(EntropyError::ZeroPart);
        }
        let total = checked_total(&parts)?;
        parts.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self { parts, total })
    }

    /// Build from parts already known to be positive, non-increasing and summing to `total`
    fn from_sorted(parts: Vec<u64>, total: u64) -> Self {
        debug_assert!(parts.iter().all(|&p| p > 0));
        debug_assert!(parts.windows(2).all(|w| w[0] >= w[1]));
        Self { parts, total }
    }

    /// The non-zero parts, largest first
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// Number of occupied bins
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True only for the partition of zero
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Sum of the parts (the sample size `n`)
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether the partition can be realized with `n_bins` bins
    #[inline]
    #[must_use]
    pub fn fits(&self, n_bins: u64) -> bool {
        self.parts.len() as u64 <= n_bins
    }

    /// How many times each distinct part value occurs
    #[must_use]
    pub fn multiplicities(&self) -> FxHashMap<u64, u64> {
        let mut counts = FxHashMap::default();
        for &part in &self.parts {
            *counts.entry(part).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{part}")?;
        }
        write!(f, "]")
    }
}

impl std::str::FromStr for Partition {
    type Err = EntropyError;

    /// Parse a comma or whitespace separated list such as `"2,2,1"` or `"[2, 2, 1]"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
        let parts = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u64>()
                    .map_err(|_| EntropyError::Parse(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if parts.is_empty() {
            return Err(EntropyError::Parse(s.to_string()));
        }
        Self::new(parts)
    }
}

/// Lazy iterator over every partition of `n`
///
/// Partitions come out depth-first, starting with `[n]`. Cloning the iterator
/// (or calling [`partitions`] again) restarts the sequence.
#[derive(Debug, Clone)]
pub struct Partitions {
    // Pending nodes: the leading part still to be split, and the fixed tail after it
    stack: Vec<(u64, Vec<u64>)>,
    n: u64,
    zero_pending: bool,
}

/// Enumerate all partitions of `n`
///
/// `n = 0` yields the single empty partition.
///
/// # Examples
/// ```
/// use average_entropy::core::partitions;
///
/// let all: Vec<_> = partitions(4).map(|p| p.parts().to_vec()).collect();
/// assert_eq!(
///     all,
///     vec![vec![4], vec![3, 1], vec![2, 1, 1], vec![1, 1, 1, 1], vec![2, 2]]
/// );
/// ```
#[must_use]
pub fn partitions(n: u64) -> Partitions {
    if n == 0 {
        Partitions {
            stack: Vec::new(),
            n,
            zero_pending: true,
        }
    } else {
        Partitions {
            stack: vec![(n, Vec::new())],
            n,
            zero_pending: false,
        }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.zero_pending {
            self.zero_pending = false;
            return Some(Partition::from_sorted(Vec::new(), 0));
        }

        let (head, tail) = self.stack.pop()?;

        // Split `head` into (head - i, i) with i no smaller than the tail's largest part,
        // so every child stays non-increasing. Pushed in reverse to visit small i first.
        let min = tail.first().copied().unwrap_or(1);
        for i in (min..=head / 2).rev() {
            let mut child_tail = Vec::with_capacity(tail.len() + 1);
            child_tail.push(i);
            child_tail.extend_from_slice(&tail);
            self.stack.push((head - i, child_tail));
        }

        let mut parts = Vec::with_capacity(tail.len() + 1);
        parts.push(head);
        parts.extend(tail);
        Some(Partition::from_sorted(parts, self.n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.zero_pending || !self.stack.is_empty() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}

impl std::iter::FusedIterator for Partitions {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_descending() {
        let p = Partition::new(vec![1, 3, 2, 3]).unwrap();
        assert_eq!(p.parts(), &[3, 3, 2, 1]);
        assert_eq!(p.len(), 4);
        assert_eq!(p.total(), 9);
    }

    #[test]
    fn new_rejects_zero_parts() {
        assert_eq!(Partition::new(vec![2, 0, 1]), Err(EntropyError::ZeroPart));
    }

    #[test]
    fn new_rejects_totals_beyond_u64() {
        assert_eq!(
            Partition::new(vec![u64::MAX, 1]),
            Err(EntropyError::TotalOverflow)
        );
        assert_eq!(
            "18446744073709551615,1".parse::<Partition>(),
            Err(EntropyError::TotalOverflow)
        );

        // The largest representable total is still accepted
        let p = Partition::new(vec![u64::MAX - 1, 1]).unwrap();
        assert_eq!(p.total(), u64::MAX);
    }

    #[test]
    fn multiplicities_count_repeats() {
        let p = Partition::new(vec![2, 2, 1]).unwrap();
        let m = p.multiplicities();
        assert_eq!(m.len(), 2);
        assert_eq!(m[&2], 2);
        assert_eq!(m[&1], 1);
    }

    #[test]
    fn fits_respects_bin_count() {
        let p = Partition::new(vec![1, 1, 1]).unwrap();
        assert!(p.fits(3));
        assert!(p.fits(8));
        assert!(!p.fits(2));
    }

    #[test]
    fn display_and_parse() {
        let p: Partition = "2, 1,2".parse().unwrap();
        assert_eq!(p.to_string(), "[2, 2, 1]");

        let q: Partition = "[3 1]".parse().unwrap();
        assert_eq!(q.parts(), &[3, 1]);
    }

    #[test]
    fn parse_invalid() {
        assert!("".parse::<Partition>().is_err());
        assert!("2,x".parse::<Partition>().is_err());
        assert_eq!("2,0".parse::<Partition>(), Err(EntropyError::ZeroPart));
    }

    #[test]
    fn partition_counts_match_partition_function() {
        // p(n) for n = 1..=12
        let expected = [1, 2, 3, 5, 7, 11, 15, 22, 30, 42, 56, 77];
        for (n, &count) in (1..).zip(expected.iter()) {
            assert_eq!(partitions(n).count(), count, "p({n})");
        }
    }

    #[test]
    fn partitions_are_canonical_and_sum_to_n() {
        for n in 1..=15 {
            for p in partitions(n) {
                assert_eq!(p.total(), n);
                assert!(p.parts().windows(2).all(|w| w[0] >= w[1]));
                assert!(p.parts().iter().all(|&x| x > 0));
            }
        }
    }

    #[test]
    fn partitions_have_no_duplicates() {
        let all: Vec<Partition> = partitions(12).collect();
        let unique: std::collections::HashSet<&Partition> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn first_partition_is_whole() {
        assert_eq!(partitions(7).next().unwrap().parts(), &[7]);
    }

    #[test]
    fn partitions_of_five_in_order() {
        let all: Vec<Vec<u64>> = partitions(5).map(|p| p.parts().to_vec()).collect();
        assert_eq!(
            all,
            vec![
                vec![5],
                vec![4, 1],
                vec![3, 1, 1],
                vec![2, 1, 1, 1],
                vec![1, 1, 1, 1, 1],
                vec![2, 2, 1],
                vec![3, 2],
            ]
        );
    }

    #[test]
    fn trivial_inputs() {
        let zero: Vec<Partition> = partitions(0).collect();
        assert_eq!(zero.len(), 1);
        assert!(zero[0].is_empty());

        let one: Vec<Partition> = partitions(1).collect();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].parts(), &[1]);
    }

    #[test]
    fn iterator_restarts_when_cloned() {
        let iter = partitions(6);
        let first: Vec<Partition> = iter.clone().collect();
        let second: Vec<Partition> = iter.collect();
        assert_eq!(first, second);
    }
}
