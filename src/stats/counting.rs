//! Counting labeled distributions that realize a partition

use crate::core::Partition;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Count the distributions over `n_bins` labeled bins whose non-zero
/// occupancies are exactly the parts of `partition`
///
/// Choosing and ordering `m` of the bins gives the falling factorial
/// `N_bins! / (N_bins - m)!`. Bins that receive the same part value are
/// interchangeable, so each value repeated `k` times divides the count by `k!`.
/// Empty bins are not part of the partition and need no correction.
///
/// Returns zero when the partition has more parts than there are bins.
///
/// # Examples
/// ```
/// use average_entropy::{Partition, count_distributions};
/// use num_bigint::BigUint;
///
/// // Two bins with 2, one bin with 1, five empty bins, out of 8
/// let p = Partition::new(vec![2, 2, 1]).unwrap();
/// assert_eq!(count_distributions(&p, 8), BigUint::from(168u32));
/// ```
#[must_use]
pub fn count_distributions(partition: &Partition, n_bins: u64) -> BigUint {
    if !partition.fits(n_bins) {
        return BigUint::zero();
    }

    let m = partition.len() as u64;
    let placements = falling_factorial(n_bins, m);

    let overcount = partition
        .multiplicities()
        .values()
        .filter(|&&k| k > 1)
        .fold(BigUint::one(), |acc, &k| acc * factorial(k));

    placements / overcount
}

/// `n * (n - 1) * ... * (n - k + 1)`, with `k <= n`
fn falling_factorial(n: u64, k: u64) -> BigUint {
    (0..k).fold(BigUint::one(), |acc, i| acc * (n - i))
}

fn factorial(k: u64) -> BigUint {
    falling_factorial(k, k)
}

/// Natural logarithm of a big unsigned integer
///
/// Values beyond `f64` range are shifted down first and the shift added back
/// as a multiple of ln 2.
pub(crate) fn ln_biguint(value: &BigUint) -> f64 {
    const KEPT_BITS: u64 = 64;

    if value.is_zero() {
        return f64::NEG_INFINITY;
    }

    let bits = value.bits();
    if bits <= 1000 {
        return value.to_f64().map_or(f64::INFINITY, f64::ln);
    }

    let shift = bits - KEPT_BITS;
    let mantissa = (value >> shift).to_f64().unwrap_or(f64::MAX);
    mantissa.ln() + shift as f64 * std::f64::consts::LN_2
}
