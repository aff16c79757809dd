//! Average Entropy
//!
//! Exact expected Shannon entropy of a sample of `n` elements drawn uniformly
//! from `N_bins` equiprobable bins. No simulation: every integer partition of
//! `n` is weighted by the probability that a random placement produces it.
//!
//! # Quick Start
//!
//! ```rust
//! use average_entropy::{Partition, avg_entropy, count_distributions, prob_of_partition};
//!
//! // Expected entropy of 5 draws over 8 bins
//! let h = avg_entropy(5, 8).unwrap();
//! assert!(h > 0.0 && h <= 5.0_f64.log2());
//!
//! // Probability that two bins hold 2 elements and one holds 1
//! let p = Partition::new(vec![2, 2, 1]).unwrap();
//! assert_eq!(count_distributions(&p, 8).to_string(), "168");
//! assert!((prob_of_partition(&p, 8).unwrap() - 0.1538).abs() < 1e-3);
//! ```

// Core domain types
pub mod core;

// Entropy, counting and probability computations
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use crate::core::{Distribution, EntropyError, Partition, Partitions, partitions};
pub use crate::stats::{
    avg_entropy, count_distributions, entropy, prob_of_distribution, prob_of_partition,
};
