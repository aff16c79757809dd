//! Expected-entropy computation
//!
//! Built bottom-up: entropy of a count vector, the number of labeled
//! distributions behind a partition, the multinomial mass of one of them,
//! and finally the probability-weighted sum over all partitions of `n`.

mod counting;
mod entropy;
mod expected;
mod multinomial;
mod probability;

pub use counting::count_distributions;
pub use entropy::entropy;
pub use expected::{
    Breakdown, CalculatorConfig, EntropyCalculator, PartitionTerm, avg_entropy, breakdown,
    max_entropy, total_probability,
};
pub use multinomial::prob_of_distribution;
pub use probability::prob_of_partition;
