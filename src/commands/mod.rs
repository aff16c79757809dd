//! Command implementations

pub mod breakdown;
pub mod counts;
pub mod expected;
pub mod table;

pub use breakdown::run_breakdown;
pub use counts::{CountsResult, PartitionResult, analyze_counts, analyze_partition};
pub use expected::{ExpectedResult, compute_expected};
pub use table::{EntropyTable, TableRow, run_table};
