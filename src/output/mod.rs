//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_breakdown, print_counts_result, print_expected_result, print_partition_result,
    print_table,
};
