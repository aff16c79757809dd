//! Display functions for command results

use super::formatters::{create_progress_bar, format_count, format_probability};
use crate::commands::{CountsResult, EntropyTable, ExpectedResult, PartitionResult};
use crate::stats::Breakdown;
use colored::Colorize;

/// Print the result of an expected-entropy computation
pub fn print_expected_result(result: &ExpectedResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} n = {}, bins = {} ",
        "EXPECTED ENTROPY:".bright_cyan().bold(),
        result.n.to_string().bright_yellow().bold(),
        result.n_bins.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(result.expected, result.max_entropy, 30);

    println!(
        "\n📊 Over {} admissible partitions:",
        result.partitions_considered
    );
    println!(
        "   Expected:    [{}] {}",
        bar.green(),
        format!("{:.6} bits", result.expected).bright_yellow()
    );
    println!("   Maximum:     {:.6} bits", result.max_entropy);
    println!("   Efficiency:  {:.1}%", result.efficiency() * 100.0);
    println!(
        "   Time taken:  {:.3}ms",
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print a per-partition breakdown, limited to the `top` largest contributions
pub fn print_breakdown(result: &Breakdown, top: usize) {
    println!("\n{}", "═".repeat(78).cyan());
    println!(
        " {} n = {}, bins = {} ",
        "PARTITION BREAKDOWN:".bright_cyan().bold(),
        result.n,
        result.n_bins
    );
    println!("{}", "═".repeat(78).cyan());

    println!(
        "\n   {:<24} {:>14} {:>12} {:>10} {:>12}",
        "Partition".bold(),
        "Labelings".bold(),
        "Probability".bold(),
        "Entropy".bold(),
        "Weighted".bold()
    );

    let sorted = result.by_contribution();
    for term in sorted.iter().take(top) {
        println!(
            "   {:<24} {:>14} {:>12} {:>10.4} {:>12.6}",
            term.partition.to_string(),
            format_count(&term.distributions, 14),
            format_probability(term.probability),
            term.entropy,
            term.contribution()
        );
    }
    if sorted.len() > top {
        println!(
            "   {}",
            format!("… {} more partitions", sorted.len() - top).bright_black()
        );
    }

    println!();
    if let Some(likely) = result.most_likely() {
        println!(
            "   Most likely:  {} ({})",
            likely.partition.to_string().green(),
            format_probability(likely.probability)
        );
    }
    let check = format!("{:.12}", result.total_probability);
    let check = if (result.total_probability - 1.0).abs() < 1e-9 {
        check.green()
    } else {
        check.red()
    };
    println!("   Σ probability: {check}");
    println!(
        "   Expected:     {}",
        format!("{:.6} bits", result.expected).bright_yellow().bold()
    );
}

/// Print the entropy of an explicit count vector
pub fn print_counts_result(result: &CountsResult) {
    println!(
        "\nCounts {:?} (total {})",
        result.counts, result.total
    );
    println!(
        "   Entropy:  [{}] {}",
        create_progress_bar(result.entropy, result.max_entropy, 30).green(),
        format!("{:.6} bits", result.entropy).bright_yellow()
    );
}

/// Print how a partition is realized in labeled bins
pub fn print_partition_result(result: &PartitionResult) {
    println!(
        "\nPartition {} over {} bins",
        result.partition.to_string().bright_yellow().bold(),
        result.n_bins
    );
    println!("   Distributions: {}", result.distributions);
    println!(
        "   Probability:   {}",
        format_probability(result.probability)
    );
    println!("   Entropy:       {:.6} bits", result.entropy);
}

/// Print an expected-entropy table
pub fn print_table(table: &EntropyTable) {
    println!("\n{}", "═".repeat(12 + 12 * table.bins.len()).cyan());
    println!(" {} ", "EXPECTED ENTROPY (bits)".bright_cyan().bold());
    println!("{}", "═".repeat(12 + 12 * table.bins.len()).cyan());

    let header: String = table
        .bins
        .iter()
        .map(|b| format!("{:>12}", format!("N={b}")))
        .collect();
    println!("{:>10}  {}", "n".bold(), header.bold());

    for row in &table.rows {
        let cells: String = row
            .expected
            .iter()
            .zip(&row.bounds)
            .map(|(&h, &bound)| {
                let cell = format!("{h:>12.6}");
                // Within 1% of the bound: collisions barely matter any more
                if bound > 0.0 && h >= 0.99 * bound {
                    cell.green().to_string()
                } else {
                    cell
                }
            })
            .collect();
        println!("{:>10}  {cells}", row.n);
    }

    println!(
        "\n   Time taken: {:.2}s",
        table.total_time.as_secs_f64()
    );
}
