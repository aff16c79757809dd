//! Average Entropy - CLI
//!
//! Expected Shannon entropy of uniform samples over equiprobable bins,
//! computed exactly by summing over integer partitions.

use anyhow::{Context, Result, bail};
use average_entropy::{
    commands::{analyze_counts, analyze_partition, compute_expected, run_breakdown, run_table},
    output::{
        print_breakdown, print_counts_result, print_expected_result, print_partition_result,
        print_table,
    },
    stats::{CalculatorConfig, EntropyCalculator},
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "average_entropy",
    about = "Exact expected Shannon entropy of a uniform sample over equiprobable bins",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable the result cache used across table cells
    #[arg(long, global = true)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Expected entropy of N elements over BINS bins
    Expected {
        /// Sample size
        n: u64,
        /// Number of equiprobable bins
        bins: u64,
    },

    /// Show every partition's probability and entropy
    Breakdown {
        /// Sample size
        n: u64,
        /// Number of equiprobable bins
        bins: u64,

        /// Show only the largest contributions
        #[arg(short, long, default_value = "20")]
        top: usize,
    },

    /// Shannon entropy of explicit counts
    Entropy {
        /// Non-negative counts, e.g. `2 2 1 0`
        #[arg(required = true)]
        counts: Vec<u64>,
    },

    /// Number of labeled distributions and probability of a partition
    Count {
        /// Partition such as `2,2,1`
        partition: String,
        /// Number of equiprobable bins
        bins: u64,
    },

    /// Table of expected entropies for n = 1..=MAX_N
    Table {
        /// Largest sample size
        #[arg(short = 'n', long, default_value = "20")]
        max_n: u64,

        /// Bin counts to tabulate
        #[arg(short, long, num_args = 1.., default_values_t = vec![2, 4, 8, 16, 32])]
        bins: Vec<u64>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("average_entropy={default_level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut calculator = EntropyCalculator::new(CalculatorConfig {
        memoize: !cli.no_cache,
    });

    match cli.command {
        Commands::Expected { n, bins } => run_expected_command(n, bins),
        Commands::Breakdown { n, bins, top } => {
            run_breakdown_command(&mut calculator, n, bins, top)
        }
        Commands::Entropy { counts } => run_entropy_command(counts),
        Commands::Count { partition, bins } => run_count_command(&partition, bins),
        Commands::Table { max_n, bins, quiet } => {
            run_table_command(&mut calculator, max_n, &bins, quiet)
        }
    }
}

fn run_expected_command(n: u64, bins: u64) -> Result<()> {
    let result = compute_expected(n, bins)
        .with_context(|| format!("cannot compute expected entropy for n = {n}, bins = {bins}"))?;
    print_expected_result(&result);
    Ok(())
}

fn run_breakdown_command(
    calculator: &mut EntropyCalculator,
    n: u64,
    bins: u64,
    top: usize,
) -> Result<()> {
    let result = run_breakdown(calculator, n, bins)
        .with_context(|| format!("cannot break down n = {n}, bins = {bins}"))?;
    print_breakdown(&result, top);
    Ok(())
}

fn run_entropy_command(counts: Vec<u64>) -> Result<()> {
    let result = analyze_counts(counts).context("cannot compute entropy")?;
    print_counts_result(&result);
    Ok(())
}

fn run_count_command(partition: &str, bins: u64) -> Result<()> {
    let result = analyze_partition(partition, bins)
        .with_context(|| format!("cannot analyze partition '{partition}'"))?;
    print_partition_result(&result);
    Ok(())
}

fn run_table_command(
    calculator: &mut EntropyCalculator,
    max_n: u64,
    bins: &[u64],
    quiet: bool,
) -> Result<()> {
    if max_n == 0 {
        bail!("--max-n must be at least 1");
    }

    println!(
        "Tabulating n = 1..={max_n} over {} bin counts...",
        bins.len()
    );
    let table = run_table(calculator, max_n, bins, !quiet).context("cannot build table")?;
    print_table(&table);
    Ok(())
}
