//! Benchmark and verification CLI for the vector operations.
//!
//! Usage:
//!   vector-bench                     # Benchmark all operations
//!   vector-bench --list              # List operations and variants
//!   vector-bench cosine_similarity   # Benchmark one operation
//!   vector-bench --verify            # Check every variant against the reference

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use vector_math::registry::{build_registry, AlgorithmRunner};
use vector_math::utils::runner::{export_csv, run_algorithm, run_all_algorithms_randomized};
use vector_math::utils::tui;
use vector_math::utils::{PinStrategy, TimingConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Pin {
    Global,
    PerExecution,
}

impl From<Pin> for PinStrategy {
    fn from(pin: Pin) -> Self {
        match pin {
            Pin::Global => PinStrategy::Global,
            Pin::PerExecution => PinStrategy::PerExecution,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "vector-bench", version, about = "Benchmark dot product and cosine similarity variants")]
struct Cli {
    /// Operation to run (omit for all)
    algorithm: Option<String>,

    /// List all available operations and their variants
    #[arg(short, long)]
    list: bool,

    /// Verify every variant against the reference and exit
    #[arg(long)]
    verify: bool,

    /// Comma-separated vector sizes
    #[arg(long, value_delimiter = ',', default_value = "64,256,1024,4096,16384")]
    sizes: Vec<usize>,

    /// Number of measurement runs per variant
    #[arg(short, long, default_value_t = 30)]
    runs: usize,

    /// Warmup calls per variant before measuring
    #[arg(long, default_value_t = 10)]
    warmup: usize,

    /// Random seed for reproducible inputs and schedules (default: time-based)
    #[arg(long)]
    seed: Option<u64>,

    /// Export raw timings to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// CPU pinning strategy
    #[arg(long, value_enum, default_value_t = Pin::PerExecution)]
    pin: Pin,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let registry = build_registry();

    if cli.list {
        tui::print_available_algorithms(&registry);
        return Ok(());
    }

    if cli.verify {
        return match registry.verify_all() {
            Ok(()) => {
                println!("All {} operations verified.", registry.all().len());
                Ok(())
            }
            Err(failures) => bail!("verification failed:\n  {}", failures.join("\n  ")),
        };
    }

    if cli.sizes.is_empty() {
        bail!("--sizes must name at least one vector size");
    }

    let config = TimingConfig {
        runs_per_variant: cli.runs.max(1),
        warmup_iterations: cli.warmup,
        pin_strategy: cli.pin.into(),
        seed: cli.seed,
    };

    tui::print_header();

    match cli.algorithm.as_deref() {
        Some(name) => {
            let Some(algo) = registry.find(name) else {
                bail!("algorithm '{}' not found (available: {:?})", name, registry.list_names());
            };

            tui::print_algo_info_box(algo);
            for &size in &cli.sizes {
                let mut results = run_algorithm(algo, size, &config);
                tui::sort_variants(&mut results);
                tui::print_results_table(&results, size);
            }
        }
        None => {
            let algos: Vec<&dyn AlgorithmRunner> = registry.all().iter().map(|a| a.as_ref()).collect();
            let grouped = run_all_algorithms_randomized(&algos, &cli.sizes, &config);

            if let Some(path) = &cli.csv {
                export_csv(path, &grouped.raw_data)
                    .with_context(|| format!("failed to export CSV to {}", path.display()))?;
                println!("  Raw data exported to: {}", path.display());
                println!();
            }

            for (algo, per_size) in algos.iter().zip(grouped.results) {
                tui::print_algo_info_box(*algo);
                for (&size, mut results) in cli.sizes.iter().zip(per_size) {
                    tui::sort_variants(&mut results);
                    tui::print_results_table(&results, size);
                }
            }
        }
    }

    println!("Note: Speedup and relative error are relative to 'original'.");
    Ok(())
}
