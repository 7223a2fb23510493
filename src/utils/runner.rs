//! Benchmark orchestration and CSV export.

use std::path::Path;

use crate::registry::AlgorithmRunner;
use crate::utils::bench::{shuffle, time_seed};
use crate::utils::timer::{measure_variants, TimingConfig, VariantResult};

/// Raw timing data for a single variant (one CSV row)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: f64,
    pub median_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results of a multi-algorithm run
pub struct GroupedResults {
    /// `results[algo_idx][size_idx]` holds the variants of that cell
    pub results: Vec<Vec<Vec<VariantResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Measure every variant of one algorithm at one input size.
pub fn run_algorithm(algo: &dyn AlgorithmRunner, size: usize, config: &TimingConfig) -> Vec<VariantResult> {
    let seed = config.seed.unwrap_or_else(time_seed);
    measure_variants(algo.get_variant_closures(size, seed), config)
}

/// Measure all `(algorithm, size)` cells in a shuffled order.
///
/// Each cell still randomizes its own variant schedule.
pub fn run_all_algorithms_randomized(
    algorithms: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    config: &TimingConfig,
) -> GroupedResults {
    let seed = config.seed.unwrap_or_else(time_seed);

    let mut cells: Vec<(usize, usize)> = (0..algorithms.len())
        .flat_map(|a| (0..sizes.len()).map(move |s| (a, s)))
        .collect();
    shuffle(&mut cells, seed);
    log::info!("running {} benchmark cells (seed {})", cells.len(), seed);

    let mut results: Vec<Vec<Vec<VariantResult>>> =
        vec![vec![Vec::new(); sizes.len()]; algorithms.len()];

    for (algo_idx, size_idx) in cells {
        let algo = algorithms[algo_idx];
        let size = sizes[size_idx];
        log::debug!("measuring {} at size {}", algo.name(), size);

        let closures = algo.get_variant_closures(size, seed ^ size as u64);
        results[algo_idx][size_idx] = measure_variants(closures, config);
    }

    let raw_data = results
        .iter()
        .enumerate()
        .flat_map(|(algo_idx, per_size)| {
            per_size.iter().enumerate().flat_map(move |(size_idx, variants)| {
                variants.iter().map(move |r| RawTimingData {
                    algo_name: algorithms[algo_idx].name().to_string(),
                    variant_name: r.name.clone(),
                    input_size: sizes[size_idx],
                    avg_nanos: r.avg_nanos_f64,
                    median_nanos: r.median_time.as_nanos() as u64,
                    result_sample: r.result_sample,
                })
            })
        })
        .collect();

    GroupedResults { results, raw_data }
}

/// Export timing data to CSV file
pub fn export_csv(path: &Path, data: &[RawTimingData]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);

    writeln!(
        file,
        "algorithm,variant,compiler,input_size,avg_{unit},median_{unit},result",
        unit = crate::utils::bench::unit_name()
    )?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            file,
            "{},{},{},{},{:.2},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            entry.median_nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    file.flush()?;
    log::info!("exported {} rows to {}", data.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_registry;
    use crate::utils::timer::PinStrategy;

    fn quick_config() -> TimingConfig {
        TimingConfig {
            runs_per_variant: 3,
            warmup_iterations: 1,
            pin_strategy: PinStrategy::Global,
            seed: Some(42),
        }
    }

    #[test]
    fn test_run_all_fills_every_cell() {
        let registry = build_registry();
        let algos: Vec<&dyn AlgorithmRunner> = registry.all().iter().map(|a| a.as_ref()).collect();
        let sizes = [8, 33];

        let grouped = run_all_algorithms_randomized(&algos, &sizes, &quick_config());

        assert_eq!(grouped.results.len(), algos.len());
        for (algo, per_size) in algos.iter().zip(&grouped.results) {
            assert_eq!(per_size.len(), sizes.len());
            for variants in per_size {
                assert_eq!(variants.len(), algo.available_variants().len());
                assert_eq!(variants[0].name, "original");
            }
        }
        let expected_rows: usize = algos.iter().map(|a| a.available_variants().len() * sizes.len()).sum();
        assert_eq!(grouped.raw_data.len(), expected_rows);
        for row in &grouped.raw_data {
            let cell = &grouped.results[algos.iter().position(|a| a.name() == row.algo_name).unwrap()]
                [sizes.iter().position(|&s| s == row.input_size).unwrap()];
            let variant = cell.iter().find(|v| v.name == row.variant_name).unwrap();
            assert_eq!(row.median_nanos, variant.median_time.as_nanos() as u64);
        }
    }

    #[test]
    fn test_export_csv() {
        let path = std::env::temp_dir().join(format!("vector_math_export_{}.csv", std::process::id()));
        let rows = [RawTimingData {
            algo_name: "dot_product".into(),
            variant_name: "original".into(),
            input_size: 64,
            avg_nanos: 12.5,
            median_nanos: 11,
            result_sample: Some(1.5),
        }];

        export_csv(&path, &rows).expect("csv export");
        let text = std::fs::read_to_string(&path).expect("read back");
        std::fs::remove_file(&path).ok();

        let mut lines = text.lines();
        let unit = crate::utils::bench::unit_name();
        assert_eq!(
            lines.next(),
            Some(format!("algorithm,variant,compiler,input_size,avg_{unit},median_{unit},result").as_str())
        );
        assert_eq!(lines.next(), Some("dot_product,original,,64,12.50,11,1.5"));
        assert_eq!(lines.next(), None);
    }
}
