//! Sampling loop behind every `vector-bench` table.
//!
//! Each variant closure is called `runs_per_variant` times, interleaved with
//! the other variants of the same operation and size in a seeded shuffled
//! order. Raw samples are reduced to a [`VariantResult`] per variant.

use std::hint::black_box;
use std::time::Duration;

use super::bench::{shuffle, time_seed, to_nanos, Measurement};
use super::cpu_affinity::CpuPinGuard;

/// When the measuring thread is bound to a core
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Bind once for the whole schedule of an (operation, size) cell
    Global,
    /// Bind before each sampled call and release right after it
    #[default]
    PerExecution,
}

#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Samples taken per variant (`--runs`)
    pub runs_per_variant: usize,
    /// Untimed calls per variant before sampling starts (`--warmup`)
    pub warmup_iterations: usize,
    pub pin_strategy: PinStrategy,
    /// Seeds both the vector inputs and the shuffled schedule; clock-based when `None`
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            seed: None,
        }
    }
}

/// One dot product or cosine variant, bound to its input vectors.
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Makes one call and returns its own timing plus the value it computed.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Summary of one variant's samples. Durations hold cycles under `cpu_cycles`.
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    /// Unrounded mean, used for speedup ratios and CSV output
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    /// Sample standard deviation
    pub std_dev: Duration,
    pub runs: usize,
    /// Value returned by the last sampled call
    pub result_sample: Option<f64>,
}

/// Sample every variant and return one result per variant, in input order.
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    for variant in variants.iter_mut() {
        (0..config.warmup_iterations).for_each(|_| {
            black_box((variant.run)());
        });
    }

    let runs = config.runs_per_variant;
    let mut schedule: Vec<usize> = (0..variants.len())
        .flat_map(|idx| std::iter::repeat(idx).take(runs))
        .collect();
    shuffle(&mut schedule, config.seed.unwrap_or_else(time_seed));
    log::debug!("sampling {} variants x {} runs", variants.len(), runs);

    let mut samples: Vec<Vec<u64>> = vec![Vec::with_capacity(runs); variants.len()];
    let mut last_values: Vec<Option<f64>> = vec![None; variants.len()];

    let _cell_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for idx in schedule {
        let _call_pin = (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (measurement, value) = (variants[idx].run)();
        samples[idx].push(to_nanos(measurement));
        last_values[idx] = value;
    }

    variants
        .iter()
        .zip(samples)
        .zip(last_values)
        .map(|((variant, raw), value)| summarize(variant, raw, value))
        .collect()
}

fn summarize(variant: &Variant, mut raw: Vec<u64>, result_sample: Option<f64>) -> VariantResult {
    let runs = raw.len();
    raw.sort_unstable();

    let (mean, std_dev) = mean_and_std_dev(&raw);
    let nanos = |n: u64| Duration::from_nanos(n);

    VariantResult {
        name: variant.name.to_string(),
        description: variant.description.to_string(),
        avg_time: nanos(mean as u64),
        avg_nanos_f64: mean,
        median_time: nanos(calculate_median(&raw)),
        min_time: nanos(raw.first().copied().unwrap_or(0)),
        max_time: nanos(raw.last().copied().unwrap_or(0)),
        std_dev: nanos(std_dev as u64),
        runs,
        result_sample: if runs == 0 { None } else { result_sample },
    }
}

/// Mean and sample standard deviation; `(0.0, 0.0)` for no samples.
fn mean_and_std_dev(values: &[u64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let count = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / count;
    let squares: f64 = values.iter().map(|&v| (v as f64 - mean).powi(2)).sum();
    let denom = (values.len() - 1).max(1) as f64;
    (mean, (squares / denom).sqrt())
}

/// Median of a sorted slice. Even lengths average the two middle samples.
pub fn calculate_median(sorted: &[u64]) -> u64 {
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => 0,
        len if len % 2 == 1 => sorted[mid],
        _ => sorted[mid - 1] + (sorted[mid] - sorted[mid - 1]) / 2,
    }
}
