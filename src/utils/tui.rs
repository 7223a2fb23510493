//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the benchmark CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner};
use crate::utils::bench::format_measurement;
use crate::utils::timer::VariantResult;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority: original (0), Rust (1), C (2), SIMD (3)
fn variant_sort_key(result: &VariantResult) -> (u8, String) {
    let name = result.name.to_lowercase();

    if name == "original" {
        (0, String::new())
    } else if name.starts_with("c-") {
        (2, name)
    } else if name.contains("sse") || name.contains("avx") || name.contains("neon") {
        (3, name)
    } else {
        (1, name)
    }
}

/// Sort variants: original first, then grouped by language
pub fn sort_variants(results: &mut [VariantResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants: {}", algo.available_variants().join(", ")),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);
    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!("│ {:<width$} │", truncate(line, content_width), width = content_width);
    }
    println!("└{}┘", border);
    println!();
}

/// Relative error of `value` against the reference result
fn relative_error(value: Option<f64>, reference: Option<f64>) -> f64 {
    match (value, reference) {
        (Some(res), Some(base)) => {
            let diff = (res - base).abs();
            if base.abs() > 1e-12 {
                diff / base.abs()
            } else {
                diff
            }
        }
        _ => 0.0,
    }
}

/// Format one table row. `baseline` is the row speedup and error are taken against.
fn format_result_row(result: &VariantResult, baseline: &VariantResult, variant_col_width: usize) -> String {
    let speedup = baseline.avg_nanos_f64.max(f64::MIN_POSITIVE) / result.avg_nanos_f64.max(f64::MIN_POSITIVE);
    let cv = if result.avg_nanos_f64 > 0.0 {
        result.std_dev.as_nanos() as f64 / result.avg_nanos_f64
    } else {
        0.0
    };

    let display_name = match (result.name.starts_with("c-"), crate::utils::C_COMPILER_NAME) {
        (true, Some(c)) => format!("{} ({})", result.name, c),
        _ => result.name.clone(),
    };

    format!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
        truncate(&display_name, variant_col_width),
        format_measurement(result.avg_time),
        format_measurement(result.median_time),
        format_measurement(result.min_time),
        format_measurement(result.max_time),
        speedup,
        cv * 100.0,
        relative_error(result.result_sample, baseline.result_sample),
        v_width = variant_col_width
    )
}

/// Print the results table for one input size.
/// The first row is the baseline for speedup and relative error.
pub fn print_results_table(results: &[VariantResult], size: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    let variant_col_width = get_term_width().saturating_sub(85).max(15);
    let table_width = variant_col_width + 83;

    println!("  Size: {} ({} runs)", size, baseline.runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Median",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        println!("{}", format_result_row(result, baseline, variant_col_width));
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Vector Math Benchmarks ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!("  {:<20} [{}] - {}", algo.name(), algo.category(), algo.description());
        for variant in algo.available_variants() {
            println!("      {}", variant);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(name: &str) -> VariantResult {
        VariantResult {
            name: name.to_string(),
            description: String::new(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            runs: 0,
            result_sample: None,
        }
    }

    #[test]
    fn test_sort_variants_original_first() {
        let mut results: Vec<_> = ["x86_64-sse2", "c-original", "scalar_opt", "original"]
            .into_iter()
            .map(result)
            .collect();
        sort_variants(&mut results);
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["original", "scalar_opt", "c-original", "x86_64-sse2"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long variant name", 10), "a very ...");
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(Some(2.0), Some(2.0)), 0.0);
        assert!((relative_error(Some(1.01), Some(1.0)) - 0.01).abs() < 1e-12);
        // Near-zero baselines fall back to the absolute difference
        assert_eq!(relative_error(Some(0.5), Some(0.0)), 0.5);
        assert_eq!(relative_error(None, Some(1.0)), 0.0);
    }

    #[test]
    fn test_row_shows_median() {
        let mut baseline = result("original");
        baseline.avg_nanos_f64 = 200.0;
        baseline.avg_time = Duration::from_nanos(200);
        baseline.median_time = Duration::from_nanos(170);
        baseline.min_time = Duration::from_nanos(150);
        baseline.max_time = Duration::from_nanos(400);

        let row = format_result_row(&baseline, &baseline, 15);
        let cells: Vec<&str> = row.split_whitespace().collect();
        let unit = crate::utils::bench::unit_name();
        assert_eq!(&cells[..9], ["original", "200", unit, "170", unit, "150", unit, "400", unit]);
        assert_eq!(cells[9], "1.00x");
    }
}
