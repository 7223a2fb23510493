//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

pub use bench::{format_measurement, shuffle, time_seed, Measurement, SeededRng};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{calculate_median, measure_variants, PinStrategy, TimingConfig, Variant, VariantResult};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an implementation variant of a vector operation.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "x86_64-avx2")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Accumulates strictly left-to-right, so it must match the reference bit-for-bit
    pub order_exact: bool,
    /// The specific implementation function
    pub function: F,
}
