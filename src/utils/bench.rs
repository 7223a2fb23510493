//! Measurement primitives and seeded input generation.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters.
//! Use `--features use_time` or `--no-default-features` to use wall-clock
//! time instead.

use std::time::Duration;

// Use CPU cycles if: cpu_cycles is enabled AND use_time is NOT enabled
// Use wall-clock time if: use_time is enabled OR cpu_cycles is disabled

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

/// Start marker returned by [`now`]
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Instant = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Instant = std::time::Instant;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Instant {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> Instant {
    std::time::Instant::now()
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

/// Convert a measurement to an integer count of units (cycles or ns)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_nanos(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Get the measurement unit name
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64", target_arch = "x86")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Format a stored measurement for display.
///
/// Results always carry their value in a `Duration` slot; under `cpu_cycles`
/// the "nanoseconds" are really cycles.
pub fn format_measurement(d: Duration) -> String {
    let units = d.as_nanos();
    if unit_name() == "ns" && units >= 10_000 {
        format!("{:.2} µs", units as f64 / 1000.0)
    } else {
        format!("{} {}", units, unit_name())
    }
}

/// Time an expression, returning `(Measurement, value)`.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = $e;
        let elapsed = $crate::utils::bench::elapsed(start);
        (elapsed, value)
    }};
}

/// Simple fast random shuffle using Fisher-Yates algorithm
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = SeededRng::new(seed);
    for i in (1..slice.len()).rev() {
        let j = (rng.next_u64() >> 33) as usize % (i + 1);
        slice.swap(i, j);
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Simple seeded PRNG for reproducible benchmark inputs
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    /// Generate f64 in range [-1.0, 1.0)
    pub fn next_f64_range(&mut self) -> f64 {
        let n = self.next_u64();
        (n >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    }

    /// Fill a fresh vector of `len` values in [-1.0, 1.0)
    pub fn vector(&mut self, len: usize) -> Vec<f64> {
        (0..len).map(|_| self.next_f64_range()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_range() {
        let mut rng = SeededRng::new(42);
        for _ in 0..10_000 {
            let v = rng.next_f64_range();
            assert!((-1.0..1.0).contains(&v), "{} out of range", v);
        }
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let a = SeededRng::new(7).vector(64);
        let b = SeededRng::new(7).vector(64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut data: Vec<usize> = (0..100).collect();
        shuffle(&mut data, 1234);
        let mut sorted = data.clone();
        sorted.sort();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }
}
