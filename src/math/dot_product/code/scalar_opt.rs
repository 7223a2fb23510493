//! Scalar implementation with loop unrolling.
//!
//! Four independent accumulators break the dependency chain on the running
//! sum. The reassociation changes rounding, so results only match the
//! reference within tolerance.

/// Compute the dot product with 4x loop unrolling.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_scalar_opt(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let mut sums = [0.0f64; 4];

    let a_chunks = a.chunks_exact(4);
    let b_chunks = b.chunks_exact(4);
    let (a_tail, b_tail) = (a_chunks.remainder(), b_chunks.remainder());

    for (x, y) in a_chunks.zip(b_chunks) {
        sums[0] += x[0] * y[0];
        sums[1] += x[1] * y[1];
        sums[2] += x[2] * y[2];
        sums[3] += x[3] * y[3];
    }

    for (x, y) in a_tail.iter().zip(b_tail) {
        sums[0] += x * y;
    }

    (sums[0] + sums[1]) + (sums[2] + sums[3])
}
