//! Scalar implementation with 2x unrolling of the three running sums.

use super::finish;

/// Compute cosine similarity with two interleaved sets of accumulators.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn cosine_similarity_scalar_opt(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let (mut dot0, mut dot1) = (0.0f64, 0.0f64);
    let (mut aa0, mut aa1) = (0.0f64, 0.0f64);
    let (mut bb0, mut bb1) = (0.0f64, 0.0f64);

    let a_chunks = a.chunks_exact(2);
    let b_chunks = b.chunks_exact(2);
    let (a_tail, b_tail) = (a_chunks.remainder(), b_chunks.remainder());

    for (x, y) in a_chunks.zip(b_chunks) {
        dot0 += x[0] * y[0];
        dot1 += x[1] * y[1];
        aa0 += x[0] * x[0];
        aa1 += x[1] * x[1];
        bb0 += y[0] * y[0];
        bb1 += y[1] * y[1];
    }

    if let (Some(&x), Some(&y)) = (a_tail.first(), b_tail.first()) {
        dot0 += x * y;
        aa0 += x * x;
        bb0 += y * y;
    }

    finish(dot0 + dot1, aa0 + aa1, bb0 + bb1)
}
