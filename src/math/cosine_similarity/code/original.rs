//! Reference implementation of cosine similarity.

use super::finish;

/// Compute the cosine of the angle between two vectors.
///
/// One pass accumulates the inner product and both sums of squares
/// left-to-right. Returns `0.0` when either magnitude is zero (this
/// includes empty input) instead of dividing by zero. The result is not
/// clamped, so rounding can land marginally outside `[-1, 1]`.
///
/// # Panics
/// Panics if the vectors have different lengths.
///
/// # Example
/// ```
/// use vector_math::math::cosine_similarity::cosine_similarity_original;
///
/// assert_eq!(cosine_similarity_original(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
/// assert_eq!(cosine_similarity_original(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
/// ```
#[inline]
pub fn cosine_similarity_original(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let mut dot = 0.0;
    let mut sum_sq_a = 0.0;
    let mut sum_sq_b = 0.0;

    for (&x, &y) in a.iter().zip(b) {
        dot += x * y;
        sum_sq_a += x * x;
        sum_sq_b += y * y;
    }

    finish(dot, sum_sq_a, sum_sq_b)
}
