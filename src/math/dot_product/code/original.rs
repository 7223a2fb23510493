//! Reference implementation of the dot product.
//!
//! Accumulates left-to-right into a single running sum. The C exports run
//! this variant, and every other variant is verified against it.

/// Compute the dot product of two vectors.
///
/// The sum starts at `+0.0` and adds `a[i] * b[i]` in ascending index order,
/// so the result is reproducible bit-for-bit. Empty inputs give `0.0`.
///
/// # Panics
/// Panics if the vectors have different lengths.
///
/// # Example
/// ```
/// use vector_math::math::dot_product::dot_product_original;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot_product_original(&a, &b), 32.0);
/// ```
#[inline]
pub fn dot_product_original(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    // Not `.sum()`: float `Sum` starts from -0.0, and empty input must give +0.0.
    a.iter().zip(b).fold(0.0, |acc, (x, y)| acc + x * y)
}
