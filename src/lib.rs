//! # vector-math
//!
//! Dot product and cosine similarity over `f64` vectors, exported through a
//! C ABI (`dot`, `cosine_similarity`) for hosts in other languages, with a
//! safe slice API for Rust callers.
//!
//! Each operation also carries alternative implementation variants (unrolled,
//! SSE2/AVX2, C) that are verified against the left-to-right reference and
//! benchmarked by the `vector-bench` binary.

pub mod error;
pub mod ffi;
pub mod math;
pub mod registry;
pub mod utils;

pub use error::{Result, VectorError};
pub use math::cosine_similarity::cosine_similarity_original as cosine_similarity;
pub use math::dot_product::dot_product_original as dot_product;

use error::ensure_same_len;

/// Dot product that reports mismatched lengths instead of panicking.
///
/// ```
/// use vector_math::{try_dot_product, VectorError};
///
/// assert_eq!(try_dot_product(&[1.0, 2.0], &[3.0, 4.0]), Ok(11.0));
/// assert_eq!(
///     try_dot_product(&[1.0], &[]),
///     Err(VectorError::LengthMismatch { left: 1, right: 0 })
/// );
/// ```
pub fn try_dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    ensure_same_len(a, b)?;
    Ok(dot_product(a, b))
}

/// Cosine similarity that reports mismatched lengths instead of panicking.
pub fn try_cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    ensure_same_len(a, b)?;
    Ok(cosine_similarity(a, b))
}

pub mod prelude {
    pub use crate::math::cosine_similarity;
    pub use crate::math::dot_product;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::{try_cosine_similarity, try_dot_product, VectorError};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();
        for algo in registry.all() {
            if let Err(e) = algo.verify() {
                panic!("Algorithm '{}' failed verification: {}", algo.name(), e);
            }
        }
        assert!(registry.verify_all().is_ok());
    }

    #[test]
    fn test_checked_api() {
        assert_eq!(try_cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), Ok(0.0));
        assert_eq!(
            try_cosine_similarity(&[1.0, 2.0], &[1.0]),
            Err(VectorError::LengthMismatch { left: 2, right: 1 })
        );
        assert_eq!(try_dot_product(&[], &[]), Ok(0.0));
    }

    #[test]
    fn test_error_message() {
        let err = VectorError::LengthMismatch { left: 3, right: 4 };
        assert_eq!(
            err.to_string(),
            "vector length mismatch: left has 3 elements, right has 4"
        );
    }
}
