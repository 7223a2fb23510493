//! x86_64 SSE2 SIMD implementation.
//!
//! SSE2 is available on all x86_64 CPUs, processing 2 f64 values per iteration.

use std::arch::x86_64::*;

/// Compute the dot product using SSE2 SIMD instructions.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_x86_64_sse2(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let len = a.len();
    let chunks = len / 2;

    unsafe {
        let mut sum_vec = _mm_setzero_pd();

        for i in 0..chunks {
            let idx = i * 2;
            let a_vec = _mm_loadu_pd(a.as_ptr().add(idx));
            let b_vec = _mm_loadu_pd(b.as_ptr().add(idx));
            sum_vec = _mm_add_pd(sum_vec, _mm_mul_pd(a_vec, b_vec));
        }

        // [lo, hi] -> lo + hi
        let hi = _mm_unpackhi_pd(sum_vec, sum_vec);
        let mut result = _mm_cvtsd_f64(_mm_add_sd(sum_vec, hi));

        if len % 2 == 1 {
            result += a[len - 1] * b[len - 1];
        }

        result
    }
}
