//! x86_64 SSE2 SIMD implementation.

use super::finish;
use std::arch::x86_64::*;

/// Compute cosine similarity with SSE2, 2 f64 lanes per accumulator.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn cosine_similarity_x86_64_sse2(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let len = a.len();
    let chunks = len / 2;

    let (mut dot, mut sum_sq_a, mut sum_sq_b) = unsafe {
        let mut dot_vec = _mm_setzero_pd();
        let mut aa_vec = _mm_setzero_pd();
        let mut bb_vec = _mm_setzero_pd();

        for i in 0..chunks {
            let idx = i * 2;
            let a_vec = _mm_loadu_pd(a.as_ptr().add(idx));
            let b_vec = _mm_loadu_pd(b.as_ptr().add(idx));
            dot_vec = _mm_add_pd(dot_vec, _mm_mul_pd(a_vec, b_vec));
            aa_vec = _mm_add_pd(aa_vec, _mm_mul_pd(a_vec, a_vec));
            bb_vec = _mm_add_pd(bb_vec, _mm_mul_pd(b_vec, b_vec));
        }

        (hsum(dot_vec), hsum(aa_vec), hsum(bb_vec))
    };

    if len % 2 == 1 {
        let (x, y) = (a[len - 1], b[len - 1]);
        dot += x * y;
        sum_sq_a += x * x;
        sum_sq_b += y * y;
    }

    finish(dot, sum_sq_a, sum_sq_b)
}

#[inline(always)]
unsafe fn hsum(v: __m128d) -> f64 {
    _mm_cvtsd_f64(_mm_add_sd(v, _mm_unpackhi_pd(v, v)))
}
