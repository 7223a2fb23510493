//! x86_64 AVX2 SIMD implementation, 4 f64 lanes per accumulator.

use super::finish;
use std::arch::x86_64::*;

/// Compute cosine similarity using AVX2 (and FMA when the build enables it).
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn cosine_similarity_x86_64_avx2(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let len = a.len();
    let chunks = len / 4;

    let (mut dot, mut sum_sq_a, mut sum_sq_b) = unsafe {
        let mut dot_vec = _mm256_setzero_pd();
        let mut aa_vec = _mm256_setzero_pd();
        let mut bb_vec = _mm256_setzero_pd();

        for i in 0..chunks {
            let idx = i * 4;
            let a_vec = _mm256_loadu_pd(a.as_ptr().add(idx));
            let b_vec = _mm256_loadu_pd(b.as_ptr().add(idx));

            #[cfg(target_feature = "fma")]
            {
                dot_vec = _mm256_fmadd_pd(a_vec, b_vec, dot_vec);
                aa_vec = _mm256_fmadd_pd(a_vec, a_vec, aa_vec);
                bb_vec = _mm256_fmadd_pd(b_vec, b_vec, bb_vec);
            }
            #[cfg(not(target_feature = "fma"))]
            {
                dot_vec = _mm256_add_pd(dot_vec, _mm256_mul_pd(a_vec, b_vec));
                aa_vec = _mm256_add_pd(aa_vec, _mm256_mul_pd(a_vec, a_vec));
                bb_vec = _mm256_add_pd(bb_vec, _mm256_mul_pd(b_vec, b_vec));
            }
        }

        (hsum(dot_vec), hsum(aa_vec), hsum(bb_vec))
    };

    for i in chunks * 4..len {
        let (x, y) = (a[i], b[i]);
        dot += x * y;
        sum_sq_a += x * x;
        sum_sq_b += y * y;
    }

    finish(dot, sum_sq_a, sum_sq_b)
}

#[inline(always)]
unsafe fn hsum(v: __m256d) -> f64 {
    let sum128 = _mm_add_pd(_mm256_castpd256_pd128(v), _mm256_extractf128_pd(v, 1));
    _mm_cvtsd_f64(_mm_add_sd(sum128, _mm_unpackhi_pd(sum128, sum128)))
}
