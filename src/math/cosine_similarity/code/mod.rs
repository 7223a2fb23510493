//! Cosine similarity implementations.

pub mod c_impl;
mod original;
mod scalar_opt;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod x86_64_avx2;

pub use c_impl::{cosine_similarity_c_original, C_IMPL_AVAILABLE};
pub use original::cosine_similarity_original;
pub use scalar_opt::cosine_similarity_scalar_opt;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::cosine_similarity_x86_64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use x86_64_avx2::cosine_similarity_x86_64_avx2;

use crate::math::VectorFn;
use crate::utils::VariantInfo;

/// Turn the three running sums into the similarity.
///
/// A zero magnitude product (zero vector or empty input) maps to `0.0`.
#[inline(always)]
pub(crate) fn finish(dot: f64, sum_sq_a: f64, sum_sq_b: f64) -> f64 {
    let denom = sum_sq_a.sqrt() * sum_sq_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

/// Get all variants compiled for the current target, reference first
pub fn available_variants() -> Vec<VariantInfo<VectorFn>> {
    let mut variants: Vec<VariantInfo<VectorFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Single-pass left-to-right reference (exported as `cosine_similarity`)",
            order_exact: true,
            function: cosine_similarity_original,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "Scalar, 2x unrolled running sums",
            order_exact: false,
            function: cosine_similarity_scalar_opt,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    variants.push(VariantInfo {
        name: "x86_64-sse2",
        description: "x86_64 with SSE2 SIMD intrinsics (2 x f64)",
        order_exact: false,
        function: cosine_similarity_x86_64_sse2,
    });

    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    variants.push(VariantInfo {
        name: "x86_64-avx2",
        description: "x86_64 with AVX2 SIMD intrinsics (4 x f64)",
        order_exact: false,
        function: cosine_similarity_x86_64_avx2,
    });

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C single-pass reference",
            order_exact: true,
            function: cosine_similarity_c_original,
        });
    }

    variants
}
