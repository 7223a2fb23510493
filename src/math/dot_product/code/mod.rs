//! Dot product implementations.

pub mod c_impl;
mod original;
mod scalar_opt;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod x86_64_avx2;

pub use c_impl::{dot_product_c_original, dot_product_c_scalar_opt, C_IMPL_AVAILABLE};
pub use original::dot_product_original;
pub use scalar_opt::dot_product_scalar_opt;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::dot_product_x86_64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use x86_64_avx2::dot_product_x86_64_avx2;

use crate::math::VectorFn;
use crate::utils::VariantInfo;

/// Get all variants compiled for the current target, reference first
pub fn available_variants() -> Vec<VariantInfo<VectorFn>> {
    let mut variants: Vec<VariantInfo<VectorFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Left-to-right reference (exported as `dot`)",
            order_exact: true,
            function: dot_product_original,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "Scalar, 4 independent accumulators",
            order_exact: false,
            function: dot_product_scalar_opt,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    variants.push(VariantInfo {
        name: "x86_64-sse2",
        description: "x86_64 with SSE2 SIMD intrinsics (2 x f64)",
        order_exact: false,
        function: dot_product_x86_64_sse2,
    });

    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    variants.push(VariantInfo {
        name: "x86_64-avx2",
        description: "x86_64 with AVX2 SIMD intrinsics (4 x f64)",
        order_exact: false,
        function: dot_product_x86_64_avx2,
    });

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C left-to-right reference",
            order_exact: true,
            function: dot_product_c_original,
        });
        variants.push(VariantInfo {
            name: "c-scalar_opt",
            description: "C scalar, 4 independent accumulators",
            order_exact: false,
            function: dot_product_c_scalar_opt,
        });
    }

    variants
}
