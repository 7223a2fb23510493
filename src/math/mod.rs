//! Vector operations over `f64` slices.

pub mod cosine_similarity;
pub mod dot_product;

use crate::utils::VariantInfo;

/// Signature shared by every variant of a binary vector operation
pub type VectorFn = fn(&[f64], &[f64]) -> f64;

/// Relative tolerance for variants that reassociate the accumulation
pub const REASSOCIATION_TOLERANCE: f64 = 1e-9;

/// Compare every variant against the one named `original` on the inputs.
///
/// Order-exact variants must reproduce the reference bit-for-bit; the
/// others must agree within [`REASSOCIATION_TOLERANCE`], relative to the
/// magnitude of the accumulated terms.
pub(crate) fn check_variants(
    variants: &[VariantInfo<VectorFn>],
    a: &[f64],
    b: &[f64],
    scale: f64,
) -> Result<(), String> {
    let original = variants
        .iter()
        .find(|v| v.name == "original")
        .ok_or("No 'original' variant found for reference")?;

    let expected = (original.function)(a, b);

    for variant in variants {
        if variant.name == "original" {
            continue;
        }

        let result = (variant.function)(a, b);
        let ok = if variant.order_exact {
            result.to_bits() == expected.to_bits()
        } else {
            (result - expected).abs() <= REASSOCIATION_TOLERANCE * scale.max(1.0)
        };

        if !ok {
            return Err(format!(
                "Variant '{}' failed verification on length {}. Expected {:e}, got {:e}, diff {:e}",
                variant.name,
                a.len(),
                expected,
                result,
                (result - expected).abs()
            ));
        }
    }

    Ok(())
}
