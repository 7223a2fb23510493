//! # Dot Product
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! The `original` variant accumulates strictly left-to-right and backs the
//! exported `dot` symbol. The other variants trade that ordering for speed
//! (unrolled accumulators, SSE2/AVX2 lanes) and are benchmarked against it.

pub mod code;
pub mod test;

pub use code::*;

use crate::math::check_variants;
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::SeededRng;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::sync::Arc;

pub struct DotProductRunner;

impl AlgorithmRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Sum of products of corresponding vector elements"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>> {
        let mut rng = SeededRng::new(seed);
        let a: Arc<Vec<f64>> = Arc::new(rng.vector(size));
        let b: Arc<Vec<f64>> = Arc::new(rng.vector(size));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let a = Arc::clone(&a);
                let b = Arc::clone(&b);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) =
                            crate::measure!(func(black_box(a.as_slice()), black_box(b.as_slice())));
                        (elapsed, Some(black_box(result)))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), String> {
        let variants = code::available_variants();
        let mut rng = StdRng::seed_from_u64(0xD07);

        // Lengths around every unroll/lane boundary, plus a non-aligned large one
        for size in [0usize, 1, 2, 3, 4, 5, 7, 8, 9, 16, 17, 1023] {
            let a: Vec<f64> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
            let b: Vec<f64> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
            let scale: f64 = a.iter().zip(&b).map(|(x, y)| (x * y).abs()).sum();
            check_variants(&variants, &a, &b, scale)?;
        }

        for variant in &variants {
            let result = (variant.function)(&[], &[]);
            if result.to_bits() != 0.0f64.to_bits() {
                return Err(format!(
                    "Variant '{}' returned {:?} for empty input, expected +0.0",
                    variant.name, result
                ));
            }
        }

        log::debug!("dot_product: verified {} variants", variants.len());
        Ok(())
    }
}
