//! # Cosine Similarity
//!
//! `cos(a, b) = dot(a, b) / (|a| * |b|)`
//!
//! Every variant computes the inner product and both sums of squares in one
//! pass, then shares the same zero-magnitude guard: an undefined angle is
//! reported as `0.0` ("no similarity") rather than NaN.

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

pub struct CosineSimilarityRunner;

impl AlgorithmRunner for CosineSimilarityRunner {
    fn name(&self) -> &'static str {
        "cosine_similarity"
    }

    fn description(&self) -> &'static str {
        "Cosine of the angle between two vectors (0.0 for zero magnitude)"
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
        let mut rng = StdRng::seed_from_u64(0xC05);

        for size in [1usize, 2, 3, 4, 5, 7, 8, 9, 16, 17, 1023] {
            let a: Vec<f64> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
            let b: Vec<f64> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
            check_variants(&variants, &a, &b, 1.0)?;
        }

        // The zero-magnitude guard must hold for every variant, exactly.
        let zero = [0.0f64; 9];
        let ones = [1.0f64; 9];
        let empty: [f64; 0] = [];
        let cases: [(&[f64], &[f64]); 3] = [(&zero, &ones), (&ones, &zero), (&empty, &empty)];
        for variant in &variants {
            for (a, b) in cases {
                let result = (variant.function)(a, b);
                if result != 0.0 {
                    return Err(format!(
                        "Variant '{}' returned {} for a zero-magnitude input of length {}, expected 0.0",
                        variant.name,
                        result,
                        a.len()
                    ));
                }
            }
        }

        log::debug!("cosine_similarity: verified {} variants", variants.len());
        Ok(())
    }
}
