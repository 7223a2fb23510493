//! Tests for cosine similarity implementations.

#[cfg(test)]
mod tests {
    use crate::math::cosine_similarity::code::*;
    use crate::math::cosine_similarity::CosineSimilarityRunner;
    use crate::registry::AlgorithmRunner;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64, msg: &str) {
        let diff = (actual - expected).abs();
        assert!(
            diff < EPSILON,
            "{}: expected {}, got {}, diff = {}",
            msg,
            expected,
            actual,
            diff
        );
    }

    fn random_vector(rng: &mut StdRng, len: usize) -> Vec<f64> {
        (0..len).map(|_| rng.random_range(-5.0..5.0)).collect()
    }

    #[test]
    fn test_orthogonal() {
        assert_eq!(cosine_similarity_original(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_identical() {
        assert_close(
            cosine_similarity_original(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]),
            1.0,
            "identical vectors",
        );
    }

    #[test]
    fn test_opposite() {
        assert_close(
            cosine_similarity_original(&[1.0, 2.0, 3.0], &[-1.0, -2.0, -3.0]),
            -1.0,
            "opposite vectors",
        );
    }

    #[test]
    fn test_zero_vector_guard() {
        assert_eq!(cosine_similarity_original(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(cosine_similarity_original(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity_original(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_empty() {
        let result = cosine_similarity_original(&[], &[]);
        assert_eq!(result, 0.0);
        assert!(!result.is_nan());
    }

    #[test]
    fn test_known_angle() {
        // 45 degrees
        assert_close(
            cosine_similarity_original(&[1.0, 0.0], &[1.0, 1.0]),
            std::f64::consts::FRAC_1_SQRT_2,
            "45 degrees",
        );
    }

    #[test]
    fn test_self_similarity() {
        let mut rng = StdRng::seed_from_u64(3);
        for len in 1..64 {
            let a = random_vector(&mut rng, len);
            assert_close(cosine_similarity_original(&a, &a), 1.0, "self similarity");
        }
    }

    #[test]
    fn test_scale_invariance() {
        let mut rng = StdRng::seed_from_u64(4);
        for k in [1e-3, 0.5, 2.0, 1e3] {
            let a = random_vector(&mut rng, 100);
            let b = random_vector(&mut rng, 100);
            let scaled: Vec<f64> = a.iter().map(|x| x * k).collect();
            assert_close(
                cosine_similarity_original(&scaled, &b),
                cosine_similarity_original(&a, &b),
                "scale invariance",
            );
        }
    }

    #[test]
    fn test_symmetric() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = random_vector(&mut rng, 37);
        let b = random_vector(&mut rng, 37);
        assert_eq!(
            cosine_similarity_original(&a, &b).to_bits(),
            cosine_similarity_original(&b, &a).to_bits()
        );
    }

    #[test]
    fn test_bounded_within_rounding() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let a = random_vector(&mut rng, 16);
            let b = random_vector(&mut rng, 16);
            let c = cosine_similarity_original(&a, &b);
            assert!(c.abs() <= 1.0 + EPSILON, "{} escaped [-1, 1]", c);
        }
    }

    #[test]
    fn test_self_similarity_not_clamped() {
        // Rounds to one ulp above 1.0; the result must be reported as computed.
        let a = [0.10787072262545849, -0.8691613760515251, 0.6794522192953778];
        let expected = 1.0000000000000002f64;

        let result = cosine_similarity_original(&a, &a);
        assert_eq!(result.to_bits(), expected.to_bits(), "got {}", result);

        for variant in available_variants().iter().filter(|v| v.order_exact) {
            assert_eq!(
                (variant.function)(&a, &a).to_bits(),
                expected.to_bits(),
                "{}",
                variant.name
            );
        }
    }

    #[test]
    #[should_panic(expected = "Vectors must have the same length")]
    fn test_length_mismatch_panics() {
        cosine_similarity_original(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    fn test_all_variants_scenarios() {
        for variant in available_variants() {
            let f = variant.function;
            assert_eq!(f(&[1.0, 0.0], &[0.0, 1.0]), 0.0, "{}", variant.name);
            assert_close(f(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 1.0, variant.name);
            assert_eq!(f(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]), 0.0, "{}", variant.name);
            assert_eq!(f(&[], &[]), 0.0, "{}", variant.name);
        }
    }

    #[test]
    fn test_runner_verify() {
        CosineSimilarityRunner
            .verify()
            .expect("all cosine similarity variants should match the reference");
    }
}
