//! Tests for dot product implementations.

#[cfg(test)]
mod tests {
    use crate::math::dot_product::code::*;
    use crate::math::dot_product::DotProductRunner;
    use crate::registry::AlgorithmRunner;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_vector(rng: &mut StdRng, len: usize) -> Vec<f64> {
        (0..len).map(|_| rng.random_range(-10.0..10.0)).collect()
    }

    #[test]
    fn test_original_basic() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        // 5 + 12 + 21 + 32
        assert_eq!(dot_product_original(&a, &b), 70.0);
    }

    #[test]
    fn test_orthogonal() {
        assert_eq!(dot_product_original(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_self_product() {
        assert_eq!(dot_product_original(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 14.0);
    }

    #[test]
    fn test_zero_vector() {
        assert_eq!(dot_product_original(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_empty_is_positive_zero() {
        let result = dot_product_original(&[], &[]);
        assert_eq!(result, 0.0);
        assert!(result.is_sign_positive());
    }

    #[test]
    fn test_accumulates_left_to_right() {
        // (1e16 + 1) - 1e16 rounds to 0 left-to-right; any pairing of the
        // last two terms first would give 1.
        let a = [1e16, 1.0, -1e16];
        let b = [1.0, 1.0, 1.0];
        assert_eq!(dot_product_original(&a, &b), 0.0);

        let expected = a.iter().zip(&b).fold(0.0, |acc, (x, y)| acc + x * y);
        assert_eq!(dot_product_original(&a, &b).to_bits(), expected.to_bits());
    }

    #[test]
    fn test_commutative_exact() {
        let mut rng = StdRng::seed_from_u64(1);
        for len in [1, 3, 64, 257] {
            let a = random_vector(&mut rng, len);
            let b = random_vector(&mut rng, len);
            assert_eq!(
                dot_product_original(&a, &b).to_bits(),
                dot_product_original(&b, &a).to_bits(),
                "length {}",
                len
            );
        }
    }

    #[test]
    fn test_self_product_non_negative() {
        let mut rng = StdRng::seed_from_u64(2);
        for len in 0..50 {
            let a = random_vector(&mut rng, len);
            assert!(dot_product_original(&a, &a) >= 0.0);
        }
    }

    #[test]
    #[should_panic(expected = "Vectors must have the same length")]
    fn test_length_mismatch_panics() {
        dot_product_original(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn test_all_variants_scenarios() {
        for variant in available_variants() {
            let f = variant.function;
            assert_eq!(f(&[1.0, 0.0], &[0.0, 1.0]), 0.0, "{}", variant.name);
            assert_eq!(f(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 14.0, "{}", variant.name);
            assert_eq!(f(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]), 0.0, "{}", variant.name);
            assert_eq!(f(&[], &[]), 0.0, "{}", variant.name);
        }
    }

    #[test]
    fn test_runner_verify() {
        DotProductRunner
            .verify()
            .expect("all dot product variants should match the reference");
    }
}
