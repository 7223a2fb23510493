//! Registry of vector operations and their implementation variants.
//!
//! The benchmark binary and the verification tests walk this registry
//! instead of knowing about each operation directly.

use crate::utils::timer::Variant;

/// A closure that runs one timed execution of a variant
pub type VariantClosure<'a> = Variant<'a>;

/// Trait that every benchmarked operation implements
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the operation (e.g., "dot_product")
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Category (e.g., "math")
    fn category(&self) -> &'static str;

    /// Names of the variants compiled into this build
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant, ready to be measured.
    /// Each closure does ONE timed execution over vectors of length `size`
    /// generated from `seed`, and returns the result value.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>>;

    /// Verify every variant against the `original` reference
    fn verify(&self) -> Result<(), String>;
}

pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }

    /// Run `verify()` on every registered algorithm, collecting the failures.
    pub fn verify_all(&self) -> Result<(), Vec<String>> {
        let failures: Vec<String> = self
            .algorithms
            .iter()
            .filter_map(|algo| match algo.verify() {
                Ok(()) => {
                    log::info!("{}: all variants verified", algo.name());
                    None
                }
                Err(e) => {
                    log::error!("{}: {}", algo.name(), e);
                    Some(format!("{}: {}", algo.name(), e))
                }
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all operations
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::math::dot_product::DotProductRunner);
    registry.register(crate::math::cosine_similarity::CosineSimilarityRunner);

    registry
}
