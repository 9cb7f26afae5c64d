//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let name = builder.name("product", "main");
//! let price = builder.price();
//! ```

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// # Arguments
    ///
    /// * `prefix` - The type of resource (e.g., "product")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "backup")
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("product", "main");
    /// // Returns: "test-product-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Generate a deterministic strictly positive price
    pub fn price(&self) -> f64 {
        (self.seed % 10_000) as f64 / 100.0 + 0.01
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an Option is Some and return the inner value
    pub fn assert_some<T>(option: Option<T>, message: &str) -> T {
        match option {
            Some(value) => value,
            None => panic!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_test_name_gives_same_data() {
        let a = TestDataBuilder::from_test_name("stable");
        let b = TestDataBuilder::from_test_name("stable");
        assert_eq!(a.name("product", "x"), b.name("product", "x"));
        assert_eq!(a.price(), b.price());
    }

    #[test]
    fn test_price_is_strictly_positive() {
        for name in ["a", "b", "c", "zero"] {
            let builder = TestDataBuilder::from_test_name(name);
            assert!(builder.price() > 0.0);
        }
    }
}
