//! Search space description
//!
//! A [`SearchSpace`] is the static description of the genotype: how many
//! dimensions, and the box bounds shared by all of them. It is immutable for
//! the duration of a run.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Bounded continuous search space
///
/// The same `[lower, upper)` interval applies to every dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    dimensions: usize,
    lower: f64,
    upper: f64,
}

impl SearchSpace {
    /// Create a new search space
    ///
    /// Fails if `dimensions` is zero or `lower` is not strictly below `upper`.
    pub fn new(dimensions: usize, lower: f64, upper: f64) -> Result<Self, ConfigError> {
        if dimensions == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        if !(upper > lower) {
            return Err(ConfigError::InvalidBounds { lower, upper });
        }
        Ok(Self {
            dimensions,
            lower,
            upper,
        })
    }

    /// Create a symmetric space `[-half_width, half_width)` in each dimension
    pub fn symmetric(dimensions: usize, half_width: f64) -> Result<Self, ConfigError> {
        Self::new(dimensions, -half_width, half_width)
    }

    /// Genotype length
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Lower bound (inclusive)
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound (exclusive for sampling)
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Width of the space along every dimension
    pub fn range(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check whether a value lies inside the box
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value < self.upper
    }

    /// Draw one genotype component uniformly from `[lower, upper)`
    pub fn sample_component<R: Rng>(&self, rng: &mut R) -> f64 {
        self.lower + rng.gen::<f64>() * self.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_space_new() {
        let space = SearchSpace::new(10, -5.0, 5.0).unwrap();
        assert_eq!(space.dimensions(), 10);
        assert_eq!(space.range(), 10.0);
    }

    #[test]
    fn test_space_rejects_zero_dimensions() {
        let err = SearchSpace::new(0, -5.0, 5.0).unwrap_err();
        assert_eq!(err, ConfigError::ZeroDimensions);
    }

    #[test]
    fn test_space_rejects_inverted_bounds() {
        assert!(matches!(
            SearchSpace::new(3, 5.0, -5.0),
            Err(ConfigError::InvalidBounds { .. })
        ));
        // Degenerate (equal) bounds are rejected too
        assert!(matches!(
            SearchSpace::new(3, 1.0, 1.0),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_sample_component_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let space = SearchSpace::new(1, -2.0, 3.0).unwrap();
        for _ in 0..1000 {
            let x = space.sample_component(&mut rng);
            assert!(space.contains(x), "sample {} out of [-2, 3)", x);
        }
    }

    #[test]
    fn test_sample_component_deterministic() {
        let space = SearchSpace::symmetric(1, 5.0).unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(space.sample_component(&mut a), space.sample_component(&mut b));
        }
    }
}
