//! Population initialization
//!
//! Uniform random seeding of the first generation.

use rand::Rng;

use crate::individual::{Individual, Population, StepSize};
use crate::space::SearchSpace;

/// Generate `mu` individuals with genotype components drawn independently and
/// uniformly from `[lower, upper)`
///
/// Every step-size field is seeded from the `step_size` template (all σ₀).
/// No fitness is assigned. Deterministic given a seeded random source.
pub fn uniform_random<R: Rng>(
    rng: &mut R,
    space: &SearchSpace,
    mu: usize,
    step_size: &StepSize,
) -> Population {
    (0..mu)
        .map(|_| {
            let genotype = (0..space.dimensions())
                .map(|_| space.sample_component(rng))
                .collect();
            Individual::new(genotype, step_size.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_random_population_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let space = SearchSpace::new(10, -5.0, 5.0).unwrap();
        let population = uniform_random(&mut rng, &space, 25, &StepSize::Scalar(1.0));

        assert_eq!(population.len(), 25);
        for ind in &population {
            assert_eq!(ind.genotype.len(), 10);
            assert_eq!(ind.step_size, StepSize::Scalar(1.0));
            assert!(!ind.is_evaluated());
        }
    }

    #[test]
    fn test_uniform_random_within_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let space = SearchSpace::new(5, -3.0, 7.0).unwrap();
        let population = uniform_random(&mut rng, &space, 100, &StepSize::Scalar(0.5));

        for ind in &population {
            for &x in &ind.genotype {
                assert!(space.contains(x), "component {} outside [-3, 7)", x);
            }
        }
    }

    #[test]
    fn test_uniform_random_seeds_vector_step_sizes() {
        let mut rng = StdRng::seed_from_u64(3);
        let space = SearchSpace::new(4, 0.0, 1.0).unwrap();
        let template = StepSize::Vector(vec![0.25; 4]);
        let population = uniform_random(&mut rng, &space, 3, &template);

        for ind in &population {
            assert_eq!(ind.step_size, template);
        }
    }

    #[test]
    fn test_uniform_random_deterministic() {
        let space = SearchSpace::new(6, -1.0, 1.0).unwrap();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        let pop_a = uniform_random(&mut a, &space, 10, &StepSize::Scalar(1.0));
        let pop_b = uniform_random(&mut b, &space, 10, &StepSize::Scalar(1.0));
        assert_eq!(pop_a, pop_b);
    }
}
