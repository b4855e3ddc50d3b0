//! Recombination
//!
//! Each policy consumes one mating group and produces fresh offspring.
//! Offspring are built from newly allocated buffers and never alias a
//! parent's genotype or step sizes.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::individual::{Individual, StepSize};

/// Recombination policy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Recombination {
    /// Whole/intermediate arithmetic blend of exactly two parents
    ///
    /// Genotype and step size(s) become `α·p₁ + (1−α)·p₂` componentwise.
    /// All offspring of a group are identical copies of the single blend.
    WholeArithmetic {
        /// Blend weight in `[0, 1]`, typically 0.5
        alpha: f64,
    },
    /// No recombination: deep copies of the sole parent
    ///
    /// The mutation-only (evolutionary-programming) style.
    Cloning,
    /// One offspring taking dimension `i` verbatim from parent `i`
    ///
    /// Requires exactly `dimensions` parents; the scalar step size becomes
    /// the arithmetic mean over all parents.
    GlobalArithmetic,
}

impl Recombination {
    /// Number of parents a mating group must contain
    pub fn arity(&self, dimensions: usize) -> usize {
        match self {
            Self::WholeArithmetic { .. } => 2,
            Self::Cloning => 1,
            Self::GlobalArithmetic => dimensions,
        }
    }

    /// Offspring produced per mating group
    pub fn offspring_per_group(&self, breedings: usize) -> usize {
        match self {
            Self::GlobalArithmetic => 1,
            _ => breedings,
        }
    }

    /// Recombine one mating group into offspring
    ///
    /// Fails with [`ConfigError::WrongArity`] if the group size does not
    /// match the policy's arity.
    pub fn recombine(
        &self,
        group: &[&Individual],
        breedings: usize,
        dimensions: usize,
    ) -> Result<Vec<Individual>, ConfigError> {
        let expected = self.arity(dimensions);
        if group.len() != expected {
            return Err(ConfigError::WrongArity {
                expected,
                actual: group.len(),
            });
        }

        match self {
            Self::WholeArithmetic { alpha } => {
                Ok(whole_arithmetic(group[0], group[1], breedings, *alpha))
            }
            Self::Cloning => Ok(clone_parent(group[0], breedings)),
            Self::GlobalArithmetic => Ok(vec![global_arithmetic(group)]),
        }
    }
}

fn blend(a: f64, b: f64, alpha: f64) -> f64 {
    alpha * a + (1.0 - alpha) * b
}

fn whole_arithmetic(
    p1: &Individual,
    p2: &Individual,
    breedings: usize,
    alpha: f64,
) -> Vec<Individual> {
    let genotype: Vec<f64> = p1
        .genotype
        .iter()
        .zip(&p2.genotype)
        .map(|(&a, &b)| blend(a, b, alpha))
        .collect();

    let step_size = match (&p1.step_size, &p2.step_size) {
        (StepSize::Scalar(s1), StepSize::Scalar(s2)) => StepSize::Scalar(blend(*s1, *s2, alpha)),
        (StepSize::Vector(s1), StepSize::Vector(s2)) => StepSize::Vector(
            s1.iter()
                .zip(s2)
                .map(|(&a, &b)| blend(a, b, alpha))
                .collect(),
        ),
        // Mixed representations cannot arise from a validated strategy;
        // blend dimension-wise against whichever shape the first parent has
        (s1, s2) => match s1 {
            StepSize::Scalar(_) => {
                StepSize::Scalar(blend(s1.for_dimension(0), s2.for_dimension(0), alpha))
            }
            StepSize::Vector(sigmas) => StepSize::Vector(
                (0..sigmas.len())
                    .map(|i| blend(s1.for_dimension(i), s2.for_dimension(i), alpha))
                    .collect(),
            ),
        },
    };

    let child = Individual::new(genotype, step_size);
    vec![child; breedings]
}

fn clone_parent(parent: &Individual, breedings: usize) -> Vec<Individual> {
    (0..breedings)
        .map(|_| Individual::new(parent.genotype.clone(), parent.step_size.clone()))
        .collect()
}

fn global_arithmetic(group: &[&Individual]) -> Individual {
    let n = group.len();
    let genotype: Vec<f64> = group.iter().enumerate().map(|(i, p)| p.genotype[i]).collect();

    let step_size = match &group[0].step_size {
        // Per-dimension sigmas: dimension i contributed verbatim by parent i
        StepSize::Vector(_) => StepSize::Vector(
            group
                .iter()
                .enumerate()
                .map(|(i, p)| p.step_size.for_dimension(i))
                .collect(),
        ),
        // Scalar sigma: arithmetic mean over all parents
        StepSize::Scalar(_) => {
            let sum: f64 = group.iter().map(|p| p.step_size.for_dimension(0)).sum();
            StepSize::Scalar(sum / n as f64)
        }
    };

    Individual::new(genotype, step_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent(genotype: Vec<f64>, step_size: StepSize) -> Individual {
        Individual::new(genotype, step_size)
    }

    #[test]
    fn test_whole_arithmetic_midpoint() {
        let p1 = parent(vec![0.0, 0.0], StepSize::Scalar(1.0));
        let p2 = parent(vec![2.0, 2.0], StepSize::Scalar(3.0));

        let offspring = Recombination::WholeArithmetic { alpha: 0.5 }
            .recombine(&[&p1, &p2], 4, 2)
            .unwrap();

        assert_eq!(offspring.len(), 4);
        for child in &offspring {
            assert_eq!(child.genotype, vec![1.0, 1.0]);
            assert_eq!(child.step_size, StepSize::Scalar(2.0));
            assert!(!child.is_evaluated());
        }
    }

    #[test]
    fn test_whole_arithmetic_asymmetric_alpha() {
        let p1 = parent(vec![10.0], StepSize::Vector(vec![1.0]));
        let p2 = parent(vec![0.0], StepSize::Vector(vec![3.0]));

        let offspring = Recombination::WholeArithmetic { alpha: 0.8 }
            .recombine(&[&p1, &p2], 1, 1)
            .unwrap();

        assert!((offspring[0].genotype[0] - 8.0).abs() < 1e-12);
        assert_eq!(offspring[0].step_size, StepSize::Vector(vec![0.8 + 0.6]));
    }

    #[test]
    fn test_whole_arithmetic_rejects_wrong_arity() {
        let p1 = parent(vec![0.0], StepSize::Scalar(1.0));

        let err = Recombination::WholeArithmetic { alpha: 0.5 }
            .recombine(&[&p1], 2, 1)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::WrongArity {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_cloning_produces_deep_copies() {
        let original = parent(vec![1.0, 2.0, 3.0], StepSize::Vector(vec![0.1, 0.2, 0.3]));

        let mut offspring = Recombination::Cloning.recombine(&[&original], 3, 3).unwrap();
        assert_eq!(offspring.len(), 3);

        // Mutating a clone must not alter the original
        offspring[0].genotype[0] = 42.0;
        if let StepSize::Vector(sigmas) = &mut offspring[1].step_size {
            sigmas[2] = 42.0;
        }
        assert_eq!(original.genotype, vec![1.0, 2.0, 3.0]);
        assert_eq!(original.step_size, StepSize::Vector(vec![0.1, 0.2, 0.3]));
    }

    #[test]
    fn test_cloning_rejects_multiple_parents() {
        let p1 = parent(vec![0.0], StepSize::Scalar(1.0));
        let p2 = parent(vec![1.0], StepSize::Scalar(1.0));

        let err = Recombination::Cloning.recombine(&[&p1, &p2], 1, 1).unwrap_err();
        assert_eq!(
            err,
            ConfigError::WrongArity {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_global_arithmetic_one_dimension_per_parent() {
        let p0 = parent(vec![1.0, -1.0, -1.0], StepSize::Vector(vec![0.1, 9.0, 9.0]));
        let p1 = parent(vec![-2.0, 2.0, -2.0], StepSize::Vector(vec![9.0, 0.2, 9.0]));
        let p2 = parent(vec![-3.0, -3.0, 3.0], StepSize::Vector(vec![9.0, 9.0, 0.3]));

        let offspring = Recombination::GlobalArithmetic
            .recombine(&[&p0, &p1, &p2], 7, 3)
            .unwrap();

        // Always exactly one offspring, regardless of breedings
        assert_eq!(offspring.len(), 1);
        assert_eq!(offspring[0].genotype, vec![1.0, 2.0, 3.0]);
        assert_eq!(offspring[0].step_size, StepSize::Vector(vec![0.1, 0.2, 0.3]));
    }

    #[test]
    fn test_global_arithmetic_scalar_sigma_mean() {
        let p0 = parent(vec![1.0, 0.0], StepSize::Scalar(1.0));
        let p1 = parent(vec![0.0, 2.0], StepSize::Scalar(3.0));

        let offspring = Recombination::GlobalArithmetic
            .recombine(&[&p0, &p1], 1, 2)
            .unwrap();

        assert_eq!(offspring[0].genotype, vec![1.0, 2.0]);
        assert_eq!(offspring[0].step_size, StepSize::Scalar(2.0));
    }

    #[test]
    fn test_global_arithmetic_rejects_wrong_arity() {
        let p0 = parent(vec![0.0, 0.0, 0.0], StepSize::Scalar(1.0));
        let p1 = parent(vec![0.0, 0.0, 0.0], StepSize::Scalar(1.0));

        let err = Recombination::GlobalArithmetic
            .recombine(&[&p0, &p1], 1, 3)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::WrongArity {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_offspring_per_group() {
        assert_eq!(
            Recombination::WholeArithmetic { alpha: 0.5 }.offspring_per_group(4),
            4
        );
        assert_eq!(Recombination::Cloning.offspring_per_group(4), 4);
        assert_eq!(Recombination::GlobalArithmetic.offspring_per_group(4), 1);
    }
}
