//! Candidate solutions
//!
//! An [`Individual`] is one candidate solution: a genotype vector, its
//! self-adaptive mutation strength, and a fitness score that stays unset
//! until the external evaluator has seen the genotype.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Self-adaptive mutation strength, evolved alongside the genotype
///
/// A strategy commits to exactly one representation: a single step size
/// shared by all dimensions, or one step size per dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepSize {
    /// One σ shared by every dimension
    Scalar(f64),
    /// One σᵢ per dimension
    Vector(Vec<f64>),
}

impl StepSize {
    /// Step size applied to dimension `i`
    pub fn for_dimension(&self, i: usize) -> f64 {
        match self {
            Self::Scalar(sigma) => *sigma,
            Self::Vector(sigmas) => sigmas[i],
        }
    }

    /// Smallest step size carried by this representation
    pub fn min(&self) -> f64 {
        match self {
            Self::Scalar(sigma) => *sigma,
            Self::Vector(sigmas) => sigmas.iter().copied().fold(f64::INFINITY, f64::min),
        }
    }
}

/// One candidate solution
///
/// Individuals are value-like: `Clone` deep-copies the genotype and
/// step-size buffers, so offspring never alias a parent's mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// The real-valued vector being optimized
    pub genotype: Vec<f64>,
    /// Self-adaptive mutation strength
    pub step_size: StepSize,
    /// Fitness score, `None` until evaluated
    pub fitness: Option<f64>,
}

impl Individual {
    /// Create an unevaluated individual
    pub fn new(genotype: Vec<f64>, step_size: StepSize) -> Self {
        Self {
            genotype,
            step_size,
            fitness: None,
        }
    }

    /// Check whether the external evaluator has scored this individual
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Fitness score, or an error if the individual was never evaluated
    pub fn fitness_value(&self) -> Result<f64, ConfigError> {
        self.fitness.ok_or(ConfigError::MissingFitness)
    }
}

/// An ordered collection of individuals
///
/// Order carries no meaning except transiently during sort-based survivor
/// selection. Size is fixed per generation by the active strategy's μ.
pub type Population = Vec<Individual>;
