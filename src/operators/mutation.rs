//! Self-adaptive mutation
//!
//! Both policies evolve the mutation strength alongside the genotype through
//! a log-normal update, clamped from below so the search never collapses to
//! zero step size. No bound clamping is applied to the genotype afterwards;
//! values may legally drift outside the search-space box.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::individual::{Individual, StepSize};

/// Self-adaptive mutation policy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Uncorrelated mutation with one step size
    ///
    /// `σ ← σ·exp(τ·N)`, then every genotype component gets an independent
    /// `σ·Nᵢ` perturbation.
    OneStepSize {
        /// Learning rate, usually `τ ∝ 1/√n`
        tau: f64,
    },
    /// Uncorrelated mutation with n step sizes
    ///
    /// `σᵢ ← σᵢ·exp(τ'·N + τ·Nᵢ)` with one shared draw `N` per call, then
    /// `xᵢ ← xᵢ + σᵢ·Nᵢ` reusing the same `Nᵢ`. Coupling the step-size and
    /// genotype perturbation through one draw is the textbook scheme, not an
    /// accident.
    NStepSizes {
        /// Global learning rate, usually `τ' ∝ 1/√(2n)`
        tau_prime: f64,
        /// Per-dimension learning rate, usually `τ ∝ 1/√(2√n)`
        tau: f64,
    },
}

impl Mutation {
    /// One-step-size mutation with the recommended rate for dimension `n`
    pub fn one_step_for_dimension(n: usize) -> Self {
        Self::OneStepSize {
            tau: 1.0 / (n as f64).sqrt(),
        }
    }

    /// N-step-sizes mutation with the recommended rates for dimension `n`
    pub fn n_step_for_dimension(n: usize) -> Self {
        Self::NStepSizes {
            tau_prime: 1.0 / (2.0 * n as f64).sqrt(),
            tau: 1.0 / (2.0 * (n as f64).sqrt()).sqrt(),
        }
    }

    /// Step-size representation this policy self-adapts, seeded at `sigma0`
    pub fn initial_step_size(&self, dimensions: usize, sigma0: f64) -> StepSize {
        match self {
            Self::OneStepSize { .. } => StepSize::Scalar(sigma0),
            Self::NStepSizes { .. } => StepSize::Vector(vec![sigma0; dimensions]),
        }
    }

    /// Mutate an individual in place
    ///
    /// `floor` is the lower bound ε₀ every step size is clamped to after the
    /// multiplicative update. Fails if the individual carries the wrong
    /// step-size representation for this policy.
    pub fn mutate<R: Rng>(
        &self,
        rng: &mut R,
        individual: &mut Individual,
        floor: f64,
    ) -> Result<(), ConfigError> {
        match (self, &mut individual.step_size) {
            (Self::OneStepSize { tau }, StepSize::Scalar(sigma)) => {
                let draw: f64 = rng.sample(StandardNormal);
                *sigma *= (tau * draw).exp();
                if *sigma < floor {
                    *sigma = floor;
                }
                let sigma = *sigma;
                for x in individual.genotype.iter_mut() {
                    let perturbation: f64 = rng.sample(StandardNormal);
                    *x += sigma * perturbation;
                }
                Ok(())
            }
            (Self::NStepSizes { tau_prime, tau }, StepSize::Vector(sigmas)) => {
                let shared: f64 = rng.sample(StandardNormal);
                for (x, sigma) in individual.genotype.iter_mut().zip(sigmas.iter_mut()) {
                    let draw: f64 = rng.sample(StandardNormal);
                    *sigma *= (tau_prime * shared + tau * draw).exp();
                    if *sigma < floor {
                        *sigma = floor;
                    }
                    // Same draw for the genotype perturbation, by construction
                    *x += *sigma * draw;
                }
                Ok(())
            }
            (Self::OneStepSize { .. }, StepSize::Vector(_)) => {
                Err(ConfigError::MismatchedStepSize { expected: "scalar" })
            }
            (Self::NStepSizes { .. }, StepSize::Scalar(_)) => Err(ConfigError::MismatchedStepSize {
                expected: "per-dimension",
            }),
        }
    }
}
