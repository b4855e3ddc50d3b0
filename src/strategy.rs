//! Strategy bundles
//!
//! A [`Strategy`] is a plain data bundle: one operator per algorithm phase
//! plus the numeric hyperparameters of a run. It is the unit an experimenter
//! selects per problem instance; the engine never hard-codes an operator
//! choice. Survivor selection is always (μ,λ) replacement.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::operators::mutation::Mutation;
use crate::operators::parent_selection::ParentSelection;
use crate::operators::recombination::Recombination;
use crate::space::SearchSpace;

/// Operator set and hyperparameters for one run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// Parent population size μ, held constant across generations
    pub mu: usize,
    /// Offspring produced per generation λ
    pub lambda: usize,
    /// Initial mutation step size σ₀
    pub initial_sigma: f64,
    /// Lower bound ε₀ every step size is clamped to after mutation
    pub sigma_floor: f64,
    /// Offspring per mating group (the breeding factor); global arithmetic
    /// recombination always yields one offspring per group regardless
    pub breedings: usize,
    /// Parent selection policy
    pub parent_selection: ParentSelection,
    /// Recombination policy
    pub recombination: Recombination,
    /// Self-adaptive mutation policy
    pub mutation: Mutation,
}

impl Strategy {
    /// Bundle for unimodal problems
    ///
    /// Uniform parent selection, whole arithmetic recombination (α = 0.5),
    /// self-adaptive mutation with one step size.
    pub fn unimodal(space: &SearchSpace) -> Self {
        Self {
            mu: 100,
            lambda: 400,
            initial_sigma: 1.0,
            sigma_floor: 1e-5,
            breedings: 2,
            parent_selection: ParentSelection::Uniform,
            recombination: Recombination::WholeArithmetic { alpha: 0.5 },
            mutation: Mutation::one_step_for_dimension(space.dimensions()),
        }
    }

    /// Bundle for multimodal problems
    ///
    /// Same operator set as [`Strategy::unimodal`] but with per-dimension
    /// step sizes, which cope better with rugged landscapes.
    pub fn multimodal(space: &SearchSpace) -> Self {
        Self {
            mutation: Mutation::n_step_for_dimension(space.dimensions()),
            ..Self::unimodal(space)
        }
    }

    /// Validate the bundle
    ///
    /// Rejects every configuration the engine could otherwise only discover
    /// deep inside a run: zero sizes, λ < μ, λ not divisible into whole
    /// mating groups, non-positive σ₀/ε₀, and an out-of-range blend weight.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mu == 0 {
            return Err(ConfigError::InvalidParameter("mu must be at least 1".into()));
        }
        if self.lambda == 0 {
            return Err(ConfigError::InvalidParameter(
                "lambda must be at least 1".into(),
            ));
        }
        if self.lambda < self.mu {
            return Err(ConfigError::InsufficientOffspring {
                mu: self.mu,
                lambda: self.lambda,
            });
        }
        if self.breedings == 0 {
            return Err(ConfigError::InvalidParameter(
                "breedings must be at least 1".into(),
            ));
        }
        if !(self.initial_sigma > 0.0) {
            return Err(ConfigError::InvalidParameter(format!(
                "initial sigma must be positive, got {}",
                self.initial_sigma
            )));
        }
        if !(self.sigma_floor > 0.0) {
            return Err(ConfigError::InvalidParameter(format!(
                "sigma floor must be positive, got {}",
                self.sigma_floor
            )));
        }
        if let Recombination::WholeArithmetic { alpha } = self.recombination {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ConfigError::InvalidParameter(format!(
                    "alpha must be in [0, 1], got {}",
                    alpha
                )));
            }
        }

        let per_group = self.recombination.offspring_per_group(self.breedings);
        if self.lambda % per_group != 0 {
            return Err(ConfigError::IndivisibleOffspring {
                lambda: self.lambda,
                per_group,
            });
        }

        Ok(())
    }

    /// Number of mating groups per generation
    pub fn num_mating_groups(&self) -> usize {
        self.lambda / self.recombination.offspring_per_group(self.breedings)
    }

    /// Parents per mating group, fixed by the recombination policy
    pub fn mating_group_size(&self, space: &SearchSpace) -> usize {
        self.recombination.arity(space.dimensions())
    }
}

/// Problem metadata supplied by the harness
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemTraits {
    /// Fitness landscape has multiple optima
    pub multimodal: bool,
    /// Landscape has exploitable global structure
    pub structured: bool,
    /// Dimensions can be optimized independently
    pub separable: bool,
    /// Hard cap on fitness evaluations for the run
    pub evaluation_limit: usize,
}

/// Heuristic choosing an operator set and parameters for a problem class
///
/// The selection heuristic itself is deliberately unspecified here; callers
/// plug in their own policy and the engine only ever sees the resulting
/// [`Strategy`].
pub trait StrategySelector {
    /// Pick a validated strategy for the given problem
    fn choose(&self, traits: &ProblemTraits, space: &SearchSpace) -> Result<Strategy, ConfigError>;
}

/// Baseline policy: pick the preset matching the multimodality flag
#[derive(Clone, Copy, Debug, Default)]
pub struct PresetSelector;

impl StrategySelector for PresetSelector {
    fn choose(&self, traits: &ProblemTraits, space: &SearchSpace) -> Result<Strategy, ConfigError> {
        let strategy = if traits.multimodal {
            Strategy::multimodal(space)
        } else {
            Strategy::unimodal(space)
        };
        strategy.validate()?;
        Ok(strategy)
    }
}
