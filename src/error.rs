//! Error types for sigma-evo
//!
//! Configuration faults are fatal and detected eagerly: ideally at strategy
//! construction, otherwise at the operator boundary that first observes them.
//! They surface to the caller of the engine and are never caught internally.

use thiserror::Error;

/// Fatal configuration faults
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Search space with no dimensions
    #[error("Search space must have at least one dimension")]
    ZeroDimensions,

    /// Lower bound not strictly below upper bound
    #[error("Invalid search space bounds: lower ({lower}) must be < upper ({upper})")]
    InvalidBounds { lower: f64, upper: f64 },

    /// Offspring count not divisible into whole mating groups
    #[error("Offspring count {lambda} is not a multiple of {per_group} offspring per mating group")]
    IndivisibleOffspring { lambda: usize, per_group: usize },

    /// (μ,λ) replacement needs at least μ offspring to fill a population
    #[error("Offspring count {lambda} is smaller than population size {mu}")]
    InsufficientOffspring { mu: usize, lambda: usize },

    /// Recombination invoked with a wrong-arity mating group
    #[error("Recombination expects {expected} parents, mating group has {actual}")]
    WrongArity { expected: usize, actual: usize },

    /// Old generation handed to survivor selection has the wrong size
    #[error("Old generation size {actual} does not match mu ({expected})")]
    OldGenerationSize { expected: usize, actual: usize },

    /// New generation handed to survivor selection has the wrong size
    #[error("New generation size {actual} does not match lambda ({expected})")]
    NewGenerationSize { expected: usize, actual: usize },

    /// An operator needed a fitness score that was never assigned
    #[error("Individual has no fitness score")]
    MissingFitness,

    /// Mutation operator paired with the wrong step-size representation
    #[error("Mutation operator expects a {expected} step size")]
    MismatchedStepSize { expected: &'static str },

    /// Out-of-range numeric hyperparameter
    #[error("Invalid strategy parameter: {0}")]
    InvalidParameter(String),
}

/// Top-level error type for engine runs
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The evaluator signalled exhaustion before scoring a single genotype
    #[error("Evaluator exhausted before any genotype was scored")]
    NoEvaluations,
}

/// Result type alias for engine operations
pub type EvoResult<T> = Result<T, EngineError>;
