//! # sigma-evo
//!
//! Self-adaptive evolution strategies under a hard fitness-evaluation budget.
//!
//! The engine searches a bounded continuous space for a genotype maximizing
//! an external black-box fitness function. Operators for every phase of the
//! algorithm (initialization, parent selection, recombination, mutation,
//! survivor selection) are interchangeable and bundled into a
//! [`Strategy`](strategy::Strategy); the generational loop sequences them
//! until the evaluation budget is spent.
//!
//! ## Core Concepts
//!
//! - **Self-adaptation**: mutation step sizes are part of each individual and
//!   evolve alongside the genotype through a log-normal update.
//! - **Budget awareness**: every fitness call counts against a hard limit,
//!   and the external evaluator can cut a batch short at any point.
//! - **Reproducibility**: one explicit random source is threaded through
//!   every operator, so a seed fully determines a run.
//!
//! ## Quick Start
//!
//! ```rust
//! use sigma_evo::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let space = SearchSpace::new(10, -5.0, 5.0)?;
//! let strategy = Strategy::unimodal(&space);
//! let engine = Engine::new(space, strategy, 10_000)?;
//!
//! let result = engine.run(&mut Sphere, &mut rng)?;
//! println!("best fitness: {:?}", result.best.fitness);
//! # Ok::<(), sigma_evo::error::EngineError>(())
//! ```

pub mod engine;
pub mod error;
pub mod fitness;
pub mod individual;
pub mod operators;
pub mod space;
pub mod strategy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::{Engine, RunResult};
    pub use crate::error::{ConfigError, EngineError, EvoResult};
    pub use crate::fitness::{Budgeted, Evaluator, Rastrigin, Sphere};
    pub use crate::individual::{Individual, Population, StepSize};
    pub use crate::operators::prelude::*;
    pub use crate::space::SearchSpace;
    pub use crate::strategy::{PresetSelector, ProblemTraits, Strategy, StrategySelector};
}
