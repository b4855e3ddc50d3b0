//! Generational loop and evaluation budget controller
//!
//! The [`Engine`] owns the population and the evaluation counter, sequences
//! the strategy's operators generation after generation, and stops once the
//! budget is spent. Single-threaded and synchronous: the only blocking point
//! is the external fitness call. One seeded random source is threaded through
//! every operator, so a seed fully determines a run.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, EngineError};
use crate::fitness::Evaluator;
use crate::individual::{Individual, Population};
use crate::operators::{initialization, survival};
use crate::space::SearchSpace;
use crate::strategy::Strategy;

/// Outcome of a completed run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunResult {
    /// Best individual observed at any evaluation
    ///
    /// (μ,λ) replacement is non-elitist, so the best solution of the whole
    /// run is not necessarily in the final population.
    pub best: Individual,
    /// Completed generations (the seeding of the population is not counted)
    pub generations: usize,
    /// Fitness evaluations consumed
    pub evaluations: usize,
}

/// Budget-capped evolutionary optimization run
pub struct Engine {
    space: SearchSpace,
    strategy: Strategy,
    evaluation_limit: usize,
}

impl Engine {
    /// Create an engine for one problem instance
    ///
    /// The strategy is validated here so configuration faults surface before
    /// any fitness evaluation is spent.
    pub fn new(
        space: SearchSpace,
        strategy: Strategy,
        evaluation_limit: usize,
    ) -> Result<Self, ConfigError> {
        strategy.validate()?;
        if evaluation_limit == 0 {
            return Err(ConfigError::InvalidParameter(
                "evaluation limit must be at least 1".into(),
            ));
        }
        Ok(Self {
            space,
            strategy,
            evaluation_limit,
        })
    }

    /// The search space this engine runs over
    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    /// The strategy this engine runs
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Run the generational loop until the budget is exhausted
    ///
    /// Seeds μ individuals, evaluates them, then repeats the cycle: parent
    /// selection, recombination into λ offspring, mutation, evaluation, and
    /// (μ,λ) survivor selection. Termination happens when the evaluation
    /// counter reaches the limit or the evaluator signals exhaustion.
    pub fn run<E, R>(&self, evaluator: &mut E, rng: &mut R) -> Result<RunResult, EngineError>
    where
        E: Evaluator,
        R: Rng,
    {
        let strategy = &self.strategy;
        let dimensions = self.space.dimensions();
        let step0 = strategy
            .mutation
            .initial_step_size(dimensions, strategy.initial_sigma);

        let mut population = initialization::uniform_random(rng, &self.space, strategy.mu, &step0);

        let mut evaluations = 0usize;
        let mut generations = 0usize;
        let mut best: Option<Individual> = None;

        // Every initial member is scored once, counted against the budget
        let mut exhausted = false;
        for individual in population.iter_mut() {
            match evaluator.evaluate(&individual.genotype) {
                Some(score) => {
                    evaluations += 1;
                    individual.fitness = Some(score);
                    track_best(&mut best, individual);
                }
                None => {
                    exhausted = true;
                    break;
                }
            }
        }
        debug!(evaluations, mu = strategy.mu, "population seeded");

        while !exhausted && evaluations < self.evaluation_limit {
            let groups = strategy.parent_selection.select(
                rng,
                &population,
                strategy.num_mating_groups(),
                strategy.mating_group_size(&self.space),
            )?;

            let mut offspring: Population = Vec::with_capacity(strategy.lambda);
            for group in &groups {
                let parents: Vec<&Individual> = group.iter().map(|&i| &population[i]).collect();
                offspring.extend(strategy.recombination.recombine(
                    &parents,
                    strategy.breedings,
                    dimensions,
                )?);
            }

            for child in offspring.iter_mut() {
                strategy.mutation.mutate(rng, child, strategy.sigma_floor)?;
            }

            // Evaluate the batch; an exhaustion signal aborts it mid-way
            let mut scored = 0usize;
            for child in offspring.iter_mut() {
                match evaluator.evaluate(&child.genotype) {
                    Some(score) => {
                        evaluations += 1;
                        child.fitness = Some(score);
                        scored += 1;
                        track_best(&mut best, child);
                    }
                    None => {
                        exhausted = true;
                        break;
                    }
                }
            }

            if exhausted {
                // Close out with the scored prefix if it can still fill a
                // population; unscored offspring never reach selection
                offspring.truncate(scored);
                if scored >= strategy.mu {
                    population =
                        survival::mu_comma_lambda(&population, offspring, strategy.mu, scored)?;
                    generations += 1;
                }
                debug!(evaluations, scored, "evaluator exhausted mid-batch");
                break;
            }

            population = survival::mu_comma_lambda(
                &population,
                offspring,
                strategy.mu,
                strategy.lambda,
            )?;
            generations += 1;

            debug!(
                generation = generations,
                evaluations,
                best_fitness = best.as_ref().and_then(|b| b.fitness),
                "generation complete"
            );
        }

        let best = best.ok_or(EngineError::NoEvaluations)?;
        info!(
            generations,
            evaluations,
            best_fitness = best.fitness,
            "run complete"
        );

        Ok(RunResult {
            best,
            generations,
            evaluations,
        })
    }
}

fn track_best(best: &mut Option<Individual>, candidate: &Individual) {
    let better = match best {
        Some(current) => candidate.fitness > current.fitness,
        None => true,
    };
    if better {
        *best = Some(candidate.clone());
    }
}
