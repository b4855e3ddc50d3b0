//! Parent selection
//!
//! Both policies draw mating groups **with replacement** from the current
//! population and return groups of indices into it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::individual::Population;

/// A mating group: indices into the population, drawn with replacement
pub type MatingGroup = Vec<usize>;

/// Parent selection policy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParentSelection {
    /// Each slot independently picks a uniformly random individual
    Uniform,
    /// Roulette draw with probability proportional to shifted fitness
    ///
    /// All fitness values are shifted by `-min(0, minimum) + transpose` so
    /// none are negative; the transpose keeps degenerate all-zero sums from
    /// producing undefined probabilities.
    FitnessProportional {
        /// Tunable offset added after the non-negativity shift
        transpose: f64,
    },
}

impl ParentSelection {
    /// Produce `num_groups` mating groups of `group_size` parents each
    pub fn select<R: Rng>(
        &self,
        rng: &mut R,
        population: &Population,
        num_groups: usize,
        group_size: usize,
    ) -> Result<Vec<MatingGroup>, ConfigError> {
        match self {
            Self::Uniform => Ok(uniform(rng, population.len(), num_groups, group_size)),
            Self::FitnessProportional { transpose } => {
                fitness_proportional(rng, population, num_groups, group_size, *transpose)
            }
        }
    }
}

fn uniform<R: Rng>(
    rng: &mut R,
    population_size: usize,
    num_groups: usize,
    group_size: usize,
) -> Vec<MatingGroup> {
    (0..num_groups)
        .map(|_| {
            (0..group_size)
                .map(|_| rng.gen_range(0..population_size))
                .collect()
        })
        .collect()
}

fn fitness_proportional<R: Rng>(
    rng: &mut R,
    population: &Population,
    num_groups: usize,
    group_size: usize,
    transpose: f64,
) -> Result<Vec<MatingGroup>, ConfigError> {
    let mut weights = Vec::with_capacity(population.len());
    let mut minimum = 0.0f64;
    for individual in population {
        let fitness = individual.fitness_value()?;
        if fitness < minimum {
            minimum = fitness;
        }
        weights.push(fitness);
    }

    let mut sum = 0.0;
    for weight in &mut weights {
        *weight += -minimum + transpose;
        sum += *weight;
    }

    let groups = (0..num_groups)
        .map(|_| {
            (0..group_size)
                .map(|_| roulette_draw(rng, &weights, sum))
                .collect()
        })
        .collect();

    Ok(groups)
}

/// One roulette draw over cumulative weights
///
/// If floating-point rounding leaves the running value positive after the
/// whole wheel, the draw clamps to the last candidate so every slot is
/// always assigned.
fn roulette_draw<R: Rng>(rng: &mut R, weights: &[f64], sum: f64) -> usize {
    let mut value = rng.gen::<f64>() * sum;
    for (k, weight) in weights.iter().enumerate() {
        value -= weight;
        if value <= 0.0 {
            return k;
        }
    }
    weights.len() - 1
}
