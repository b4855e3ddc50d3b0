//! Survivor selection
//!
//! (μ,λ) fitness-based replacement: parents are discarded wholesale and only
//! the best μ offspring carry over.

use crate::error::ConfigError;
use crate::individual::Population;

/// (μ,λ) selection
///
/// The old generation must have size μ and the new one size λ; any mismatch
/// is a fatal configuration error, never silently truncated or padded. The
/// offspring are sorted ascending by fitness (stable sort, so equal scores
/// keep their input order and results stay reproducible) and the weakest
/// `λ − μ` are dropped.
pub fn mu_comma_lambda(
    old_generation: &Population,
    mut new_generation: Population,
    mu: usize,
    lambda: usize,
) -> Result<Population, ConfigError> {
    if old_generation.len() != mu {
        return Err(ConfigError::OldGenerationSize {
            expected: mu,
            actual: old_generation.len(),
        });
    }
    if new_generation.len() != lambda {
        return Err(ConfigError::NewGenerationSize {
            expected: lambda,
            actual: new_generation.len(),
        });
    }
    if lambda < mu {
        return Err(ConfigError::InsufficientOffspring { mu, lambda });
    }
    if new_generation.iter().any(|i| !i.is_evaluated()) {
        return Err(ConfigError::MissingFitness);
    }

    // Parents die; the weakest offspring sort to the front and are dropped
    new_generation.sort_by(|a, b| {
        a.fitness
            .partial_cmp(&b.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    new_generation.drain(0..lambda - mu);

    Ok(new_generation)
}
