//! The evaluation boundary
//!
//! The engine's only external collaborator is an [`Evaluator`]: an opaque,
//! possibly very expensive scoring function. Benchmark functions are provided
//! for tests and demos; real problems live outside the crate.

use serde::{Deserialize, Serialize};

use std::f64::consts::PI;

/// External black-box fitness function
///
/// Returns `Some(score)` (higher is better) or `None` when the collaborator's
/// own budget is spent. The exhaustion signal is control flow, not an error:
/// the engine stops the current batch and moves to survivor selection.
pub trait Evaluator {
    /// Score one genotype
    fn evaluate(&mut self, genotype: &[f64]) -> Option<f64>;
}

impl<F> Evaluator for F
where
    F: FnMut(&[f64]) -> Option<f64>,
{
    fn evaluate(&mut self, genotype: &[f64]) -> Option<f64> {
        self(genotype)
    }
}

/// Evaluator wrapper that cuts off after a fixed number of scores
///
/// Models a contest-style collaborator that signals exhaustion itself.
#[derive(Debug)]
pub struct Budgeted<E> {
    inner: E,
    remaining: usize,
    calls: usize,
}

impl<E: Evaluator> Budgeted<E> {
    /// Wrap `inner`, allowing at most `budget` scores
    pub fn new(inner: E, budget: usize) -> Self {
        Self {
            inner,
            remaining: budget,
            calls: 0,
        }
    }

    /// Total calls observed, including those answered with exhaustion
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Scores still available
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<E: Evaluator> Evaluator for Budgeted<E> {
    fn evaluate(&mut self, genotype: &[f64]) -> Option<f64> {
        self.calls += 1;
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.evaluate(genotype)
    }
}

/// Sphere function: `f(x) = Σxᵢ²`
///
/// Unimodal, convex, separable. Scores are negated so the maximum (0) sits
/// at the origin.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Sphere;

impl Evaluator for Sphere {
    fn evaluate(&mut self, genotype: &[f64]) -> Option<f64> {
        Some(-genotype.iter().map(|x| x * x).sum::<f64>())
    }
}

/// Rastrigin function: `f(x) = 10n + Σ(xᵢ² − 10·cos(2πxᵢ))`
///
/// Highly multimodal. Scores are negated so the maximum (0) sits at the
/// origin.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Rastrigin;

impl Evaluator for Rastrigin {
    fn evaluate(&mut self, genotype: &[f64]) -> Option<f64> {
        let n = genotype.len() as f64;
        let sum: f64 = genotype
            .iter()
            .map(|x| x * x - 10.0 * (2.0 * PI * x).cos())
            .sum();
        Some(-(10.0 * n + sum))
    }
}
