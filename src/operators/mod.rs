//! Genetic operators
//!
//! Pure, stateless implementations of the five algorithm phases:
//! initialization, parent selection, recombination, self-adaptive mutation,
//! and survivor selection. Every operator takes an explicit random source so
//! that a seed fully determines a run.

pub mod initialization;
pub mod mutation;
pub mod parent_selection;
pub mod recombination;
pub mod survival;

pub mod prelude {
    pub use super::initialization::*;
    pub use super::mutation::*;
    pub use super::parent_selection::*;
    pub use super::recombination::*;
    pub use super::survival::*;
}
