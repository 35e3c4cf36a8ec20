//! This module contains generation-step strategies which drive the evolution.

mod genetic;
pub use self::genetic::*;

use crate::evolution::RunContext;
use crate::model::RankedTour;
use crate::utils::GenericResult;

/// A capability which advances the population by exactly one generation and returns
/// the best tour of the new generation. Implementations are interchangeable and
/// injected into the simulator through the config; the default one is
/// [`GeneticStrategy`].
pub trait GenerationStrategy {
    /// Runs a single generation step over the context's population.
    fn evolve_once(&self, ctx: &mut RunContext) -> GenericResult<RankedTour>;
}
