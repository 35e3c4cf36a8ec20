#[cfg(test)]
#[path = "../../tests/unit/evolution/simulator_test.rs"]
mod simulator_test;

use super::*;
use crate::operators::create_random_tour;
use crate::utils::{Float, GenericResult, compare_floats};
use std::cmp::Ordering;

/// A tolerance under which two tour lengths are considered equal, so floating
/// point noise does not count as an improvement and reset stagnation.
const IMPROVEMENT_TOLERANCE: Float = 0.001;

/// An entity which runs the evolution until a termination criteria is met and
/// returns the best tour found together with its cycle length.
pub struct EvolutionSimulator {
    config: EvolutionConfig,
}

impl EvolutionSimulator {
    /// Creates a new instance of `EvolutionSimulator`.
    pub fn new(config: EvolutionConfig) -> Self {
        Self { config }
    }

    /// Runs the evolution and returns the best ranked tour.
    pub fn run(self) -> GenericResult<RankedTour> {
        let EvolutionConfig { cities, population_size, environment, strategy, termination, mut callback, .. } =
            self.config;

        let logger = environment.logger.clone();
        let random = environment.random.clone();

        let individuals = (0..population_size)
            .map(|_| create_random_tour(cities.len(), &cities, true, random.as_ref()).map(RankedTour::new))
            .collect::<GenericResult<Vec<_>>>()?;

        let mut ctx = RunContext {
            cities,
            population: Population::new(individuals),
            elite: vec![],
            environment,
            statistics: RunStatistics::default(),
        };
        (logger)(format!("created initial population of {population_size} random tours").as_str());

        // seed the incumbent with one generation before entering the loop
        let mut best = strategy.evolve_once(&mut ctx)?;

        loop {
            let candidate = strategy.evolve_once(&mut ctx)?;

            if is_improvement(candidate.length(), best.length()) {
                best = candidate;
                ctx.statistics.stagnation = 0;
            } else {
                ctx.statistics.stagnation += 1;
            }

            if let Some(callback) = callback.as_mut() {
                callback(&best.tour);
            }

            ctx.statistics.generation += 1;

            if let Some(reason) = termination.is_termination(&ctx) {
                (logger)(
                    format!(
                        "stopped due to {reason} at generation {} with best tour length {:.3}",
                        ctx.statistics.generation,
                        best.length()
                    )
                    .as_str(),
                );
                break;
            }
        }

        Ok(best)
    }
}

/// Checks whether the new length is better than the old one beyond tolerance:
/// lengths closer than the tolerance are considered equal.
fn is_improvement(new: Float, old: Float) -> bool {
    (new - old).abs() >= IMPROVEMENT_TOLERANCE && compare_floats(new, old) == Ordering::Less
}
