#[cfg(test)]
#[path = "../../tests/unit/termination/stagnation_test.rs"]
mod stagnation_test;

use super::*;

/// A termination criteria which stops the search when the best tour stops
/// improving. Two thresholds apply around the expected convergence point of
/// `floor(ln(n) * n) + 1` generations for `n` cities: a tight one once the
/// generation count passes that point and a looser one before it.
pub struct Stagnation {
    optimal_iterations: usize,
    post_threshold: usize,
    pre_threshold: usize,
}

impl Stagnation {
    /// Creates a new instance of `Stagnation` for the given city count with the
    /// default thresholds of 50 and 100 stagnant generations.
    pub fn new(city_count: usize) -> Self {
        let n = city_count as Float;

        Self { optimal_iterations: (n.ln() * n) as usize + 1, post_threshold: 50, pre_threshold: 100 }
    }
}

impl Termination for Stagnation {
    fn is_termination(&self, ctx: &RunContext) -> Option<TerminationReason> {
        let generation = ctx.statistics.generation;
        let stagnation = ctx.statistics.stagnation;

        if generation > self.optimal_iterations && stagnation > self.post_threshold {
            Some(TerminationReason::PostThresholdStagnation)
        } else if generation <= self.optimal_iterations && stagnation > self.pre_threshold {
            Some(TerminationReason::PreThresholdStagnation)
        } else {
            None
        }
    }

    fn estimate(&self, ctx: &RunContext) -> Float {
        let threshold =
            if ctx.statistics.generation > self.optimal_iterations { self.post_threshold } else { self.pre_threshold };

        (ctx.statistics.stagnation as Float / threshold as Float).min(1.)
    }
}
