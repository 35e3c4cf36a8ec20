#[cfg(test)]
#[path = "../../tests/unit/population/selection_test.rs"]
mod selection_test;

use crate::utils::{Float, Random};

/// Implements rank-weighted roulette selection over a population sorted best-first:
/// the candidate at rank `i` gets a slot of width `pop_size - i`, so the best
/// candidate is the most likely pick while the worst one keeps a nonzero floor
/// probability with a slot of width one.
pub struct RankRoulette {
    pop_size: usize,
    total_width: usize,
}

impl RankRoulette {
    /// Creates a new instance of `RankRoulette` for the given population size.
    pub fn new(pop_size: usize) -> Self {
        assert!(pop_size > 0);

        Self { pop_size, total_width: pop_size * (pop_size + 1) / 2 }
    }

    /// Selects one index from `[0, pop_size)`: draws a target uniformly from
    /// `[0, total_width)` and walks cumulative slot widths until the running sum
    /// exceeds the target.
    pub fn select_index(&self, random: &(dyn Random)) -> usize {
        let target = random.uniform_real(0., self.total_width as Float);

        let mut running = 0_usize;
        for index in 0..self.pop_size {
            running += self.pop_size - index;
            if running as Float > target {
                return index;
            }
        }

        self.pop_size - 1
    }
}
