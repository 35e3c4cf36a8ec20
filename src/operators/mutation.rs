#[cfg(test)]
#[path = "../../tests/unit/operators/mutation_test.rs"]
mod mutation_test;

use crate::model::Tour;
use crate::utils::{Float, GenericResult, Random};

/// Produces a new tour with `floor(fraction * len)` random position swaps applied.
/// Swap indices are drawn independently, so an index can be paired with itself and
/// such degenerate swap is a no-op. Swapping positions never breaks the
/// permutation invariant.
pub fn mutate_swap(tour: &Tour, fraction: Float, random: &(dyn Random)) -> GenericResult<Tour> {
    if !(0. ..=1.).contains(&fraction) {
        return Err("mutation fraction is not in [0, 1] range".into());
    }

    let mut mutated = tour.clone();
    let swaps = (fraction * tour.len() as Float) as usize;

    for _ in 0..swaps {
        let first = random.uniform_int(0, mutated.len() as i32 - 1) as usize;
        let second = random.uniform_int(0, mutated.len() as i32 - 1) as usize;
        mutated.swap(first, second);
    }

    Ok(mutated)
}
