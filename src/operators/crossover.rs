#[cfg(test)]
#[path = "../../tests/unit/operators/crossover_test.rs"]
mod crossover_test;

use crate::model::Tour;
use crate::utils::{Float, GenericResult};

/// Recombines two parent tours around a single pivot: the prefix of `a` up to
/// `floor(pivot_ratio * len)` is glued to the suffix of `b` from the same index.
/// A ratio of zero reproduces `b`, a ratio of one reproduces `a`.
///
/// The child is assembled positionally, not by set membership, so it may contain
/// duplicate cities and omit others. Producing such non-permutation offspring is
/// deliberate; callers validate children and discard invalid ones.
pub fn crossover(a: &Tour, b: &Tour, pivot_ratio: Float) -> GenericResult<Tour> {
    if a.len() != b.len() {
        return Err("parent lengths are not the same".into());
    }
    if !(0. ..=1.).contains(&pivot_ratio) {
        return Err("pivot ratio is not in [0, 1] range".into());
    }

    let pivot = (pivot_ratio * a.len() as Float) as usize;

    Ok(a.iter().take(pivot).chain(b.iter().skip(pivot)).cloned().collect())
}
