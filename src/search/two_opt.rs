#[cfg(test)]
#[path = "../../tests/unit/search/two_opt_test.rs"]
mod two_opt_test;

use crate::model::{RankedTour, distance};

/// Runs a single greedy 2-opt sweep over the tour, uncrossing edges in place.
///
/// Only non-adjacent edge pairs `(i, i+1)` and `(j, j+1)` are considered. When the
/// current edges are longer than the exchanged ones, tour positions `i+1` and `j`
/// are swapped and the length is recomputed immediately. The exchange is an
/// endpoint swap, not a full segment reversal, and the sweep is first-improvement
/// and single-pass: it is not iterated to a local optimum within one call,
/// improvements compound over successive generations.
pub fn two_opt_sweep(ranked: &mut RankedTour) {
    let n = ranked.tour.len();

    for i in 0..n.saturating_sub(3) {
        for j in i + 2..n - 1 {
            let d_ab = distance(&ranked.tour[i], &ranked.tour[i + 1]);
            let d_cd = distance(&ranked.tour[j], &ranked.tour[j + 1]);
            let d_ac = distance(&ranked.tour[i], &ranked.tour[j]);
            let d_bd = distance(&ranked.tour[i + 1], &ranked.tour[j + 1]);

            if d_ab + d_cd > d_ac + d_bd {
                ranked.tour.swap(i + 1, j);
                ranked.rank();
            }
        }
    }
}
