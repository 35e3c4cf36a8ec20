#[cfg(test)]
#[path = "../../tests/unit/model/tour_test.rs"]
mod tour_test;

use crate::model::{City, distance};
use crate::utils::Float;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// An ordered sequence of cities interpreted as a closed cycle: after the last
/// city the salesman returns to the first one.
pub type Tour = Vec<Arc<City>>;

/// A tour with a cached cycle length used as fitness, where lower is better.
#[derive(Clone, Debug)]
pub struct RankedTour {
    /// A candidate visiting order.
    pub tour: Tour,
    length: Float,
}

impl RankedTour {
    /// Creates a new instance of `RankedTour` with the cycle length computed.
    pub fn new(tour: Tour) -> Self {
        let mut ranked = Self { tour, length: 0. };
        ranked.rank();

        ranked
    }

    /// Recomputes the cached cycle length as the sum of distances between consecutive
    /// cities plus the closing edge from the last city back to the first. Must be
    /// called after every mutation of the tour, otherwise the cached value is stale.
    pub fn rank(&mut self) {
        let closing = match (self.tour.first(), self.tour.last()) {
            (Some(first), Some(last)) => distance(last, first),
            _ => 0.,
        };

        self.length = self.tour.windows(2).map(|pair| distance(&pair[0], &pair[1])).sum::<Float>() + closing;
    }

    /// Returns the cached cycle length.
    pub fn length(&self) -> Float {
        self.length
    }

    /// Returns the visiting order as city identifiers.
    pub fn city_ids(&self) -> Vec<String> {
        self.tour.iter().map(|city| city.id.clone()).collect()
    }

    /// Creates an owned snapshot which later mutation of this instance cannot alter.
    pub fn deep_copy(&self) -> Self {
        Self { tour: self.tour.clone(), length: self.length }
    }
}

/// Checks whether the tour visits every city from the reference set exactly once.
/// Tours violating this (e.g. crossover offspring) are expected to be discarded.
pub fn is_valid_tour(tour: &Tour, all_cities: &[Arc<City>]) -> bool {
    if tour.len() != all_cities.len() {
        return false;
    }

    let visited = tour.iter().map(|city| city.id.as_str()).collect::<FxHashSet<_>>();

    visited.len() == tour.len() && all_cities.iter().all(|city| visited.contains(city.id.as_str()))
}
