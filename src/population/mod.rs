//! This module contains the ranked population and parent selection logic.

#[cfg(test)]
#[path = "../../tests/unit/population/population_test.rs"]
mod population_test;

mod selection;
pub use self::selection::*;

use crate::model::RankedTour;
use crate::utils::compare_floats;

/// An ordered collection of ranked tours kept sorted ascending by length, so the
/// best candidate is always at index zero.
#[derive(Default)]
pub struct Population {
    individuals: Vec<RankedTour>,
}

impl Population {
    /// Creates a new instance of `Population` from given individuals, sorting them
    /// best-first.
    pub fn new(individuals: Vec<RankedTour>) -> Self {
        let mut population = Self { individuals };
        population.sort();

        population
    }

    /// Returns the best (shortest) tour, if any.
    pub fn best(&self) -> Option<&RankedTour> {
        self.individuals.first()
    }

    /// Returns an individual at the given rank position.
    pub fn get(&self, index: usize) -> Option<&RankedTour> {
        self.individuals.get(index)
    }

    /// Returns individuals in rank order, best first.
    pub fn ranked(&self) -> impl Iterator<Item = &RankedTour> {
        self.individuals.iter()
    }

    /// Returns amount of individuals.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Keeps only the given amount of the best individuals.
    pub fn truncate(&mut self, size: usize) {
        self.individuals.truncate(size);
    }

    /// Returns deep copies of the top individuals, detached from the population so
    /// that its later mutation cannot alter them.
    pub fn elite_snapshot(&self, size: usize) -> Vec<RankedTour> {
        self.individuals.iter().take(size).map(RankedTour::deep_copy).collect()
    }

    fn sort(&mut self) {
        self.individuals.sort_by(|a, b| compare_floats(a.length(), b.length()));
    }
}
