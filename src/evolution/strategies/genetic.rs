#[cfg(test)]
#[path = "../../../tests/unit/evolution/strategies/genetic_test.rs"]
mod genetic_test;

use super::*;
use crate::model::is_valid_tour;
use crate::operators::{crossover, mutate_swap};
use crate::population::{Population, RankRoulette};
use crate::search::two_opt_sweep;

/// The default generation step: rank-weighted parent selection, swap mutation and
/// pivot crossover per parent pair, offspring validation, a 2-opt sweep over the
/// surviving pool, elitism and truncation back to the population size.
pub struct GeneticStrategy {
    pop_size: usize,
    elite_size: usize,
}

impl GeneticStrategy {
    /// Creates a new instance of `GeneticStrategy`.
    pub fn new(pop_size: usize, elite_size: usize) -> Self {
        Self { pop_size, elite_size }
    }
}

impl GenerationStrategy for GeneticStrategy {
    fn evolve_once(&self, ctx: &mut RunContext) -> GenericResult<RankedTour> {
        let random = ctx.environment.random.clone();
        let roulette = RankRoulette::new(ctx.population.size());

        let parents = (0..self.pop_size)
            .map(|_| {
                let index = roulette.select_index(random.as_ref());
                ctx.population
                    .get(index)
                    .map(RankedTour::deep_copy)
                    .ok_or_else(|| format!("selection produced an index outside the population: {index}").into())
            })
            .collect::<GenericResult<Vec<_>>>()?;

        let mut candidates = Vec::with_capacity(parents.len() * 3);
        for pair in parents.chunks_exact(2) {
            let (first, second) = (&pair[0], &pair[1]);

            candidates.push(RankedTour::new(mutate_swap(
                &first.tour,
                random.uniform_real(0., 1.),
                random.as_ref(),
            )?));
            candidates.push(RankedTour::new(mutate_swap(
                &second.tour,
                random.uniform_real(0., 1.),
                random.as_ref(),
            )?));

            // both crossover children share one pivot, with parent roles mirrored
            let pivot = random.uniform_real(0., 1.);
            candidates.push(RankedTour::new(crossover(&first.tour, &second.tour, pivot)?));
            candidates.push(RankedTour::new(crossover(&second.tour, &first.tour, pivot)?));
        }
        candidates.extend(parents);

        // crossover children are built positionally and may not be permutations
        let mut survivors =
            candidates.into_iter().filter(|candidate| is_valid_tour(&candidate.tour, &ctx.cities)).collect::<Vec<_>>();

        survivors.iter_mut().for_each(two_opt_sweep);

        // elites of the previous generation compete with the new pool
        survivors.extend(ctx.elite.iter().map(RankedTour::deep_copy));

        let mut population = Population::new(survivors);
        population.truncate(self.pop_size);

        ctx.elite = population.elite_snapshot(self.elite_size);
        ctx.population = population;

        ctx.population
            .best()
            .map(RankedTour::deep_copy)
            .ok_or_else(|| "generation produced an empty population".into())
    }
}
