use super::*;
use crate::evolution::RunStatistics;
use crate::helpers::*;
use crate::operators::create_random_tour;

fn create_context_with_population(pop_size: usize) -> RunContext {
    let cities = create_square_cities();
    let environment = create_test_environment();

    let individuals = (0..pop_size)
        .map(|_| {
            RankedTour::new(create_random_tour(cities.len(), &cities, true, environment.random.as_ref()).unwrap())
        })
        .collect();

    RunContext {
        cities,
        population: Population::new(individuals),
        elite: vec![],
        environment,
        statistics: RunStatistics::default(),
    }
}

#[test]
fn can_keep_population_size_and_validity() {
    let mut ctx = create_context_with_population(10);
    let strategy = GeneticStrategy::new(10, 1);

    let best = strategy.evolve_once(&mut ctx).unwrap();

    assert_eq!(ctx.population.size(), 10);
    assert!(ctx.population.ranked().all(|ranked| is_valid_tour(&ranked.tour, &ctx.cities)));
    assert_eq!(ctx.elite.len(), 1);
    assert_eq!(best.length(), ctx.population.best().unwrap().length());
}

#[test]
fn can_keep_population_sorted() {
    let mut ctx = create_context_with_population(10);
    let strategy = GeneticStrategy::new(10, 1);

    strategy.evolve_once(&mut ctx).unwrap();

    let lengths = ctx.population.ranked().map(|ranked| ranked.length()).collect::<Vec<_>>();
    assert!(lengths.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn can_never_worsen_best_with_elitism() {
    let mut ctx = create_context_with_population(10);
    let strategy = GeneticStrategy::new(10, 1);

    let mut previous = strategy.evolve_once(&mut ctx).unwrap().length();
    for _ in 0..20 {
        let best = strategy.evolve_once(&mut ctx).unwrap().length();
        assert!(best <= previous);
        previous = best;
    }
}
