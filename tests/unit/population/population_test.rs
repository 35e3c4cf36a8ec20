use super::*;
use crate::helpers::*;
use crate::model::RankedTour;

fn create_ranked(order: &[usize]) -> RankedTour {
    RankedTour::new(create_tour(&create_square_cities(), order))
}

#[test]
fn can_sort_best_first() {
    let population = Population::new(vec![create_ranked(&[0, 2, 1, 3]), create_ranked(&[0, 1, 2, 3])]);

    assert_eq!(population.size(), 2);
    assert_eq!(population.best().unwrap().length(), 4.);
    assert!(population.get(0).unwrap().length() <= population.get(1).unwrap().length());
}

#[test]
fn can_truncate_keeping_best() {
    let mut population =
        Population::new(vec![create_ranked(&[0, 2, 1, 3]), create_ranked(&[0, 1, 2, 3]), create_ranked(&[1, 3, 0, 2])]);

    population.truncate(1);

    assert_eq!(population.size(), 1);
    assert_eq!(population.best().unwrap().length(), 4.);
}

#[test]
fn can_snapshot_elite() {
    let population = Population::new(vec![create_ranked(&[0, 2, 1, 3]), create_ranked(&[0, 1, 2, 3])]);

    let elite = population.elite_snapshot(1);
    assert_eq!(elite.len(), 1);
    assert_eq!(elite[0].length(), 4.);

    // requesting more than available yields the whole population
    assert_eq!(population.elite_snapshot(5).len(), 2);
}
