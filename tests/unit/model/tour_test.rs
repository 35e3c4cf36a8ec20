use super::*;
use crate::helpers::*;

#[test]
fn can_compute_euclidean_distance() {
    let a = City::new("a", 0., 0.);
    let b = City::new("b", 3., 4.);

    assert_eq!(distance(&a, &b), 5.);
    assert_eq!(distance(&b, &a), 5.);
}

#[test]
fn can_rank_square_tour_with_closing_edge() {
    let cities = create_square_cities();
    let mut ranked = RankedTour::new(create_tour(&cities, &[0, 1, 2, 3]));

    assert_eq!(ranked.length(), 4.);

    ranked.rank();
    assert_eq!(ranked.length(), 4.);
}

#[test]
fn can_rank_single_city_tour_as_zero() {
    let cities = create_square_cities();
    let ranked = RankedTour::new(create_tour(&cities, &[0]));

    assert_eq!(ranked.length(), 0.);
}

#[test]
fn can_rerank_after_mutation() {
    let cities = create_square_cities();
    let mut ranked = RankedTour::new(create_tour(&cities, &[0, 1, 2, 3]));

    ranked.tour.swap(1, 2);
    ranked.rank();

    assert_eq!(ranked.length(), 2. + 2. * 2_f64.sqrt());
}

#[test]
fn can_detect_permutation_validity() {
    let cities = create_square_cities();

    let shuffled = create_tour(&cities, &[2, 0, 3, 1]);
    assert!(is_valid_tour(&shuffled, &cities));

    let missing = create_tour(&cities, &[0, 1, 2]);
    assert!(!is_valid_tour(&missing, &cities));

    let duplicated = create_tour(&cities, &[0, 1, 2, 2]);
    assert!(!is_valid_tour(&duplicated, &cities));
}

#[test]
fn can_keep_deep_copy_detached_from_mutation() {
    let cities = create_square_cities();
    let mut ranked = RankedTour::new(create_tour(&cities, &[0, 1, 2, 3]));

    let snapshot = ranked.deep_copy();
    ranked.tour.swap(1, 2);
    ranked.rank();

    assert_eq!(snapshot.city_ids(), vec!["a", "b", "c", "d"]);
    assert_eq!(snapshot.length(), 4.);
}
