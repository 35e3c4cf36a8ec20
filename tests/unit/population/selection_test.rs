use super::*;
use crate::helpers::*;

#[test]
fn can_select_indices_within_bounds() {
    let roulette = RankRoulette::new(10);
    let random = create_test_random();

    assert!((0..1000).all(|_| roulette.select_index(random.as_ref()) < 10));
}

#[test]
fn can_prefer_better_ranked_candidates() {
    let roulette = RankRoulette::new(10);
    let random = create_test_random();

    let mut counts = [0_usize; 10];
    for _ in 0..10_000 {
        counts[roulette.select_index(random.as_ref())] += 1;
    }

    assert!(counts[0] > counts[9]);
}

#[test]
fn can_select_sole_candidate() {
    let roulette = RankRoulette::new(1);
    let random = create_test_random();

    assert_eq!(roulette.select_index(random.as_ref()), 0);
}
