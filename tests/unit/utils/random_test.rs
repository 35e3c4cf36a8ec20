use super::*;

#[test]
fn can_produce_values_in_range() {
    let random = DefaultRandom::default();

    for _ in 0..1000 {
        let value = random.uniform_int(3, 7);
        assert!((3..=7).contains(&value));

        let value = random.uniform_real(0., 1.);
        assert!((0. ..1.).contains(&value));
    }

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}

#[test]
fn can_repeat_seeded_sequence() {
    let first = DefaultRandom::new_with_seed(42);
    let second = DefaultRandom::new_with_seed(42);

    let lhs = (0..100).map(|_| first.uniform_int(0, 1000)).collect::<Vec<_>>();
    let rhs = (0..100).map(|_| second.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_eq!(lhs, rhs);
}

#[test]
fn can_keep_instances_independent() {
    let first = DefaultRandom::new_with_seed(7);
    let second = DefaultRandom::new_with_seed(7);

    // draws on one instance must not advance the other
    let _ = first.uniform_int(0, 1000);
    let expected = (0..10).map(|_| first.uniform_int(0, 1000)).collect::<Vec<_>>();

    let _ = second.uniform_int(0, 1000);
    let actual = (0..10).map(|_| second.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_eq!(actual, expected);
}
