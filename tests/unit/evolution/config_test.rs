use super::*;
use crate::helpers::*;

#[test]
fn can_reject_degenerate_configurations() {
    assert!(EvolutionConfigBuilder::default().with_environment(create_test_environment()).build().is_err());

    assert!(
        EvolutionConfigBuilder::default()
            .with_cities(create_square_city_list())
            .with_environment(create_test_environment())
            .with_population_size(0)
            .build()
            .is_err()
    );

    assert!(
        EvolutionConfigBuilder::default()
            .with_cities(create_square_city_list())
            .with_environment(create_test_environment())
            .with_population_size(7)
            .build()
            .is_err()
    );
}

#[test]
fn can_apply_defaults() {
    let config = EvolutionConfigBuilder::default()
        .with_cities(create_square_city_list())
        .with_environment(create_test_environment())
        .build()
        .unwrap();

    assert_eq!(config.population_size, 10);
    assert_eq!(config.elite_size, 1);
    assert_eq!(config.cities.len(), 4);
}

#[test]
fn can_derive_elite_size_from_population_size() {
    let config = EvolutionConfigBuilder::default()
        .with_cities(create_square_city_list())
        .with_environment(create_test_environment())
        .with_population_size(20)
        .build()
        .unwrap();

    assert_eq!(config.elite_size, 2);
}
