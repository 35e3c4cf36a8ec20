#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use super::strategies::{GenerationStrategy, GeneticStrategy};
use super::GenerationCallback;
use crate::model::City;
use crate::termination::{MaxTime, Stagnation, Termination};
use crate::utils::{Environment, Float, GenericResult};
use std::sync::Arc;

/// A configuration which controls one evolution run.
pub struct EvolutionConfig {
    /// Cities to route through.
    pub cities: Vec<Arc<City>>,
    /// Population size kept after each generation.
    pub population_size: usize,
    /// Amount of best tours retained unconditionally across generations.
    pub elite_size: usize,
    /// Environmental parameters of the run.
    pub environment: Environment,
    /// A generation step implementation.
    pub strategy: Box<dyn GenerationStrategy>,
    /// A criteria which decides when the search stops.
    pub termination: Box<dyn Termination>,
    /// An optional per-generation rendering hook.
    pub callback: Option<GenerationCallback>,
}

/// Provides a configurable way to build an evolution config using fluent interface.
pub struct EvolutionConfigBuilder {
    cities: Vec<City>,
    max_duration_secs: Float,
    population_size: usize,
    elite_size: Option<usize>,
    environment: Option<Environment>,
    strategy: Option<Box<dyn GenerationStrategy>>,
    callback: Option<GenerationCallback>,
}

impl Default for EvolutionConfigBuilder {
    fn default() -> Self {
        Self {
            cities: vec![],
            max_duration_secs: 0.,
            population_size: 10,
            elite_size: None,
            environment: None,
            strategy: None,
            callback: None,
        }
    }
}

impl EvolutionConfigBuilder {
    /// Sets cities to route through.
    pub fn with_cities(mut self, cities: Vec<City>) -> Self {
        self.cities = cities;
        self
    }

    /// Sets the wall-clock budget in seconds. A non-positive value means unbounded
    /// and switches the run to stagnation-based termination. Default is unbounded.
    pub fn with_max_duration_secs(mut self, secs: Float) -> Self {
        self.max_duration_secs = secs;
        self
    }

    /// Sets the population size. Must be even so parents form pairs. Default is 10.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the elite size. Default is a tenth of the population size.
    pub fn with_elite_size(mut self, size: usize) -> Self {
        self.elite_size = Some(size);
        self
    }

    /// Sets the environment of the run.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets a custom generation strategy replacing the default genetic one.
    pub fn with_strategy(mut self, strategy: Box<dyn GenerationStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Sets a callback invoked once per generation with the best tour found so far.
    pub fn with_generation_callback(mut self, callback: GenerationCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Builds the evolution config, validating configured values.
    pub fn build(self) -> GenericResult<EvolutionConfig> {
        if self.cities.is_empty() {
            return Err("at least one city has to be specified".into());
        }
        if self.population_size == 0 {
            return Err("population size must be positive".into());
        }
        if self.population_size % 2 != 0 {
            return Err(
                format!("population size must be even to form parent pairs, got {}", self.population_size).into()
            );
        }

        let environment = self.environment.unwrap_or_default();
        let logger = environment.logger.clone();
        let elite_size = self.elite_size.unwrap_or(self.population_size / 10);

        let termination: Box<dyn Termination> = if self.max_duration_secs > 0. {
            (logger)(format!("configured to use max-time: {}s", self.max_duration_secs).as_str());
            Box::new(MaxTime::new(self.max_duration_secs))
        } else {
            (logger)("configured to use stagnation-based termination");
            Box::new(Stagnation::new(self.cities.len()))
        };

        Ok(EvolutionConfig {
            strategy: self
                .strategy
                .unwrap_or_else(|| Box::new(GeneticStrategy::new(self.population_size, elite_size))),
            cities: self.cities.into_iter().map(Arc::new).collect(),
            population_size: self.population_size,
            elite_size,
            environment,
            termination,
            callback: self.callback,
        })
    }
}
