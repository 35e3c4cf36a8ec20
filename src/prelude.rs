//! This module reimports commonly used types.

pub use crate::evolution::EvolutionConfig;
pub use crate::evolution::EvolutionConfigBuilder;
pub use crate::evolution::EvolutionSimulator;
pub use crate::evolution::GenerationCallback;
pub use crate::evolution::RunContext;
pub use crate::evolution::RunStatistics;
pub use crate::evolution::strategies::{GenerationStrategy, GeneticStrategy};

pub use crate::model::{City, RankedTour, Tour, distance, is_valid_tour};

pub use crate::operators::{create_random_tour, crossover, mutate_swap};

pub use crate::population::{Population, RankRoulette};

pub use crate::search::two_opt_sweep;

pub use crate::termination::{MaxTime, Stagnation, Termination, TerminationReason};

pub use crate::utils::compare_floats;
pub use crate::utils::{DefaultRandom, Random};
pub use crate::utils::{Environment, InfoLogger};
pub use crate::utils::{Float, GenericError, GenericResult, Timer};
