//! This module contains the evolution configuration and the simulator which
//! orchestrates generations until a termination criteria is met.

mod config;
pub use self::config::*;

mod simulator;
pub use self::simulator::*;

pub mod strategies;

use crate::model::{City, RankedTour, Tour};
use crate::population::Population;
use crate::utils::{Environment, Timer};
use std::sync::Arc;

/// A callback invoked synchronously once per generation with the best tour found
/// so far, intended for external rendering. It is expected to return promptly.
pub type GenerationCallback = Box<dyn FnMut(&Tour)>;

/// Keeps track of the state of a single evolution run. The context is exclusively
/// owned by one run; concurrent runs require entirely separate instances.
pub struct RunContext {
    /// A reference set of cities every valid tour must visit exactly once.
    pub cities: Vec<Arc<City>>,
    /// A current population, sorted best-first.
    pub population: Population,
    /// A snapshot of the best tours retained across generations.
    pub elite: Vec<RankedTour>,
    /// Environmental parameters of the run.
    pub environment: Environment,
    /// Search progress counters.
    pub statistics: RunStatistics,
}

/// Search progress counters of one evolution run.
pub struct RunStatistics {
    /// A number of completed generations.
    pub generation: usize,
    /// An amount of consecutive generations without improvement beyond tolerance.
    pub stagnation: usize,
    /// A timer started when the run began.
    pub time: Timer,
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self { generation: 0, stagnation: 0, time: Timer::start() }
    }
}
