//! This module contains logic which defines when the evolution should stop
//! searching for a better tour.

use crate::evolution::RunContext;
use crate::utils::Float;
use std::fmt;

mod max_time;
pub use self::max_time::MaxTime;

mod stagnation;
pub use self::stagnation::Stagnation;

/// A trait which specifies criteria when the evolution should stop searching.
pub trait Termination {
    /// Returns a termination reason once the criteria is met.
    fn is_termination(&self, ctx: &RunContext) -> Option<TerminationReason>;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, ctx: &RunContext) -> Float;
}

/// Specifies why the evolution has stopped. All variants are terminal: the run
/// loop never resumes after reporting one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TerminationReason {
    /// The configured wall-clock budget is exhausted.
    Timeout,
    /// The best tour stopped improving after the expected convergence point.
    PostThresholdStagnation,
    /// The best tour stopped improving long before the expected convergence point.
    PreThresholdStagnation,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::Timeout => write!(f, "timeout"),
            TerminationReason::PostThresholdStagnation => write!(f, "stagnation after n*ln(n) generations"),
            TerminationReason::PreThresholdStagnation => write!(f, "stagnation before n*ln(n) generations"),
        }
    }
}
