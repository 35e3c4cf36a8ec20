#[cfg(test)]
#[path = "../../tests/unit/termination/max_time_test.rs"]
mod max_time_test;

use super::*;

/// An early-stop margin subtracted from the configured limit, in seconds, so the
/// run returns before the budget is fully consumed.
const EARLY_STOP_MARGIN: Float = 0.1;

/// A termination criteria which is in terminated state when the run exceeds its
/// wall-clock budget, minus a small early-stop margin.
pub struct MaxTime {
    limit_in_secs: Float,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { limit_in_secs }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, ctx: &RunContext) -> Option<TerminationReason> {
        let elapsed = ctx.statistics.time.elapsed_secs_as_float();

        (elapsed > self.limit_in_secs - EARLY_STOP_MARGIN).then_some(TerminationReason::Timeout)
    }

    fn estimate(&self, ctx: &RunContext) -> Float {
        (ctx.statistics.time.elapsed_secs_as_float() / self.limit_in_secs).min(1.)
    }
}
