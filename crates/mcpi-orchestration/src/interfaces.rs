//! Orchestration interfaces.

use mcpi_core::{AggregationStrategy, RunResult, SamplingError};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the record of a finished run.
    fn present_run(&self, result: &RunResult);

    /// Present a strategy cross-check.
    fn present_comparison(&self, runs: &[StrategyRun]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// One leg of a strategy cross-check.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    /// Aggregation strategy used for this leg.
    pub strategy: AggregationStrategy,
    /// The run record or the error that ended it.
    pub outcome: Result<RunResult, SamplingError>,
}

impl StrategyRun {
    /// Hit total, if the run succeeded.
    #[must_use]
    pub fn hits(&self) -> Option<u64> {
        self.outcome.as_ref().ok().map(|r| r.total_hits)
    }
}
