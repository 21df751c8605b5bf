//! The read-only record produced by a run.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::aggregator::AggregationStrategy;
use crate::estimator::absolute_error;

/// Outcome of one parallel or sequential run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// Trials requested and run.
    pub total_trials: u64,
    /// Trials inside the quarter circle.
    pub total_hits: u64,
    /// `4 * total_hits / total_trials`.
    pub estimate: f64,
    /// Whole run, setup to teardown.
    #[serde(rename = "total_elapsed_secs", serialize_with = "as_secs")]
    pub total_elapsed: Duration,
    /// Sampling and join only; `None` for the sequential baseline.
    #[serde(rename = "partial_elapsed_secs", serialize_with = "opt_as_secs")]
    pub partial_elapsed: Option<Duration>,
    /// Worker count (1 for the sequential baseline).
    pub workers: usize,
    /// Trials per worker, in worker order.
    pub batch_sizes: Vec<u64>,
    /// Base seed the worker streams were derived from.
    pub seed: u64,
    /// Aggregation discipline; `None` for the sequential baseline.
    pub strategy: Option<AggregationStrategy>,
}

impl RunResult {
    /// Distance between the estimate and π.
    #[must_use]
    pub fn absolute_error(&self) -> f64 {
        absolute_error(self.estimate)
    }

    /// Whether this result came from the single-threaded baseline.
    #[must_use]
    pub fn is_sequential(&self) -> bool {
        self.partial_elapsed.is_none()
    }
}

fn as_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

fn opt_as_secs<S: Serializer>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
    match d {
        Some(d) => s.serialize_some(&d.as_secs_f64()),
        None => s.serialize_none(),
    }
}
