//! Concrete observer implementations.

use parking_lot::Mutex;
use tracing::debug;

use crate::observer::SamplingObserver;
use crate::worker::WorkerResult;

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SamplingObserver for NoOpObserver {
    fn on_worker_complete(&self, _result: &WorkerResult) {}
}

/// Observer that logs each finished worker at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SamplingObserver for LoggingObserver {
    fn on_worker_complete(&self, result: &WorkerResult) {
        debug!(
            worker = result.worker_index,
            trials = result.trials,
            hits = result.hits,
            "worker finished"
        );
    }
}

/// Observer that records every worker result independently of aggregation.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    results: Mutex<Vec<WorkerResult>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded results, ordered by worker index.
    #[must_use]
    pub fn results(&self) -> Vec<WorkerResult> {
        let mut results = self.results.lock().clone();
        results.sort_by_key(|r| r.worker_index);
        results
    }

    /// Sum of the recorded local hit counts.
    #[must_use]
    pub fn total_hits(&self) -> u64 {
        self.results.lock().iter().map(|r| r.hits).sum()
    }

    /// Number of notifications received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.lock().is_empty()
    }
}

impl SamplingObserver for RecordingObserver {
    fn on_worker_complete(&self, result: &WorkerResult) {
        self.results.lock().push(*result);
    }
}
