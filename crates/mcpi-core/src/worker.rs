//! The sampling loop run by each worker.

use serde::Serialize;

use crate::constants::HIT_RADIUS_SQ;
use crate::partition::TrialBatch;
use crate::rng::RandomStream;

/// Local outcome of one worker, produced exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkerResult {
    /// Index of the worker that produced this result.
    pub worker_index: usize,
    /// Trials the worker ran.
    pub trials: u64,
    /// Trials that landed inside the quarter circle.
    pub hits: u64,
}

/// Whether the point `(x, y)` lies inside the quarter circle (boundary included).
#[inline]
#[must_use]
pub fn is_hit(x: f64, y: f64) -> bool {
    x * x + y * y <= HIT_RADIUS_SQ
}

/// Draw `trials` points from `stream` and count the hits.
///
/// Draws `x` then `y` for every trial. Never blocks and never touches
/// anything except `stream`.
#[must_use]
pub fn sample_hits(trials: u64, stream: &mut RandomStream) -> u64 {
    let mut hits = 0u64;
    for _ in 0..trials {
        let x = stream.next_unit();
        let y = stream.next_unit();
        if is_hit(x, y) {
            hits += 1;
        }
    }
    hits
}

/// One unit of concurrency: a batch and the stream it samples from.
#[derive(Debug)]
pub struct Worker {
    batch: TrialBatch,
    stream: RandomStream,
}

impl Worker {
    /// Create the worker for `batch`, seeding its stream from the run's base seed.
    #[must_use]
    pub fn new(batch: TrialBatch, base_seed: u64) -> Self {
        Self {
            stream: RandomStream::for_worker(base_seed, batch.index()),
            batch,
        }
    }

    /// The batch this worker will run.
    #[must_use]
    pub fn batch(&self) -> &TrialBatch {
        &self.batch
    }

    /// Run the whole batch and hand back the local count.
    ///
    /// Consumes the worker, so a stream is used by one batch only.
    #[must_use]
    pub fn run(mut self) -> WorkerResult {
        let hits = if self.batch.is_empty() {
            0
        } else {
            sample_hits(self.batch.trials(), &mut self.stream)
        };
        WorkerResult {
            worker_index: self.batch.index(),
            trials: self.batch.trials(),
            hits,
        }
    }
}
