//! Observer hook for worker completion.
//!
//! Observers are notified once per worker, at the moment the worker hands
//! back its [`WorkerResult`]. They are an instrumentation seam: the hit
//! total is never derived from them.

use crate::worker::WorkerResult;

/// Receives one notification per finished worker.
pub trait SamplingObserver: Send + Sync {
    /// Called from the worker's thread after its batch completes.
    fn on_worker_complete(&self, result: &WorkerResult);
}

