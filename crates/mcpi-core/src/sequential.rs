//! Single-threaded baseline run.
//!
//! Same sampling algorithm as the parallel path, executed on the calling
//! thread with one stream derived as worker 0. With the same base seed it
//! yields exactly the hits of a one-worker parallel run.

use tracing::{debug, info};

use crate::error::{ensure_positive, SamplingError};
use crate::estimator::estimate;
use crate::options::SamplingOptions;
use crate::result::RunResult;
use crate::rng::RandomStream;
use crate::timer::Stopwatch;
use crate::worker::sample_hits;

/// Run `total_trials` trials on the current thread.
pub fn run_sequential(
    total_trials: u64,
    opts: &SamplingOptions,
) -> Result<RunResult, SamplingError> {
    ensure_positive("trials", total_trials)?;

    let seed = opts.base_seed();
    debug!(total_trials, seed, "starting sequential run");

    let watch = Stopwatch::start();
    let mut stream = RandomStream::for_worker(seed, 0);
    let total_hits = sample_hits(total_trials, &mut stream);
    let elapsed = watch.stop();

    let estimate = estimate(total_hits, total_trials);
    info!(total_trials, total_hits, estimate, ?elapsed, "sequential run complete");

    Ok(RunResult {
        total_trials,
        total_hits,
        estimate,
        total_elapsed: elapsed,
        partial_elapsed: None,
        workers: 1,
        batch_sizes: vec![total_trials],
        seed,
        strategy: None,
    })
}
