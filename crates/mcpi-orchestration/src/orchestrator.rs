//! Core orchestration: partition, fan out, join, aggregate, estimate.
//!
//! A run walks [`RunPhase`] strictly in order. Sampling launches exactly one
//! named OS thread per batch inside a `crossbeam` scope, so W batches always
//! run on W distinct threads. The scope is the join barrier: it returns only
//! after every launched worker has finished, and aggregation reads the total
//! only after it returns. If a launch fails, no further workers are started,
//! the ones already running are joined, and the run fails.

use std::fmt;
use std::io;
use std::panic;

use crossbeam::thread as scoped;
use tracing::{debug, info, warn};

use mcpi_core::observers::NoOpObserver;
use mcpi_core::{
    estimate, partition, AggregationStrategy, ResultSlots, RunResult, RunTimer, SamplingError,
    SamplingObserver, SamplingOptions, SharedAccumulator, TrialBatch, Worker, WorkerResult,
};

use crate::interfaces::StrategyRun;

/// Phases of a parallel run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunPhase {
    Configuring,
    Partitioning,
    Sampling,
    Aggregating,
    Estimating,
    Reporting,
    Done,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configuring => "configuring",
            Self::Partitioning => "partitioning",
            Self::Sampling => "sampling",
            Self::Aggregating => "aggregating",
            Self::Estimating => "estimating",
            Self::Reporting => "reporting",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

fn enter(phase: RunPhase) {
    debug!(%phase, "run phase");
}

/// Checked before each worker thread is spawned.
type LaunchCheck<'a> = &'a dyn Fn(usize) -> io::Result<()>;

fn always_launch(_worker_index: usize) -> io::Result<()> {
    Ok(())
}

/// Aggregation state, created zeroed before any worker launches.
enum Aggregation {
    Slots(ResultSlots),
    Shared(SharedAccumulator),
}

impl Aggregation {
    fn prepare(strategy: AggregationStrategy, workers: usize) -> Result<Self, SamplingError> {
        Ok(match strategy {
            AggregationStrategy::Partitioned => Self::Slots(ResultSlots::with_workers(workers)?),
            AggregationStrategy::Shared => Self::Shared(SharedAccumulator::zeroed()),
        })
    }

    /// Launch one thread per worker and return once every launched worker
    /// has been joined.
    fn sample(
        &mut self,
        crew: Vec<Worker>,
        observer: &dyn SamplingObserver,
        check: LaunchCheck<'_>,
    ) -> Result<(), SamplingError> {
        match self {
            Self::Slots(slots) => fan_out(
                crew,
                slots.slots_mut(),
                |slot, result| *slot = result.hits,
                observer,
                check,
            ),
            Self::Shared(acc) => {
                let acc = &*acc;
                fan_out(
                    crew,
                    std::iter::repeat(acc),
                    |acc, result| acc.add(result.hits),
                    observer,
                    check,
                )
            }
        }
    }

    fn total(self, busy_workers: usize) -> u64 {
        match self {
            Self::Slots(slots) => slots.total(),
            Self::Shared(acc) => {
                debug_assert_eq!(acc.contributions(), busy_workers, "one increment per worker");
                acc.into_total()
            }
        }
    }
}

/// Spawn each worker on its own thread, handing its result to `deliver`
/// together with the matching sink.
///
/// Empty batches report nothing: they never reach `deliver` or `observer`.
fn fan_out<S, D>(
    crew: Vec<Worker>,
    sinks: impl Iterator<Item = S>,
    deliver: D,
    observer: &dyn SamplingObserver,
    check: LaunchCheck<'_>,
) -> Result<(), SamplingError>
where
    S: Send,
    D: Fn(S, &WorkerResult) + Sync,
{
    let deliver = &deliver;
    let launched = scoped::scope(|scope| -> Result<(), SamplingError> {
        for (worker, sink) in crew.into_iter().zip(sinks) {
            let index = worker.batch().index();
            check(index)
                .and_then(|()| {
                    scope
                        .builder()
                        .name(format!("mcpi-worker-{index}"))
                        .spawn(move |_| {
                            let result = worker.run();
                            if result.trials > 0 {
                                deliver(sink, &result);
                                observer.on_worker_complete(&result);
                            }
                        })
                })
                .map(drop)
                .map_err(|e| {
                    warn!(worker = index, error = %e, "worker launch failed; joining launched workers");
                    SamplingError::WorkerLaunch(format!("worker {index}: {e}"))
                })?;
        }
        Ok(())
    });
    launched.unwrap_or_else(|payload| panic::resume_unwind(payload))
}

fn hire(batches: &[TrialBatch], seed: u64) -> Result<Vec<Worker>, SamplingError> {
    let mut crew = Vec::new();
    crew.try_reserve_exact(batches.len()).map_err(|e| {
        SamplingError::Allocation(format!("{} worker streams: {e}", batches.len()))
    })?;
    crew.extend(batches.iter().map(|batch| Worker::new(*batch, seed)));
    Ok(crew)
}

/// Estimate π with `total_trials` trials spread over `workers` parallel workers.
pub fn run_parallel(
    workers: usize,
    total_trials: u64,
    opts: &SamplingOptions,
) -> Result<RunResult, SamplingError> {
    run_parallel_with_observer(workers, total_trials, opts, &NoOpObserver::new())
}

/// Like [`run_parallel`], notifying `observer` as each non-empty worker finishes.
pub fn run_parallel_with_observer(
    workers: usize,
    total_trials: u64,
    opts: &SamplingOptions,
    observer: &dyn SamplingObserver,
) -> Result<RunResult, SamplingError> {
    run_checked(workers, total_trials, opts, observer, &always_launch)
}

fn run_checked(
    workers: usize,
    total_trials: u64,
    opts: &SamplingOptions,
    observer: &dyn SamplingObserver,
    check: LaunchCheck<'_>,
) -> Result<RunResult, SamplingError> {
    let mut timer = RunTimer::start();

    enter(RunPhase::Configuring);
    let seed = opts.base_seed();
    let strategy = opts.strategy;

    enter(RunPhase::Partitioning);
    let batches = partition(total_trials, workers)?;
    if workers as u64 > total_trials {
        warn!(workers, total_trials, "more workers than trials; some workers sample nothing");
    }
    let batch_sizes: Vec<u64> = batches.iter().map(TrialBatch::trials).collect();
    let busy_workers = batches.iter().filter(|b| !b.is_empty()).count();
    let crew = hire(&batches, seed)?;
    let mut aggregation = Aggregation::prepare(strategy, workers)?;

    enter(RunPhase::Sampling);
    timer.begin_partial();
    aggregation.sample(crew, observer, check)?;
    timer.end_partial();

    enter(RunPhase::Aggregating);
    let total_hits = aggregation.total(busy_workers);

    enter(RunPhase::Estimating);
    let estimate = estimate(total_hits, total_trials);

    enter(RunPhase::Reporting);
    let timings = timer.finish();
    info!(
        workers,
        total_trials,
        total_hits,
        estimate,
        %strategy,
        total = ?timings.total,
        partial = ?timings.partial,
        "parallel run complete"
    );
    let result = RunResult {
        total_trials,
        total_hits,
        estimate,
        total_elapsed: timings.total,
        partial_elapsed: timings.partial,
        workers,
        batch_sizes,
        seed,
        strategy: Some(strategy),
    };

    enter(RunPhase::Done);
    Ok(result)
}

/// Run the same workload once per aggregation strategy with one base seed.
pub fn compare_strategies(
    workers: usize,
    total_trials: u64,
    opts: &SamplingOptions,
) -> Vec<StrategyRun> {
    let base = SamplingOptions::with_seed(opts.base_seed());
    AggregationStrategy::ALL
        .iter()
        .map(|&strategy| StrategyRun {
            strategy,
            outcome: run_parallel(workers, total_trials, &base.strategy(strategy)),
        })
        .collect()
}

/// Check a cross-check: every leg must have succeeded and found the same
/// hit total.
///
/// The first failed leg's error wins over any comparison.
pub fn analyze_comparison(runs: &[StrategyRun]) -> Result<(), SamplingError> {
    if let Some(err) = runs.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(err.clone());
    }
    let mut hits = runs.iter().filter_map(StrategyRun::hits);
    let Some(first) = hits.next() else {
        return Err(SamplingError::InvalidArgument("no runs to compare".into()));
    };
    if hits.any(|h| h != first) {
        return Err(SamplingError::Mismatch);
    }
    Ok(())
}
