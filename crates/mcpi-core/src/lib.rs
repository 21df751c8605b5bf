//! # mcpi-core
//!
//! Core library for the MCPI parallel Monte Carlo estimator.
//! Implements work partitioning, per-worker random streams, the sampling
//! loop, race-free aggregation, timing, and the final ratio estimate.

pub mod aggregator;
pub mod constants;
pub mod error;
pub mod estimator;
pub mod observer;
pub mod observers;
pub mod options;
pub mod partition;
pub mod result;
pub mod rng;
pub mod sequential;
pub mod timer;
pub mod worker;

// Re-exports
pub use aggregator::{AggregationStrategy, ResultSlots, SharedAccumulator};
pub use constants::exit_codes;
pub use error::SamplingError;
pub use estimator::estimate;
pub use observer::SamplingObserver;
pub use options::SamplingOptions;
pub use partition::{batch_sizes, partition, validate_counts, TrialBatch};
pub use result::RunResult;
pub use rng::{derive_seed, RandomStream};
pub use sequential::run_sequential;
pub use timer::{RunTimer, RunTimings, Stopwatch};
pub use worker::{Worker, WorkerResult};

