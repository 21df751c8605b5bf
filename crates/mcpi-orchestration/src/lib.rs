//! # mcpi-orchestration
//!
//! Parallel run orchestration, strategy cross-checks, and presenter interfaces.

pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{ResultPresenter, StrategyRun};
pub use orchestrator::{
    analyze_comparison, compare_strategies, run_parallel, run_parallel_with_observer, RunPhase,
};
