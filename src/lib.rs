//! Shared fixtures for the workspace integration tests.

use mcpi_core::{AggregationStrategy, SamplingOptions};

/// Reference value the convergence tests compare against.
pub const PI_REFERENCE: f64 = 3.14159;

/// Options with a fixed base seed and the given strategy.
#[must_use]
pub fn seeded(seed: u64, strategy: AggregationStrategy) -> SamplingOptions {
    SamplingOptions::with_seed(seed).strategy(strategy)
}
