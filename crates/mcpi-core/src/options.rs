//! Run options.

use crate::aggregator::AggregationStrategy;
use crate::rng::entropy_base_seed;

/// Options for a sampling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplingOptions {
    /// Fixed base seed for reproducible runs; `None` seeds from the wall clock.
    pub seed: Option<u64>,
    /// How worker results are combined.
    pub strategy: AggregationStrategy,
}

impl SamplingOptions {
    /// Options with a fixed base seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Replace the aggregation strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: AggregationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Base seed for this run. Read once, at run start.
    #[must_use]
    pub fn base_seed(&self) -> u64 {
        self.seed.unwrap_or_else(entropy_base_seed)
    }
}
