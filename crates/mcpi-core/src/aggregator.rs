//! Race-free aggregation of worker hit counts.
//!
//! Two disciplines are supported:
//!
//! - [`ResultSlots`]: one pre-sized slot per worker. Each worker gets
//!   exclusive `&mut` access to its own slot, so nothing is locked; the
//!   orchestrator sums the slots once every worker has been joined.
//! - [`SharedAccumulator`]: a single counter behind a mutex, created at zero
//!   before launch and incremented once per worker.
//!
//! Both final reads consume `self`, so the borrow checker rejects any read
//! while a worker still holds a reference.

use std::fmt;
use std::str::FromStr;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::SamplingError;

/// How worker results are combined into the global hit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationStrategy {
    /// Disjoint per-worker slots summed after the join barrier.
    #[default]
    Partitioned,
    /// One mutex-protected counter incremented once per worker.
    Shared,
}

impl AggregationStrategy {
    /// All strategies, in display order.
    pub const ALL: [Self; 2] = [Self::Partitioned, Self::Shared];

    /// Lowercase name used on the command line and in reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Partitioned => "partitioned",
            Self::Shared => "shared",
        }
    }
}

impl fmt::Display for AggregationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AggregationStrategy {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "partitioned" | "slots" => Ok(Self::Partitioned),
            "shared" | "mutex" => Ok(Self::Shared),
            other => Err(SamplingError::InvalidArgument(format!(
                "unknown aggregation strategy: {other}"
            ))),
        }
    }
}

/// One result slot per worker.
#[derive(Debug)]
pub struct ResultSlots {
    slots: Vec<u64>,
}

impl ResultSlots {
    /// Allocate `workers` zeroed slots.
    pub fn with_workers(workers: usize) -> Result<Self, SamplingError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(workers).map_err(|e| {
            SamplingError::Allocation(format!("result slots for {workers} workers: {e}"))
        })?;
        slots.resize(workers, 0);
        Ok(Self { slots })
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Disjoint mutable slots, in worker order.
    pub fn slots_mut(&mut self) -> std::slice::IterMut<'_, u64> {
        self.slots.iter_mut()
    }

    /// Sum of all slots. Consumes the slots; call only after the join barrier.
    #[must_use]
    pub fn total(self) -> u64 {
        self.slots.iter().sum()
    }
}

#[derive(Debug, Default)]
struct Tally {
    hits: u64,
    contributions: usize,
}

/// A single run-wide counter updated under mutual exclusion.
#[derive(Debug)]
pub struct SharedAccumulator {
    tally: Mutex<Tally>,
}

impl SharedAccumulator {
    /// Create an accumulator explicitly initialised to zero.
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            tally: Mutex::new(Tally::default()),
        }
    }

    /// Add one worker's local count. The lock covers only the addition.
    pub fn add(&self, local_hits: u64) {
        let mut tally = self.tally.lock();
        tally.hits += local_hits;
        tally.contributions += 1;
    }

    /// Number of workers that have contributed so far.
    #[must_use]
    pub fn contributions(&self) -> usize {
        self.tally.lock().contributions
    }

    /// Final total. Consumes the accumulator; call only after the join barrier.
    #[must_use]
    pub fn into_total(self) -> u64 {
        self.tally.into_inner().hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_round_trips_through_name() {
        for strategy in AggregationStrategy::ALL {
            assert_eq!(strategy.name().parse::<AggregationStrategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn strategy_parse_aliases_and_case() {
        assert_eq!(
            "Shared".parse::<AggregationStrategy>().unwrap(),
            AggregationStrategy::Shared
        );
        assert_eq!(
            "slots".parse::<AggregationStrategy>().unwrap(),
            AggregationStrategy::Partitioned
        );
    }

    #[test]
    fn strategy_parse_unknown() {
        assert!(matches!(
            "atomic".parse::<AggregationStrategy>(),
            Err(SamplingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn default_strategy_is_partitioned() {
        assert_eq!(AggregationStrategy::default(), AggregationStrategy::Partitioned);
    }

    #[test]
    fn strategy_serializes_lowercase() {
        let json = serde_json::to_string(&AggregationStrategy::Shared).unwrap();
        assert_eq!(json, "\"shared\"");
    }

    #[test]
    fn slots_start_at_zero() {
        let slots = ResultSlots::with_workers(8).unwrap();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots.total(), 0);
    }

    #[test]
    fn slots_sum_disjoint_writes() {
        let mut slots = ResultSlots::with_workers(4).unwrap();
        for (i, slot) in slots.slots_mut().enumerate() {
            *slot = (i as u64 + 1) * 10;
        }
        assert_eq!(slots.total(), 100);
    }

    #[test]
    fn slots_written_from_threads() {
        let mut slots = ResultSlots::with_workers(4).unwrap();
        std::thread::scope(|s| {
            for (i, slot) in slots.slots_mut().enumerate() {
                s.spawn(move || *slot = i as u64);
            }
        });
        assert_eq!(slots.total(), 6);
    }

    #[test]
    fn accumulator_starts_at_zero() {
        let acc = SharedAccumulator::zeroed();
        assert_eq!(acc.contributions(), 0);
        assert_eq!(acc.into_total(), 0);
    }

    #[test]
    fn accumulator_no_lost_updates() {
        let acc = SharedAccumulator::zeroed();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..1_000 {
                        acc.add(1);
                    }
                });
            }
        });
        assert_eq!(acc.contributions(), 8_000);
        assert_eq!(acc.into_total(), 8_000);
    }
}
