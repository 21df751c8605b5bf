//! Splitting a run's trials into per-worker batches.

use serde::Serialize;

use crate::error::{ensure_positive, SamplingError};

/// Trials assigned to exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialBatch {
    index: usize,
    trials: u64,
}

impl TrialBatch {
    /// Create a batch of `trials` for worker `index`.
    #[must_use]
    pub fn new(index: usize, trials: u64) -> Self {
        Self { index, trials }
    }

    /// Index of the worker that owns this batch.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of trials in this batch.
    #[must_use]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Whether the batch has no trials (possible when workers outnumber trials).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials == 0
    }
}

/// Reject zero worker or trial counts without allocating anything.
pub fn validate_counts(workers: usize, total_trials: u64) -> Result<(), SamplingError> {
    ensure_positive("workers", workers as u64)?;
    ensure_positive("trials", total_trials)
}

/// Split `total_trials` into `workers` batches.
///
/// Every batch gets `total_trials / workers`; the first
/// `total_trials % workers` batches get one extra trial, so the batch sizes
/// always sum to `total_trials`.
///
/// # Example
/// ```
/// use mcpi_core::partition::partition;
///
/// let batches = partition(7, 3).unwrap();
/// assert_eq!(batches.len(), 3);
/// assert_eq!(batches[0].trials(), 3);
/// assert_eq!(batches[2].index(), 2);
/// assert_eq!(batches.iter().map(|b| b.trials()).sum::<u64>(), 7);
/// ```
pub fn partition(total_trials: u64, workers: usize) -> Result<Vec<TrialBatch>, SamplingError> {
    validate_counts(workers, total_trials)?;

    let mut batches = Vec::new();
    batches.try_reserve_exact(workers).map_err(|e| {
        SamplingError::Allocation(format!("batch table for {workers} workers: {e}"))
    })?;

    let count = workers as u64;
    let base = total_trials / count;
    let remainder = total_trials % count;

    batches.extend((0..workers).map(|i| {
        let extra = u64::from((i as u64) < remainder);
        TrialBatch::new(i, base + extra)
    }));

    Ok(batches)
}

/// Plain batch sizes for `total_trials` over `workers`.
///
/// # Example
/// ```
/// use mcpi_core::partition::batch_sizes;
///
/// assert_eq!(batch_sizes(10, 4).unwrap(), vec![3, 3, 2, 2]);
/// ```
pub fn batch_sizes(total_trials: u64, workers: usize) -> Result<Vec<u64>, SamplingError> {
    Ok(partition(total_trials, workers)?
        .iter()
        .map(TrialBatch::trials)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split() {
        assert_eq!(
            batch_sizes(1_000_000, 4).unwrap(),
            vec![250_000, 250_000, 250_000, 250_000]
        );
    }

    #[test]
    fn remainder_goes_to_first_workers() {
        assert_eq!(batch_sizes(11, 4).unwrap(), vec![3, 3, 3, 2]);
        assert_eq!(batch_sizes(7, 3).unwrap(), vec![3, 2, 2]);
    }

    #[test]
    fn remainder_is_never_dropped() {
        let sizes = batch_sizes(1_000_003, 8).unwrap();
        assert_eq!(sizes.iter().sum::<u64>(), 1_000_003);
    }

    #[test]
    fn more_workers_than_trials() {
        let sizes = batch_sizes(3, 5).unwrap();
        assert_eq!(sizes, vec![1, 1, 1, 0, 0]);
    }

    #[test]
    fn single_worker_gets_everything() {
        assert_eq!(batch_sizes(42, 1).unwrap(), vec![42]);
    }

    #[test]
    fn batch_indices_are_sequential() {
        let batches = partition(10, 3).unwrap();
        for (i, batch) in batches.iter().enumerate() {
            assert_eq!(batch.index(), i);
        }
    }

    #[test]
    fn zero_trials_rejected() {
        assert!(matches!(
            partition(0, 4),
            Err(SamplingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_workers_rejected() {
        assert!(matches!(
            partition(100, 0),
            Err(SamplingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn validate_counts_names_the_bad_argument() {
        assert!(validate_counts(1, 1).is_ok());
        assert!(matches!(
            validate_counts(0, 1),
            Err(SamplingError::InvalidArgument(msg)) if msg.starts_with("workers")
        ));
        assert!(matches!(
            validate_counts(1, 0),
            Err(SamplingError::InvalidArgument(msg)) if msg.starts_with("trials")
        ));
    }

    #[test]
    fn empty_batch() {
        let batch = TrialBatch::new(3, 0);
        assert!(batch.is_empty());
        assert!(!TrialBatch::new(0, 1).is_empty());
    }
}
