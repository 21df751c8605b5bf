//! Error type for sampling runs.

use crate::constants::exit_codes;

/// Error type for sampling runs.
///
/// Every variant is terminal for the run: nothing is retried and no
/// partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SamplingError {
    /// Zero or otherwise invalid worker/trial counts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Per-worker bookkeeping could not be allocated.
    #[error("allocation failed: {0}")]
    Allocation(String),

    /// The worker pool could not be started.
    #[error("worker launch failed: {0}")]
    WorkerLaunch(String),

    /// Aggregation strategies disagreed on the hit total for the same seed.
    #[error("hit totals differ between aggregation strategies")]
    Mismatch,
}

impl SamplingError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => exit_codes::ERROR_USAGE,
            Self::Allocation(_) | Self::WorkerLaunch(_) => exit_codes::ERROR_GENERIC,
            Self::Mismatch => exit_codes::ERROR_MISMATCH,
        }
    }
}

/// Reject a zero count before anything is allocated.
pub(crate) fn ensure_positive(name: &str, value: u64) -> Result<(), SamplingError> {
    if value == 0 {
        return Err(SamplingError::InvalidArgument(format!(
            "{name} must be a positive integer"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_error_display() {
        let err = SamplingError::InvalidArgument("workers must be a positive integer".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: workers must be a positive integer"
        );

        let err = SamplingError::WorkerLaunch("no threads".into());
        assert_eq!(err.to_string(), "worker launch failed: no threads");
    }

    #[test]
    fn exit_codes_by_variant() {
        assert_eq!(SamplingError::InvalidArgument(String::new()).exit_code(), 2);
        assert_eq!(SamplingError::Allocation(String::new()).exit_code(), 1);
        assert_eq!(SamplingError::WorkerLaunch(String::new()).exit_code(), 1);
        assert_eq!(SamplingError::Mismatch.exit_code(), 3);
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive("trials", 1).is_ok());
        assert!(matches!(
            ensure_positive("trials", 0),
            Err(SamplingError::InvalidArgument(msg)) if msg.contains("trials")
        ));
    }
}
