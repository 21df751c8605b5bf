//! Converting a hit count into the π estimate.

use crate::constants::ESTIMATE_SCALE;

/// `4 * hits / trials`.
///
/// `trials` must be positive; callers validate it before any work starts.
///
/// # Example
/// ```
/// assert_eq!(mcpi_core::estimate(785, 1000), 3.14);
/// ```
#[must_use]
pub fn estimate(hits: u64, trials: u64) -> f64 {
    debug_assert!(trials > 0, "trials validated upstream");
    debug_assert!(hits <= trials);
    ESTIMATE_SCALE * hits as f64 / trials as f64
}

/// Absolute distance between an estimate and π.
#[must_use]
pub fn absolute_error(estimate: f64) -> f64 {
    (std::f64::consts::PI - estimate).abs()
}
