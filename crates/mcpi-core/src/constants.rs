//! Constants for sampling, seeding, and process exit status.

/// Squared radius of the unit circle; a trial is a hit when `x² + y² <= HIT_RADIUS_SQ`.
pub const HIT_RADIUS_SQ: f64 = 1.0;

/// Ratio between the quarter-square area and the quarter-circle area.
pub const ESTIMATE_SCALE: f64 = 4.0;

/// Odd increment of the SplitMix64 sequence (2^64 / φ).
pub const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Exit codes returned by the `mcpi` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Resource failure: allocation or worker launch.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid arguments (same status clap uses for usage errors).
    pub const ERROR_USAGE: i32 = 2;
    /// Aggregation strategies disagreed during a cross-check.
    pub const ERROR_MISMATCH: i32 = 3;
}
