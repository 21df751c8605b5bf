//! Error handling and exit codes.

use mcpi_core::constants::exit_codes;
use mcpi_core::SamplingError;

/// Exit status for an error surfaced by [`crate::app::run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SamplingError>()
        .map_or(exit_codes::ERROR_GENERIC, SamplingError::exit_code)
}
