//! MCPI library: application logic for the Monte Carlo estimator.

pub mod app;
pub mod config;
pub mod errors;
