//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

use mcpi_cli::presenter::ReportFormat;
use mcpi_core::{AggregationStrategy, SamplingError, SamplingOptions};

/// Parallel Monte Carlo estimator of pi.
#[derive(Parser, Debug)]
#[command(name = "mcpi", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub mode: Option<Mode>,

    /// Fixed base seed for reproducible runs (default: wall clock).
    #[arg(long, global = true, env = "MCPI_SEED")]
    pub seed: Option<u64>,

    /// Aggregation strategy: partitioned or shared.
    #[arg(long, global = true, default_value = "partitioned", value_parser = parse_strategy)]
    pub strategy: AggregationStrategy,

    /// Quiet mode (only output the estimate).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (seed and per-worker batch sizes).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the run record as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// What to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Sample across a fixed pool of workers.
    Parallel {
        /// Number of workers.
        workers: usize,
        /// Total number of trials.
        trials: u64,
    },
    /// Single-threaded baseline.
    Sequential {
        /// Total number of trials.
        trials: u64,
    },
    /// Run every aggregation strategy with one seed and check they agree.
    Compare {
        /// Number of workers.
        workers: usize,
        /// Total number of trials.
        trials: u64,
    },
}

fn parse_strategy(s: &str) -> Result<AggregationStrategy, SamplingError> {
    s.parse()
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Library options derived from the flags.
    #[must_use]
    pub fn sampling_options(&self) -> SamplingOptions {
        SamplingOptions {
            seed: self.seed,
            strategy: self.strategy,
        }
    }

    /// Report format derived from the flags.
    #[must_use]
    pub fn report_format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        AppConfig::try_parse_from(std::iter::once("mcpi").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn parallel_mode() {
        let config = parse(&["parallel", "4", "1000000"]).unwrap();
        assert_eq!(
            config.mode,
            Some(Mode::Parallel {
                workers: 4,
                trials: 1_000_000
            })
        );
        assert_eq!(config.strategy, AggregationStrategy::Partitioned);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&["sequential", "10", "--seed", "7", "--json"]).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert_eq!(config.sampling_options().seed, Some(7));
    }

    #[test]
    fn strategy_flag() {
        let config = parse(&["--strategy", "shared", "parallel", "2", "10"]).unwrap();
        assert_eq!(config.sampling_options().strategy, AggregationStrategy::Shared);
    }

    #[test]
    fn unknown_strategy_rejected() {
        assert!(parse(&["--strategy", "atomic", "parallel", "2", "10"]).is_err());
    }

    #[test]
    fn non_numeric_rejected() {
        assert!(parse(&["parallel", "four", "10"]).is_err());
        assert!(parse(&["sequential", "1e6"]).is_err());
    }

    #[test]
    fn negative_rejected() {
        assert!(parse(&["parallel", "4", "-10"]).is_err());
    }

    #[test]
    fn missing_argument_rejected() {
        assert!(parse(&["parallel", "4"]).is_err());
        assert!(parse(&["parallel", "4", "10", "12"]).is_err());
    }

    #[test]
    fn zero_is_parsed_and_left_to_validation() {
        let config = parse(&["parallel", "0", "10"]).unwrap();
        assert_eq!(
            config.mode,
            Some(Mode::Parallel {
                workers: 0,
                trials: 10
            })
        );
    }
}
