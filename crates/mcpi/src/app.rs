//! Application entry point and dispatch.

use anyhow::Result;
use tracing::debug;

use mcpi_cli::presenter::CLIResultPresenter;
use mcpi_core::observers::LoggingObserver;
use mcpi_core::{run_sequential, validate_counts, SamplingError};
use mcpi_orchestration::interfaces::ResultPresenter;
use mcpi_orchestration::{analyze_comparison, compare_strategies, run_parallel_with_observer};

use crate::config::{AppConfig, Mode};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        mcpi_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let Some(mode) = &config.mode else {
        return Err(SamplingError::InvalidArgument(
            "no mode given; use `parallel`, `sequential` or `compare` (see --help)".into(),
        )
        .into());
    };

    let opts = config.sampling_options();
    let presenter =
        CLIResultPresenter::new(config.verbose, config.quiet).with_format(config.report_format());
    debug!(?mode, ?opts, "dispatching");

    match *mode {
        Mode::Parallel { workers, trials } => {
            let result = run_parallel_with_observer(workers, trials, &opts, &LoggingObserver)?;
            presenter.present_run(&result);
        }
        Mode::Sequential { trials } => {
            let result = run_sequential(trials, &opts)?;
            presenter.present_run(&result);
        }
        Mode::Compare { workers, trials } => {
            validate_counts(workers, trials)?;
            let runs = compare_strategies(workers, trials, &opts);
            presenter.present_comparison(&runs);
            analyze_comparison(&runs)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("mcpi").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn runs_parallel() {
        assert!(run(&config(&["parallel", "2", "1000", "--seed", "1", "-q"])).is_ok());
    }

    #[test]
    fn runs_sequential() {
        assert!(run(&config(&["sequential", "1000", "--seed", "1", "-q"])).is_ok());
    }

    #[test]
    fn runs_compare() {
        assert!(run(&config(&["compare", "3", "1000", "--seed", "1", "-q"])).is_ok());
    }

    #[test]
    fn zero_workers_is_argument_error() {
        let err = run(&config(&["parallel", "0", "1000"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SamplingError>(),
            Some(SamplingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn compare_validates_before_running() {
        let err = run(&config(&["compare", "4", "0"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SamplingError>(),
            Some(SamplingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn missing_mode_is_argument_error() {
        let err = run(&config(&["--seed", "3"])).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 2);
    }
}
