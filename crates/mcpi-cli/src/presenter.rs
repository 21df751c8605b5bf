//! CLI result presenter.

use mcpi_core::RunResult;
use mcpi_orchestration::interfaces::{ResultPresenter, StrategyRun};

use crate::output::{render_comparison, render_report};
use crate::ui::print_error;

/// How the presenter renders a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Labelled human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON record.
    Json,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    format: ReportFormat,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            format: ReportFormat::Text,
        }
    }

    /// Switch the report format.
    #[must_use]
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// The text that [`ResultPresenter::present_run`] prints.
    #[must_use]
    pub fn render(&self, result: &RunResult) -> String {
        match self.format {
            ReportFormat::Json => match serde_json::to_string_pretty(result) {
                Ok(json) => json,
                Err(e) => {
                    tracing::warn!(error = %e, "could not serialise run result");
                    String::new()
                }
            },
            ReportFormat::Text if self.quiet => format!("{:.6}", result.estimate),
            ReportFormat::Text => render_report(result, self.verbose),
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_run(&self, result: &RunResult) {
        let text = self.render(result);
        println!("{}", text.trim_end());
    }

    fn present_comparison(&self, runs: &[StrategyRun]) {
        if self.quiet {
            return;
        }
        print!("{}", render_comparison(runs));
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
