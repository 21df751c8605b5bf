//! CLI output formatting.

use std::fmt::Write as _;
use std::time::Duration;

use mcpi_core::RunResult;
use mcpi_orchestration::StrategyRun;

use crate::ui::header;

/// Format elapsed time in seconds with microsecond precision.
#[must_use]
pub fn format_seconds(d: Duration) -> String {
    format!("{:.6} s", d.as_secs_f64())
}

/// Format a duration for compact display.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Human-readable report for a finished run.
#[must_use]
pub fn render_report(result: &RunResult, verbose: bool) -> String {
    let mut out = String::new();
    let title = if result.is_sequential() {
        "Sequential run"
    } else {
        "Parallel run"
    };
    let _ = writeln!(out, "{}", header(title));

    if let Some(strategy) = result.strategy {
        let _ = writeln!(out, "Workers: {}", result.workers);
        let _ = writeln!(out, "Aggregation: {strategy}");
    }
    if verbose {
        let _ = writeln!(out, "Seed: {}", result.seed);
        if !result.is_sequential() {
            let sizes: Vec<String> = result.batch_sizes.iter().map(|&s| format_number(s)).collect();
            let _ = writeln!(out, "Batch sizes: [{}]", sizes.join(", "));
        }
    }

    let _ = writeln!(out, "Total trials: {}", format_number(result.total_trials));
    let _ = writeln!(out, "Total hits: {}", format_number(result.total_hits));
    let _ = writeln!(out, "Estimate of pi: {:.6}", result.estimate);
    let _ = writeln!(out, "Absolute error: {:.6}", result.absolute_error());
    match result.partial_elapsed {
        Some(partial) => {
            let _ = writeln!(out, "Total elapsed: {}", format_seconds(result.total_elapsed));
            let _ = writeln!(out, "Partial elapsed: {}", format_seconds(partial));
        }
        None => {
            let _ = writeln!(out, "Elapsed: {}", format_seconds(result.total_elapsed));
        }
    }
    out
}

/// Table of strategy cross-check legs.
#[must_use]
pub fn render_comparison(runs: &[StrategyRun]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", header("Strategy comparison"));
    let _ = writeln!(out, "{:-<60}", "");
    for run in runs {
        match &run.outcome {
            Ok(result) => {
                let _ = writeln!(
                    out,
                    "  {:<12} {:>14} {:>10.6} {:>10} [OK]",
                    run.strategy.name(),
                    format_number(result.total_hits),
                    result.estimate,
                    result
                        .partial_elapsed
                        .map_or_else(|| "-".to_string(), format_duration),
                );
            }
            Err(e) => {
                let _ = writeln!(out, "  {:<12} [ERROR] {e}", run.strategy.name());
            }
        }
    }
    out
}
