//! Monotonic timing of a run.

use std::time::{Duration, Instant};

/// A started monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start timing now.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since start.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop and return the elapsed time.
    #[must_use]
    pub fn stop(self) -> Duration {
        self.start.elapsed()
    }
}

/// Elapsed times of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTimings {
    /// From before resource setup to after teardown.
    pub total: Duration,
    /// From just before launching workers to just after the last join.
    pub partial: Option<Duration>,
}

/// Tracks the total window and the compute-only partial window.
#[derive(Debug)]
pub struct RunTimer {
    total: Stopwatch,
    partial: Option<Stopwatch>,
    partial_elapsed: Option<Duration>,
}

impl RunTimer {
    /// Open the total window.
    #[must_use]
    pub fn start() -> Self {
        Self {
            total: Stopwatch::start(),
            partial: None,
            partial_elapsed: None,
        }
    }

    /// Open the partial window, immediately before workers are launched.
    pub fn begin_partial(&mut self) {
        self.partial = Some(Stopwatch::start());
    }

    /// Close the partial window, immediately after the last join.
    pub fn end_partial(&mut self) {
        if let Some(watch) = self.partial.take() {
            self.partial_elapsed = Some(watch.stop());
        }
    }

    /// Close the total window.
    #[must_use]
    pub fn finish(self) -> RunTimings {
        RunTimings {
            total: self.total.stop(),
            partial: self.partial_elapsed,
        }
    }
}
