//! Engine run metrics.
//!
//! Timings are only collected on the verbose path; the plain entry points do
//! not touch the clock. They never influence the result.

use std::time::{Duration, Instant};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Input bounding, glyph normalization and the trigger scan.
    pub prepare: Duration,
    /// Signature matching.
    pub detect: Duration,
    /// Running the matched game's score rule.
    pub extract: Duration,
}

/// Small stopwatch that hands out lap times.
#[derive(Debug)]
pub(crate) struct Laps {
    started: Instant,
    last: Instant,
}

impl Laps {
    pub fn start() -> Self {
        let now = Instant::now();
        Laps { started: now, last: now }
    }

    /// Time since the previous lap (or the start).
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let lap = now - self.last;
        self.last = now;
        lap
    }

    pub fn total(&self) -> Duration {
        self.last - self.started
    }
}
