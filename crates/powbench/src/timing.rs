//! Wall-Clock Timing
//!
//! Monotonic-clock measurement surrounding exactly one strategy run.
//! Dataset generation happens outside of the measured window.

use std::fmt;
use std::time::{Duration, Instant};

/// Elapsed wall-clock time for one strategy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    label: &'static str,
    elapsed: Duration,
}

impl Measurement {
    /// Create a measurement from a label and an elapsed duration
    #[must_use]
    pub const fn new(label: &'static str, elapsed: Duration) -> Self {
        Self { label, elapsed }
    }

    /// Strategy label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Elapsed duration
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed whole milliseconds, as printed in the report
    #[must_use]
    pub const fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ms", self.label, self.elapsed_ms())
    }
}

/// Run `f`, sampling a monotonic clock immediately before and after, and
/// pair its elapsed time with `label`. Returns the closure's output
/// alongside the measurement so results stay available for inspection.
pub fn measure<T>(label: &'static str, f: impl FnOnce() -> T) -> (T, Measurement) {
    let start = Instant::now();
    let output = f();
    let elapsed = start.elapsed();
    (output, Measurement::new(label, elapsed))
}
