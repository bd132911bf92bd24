//! Execution Strategies
//!
//! Three peer implementations of the same element-wise transform. Each one
//! consumes the shared dataset by reference and returns a fresh output
//! sequence in input order; they differ only in how the work is executed.
//!
//! - [`SequentialLoop`] - indexed loop, the baseline
//! - [`SequentialPipeline`] - single-threaded iterator pipeline
//! - [`ParallelPipeline`] - chunked fan-out over a worker pool

mod parallel;
mod sequential;

pub use parallel::ParallelPipeline;
pub use sequential::{SequentialLoop, SequentialPipeline};

/// The heavy per-element transform shared by all strategies
///
/// Every strategy routes through this single function so that the
/// single-threaded strategies are bit-identical and the parallel strategy is
/// element-wise equal.
#[inline]
#[must_use]
pub fn pow10(x: f64) -> f64 {
    x.powi(10)
}

/// One way of applying the element-wise transform to a dataset
pub trait Strategy: Send + Sync {
    /// Human-readable label used in the benchmark report
    fn label(&self) -> &'static str;

    /// Apply the transform to every element, preserving input order
    ///
    /// The output length always equals the input length, including the
    /// degenerate empty input.
    fn apply(&self, input: &[f64]) -> Vec<f64>;
}
