//! Powbench - Element-Wise Transform Strategy Benchmark
//!
//! This crate benchmarks three ways of applying the same CPU-bound
//! transformation (raising every element of a large `f64` collection to the
//! 10th power) and reports wall-clock elapsed time for each:
//!
//! - [`strategy::SequentialLoop`] - traditional indexed loop
//! - [`strategy::SequentialPipeline`] - single-threaded iterator pipeline
//! - [`strategy::ParallelPipeline`] - chunked fan-out over a worker pool
//!
//! All three strategies consume the same immutable dataset and produce
//! element-wise equal output sequences in input order; only the execution
//! strategy differs.
//!
//! # Example
//!
//! ```rust
//! use powbench::{BenchConfig, BenchResult, Harness};
//!
//! fn main() -> BenchResult<()> {
//!     let config = BenchConfig::test()?;
//!     let harness = Harness::new(config)?;
//!
//!     let report = harness.run()?;
//!     for measurement in report.measurements() {
//!         println!("{measurement}");
//!     }
//!     Ok(())
//! }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    missing_docs
)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::complexity,
    clippy::default_numeric_fallback,
    clippy::manual_let_else,
    clippy::missing_errors_doc,
    clippy::float_cmp
)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod strategy;
pub mod timing;

// Re-exports for convenience
pub use config::BenchConfig;
pub use dataset::Dataset;
pub use error::{BenchError, BenchResult};
pub use harness::{Harness, Report};
pub use strategy::{ParallelPipeline, SequentialLoop, SequentialPipeline, Strategy};
pub use timing::Measurement;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        #[allow(clippy::const_is_empty)]
        {
            assert!(!VERSION.is_empty());
        }
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_harness_from_test_config() -> BenchResult<()> {
        let config = BenchConfig::test()?;
        let harness = Harness::new(config)?;
        let report = harness.run()?;
        assert_eq!(report.measurements().len(), 3);
        Ok(())
    }
}
