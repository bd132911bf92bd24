//! Powbench Configuration System
//!
//! Benchmark parameters with type-safe validation. The defaults reproduce
//! the canonical run: ten million elements drawn uniformly from [1, 100),
//! unseeded, with one worker per available hardware thread.

use crate::error::{BenchError, BenchResult};
use garde::Validate;
use serde::{Deserialize, Serialize};

/// Default dataset length for the canonical benchmark run
pub const DEFAULT_DATASET_SIZE: usize = 10_000_000;

/// Default lower bound (inclusive) of generated values
pub const DEFAULT_LOW: f64 = 1.0;

/// Default upper bound (exclusive) of generated values
pub const DEFAULT_HIGH: f64 = 100.0;

/// Benchmark configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BenchConfig {
    /// Number of dataset elements (N = 0 is a valid degenerate run)
    #[garde(skip)]
    pub dataset_size: usize,

    /// Lower bound (inclusive) of the uniform value range
    #[garde(skip)]
    pub low: f64,

    /// Upper bound (exclusive) of the uniform value range
    #[garde(skip)]
    pub high: f64,

    /// Number of worker tasks used by the parallel strategy
    #[garde(range(min = 1, max = 1024))]
    pub workers: usize,

    /// Optional RNG seed for reproducible datasets
    #[garde(skip)]
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dataset_size: DEFAULT_DATASET_SIZE,
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
            workers: num_cpus::get(),
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Create the canonical benchmark configuration
    ///
    /// # Errors
    ///
    /// Returns error if the detected hardware parallelism falls outside the
    /// supported worker range.
    pub fn canonical() -> BenchResult<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Create a small, seeded configuration for fast deterministic tests
    ///
    /// # Errors
    ///
    /// Returns error if validation fails.
    pub fn test() -> BenchResult<Self> {
        let config = Self {
            dataset_size: 10_000,
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
            workers: 4,
            seed: Some(42),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if configuration validation fails.
    pub fn validate(&self) -> BenchResult<()> {
        garde::Validate::validate(self, &())
            .map_err(|e| BenchError::validation("config", format!("Validation failed: {e}")))?;

        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(BenchError::validation(
                "value_range",
                "Bounds must be finite",
            ));
        }

        if self.low >= self.high {
            return Err(BenchError::validation(
                "value_range",
                "Lower bound must be strictly below upper bound",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_canonical_constants() {
        let config = BenchConfig::default();
        assert_eq!(config.dataset_size, DEFAULT_DATASET_SIZE);
        assert!((config.low - 1.0).abs() < f64::EPSILON);
        assert!((config.high - 100.0).abs() < f64::EPSILON);
        assert!(config.seed.is_none());
        assert!(config.workers >= 1);
    }

    #[test]
    fn test_test_config_is_valid() -> BenchResult<()> {
        let config = BenchConfig::test()?;
        assert_eq!(config.seed, Some(42));
        config.validate()
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = BenchConfig {
            low: 100.0,
            high: 1.0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_degenerate_range_rejected() {
        let config = BenchConfig {
            low: 5.0,
            high: 5.0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_bound_rejected() {
        let config = BenchConfig {
            high: f64::INFINITY,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = BenchConfig {
            workers: 0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_dataset_allowed() -> BenchResult<()> {
        let config = BenchConfig {
            dataset_size: 0,
            ..BenchConfig::default()
        };
        config.validate()
    }
}
