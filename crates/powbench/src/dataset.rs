//! Dataset Generation
//!
//! Produces the ordered, materialized input sequence shared read-only by all
//! strategies. The randomness source is injectable so that tests can pin a
//! seed; the canonical run draws its seed from entropy.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};

/// Immutable benchmark input sequence
///
/// Generated once at startup and shared by reference with every strategy.
/// Values are independent draws from a uniform distribution over
/// `[low, high)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Generate a dataset as described by `config`
    ///
    /// Uses the configured seed when present, otherwise seeds from entropy.
    ///
    /// # Errors
    ///
    /// Returns error if the configured value range is invalid.
    pub fn generate(config: &BenchConfig) -> BenchResult<Self> {
        config.seed.map_or_else(
            || Self::with_rng(config, &mut StdRng::from_entropy()),
            |seed| Self::generate_seeded(config, seed),
        )
    }

    /// Generate a reproducible dataset from a fixed seed
    ///
    /// # Errors
    ///
    /// Returns error if the configured value range is invalid.
    pub fn generate_seeded(config: &BenchConfig, seed: u64) -> BenchResult<Self> {
        Self::with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Generate a dataset from an explicit randomness source
    ///
    /// # Errors
    ///
    /// Returns error if the configured value range is invalid.
    pub fn with_rng<R: Rng>(config: &BenchConfig, rng: &mut R) -> BenchResult<Self> {
        // Uniform::new panics on an empty or non-finite range, so reject it here.
        if !(config.low.is_finite() && config.high.is_finite() && config.low < config.high) {
            return Err(BenchError::validation(
                "value_range",
                format!("Invalid uniform range [{}, {})", config.low, config.high),
            ));
        }
        let distribution = Uniform::new(config.low, config.high);

        let values = (0..config.dataset_size)
            .map(|_| distribution.sample(rng))
            .collect();

        Ok(Self { values })
    }

    /// Wrap an explicit value sequence, bypassing random generation
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Dataset values in generation order
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the dataset is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
