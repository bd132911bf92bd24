//! Benchmark Harness
//!
//! Generates the shared dataset, runs the three strategies in fixed order
//! against it, and collects one timing measurement per strategy. Each
//! strategy is measured independently; dataset generation is excluded from
//! every measurement.

use crate::config::BenchConfig;
use crate::dataset::Dataset;
use crate::error::BenchResult;
use crate::strategy::{ParallelPipeline, SequentialLoop, SequentialPipeline, Strategy};
use crate::timing::{measure, Measurement};

/// Timing results for one harness run, in strategy order
#[derive(Debug, Clone)]
pub struct Report {
    measurements: Vec<Measurement>,
}

impl Report {
    /// Measurements in the fixed order loop, sequential pipeline, parallel
    /// pipeline
    #[must_use]
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Render the report as the three stdout lines, one per strategy
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for measurement in &self.measurements {
            out.push_str(&measurement.to_string());
            out.push('\n');
        }
        out
    }
}

/// Benchmark harness owning the configuration and strategy set
pub struct Harness {
    config: BenchConfig,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Harness {
    /// Create a harness with the three canonical strategies
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(config: BenchConfig) -> BenchResult<Self> {
        config.validate()?;
        let strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(SequentialLoop),
            Box::new(SequentialPipeline),
            Box::new(ParallelPipeline::new(config.workers)?),
        ];
        Ok(Self { config, strategies })
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Generate the dataset and time every strategy against it
    ///
    /// # Errors
    ///
    /// Returns error if dataset generation fails.
    pub fn run(&self) -> BenchResult<Report> {
        tracing::info!(
            size = self.config.dataset_size,
            workers = self.config.workers,
            seed = ?self.config.seed,
            "generating dataset"
        );
        let dataset = Dataset::generate(&self.config)?;

        Ok(self.run_on(&dataset))
    }

    /// Time every strategy against an already materialized dataset
    #[must_use]
    pub fn run_on(&self, dataset: &Dataset) -> Report {
        let mut measurements = Vec::with_capacity(self.strategies.len());

        for strategy in &self.strategies {
            let (output, measurement) =
                measure(strategy.label(), || strategy.apply(dataset.values()));
            debug_assert_eq!(output.len(), dataset.len());
            drop(output);

            tracing::info!(
                strategy = measurement.label(),
                elapsed_ms = u64::try_from(measurement.elapsed_ms()).unwrap_or(u64::MAX),
                "strategy completed"
            );
            measurements.push(measurement);
        }

        Report { measurements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_produces_three_measurements_in_order() -> BenchResult<()> {
        let harness = Harness::new(BenchConfig::test()?)?;
        let report = harness.run()?;

        let labels: Vec<&str> = report.measurements().iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["Sequential loop", "Sequential pipeline", "Parallel pipeline"]
        );
        Ok(())
    }

    #[test]
    fn test_render_shape() -> BenchResult<()> {
        let harness = Harness::new(BenchConfig::test()?)?;
        let rendered = harness.run()?.render();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.ends_with(" ms")));
        Ok(())
    }

    #[test]
    fn test_empty_dataset_run() -> BenchResult<()> {
        let config = BenchConfig {
            dataset_size: 0,
            ..BenchConfig::test()?
        };
        let harness = Harness::new(config)?;
        let report = harness.run()?;
        assert_eq!(report.measurements().len(), 3);
        Ok(())
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BenchConfig {
            workers: 0,
            dataset_size: 10,
            low: 1.0,
            high: 2.0,
            seed: None,
        };
        assert!(Harness::new(config).is_err());
    }
}
