//! Powbench binary
//!
//! Runs the canonical benchmark: ten million uniform doubles in [1, 100),
//! transformed by each of the three strategies, with one report line per
//! strategy printed to stdout. `RUST_LOG` controls diagnostic verbosity and
//! never affects the measured runs.

use tracing_subscriber::EnvFilter;

use powbench::{BenchConfig, BenchResult, Harness};

fn main() -> BenchResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = BenchConfig::canonical()?;
    let harness = Harness::new(config)?;
    let report = harness.run()?;

    print!("{}", report.render());
    Ok(())
}
