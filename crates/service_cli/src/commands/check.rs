//! Check command implementation
//!
//! Verifies configuration defaults and exercises the sampler with a small
//! deterministic run.

use sampler_core::mc::{PiEstimator, SamplerConfig, DEFAULT_SAMPLES, DEFAULT_SEED, MAX_SAMPLES};
use tracing::info;

use crate::Result;

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking sampler configuration...");

    println!("Defaults:");
    println!("  samples: {}", DEFAULT_SAMPLES);
    println!("  seed:    {}", DEFAULT_SEED);
    println!("  max samples: {}", MAX_SAMPLES);

    // Smoke-test the kernel with a small deterministic run
    let config = SamplerConfig::builder()
        .n_samples(10_000)
        .seed(DEFAULT_SEED)
        .build()?;
    let mut estimator = PiEstimator::new(config)?;
    let result = estimator.estimate();

    println!(
        "Sampler smoke test: pi ~= {:.4} ({} / {} inside)",
        result.estimate, result.inside, result.n_samples
    );

    info!("Check complete");
    Ok(())
}
