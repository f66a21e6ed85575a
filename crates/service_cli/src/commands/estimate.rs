//! Estimate command implementation
//!
//! Runs the Monte Carlo π estimation using the sampler_core kernel.

use sampler_core::mc::{PiEstimator, SamplerConfig};
use tracing::info;

use crate::{CliError, Result};

/// Run the estimate command
pub fn run(samples: usize, seed: u64, format: &str) -> Result<()> {
    info!("Starting estimation...");
    info!("  Samples: {}", samples);
    info!("  Seed: {}", seed);
    info!("  Output format: {}", format);

    // Validate the format before doing any work
    if format != "json" && format != "table" {
        return Err(CliError::InvalidArgument(format!(
            "Unknown format: {}. Supported: json, table",
            format
        )));
    }

    let config = SamplerConfig::builder()
        .n_samples(samples)
        .seed(seed)
        .build()?;

    let mut estimator = PiEstimator::new(config)?;
    let result = estimator.estimate();

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "table" => {
            println!("\n┌──────────────┬──────────────────┐");
            println!("│ Samples      │ {:>16} │", result.n_samples);
            println!("│ Inside       │ {:>16} │", result.inside);
            println!("│ Estimate     │ {:>16.8} │", result.estimate);
            println!("│ Std error    │ {:>16.8} │", result.std_error);
            println!("│ |est - pi|   │ {:>16.8} │", result.abs_error());
            println!("└──────────────┴──────────────────┘");
        }
        _ => unreachable!("format validated above"),
    }

    info!("Estimation complete");
    Ok(())
}
