//! Quadrant CLI - Command Line Operations for Monte Carlo π Estimation
//!
//! This is the operational entry point for the quadrant estimation library.
//!
//! # Commands
//!
//! - `quadrant estimate` - Run the Monte Carlo π estimation
//! - `quadrant check` - Check configuration defaults and sampler health
//!
//! # Architecture
//!
//! The CLI orchestrates the `sampler_core` kernel and handles output
//! formatting; all numerical work lives in the library.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Quadrant Monte Carlo π estimator CLI
#[derive(Parser)]
#[command(name = "quadrant")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Monte Carlo π estimation
    Estimate {
        /// Number of points to sample
        #[arg(short = 'n', long, default_value = "10000000")]
        samples: usize,

        /// Seed for the random number generator
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check configuration defaults and sampler health
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Estimate {
            samples,
            seed,
            format,
        } => commands::estimate::run(samples, seed, &format),
        Commands::Check => commands::check::run(),
    }
}
