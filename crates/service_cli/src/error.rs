//! Error types for the quadrant CLI.

use sampler_core::mc::ConfigError;
use thiserror::Error;

/// CLI operation error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Sampler configuration rejected by the kernel.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output serialisation failed.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
