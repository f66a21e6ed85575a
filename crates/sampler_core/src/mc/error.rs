//! Error types for the Monte Carlo estimation kernel.
//!
//! This module defines structured error types for configuration validation
//! in the sampling engine.

use thiserror::Error;

/// Configuration error for the Monte Carlo estimator.
///
/// These errors occur during construction when invalid parameters are
/// provided.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Sample count outside valid range [1, 1_000_000_000].
    #[error("Invalid sample count {0}: must be in range [1, 1_000_000_000]")]
    InvalidSampleCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSampleCount(0);
        assert!(err.to_string().contains("Invalid sample count 0"));

        let err = ConfigError::InvalidParameter {
            name: "n_samples",
            value: "must be specified".to_string(),
        };
        assert!(err.to_string().contains("n_samples"));
    }
}
