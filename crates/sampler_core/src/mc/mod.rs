//! Monte Carlo estimation kernel.
//!
//! This module provides the sampling infrastructure for estimating π from
//! uniform draws in the unit square.
//!
//! # Architecture
//!
//! ```text
//! PiEstimator
//! ├── SamplerConfig  (simulation parameters)
//! ├── SamplerRng     (random number generation)
//! └── count_inside() (quarter-circle hit counting)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sampler_core::mc::{PiEstimator, SamplerConfig};
//!
//! let config = SamplerConfig::builder()
//!     .n_samples(100_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut estimator = PiEstimator::new(config).unwrap();
//! let result = estimator.estimate();
//! println!("pi ~= {:.5} +/- {:.5}", result.estimate, result.std_error);
//! ```

pub mod config;
pub mod error;
pub mod estimator;

// Re-exports for convenient access
pub use config::{SamplerConfig, SamplerConfigBuilder, DEFAULT_SAMPLES, DEFAULT_SEED, MAX_SAMPLES};
pub use error::ConfigError;
pub use estimator::{count_inside, EstimateResult, PiEstimator};
