//! Monte Carlo sampler configuration.
//!
//! This module provides configuration types and builders for the π
//! estimation kernel.

use super::error::ConfigError;

/// Maximum number of samples allowed.
pub const MAX_SAMPLES: usize = 1_000_000_000;

/// Default number of samples when none is requested.
pub const DEFAULT_SAMPLES: usize = 10_000_000;

/// Default seed used when the configuration carries none.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo sampler configuration.
///
/// Immutable configuration specifying sampling parameters.
/// Use [`SamplerConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .n_samples(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct SamplerConfig {
    /// Number of points to draw.
    n_samples: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the number of points to draw.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_samples` is 0 or greater than
    /// 1,000,000,000.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 || self.n_samples > MAX_SAMPLES {
            return Err(ConfigError::InvalidSampleCount(self.n_samples));
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
///
/// Provides a fluent API for constructing sampler configurations with
/// validation at build time.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .n_samples(1_000_000)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    n_samples: Option<usize>,
    seed: Option<u64>,
}

impl SamplerConfigBuilder {
    /// Sets the number of points to draw.
    ///
    /// # Arguments
    ///
    /// * `n_samples` - Number of samples in [1, 1_000_000_000]
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_samples` is not set or invalid.
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let n_samples = self.n_samples.ok_or(ConfigError::InvalidParameter {
            name: "n_samples",
            value: "must be specified".to_string(),
        })?;

        let config = SamplerConfig {
            n_samples,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
