//! Monte Carlo π estimation engine.
//!
//! This module provides the orchestration layer for the quarter-circle
//! sampling method.
//!
//! # Overview
//!
//! The [`PiEstimator`] coordinates:
//! 1. Random number generation (via [`SamplerRng`](crate::rng::SamplerRng))
//! 2. Hit counting (via [`count_inside`])
//! 3. Aggregation into an [`EstimateResult`]
//!
//! # Method
//!
//! Each sample is a point `(x, y)` with `x, y` uniform in [0, 1). The point
//! lies inside the unit quarter-circle when `x² + y² <= 1`. The fraction of
//! hits estimates the quarter-circle area π/4, so the estimate is
//! `4 * inside / n`.

use crate::rng::{SamplerRng, UniformSource};

use super::config::{SamplerConfig, DEFAULT_SEED};
use super::error::ConfigError;

/// Counts points from `source` that fall inside the unit quarter-circle.
///
/// Draws `n_samples` points and tests `x*x + y*y <= 1.0`. The comparison is
/// inclusive: a point exactly on the circle counts as inside.
///
/// The returned count always satisfies `0 <= inside <= n_samples`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::count_inside;
/// use sampler_core::rng::SamplerRng;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let inside = count_inside(&mut rng, 1000);
/// assert!(inside <= 1000);
/// ```
pub fn count_inside<S: UniformSource>(source: &mut S, n_samples: usize) -> u64 {
    let mut inside: u64 = 0;
    for _ in 0..n_samples {
        let (x, y) = source.next_point();
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }
    inside
}

/// Estimation result with sampling diagnostics.
///
/// Contains the Monte Carlo π estimate along with the raw hit count and the
/// standard error of the estimate.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::EstimateResult;
///
/// let result = EstimateResult::from_counts(7_853_981, 10_000_000);
/// println!(
///     "pi ~= {:.5} +/- {:.5}",
///     result.estimate,
///     result.confidence_95()
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimateResult {
    /// The π estimate, `4 * inside / n_samples`.
    pub estimate: f64,
    /// Number of points that fell inside the quarter-circle.
    pub inside: u64,
    /// Number of points drawn.
    pub n_samples: usize,
    /// Standard error of the estimate.
    pub std_error: f64,
}

impl EstimateResult {
    /// Builds a result from a hit count and sample count.
    ///
    /// The standard error follows the Bernoulli proportion model: with
    /// `p = inside / n`, the estimator variance is `16 * p(1-p) / n`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `inside > n_samples` or `n_samples == 0`;
    /// both are ruled out upstream by [`count_inside`] and config validation.
    pub fn from_counts(inside: u64, n_samples: usize) -> Self {
        debug_assert!(n_samples > 0);
        debug_assert!(inside as u128 <= n_samples as u128);

        let n = n_samples as f64;
        let p = inside as f64 / n;
        let estimate = 4.0 * p;
        let std_error = 4.0 * (p * (1.0 - p) / n).sqrt();

        Self {
            estimate,
            inside,
            n_samples,
            std_error,
        }
    }

    /// Returns the absolute deviation from the true value of π.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.estimate - std::f64::consts::PI).abs()
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo π estimation engine.
///
/// Owns a seeded RNG and a validated configuration; each call to
/// [`estimate`](PiEstimator::estimate) consumes generator state. Use
/// [`reset`](PiEstimator::reset) to replay the same draw sequence.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::{PiEstimator, SamplerConfig};
///
/// let config = SamplerConfig::builder()
///     .n_samples(100_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut estimator = PiEstimator::new(config).unwrap();
/// let result = estimator.estimate();
/// assert!(result.abs_error() < 0.05);
/// ```
pub struct PiEstimator {
    config: SamplerConfig,
    rng: SamplerRng,
}

impl PiEstimator {
    /// Creates a new estimator with the given configuration.
    ///
    /// When the configuration carries no seed, the default seed
    /// [`DEFAULT_SEED`] is used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: SamplerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed().unwrap_or(DEFAULT_SEED);
        let rng = SamplerRng::from_seed(seed);

        Ok(Self { config, rng })
    }

    /// Creates a new estimator with a specific seed.
    ///
    /// Convenience constructor that overrides the config seed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn with_seed(config: SamplerConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = SamplerRng::from_seed(seed);

        Ok(Self { config, rng })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Resets the estimator state for a new run.
    ///
    /// Re-seeds the RNG with the original seed so the next run replays the
    /// same draw sequence.
    pub fn reset(&mut self) {
        self.rng = SamplerRng::from_seed(self.config.seed().unwrap_or(DEFAULT_SEED));
    }

    /// Resets the estimator with a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = SamplerRng::from_seed(seed);
    }

    /// Runs the sampling loop and returns the π estimate.
    ///
    /// Draws `n_samples` points from the owned RNG, counts quarter-circle
    /// hits, and aggregates. Advances the RNG; call
    /// [`reset`](PiEstimator::reset) first to reproduce a previous run.
    pub fn estimate(&mut self) -> EstimateResult {
        let n_samples = self.config.n_samples();
        let inside = count_inside(&mut self.rng, n_samples);
        EstimateResult::from_counts(inside, n_samples)
    }
}
