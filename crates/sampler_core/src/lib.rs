//! # Sampler Core
//!
//! Monte Carlo estimation kernel for the quadrant π estimator.
//!
//! The crate estimates π by sampling uniformly random points in the unit
//! square and counting how many fall inside the unit quarter-circle. The
//! ratio `4 * inside / total` converges to π as the sample count grows.
//!
//! ## Architecture
//!
//! ```text
//! PiEstimator
//! ├── SamplerConfig  (sample count, seed)
//! ├── SamplerRng     (seeded random number generation)
//! └── count_inside() (quarter-circle hit counting)
//! ```
//!
//! ## Reproducibility
//!
//! All randomness flows through [`rng::SamplerRng`], a seeded wrapper over
//! `StdRng`. The same seed always produces the same sequence of draws and
//! therefore the same estimate, which is what makes the kernel testable.
//!
//! ## Usage Example
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
//!
//! println!("pi ~= {:.5} +/- {:.5}", result.estimate, result.std_error);
//! assert!(result.abs_error() < 0.05);
//! ```

pub mod mc;
pub mod rng;

pub use mc::{EstimateResult, PiEstimator, SamplerConfig, SamplerConfigBuilder};
pub use rng::{SamplerRng, UniformSource};
