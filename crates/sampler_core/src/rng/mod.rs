//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation facilities for the Monte
//! Carlo estimation kernel.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: all generators are seeded and produce deterministic
//!   sequences
//! - **Efficiency**: zero-allocation batch operations via `&mut [f64]` slices
//! - **Static dispatch**: point sources are generic over [`UniformSource`];
//!   no `Box<dyn Trait>` in the sampling loop
//!
//! ## British English Convention
//!
//! All documentation in this module uses British English spelling conventions
//! (e.g. "initialise", "behaviour").
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{SamplerRng, UniformSource};
//!
//! // Create a seeded RNG for reproducible sampling
//! let mut rng = SamplerRng::from_seed(12345);
//!
//! // Single uniform value in [0, 1)
//! let u = rng.gen_uniform();
//! assert!(u >= 0.0 && u < 1.0);
//!
//! // A 2D point in the unit square
//! let (x, y) = rng.next_point();
//! assert!(x < 1.0 && y < 1.0);
//! ```

pub mod prng;

pub use prng::SamplerRng;

/// Source of uniformly distributed points in the unit square.
///
/// The estimation kernel is generic over this trait so that tests can
/// substitute a scripted source with known coordinates while production code
/// uses [`SamplerRng`]. Implementations use static dispatch only.
pub trait UniformSource {
    /// Returns the next point `(x, y)` with `x, y` in `[0, 1)`.
    ///
    /// `x` is drawn before `y`; the draw order is part of the deterministic
    /// contract for seeded sources.
    fn next_point(&mut self) -> (f64, f64);
}
