// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Random Variate Generation*
//!
//! Random sampling kernels for probability distributions, built on a pluggable
//! uniform random source.
//!
//! ## Core Components
//! - **Uniform sources**: closures, any `rand::Rng`, or the thread-local default
//! - **Base variates**: Normal, Gamma and Uniform draws over a uniform source
//! - **Beta variates**: Ahrens & Dieter regimes with scalar, builder and fill entry points
//!
//! ## Reproducibility
//! Every sampler is a pure function of its parameters and the successive outputs of
//! its source. Replaying a seeded source reproduces the output bit for bit.
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis and is intended for
//! general scientific and engineering use. We make no guarantees as to correctness,
//! fitness for any particular purpose, or suitability for uses such as in
//! life-critical, safety-critical, or financial applications.
//!
//! Results may differ from other libraries due to platform, compiler, or implementation
//! differences. By using these functions, you accept all responsibility for outcomes or
//! decisions based upon its results.

/// # **Shared Distribution Utilities** - *Common Infrastructure for Sampling*
///
/// ## Modules
/// - **`constants`**: Regime thresholds and coefficients
/// - **`sampler`**: Uniform sources and the Normal, Gamma and Uniform draws
pub mod shared {
    pub mod constants;
    pub mod sampler;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
pub mod univariate {
    pub mod beta;
}
