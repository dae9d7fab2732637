// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Beta Distribution Module** - *Random Variates on (0, 1)*
//!
//! Pseudo-random generation of Beta(α, β) variates for scalars, flat buffers,
//! multidimensional arrays and matrices.
//!
//! ## Overview
//! The beta distribution Beta(α, β) is a continuous probability distribution on the
//! interval (0, 1), parameterised by two positive shape parameters α (alpha) and β (beta).
//! It is extensively used in Bayesian statistics, quality control, and modelling proportions.
//!
//! ## Mathematical Definition
//! - **PDF**: f(x; α, β) = (x^(α-1) * (1-x)^(β-1)) / B(α, β)
//! - **Mean**: α / (α + β)
//! - **Support**: x ∈ (0, 1)
//! - **Parameters**: α > 0, β > 0
//!
//! ## Implementation Strategy
//! - **Scalar path**: [`beta_sample`] selects a regime and runs one accepted trial.
//! - **Builder path**: [`beta_sampler`] / [`beta_sampler_with`] derive the regime
//!   constants once and return a [`BetaSampler`] that only runs the trial loop per draw.
//! - **Fill kernels**: [`beta_sample_to`], [`beta_sample_vec`], [`beta_sample_array`] and
//!   [`beta_sample_matrix`] validate their arguments, build one regime and fill in
//!   row-major order.
//!
//! The regimes follow Ahrens & Dieter (1974); see [`BetaRegime`] for the selection
//! table. Note that the gamma-ratio regime draws *both* Gamma variates as Γ(α, β), so
//! for α ≠ β outside the normal-envelope region the output follows Beta(α, α).
//!
//! ## Preconditions
//! [`beta_sample`] and the builders do not validate α and β. Non-positive or NaN shapes
//! produce NaN or meaningless values, though every call still returns. The fill kernels return
//! `KernelError::InvalidArguments` instead.
//!
//! ## Thread Safety
//! The default source is thread-local, so concurrent calls on different threads are
//! independent. [`BetaRegime`] is `Copy + Send + Sync` and can be shared freely.

mod fill;
mod regime;

pub use fill::{
    beta_sample_array, beta_sample_matrix, beta_sample_matrix_to, beta_sample_to,
    beta_sample_vec, BetaArray, DenseMatrix,
};
pub use regime::{BetaRegime, BetaSampler};

use crate::kernels::scientific::distributions::shared::sampler::{DefaultSource, UniformSource};

/// Draws a single Beta(α, β) variate.
///
/// ## Parameters
/// - `alpha`: Shape parameter α > 0
/// - `beta`: Shape parameter β > 0
/// - `rand`: Optional uniform source; the thread-local default is used when `None`
///
/// ## Behaviour
/// - Regime selection runs on every call. Use [`beta_sampler`] for repeated draws.
/// - Parameters are not validated.
///
/// ## Example
/// ```rust,ignore
/// use beta_kernels::kernels::scientific::distributions::univariate::beta::beta_sample;
///
/// let x = beta_sample(2.0, 5.0, None);
/// assert!(x > 0.0 && x < 1.0);
/// ```
#[inline]
pub fn beta_sample(alpha: f64, beta: f64, rand: Option<&mut dyn UniformSource>) -> f64 {
    let regime = BetaRegime::select(alpha, beta);
    match rand {
        Some(source) => regime.draw(source),
        None => regime.draw(&mut DefaultSource::new()),
    }
}

/// Builds a reusable Beta(α, β) generator over the thread-local default source.
#[inline]
pub fn beta_sampler(alpha: f64, beta: f64) -> BetaSampler<DefaultSource> {
    BetaSampler::new(alpha, beta)
}

/// Builds a reusable Beta(α, β) generator over `source`.
///
/// Pass `&mut closure` or `RngSource(&mut rng)` to keep ownership of the stream.
///
/// ## Example
/// ```rust,ignore
/// use beta_kernels::kernels::scientific::distributions::shared::sampler::RngSource;
/// use beta_kernels::kernels::scientific::distributions::univariate::beta::beta_sampler_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut draw = beta_sampler_with(10.0, 10.0, RngSource(&mut rng));
/// let xs: Vec<f64> = (0..4).map(|_| draw.draw()).collect();
/// ```
#[inline]
pub fn beta_sampler_with<S: UniformSource>(alpha: f64, beta: f64, source: S) -> BetaSampler<S> {
    BetaSampler::with_source(alpha, beta, source)
}
