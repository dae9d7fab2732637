// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Statistical Sampling Module — Uniform Sources and Base Variates
//!
//! The uniform random source abstraction consumed by every sampler in the crate,
//! together with the Normal, Gamma and Uniform draws that the Beta kernels build on.
//!
//! ## Random sources
//! A [`UniformSource`] is anything that hands out uniform draws on [0, 1):
//! - any `FnMut() -> f64` closure, which makes scripted or replayed streams trivial;
//! - [`RngSource`], wrapping any `rand::Rng` (seeded `StdRng`, `SmallRng`, `&mut R`, ...);
//! - [`DefaultSource`], backed by the thread-local `ThreadRng`.
//!
//! The samplers only ever *call* the source. They never reseed, reset or inspect it.

use rand::rngs::ThreadRng;
use rand::{rng, Rng};
use std::f64::consts::PI;

/// A stream of uniform draws on [0, 1).
pub trait UniformSource {
    /// Next uniform draw on [0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl<F> UniformSource for F
where
    F: FnMut() -> f64,
{
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self()
    }
}

/// Adapts any `rand::Rng` into a [`UniformSource`].
///
/// Wrap a mutable reference (`RngSource(&mut rng)`) to keep ownership of the generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> UniformSource for RngSource<R> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Default source used when the caller does not supply one.
///
/// Backed by `rand`'s thread-local generator: it is seeded from the OS on first
/// use in each thread and is never reseeded by this crate, so every thread sees
/// one continuous stream for its lifetime.
#[derive(Debug, Clone)]
pub struct DefaultSource {
    rng: ThreadRng,
}

impl DefaultSource {
    /// Handle onto the current thread's generator.
    #[inline]
    pub fn new() -> Self {
        DefaultSource { rng: rng() }
    }
}

impl Default for DefaultSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for DefaultSource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Uniform draw on [low, high). Consumes exactly one uniform.
#[inline]
pub fn uniform_draw<S: UniformSource + ?Sized>(low: f64, high: f64, source: &mut S) -> f64 {
    low + (high - low) * source.next_uniform()
}

// Box–Muller to get one N(0,1)
/// Generates a single sample from the standard normal distribution N(0,1).
///
/// Consumes exactly two uniforms; the second Box–Muller variate is discarded so
/// that every call is independent of the previous one.
#[inline]
pub fn standard_normal_draw<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    // U1 ∈ (0,1], U2 ∈ [0,1)
    let u1 = source.next_uniform().max(f64::MIN_POSITIVE); // avoid log(0)
    let u2 = source.next_uniform();
    let r = (-2.0 * u1.ln()).sqrt();
    r * (2.0 * PI * u2).cos()
}

/// Normal(mean, std_dev) draw. Consumes exactly two uniforms.
#[inline]
pub fn normal_draw<S: UniformSource + ?Sized>(mean: f64, std_dev: f64, source: &mut S) -> f64 {
    mean + std_dev * standard_normal_draw(source)
}

/// Generates a single sample from Γ(shape, scale) using the Marsaglia–Tsang algorithm.
///
/// Preconditions: shape > 0, scale > 0. Parameters are not checked: a zero shape
/// collapses the draw to 0, and NaN parameters propagate NaN.
#[inline]
pub fn gamma_draw<S: UniformSource + ?Sized>(shape: f64, scale: f64, source: &mut S) -> f64 {
    ln_gamma_draw(shape, scale, source).exp()
}

/// Natural logarithm of a Γ(shape, scale) draw.
///
/// Consumes exactly the same uniforms as [`gamma_draw`]. For shape < 1 the variate is
/// G(shape + k) · ∏ uᵢ^(1/(shape + i)), which underflows f64 for very small shapes;
/// the log keeps it finite so ratios of two draws stay well defined.
///
/// Returns −∞ for a zero shape and NaN for a NaN shape, or for a negative shape too
/// large in magnitude for `shape + 1.0` to make progress.
pub fn ln_gamma_draw<S: UniformSource + ?Sized>(shape: f64, scale: f64, source: &mut S) -> f64 {
    // Boost 0 < shape < 1 to shape + 1, accumulating the power-law correction in log space.
    let mut k = shape;
    let mut ln_boost = 0.0;
    while k < 1.0 {
        if k + 1.0 == k {
            return f64::NAN;
        }
        let u = source.next_uniform().max(f64::MIN_POSITIVE);
        ln_boost += u.ln() / k;
        k += 1.0;
    }

    let d = k - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    loop {
        let x = standard_normal_draw(source);
        let one_plus_cx = 1.0 + c * x;
        if one_plus_cx <= 0.0 {
            continue;
        }
        let v = one_plus_cx * one_plus_cx * one_plus_cx; // (1 + c x)^3
        let u = source.next_uniform();

        // Squeeze step
        if u < 1.0 - 0.0331 * (x * x) * (x * x) {
            return (d * v).ln() + scale.ln() + ln_boost;
        }
        // Log acceptance step
        if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return (d * v).ln() + scale.ln() + ln_boost;
        }
        // NaN shape never satisfies either test above
        if d.is_nan() {
            return f64::NAN;
        }
    }
}

#[cfg(test)]
mod sampler_tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mean_var(xs: &[f64]) -> (f64, f64) {
        let n = xs.len() as f64;
        let m = xs.iter().sum::<f64>() / n;
        let v = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (n - 1.0);
        (m, v)
    }

    #[test]
    fn closure_is_a_source() {
        let mut k = 0;
        let mut src = || {
            k += 1;
            0.25 * k as f64
        };
        assert_eq!(src.next_uniform(), 0.25);
        assert_eq!(src.next_uniform(), 0.5);
    }

    #[test]
    fn uniform_draw_consumes_one() {
        let mut calls = 0;
        let mut src = || {
            calls += 1;
            0.5
        };
        assert_eq!(uniform_draw(2.0, 4.0, &mut src), 3.0);
        assert_eq!(calls, 1);
    }

    #[test]
    fn normal_draw_consumes_two() {
        let mut calls = 0;
        let mut src = || {
            calls += 1;
            if calls == 1 { (-0.5f64).exp() } else { 0.0 }
        };
        // r = sqrt(-2 ln e^-0.5) = 1, cos(0) = 1
        let s = normal_draw(3.0, 2.0, &mut src);
        assert!((s - 5.0).abs() < 1e-12, "{s}");
        assert_eq!(calls, 2);
    }

    #[test]
    fn standard_normal_moments() {
        let mut src = RngSource(StdRng::seed_from_u64(7));
        let xs: Vec<f64> = (0..50_000).map(|_| standard_normal_draw(&mut src)).collect();
        let (m, v) = mean_var(&xs);
        assert!(m.abs() < 0.02, "mean {m}");
        assert!((v - 1.0).abs() < 0.03, "var {v}");
    }

    #[test]
    fn gamma_moments() {
        let mut src = RngSource(StdRng::seed_from_u64(11));
        for &(k, theta) in &[(0.5, 1.0), (2.0, 3.0), (7.5, 0.5)] {
            let xs: Vec<f64> = (0..40_000).map(|_| gamma_draw(k, theta, &mut src)).collect();
            let (m, v) = mean_var(&xs);
            let (em, ev) = (k * theta, k * theta * theta);
            assert!((m - em).abs() < 0.03 * em.max(1.0), "k={k} mean {m} vs {em}");
            assert!((v - ev).abs() < 0.08 * ev.max(1.0), "k={k} var {v} vs {ev}");
            assert!(xs.iter().all(|&x| x >= 0.0));
        }
    }

    #[test]
    fn gamma_nan_shape_propagates() {
        let mut src = RngSource(StdRng::seed_from_u64(3));
        assert!(gamma_draw(f64::NAN, 1.0, &mut src).is_nan());
    }

    #[test]
    fn gamma_large_negative_shape_terminates() {
        // boost passes through shape 0, so the log draw is -inf
        let mut src = RngSource(StdRng::seed_from_u64(5));
        assert_eq!(gamma_draw(-1.0e6, 1.0, &mut src), 0.0);
        assert!(ln_gamma_draw(-1.0e20, 1.0, &mut src).is_nan());
    }

    #[test]
    fn ln_gamma_tiny_shape_stays_finite() {
        let mut src = RngSource(StdRng::seed_from_u64(21));
        for _ in 0..1000 {
            let lx = ln_gamma_draw(1.0e-3, 1.0, &mut src);
            assert!(lx.is_finite(), "{lx}");
        }
    }

    #[test]
    fn ln_gamma_consumes_same_stream_as_gamma() {
        for &k in &[0.3, 2.5] {
            let mut s1 = RngSource(StdRng::seed_from_u64(40));
            let mut s2 = RngSource(StdRng::seed_from_u64(40));
            let x = gamma_draw(k, 2.0, &mut s1);
            let lx = ln_gamma_draw(k, 2.0, &mut s2);
            assert!((x.ln() - lx).abs() < 1e-12);
            assert_eq!(s1.next_uniform().to_bits(), s2.next_uniform().to_bits());
        }
    }

    #[test]
    fn default_source_in_unit_interval() {
        let mut src = DefaultSource::new();
        for _ in 0..1000 {
            let u = src.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
