// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Beta Variate Generation** - *Ahrens & Dieter (1974) Regimes*
//!
//! Regime selection and the three generation algorithms for Beta(α, β) variates.
//!
//! Reference: Ahrens, J. H., & Dieter, U. (1974). Computer methods for sampling from
//! gamma, beta, poisson and binomial distributions. Computing, 12(3), 223–246.
//! doi:10.1007/BF02293108
//!
//! ## Regimes
//! Selection is evaluated in this order, first match wins:
//!
//! | Condition          | Regime         | Algorithm                       |
//! |--------------------|----------------|---------------------------------|
//! | α > 1 and β > 1    | [`BetaRegime::Bn`] | normal-envelope rejection   |
//! | α = β and α > 1.5  | [`BetaRegime::Bs`] | symmetric squeeze rejection |
//! | otherwise          | [`BetaRegime::GammaRatio`] | ratio of Gamma draws |
//!
//! Every α = β > 1.5 also satisfies the first row, so [`BetaRegime::select`] never
//! returns `Bs`. The symmetric algorithm is reachable through
//! [`BetaRegime::symmetric`].
//!
//! ## Preconditions
//! α > 0 and β > 0. Nothing here checks that: non-positive or NaN parameters make
//! the Gamma-ratio branch return NaN or a meaningless value, but every draw returns. Callers that need
//! validation go through the fill kernels, which return `KernelError::InvalidArguments`.

use rand::distr::Distribution;
use rand::Rng;
use tracing::trace;

use crate::kernels::scientific::distributions::shared::constants::{
    BN_SHAPE_MIN, BN_SIGMA_NUMERATOR, BS_SHAPE_MIN, BS_SQUEEZE_LOWER_OFFSET, BS_SQUEEZE_SLOPE,
    BS_SQUEEZE_UPPER_OFFSET, UNIT_OPEN_LOWER, UNIT_OPEN_UPPER,
};
use crate::kernels::scientific::distributions::shared::sampler::{
    ln_gamma_draw, normal_draw, uniform_draw, DefaultSource, RngSource, UniformSource,
};

/// Precomputed constants for one (α, β) pair.
///
/// Immutable once built; each [`draw`](BetaRegime::draw) is an independent trial
/// driven only by the source it is handed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BetaRegime {
    /// Normal-envelope rejection, α > 1 and β > 1.
    ///
    /// `a = α−1`, `b = β−1`, `c = a+b`, `l = c·ln c`, `mu = a/c`, `sigma = 0.5/√c`.
    Bn {
        a: f64,
        b: f64,
        c: f64,
        l: f64,
        mu: f64,
        sigma: f64,
    },
    /// Symmetric squeeze rejection, α = β > 1.5.
    ///
    /// `a = α−1`, `t = √(2a)`.
    Bs { alpha: f64, a: f64, t: f64 },
    /// x / (x + y) with x, y ~ Γ(α, β) drawn with identical parameters.
    ///
    /// Evaluated from ln x and ln y. Results that f64 would round onto 0 or 1 are
    /// held at the nearest representable value inside (0, 1).
    GammaRatio { alpha: f64, beta: f64 },
}

impl BetaRegime {
    /// Picks the regime for (α, β) and derives its constants.
    #[inline]
    pub fn select(alpha: f64, beta: f64) -> Self {
        if alpha > BN_SHAPE_MIN && beta > BN_SHAPE_MIN {
            return Self::normal_envelope(alpha, beta);
        }
        // Unreachable through dispatch today: α = β > 1.5 already matched above.
        if alpha == beta && alpha > BS_SHAPE_MIN {
            return Self::symmetric(alpha);
        }
        BetaRegime::GammaRatio { alpha, beta }
    }

    /// BN constants. Precondition: α > 1, β > 1.
    #[inline]
    pub fn normal_envelope(alpha: f64, beta: f64) -> Self {
        let a = alpha - 1.0;
        let b = beta - 1.0;
        let c = a + b;
        BetaRegime::Bn {
            a,
            b,
            c,
            l: c * c.ln(),
            mu: a / c,
            sigma: BN_SIGMA_NUMERATOR / c.sqrt(),
        }
    }

    /// BS constants for Beta(α, α). Precondition: α > 1.5.
    #[inline]
    pub fn symmetric(alpha: f64) -> Self {
        let a = alpha - 1.0;
        BetaRegime::Bs {
            alpha,
            a,
            t: (a + a).sqrt(),
        }
    }

    /// Short label for logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            BetaRegime::Bn { .. } => "BN",
            BetaRegime::Bs { .. } => "BS",
            BetaRegime::GammaRatio { .. } => "gamma-ratio",
        }
    }

    /// Runs trials against `source` until one is accepted and returns it.
    ///
    /// BN and BS consume one normal draw (two uniforms) and one uniform per trial,
    /// with no cap on the number of trials. The Gamma ratio consumes exactly two
    /// Gamma draws.
    #[inline]
    pub fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        match *self {
            BetaRegime::Bn {
                a,
                b,
                l,
                mu,
                sigma,
                ..
            } => loop {
                let s = normal_draw(0.0, 1.0, source);
                let x = mu + sigma * s;
                if x < 0.0 || x > 1.0 {
                    continue;
                }
                let u = uniform_draw(0.0, 1.0, source);
                if u.ln() > a * (x / a).ln() + b * ((1.0 - x) / b).ln() + l + 0.5 * s * s {
                    continue;
                }
                return x;
            },
            BetaRegime::Bs { alpha, a, t } => {
                let lower = BS_SQUEEZE_SLOPE * alpha - BS_SQUEEZE_LOWER_OFFSET;
                let upper = BS_SQUEEZE_SLOPE * alpha - BS_SQUEEZE_UPPER_OFFSET;
                loop {
                    let s = normal_draw(0.0, 1.0, source);
                    let x = 0.5 * (1.0 + s / t);
                    if x < 0.0 || x > 1.0 {
                        continue;
                    }
                    let u = uniform_draw(0.0, 1.0, source);
                    let s4 = s.powi(4);
                    let squeeze = 1.0 - s4 / lower;
                    if u <= squeeze {
                        return x;
                    }
                    if u >= squeeze + 0.5 * (s4 / upper).powi(2) {
                        continue;
                    }
                    if u.ln() > a * (4.0 * x * (1.0 - x)).ln() + s * s / 2.0 {
                        continue;
                    }
                    return x;
                }
            }
            BetaRegime::GammaRatio { alpha, beta } => {
                // x / (x + y) = 1 / (1 + y / x), formed from logs so tiny shapes
                // cannot underflow both draws to 0 and give 0 / 0
                let lx = ln_gamma_draw(alpha, beta, source);
                let ly = ln_gamma_draw(alpha, beta, source);
                (1.0 / (1.0 + (ly - lx).exp())).clamp(UNIT_OPEN_LOWER, UNIT_OPEN_UPPER)
            }
        }
    }
}

impl Distribution<f64> for BetaRegime {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.draw(&mut RngSource(rng))
    }
}

/// Reusable Beta(α, β) generator: the regime constants are derived once at
/// construction and every [`draw`](BetaSampler::draw) runs only the trial loop.
///
/// Also an endless [`Iterator`] over variates.
#[derive(Debug, Clone)]
pub struct BetaSampler<S = DefaultSource> {
    regime: BetaRegime,
    source: S,
}

impl BetaSampler<DefaultSource> {
    /// Sampler over the thread-local default source.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self::with_source(alpha, beta, DefaultSource::new())
    }
}

impl<S: UniformSource> BetaSampler<S> {
    /// Sampler over a caller-supplied source.
    pub fn with_source(alpha: f64, beta: f64, source: S) -> Self {
        let regime = BetaRegime::select(alpha, beta);
        trace!(alpha, beta, regime = regime.name(), "beta sampler built");
        BetaSampler { regime, source }
    }

    /// Sampler for an explicitly chosen regime, bypassing selection.
    pub fn from_regime(regime: BetaRegime, source: S) -> Self {
        BetaSampler { regime, source }
    }

    /// Next Beta variate.
    #[inline]
    pub fn draw(&mut self) -> f64 {
        self.regime.draw(&mut self.source)
    }

    /// The precomputed regime every draw of this sampler runs.
    pub fn regime(&self) -> &BetaRegime {
        &self.regime
    }

    /// Gives the source back, e.g. to continue a seeded stream elsewhere.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: UniformSource> Iterator for BetaSampler<S> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
