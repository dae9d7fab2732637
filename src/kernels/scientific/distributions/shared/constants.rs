// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sampling Constants Module** - *Regime Thresholds for Beta Variate Generation*
//!
//! Hard-coded thresholds and coefficients used by the Ahrens & Dieter (1974) Beta
//! samplers. Kept in one place so the regime selection and the algorithm bodies
//! cannot drift apart.

/// Lower bound (exclusive) on both α and β for the BN normal-envelope regime.
///
/// When α > 1 and β > 1 the Beta density is unimodal with a mode strictly inside
/// (0, 1), and a normal envelope centred on the mode gives a tight rejection bound.
pub(crate) const BN_SHAPE_MIN: f64 = 1.0;

/// Lower bound (exclusive) on α = β for the BS symmetric squeeze regime.
///
/// The squeeze bound divides by 8α − 12, which must be positive.
pub(crate) const BS_SHAPE_MIN: f64 = 1.5;

/// Standard deviation numerator of the BN envelope: σ = 0.5 / √C.
pub(crate) const BN_SIGMA_NUMERATOR: f64 = 0.5;

/// BS squeeze: first-order denominator coefficients, 8α − 12.
pub(crate) const BS_SQUEEZE_SLOPE: f64 = 8.0;
pub(crate) const BS_SQUEEZE_LOWER_OFFSET: f64 = 12.0;

/// BS squeeze: second-order denominator offset, 8α − 8.
pub(crate) const BS_SQUEEZE_UPPER_OFFSET: f64 = 8.0;

/// Smallest positive f64 (subnormal). Gamma-ratio draws that underflow to 0 are raised to it.
pub(crate) const UNIT_OPEN_LOWER: f64 = 4.940_656_458_412_465_4e-324;

/// Largest f64 below 1. Gamma-ratio draws that round to 1 are lowered to it.
pub(crate) const UNIT_OPEN_UPPER: f64 = 1.0 - f64::EPSILON / 2.0;
