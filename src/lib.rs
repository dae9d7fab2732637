// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **Beta Kernels**
//!
//! Pseudo-random Beta(α, β) variates for scalars, flat buffers, row-major arrays
//! and matrices, following the Ahrens & Dieter (1974) BN / BS / gamma-ratio regimes.
//!
//! Entry points live under
//! `kernels::scientific::distributions::univariate::beta`.

pub mod kernels {
    pub mod scientific {
        #[cfg(feature = "probability_distributions")]
        pub mod distributions;
    }
}

pub mod config;

pub mod errors;

pub mod utils;
