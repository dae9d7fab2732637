// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for the sampling kernels with structured error reporting.
//!
//! ## Error Categories
//! - **Argument Errors**: Shape parameters outside their domain
//! - **Dimension Errors**: Output buffer and shape mismatches
//! - **Boundary Errors**: Requested element counts that overflow or exceed the configured limit
//!
//! The scalar samplers themselves never fail; only the validating fill kernels
//! return these.

use core::fmt;
use std::error::Error;

/// Error type for the validating sampling kernels.
///
/// Each variant includes a contextual message string naming the kernel and the
/// offending values.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Output buffer length does not match the requested shape.
    LengthMismatch(String),

    /// Invalid arguments provided to kernel function.
    InvalidArguments(String),

    /// Requested element count overflows or exceeds `MAX_SAMPLE_ELEMENTS`.
    OutOfBounds(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between an output
/// buffer and the shape it is meant to hold.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the supplied buffer
/// * `rhs` - Length implied by the requested shape
///
/// # Returns
/// A formatted error message string
pub fn log_length_mismatch(fname: String, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn display_prefixes_category() {
        let e = KernelError::InvalidArguments("beta_sample_to: invalid alpha or beta".into());
        assert_eq!(
            e.to_string(),
            "Invalid arguments: beta_sample_to: invalid alpha or beta"
        );
        let e = KernelError::LengthMismatch(log_length_mismatch("m".into(), 5, 6));
        assert_eq!(e.to_string(), "Length mismatch: m => Length mismatch: LHS 5 RHS 6");
    }
}
