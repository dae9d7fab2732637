// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Argument Validation and Shape Helpers*
//!
//! Helpers shared by the fill kernels: shape parameter checks and element
//! counting for multidimensional outputs.

use tracing::debug;

use crate::config::MAX_SAMPLE_ELEMENTS;
use crate::errors::KernelError;

/// Checks that both shape parameters are finite and strictly positive.
#[inline]
pub fn validate_shape_params(fname: &str, alpha: f64, beta: f64) -> Result<(), KernelError> {
    if alpha <= 0.0 || beta <= 0.0 || !alpha.is_finite() || !beta.is_finite() {
        debug!(fname, alpha, beta, "rejected shape parameters");
        return Err(KernelError::InvalidArguments(format!(
            "{fname}: invalid alpha or beta (alpha={alpha}, beta={beta})"
        )));
    }
    Ok(())
}

/// Number of elements in a row-major array of shape `dims`.
///
/// An empty `dims` is a zero-dimensional array holding one element.
#[inline]
pub fn element_count(fname: &str, dims: &[usize]) -> Result<usize, KernelError> {
    let count = dims
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| {
            KernelError::OutOfBounds(format!("{fname}: dimensions {dims:?} overflow usize"))
        })?;
    if count > MAX_SAMPLE_ELEMENTS {
        debug!(fname, count, "rejected oversized sample request");
        return Err(KernelError::OutOfBounds(format!(
            "{fname}: {count} elements exceeds limit of {MAX_SAMPLE_ELEMENTS}"
        )));
    }
    Ok(count)
}

/// Row-major linear offset of `index` within `dims`, or `None` if out of range.
#[inline]
pub fn row_major_offset(dims: &[usize], index: &[usize]) -> Option<usize> {
    if index.len() != dims.len() {
        return None;
    }
    let mut offset = 0usize;
    for (&i, &d) in index.iter().zip(dims) {
        if i >= d {
            return None;
        }
        offset = offset * d + i;
    }
    Some(offset)
}

#[cfg(test)]
mod utils_tests {
    use super::*;

    #[test]
    fn shape_params() {
        assert!(validate_shape_params("t", 0.5, 2.0).is_ok());
        assert!(validate_shape_params("t", 0.0, 2.0).is_err());
        assert!(validate_shape_params("t", 1.0, -1.0).is_err());
        assert!(validate_shape_params("t", f64::NAN, 1.0).is_err());
        assert!(validate_shape_params("t", 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn counts() {
        assert_eq!(element_count("t", &[2, 3]).unwrap(), 6);
        assert_eq!(element_count("t", &[]).unwrap(), 1);
        assert_eq!(element_count("t", &[4, 0, 7]).unwrap(), 0);
        assert!(matches!(
            element_count("t", &[usize::MAX, 2]),
            Err(KernelError::OutOfBounds(_))
        ));
        assert!(matches!(
            element_count("t", &[MAX_SAMPLE_ELEMENTS, 2]),
            Err(KernelError::OutOfBounds(_))
        ));
    }

    #[test]
    fn offsets() {
        assert_eq!(row_major_offset(&[2, 3], &[0, 0]), Some(0));
        assert_eq!(row_major_offset(&[2, 3], &[0, 2]), Some(2));
        assert_eq!(row_major_offset(&[2, 3], &[1, 0]), Some(3));
        assert_eq!(row_major_offset(&[2, 3], &[1, 2]), Some(5));
        assert_eq!(row_major_offset(&[2, 3], &[2, 0]), None);
        assert_eq!(row_major_offset(&[2, 3], &[1]), None);
        assert_eq!(row_major_offset(&[], &[]), Some(0));
    }
}
