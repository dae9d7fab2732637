// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Beta Fill Kernels**
//!
//! Bulk Beta(α, β) generation into flat buffers, row-major multidimensional arrays
//! and matrices. Each call selects the regime once and then draws one variate per
//! output slot in linear index order, so a replayed source reproduces the output
//! exactly.
//!
//! Unlike the scalar samplers these kernels validate their arguments and return
//! `KernelError` for bad shapes or parameters.

use num_traits::{Float, NumCast};

use crate::errors::{log_length_mismatch, KernelError};
use crate::kernels::scientific::distributions::shared::sampler::{DefaultSource, UniformSource};
use crate::utils::{element_count, row_major_offset, validate_shape_params};

use super::regime::BetaRegime;

/// Row-major multidimensional array of Beta variates.
#[derive(Debug, Clone, PartialEq)]
pub struct BetaArray {
    pub dims: Vec<usize>,
    pub data: Vec<f64>,
}

impl BetaArray {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at a full multidimensional index.
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        row_major_offset(&self.dims, index).map(|i| self.data[i])
    }
}

/// Dense row-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<T>,
}

impl<T: Copy> DenseMatrix<T> {
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        row_major_offset(&[self.rows, self.cols], &[row, col]).map(|i| self.data[i])
    }
}

/// Draws one variate per slot of `output`, in index order.
#[inline(always)]
fn fill_with<T, S>(output: &mut [T], regime: BetaRegime, source: &mut S)
where
    T: Float,
    S: UniformSource + ?Sized,
{
    for slot in output.iter_mut() {
        // f64 -> f32/f64 casts never fail; NaN keeps a NaN draw visible
        *slot = <T as NumCast>::from(regime.draw(source)).unwrap_or_else(T::nan);
    }
}

#[inline(always)]
fn fill_dispatch<T: Float>(
    output: &mut [T],
    alpha: f64,
    beta: f64,
    rand: Option<&mut dyn UniformSource>,
) {
    let regime = BetaRegime::select(alpha, beta);
    match rand {
        Some(source) => fill_with(output, regime, source),
        None => fill_with(output, regime, &mut DefaultSource::new()),
    }
}

/// Fills a caller-provided buffer with Beta(α, β) variates (zero-allocation variant).
///
/// ## Errors
/// Returns `KernelError::InvalidArguments` if α ≤ 0, β ≤ 0, or parameters are non-finite.
#[inline(always)]
pub fn beta_sample_to(
    output: &mut [f64],
    alpha: f64,
    beta: f64,
    rand: Option<&mut dyn UniformSource>,
) -> Result<(), KernelError> {
    validate_shape_params("beta_sample_to", alpha, beta)?;
    fill_dispatch(output, alpha, beta, rand);
    Ok(())
}

/// `n` Beta(α, β) variates.
pub fn beta_sample_vec(
    n: usize,
    alpha: f64,
    beta: f64,
    rand: Option<&mut dyn UniformSource>,
) -> Result<Vec<f64>, KernelError> {
    validate_shape_params("beta_sample_vec", alpha, beta)?;
    let n = element_count("beta_sample_vec", &[n])?;
    let mut out = vec![0.0; n];
    fill_dispatch(&mut out, alpha, beta, rand);
    Ok(out)
}

/// Row-major array of shape `dims` filled with Beta(α, β) variates.
///
/// An empty `dims` yields a single element; any zero-length dimension yields an
/// empty array.
///
/// ## Errors
/// - `KernelError::InvalidArguments` for invalid α or β.
/// - `KernelError::OutOfBounds` if the element count overflows or exceeds
///   `MAX_SAMPLE_ELEMENTS`.
pub fn beta_sample_array(
    dims: &[usize],
    alpha: f64,
    beta: f64,
    rand: Option<&mut dyn UniformSource>,
) -> Result<BetaArray, KernelError> {
    validate_shape_params("beta_sample_array", alpha, beta)?;
    let n = element_count("beta_sample_array", dims)?;
    let mut data = vec![0.0; n];
    fill_dispatch(&mut data, alpha, beta, rand);
    Ok(BetaArray {
        dims: dims.to_vec(),
        data,
    })
}

/// Writes a `rows` × `cols` row-major matrix of Beta(α, β) variates into `output`.
///
/// Values are drawn in f64 and cast to `T`. For `f32` a draw within half an ulp
/// of 0 or 1 can round onto the boundary.
///
/// ## Errors
/// - `KernelError::InvalidArguments` for invalid α or β.
/// - `KernelError::LengthMismatch` if `output.len() != rows * cols`.
/// - `KernelError::OutOfBounds` if `rows * cols` overflows or exceeds the limit.
pub fn beta_sample_matrix_to<T: Float>(
    output: &mut [T],
    rows: usize,
    cols: usize,
    alpha: f64,
    beta: f64,
    rand: Option<&mut dyn UniformSource>,
) -> Result<(), KernelError> {
    validate_shape_params("beta_sample_matrix_to", alpha, beta)?;
    let n = element_count("beta_sample_matrix_to", &[rows, cols])?;
    if output.len() != n {
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            "beta_sample_matrix_to".into(),
            output.len(),
            n,
        )));
    }
    fill_dispatch(output, alpha, beta, rand);
    Ok(())
}

/// Allocates a `rows` × `cols` row-major matrix of Beta(α, β) variates.
pub fn beta_sample_matrix<T: Float>(
    rows: usize,
    cols: usize,
    alpha: f64,
    beta: f64,
    rand: Option<&mut dyn UniformSource>,
) -> Result<DenseMatrix<T>, KernelError> {
    validate_shape_params("beta_sample_matrix", alpha, beta)?;
    let n = element_count("beta_sample_matrix", &[rows, cols])?;
    let mut data = vec![T::zero(); n];
    fill_dispatch(&mut data, alpha, beta, rand);
    Ok(DenseMatrix { rows, cols, data })
}
