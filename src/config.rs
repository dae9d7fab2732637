// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration constants controlling kernel behaviour.
//! These values are compile-time constants.

/// Maximum number of variates a single fill kernel call may produce.
///
/// Prevents excessive memory allocation when an array or matrix shape is
/// mistyped. Requests exceeding this limit return `KernelError::OutOfBounds`
/// rather than allocating unbounded memory.
pub const MAX_SAMPLE_ELEMENTS: usize = 1 << 30;
