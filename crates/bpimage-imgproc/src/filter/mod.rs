//! Filter operations
//!
//! This module provides the convolution engine and the named filters built on top of it.
//!
//! Kernels are applied in their natural orientation (correlation): the weight at
//! `kernel[ky, kx]` multiplies the source sample at `(y + ky - r, x + kx - r)`.

mod convolution;
pub use convolution::convolve;

mod kernel;
pub use kernel::Kernel;

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;
