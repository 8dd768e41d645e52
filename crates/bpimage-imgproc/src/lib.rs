#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// border handling for neighborhood operations.
pub mod border;

/// color transformations module.
pub mod color;

/// image enhancement module.
pub mod enhance;

/// Error types for the image processing operations.
pub mod error;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// module containing parallelization utilities.
pub mod parallel;

/// image rescaling module.
pub mod rescale;

/// image rotation module.
pub mod rotate;

/// image shearing module.
pub mod shear;

/// image geometric transformations module.
pub mod warp;

pub use crate::error::ImgprocError;
