//! Affine warping
//!
//! Geometric transforms are applied by backward mapping: each destination pixel looks up the
//! source pixel it comes from through the inverse transform, so the output has no holes.

mod affine;
pub use affine::{affine_transform, expanded_canvas, warp_affine};
pub(crate) use affine::canvas_side;

mod matrix;
pub use matrix::AffineMatrix;
