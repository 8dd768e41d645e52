use bpimage_image::Image;

use crate::{
    error::ImgprocError,
    warp::{affine_transform, AffineMatrix},
};

/// Mirror the input image across its vertical axis, swapping left and right.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use bpimage_image::{Image, ImageSize};
/// use bpimage_imgproc::flip::flip_vertical;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let flipped = flip_vertical(&image).unwrap();
///
/// assert_eq!(flipped.as_slice(), &[1, 0, 3, 2, 5, 4]);
/// ```
pub fn flip_vertical<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImgprocError>
where
    T: Copy + Default + Send + Sync,
{
    let last_col = src.cols() as f32 - 1.0;
    let inv = AffineMatrix::new([[1.0, 0.0, 0.0], [0.0, -1.0, last_col], [0.0, 0.0, 1.0]])?;
    affine_transform(src, &inv, src.size())
}

/// Mirror the input image across its horizontal axis, swapping top and bottom.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image.
pub fn flip_horizontal<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImgprocError>
where
    T: Copy + Default + Send + Sync,
{
    let last_row = src.rows() as f32 - 1.0;
    let inv = AffineMatrix::new([[-1.0, 0.0, last_row], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])?;
    affine_transform(src, &inv, src.size())
}
