use bpimage_image::{Image, ImageSize};

use crate::{
    error::ImgprocError,
    warp::{affine_transform, expanded_canvas, AffineMatrix},
};

/// Rotate an image by a multiple of 90 degrees, counter-clockwise.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `times` - The number of quarter turns. Negative values turn clockwise and the count is
///   taken modulo 4.
///
/// # Returns
///
/// The rotated image, with shape (W, H, C) for an odd number of quarter turns.
///
/// # Example
///
/// ```
/// use bpimage_image::{Image, ImageSize};
/// use bpimage_imgproc::rotate::rotate90;
///
/// // 0 1 2
/// // 3 4 5
/// let image = Image::<u8, 1>::new(ImageSize { width: 3, height: 2 }, vec![0, 1, 2, 3, 4, 5]).unwrap();
///
/// let rotated = rotate90(&image, 1).unwrap();
///
/// // 2 5
/// // 1 4
/// // 0 3
/// assert_eq!(rotated.size(), ImageSize { width: 2, height: 3 });
/// assert_eq!(rotated.as_slice(), &[2, 5, 1, 4, 0, 3]);
/// ```
pub fn rotate90<T, const C: usize>(src: &Image<T, C>, times: i32) -> Result<Image<T, C>, ImgprocError>
where
    T: Copy + Default + Send + Sync,
{
    let last_row = src.rows() as f32 - 1.0;
    let last_col = src.cols() as f32 - 1.0;
    let transposed = ImageSize {
        width: src.height(),
        height: src.width(),
    };

    // a quarter turn is a transpose composed with a flip
    let (inv, dst_size) = match times.rem_euclid(4) {
        0 => return Ok(src.clone()),
        1 => (
            [[0.0, 1.0, 0.0], [-1.0, 0.0, last_col], [0.0, 0.0, 1.0]],
            transposed,
        ),
        2 => (
            [[-1.0, 0.0, last_row], [0.0, -1.0, last_col], [0.0, 0.0, 1.0]],
            src.size(),
        ),
        _ => (
            [[0.0, -1.0, last_row], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            transposed,
        ),
    };

    affine_transform(src, &AffineMatrix::new(inv)?, dst_size)
}

/// Rotate an image about its center.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `angle` - The rotation angle in degrees, counter-clockwise positive.
/// * `expand` - Whether to grow the canvas to hold the whole rotated image. Otherwise the
///   output keeps the source size and the corners are cropped.
///
/// # Returns
///
/// The rotated image. Uncovered pixels are black.
///
/// # Errors
///
/// Fails if `angle` is not finite.
pub fn rotate<T, const C: usize>(
    src: &Image<T, C>,
    angle: f32,
    expand: bool,
) -> Result<Image<T, C>, ImgprocError>
where
    T: Copy + Default + Send + Sync,
{
    if !angle.is_finite() {
        return Err(ImgprocError::invalid_parameter(
            "angle",
            format!("must be finite, got {angle}"),
        ));
    }

    let center_r = (src.rows() as f32 - 1.0) / 2.0;
    let center_c = (src.cols() as f32 - 1.0) / 2.0;

    let forward = AffineMatrix::translation(center_r, center_c)
        * AffineMatrix::rotation(angle)
        * AffineMatrix::translation(-center_r, -center_c);

    let (forward, dst_size) = if expand {
        let (canvas, shifted) = expanded_canvas(&forward, src.size())?;
        (shifted, canvas)
    } else {
        (forward, src.size())
    };

    log::debug!("rotate {angle} degrees, {} -> {dst_size}", src.size());

    affine_transform(src, &forward.inverse()?, dst_size)
}
