use bpimage_image::{Image, ImageSize};

use super::AffineMatrix;
use crate::{error::ImgprocError, parallel};

/// Resample an image through an inverse affine transform.
///
/// Every destination pixel `(dy, dx)` is mapped to the source location
/// `(sy, sx, 1) = inv_matrix * (dy, dx, 1)`, rounded to the nearest pixel. If that pixel lies
/// inside the source image its channels are copied, otherwise the destination pixel is set to
/// the background value `T::default()` (black).
///
/// The destination can have any size; it is usually computed by the caller from the forward
/// transform, see [`expanded_canvas`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H', W', C).
/// * `inv_matrix` - The transform from destination to source coordinates.
///
/// # Example
///
/// ```
/// use bpimage_image::{Image, ImageSize};
/// use bpimage_imgproc::warp::{warp_affine, AffineMatrix};
///
/// let src = Image::<u8, 3>::new(ImageSize { width: 2, height: 1 }, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
///
/// // sample one column to the right
/// warp_affine(&src, &mut dst, &AffineMatrix::translation(0.0, 1.0));
///
/// assert_eq!(dst.as_slice(), &[4, 5, 6, 0, 0, 0]);
/// ```
pub fn warp_affine<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    inv_matrix: &AffineMatrix,
) where
    T: Copy + Default + Send + Sync,
{
    let (src_rows, src_cols) = (src.rows() as f32, src.cols() as f32);
    let src_stride = src.cols() * C;
    let src_data = src.as_slice();

    let [[m00, m01, m02], [m10, m11, m12], _] = *inv_matrix.as_array();

    parallel::par_iter_dst_rows(dst, |dy, dst_row| {
        let dy = dy as f32;
        for (dx, dst_pixel) in dst_row.chunks_exact_mut(C).enumerate() {
            let dx = dx as f32;
            let sy = (m00 * dy + m01 * dx + m02).round();
            let sx = (m10 * dy + m11 * dx + m12).round();

            // NaN fails both comparisons
            if sy >= 0.0 && sy < src_rows && sx >= 0.0 && sx < src_cols {
                let offset = sy as usize * src_stride + sx as usize * C;
                dst_pixel.copy_from_slice(&src_data[offset..offset + C]);
            } else {
                dst_pixel.fill(T::default());
            }
        }
    });
}

/// Resample an image through an inverse affine transform into a new image.
///
/// See [`warp_affine`] for the sampling rule.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `inv_matrix` - The transform from destination to source coordinates.
/// * `dst_size` - The size of the returned image.
pub fn affine_transform<T, const C: usize>(
    src: &Image<T, C>,
    inv_matrix: &AffineMatrix,
    dst_size: ImageSize,
) -> Result<Image<T, C>, ImgprocError>
where
    T: Copy + Default + Send + Sync,
{
    let mut dst = Image::from_size_val(dst_size, T::default())?;
    warp_affine(src, &mut dst, inv_matrix);
    Ok(dst)
}

/// Largest number of pixels along one side of a computed canvas.
const MAX_CANVAS_SIDE: f64 = u32::MAX as f64;

/// Convert a canvas extent in pixels to a side length.
///
/// Returns `None` if `extent` is not finite, is negative or exceeds [`MAX_CANVAS_SIDE`].
pub(crate) fn canvas_side(extent: f64) -> Option<usize> {
    let extent = extent.round();
    (extent.is_finite() && (0.0..=MAX_CANVAS_SIDE).contains(&extent)).then_some(extent as usize)
}

/// Compute the canvas that holds a whole image after a forward transform.
///
/// The centres of the four corner pixels are mapped through `forward`, and the canvas spans
/// their bounding box: `round(max - min) + 1` pixels along each axis.
///
/// # Arguments
///
/// * `forward` - The transform from source to destination coordinates.
/// * `size` - The size of the source image.
///
/// # Returns
///
/// The canvas size and `forward` shifted so that the bounding box starts at `(0, 0)`.
///
/// # Errors
///
/// Fails with [`ImgprocError::InvalidParameter`] if the bounding box is not finite or has a
/// side longer than `u32::MAX` pixels.
///
/// # Example
///
/// ```
/// use bpimage_image::ImageSize;
/// use bpimage_imgproc::warp::{expanded_canvas, AffineMatrix};
///
/// let (canvas, _) =
///     expanded_canvas(&AffineMatrix::scaling(2.0, 1.0), ImageSize { width: 4, height: 3 }).unwrap();
/// assert_eq!(canvas, ImageSize { width: 4, height: 5 });
/// ```
pub fn expanded_canvas(
    forward: &AffineMatrix,
    size: ImageSize,
) -> Result<(ImageSize, AffineMatrix), ImgprocError> {
    let last_row = size.height.saturating_sub(1) as f32;
    let last_col = size.width.saturating_sub(1) as f32;

    let corners = [
        forward.transform_point(0.0, 0.0),
        forward.transform_point(0.0, last_col),
        forward.transform_point(last_row, 0.0),
        forward.transform_point(last_row, last_col),
    ];

    let (min_r, max_r, min_c, max_c) = corners.iter().fold(
        (f32::MAX, f32::MIN, f32::MAX, f32::MIN),
        |(min_r, max_r, min_c, max_c), &(r, c)| {
            (min_r.min(r), max_r.max(r), min_c.min(c), max_c.max(c))
        },
    );

    let side = |min: f32, max: f32| {
        canvas_side(max as f64 - min as f64)
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| {
                ImgprocError::invalid_parameter(
                    "forward",
                    format!("maps {size} to a canvas spanning [{min}, {max}]"),
                )
            })
    };

    let canvas = ImageSize {
        width: side(min_c, max_c)?,
        height: side(min_r, max_r)?,
    };

    log::debug!("expanded canvas {size} -> {canvas}");

    Ok((canvas, AffineMatrix::translation(-min_r, -min_c) * *forward))
}

#[cfg(test)]
mod tests {
    use bpimage_image::{Image, ImageSize};

    use super::*;

    fn ramp(width: usize, height: usize) -> Result<Image<u8, 3>, ImgprocError> {
        let data = (0..width * height)
            .flat_map(|i| [i as u8, (i / width) as u8, (i % width) as u8])
            .collect();
        Ok(Image::new(ImageSize { width, height }, data)?)
    }

    #[test]
    fn identity_copies() -> Result<(), ImgprocError> {
        let src = ramp(5, 4)?;
        let dst = affine_transform(&src, &AffineMatrix::IDENTITY, src.size())?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn out_of_bounds_is_black() -> Result<(), ImgprocError> {
        let src = Image::<u8, 3>::from_size_val([3, 3].into(), 200)?;
        let dst = affine_transform(&src, &AffineMatrix::translation(-1.0, 2.0), src.size())?;

        // only (1..3, 0) reads inside the source
        for y in 0..3 {
            for x in 0..3 {
                let expected = if y >= 1 && x == 0 { 200 } else { 0 };
                assert_eq!(dst.pixel(y, x), Some(&[expected; 3][..]), "at ({y}, {x})");
            }
        }
        Ok(())
    }

    #[test]
    fn larger_destination() -> Result<(), ImgprocError> {
        let src = ramp(2, 2)?;
        let dst = affine_transform(&src, &AffineMatrix::IDENTITY, [4, 3].into())?;
        assert_eq!(dst.size(), ImageSize { width: 4, height: 3 });
        assert_eq!(dst.pixel(1, 1), src.pixel(1, 1));
        assert_eq!(dst.pixel(2, 3), Some(&[0u8, 0, 0][..]));
        Ok(())
    }

    #[test]
    fn nearest_rounding() -> Result<(), ImgprocError> {
        let src = ramp(4, 1)?;
        // 0.6 rounds up to the next column, -0.4 rounds to zero
        let dst = affine_transform(&src, &AffineMatrix::translation(0.0, 0.6), src.size())?;
        assert_eq!(dst.get([0, 0, 2]), Some(&1));
        assert_eq!(dst.get([0, 3, 2]), Some(&0));

        let dst = affine_transform(&src, &AffineMatrix::translation(-0.4, -0.4), src.size())?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn canvas_of_quarter_turn() -> Result<(), ImgprocError> {
        let forward = AffineMatrix::rotation(90.0);
        let (canvas, shifted) = expanded_canvas(&forward, ImageSize { width: 5, height: 3 })?;
        assert_eq!(canvas, ImageSize { width: 3, height: 5 });

        // the source origin lands on the last row
        let (r, c) = shifted.transform_point(0.0, 0.0);
        assert!((r - 4.0).abs() < 1e-4);
        assert!(c.abs() < 1e-4);
        Ok(())
    }

    #[test]
    fn canvas_too_large() -> Result<(), ImgprocError> {
        let size = ImageSize { width: 4, height: 4 };
        for forward in [
            AffineMatrix::shear(1e30, 0.0),
            AffineMatrix::scaling(1e10, 1.0),
            AffineMatrix::scaling(f32::MAX, f32::MAX),
        ] {
            assert!(matches!(
                expanded_canvas(&forward, size),
                Err(ImgprocError::InvalidParameter { name: "forward", .. })
            ));
        }

        // the largest side that is still accepted
        let (canvas, _) = expanded_canvas(&AffineMatrix::scaling(1e9, 1.0), [1, 2].into())?;
        assert_eq!(canvas, ImageSize { width: 1, height: 1_000_000_001 });
        Ok(())
    }

    #[test]
    fn canvas_side_limits() {
        assert_eq!(canvas_side(2.4), Some(2));
        assert_eq!(canvas_side(-0.4), Some(0));
        assert_eq!(canvas_side(-1.0), None);
        assert_eq!(canvas_side(f64::NAN), None);
        assert_eq!(canvas_side(f64::INFINITY), None);
        assert_eq!(canvas_side(1e30), None);
    }
}
