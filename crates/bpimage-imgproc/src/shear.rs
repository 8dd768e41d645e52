use bpimage_image::Image;

use crate::{
    error::ImgprocError,
    warp::{affine_transform, expanded_canvas, AffineMatrix},
};

/// Shear an image.
///
/// The forward transform is `x' = x + shear_x * y` and `y' = shear_y * x + y`, with `x` the
/// column and `y` the row coordinate, i.e. the matrix `[[1, shear_x, 0], [shear_y, 1, 0],
/// [0, 0, 1]]` acting on `(x, y, 1)`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `shear_x` - The horizontal shear factor.
/// * `shear_y` - The vertical shear factor.
/// * `expand` - Whether to grow the canvas to hold the whole sheared image. The content is
///   shifted so that negative shear factors do not push it off the canvas.
///
/// # Errors
///
/// Fails if a factor is not finite, or with [`ImgprocError::SingularTransform`] if
/// `shear_x * shear_y` is 1.
///
/// # Example
///
/// ```
/// use bpimage_image::{Image, ImageSize};
/// use bpimage_imgproc::shear::shear;
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 4, height: 3 }, 255).unwrap();
/// let sheared = shear(&image, 1.0, 0.0, true).unwrap();
///
/// assert_eq!(sheared.size(), ImageSize { width: 6, height: 3 });
/// ```
pub fn shear<T, const C: usize>(
    src: &Image<T, C>,
    shear_x: f32,
    shear_y: f32,
    expand: bool,
) -> Result<Image<T, C>, ImgprocError>
where
    T: Copy + Default + Send + Sync,
{
    if !(shear_x.is_finite() && shear_y.is_finite()) {
        return Err(ImgprocError::invalid_parameter(
            "shear",
            format!("factors must be finite, got ({shear_x}, {shear_y})"),
        ));
    }

    let forward = AffineMatrix::shear(shear_x, shear_y);

    let (forward, dst_size) = if expand {
        let (canvas, shifted) = expanded_canvas(&forward, src.size())?;
        (shifted, canvas)
    } else {
        (forward, src.size())
    };

    affine_transform(src, &forward.inverse()?, dst_size)
}

#[cfg(test)]
mod tests {
    use bpimage_image::{Image, ImageSize};

    use super::shear;
    use crate::error::ImgprocError;

    fn ones(width: usize, height: usize) -> Result<Image<u8, 1>, ImgprocError> {
        Ok(Image::from_size_val(ImageSize { width, height }, 1)?)
    }

    #[test]
    fn shear_zero_is_identity() -> Result<(), ImgprocError> {
        let image = Image::<u8, 3>::new([3, 2].into(), (0..18).collect())?;
        assert_eq!(shear(&image, 0.0, 0.0, false)?, image);
        assert_eq!(shear(&image, 0.0, 0.0, true)?, image);
        Ok(())
    }

    #[test]
    fn shear_x_positive() -> Result<(), ImgprocError> {
        let sheared = shear(&ones(3, 3)?, 1.0, 0.0, true)?;
        assert_eq!(sheared.size(), ImageSize { width: 5, height: 3 });
        // each row is shifted right by its index
        #[rustfmt::skip]
        assert_eq!(
            sheared.as_slice(),
            &[
                1, 1, 1, 0, 0,
                0, 1, 1, 1, 0,
                0, 0, 1, 1, 1,
            ]
        );
        Ok(())
    }

    #[test]
    fn shear_x_negative_stays_on_canvas() -> Result<(), ImgprocError> {
        let sheared = shear(&ones(3, 3)?, -1.0, 0.0, true)?;
        assert_eq!(sheared.size(), ImageSize { width: 5, height: 3 });
        #[rustfmt::skip]
        assert_eq!(
            sheared.as_slice(),
            &[
                0, 0, 1, 1, 1,
                0, 1, 1, 1, 0,
                1, 1, 1, 0, 0,
            ]
        );

        // without expansion the bottom rows slide off the left edge
        let cropped = shear(&ones(3, 3)?, -1.0, 0.0, false)?;
        assert_eq!(cropped.as_slice(), &[1, 1, 1, 1, 1, 0, 1, 0, 0]);
        Ok(())
    }

    #[test]
    fn shear_y_negative_stays_on_canvas() -> Result<(), ImgprocError> {
        let sheared = shear(&ones(3, 3)?, 0.0, -1.0, true)?;
        assert_eq!(sheared.size(), ImageSize { width: 3, height: 5 });
        // each column is shifted up by its index
        #[rustfmt::skip]
        assert_eq!(
            sheared.as_slice(),
            &[
                0, 0, 1,
                0, 1, 1,
                1, 1, 1,
                1, 1, 0,
                1, 0, 0,
            ]
        );
        Ok(())
    }

    #[test]
    fn shear_huge_factor_is_rejected() -> Result<(), ImgprocError> {
        let image = ones(4, 4)?;
        assert!(matches!(
            shear(&image, 1e30, 0.0, true),
            Err(ImgprocError::InvalidParameter { .. })
        ));
        assert!(shear(&image, 0.0, -1e30, true).is_err());
        Ok(())
    }

    #[test]
    fn shear_y_grows_height() -> Result<(), ImgprocError> {
        let sheared = shear(&ones(3, 2)?, 0.0, 0.5, true)?;
        assert_eq!(sheared.size(), ImageSize { width: 3, height: 3 });
        Ok(())
    }

    #[test]
    fn shear_singular() -> Result<(), ImgprocError> {
        let image = ones(4, 4)?;
        assert!(matches!(
            shear(&image, 2.0, 0.5, false),
            Err(ImgprocError::SingularTransform(_))
        ));
        assert!(shear(&image, f32::NAN, 0.0, true).is_err());
        Ok(())
    }
}
