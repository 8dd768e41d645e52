use bpimage_image::{Image, ImageDtype, ImageError};

use crate::parallel;

/// Define the RGB weights for the grayscale conversion.
const RW: f32 = 0.2126;
const GW: f32 = 0.7152;
const BW: f32 = 0.0722;

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.2126 * R + 0.7152 * G + 0.0722 * B
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use bpimage_image::{Image, ImageSize};
/// use bpimage_imgproc::color::gray_from_rgb;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![255, 255, 255, 0, 0, 0],
/// )
/// .unwrap();
///
/// let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// gray_from_rgb(&image, &mut gray).unwrap();
/// assert_eq!(gray.as_slice(), &[255, 0]);
/// ```
pub fn gray_from_rgb<T>(src: &Image<T, 3>, dst: &mut Image<T, 1>) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = T::from_f32(luma(src_pixel));
    });

    Ok(())
}

/// Convert a grayscale image to an RGB image by replicating the grayscale value across all
/// three channels.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output RGB image.
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_gray<T>(src: &Image<T, 1>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel.fill(src_pixel[0]);
    });

    Ok(())
}

/// The unrounded luma of an RGB pixel.
pub(crate) fn luma<T: ImageDtype>(pixel: &[T]) -> f32 {
    let (r, g, b): (f32, f32, f32) = (pixel[0].into(), pixel[1].into(), pixel[2].into());
    RW * r + GW * g + BW * b
}

#[cfg(test)]
mod tests {
    use bpimage_image::{Image, ImageError, ImageSize};

    #[test]
    fn gray_from_rgb() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![255, 255, 255, 0, 0, 0, 255, 0, 0, 10, 20, 30],
        )?;

        let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        super::gray_from_rgb(&image, &mut gray)?;

        // 0.2126 * 255 = 54.2, 2.126 + 14.304 + 2.166 = 18.6
        assert_eq!(gray.as_slice(), &[255, 0, 54, 19]);
        Ok(())
    }

    #[test]
    fn gray_from_rgb_f32() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new([1, 1].into(), vec![1.0, 1.0, 1.0])?;
        let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;
        super::gray_from_rgb(&image, &mut gray)?;
        approx::assert_relative_eq!(gray.as_slice()[0], 1.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn gray_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([2, 2].into(), 0)?;
        let mut gray = Image::<u8, 1>::from_size_val([3, 2].into(), 0)?;
        assert_eq!(
            super::gray_from_rgb(&image, &mut gray),
            Err(ImageError::InvalidImageSize(2, 2, 3, 2))
        );
        Ok(())
    }

    #[test]
    fn rgb_from_gray() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([2, 1].into(), vec![7, 200])?;
        let mut rgb = Image::<u8, 3>::from_size_val(image.size(), 0)?;
        super::rgb_from_gray(&image, &mut rgb)?;
        assert_eq!(rgb.as_slice(), &[7, 7, 7, 200, 200, 200]);
        Ok(())
    }
}
