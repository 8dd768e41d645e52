use bpimage_image::{Image, ImageDtype, ImageError};

use crate::{color, error::ImgprocError, parallel};

fn check_size<T, const C: usize>(src: &Image<T, C>, dst: &Image<T, C>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }
    Ok(())
}

fn check_strength(name: &'static str, strength: f32) -> Result<(), ImgprocError> {
    if !(strength.is_finite() && strength >= 0.0) {
        return Err(ImgprocError::invalid_parameter(
            name,
            format!("must be a non-negative number, got {strength}"),
        ));
    }
    Ok(())
}

/// Adjust the brightness of an image.
///
/// dst(x,y,c) = src(x,y,c) * strength
///
/// saturated to the pixel range.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image to store the result.
/// * `strength` - The non-negative brightness factor, 1 keeps the image unchanged.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match or if `strength` is negative.
pub fn adjust_brightness<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    strength: f32,
) -> Result<(), ImgprocError>
where
    T: ImageDtype,
{
    check_size(src, dst)?;
    check_strength("strength", strength)?;

    parallel::par_iter_rows_val(src, dst, |&src_val, dst_val| {
        let v: f32 = src_val.into();
        *dst_val = T::from_f32(v * strength);
    });

    Ok(())
}

/// Adjust the contrast of an image.
///
/// Every value is interpolated between the global mean `m` of all the samples of the image
/// and itself:
///
/// dst(x,y,c) = m + (src(x,y,c) - m) * strength
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image to store the result.
/// * `strength` - The non-negative contrast factor. 0 gives a flat image, 1 the source.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match or if `strength` is negative.
pub fn adjust_contrast<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    strength: f32,
) -> Result<(), ImgprocError>
where
    T: ImageDtype,
{
    check_size(src, dst)?;
    check_strength("strength", strength)?;

    let samples = src.as_slice();
    if samples.is_empty() {
        return Ok(());
    }

    let sum: f64 = samples
        .iter()
        .map(|&v| {
            let v: f32 = v.into();
            v as f64
        })
        .sum();
    let mean = (sum / samples.len() as f64) as f32;

    parallel::par_iter_rows_val(src, dst, |&src_val, dst_val| {
        let v: f32 = src_val.into();
        *dst_val = T::from_f32(mean + (v - mean) * strength);
    });

    Ok(())
}

/// Adjust the saturation of an RGB image.
///
/// Every channel is interpolated between the luma `Y` of its pixel and itself:
///
/// dst(x,y,c) = Y(x,y) + (src(x,y,c) - Y(x,y)) * strength
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output RGB image to store the result.
/// * `strength` - The non-negative saturation factor. 0 gives a gray image, 1 the source.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match or if `strength` is negative.
pub fn adjust_saturation<T>(
    src: &Image<T, 3>,
    dst: &mut Image<T, 3>,
    strength: f32,
) -> Result<(), ImgprocError>
where
    T: ImageDtype,
{
    check_size(src, dst)?;
    check_strength("strength", strength)?;

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        // the gray level is rounded like the grayscale image it stands for
        let y = color::luma(src_pixel).round();
        for (out, &v) in dst_pixel.iter_mut().zip(src_pixel) {
            let v: f32 = v.into();
            *out = T::from_f32(y + (v - y) * strength);
        }
    });

    Ok(())
}

/// Invert an 8-bit image.
///
/// dst(x,y,c) = 255 - src(x,y,c)
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image to store the result.
///
/// # Example
///
/// ```
/// use bpimage_image::{Image, ImageSize};
/// use bpimage_imgproc::enhance::invert;
///
/// let image = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![10, 20, 30]).unwrap();
/// let mut inverted = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// invert(&image, &mut inverted).unwrap();
/// assert_eq!(inverted.as_slice(), &[245, 235, 225]);
/// ```
pub fn invert<const C: usize>(src: &Image<u8, C>, dst: &mut Image<u8, C>) -> Result<(), ImageError> {
    check_size(src, dst)?;

    parallel::par_iter_rows_val(src, dst, |&src_val, dst_val| {
        *dst_val = u8::MAX - src_val;
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use bpimage_image::{Image, ImageError, ImageSize};

    use super::*;

    #[test]
    fn test_adjust_brightness() -> Result<(), ImgprocError> {
        let image = Image::<u8, 3>::new([2, 1].into(), vec![10, 100, 200, 0, 1, 255])?;
        let mut dst = Image::from_size_val(image.size(), 0)?;

        adjust_brightness(&image, &mut dst, 1.5)?;
        assert_eq!(dst.as_slice(), &[15, 150, 255, 0, 2, 255]);

        adjust_brightness(&image, &mut dst, 1.0)?;
        assert_eq!(dst, image);

        assert!(matches!(
            adjust_brightness(&image, &mut dst, -0.5),
            Err(ImgprocError::InvalidParameter { name: "strength", .. })
        ));
        Ok(())
    }

    #[test]
    fn test_adjust_contrast() -> Result<(), ImgprocError> {
        // mean 100
        let image = Image::<u8, 1>::new([4, 1].into(), vec![40, 80, 120, 160])?;
        let mut dst = Image::from_size_val(image.size(), 0)?;

        adjust_contrast(&image, &mut dst, 2.0)?;
        assert_eq!(dst.as_slice(), &[0, 60, 140, 220]);

        adjust_contrast(&image, &mut dst, 0.0)?;
        assert_eq!(dst.as_slice(), &[100; 4]);

        adjust_contrast(&image, &mut dst, 1.0)?;
        assert_eq!(dst, image);
        Ok(())
    }

    #[test]
    fn test_adjust_saturation() -> Result<(), ImgprocError> {
        let image = Image::<u8, 3>::new([1, 1].into(), vec![10, 20, 30])?;
        let mut dst = Image::from_size_val(image.size(), 0)?;

        // luma 18.6 rounds to 19
        adjust_saturation(&image, &mut dst, 0.0)?;
        assert_eq!(dst.as_slice(), &[19, 19, 19]);

        adjust_saturation(&image, &mut dst, 2.0)?;
        assert_eq!(dst.as_slice(), &[1, 21, 41]);

        assert!(adjust_saturation(&image, &mut dst, f32::NAN).is_err());
        Ok(())
    }

    #[test]
    fn test_invert() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![10, 20, 30, 0, 128, 255],
        )?;
        let mut dst = Image::from_size_val(image.size(), 0)?;
        invert(&image, &mut dst)?;
        assert_eq!(dst.as_slice(), &[245, 235, 225, 255, 127, 0]);
        Ok(())
    }

    #[test]
    fn test_size_mismatch() -> Result<(), ImgprocError> {
        let image = Image::<u8, 3>::from_size_val([2, 2].into(), 0)?;
        let mut dst = Image::from_size_val([2, 3].into(), 0)?;
        assert_eq!(
            adjust_brightness(&image, &mut dst, 1.0),
            Err(ImgprocError::Image(ImageError::InvalidImageSize(2, 2, 2, 3)))
        );
        Ok(())
    }
}
