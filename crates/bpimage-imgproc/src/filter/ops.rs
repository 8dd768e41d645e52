use bpimage_image::{Image, ImageDtype};

use super::{
    convolve,
    kernels::{self, EmbossDirection},
};
use crate::{border::BorderMode, error::ImgprocError};

/// Blur an image using a box blur filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `radius` - The number of pixels taken in each direction, at least 1.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
///
/// # Errors
///
/// A `radius` of zero is rejected instead of returning the source unchanged.
///
/// # Example
///
/// ```
/// use bpimage_image::{Image, ImageSize};
/// use bpimage_imgproc::filter::box_blur;
///
/// let src = Image::<u8, 3>::from_size_val(ImageSize { width: 5, height: 5 }, 100).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
///
/// box_blur(&src, &mut dst, 1).unwrap();
/// assert!(dst.as_slice().iter().all(|&v| v == 100));
/// ```
pub fn box_blur<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    radius: usize,
) -> Result<(), ImgprocError> {
    let kernel = kernels::box_blur_kernel(radius)?;
    convolve(src, dst, &kernel, 0.0, BorderMode::Replicate)
}

/// Blur an image using a gaussian blur filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `radius` - The number of pixels taken in each direction, at least 1.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn gaussian_blur<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    radius: usize,
    sigma: f32,
) -> Result<(), ImgprocError> {
    let kernel = kernels::gaussian_kernel(radius, sigma)?;
    convolve(src, dst, &kernel, 0.0, BorderMode::Replicate)
}

/// Sharpen an image with an unsharp masking kernel.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `strength` - The non-negative sharpening strength. Large values produce artifacts.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn sharpen<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    strength: f32,
) -> Result<(), ImgprocError> {
    let kernel = kernels::sharpen_kernel(strength)?;
    convolve(src, dst, &kernel, 0.0, BorderMode::Replicate)
}

/// Detect the edges of an image with a laplacian kernel.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn outline<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImgprocError> {
    let kernel = kernels::outline_kernel()?;
    convolve(src, dst, &kernel, 0.0, BorderMode::Replicate)
}

/// Emboss an image as if lit from `direction`.
///
/// Flat regions become mid-gray.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `direction` - The side the image is lit from.
/// * `strength` - The length of the emboss run on each side of the center, at least 1.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn emboss<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    direction: EmbossDirection,
    strength: usize,
) -> Result<(), ImgprocError> {
    let kernel = kernels::emboss_kernel(direction, strength)?;
    convolve(src, dst, &kernel, kernels::EMBOSS_BIAS, BorderMode::Replicate)
}

/// Blur an image along its anti-diagonal, imitating camera motion.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn motion_blur<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImgprocError> {
    let kernel = kernels::motion_blur_kernel()?;
    convolve(src, dst, &kernel, 0.0, BorderMode::Replicate)
}

/// Smooth an image with a center-weighted 5x5 kernel.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn smooth<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImgprocError> {
    let kernel = kernels::smooth_kernel()?;
    convolve(src, dst, &kernel, 0.0, BorderMode::Replicate)
}

#[cfg(test)]
mod tests {
    use bpimage_image::{Image, ImageSize};

    use super::*;

    fn checker(width: usize, height: usize) -> Result<Image<u8, 3>, ImgprocError> {
        let data = (0..width * height)
            .flat_map(|i| {
                let v = if (i % width + i / width) % 2 == 0 { 200 } else { 40 };
                [v, v / 2, 255 - v]
            })
            .collect();
        Ok(Image::new(ImageSize { width, height }, data)?)
    }

    #[test]
    fn box_blur_uniform() -> Result<(), ImgprocError> {
        let src = Image::<u8, 3>::from_size_val([5, 5].into(), 100)?;
        let mut dst = Image::from_size_val(src.size(), 0)?;
        box_blur(&src, &mut dst, 1)?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn box_blur_zero_radius_rejected() -> Result<(), ImgprocError> {
        let src = Image::<u8, 3>::from_size_val([5, 5].into(), 100)?;
        let mut dst = Image::from_size_val(src.size(), 0)?;
        let res = box_blur(&src, &mut dst, 0);
        assert!(matches!(
            res,
            Err(ImgprocError::InvalidParameter { name: "radius", .. })
        ));
        Ok(())
    }

    #[test]
    fn box_blur_averages_checker() -> Result<(), ImgprocError> {
        let src = checker(6, 6)?;
        let mut dst = Image::from_size_val(src.size(), 0)?;
        box_blur(&src, &mut dst, 1)?;

        // interior pixel on a 200 square: 5 * 200 + 4 * 40 over 9
        assert_eq!(dst.pixel(2, 2), Some(&[129u8, 64, 126][..]));
        Ok(())
    }

    #[test]
    fn gaussian_blur_preserves_uniform() -> Result<(), ImgprocError> {
        let src = Image::<u8, 3>::from_size_val([7, 6].into(), 77)?;
        let mut dst = Image::from_size_val(src.size(), 0)?;
        gaussian_blur(&src, &mut dst, 2, 1.2)?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn sharpen_and_outline_flat() -> Result<(), ImgprocError> {
        let src = Image::<u8, 3>::from_size_val([4, 4].into(), 60)?;
        let mut dst = Image::from_size_val(src.size(), 0)?;

        sharpen(&src, &mut dst, 5.0)?;
        assert_eq!(dst, src);

        outline(&src, &mut dst)?;
        assert!(dst.as_slice().iter().all(|&v| v == 0));

        assert!(sharpen(&src, &mut dst, -1.0).is_err());
        Ok(())
    }

    #[test]
    fn emboss_flat_is_gray() -> Result<(), ImgprocError> {
        let src = Image::<u8, 3>::from_size_val([5, 5].into(), 13)?;
        let mut dst = Image::from_size_val(src.size(), 0)?;
        emboss(&src, &mut dst, EmbossDirection::Left, 2)?;
        assert!(dst.as_slice().iter().all(|&v| v == 128));
        Ok(())
    }

    #[test]
    fn emboss_vertical_edge() -> Result<(), ImgprocError> {
        // dark left half, bright right half
        let data = (0..4 * 4)
            .flat_map(|i| if i % 4 < 2 { [0u8; 3] } else { [100u8; 3] })
            .collect();
        let src = Image::<u8, 3>::new([4, 4].into(), data)?;
        let mut dst = Image::from_size_val(src.size(), 0)?;

        emboss(&src, &mut dst, EmbossDirection::Right, 1)?;
        // lit from the right: rising edge towards the light is bright
        assert_eq!(dst.get([1, 1, 0]), Some(&228));
        assert_eq!(dst.get([1, 2, 0]), Some(&228));
        assert_eq!(dst.get([1, 0, 0]), Some(&128));

        emboss(&src, &mut dst, EmbossDirection::Left, 1)?;
        assert_eq!(dst.get([1, 1, 0]), Some(&28));
        Ok(())
    }

    #[test]
    fn motion_blur_requires_large_image() -> Result<(), ImgprocError> {
        let src = Image::<u8, 3>::from_size_val([8, 12].into(), 50)?;
        let mut dst = Image::from_size_val(src.size(), 0)?;
        let res = motion_blur(&src, &mut dst);
        assert_eq!(res, Err(ImgprocError::KernelLargerThanImage(9, 8, 12)));

        let src = Image::<u8, 3>::from_size_val([9, 9].into(), 50)?;
        let mut dst = Image::from_size_val(src.size(), 0)?;
        motion_blur(&src, &mut dst)?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn smooth_uniform() -> Result<(), ImgprocError> {
        let src = Image::<u8, 3>::from_size_val([5, 5].into(), 250)?;
        let mut dst = Image::from_size_val(src.size(), 0)?;
        smooth(&src, &mut dst)?;
        assert_eq!(dst, src);
        Ok(())
    }
}
