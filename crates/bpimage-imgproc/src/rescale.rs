use bpimage_image::{Image, ImageSize};

use crate::{
    error::ImgprocError,
    warp::{affine_transform, canvas_side, AffineMatrix},
};

/// Scale an image uniformly with nearest neighbor sampling.
///
/// The destination has `round(H * factor)` rows and `round(W * factor)` columns. Pixel centres
/// are aligned, i.e. destination pixel `d` samples the source at `(d + 0.5) / factor - 0.5`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `factor` - The scale factor, finite and greater than zero.
///
/// # Errors
///
/// Fails if `factor` is not a positive finite number, or if it would produce an empty image
/// or one with a side longer than `u32::MAX` pixels.
///
/// # Example
///
/// ```
/// use bpimage_image::{Image, ImageSize};
/// use bpimage_imgproc::rescale::scale;
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 10, height: 10 }, 7).unwrap();
/// let scaled = scale(&image, 2.0).unwrap();
///
/// assert_eq!(scaled.size(), ImageSize { width: 20, height: 20 });
/// ```
pub fn scale<T, const C: usize>(src: &Image<T, C>, factor: f32) -> Result<Image<T, C>, ImgprocError>
where
    T: Copy + Default + Send + Sync,
{
    if !(factor.is_finite() && factor > 0.0) {
        return Err(ImgprocError::invalid_parameter(
            "factor",
            format!("must be greater than zero, got {factor}"),
        ));
    }

    let side = |len: usize| {
        canvas_side(len as f64 * factor as f64).ok_or_else(|| {
            ImgprocError::invalid_parameter(
                "factor",
                format!("scaling {} by {factor} gives a too large image", src.size()),
            )
        })
    };

    let dst_size = ImageSize {
        width: side(src.width())?,
        height: side(src.height())?,
    };

    if dst_size.width == 0 || dst_size.height == 0 {
        return Err(ImgprocError::invalid_parameter(
            "factor",
            format!("scaling {} by {factor} gives an empty image", src.size()),
        ));
    }

    // src = (dst + 0.5) / factor - 0.5
    let offset = 0.5 / factor - 0.5;
    let inv = AffineMatrix::translation(offset, offset) * AffineMatrix::scaling(1.0 / factor, 1.0 / factor);

    log::debug!("scale by {factor}, {} -> {dst_size}", src.size());

    affine_transform(src, &inv, dst_size)
}
