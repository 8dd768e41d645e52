use bpimage_image::{Image, ImageDtype, ImageError};

use crate::parallel;

/// The sepia tone matrix, one row per output channel.
#[rustfmt::skip]
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Apply a sepia tone to an RGB image.
///
/// Each output channel is a fixed weighted sum of the input channels, saturated to the
/// pixel range.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output RGB image.
///
/// Precondition: the input and output images must have the same size.
pub fn sepia<T>(src: &Image<T, 3>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
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
        let (r, g, b): (f32, f32, f32) = (src_pixel[0].into(), src_pixel[1].into(), src_pixel[2].into());
        for (out, w) in dst_pixel.iter_mut().zip(SEPIA.iter()) {
            *out = T::from_f32(w[0] * r + w[1] * g + w[2] * b);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use bpimage_image::{Image, ImageError};

    #[test]
    fn sepia_tone() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([3, 1].into(), vec![0, 0, 0, 255, 255, 255, 100, 50, 20])?;
        let mut dst = Image::from_size_val(image.size(), 0)?;
        super::sepia(&image, &mut dst)?;

        // 39.3 + 38.45 + 3.78, 34.9 + 34.3 + 3.36, 27.2 + 26.7 + 2.62
        assert_eq!(dst.as_slice(), &[0, 0, 0, 255, 255, 239, 82, 73, 57]);
        Ok(())
    }
}
