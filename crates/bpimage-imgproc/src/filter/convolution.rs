use bpimage_image::{Image, ImageDtype, ImageError};
use rayon::prelude::*;

use super::Kernel;
use crate::{border::BorderMode, error::ImgprocError, parallel};

/// Convolve an image with a square kernel.
///
/// Every destination value is the kernel-weighted sum of the source neighborhood around the
/// same location, per channel, plus `bias`, converted back to the pixel type (rounded and
/// clamped to [0, 255] for `u8`):
///
/// dst(y, x, c) = sum_{ky, kx} kernel(ky, kx) * src(y + ky - r, x + kx - r, c) + bias
///
/// where `r` is the kernel radius. The kernel is not flipped. Samples outside the image are
/// resolved with `border`.
///
/// Kernels built with [`Kernel::separable`] are applied as a horizontal and a vertical 1D
/// pass, which gives the same result up to floating point rounding.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The NxN kernel, N odd and N > 1.
/// * `bias` - The value added to every weighted sum before the conversion.
/// * `border` - The boundary policy, [`BorderMode::Replicate`] for edge replication.
///
/// # Errors
///
/// Fails before writing to `dst` if the kernel is larger than the image in either
/// dimension, if `src` and `dst` have different sizes, or if `bias` is not finite.
///
/// # Example
///
/// ```
/// use bpimage_image::{Image, ImageSize};
/// use bpimage_imgproc::border::BorderMode;
/// use bpimage_imgproc::filter::{convolve, Kernel};
///
/// let src = Image::<u8, 3>::from_size_val(ImageSize { width: 4, height: 4 }, 100).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
///
/// let kernel = Kernel::identity(3).unwrap();
/// convolve(&src, &mut dst, &kernel, 0.0, BorderMode::Replicate).unwrap();
///
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn convolve<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    bias: f32,
    border: BorderMode,
) -> Result<(), ImgprocError>
where
    T: ImageDtype,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    if kernel.size() > src.rows() || kernel.size() > src.cols() {
        return Err(ImgprocError::KernelLargerThanImage(
            kernel.size(),
            src.cols(),
            src.rows(),
        ));
    }

    if !bias.is_finite() {
        return Err(ImgprocError::invalid_parameter(
            "bias",
            format!("must be finite, got {bias}"),
        ));
    }

    match kernel.factors() {
        Some((column, row)) => {
            log::debug!(
                "separable convolution {}x{} on {}",
                kernel.size(),
                kernel.size(),
                src.size()
            );
            convolve_separable(src, dst, column, row, bias, border);
        }
        None => {
            log::debug!(
                "direct convolution {}x{} on {}",
                kernel.size(),
                kernel.size(),
                src.size()
            );
            convolve_direct(src, dst, kernel, bias, border);
        }
    }

    Ok(())
}

/// Full 2D correlation, one destination row per task.
fn convolve_direct<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    bias: f32,
    border: BorderMode,
) where
    T: ImageDtype,
{
    let cols = src.cols();
    let size = kernel.size();
    let radius = kernel.radius();

    // resolve the padded coordinates once per axis
    let row_lut = border.lookup_table(src.rows(), radius);
    let col_lut = border.lookup_table(cols, radius);
    let constant = border.constant_value();

    let src_data = src.as_slice();
    let weights = kernel.as_slice();

    parallel::par_iter_dst_rows(dst, |y, dst_row| {
        for (x, dst_pixel) in dst_row.chunks_exact_mut(C).enumerate() {
            let mut acc = [0f32; C];

            for (ky, kernel_row) in weights.chunks_exact(size).enumerate() {
                let sy = row_lut[y + ky];
                for (kx, &w) in kernel_row.iter().enumerate() {
                    match (sy, col_lut[x + kx]) {
                        (Some(sy), Some(sx)) => {
                            let offset = (sy * cols + sx) * C;
                            for (a, &v) in acc.iter_mut().zip(&src_data[offset..offset + C]) {
                                let v: f32 = v.into();
                                *a += w * v;
                            }
                        }
                        _ => acc.iter_mut().for_each(|a| *a += w * constant),
                    }
                }
            }

            dst_pixel
                .iter_mut()
                .zip(acc)
                .for_each(|(d, a)| *d = T::from_f32(a + bias));
        }
    });
}

/// Horizontal pass into a float buffer followed by a vertical pass into `dst`.
fn convolve_separable<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    column: &[f32],
    row: &[f32],
    bias: f32,
    border: BorderMode,
) where
    T: ImageDtype,
{
    let (rows, cols) = (src.rows(), src.cols());
    let stride = cols * C;

    let row_lut = border.lookup_table(rows, column.len() / 2);
    let col_lut = border.lookup_table(cols, row.len() / 2);
    let constant = border.constant_value();

    let src_data = src.as_slice();
    let mut horizontal = vec![0f32; rows * stride];

    horizontal
        .par_chunks_exact_mut(stride)
        .zip(src_data.par_chunks_exact(stride))
        .for_each(|(tmp_row, src_row)| {
            for (x, tmp_pixel) in tmp_row.chunks_exact_mut(C).enumerate() {
                for (kx, &w) in row.iter().enumerate() {
                    match col_lut[x + kx] {
                        Some(sx) => {
                            let src_pixel = &src_row[sx * C..sx * C + C];
                            for (t, &v) in tmp_pixel.iter_mut().zip(src_pixel) {
                                let v: f32 = v.into();
                                *t += w * v;
                            }
                        }
                        None => tmp_pixel.iter_mut().for_each(|t| *t += w * constant),
                    }
                }
            }
        });

    // a padded row filtered horizontally
    let outside = constant * row.iter().sum::<f32>();

    parallel::par_iter_dst_rows(dst, |y, dst_row| {
        let mut acc = vec![0f32; stride];
        for (ky, &w) in column.iter().enumerate() {
            match row_lut[y + ky] {
                Some(sy) => acc
                    .iter_mut()
                    .zip(&horizontal[sy * stride..(sy + 1) * stride])
                    .for_each(|(a, &v)| *a += w * v),
                None => acc.iter_mut().for_each(|a| *a += w * outside),
            }
        }

        dst_row
            .iter_mut()
            .zip(acc)
            .for_each(|(d, a)| *d = T::from_f32(a + bias));
    });
}
