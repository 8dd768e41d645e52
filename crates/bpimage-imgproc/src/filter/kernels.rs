use std::{fmt, str::FromStr};

use super::Kernel;
use crate::error::ImgprocError;

/// Bias re-centering the signed emboss response around mid-gray.
pub const EMBOSS_BIAS: f32 = 128.0;

/// Size of the motion blur kernel.
const MOTION_BLUR_SIZE: usize = 9;

/// Create a box blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
///
/// # Returns
///
/// A vector of the kernel.
pub fn box_blur_kernel_1d(kernel_size: usize) -> Vec<f32> {
    vec![1.0 / kernel_size as f32; kernel_size]
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A vector of the kernel, normalized to sum to one.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let mean = (kernel_size as f32 - 1.0) / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    let mut kernel = (0..kernel_size)
        .map(|i| {
            let x = i as f32 - mean;
            (-0.5 * (x * x) / sigma_sq).exp()
        })
        .collect::<Vec<_>>();

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

fn size_from_radius(radius: usize) -> Result<usize, ImgprocError> {
    if radius < 1 {
        return Err(ImgprocError::invalid_parameter(
            "radius",
            format!("must be at least 1, got {radius}"),
        ));
    }
    Ok(2 * radius + 1)
}

/// Create a (2·radius+1)x(2·radius+1) box blur kernel of uniform weights.
///
/// # Errors
///
/// Fails if `radius` is less than one.
pub fn box_blur_kernel(radius: usize) -> Result<Kernel, ImgprocError> {
    let size = size_from_radius(radius)?;
    Kernel::separable(box_blur_kernel_1d(size), box_blur_kernel_1d(size))
}

/// Create a (2·radius+1)x(2·radius+1) gaussian kernel normalized to sum to one.
///
/// # Errors
///
/// Fails if `radius` is less than one or `sigma` is not a positive finite number.
pub fn gaussian_kernel(radius: usize, sigma: f32) -> Result<Kernel, ImgprocError> {
    let size = size_from_radius(radius)?;
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(ImgprocError::invalid_parameter(
            "sigma",
            format!("must be positive, got {sigma}"),
        ));
    }

    let kernel = gaussian_kernel_1d(size, sigma);
    Kernel::separable(kernel.clone(), kernel)
}

/// Create a 3x3 unsharp masking kernel.
///
/// The kernel is `identity + (identity - blur) * strength`, where `blur` averages the pixel
/// with its four neighbors.
///
/// # Errors
///
/// Fails if `strength` is negative or not finite.
pub fn sharpen_kernel(strength: f32) -> Result<Kernel, ImgprocError> {
    if !(strength.is_finite() && strength >= 0.0) {
        return Err(ImgprocError::invalid_parameter(
            "strength",
            format!("must be positive, got {strength}"),
        ));
    }

    #[rustfmt::skip]
    let blur: [f32; 9] = [
        0.0, 1.0, 0.0,
        1.0, 1.0, 1.0,
        0.0, 1.0, 0.0,
    ];

    Kernel::from_fn(3, |ky, kx| {
        let identity = if ky == 1 && kx == 1 { 1.0 } else { 0.0 };
        identity + (identity - blur[ky * 3 + kx] / 5.0) * strength
    })
}

/// Create the 3x3 laplacian edge detection kernel.
pub fn outline_kernel() -> Result<Kernel, ImgprocError> {
    #[rustfmt::skip]
    let data = vec![
        -1.0, -1.0, -1.0,
        -1.0,  8.0, -1.0,
        -1.0, -1.0, -1.0,
    ];
    Kernel::new(3, 3, data)
}

/// The side an emboss effect is lit from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbossDirection {
    /// Light from the top of the image.
    Up,
    /// Light from the bottom of the image.
    Down,
    /// Light from the left of the image.
    Left,
    /// Light from the right of the image.
    Right,
}

impl FromStr for EmbossDirection {
    type Err = ImgprocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ImgprocError::invalid_parameter(
                "direction",
                format!("expected one of up, down, left, right, got `{s}`"),
            )),
        }
    }
}

impl fmt::Display for EmbossDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Create a directional emboss kernel of size (2·strength+1).
///
/// The center row (for left/right) or center column (for up/down) holds a run of `+1` on the
/// lit side of the center and `-1` on the other side. All other weights are zero, so the
/// kernel sums to zero and is meant to be used with [`EMBOSS_BIAS`].
///
/// # Errors
///
/// Fails if `strength` is less than one.
///
/// # Example
///
/// ```
/// use bpimage_imgproc::filter::kernels::{emboss_kernel, EmbossDirection};
///
/// let kernel = emboss_kernel(EmbossDirection::Up, 1).unwrap();
/// assert_eq!(kernel.as_slice(), &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0]);
/// ```
pub fn emboss_kernel(direction: EmbossDirection, strength: usize) -> Result<Kernel, ImgprocError> {
    if strength < 1 {
        return Err(ImgprocError::invalid_parameter(
            "strength",
            format!("must be at least 1, got {strength}"),
        ));
    }

    let size = 2 * strength + 1;
    let center = strength;

    Kernel::from_fn(size, |ky, kx| {
        // position along the run and whether the cell lies on the run at all
        let (on_axis, pos) = match direction {
            EmbossDirection::Up | EmbossDirection::Down => (kx == center, ky),
            EmbossDirection::Left | EmbossDirection::Right => (ky == center, kx),
        };
        if !on_axis || pos == center {
            return 0.0;
        }

        let before = if pos < center { 1.0 } else { -1.0 };
        match direction {
            EmbossDirection::Up | EmbossDirection::Left => before,
            EmbossDirection::Down | EmbossDirection::Right => -before,
        }
    })
}

/// Create the 9x9 motion blur kernel with `1/9` along the anti-diagonal.
pub fn motion_blur_kernel() -> Result<Kernel, ImgprocError> {
    let weight = 1.0 / MOTION_BLUR_SIZE as f32;
    Kernel::from_fn(MOTION_BLUR_SIZE, |ky, kx| {
        if ky + kx == MOTION_BLUR_SIZE - 1 {
            weight
        } else {
            0.0
        }
    })
}

/// Create the 5x5 weighted smoothing kernel.
pub fn smooth_kernel() -> Result<Kernel, ImgprocError> {
    #[rustfmt::skip]
    let weights: [f32; 25] = [
        1.0, 1.0,  1.0, 1.0, 1.0,
        1.0, 5.0,  5.0, 5.0, 1.0,
        1.0, 5.0, 44.0, 5.0, 1.0,
        1.0, 5.0,  5.0, 5.0, 1.0,
        1.0, 1.0,  1.0, 1.0, 1.0,
    ];
    Kernel::new(5, 5, weights.iter().map(|w| w / 100.0).collect())
}
