use bpimage_image::ImageError;

/// An error type for the image processing operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImgprocError {
    /// Error when the image shape is not valid for the operation.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when the kernel is not an odd-sized square with size greater than one.
    #[error("Invalid kernel shape ({0}x{1}), expected an NxN kernel with N odd and N > 1")]
    InvalidKernelShape(usize, usize),

    /// Error when the kernel data length does not match its shape.
    #[error("Kernel data length ({0}) does not match the kernel shape ({1})")]
    InvalidKernelData(usize, usize),

    /// Error when the kernel does not fit in the image.
    #[error("Kernel of size {0} is larger than the image ({1}x{2})")]
    KernelLargerThanImage(usize, usize, usize),

    /// Error when a numeric or enumerated argument is out of its domain.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of the accepted domain.
        reason: String,
    },

    /// Error when an affine matrix must be inverted but is singular.
    #[error("Affine transform is not invertible (determinant {0})")]
    SingularTransform(f32),
}

impl ImgprocError {
    /// Create an [`ImgprocError::InvalidParameter`] error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Whether the error reports an unusable kernel.
    pub fn is_invalid_kernel(&self) -> bool {
        matches!(
            self,
            Self::InvalidKernelShape(..)
                | Self::InvalidKernelData(..)
                | Self::KernelLargerThanImage(..)
        )
    }
}
