use std::path::PathBuf;

use bpimage::{image::ImageError, imgproc::ImgprocError, io::IoError};

/// An error reported to the user with exit status 1.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Error reading or writing an image file.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Error in a filter, transform or color operation.
    #[error(transparent)]
    Imgproc(#[from] ImgprocError),

    /// Error creating an intermediate image.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when no output path is given and none can be derived from the source.
    #[error("Cannot derive an output path from {0}, pass one with -o")]
    OutputPath(PathBuf),
}
