use std::path::Path;

use bpimage_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an RGB8 image from the given file path.
///
/// The format is guessed from the file content, and any format supported by the image crate
/// is accepted. Images with other color types are converted to 8-bit RGB, dropping the alpha
/// channel if any.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB8 image containing the image data.
///
/// # Errors
///
/// Fails if the path does not exist, is a directory, or does not hold a decodable image.
pub fn read_image_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    // verify the path points to a file
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path.is_dir() {
        return Err(IoError::PathIsDirectory(file_path.to_path_buf()));
    }

    let data = std::fs::read(file_path)?;

    let img = image::ImageReader::new(std::io::Cursor::new(&data))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::info!(
        "read {:?} image {size} from {}",
        img.color(),
        file_path.display()
    );

    let image = Image::new(size, img.into_rgb8().into_raw())?;

    Ok(image)
}

/// Writes an RGB8 image to the given file path.
///
/// The format is inferred from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output image, with a known image extension.
/// * `image` - The image to write.
///
/// # Errors
///
/// Fails if the extension is not a known image format, or if encoding or writing fails.
pub fn write_image(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let format = image::ImageFormat::from_path(file_path)
        .map_err(|_| IoError::UnsupportedImageFormat(file_path.to_path_buf()))?;

    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::Rgb8,
        format,
    )
    .map_err(|err| match err {
        image::ImageError::IoError(err) => IoError::FileError(err),
        image::ImageError::Unsupported(_) => {
            IoError::UnsupportedImageFormat(file_path.to_path_buf())
        }
        err => IoError::ImageEncodeError(err),
    })?;

    log::info!("wrote image {} to {}", image.size(), file_path.display());

    Ok(())
}
