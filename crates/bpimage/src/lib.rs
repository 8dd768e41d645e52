//! Convolution filters, affine transforms and color adjustments for 8-bit RGB images.
//!
//! ```no_run
//! use bpimage::image::Image;
//! use bpimage::imgproc;
//! use bpimage::io::functional as F;
//!
//! let rgb = F::read_image_rgb8("dog.png").unwrap();
//!
//! let mut blurred = Image::<u8, 3>::from_size_val(rgb.size(), 0).unwrap();
//! imgproc::filter::gaussian_blur(&rgb, &mut blurred, 2, 1.5).unwrap();
//!
//! let rotated = imgproc::rotate::rotate(&blurred, 30.0, true).unwrap();
//! F::write_image("dog_rotated.png", &rotated).unwrap();
//! ```

#[doc(inline)]
pub use bpimage_image as image;

#[doc(inline)]
pub use bpimage_imgproc as imgproc;

#[doc(inline)]
pub use bpimage_io as io;
