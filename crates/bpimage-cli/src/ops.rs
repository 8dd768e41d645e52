use bpimage::{
    image::Image,
    imgproc::{color, enhance, filter, filter::kernels::EmbossDirection, flip, rescale, rotate, shear},
};

use crate::{args::Command, error::CliError};

/// A convolution filter and its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    BoxBlur { radius: usize },
    GaussianBlur { radius: usize, sigma: f32 },
    Sharpen { strength: f32 },
    Outline,
    Emboss { direction: EmbossDirection, strength: usize },
    MotionBlur,
    Smooth,
}

/// A geometric transform and its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    FlipVertical,
    FlipHorizontal,
    Rotate90 { times: i32 },
    Rotate { angle: f32, expand: bool },
    Scale { factor: f32 },
    Shear { shear_x: f32, shear_y: f32, expand: bool },
}

/// A per-pixel color adjustment and its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorAdjust {
    Grayscale,
    Sepia,
    Brightness { strength: f32 },
    Contrast { strength: f32 },
    Saturation { strength: f32 },
    Invert,
}

/// An operation requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Filter(Filter),
    Transform(Transform),
    Color(ColorAdjust),
}

impl From<Command> for Operation {
    fn from(command: Command) -> Self {
        match command {
            Command::BoxBlur(a) => Self::Filter(Filter::BoxBlur { radius: a.radius }),
            Command::GaussianBlur(a) => Self::Filter(Filter::GaussianBlur {
                radius: a.radius,
                sigma: a.sigma,
            }),
            Command::Sharpen(a) => Self::Filter(Filter::Sharpen {
                strength: a.strength,
            }),
            Command::Outline(_) => Self::Filter(Filter::Outline),
            Command::Emboss(a) => Self::Filter(Filter::Emboss {
                direction: a.direction,
                strength: a.strength,
            }),
            Command::MotionBlur(_) => Self::Filter(Filter::MotionBlur),
            Command::Smooth(_) => Self::Filter(Filter::Smooth),
            Command::FlipVertical(_) => Self::Transform(Transform::FlipVertical),
            Command::FlipHorizontal(_) => Self::Transform(Transform::FlipHorizontal),
            Command::Rotate90(a) => Self::Transform(Transform::Rotate90 { times: a.times }),
            Command::Rotate(a) => Self::Transform(Transform::Rotate {
                angle: a.angle,
                expand: a.expand,
            }),
            Command::Scale(a) => Self::Transform(Transform::Scale { factor: a.factor }),
            Command::Shear(a) => Self::Transform(Transform::Shear {
                shear_x: a.shear_x,
                shear_y: a.shear_y,
                expand: a.expand,
            }),
            Command::Grayscale(_) => Self::Color(ColorAdjust::Grayscale),
            Command::Sepia(_) => Self::Color(ColorAdjust::Sepia),
            Command::Brightness(a) => Self::Color(ColorAdjust::Brightness {
                strength: a.strength,
            }),
            Command::Contrast(a) => Self::Color(ColorAdjust::Contrast {
                strength: a.strength,
            }),
            Command::Saturation(a) => Self::Color(ColorAdjust::Saturation {
                strength: a.strength,
            }),
            Command::Invert(_) => Self::Color(ColorAdjust::Invert),
        }
    }
}

impl Operation {
    /// The command name, used to derive the default output file name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Filter(f) => match f {
                Filter::BoxBlur { .. } => "box-blur",
                Filter::GaussianBlur { .. } => "gaussian-blur",
                Filter::Sharpen { .. } => "sharpen",
                Filter::Outline => "outline",
                Filter::Emboss { .. } => "emboss",
                Filter::MotionBlur => "motion-blur",
                Filter::Smooth => "smooth",
            },
            Self::Transform(t) => match t {
                Transform::FlipVertical => "flip-vertical",
                Transform::FlipHorizontal => "flip-horizontal",
                Transform::Rotate90 { .. } => "rotate90",
                Transform::Rotate { .. } => "rotate",
                Transform::Scale { .. } => "scale",
                Transform::Shear { .. } => "shear",
            },
            Self::Color(c) => match c {
                ColorAdjust::Grayscale => "grayscale",
                ColorAdjust::Sepia => "sepia",
                ColorAdjust::Brightness { .. } => "brightness",
                ColorAdjust::Contrast { .. } => "contrast",
                ColorAdjust::Saturation { .. } => "saturation",
                ColorAdjust::Invert => "invert",
            },
        }
    }

    /// Run the operation on `src` and return the resulting image.
    pub fn apply(&self, src: &Image<u8, 3>) -> Result<Image<u8, 3>, CliError> {
        match *self {
            Self::Transform(t) => {
                let dst = match t {
                    Transform::FlipVertical => flip::flip_vertical(src)?,
                    Transform::FlipHorizontal => flip::flip_horizontal(src)?,
                    Transform::Rotate90 { times } => rotate::rotate90(src, times)?,
                    Transform::Rotate { angle, expand } => rotate::rotate(src, angle, expand)?,
                    Transform::Scale { factor } => rescale::scale(src, factor)?,
                    Transform::Shear {
                        shear_x,
                        shear_y,
                        expand,
                    } => shear::shear(src, shear_x, shear_y, expand)?,
                };
                Ok(dst)
            }
            Self::Filter(f) => {
                let mut dst = Image::from_size_val(src.size(), 0)?;
                match f {
                    Filter::BoxBlur { radius } => filter::box_blur(src, &mut dst, radius)?,
                    Filter::GaussianBlur { radius, sigma } => {
                        filter::gaussian_blur(src, &mut dst, radius, sigma)?
                    }
                    Filter::Sharpen { strength } => filter::sharpen(src, &mut dst, strength)?,
                    Filter::Outline => filter::outline(src, &mut dst)?,
                    Filter::Emboss {
                        direction,
                        strength,
                    } => filter::emboss(src, &mut dst, direction, strength)?,
                    Filter::MotionBlur => filter::motion_blur(src, &mut dst)?,
                    Filter::Smooth => filter::smooth(src, &mut dst)?,
                }
                Ok(dst)
            }
            Self::Color(c) => {
                let mut dst = Image::from_size_val(src.size(), 0)?;
                match c {
                    ColorAdjust::Grayscale => {
                        // written back as RGB so every output has the same layout
                        let mut gray = Image::<u8, 1>::from_size_val(src.size(), 0)?;
                        color::gray_from_rgb(src, &mut gray)?;
                        color::rgb_from_gray(&gray, &mut dst)?;
                    }
                    ColorAdjust::Sepia => color::sepia(src, &mut dst)?,
                    ColorAdjust::Brightness { strength } => {
                        enhance::adjust_brightness(src, &mut dst, strength)?
                    }
                    ColorAdjust::Contrast { strength } => {
                        enhance::adjust_contrast(src, &mut dst, strength)?
                    }
                    ColorAdjust::Saturation { strength } => {
                        enhance::adjust_saturation(src, &mut dst, strength)?
                    }
                    ColorAdjust::Invert => enhance::invert(src, &mut dst)?,
                }
                Ok(dst)
            }
        }
    }
}
