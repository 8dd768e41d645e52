use std::path::PathBuf;

use argh::FromArgs;
use bpimage::imgproc::filter::kernels::EmbossDirection;

#[derive(FromArgs, Debug, PartialEq)]
/// Apply filters, geometric transforms and color adjustments to an image
pub struct Args {
    /// path to the source image
    #[argh(positional)]
    pub source: PathBuf,

    /// path to the output image, defaults to <stem>_<command>.<ext> next to the source
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand)]
pub enum Command {
    BoxBlur(BoxBlurArgs),
    GaussianBlur(GaussianBlurArgs),
    Sharpen(SharpenArgs),
    Outline(OutlineArgs),
    Emboss(EmbossArgs),
    MotionBlur(MotionBlurArgs),
    Smooth(SmoothArgs),
    FlipVertical(FlipVerticalArgs),
    FlipHorizontal(FlipHorizontalArgs),
    Rotate90(Rotate90Args),
    Rotate(RotateArgs),
    Scale(ScaleArgs),
    Shear(ShearArgs),
    Grayscale(GrayscaleArgs),
    Sepia(SepiaArgs),
    Brightness(BrightnessArgs),
    Contrast(ContrastArgs),
    Saturation(SaturationArgs),
    Invert(InvertArgs),
}

#[derive(FromArgs, Debug, PartialEq)]
/// Blur with a uniform square kernel
#[argh(subcommand, name = "box-blur")]
pub struct BoxBlurArgs {
    /// blur radius in pixels, at least 1
    #[argh(option, default = "2")]
    pub radius: usize,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Blur with a gaussian kernel
#[argh(subcommand, name = "gaussian-blur")]
pub struct GaussianBlurArgs {
    /// blur radius in pixels, at least 1
    #[argh(option, default = "2")]
    pub radius: usize,

    /// standard deviation of the gaussian
    #[argh(option, default = "1.0")]
    pub sigma: f32,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Sharpen the image
#[argh(subcommand, name = "sharpen")]
pub struct SharpenArgs {
    /// sharpening strength, non-negative
    #[argh(option, default = "1.0")]
    pub strength: f32,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Highlight the edges of the image
#[argh(subcommand, name = "outline")]
pub struct OutlineArgs {}

#[derive(FromArgs, Debug, PartialEq)]
/// Emboss the image
#[argh(subcommand, name = "emboss")]
pub struct EmbossArgs {
    /// side the light comes from: up, down, left or right
    #[argh(option, default = "EmbossDirection::Up")]
    pub direction: EmbossDirection,

    /// length of the emboss run, at least 1
    #[argh(option, default = "1")]
    pub strength: usize,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Blur along the diagonal as if the camera moved
#[argh(subcommand, name = "motion-blur")]
pub struct MotionBlurArgs {}

#[derive(FromArgs, Debug, PartialEq)]
/// Smooth with a center-weighted kernel
#[argh(subcommand, name = "smooth")]
pub struct SmoothArgs {}

#[derive(FromArgs, Debug, PartialEq)]
/// Mirror left and right
#[argh(subcommand, name = "flip-vertical")]
pub struct FlipVerticalArgs {}

#[derive(FromArgs, Debug, PartialEq)]
/// Mirror top and bottom
#[argh(subcommand, name = "flip-horizontal")]
pub struct FlipHorizontalArgs {}

#[derive(FromArgs, Debug, PartialEq)]
/// Rotate by quarter turns, counter-clockwise
#[argh(subcommand, name = "rotate90")]
pub struct Rotate90Args {
    /// number of quarter turns, negative turns clockwise
    #[argh(option, default = "1")]
    pub times: i32,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Rotate about the center, counter-clockwise
#[argh(subcommand, name = "rotate")]
pub struct RotateArgs {
    /// rotation angle in degrees
    #[argh(option)]
    pub angle: f32,

    /// grow the canvas to fit the rotated image
    #[argh(switch)]
    pub expand: bool,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Scale uniformly
#[argh(subcommand, name = "scale")]
pub struct ScaleArgs {
    /// scale factor, greater than zero
    #[argh(option)]
    pub factor: f32,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Shear along both axes
#[argh(subcommand, name = "shear")]
pub struct ShearArgs {
    /// horizontal shear factor
    #[argh(option, default = "0.0")]
    pub shear_x: f32,

    /// vertical shear factor
    #[argh(option, default = "0.0")]
    pub shear_y: f32,

    /// grow the canvas to fit the sheared image
    #[argh(switch)]
    pub expand: bool,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Convert to grayscale
#[argh(subcommand, name = "grayscale")]
pub struct GrayscaleArgs {}

#[derive(FromArgs, Debug, PartialEq)]
/// Apply a sepia tone
#[argh(subcommand, name = "sepia")]
pub struct SepiaArgs {}

#[derive(FromArgs, Debug, PartialEq)]
/// Scale the brightness
#[argh(subcommand, name = "brightness")]
pub struct BrightnessArgs {
    /// brightness factor, 1 keeps the image
    #[argh(option)]
    pub strength: f32,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Scale the contrast around the mean value
#[argh(subcommand, name = "contrast")]
pub struct ContrastArgs {
    /// contrast factor, 1 keeps the image
    #[argh(option)]
    pub strength: f32,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Scale the saturation
#[argh(subcommand, name = "saturation")]
pub struct SaturationArgs {
    /// saturation factor, 0 gives a gray image and 1 keeps the image
    #[argh(option)]
    pub strength: f32,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Invert the colors
#[argh(subcommand, name = "invert")]
pub struct InvertArgs {}

#[cfg(test)]
mod tests {
    use argh::FromArgs;

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, argh::EarlyExit> {
        Args::from_args(&["bpimage"], args)
    }

    #[test]
    fn parse_filter() -> Result<(), argh::EarlyExit> {
        let args = parse(&["in.png", "-o", "out.png", "box-blur", "--radius", "3"])?;
        assert_eq!(args.source, PathBuf::from("in.png"));
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
        assert_eq!(args.command, Command::BoxBlur(BoxBlurArgs { radius: 3 }));
        Ok(())
    }

    #[test]
    fn parse_defaults() -> Result<(), argh::EarlyExit> {
        let args = parse(&["in.png", "emboss"])?;
        assert_eq!(args.output, None);
        assert_eq!(
            args.command,
            Command::Emboss(EmbossArgs {
                direction: EmbossDirection::Up,
                strength: 1
            })
        );
        Ok(())
    }

    #[test]
    fn parse_transform() -> Result<(), argh::EarlyExit> {
        let args = parse(&["in.png", "rotate", "--angle", "30", "--expand"])?;
        assert_eq!(
            args.command,
            Command::Rotate(RotateArgs {
                angle: 30.0,
                expand: true
            })
        );

        let args = parse(&["in.png", "shear", "--shear-x", "0.5"])?;
        assert_eq!(
            args.command,
            Command::Shear(ShearArgs {
                shear_x: 0.5,
                shear_y: 0.0,
                expand: false
            })
        );
        Ok(())
    }

    #[test]
    fn parse_rejects_bad_values() {
        assert!(parse(&["in.png", "emboss", "--direction", "sideways"]).is_err());
        assert!(parse(&["in.png", "scale"]).is_err());
        assert!(parse(&["in.png", "unknown"]).is_err());
    }
}
