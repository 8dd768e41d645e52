mod gray;
mod sepia;

pub use gray::{gray_from_rgb, rgb_from_gray};
pub use sepia::sepia;

pub(crate) use gray::luma;
