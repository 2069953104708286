use std::io;

use thiserror::Error;

use crate::math::Float;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(Float),
    #[error("image resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: usize, height: usize },
    #[error("focal length must be positive and finite, got {0}")]
    InvalidFocalLength(Float),
    #[error("pixel size must be positive and finite, got {width}x{height}")]
    InvalidPixelSize { width: Float, height: Float },
    #[error("{0} has a NaN component")]
    NotANumber(&'static str),
    #[error("{0} has an infinite component")]
    NotFinite(&'static str),
    #[error("a {width}x{height} image does not fit in memory")]
    TooLarge { width: usize, height: usize },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("framebuffer is {actual_width}x{actual_height} but the camera expects {width}x{height}")]
    ResolutionMismatch {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write image")]
    Io(#[from] io::Error),
    #[error("failed to encode image")]
    Image(#[from] image::ImageError),
    #[error("unsupported output format `{0}`")]
    UnsupportedFormat(String),
    #[error("image dimensions {width}x{height} do not fit the encoder")]
    TooLarge { width: usize, height: usize },
}
