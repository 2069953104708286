use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use tfrt::output::{ColorEncoding, ImageFormat};
use tfrt::scene::SceneConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tfrt")]
#[command(about = "Render a sphere through a pinhole camera into an image")]
pub struct Args {
    #[arg(long, default_value_t = 400, help = "Image width in pixels")]
    pub width: usize,

    #[arg(long, default_value_t = 400, help = "Image height in pixels")]
    pub height: usize,

    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        default_values_t = vec![0.0, 0.0, -8.0],
        help = "Camera position"
    )]
    pub camera: Vec<f32>,

    #[arg(long, default_value_t = 3.0, help = "Distance from the camera to the image plane")]
    pub focal_length: f32,

    #[arg(long, default_value_t = 0.01, help = "Size of a pixel on the image plane")]
    pub pixel_size: f32,

    #[arg(long, help = "Horizontal pixel size (overrides --pixel-size)")]
    pub pixel_width: Option<f32>,

    #[arg(long, help = "Vertical pixel size (overrides --pixel-size)")]
    pub pixel_height: Option<f32>,

    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        default_values_t = vec![0.0, 0.0, 0.0],
        help = "Sphere center"
    )]
    pub center: Vec<f32>,

    #[arg(long, default_value_t = 3.0, help = "Sphere radius")]
    pub radius: f32,

    #[arg(
        long,
        num_args = 3,
        value_names = ["R", "G", "B"],
        default_values_t = vec![255, 0, 0],
        help = "Sphere color"
    )]
    pub color: Vec<u8>,

    #[arg(
        long,
        num_args = 3,
        value_names = ["R", "G", "B"],
        default_values_t = vec![128, 128, 128],
        help = "Background color"
    )]
    pub background: Vec<u8>,

    #[arg(short, long, default_value = "output.ppm", help = "Output file (.ppm or .png)")]
    pub output: PathBuf,

    #[arg(long, value_enum, help = "Force output format (otherwise inferred from extension)")]
    pub format: Option<ImageFormat>,

    #[arg(long, value_enum, default_value_t = ColorEncoding::Linear, help = "8-bit color encoding")]
    pub encoding: ColorEncoding,

    #[arg(short = 't', long, help = "Worker threads for the parallel renderer")]
    pub threads: Option<usize>,

    #[arg(long, help = "Render on the main thread only")]
    pub sequential: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Info, help = "Set the logging level")]
    pub log_level: LogLevel,
}

fn triple<T: Copy>(values: &[T], what: &str) -> Result<[T; 3]> {
    match values {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => bail!("{} takes exactly 3 values, got {}", what, values.len()),
    }
}

impl Args {
    pub fn scene_config(&self) -> Result<SceneConfig> {
        Ok(SceneConfig {
            width: self.width,
            height: self.height,
            camera_position: triple(&self.camera, "--camera")?,
            focal_length: self.focal_length,
            pixel_width: self.pixel_width.unwrap_or(self.pixel_size),
            pixel_height: self.pixel_height.unwrap_or(self.pixel_size),
            sphere_center: triple(&self.center, "--center")?,
            sphere_radius: self.radius,
            sphere_color: triple(&self.color, "--color")?,
            background: triple(&self.background, "--background")?,
        })
    }

    pub fn image_format(&self) -> Result<ImageFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => Ok(ImageFormat::from_path(&self.output)?),
        }
    }
}
