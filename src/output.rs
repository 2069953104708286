//! Writing a finished framebuffer to disk.
//!
//! Colors are kept linear in the framebuffer and quantised to 8 bits here,
//! either directly or through the sRGB transfer curve.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::OutputError;
use crate::film::{Color, Framebuffer};
use crate::math::Float;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorEncoding {
    /// `round(255 * c)`
    #[default]
    Linear,
    /// sRGB transfer curve
    Srgb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageFormat {
    /// Plain-text PPM (P3)
    Ppm,
    Png,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self, OutputError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "ppm" => Ok(ImageFormat::Ppm),
            "png" => Ok(ImageFormat::Png),
            _ => Err(OutputError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn quantize(c: Float, encoding: ColorEncoding) -> u8 {
    match encoding {
        ColorEncoding::Linear => (c * 255.0).round().clamp(0.0, 255.0) as u8,
        ColorEncoding::Srgb => fast_srgb8::f32_to_srgb8(c),
    }
}

pub fn to_rgb8(color: Color, encoding: ColorEncoding) -> [u8; 3] {
    let [r, g, b] = color.channels();
    [
        quantize(r, encoding),
        quantize(g, encoding),
        quantize(b, encoding),
    ]
}

/// Writes `fb` as a plain-text PPM: `P3`, the dimensions and the maximum
/// value on their own lines, then one `r g b` line per pixel, row by row.
pub fn write_ppm<W: Write>(fb: &Framebuffer, encoding: ColorEncoding, mut out: W) -> Result<(), OutputError> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", fb.width(), fb.height())?;
    writeln!(out, "255")?;
    for &pixel in fb.pixels() {
        let [r, g, b] = to_rgb8(pixel, encoding);
        writeln!(out, "{} {} {}", r, g, b)?;
    }
    out.flush()?;
    Ok(())
}

fn save_png(fb: &Framebuffer, encoding: ColorEncoding, path: &Path) -> Result<(), OutputError> {
    let too_large = || OutputError::TooLarge {
        width: fb.width(),
        height: fb.height(),
    };
    let width = u32::try_from(fb.width()).map_err(|_| too_large())?;
    let height = u32::try_from(fb.height()).map_err(|_| too_large())?;

    let buffer: Vec<u8> = fb
        .pixels()
        .iter()
        .flat_map(|&p| to_rgb8(p, encoding))
        .collect();
    image::save_buffer(path, &buffer, width, height, image::ColorType::Rgb8)?;
    Ok(())
}

/// Writes `fb` to `path` in `format`. Nothing is written to the framebuffer,
/// so a failed save can be retried.
pub fn save(fb: &Framebuffer, format: ImageFormat, encoding: ColorEncoding, path: &Path) -> Result<(), OutputError> {
    match format {
        ImageFormat::Ppm => {
            let file = File::create(path)?;
            write_ppm(fb, encoding, BufWriter::new(file))?;
        }
        ImageFormat::Png => save_png(fb, encoding, path)?,
    }
    info!("wrote {:?} image to {}", format, path.display());
    Ok(())
}
