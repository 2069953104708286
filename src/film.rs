//! Colors and the framebuffer the sampler writes into.

use std::fmt;

use crate::math::Float;

/// Linear RGB with channels nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: Float,
    pub g: Float,
    pub b: Float,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Color { r, g, b }
    }

    /// Maps 8-bit channel values onto `[0, 1]`.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::new(
            r as Float / 255.0,
            g as Float / 255.0,
            b as Float / 255.0,
        )
    }

    pub fn channels(&self) -> [Float; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Fixed-size grid of colors stored row by row, `(0, 0)` at the top left.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// A `width` x `height` buffer with every pixel set to `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let len = match width.checked_mul(height) {
            Some(len) => len,
            None => panic!("{}x{} framebuffer overflows usize", width, height),
        };
        Framebuffer {
            width,
            height,
            pixels: vec![background; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} framebuffer",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[self.offset(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        let i = self.offset(x, y);
        self.pixels[i] = color;
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1))
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.iter_mut().for_each(|p| *p = color);
    }
}
