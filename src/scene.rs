use std::mem;

use log::warn;

use crate::camera::Camera;
use crate::error::SceneError;
use crate::film::{Color, Framebuffer};
use crate::math::Float;
use crate::sphere::Sphere;
use crate::vecmath::Point3f;

/// Plain scene parameters, validated by [`SceneConfig::build`].
///
/// The default is a 400x400 view from `(0, 0, -8)` with focal length 3 of a
/// red sphere of radius 3 at the origin, on a mid-gray background.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub width: usize,
    pub height: usize,
    pub camera_position: [Float; 3],
    pub focal_length: Float,
    pub pixel_width: Float,
    pub pixel_height: Float,
    pub sphere_center: [Float; 3],
    pub sphere_radius: Float,
    pub sphere_color: [u8; 3],
    pub background: [u8; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            width: 400,
            height: 400,
            camera_position: [0.0, 0.0, -8.0],
            focal_length: 3.0,
            pixel_width: 0.01,
            pixel_height: 0.01,
            sphere_center: [0.0, 0.0, 0.0],
            sphere_radius: 3.0,
            sphere_color: [255, 0, 0],
            background: [128, 128, 128],
        }
    }
}

fn point(c: [Float; 3]) -> Point3f {
    Point3f::new(c[0], c[1], c[2])
}

fn color(c: [u8; 3]) -> Color {
    Color::from_rgb8(c[0], c[1], c[2])
}

fn finite_point(c: [Float; 3], what: &'static str) -> Result<Point3f, SceneError> {
    if c.iter().any(|v| v.is_nan()) {
        return Err(SceneError::NotANumber(what));
    }
    if !c.iter().all(|v| v.is_finite()) {
        return Err(SceneError::NotFinite(what));
    }
    Ok(point(c))
}

/// Rejects resolutions whose pixel storage cannot be allocated.
fn check_size(width: usize, height: usize) -> Result<(), SceneError> {
    let bytes = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(mem::size_of::<Color>()));
    match bytes {
        Some(b) if b <= isize::MAX as usize => Ok(()),
        _ => Err(SceneError::TooLarge { width, height }),
    }
}

impl SceneConfig {
    pub fn build(&self) -> Result<Scene, SceneError> {
        check_size(self.width, self.height)?;
        let camera = Camera::new(
            finite_point(self.camera_position, "camera position")?,
            self.focal_length,
            self.pixel_width,
            self.pixel_height,
            self.width,
            self.height,
        )?;
        let sphere = Sphere::new(
            finite_point(self.sphere_center, "sphere center")?,
            self.sphere_radius,
            color(self.sphere_color),
        )?;

        if sphere.contains(camera.position) {
            warn!("camera at {} is inside sphere {}", camera.position, sphere);
        }

        Ok(Scene {
            camera,
            sphere,
            background: color(self.background),
        })
    }
}

/// A camera looking at a single sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub sphere: Sphere,
    pub background: Color,
}

impl Scene {
    /// A framebuffer matching the camera resolution, cleared to the
    /// background.
    pub fn framebuffer(&self) -> Framebuffer {
        Framebuffer::new(self.camera.width, self.camera.height, self.background)
    }
}
