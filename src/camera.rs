//! Pinhole camera looking down +z through an image plane placed
//! `focal_length` in front of it.

use log::debug;

use crate::error::SceneError;
use crate::math::Float;
use crate::ray::{Ray, RayDifferential};
use crate::vecmath::{normalize, Point3f};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3f,
    pub focal_length: Float,
    pub pixel_width: Float,
    pub pixel_height: Float,
    pub width: usize,
    pub height: usize,
}

impl Camera {
    pub fn new(
        position: Point3f,
        focal_length: Float,
        pixel_width: Float,
        pixel_height: Float,
        width: usize,
        height: usize,
    ) -> Result<Self, SceneError> {
        if position.has_nan() {
            return Err(SceneError::NotANumber("camera position"));
        }
        if ![position.x, position.y, position.z].iter().all(|c| c.is_finite()) {
            return Err(SceneError::NotFinite("camera position"));
        }
        if !(focal_length.is_finite() && focal_length > 0.0) {
            return Err(SceneError::InvalidFocalLength(focal_length));
        }
        let valid = |s: Float| s.is_finite() && s > 0.0;
        if !(valid(pixel_width) && valid(pixel_height)) {
            return Err(SceneError::InvalidPixelSize {
                width: pixel_width,
                height: pixel_height,
            });
        }
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidResolution { width, height });
        }

        debug!(
            "camera at {} with focal length {}, image plane {}x{} of {}x{} pixels",
            position,
            focal_length,
            width as Float * pixel_width,
            height as Float * pixel_height,
            width,
            height
        );
        Ok(Camera {
            position,
            focal_length,
            pixel_width,
            pixel_height,
            width,
            height,
        })
    }

    /// Center of pixel `(px, py)` on the image plane. Column `px` grows to the
    /// right, row `py` grows downward.
    pub fn image_plane_point(&self, px: Float, py: Float) -> Point3f {
        let half_width = self.width as Float / 2.0;
        let half_height = self.height as Float / 2.0;
        Point3f::new(
            (-half_width + 0.5 + px) * self.pixel_width + self.position.x,
            (half_height - 0.5 - py) * self.pixel_height + self.position.y,
            self.position.z + self.focal_length,
        )
    }

    /// Ray from the camera through the center of pixel `(px, py)`, with a
    /// unit direction.
    pub fn generate_ray(&self, px: usize, py: usize) -> Ray {
        self.ray_through(px as Float, py as Float)
    }

    /// Like [`Camera::generate_ray`], with auxiliary rays through the
    /// neighbouring pixel centers at `px + 1` and `py + 1`.
    pub fn generate_ray_differential(&self, px: usize, py: usize) -> RayDifferential {
        let (x, y) = (px as Float, py as Float);
        let rx = self.ray_through(x + 1.0, y);
        let ry = self.ray_through(x, y + 1.0);
        RayDifferential::from(self.ray_through(x, y)).with_differentials(&rx, &ry)
    }

    fn ray_through(&self, px: Float, py: Float) -> Ray {
        let target = self.image_plane_point(px, py);
        Ray::new(self.position, normalize(target - self.position))
    }
}
