use std::fmt;
use std::ops::Deref;

use crate::math::Float;
use crate::vecmath::{Point3f, Vector3f};

/// A parametric line `origin + t * direction`.
///
/// `tmin`/`tmax` bound the segment that intersection routines consider; the
/// ray itself never clamps `t`. The direction does not have to be normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3f,
    pub direction: Vector3f,
    pub tmin: Float,
    pub tmax: Float,
    pub time: Float,
}

impl Ray {
    pub fn new(origin: Point3f, direction: Vector3f) -> Self {
        Self::with_time(origin, direction, 0.0)
    }

    pub fn with_time(origin: Point3f, direction: Vector3f, time: Float) -> Self {
        Ray {
            origin,
            direction,
            tmin: 0.0,
            tmax: Float::INFINITY,
            time,
        }
    }

    pub fn with_extent(self, tmin: Float, tmax: Float) -> Self {
        debug_assert!(tmin <= tmax, "empty ray extent [{}, {}]", tmin, tmax);
        Ray { tmin, tmax, ..self }
    }

    pub fn eval(&self, t: Float) -> Point3f {
        self.origin + self.direction * t
    }

    /// Whether `t` lies in `[tmin, tmax]`.
    pub fn contains(&self, t: Float) -> bool {
        self.tmin <= t && t <= self.tmax
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ o: {}, d: {}, t: [{}, {}], time: {} ]",
            self.origin, self.direction, self.tmin, self.tmax, self.time
        )
    }
}

/// A ray with two auxiliary rays offset by one pixel in x and y, used to
/// estimate the footprint the primary ray covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayDifferential {
    pub ray: Ray,
    pub has_differentials: bool,
    pub rx_origin: Point3f,
    pub ry_origin: Point3f,
    pub rx_direction: Vector3f,
    pub ry_direction: Vector3f,
}

impl RayDifferential {
    pub fn new(origin: Point3f, direction: Vector3f, time: Float) -> Self {
        Self::from(Ray::with_time(origin, direction, time))
    }

    /// Attaches the auxiliary rays.
    pub fn with_differentials(self, rx: &Ray, ry: &Ray) -> Self {
        RayDifferential {
            has_differentials: true,
            rx_origin: rx.origin,
            ry_origin: ry.origin,
            rx_direction: rx.direction,
            ry_direction: ry.direction,
            ..self
        }
    }

    pub fn rx(&self) -> Ray {
        Ray::with_time(self.rx_origin, self.rx_direction, self.ray.time)
    }

    pub fn ry(&self) -> Ray {
        Ray::with_time(self.ry_origin, self.ry_direction, self.ray.time)
    }

    /// Moves the auxiliary origins and directions toward (`s < 1`) or away
    /// from (`s > 1`) the primary ray.
    ///
    /// # Panics
    ///
    /// Panics if the auxiliary rays were never set.
    pub fn scale_differentials(&mut self, s: Float) {
        assert!(
            self.has_differentials,
            "scale_differentials called on a ray without differentials"
        );
        let Ray {
            origin, direction, ..
        } = self.ray;
        self.rx_origin = origin + (self.rx_origin - origin) * s;
        self.ry_origin = origin + (self.ry_origin - origin) * s;
        self.rx_direction = direction + (self.rx_direction - direction) * s;
        self.ry_direction = direction + (self.ry_direction - direction) * s;
    }
}

impl From<Ray> for RayDifferential {
    fn from(ray: Ray) -> Self {
        RayDifferential {
            ray,
            has_differentials: false,
            rx_origin: ray.origin,
            ry_origin: ray.origin,
            rx_direction: ray.direction,
            ry_direction: ray.direction,
        }
    }
}

impl Deref for RayDifferential {
    type Target = Ray;

    fn deref(&self) -> &Ray {
        &self.ray
    }
}
