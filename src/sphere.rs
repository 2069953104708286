use std::fmt;
use std::fmt::Formatter;

use crate::error::SceneError;
use crate::film::Color;
use crate::math::{difference_of_products, quadratic, Float};
use crate::ray::Ray;
use crate::vecmath::{dot, length_squared, Normal3f, Point3f, Vector3f};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3f,
    pub radius: Float,
    pub color: Color,
}

/// Nearest intersection of a ray with a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereHit {
    pub t: Float,
    pub point: Point3f,
    /// Outward unit normal at `point`.
    pub normal: Normal3f,
}

impl Sphere {
    pub fn new(center: Point3f, radius: Float, color: Color) -> Result<Self, SceneError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        if center.has_nan() {
            return Err(SceneError::NotANumber("sphere center"));
        }
        if ![center.x, center.y, center.z].iter().all(|c| c.is_finite()) {
            return Err(SceneError::NotFinite("sphere center"));
        }
        Ok(Sphere {
            center,
            radius,
            color,
        })
    }

    /// Coefficients `(a, b, c)` of `a*t^2 + b*t + c = 0`, computed with the
    /// ray moved into the sphere's frame so the sphere sits at the origin.
    fn coefficients(&self, ray: &Ray) -> (Float, Float, Float) {
        let o: Vector3f = ray.origin - self.center;
        let d = ray.direction;
        let a = length_squared(d);
        let b = 2.0 * dot(o, d);
        let c = length_squared(o) - self.radius * self.radius;
        (a, b, c)
    }

    /// `b^2 - 4ac` for the ray against this sphere.
    pub fn discriminant(&self, ray: &Ray) -> Float {
        let (a, b, c) = self.coefficients(ray);
        difference_of_products(b, b, 4.0 * a, c)
    }

    /// Whether the infinite line through `ray` touches the sphere. Tangent
    /// rays count as hits. The ray extent is not consulted.
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        self.discriminant(ray) >= 0.0
    }

    /// Both parameters where the line through `ray` crosses the sphere,
    /// smallest first.
    pub fn roots(&self, ray: &Ray) -> Option<(Float, Float)> {
        let (a, b, c) = self.coefficients(ray);
        quadratic(a, b, c)
    }

    /// Nearest crossing inside `[ray.tmin, ray.tmax]`.
    pub fn intersect(&self, ray: &Ray) -> Option<SphereHit> {
        let (t0, t1) = self.roots(ray)?;
        let t = if ray.contains(t0) {
            t0
        } else if ray.contains(t1) {
            t1
        } else {
            return None;
        };

        let point = ray.eval(t);
        let normal = Normal3f::from((point - self.center) / self.radius);
        Some(SphereHit { t, point, normal })
    }

    pub fn contains(&self, p: Point3f) -> bool {
        length_squared(p - self.center) < self.radius * self.radius
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(center: {}, radius: {}, color: {})",
            self.center, self.radius, self.color
        )
    }
}
