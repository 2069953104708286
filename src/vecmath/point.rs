//! Locations. A point can be offset by a vector and two points differ by a
//! vector, but points never add:
//!
//! ```compile_fail
//! use tfrt::vecmath::Point3f;
//!
//! let a = Point3f::new(1.0, 0.0, 0.0);
//! let b = Point3f::new(0.0, 1.0, 0.0);
//! let _ = a + b;
//! ```
//!
//! Negating a point has no meaning either:
//!
//! ```compile_fail
//! use tfrt::vecmath::Point3f;
//!
//! let _ = -Point3f::new(1.0, 0.0, 0.0);
//! ```

use std::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::Float as FloatOps;

use super::{length, length_squared, PointKind, Scalar, Tuple2, Tuple3, VectorKind};
use crate::math::Float;

pub type Point2<T> = Tuple2<T, PointKind>;
pub type Point3<T> = Tuple3<T, PointKind>;

pub type Point2f = Point2<Float>;
pub type Point2i = Point2<i32>;
pub type Point3f = Point3<Float>;
pub type Point3i = Point3<i32>;

macro_rules! point_ops {
    ($name:ident) => {
        impl<T: Scalar> Add<$name<T, VectorKind>> for $name<T, PointKind> {
            type Output = Self;

            #[inline]
            fn add(self, v: $name<T, VectorKind>) -> Self {
                self.combine(v, |a, b| a + b)
            }
        }

        impl<T: Scalar> AddAssign<$name<T, VectorKind>> for $name<T, PointKind> {
            #[inline]
            fn add_assign(&mut self, v: $name<T, VectorKind>) {
                *self = *self + v;
            }
        }

        impl<T: Scalar> Sub<$name<T, VectorKind>> for $name<T, PointKind> {
            type Output = Self;

            #[inline]
            fn sub(self, v: $name<T, VectorKind>) -> Self {
                self.combine(v, |a, b| a - b)
            }
        }

        impl<T: Scalar> SubAssign<$name<T, VectorKind>> for $name<T, PointKind> {
            #[inline]
            fn sub_assign(&mut self, v: $name<T, VectorKind>) {
                *self = *self - v;
            }
        }

        impl<T: Scalar> Sub for $name<T, PointKind> {
            type Output = $name<T, VectorKind>;

            #[inline]
            fn sub(self, p: Self) -> $name<T, VectorKind> {
                self.combine(p, |a, b| a - b)
            }
        }

        impl<T: Scalar> From<$name<T, VectorKind>> for $name<T, PointKind> {
            /// The point reached by moving `v` away from the origin.
            #[inline]
            fn from(v: $name<T, VectorKind>) -> Self {
                v.retag()
            }
        }
    };
}

point_ops!(Tuple2);
point_ops!(Tuple3);

pub fn distance<T: FloatOps + Scalar>(p1: Point3<T>, p2: Point3<T>) -> T {
    length(p1 - p2)
}

pub fn distance_squared<T: Scalar>(p1: Point3<T>, p2: Point3<T>) -> T {
    length_squared(p1 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vecmath::{Vector2i, Vector3f};

    #[test]
    fn point_vector_arithmetic() {
        let p = Point3f::new(1.0, 2.0, 3.0);
        let v = Vector3f::new(0.5, -1.0, 2.0);

        assert_eq!(p + v, Point3f::new(1.5, 1.0, 5.0));
        assert_eq!(p - v, Point3f::new(0.5, 3.0, 1.0));

        let q = Point3f::new(4.0, 6.0, 3.0);
        let d: Vector3f = q - p;
        assert_eq!(d, Vector3f::new(3.0, 4.0, 0.0));
        assert_eq!(p + d, q);

        let mut r = p;
        r += v;
        r -= v;
        assert_eq!(r, p);
    }

    #[test]
    fn integer_points() {
        let p = Point2i::new(3, 4);
        let q = Point2i::new(1, 1);
        assert_eq!(p - q, Vector2i::new(2, 3));
        assert_eq!(q + Vector2i::new(2, 3), p);
    }

    #[test]
    fn distances() {
        let p = Point3f::new(0.0, 0.0, 0.0);
        let q = Point3f::new(3.0, 0.0, 4.0);
        assert_eq!(distance(p, q), 5.0);
        assert_eq!(distance_squared(p, q), 25.0);
        assert_eq!(distance_squared(Point3i::new(1, 1, 1), Point3i::new(2, 3, 4)), 14);
    }

    #[test]
    fn points_scale_componentwise() {
        let p = Point3f::new(1.0, 2.0, 3.0);
        assert_eq!(p * 2.0, Point3f::new(2.0, 4.0, 6.0));
        assert_eq!(p / 2.0, Point3f::new(0.5, 1.0, 1.5));
    }
}
