use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::Float as FloatOps;

use super::{Direction, PointKind, Scalar, Tuple, Tuple2, Tuple3, VectorKind};
use crate::math::{difference_of_products, Float};

pub type Vector2<T> = Tuple2<T, VectorKind>;
pub type Vector3<T> = Tuple3<T, VectorKind>;

pub type Vector2f = Vector2<Float>;
pub type Vector2i = Vector2<i32>;
pub type Vector3f = Vector3<Float>;
pub type Vector3i = Vector3<i32>;

macro_rules! vector_ops {
    ($name:ident) => {
        impl<T: Scalar> Add for $name<T, VectorKind> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self.combine(rhs, |a, b| a + b)
            }
        }

        impl<T: Scalar> AddAssign for $name<T, VectorKind> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> Sub for $name<T, VectorKind> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self.combine(rhs, |a, b| a - b)
            }
        }

        impl<T: Scalar> SubAssign for $name<T, VectorKind> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar + Neg<Output = T>> Neg for $name<T, VectorKind> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                self.map(|c| -c)
            }
        }

        impl<T: Scalar> From<$name<T, PointKind>> for $name<T, VectorKind> {
            /// The displacement from the origin to `p`.
            #[inline]
            fn from(p: $name<T, PointKind>) -> Self {
                p.retag()
            }
        }
    };
}

vector_ops!(Tuple2);
vector_ops!(Tuple3);

pub fn dot2<T: Scalar>(a: Vector2<T>, b: Vector2<T>) -> T {
    a.x * b.x + a.y * b.y
}

/// Dot product of two directions (vectors or normals, in any mix).
#[inline]
pub fn dot<T, K1, K2>(a: Tuple3<T, K1>, b: Tuple3<T, K2>) -> T
where
    T: Scalar,
    K1: Direction,
    K2: Direction,
{
    a.x * b.x + a.y * b.y + a.z * b.z
}

#[inline]
pub fn abs_dot<T, K1, K2>(a: Tuple3<T, K1>, b: Tuple3<T, K2>) -> T
where
    T: FloatOps + Scalar,
    K1: Direction,
    K2: Direction,
{
    dot(a, b).abs()
}

pub fn cross<T: FloatOps + Scalar>(a: Vector3<T>, b: Vector3<T>) -> Vector3<T> {
    Vector3::new(
        difference_of_products(a.y, b.z, a.z, b.y),
        difference_of_products(a.z, b.x, a.x, b.z),
        difference_of_products(a.x, b.y, a.y, b.x),
    )
}

#[inline]
pub fn length_squared<T: Scalar, K: Direction>(v: Tuple3<T, K>) -> T {
    dot(v, v)
}

#[inline]
pub fn length<T: FloatOps + Scalar, K: Direction>(v: Tuple3<T, K>) -> T {
    length_squared(v).sqrt()
}

/// Scales `v` to unit length. A zero vector trips the division check in
/// debug builds.
#[inline]
pub fn normalize<T: FloatOps + Scalar, K: Direction>(v: Tuple3<T, K>) -> Tuple3<T, K> {
    v / length(v)
}
