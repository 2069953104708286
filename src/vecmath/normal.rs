//! Surface normals. They add, subtract, scale and negate among themselves,
//! dot with vectors, and convert to and from `Vector3` explicitly.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::{dot, NormalKind, Scalar, Tuple, Tuple3, Vector3, VectorKind};
use crate::math::Float;

pub type Normal3<T> = Tuple3<T, NormalKind>;

pub type Normal3f = Normal3<Float>;

impl<T: Scalar> Add for Normal3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> AddAssign for Normal3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Normal3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> SubAssign for Normal3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Normal3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Scalar> From<Vector3<T>> for Normal3<T> {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        v.retag()
    }
}

impl<T: Scalar> From<Normal3<T>> for Tuple3<T, VectorKind> {
    #[inline]
    fn from(n: Normal3<T>) -> Self {
        n.retag()
    }
}

/// Flips `n` so that it lies in the same hemisphere as `v`.
pub fn face_forward<T: Scalar + Neg<Output = T>>(n: Normal3<T>, v: Vector3<T>) -> Normal3<T> {
    if dot(n, v) < T::zero() {
        -n
    } else {
        n
    }
}
