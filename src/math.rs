//! Scalar helpers shared by the vector algebra and the intersection code.
//!
//! The product helpers use a fused multiply-add to recover the rounding error
//! of the plain product, which keeps discriminants and cross products accurate
//! when the two terms nearly cancel.

use std::ops::Mul;

use num_traits::{Float as FloatOps, NumCast};

pub type Float = f32;

#[inline]
pub fn fma<T: FloatOps>(a: T, b: T, c: T) -> T {
    a.mul_add(b, c)
}

#[inline]
pub fn sqr<T: Mul<Output = T> + Copy>(v: T) -> T {
    v * v
}

/// `a * b + c * d` with the rounding error of `c * d` folded back in.
#[inline]
pub fn sum_of_products<T: FloatOps>(a: T, b: T, c: T, d: T) -> T {
    let cd = c * d;
    let sum = fma(a, b, cd);
    let error = fma(c, d, -cd);
    sum + error
}

/// `a * b - c * d` with the rounding error of `c * d` folded back in.
#[inline]
pub fn difference_of_products<T: FloatOps>(a: T, b: T, c: T, d: T) -> T {
    let cd = c * d;
    let difference = fma(a, b, -cd);
    let error = fma(-c, d, cd);
    difference + error
}

#[inline]
pub fn lerp<T: FloatOps>(t: T, a: T, b: T) -> T {
    (T::one() - t) * a + t * b
}

/// Real roots of `a*t^2 + b*t + c = 0`, smallest first.
///
/// Returns `None` when the discriminant is negative. A zero discriminant
/// yields the double root twice; a degenerate `a == 0` falls back to the
/// linear solution.
pub fn quadratic<T: FloatOps>(a: T, b: T, c: T) -> Option<(T, T)> {
    if a == T::zero() {
        if b == T::zero() {
            return None;
        }
        let t = -c / b;
        return Some((t, t));
    }

    let four = <T as NumCast>::from(4.0)?;
    let discriminant = difference_of_products(b, b, four * a, c);
    if discriminant < T::zero() {
        return None;
    }
    let root = discriminant.sqrt();

    let half = <T as NumCast>::from(0.5)?;
    let q = -half * (b + root.copysign(b));
    if q == T::zero() {
        // b == 0 and discriminant == 0, so c == 0 and both roots are zero
        return Some((T::zero(), T::zero()));
    }

    let (t0, t1) = (q / a, c / q);
    if t0 > t1 {
        Some((t1, t0))
    } else {
        Some((t0, t1))
    }
}
