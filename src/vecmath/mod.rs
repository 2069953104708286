//! Points, vectors and normals.
//!
//! All three are stored the same way, as two or three components of some
//! numeric element type, but they are different things: a point is a
//! location, a vector is a displacement and a normal is a direction tied to a
//! surface. [`Tuple2`] and [`Tuple3`] carry the components together with a
//! zero-sized kind marker, so `Point3<f32>` and `Vector3<f32>` are distinct
//! types that share one implementation of the componentwise arithmetic.
//!
//! Which additions and subtractions exist depends on the kind and is decided
//! in the `point`, `vector` and `normal` modules:
//!
//! | lhs | op | rhs | result |
//! |---|---|---|---|
//! | vector | `+` `-` | vector | vector |
//! | point | `+` `-` | vector | point |
//! | point | `-` | point | vector |
//! | normal | `+` `-` | normal | normal |
//!
//! There is no `point + point` and no point negation. Converting between
//! kinds, or between element types, always goes through an explicit call
//! (`From` for kinds, [`Tuple3::cast`] for element types).
//!
//! Invariant checks (NaN components, division by zero) are `debug_assert!`s
//! and cost nothing in release builds.

mod normal;
mod point;
mod vector;

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Div, DivAssign, Index, IndexMut, Mul, MulAssign};

use num_traits::{AsPrimitive, Float as FloatOps, Num, One, Signed};

use crate::math;

pub use normal::{face_forward, Normal3, Normal3f};
pub use point::{distance, distance_squared, Point2, Point2f, Point2i, Point3, Point3f, Point3i};
pub use vector::{
    abs_dot, cross, dot, dot2, length, length_squared, normalize, Vector2, Vector2f, Vector2i,
    Vector3, Vector3f, Vector3i,
};

/// Element type of a tuple.
pub trait Scalar: Num + Copy + PartialOrd + fmt::Debug + fmt::Display + 'static {}

impl<T> Scalar for T where T: Num + Copy + PartialOrd + fmt::Debug + fmt::Display + 'static {}

/// `true` only for floating point NaN; integers never are.
#[allow(clippy::eq_op)]
#[inline]
pub fn is_nan<T: Scalar>(v: T) -> bool {
    v != v
}

/// Marker selecting the meaning of a tuple.
pub trait Kind: Copy + Default + fmt::Debug + PartialEq + 'static {}

/// Kinds that describe a direction rather than a location.
pub trait Direction: Kind {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VectorKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalKind;

impl Kind for PointKind {}
impl Kind for VectorKind {}
impl Kind for NormalKind {}
impl Direction for VectorKind {}
impl Direction for NormalKind {}

/// Operations every tuple shape supports, used by the generic free functions
/// below so they work on any dimension and any kind.
pub trait Tuple: Copy {
    type Elem: Scalar;
    const DIM: usize;

    fn from_fn(f: impl Fn(usize) -> Self::Elem) -> Self;
    fn map(self, f: impl Fn(Self::Elem) -> Self::Elem) -> Self;
    fn zip(self, other: Self, f: impl Fn(Self::Elem, Self::Elem) -> Self::Elem) -> Self;
    fn component(&self, i: usize) -> Self::Elem;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tuple2<T, K> {
    pub x: T,
    pub y: T,
    kind: PhantomData<K>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tuple3<T, K> {
    pub x: T,
    pub y: T,
    pub z: T,
    kind: PhantomData<K>,
}

macro_rules! impl_tuple {
    ($name:ident, $dim:expr, { $($idx:literal => $field:ident),+ }) => {
        impl<T: Scalar, K: Kind> $name<T, K> {
            #[inline]
            pub fn new($($field: T),+) -> Self {
                let t = $name { $($field),+, kind: PhantomData };
                debug_assert!(!t.has_nan(), "NaN component in {}", t);
                t
            }

            pub fn has_nan(&self) -> bool {
                false $(|| is_nan(self.$field))+
            }

            /// Converts the element type, with `as` semantics per component.
            pub fn cast<U>(self) -> $name<U, K>
            where
                T: AsPrimitive<U>,
                U: Scalar,
            {
                $name::<U, K>::new($(self.$field.as_()),+)
            }

            /// Componentwise combination that picks the result kind; the
            /// operator impls decide which kind combinations are legal.
            #[inline]
            pub(crate) fn combine<K2: Kind, K3: Kind>(
                self,
                other: $name<T, K2>,
                f: impl Fn(T, T) -> T,
            ) -> $name<T, K3> {
                $name::<T, K3>::new($(f(self.$field, other.$field)),+)
            }

            #[inline]
            pub(crate) fn retag<K2: Kind>(self) -> $name<T, K2> {
                $name { $($field: self.$field),+, kind: PhantomData }
            }
        }

        impl<T: Scalar, K: Kind> Tuple for $name<T, K> {
            type Elem = T;
            const DIM: usize = $dim;

            #[inline]
            fn from_fn(f: impl Fn(usize) -> T) -> Self {
                Self::new($(f($idx)),+)
            }

            #[inline]
            fn map(self, f: impl Fn(T) -> T) -> Self {
                Self::new($(f(self.$field)),+)
            }

            #[inline]
            fn zip(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
                self.combine(other, f)
            }

            #[inline]
            fn component(&self, i: usize) -> T {
                self[i]
            }
        }

        impl<T: Scalar, K: Kind> Index<usize> for $name<T, K> {
            type Output = T;

            fn index(&self, i: usize) -> &T {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!("index {} out of range for {}-component tuple", i, $dim),
                }
            }
        }

        impl<T: Scalar, K: Kind> IndexMut<usize> for $name<T, K> {
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!("index {} out of range for {}-component tuple", i, $dim),
                }
            }
        }

        impl<T: Scalar, K: Kind> Mul<T> for $name<T, K> {
            type Output = Self;

            #[inline]
            fn mul(self, s: T) -> Self {
                debug_assert!(!is_nan(s));
                self.map(|c| c * s)
            }
        }

        impl<T: Scalar, K: Kind> MulAssign<T> for $name<T, K> {
            #[inline]
            fn mul_assign(&mut self, s: T) {
                *self = *self * s;
            }
        }

        impl<T: Scalar, K: Kind> Div<T> for $name<T, K> {
            type Output = Self;

            #[inline]
            fn div(self, d: T) -> Self {
                debug_assert!(d != T::zero(), "division of {} by zero", self);
                debug_assert!(!is_nan(d));
                self.map(|c| c / d)
            }
        }

        impl<T: Scalar, K: Kind> DivAssign<T> for $name<T, K> {
            #[inline]
            fn div_assign(&mut self, d: T) {
                *self = *self / d;
            }
        }

        impl<T: Scalar, K: Kind> fmt::Display for $name<T, K> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let parts = [$(self.$field.to_string()),+];
                write!(f, "[ {} ]", parts.join(", "))
            }
        }
    };
}

impl_tuple!(Tuple2, 2, { 0 => x, 1 => y });
impl_tuple!(Tuple3, 3, { 0 => x, 1 => y, 2 => z });

macro_rules! impl_scalar_lhs_mul {
    ($($s:ty),+) => {
        $(
            impl<K: Kind> Mul<Tuple2<$s, K>> for $s {
                type Output = Tuple2<$s, K>;

                #[inline]
                fn mul(self, t: Tuple2<$s, K>) -> Tuple2<$s, K> {
                    t * self
                }
            }

            impl<K: Kind> Mul<Tuple3<$s, K>> for $s {
                type Output = Tuple3<$s, K>;

                #[inline]
                fn mul(self, t: Tuple3<$s, K>) -> Tuple3<$s, K> {
                    t * self
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, i64);

pub fn abs<V>(v: V) -> V
where
    V: Tuple,
    V::Elem: Signed,
{
    v.map(|c| c.abs())
}

pub fn floor<V>(v: V) -> V
where
    V: Tuple,
    V::Elem: FloatOps,
{
    v.map(|c| c.floor())
}

pub fn ceil<V>(v: V) -> V
where
    V: Tuple,
    V::Elem: FloatOps,
{
    v.map(|c| c.ceil())
}

/// `(1 - t) * a + t * b`, componentwise. Works for points too, since the
/// blend never forms a bare `point + point`.
pub fn lerp<V>(t: V::Elem, a: V, b: V) -> V
where
    V: Tuple,
    V::Elem: FloatOps,
{
    a.zip(b, |a, b| math::lerp(t, a, b))
}

/// Componentwise `a * b + c` for a scalar `a`.
pub fn fma<V>(a: V::Elem, b: V, c: V) -> V
where
    V: Tuple,
    V::Elem: FloatOps,
{
    b.zip(c, |b, c| math::fma(a, b, c))
}

pub fn min<V: Tuple>(a: V, b: V) -> V {
    a.zip(b, |a, b| if b < a { b } else { a })
}

pub fn max<V: Tuple>(a: V, b: V) -> V {
    a.zip(b, |a, b| if b > a { b } else { a })
}

pub fn min_component_value<V: Tuple>(v: V) -> V::Elem {
    v.component(min_component_index(v))
}

pub fn max_component_value<V: Tuple>(v: V) -> V::Elem {
    v.component(max_component_index(v))
}

/// Index of the smallest component; ties go to the lower index.
pub fn min_component_index<V: Tuple>(v: V) -> usize {
    (1..V::DIM).fold(0, |best, i| {
        if v.component(i) < v.component(best) {
            i
        } else {
            best
        }
    })
}

/// Index of the largest component; ties go to the lower index.
pub fn max_component_index<V: Tuple>(v: V) -> usize {
    (1..V::DIM).fold(0, |best, i| {
        if v.component(i) > v.component(best) {
            i
        } else {
            best
        }
    })
}

/// Reorders components: component `i` of the result is `v[perm[i]]`.
pub fn permute<V: Tuple>(v: V, perm: &[usize]) -> V {
    debug_assert_eq!(perm.len(), V::DIM);
    V::from_fn(|i| v.component(perm[i]))
}

/// Product of all components.
pub fn hprod<V: Tuple>(v: V) -> V::Elem {
    (0..V::DIM).fold(V::Elem::one(), |p, i| p * v.component(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_vector(rng: &mut StdRng) -> Vector3f {
        Vector3f::new(
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
        )
    }

    fn random_point(rng: &mut StdRng) -> Point3f {
        Point3f::from(random_vector(rng))
    }

    fn assert_close<K: Kind>(a: Tuple3<f32, K>, b: Tuple3<f32, K>) {
        let tolerance = 1e-3 * (1.0 + max_component_value(abs(a)).max(max_component_value(abs(b))));
        for i in 0..3 {
            assert!(
                (a[i] - b[i]).abs() <= tolerance,
                "{} and {} differ in component {}",
                a,
                b,
                i
            );
        }
    }

    #[test]
    fn construction_and_indexing() {
        let mut v = Vector3i::new(1, 2, 3);
        assert_eq!((v[0], v[1], v[2]), (1, 2, 3));
        v[1] = 7;
        assert_eq!(v.y, 7);

        let mut p = Point2f::new(0.5, -0.5);
        p[0] += 1.0;
        assert_eq!(p, Point2f::new(1.5, -0.5));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_index_panics() {
        let v = Vector2i::new(1, 2);
        let _ = v[2];
    }

    #[test]
    fn display_lists_components() {
        assert_eq!(Vector3i::new(1, -2, 3).to_string(), "[ 1, -2, 3 ]");
        assert_eq!(Point2f::new(0.5, 2.0).to_string(), "[ 0.5, 2 ]");
    }

    #[test]
    fn has_nan_reports_invalid_components() {
        let ok = Vector3f::new(1.0, 2.0, 3.0);
        assert!(!ok.has_nan());

        let bad: Vector3f = Tuple3 { x: 1.0, y: f32::NAN, z: 0.0, kind: PhantomData };
        assert!(bad.has_nan());
        assert!(!Point3i::new(0, 0, 0).has_nan());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn nan_component_is_rejected_in_debug() {
        let _ = Vector3f::new(0.0, f32::NAN, 0.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn division_by_zero_is_rejected_in_debug() {
        let _ = Vector2f::new(1.0, 1.0) / 0.0;
    }

    #[test]
    fn scalar_multiplication_from_either_side() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.5, Vector3f::new(2.5, 5.0, 7.5));
        assert_eq!(2.5 * v, v * 2.5);
        assert_eq!(3 * Vector2i::new(1, -1), Vector2i::new(3, -3));

        let mut w = v;
        w *= 2.0;
        w /= 4.0;
        assert_eq!(w, Vector3f::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn explicit_element_conversions() {
        let vi = Vector3i::new(1, -2, 3);
        assert_eq!(vi.cast::<f32>(), Vector3f::new(1.0, -2.0, 3.0));

        let p = Point3f::new(1.7, -1.2, 3.0);
        assert_eq!(p.cast::<i32>(), Point3i::new(1, -1, 3));
    }

    #[test]
    fn explicit_kind_conversions() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        let p = Point3f::from(v);
        assert_eq!((p.x, p.y, p.z), (1.0, 2.0, 3.0));
        assert_eq!(Vector3f::from(p), v);

        let p2 = Point2i::from(Vector2i::new(4, 5));
        assert_eq!(Vector2i::from(p2), Vector2i::new(4, 5));
    }

    #[test]
    fn generic_helpers_work_for_points_and_vectors() {
        assert_eq!(abs(Vector3f::new(-1.0, 2.0, -3.0)), Vector3f::new(1.0, 2.0, 3.0));
        assert_eq!(abs(Point2i::new(-4, 4)), Point2i::new(4, 4));

        let p = Point2f::new(1.5, -1.5);
        assert_eq!(floor(p), Point2f::new(1.0, -2.0));
        assert_eq!(ceil(p), Point2f::new(2.0, -1.0));

        let a = Point3f::new(0.0, 0.0, 0.0);
        let b = Point3f::new(2.0, 4.0, -8.0);
        assert_eq!(lerp(0.5, a, b), Point3f::new(1.0, 2.0, -4.0));
        assert_eq!(lerp(0.0, a, b), a);
        assert_eq!(lerp(1.0, a, b), b);

        let u = Vector2i::new(1, 5);
        let v = Vector2i::new(3, 2);
        assert_eq!(min(u, v), Vector2i::new(1, 2));
        assert_eq!(max(u, v), Vector2i::new(3, 5));
    }

    #[test]
    fn component_helpers() {
        let v = Vector3f::new(2.0, -1.0, 5.0);
        assert_eq!(min_component_value(v), -1.0);
        assert_eq!(max_component_value(v), 5.0);
        assert_eq!(min_component_index(v), 1);
        assert_eq!(max_component_index(v), 2);
        assert_eq!(hprod(v), -10.0);
        assert_eq!(permute(v, &[2, 0, 1]), Vector3f::new(5.0, 2.0, -1.0));
        assert_eq!(hprod(Point2i::new(3, 4)), 12);

        let r = fma(2.0, Vector2f::new(1.0, 2.0), Vector2f::new(0.5, 0.5));
        assert_eq!(r, Vector2f::new(2.5, 4.5));
    }

    #[test]
    fn vector_addition_round_trips() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let a = random_vector(&mut rng);
            let b = random_vector(&mut rng);
            assert_close((a + b) - b, a);
        }
    }

    #[test]
    fn vector_scaling_round_trips() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let a = random_vector(&mut rng);
            let mut s: f32 = rng.gen_range(-10.0..10.0);
            if s.abs() < 1e-3 {
                s = 1.0;
            }
            assert_close((a * s) / s, a);
        }
    }

    #[test]
    fn point_offset_round_trips() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..1000 {
            let p = random_point(&mut rng);
            let v = random_vector(&mut rng);
            assert_close((p + v) - v, p);
        }
    }

    #[test]
    fn point_difference_is_antisymmetric() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..1000 {
            let p1 = random_point(&mut rng);
            let p2 = random_point(&mut rng);
            assert_eq!(p1 - p2, -(p2 - p1));
        }
    }
}
