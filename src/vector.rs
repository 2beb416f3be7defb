//! Vectors.

use crate::{hash::LazyHashCache, scalar};
use std::fmt;

/// A 2-dimensional vector.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 2]", from = "[f64; 2]")
)]
#[derive(Clone)]
pub struct Vector2 {
    x: f64,
    y: f64,
    hash_cache: LazyHashCache<Self>,
}

/// A 3-dimensional vector.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 3]", from = "[f64; 3]")
)]
#[derive(Clone)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
    hash_cache: LazyHashCache<Self>,
}

/// A 4-dimensional vector.
///
/// When used as a homogeneous coordinate, the w-component is the projective
/// weight (see [`Vector4::dehomogenized`]).
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 4]", from = "[f64; 4]")
)]
#[derive(Clone)]
pub struct Vector4 {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
    hash_cache: LazyHashCache<Self>,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            hash_cache: LazyHashCache::new(Self::compute_hash),
        }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the components as an array `[x, y]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Computes the normalized version of the vector. A vector whose length is
    /// already approximately zero or one is returned unchanged.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if scalar::approx_eq(length, 0.0) || scalar::approx_eq(length, 1.0) {
            return self.clone();
        }
        self / length
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (the determinant of the matrix with the
    /// two vectors as rows).
    #[inline]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the negated vector.
    #[inline]
    pub fn inverse(&self) -> Self {
        -self
    }

    /// Linearly interpolates from this vector towards `other`. The parameter
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn interpolated(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Rotates the vector counterclockwise by the given angle in radians
    /// about the origin.
    pub fn rotated(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotates the vector counterclockwise by the given angle in radians
    /// about the given pivot.
    pub fn rotated_around(&self, angle: f64, pivot: &Self) -> Self {
        (self - pivot).rotated(angle) + pivot
    }

    /// Computes the signed angle in radians from this vector to `other`, in
    /// the range `[-π, π]`.
    pub fn angle_with(&self, other: &Self) -> f64 {
        if self == other {
            return 0.0;
        }
        let a = self.normalized();
        let b = other.normalized();
        let cross = a.cross(&b);
        let dot = a.dot(&b).clamp(-1.0, 1.0);
        cross.atan2(dot)
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::zero()
    }
}

impl_scalar_components!(Vector2, 2);

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Mul, mul, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x * b.x, a.y * b.y)
});

impl_binop!(Div, div, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x / b.x, a.y / b.y)
});

impl_binop!(Mul, mul, Vector2, f64, Vector2, |a, b| {
    Vector2::new(a.x * b, a.y * b)
});

impl_binop!(Mul, mul, f64, Vector2, Vector2, |a, b| { b * a });

impl_binop!(Div, div, Vector2, f64, Vector2, |a, b| {
    Vector2::new(a.x / b, a.y / b)
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x, -val.y)
});

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            hash_cache: LazyHashCache::new(Self::compute_hash),
        }
    }

    /// Creates a 3D vector from a 2D vector and a z-component.
    #[inline]
    pub const fn from_vector2(xy: &Vector2, z: f64) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The x- and z-components.
    #[inline]
    pub const fn xz(&self) -> Vector2 {
        Vector2::new(self.x, self.z)
    }

    /// The y- and z-components.
    #[inline]
    pub const fn yz(&self) -> Vector2 {
        Vector2::new(self.y, self.z)
    }

    /// Returns the components as an array `[x, y, z]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Computes the normalized version of the vector. A vector whose length is
    /// already approximately zero or one is returned unchanged.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if scalar::approx_eq(length, 0.0) || scalar::approx_eq(length, 1.0) {
            return self.clone();
        }
        self / length
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the negated vector.
    #[inline]
    pub fn inverse(&self) -> Self {
        -self
    }

    /// Linearly interpolates from this vector towards `other`. The parameter
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn interpolated(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector4> for Vector3 {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.dehomogenized()
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl_scalar_components!(Vector3, 3);

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x * b.x, a.y * b.y, a.z * b.z)
});

impl_binop!(Div, div, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x / b.x, a.y / b.y, a.z / b.z)
});

impl_binop!(Mul, mul, Vector3, f64, Vector3, |a, b| {
    Vector3::new(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, f64, Vector3, Vector3, |a, b| { b * a });

impl_binop!(Div, div, Vector3, f64, Vector3, |a, b| {
    Vector3::new(a.x / b, a.y / b, a.z / b)
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            x,
            y,
            z,
            w,
            hash_cache: LazyHashCache::new(Self::compute_hash),
        }
    }

    /// Creates a 4D vector from a 3D vector and a w-component.
    #[inline]
    pub const fn from_vector3(xyz: &Vector3, w: f64) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// The x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The x- and z-components.
    #[inline]
    pub const fn xz(&self) -> Vector2 {
        Vector2::new(self.x, self.z)
    }

    /// The y- and z-components.
    #[inline]
    pub const fn yz(&self) -> Vector2 {
        Vector2::new(self.y, self.z)
    }

    #[inline]
    pub const fn xw(&self) -> Vector2 {
        Vector2::new(self.x, self.w)
    }

    #[inline]
    pub const fn yw(&self) -> Vector2 {
        Vector2::new(self.y, self.w)
    }

    #[inline]
    pub const fn zw(&self) -> Vector2 {
        Vector2::new(self.z, self.w)
    }

    /// The x-, y- and z-components.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub const fn xyw(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.w)
    }

    #[inline]
    pub const fn xzw(&self) -> Vector3 {
        Vector3::new(self.x, self.z, self.w)
    }

    #[inline]
    pub const fn yzw(&self) -> Vector3 {
        Vector3::new(self.y, self.z, self.w)
    }

    /// Converts the homogeneous vector to 3D by dividing the x-, y- and
    /// z-components by w. If w is approximately zero, the components are
    /// returned undivided.
    pub fn dehomogenized(&self) -> Vector3 {
        if scalar::approx_eq(self.w, 0.0) {
            self.xyz()
        } else {
            self.xyz() / self.w
        }
    }

    /// Returns the components as an array `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Computes the normalized version of the vector. A vector whose length is
    /// already approximately zero or one is returned unchanged.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if scalar::approx_eq(length, 0.0) || scalar::approx_eq(length, 1.0) {
            return self.clone();
        }
        self / length
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns the negated vector.
    #[inline]
    pub fn inverse(&self) -> Self {
        -self
    }

    /// Linearly interpolates from this vector towards `other`. The parameter
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn interpolated(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl From<[f64; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl Default for Vector4 {
    fn default() -> Self {
        Self::zero()
    }
}

impl_scalar_components!(Vector4, 4);

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x * b.x, a.y * b.y, a.z * b.z, a.w * b.w)
});

impl_binop!(Div, div, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x / b.x, a.y / b.y, a.z / b.z, a.w / b.w)
});

impl_binop!(Mul, mul, Vector4, f64, Vector4, |a, b| {
    Vector4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_binop!(Mul, mul, f64, Vector4, Vector4, |a, b| { b * a });

impl_binop!(Div, div, Vector4, f64, Vector4, |a, b| {
    Vector4::new(a.x / b, a.y / b, a.z / b, a.w / b)
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;
    use std::{
        collections::{HashMap, HashSet},
        f64::consts::{FRAC_PI_2, FRAC_PI_4, PI},
        hash::{BuildHasher, BuildHasherDefault, DefaultHasher},
    };

    const EPSILON: f64 = 1e-12;

    fn hash_of<T: std::hash::Hash>(value: &T) -> u64 {
        BuildHasherDefault::<DefaultHasher>::default().hash_one(value)
    }

    prop_compose! {
        fn vector2_strategy()(x in -1e3..1e3, y in -1e3..1e3) -> Vector2 {
            Vector2::new(x, y)
        }
    }

    prop_compose! {
        fn vector3_strategy()(x in -1e3..1e3, y in -1e3..1e3, z in -1e3..1e3) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    prop_compose! {
        fn vector4_strategy()(
            x in -1e3..1e3,
            y in -1e3..1e3,
            z in -1e3..1e3,
            w in -1e3..1e3,
        ) -> Vector4 {
            Vector4::new(x, y, z, w)
        }
    }

    // === Vector2 Tests ===

    #[test]
    fn computing_vector2_length_works() {
        let v = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.length(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.length_squared(), 25.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_vector2_gives_unit_vector() {
        let normalized = Vector2::new(3.0, 4.0).normalized();
        assert_abs_diff_eq!(normalized.length(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalized, Vector2::new(0.6, 0.8), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector2_gives_zero_vector() {
        let normalized = Vector2::zero().normalized();
        assert_eq!(normalized.to_array(), [0.0, 0.0]);
    }

    #[test]
    fn normalizing_unit_vector2_returns_it_unchanged() {
        let v = Vector2::new(FRAC_PI_4.cos(), FRAC_PI_4.sin());
        assert_eq!(v.normalized().to_array(), v.to_array());
    }

    #[test]
    fn vector2_dot_and_cross_products_work() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(a.dot(&b), 11.0, epsilon = EPSILON);
        assert_abs_diff_eq!(a.cross(&b), -2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(b.cross(&a), 2.0, epsilon = EPSILON);
    }

    #[test]
    fn vector2_arithmetic_operations_work() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(4.0, 8.0);

        assert_eq!(&a + &b, Vector2::new(5.0, 10.0));
        assert_eq!(&a - &b, Vector2::new(-3.0, -6.0));
        assert_eq!(&a * &b, Vector2::new(4.0, 16.0));
        assert_eq!(&b / &a, Vector2::new(4.0, 4.0));
        assert_eq!(&a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(3.0 * &a, Vector2::new(3.0, 6.0));
        assert_eq!(&a / 2.0, Vector2::new(0.5, 1.0));
        assert_eq!(-&a, Vector2::new(-1.0, -2.0));
        assert_eq!(a.inverse(), Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn vector2_interpolation_extrapolates_outside_unit_interval() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(2.0, 4.0);
        assert_eq!(a.interpolated(&b, 0.5), Vector2::new(1.0, 2.0));
        assert_eq!(a.interpolated(&b, 2.0), Vector2::new(4.0, 8.0));
        assert_eq!(a.interpolated(&b, -1.0), Vector2::new(-2.0, -4.0));
    }

    #[test]
    fn rotating_unit_x_by_quarter_turn_gives_unit_y() {
        assert_eq!(Vector2::new(1.0, 0.0).rotated(FRAC_PI_2), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn rotating_vector2_around_pivot_works() {
        let rotated = Vector2::new(2.0, 1.0).rotated_around(PI, &Vector2::new(1.0, 1.0));
        assert_abs_diff_eq!(rotated, Vector2::new(0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn angle_between_equal_vector2s_is_exactly_zero() {
        let v = Vector2::new(0.3, -7.0);
        assert_eq!(v.angle_with(&v.clone()), 0.0);
    }

    #[test]
    fn angle_between_vector2s_is_signed() {
        let x = Vector2::unit_x();
        let y = Vector2::new(0.0, 5.0);
        assert_abs_diff_eq!(x.angle_with(&y), FRAC_PI_2, epsilon = EPSILON);
        assert_abs_diff_eq!(y.angle_with(&x), -FRAC_PI_2, epsilon = EPSILON);
        assert_abs_diff_eq!(x.angle_with(&-&x), PI, epsilon = EPSILON);
    }

    #[test]
    fn vector2_hash_is_not_commutative_over_components() {
        let a = Vector2::new(1.0, -1.0);
        let b = Vector2::new(-1.0, 1.0);
        assert_ne!(a.hash_value(), b.hash_value());
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn vector2s_equal_at_canonical_precision_hash_equally() {
        let a = Vector2::new(0.1 + 0.2, 1.0);
        let b = Vector2::new(0.3, 1.0);
        assert_ne!(a.x().to_bits(), b.x().to_bits());
        assert_eq!(a, b);
        assert_eq!(a.hash_value(), b.hash_value());
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn epsilon_equal_vector2s_collapse_in_hash_set() {
        let set: HashSet<_> = [Vector2::new(0.1 + 0.2, 2.0), Vector2::new(0.3, 2.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);

        let mut map = HashMap::new();
        map.insert(Vector2::new(1.0, -1.0), "a");
        map.insert(Vector2::new(-1.0, 1.0), "b");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Vector2::new(0.7 + 0.3, -1.0)), Some(&"a"));
    }

    #[test]
    fn vector2_equality_is_not_transitive_across_epsilon_chains() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(scalar::EPSILON, 0.0);
        let c = Vector2::new(2.0 * scalar::EPSILON, 0.0);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn vector2_hash_is_cached_after_first_access() {
        let v = Vector2::new(1.5, 2.5);
        assert!(!v.hash_cache.is_computed());
        let hash = v.hash_value();
        assert!(v.hash_cache.is_computed());
        assert_eq!(v.clone().hash_value(), hash);
    }

    #[test]
    fn creating_vector2_from_slice_works() {
        let v = Vector2::from_slice(&[1.0, 2.0]);
        assert_eq!(v.to_array(), [1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "Vector2 requires exactly 2 components, got 3")]
    fn creating_vector2_from_too_long_slice_panics() {
        Vector2::from_slice(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn trying_to_create_vector2_from_wrong_length_slice_fails() {
        assert!(Vector2::try_from([1.0].as_slice()).is_err());
        assert!(Vector2::try_from([1.0, 2.0].as_slice()).is_ok());
    }

    #[test]
    fn vector2_named_constants_are_correct() {
        assert_eq!(Vector2::zero().to_array(), [0.0, 0.0]);
        assert_eq!(Vector2::unit_x().to_array(), [1.0, 0.0]);
        assert_eq!(Vector2::unit_y().to_array(), [0.0, 1.0]);
        assert_eq!(Vector2::default(), Vector2::zero());
    }

    // === Vector3 Tests ===

    #[test]
    fn vector3_cross_product_of_axes_gives_third_axis() {
        assert_eq!(Vector3::unit_x().cross(&Vector3::unit_y()), Vector3::unit_z());
        assert_eq!(Vector3::unit_y().cross(&Vector3::unit_z()), Vector3::unit_x());
        assert_eq!(Vector3::unit_z().cross(&Vector3::unit_x()), Vector3::unit_y());
        assert_eq!(
            Vector3::unit_y().cross(&Vector3::unit_x()),
            -Vector3::unit_z()
        );
    }

    #[test]
    fn vector3_cross_product_is_orthogonal_to_operands() {
        let a = Vector3::new(1.0, -2.0, 3.5);
        let b = Vector3::new(-0.5, 4.0, 2.0);
        let c = a.cross(&b);
        assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn vector3_arithmetic_operations_work() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(2.0, 4.0, 6.0);

        assert_eq!(&a + &b, Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(&b - &a, a);
        assert_eq!(&a * &b, Vector3::new(2.0, 8.0, 18.0));
        assert_eq!(&b / &a, Vector3::new(2.0, 2.0, 2.0));
        assert_eq!(&a * 2.0, b);
        assert_eq!(2.0 * &a, b);
        assert_eq!(&b / 2.0, a);
        assert_eq!(a.inverse(), Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn slicing_vector3_works() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.xy(), Vector2::new(1.0, 2.0));
        assert_eq!(v.xz(), Vector2::new(1.0, 3.0));
        assert_eq!(v.yz(), Vector2::new(2.0, 3.0));
        assert_eq!(Vector3::from_vector2(&v.xy(), 3.0), v);
    }

    #[test]
    fn normalizing_vector3_works() {
        let normalized = Vector3::new(0.0, 3.0, -4.0).normalized();
        assert_abs_diff_eq!(normalized, Vector3::new(0.0, 0.6, -0.8), epsilon = EPSILON);
        assert_eq!(Vector3::zero().normalized().to_array(), [0.0; 3]);
    }

    #[test]
    #[should_panic(expected = "Vector3 requires exactly 3 components, got 2")]
    fn creating_vector3_from_too_short_slice_panics() {
        Vector3::from_slice(&[1.0, 2.0]);
    }

    // === Vector4 Tests ===

    #[test]
    fn slicing_vector4_works() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xy(), Vector2::new(1.0, 2.0));
        assert_eq!(v.xz(), Vector2::new(1.0, 3.0));
        assert_eq!(v.yz(), Vector2::new(2.0, 3.0));
        assert_eq!(v.xw(), Vector2::new(1.0, 4.0));
        assert_eq!(v.yw(), Vector2::new(2.0, 4.0));
        assert_eq!(v.zw(), Vector2::new(3.0, 4.0));
        assert_eq!(v.xyz(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v.xyw(), Vector3::new(1.0, 2.0, 4.0));
        assert_eq!(v.xzw(), Vector3::new(1.0, 3.0, 4.0));
        assert_eq!(v.yzw(), Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(Vector4::from_vector3(&v.xyz(), 4.0), v);
    }

    #[test]
    fn vectors_with_non_finite_components_equal_themselves() {
        let infinite = Vector2::new(f64::INFINITY, 0.0);
        assert_eq!(infinite, infinite.clone());
        assert_ne!(infinite, Vector2::new(f64::NEG_INFINITY, 0.0));

        let undefined = Vector3::new(f64::NAN, 1.0, f64::NEG_INFINITY);
        assert_eq!(undefined, undefined.clone());
        assert_ne!(undefined, Vector3::new(0.0, 1.0, f64::NEG_INFINITY));
    }

    #[test]
    fn vector_with_infinite_component_is_found_in_hash_set() {
        let v = Vector2::new(f64::INFINITY, 0.0);
        let mut set = HashSet::new();
        set.insert(v.clone());
        assert!(set.contains(&v));
        assert!(set.contains(&Vector2::new(f64::INFINITY, -0.0)));
    }

    #[test]
    fn dehomogenizing_vector4_divides_by_w() {
        let v = Vector4::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(v.dehomogenized(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from(v), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn dehomogenizing_vector4_with_zero_w_keeps_components() {
        let v = Vector4::new(2.0, 4.0, 6.0, 0.0);
        assert_eq!(v.dehomogenized(), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn vector4_arithmetic_operations_work() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(4.0, 3.0, 2.0, 1.0);

        assert_eq!(&a + &b, Vector4::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(&a - &b, Vector4::new(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(&a * &b, Vector4::new(4.0, 6.0, 6.0, 4.0));
        assert_eq!(&a * 0.5, Vector4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(&a / 2.0, Vector4::new(0.5, 1.0, 1.5, 2.0));
        assert_abs_diff_eq!(a.dot(&b), 20.0, epsilon = EPSILON);
        assert_eq!(-&a, a.inverse());
    }

    #[test]
    fn vector4_named_constants_are_correct() {
        assert_eq!(Vector4::unit_x().to_array(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(Vector4::unit_y().to_array(), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(Vector4::unit_z().to_array(), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(Vector4::unit_w().to_array(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn vector_debug_output_omits_hash_cache() {
        let debug = format!("{:?}", Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(debug, "Vector3 { x: 1.0, y: 2.0, z: 3.0 }");
        assert_eq!(Vector4::new(1.0, 2.0, 3.0, 4.0).to_string(), "(1, 2, 3, 4)");
    }

    proptest! {
        #[test]
        fn vector2_equality_is_reflexive_and_symmetric(a in vector2_strategy(), b in vector2_strategy()) {
            prop_assert!(a == a.clone());
            prop_assert_eq!(a == b, b == a);
        }

        #[test]
        fn vector3_equality_is_reflexive_and_symmetric(a in vector3_strategy(), b in vector3_strategy()) {
            prop_assert!(a == a.clone());
            prop_assert_eq!(a == b, b == a);
        }

        #[test]
        fn vector4_equality_is_reflexive_and_symmetric(a in vector4_strategy(), b in vector4_strategy()) {
            prop_assert!(a == a.clone());
            prop_assert_eq!(a == b, b == a);
        }

        #[test]
        fn normalized_vector2_has_unit_length(v in vector2_strategy()) {
            let normalized = v.normalized();
            if scalar::approx_eq(v.length(), 0.0) {
                prop_assert_eq!(normalized.to_array(), v.to_array());
            } else {
                prop_assert!(abs_diff_eq!(normalized.length(), 1.0, epsilon = EPSILON));
            }
        }

        #[test]
        fn normalized_vector3_has_unit_length(v in vector3_strategy()) {
            prop_assume!(!scalar::approx_eq(v.length(), 0.0));
            prop_assert!(abs_diff_eq!(v.normalized().length(), 1.0, epsilon = EPSILON));
        }

        #[test]
        fn normalized_vector4_has_unit_length(v in vector4_strategy()) {
            prop_assume!(!scalar::approx_eq(v.length(), 0.0));
            prop_assert!(abs_diff_eq!(v.normalized().length(), 1.0, epsilon = EPSILON));
        }

        #[test]
        fn vector_array_round_trip_preserves_components(
            a in vector2_strategy(),
            b in vector3_strategy(),
            c in vector4_strategy(),
        ) {
            prop_assert_eq!(Vector2::from_slice(&a.to_array()).to_array(), a.to_array());
            prop_assert_eq!(Vector3::from_slice(&b.to_array()).to_array(), b.to_array());
            prop_assert_eq!(Vector4::from_slice(&c.to_array()).to_array(), c.to_array());
        }

        #[test]
        fn equal_vector2s_hash_equally(v in vector2_strategy()) {
            let copy = Vector2::from(v.to_array());
            prop_assert_eq!(v.hash_value(), copy.hash_value());
            prop_assert_eq!(hash_of(&v), hash_of(&copy));
        }

        #[test]
        fn equal_vector3s_hash_equally(v in vector3_strategy()) {
            let copy = Vector3::from(v.to_array());
            prop_assert_eq!(v.hash_value(), copy.hash_value());
        }

        #[test]
        fn equal_vector4s_hash_equally(v in vector4_strategy()) {
            let copy = Vector4::from(v.to_array());
            prop_assert_eq!(v.hash_value(), copy.hash_value());
            prop_assert_eq!(hash_of(&v), hash_of(&copy));
        }
    }
}
