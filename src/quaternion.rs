//! Quaternions.

use crate::{
    hash::LazyHashCache,
    matrix::Matrix4,
    scalar,
    vector::{Vector3, Vector4},
};
use std::{f64::consts::TAU, fmt};

/// A quaternion `xi + yj + zk + w`.
///
/// Rotations are represented by unit quaternions. Negation (`-q`) gives the
/// inverse rotation, i.e. the conjugate; use [`Quaternion::negated`] to flip
/// the sign of all four components.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 4]", from = "[f64; 4]")
)]
#[derive(Clone)]
pub struct Quaternion {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
    hash_cache: LazyHashCache<Self>,
}

impl Quaternion {
    /// Creates a new quaternion with the given components.
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

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The quaternion representing no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates the quaternion rotating by the angle in the w-component (in
    /// radians) about the axis in the x-, y- and z-components. The axis is
    /// assumed to have unit length.
    pub fn from_axis_angle(axis_angle: &Vector4) -> Self {
        let (sin, cos) = (0.5 * axis_angle.w()).sin_cos();
        Self::new(
            axis_angle.x() * sin,
            axis_angle.y() * sin,
            axis_angle.z() * sin,
            cos,
        )
    }

    /// Creates the quaternion that first rotates by `pitch` about the
    /// x-axis, then by `yaw` about the y-axis and finally by `roll` about the
    /// z-axis. All angles are in radians.
    pub fn from_pitch_yaw_roll(pitch: f64, yaw: f64, roll: f64) -> Self {
        let (sp, cp) = (0.5 * pitch).sin_cos();
        let (sy, cy) = (0.5 * yaw).sin_cos();
        let (sr, cr) = (0.5 * roll).sin_cos();
        Self::new(
            sp * cy * cr - cp * sy * sr,
            cp * sy * cr + sp * cy * sr,
            cp * cy * sr - sp * sy * cr,
            cp * cy * cr + sp * sy * sr,
        )
    }

    /// Extracts the rotation of the given matrix, which must be a pure
    /// rotation in its upper-left 3x3 block.
    ///
    /// The magnitude of each component is recovered from the diagonal and
    /// the sign of x, y and z from the antisymmetric part of the matrix. The
    /// w-component is never negative, so the result may be the negation of
    /// the quaternion the matrix was built from. For rotations by angles
    /// close to π the signs become unreliable.
    pub fn from_rotation_matrix(matrix: &Matrix4) -> Self {
        let m = |row: usize, column: usize| matrix.element(row - 1, column - 1);
        let (m11, m22, m33) = (m(1, 1), m(2, 2), m(3, 3));

        let half_sqrt = |value: f64| 0.5 * value.max(0.0).sqrt();
        let w = half_sqrt(1.0 + m11 + m22 + m33);
        let x = half_sqrt(1.0 + m11 - m22 - m33);
        let y = half_sqrt(1.0 - m11 + m22 - m33);
        let z = half_sqrt(1.0 - m11 - m22 + m33);

        let signed = |component: f64, difference: f64| {
            if component * difference > 0.0 {
                component
            } else {
                -component
            }
        };

        Self::new(
            signed(x, m(2, 3) - m(3, 2)),
            signed(y, m(3, 1) - m(1, 3)),
            signed(z, m(1, 2) - m(2, 1)),
            w,
        )
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// Returns the vector part of the quaternion.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the components in the order `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Computes the normalized version of the quaternion. A quaternion whose
    /// length is already approximately zero or one is returned unchanged.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if scalar::approx_eq(length, 0.0) || scalar::approx_eq(length, 1.0) {
            return self.clone();
        }
        self / length
    }

    /// Returns the conjugate, which is the inverse rotation for a unit
    /// quaternion.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the quaternion with all four components negated. It represents
    /// the same rotation.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Converts the rotation to an axis-angle vector holding the unit axis in
    /// the x-, y- and z-components and the angle in radians in w.
    ///
    /// Without a well-defined axis, the zero rotation about the z-axis
    /// ([`Vector4::unit_z`]) is returned.
    pub fn to_axis_angle(&self) -> Vector4 {
        let axis = self.xyz();
        let scale = axis.length();
        if scalar::approx_eq(scale, 0.0) || scalar::approx_eq(scale, TAU) {
            return Vector4::unit_z();
        }
        let angle = 2.0 * self.w.clamp(-1.0, 1.0).acos();
        Vector4::from_vector3(&(axis / scale), angle)
    }

    /// The rotation angle in radians about the x-axis, as passed to
    /// [`Self::from_pitch_yaw_roll`].
    pub fn pitch(&self) -> f64 {
        let Self { x, y, z, w, .. } = *self;
        (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y))
    }

    /// The rotation angle in radians about the y-axis, as passed to
    /// [`Self::from_pitch_yaw_roll`].
    pub fn yaw(&self) -> f64 {
        let Self { x, y, z, w, .. } = *self;
        (2.0 * (w * y - x * z)).clamp(-1.0, 1.0).asin()
    }

    /// The rotation angle in radians about the z-axis, as passed to
    /// [`Self::from_pitch_yaw_roll`].
    pub fn roll(&self) -> f64 {
        let Self { x, y, z, w, .. } = *self;
        (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z))
    }

    /// Spherically interpolates from this unit quaternion towards `other`.
    ///
    /// The quaternions are used as given: when their dot product is negative
    /// the interpolation follows the longer arc. Negate one of them first to
    /// get the shortest rotation.
    pub fn interpolated(&self, other: &Self, t: f64) -> Self {
        let dot = self.dot(other).clamp(-1.0, 1.0);

        if scalar::approx_eq(dot, 1.0) {
            return (self + (other - self) * t).normalized();
        }

        let theta = dot.acos() * t;
        let (sin, cos) = theta.sin_cos();
        let perpendicular = (other - self * dot).normalized();
        self * cos + perpendicular * sin
    }

    fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        let axis = self.xyz();
        let uv = axis.cross(vector);
        let uuv = axis.cross(&uv);
        vector + &uv * (2.0 * self.w) + &uuv * 2.0
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl_scalar_components!(Quaternion, 4);

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

// Hamilton product: `a * b` rotates by `b` first and then by `a`
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z,
        a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
});

impl_binop!(Mul, mul, Quaternion, f64, Quaternion, |a, b| {
    Quaternion::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_binop!(Mul, mul, f64, Quaternion, Quaternion, |a, b| { b * a });

impl_binop!(Div, div, Quaternion, f64, Quaternion, |a, b| {
    Quaternion::new(a.x / b, a.y / b, a.z / b, a.w / b)
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| { val.inverse() });

impl_binop!(Mul, mul, Quaternion, Vector3, Vector3, |q, v| {
    q.rotate_vector(v)
});

impl_binop!(Mul, mul, Vector3, Quaternion, Vector3, |v, q| {
    q.rotate_vector(v)
});

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quaternion")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
