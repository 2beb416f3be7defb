//! Matrices.
//!
//! Matrices act on row vectors from the right, `v' = v * M`, and are stored
//! row by row. A product `a * b` therefore applies `a` first and then `b`,
//! and translations live in the last row. Multiplying a matrix by a vector
//! gives the same result as multiplying the vector by the matrix.

use crate::{
    hash::LazyHashCache,
    quaternion::Quaternion,
    scalar,
    vector::{Vector2, Vector3, Vector4},
};
use std::fmt;

/// A 3x3 matrix, typically an affine transform of 2D vectors.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 9]", from = "[f64; 9]")
)]
#[derive(Clone)]
pub struct Matrix3 {
    entries: [f64; 9],
    hash_cache: LazyHashCache<Self>,
}

/// A 4x4 matrix, typically an affine or projective transform of 3D vectors.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 16]", from = "[f64; 16]")
)]
#[derive(Clone)]
pub struct Matrix4 {
    entries: [f64; 16],
    hash_cache: LazyHashCache<Self>,
}

impl Matrix3 {
    /// Creates a new matrix with the given entries, where `mij` is the entry
    /// in row `i` and column `j`.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m11: f64, m12: f64, m13: f64,
        m21: f64, m22: f64, m23: f64,
        m31: f64, m32: f64, m33: f64,
    ) -> Self {
        Self::from_entries([
            m11, m12, m13,
            m21, m22, m23,
            m31, m32, m33,
        ])
    }

    /// Creates an identity matrix.
    #[inline]
    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Creates a matrix scaling 2D vectors by the given factors.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_scale(scale: &Vector2) -> Self {
        Self::new(
            scale.x(), 0.0,       0.0,
            0.0,       scale.y(), 0.0,
            0.0,       0.0,       1.0,
        )
    }

    /// Creates a matrix translating 2D vectors by the given offset.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_translation(translation: &Vector2) -> Self {
        Self::new(
            1.0,             0.0,             0.0,
            0.0,             1.0,             0.0,
            translation.x(), translation.y(), 1.0,
        )
    }

    /// Creates a matrix rotating 2D vectors counterclockwise by the given
    /// angle in radians.
    #[rustfmt::skip]
    pub fn from_rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            cos,  sin, 0.0,
            -sin, cos, 0.0,
            0.0,  0.0, 1.0,
        )
    }

    /// Returns the entry in the given row and column (zero-based).
    ///
    /// # Panics
    /// If the row or column is larger than 2.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f64 {
        assert!(row < 3 && column < 3, "invalid Matrix3 index ({row}, {column})");
        self.entries[row * 3 + column]
    }

    /// Returns the entries row by row.
    #[inline]
    pub const fn to_array(&self) -> [f64; 9] {
        self.entries
    }

    /// Computes the transpose of the matrix.
    pub fn transpose(&self) -> Self {
        let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = self.entries;
        Self::new(m11, m21, m31, m12, m22, m32, m13, m23, m33)
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> f64 {
        let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = self.entries;
        (m11 * m22 * m33 + m12 * m23 * m31 + m13 * m21 * m32)
            - (m13 * m22 * m31 + m11 * m23 * m32 + m12 * m21 * m33)
    }

    /// Computes the adjugate (transposed cofactor matrix) of the matrix.
    pub fn adjugate(&self) -> Self {
        let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = self.entries;
        Self::new(
            m22 * m33 - m23 * m32,
            m13 * m32 - m12 * m33,
            m12 * m23 - m13 * m22,
            m23 * m31 - m21 * m33,
            m11 * m33 - m13 * m31,
            m13 * m21 - m11 * m23,
            m21 * m32 - m22 * m31,
            m12 * m31 - m11 * m32,
            m11 * m22 - m12 * m21,
        )
    }

    /// Computes the inverse of the matrix as its adjugate divided by its
    /// determinant.
    ///
    /// The determinant is not checked. A singular matrix gives infinite or
    /// NaN entries, so callers that need a finite result must check
    /// [`Self::determinant`] first.
    pub fn inverse(&self) -> Self {
        let determinant = self.determinant();
        if scalar::approx_eq(determinant, 0.0) {
            log::debug!("Inverting near-singular Matrix3 (determinant {determinant})");
        }
        self.adjugate() * determinant.recip()
    }

    /// Linearly interpolates each entry from this matrix towards `other`.
    ///
    /// This does not preserve orthogonality, so rotations should be
    /// interpolated as quaternions instead.
    pub fn interpolated(&self, other: &Self, t: f64) -> Self {
        Self::from_entries(lerp_entries(&self.entries, &other.entries, t))
    }

    #[inline]
    const fn from_entries(entries: [f64; 9]) -> Self {
        Self {
            entries,
            hash_cache: LazyHashCache::new(Self::compute_hash),
        }
    }
}

impl From<[f64; 9]> for Matrix3 {
    #[inline]
    fn from(entries: [f64; 9]) -> Self {
        Self::from_entries(entries)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl_scalar_components!(Matrix3, 9);

impl_binop!(Add, add, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::from_entries(std::array::from_fn(|index| a.entries[index] + b.entries[index]))
});

impl_binop!(Sub, sub, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::from_entries(std::array::from_fn(|index| a.entries[index] - b.entries[index]))
});

impl_binop!(Mul, mul, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::from_entries(multiply_entries::<3, 9>(&a.entries, &b.entries))
});

impl_binop!(Mul, mul, Matrix3, f64, Matrix3, |a, b| {
    Matrix3::from_entries(a.entries.map(|entry| entry * b))
});

impl_binop!(Mul, mul, f64, Matrix3, Matrix3, |a, b| { b * a });

impl_binop!(Div, div, Matrix3, f64, Matrix3, |a, b| {
    Matrix3::from_entries(a.entries.map(|entry| entry / b))
});

impl_unary_op!(Neg, neg, Matrix3, Matrix3, |val| { val.inverse() });

impl_binop!(Mul, mul, Vector2, Matrix3, Vector2, |v, m| {
    let [m11, m12, _, m21, m22, _, m31, m32, _] = m.entries;
    Vector2::new(
        v.x() * m11 + v.y() * m21 + m31,
        v.x() * m12 + v.y() * m22 + m32,
    )
});

impl_binop!(Mul, mul, Matrix3, Vector2, Vector2, |m, v| { v * m });

impl_binop!(Mul, mul, Vector3, Matrix3, Vector3, |v, m| {
    let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = m.entries;
    Vector3::new(
        v.x() * m11 + v.y() * m21 + v.z() * m31,
        v.x() * m12 + v.y() * m22 + v.z() * m32,
        v.x() * m13 + v.y() * m23 + v.z() * m33,
    )
});

impl_binop!(Mul, mul, Matrix3, Vector3, Vector3, |m, v| { v * m });

impl fmt::Debug for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix3")
            .field("rows", &rows::<3, 9>(&self.entries))
            .finish()
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", rows::<3, 9>(&self.entries))
    }
}

impl Matrix4 {
    /// Creates a new matrix with the given entries, where `mij` is the entry
    /// in row `i` and column `j`.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m11: f64, m12: f64, m13: f64, m14: f64,
        m21: f64, m22: f64, m23: f64, m24: f64,
        m31: f64, m32: f64, m33: f64, m34: f64,
        m41: f64, m42: f64, m43: f64, m44: f64,
    ) -> Self {
        Self::from_entries([
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        ])
    }

    /// Creates an identity matrix.
    #[inline]
    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a matrix scaling 3D vectors by the given factors.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_scale(scale: &Vector3) -> Self {
        Self::new(
            scale.x(), 0.0,       0.0,       0.0,
            0.0,       scale.y(), 0.0,       0.0,
            0.0,       0.0,       scale.z(), 0.0,
            0.0,       0.0,       0.0,       1.0,
        )
    }

    /// Creates a matrix translating 3D vectors by the given offset.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_translation(translation: &Vector3) -> Self {
        Self::new(
            1.0,             0.0,             0.0,             0.0,
            0.0,             1.0,             0.0,             0.0,
            0.0,             0.0,             1.0,             0.0,
            translation.x(), translation.y(), translation.z(), 1.0,
        )
    }

    /// Creates the rotation matrix corresponding to the given quaternion,
    /// which is assumed to have unit length.
    #[rustfmt::skip]
    pub fn from_quaternion(quaternion: &Quaternion) -> Self {
        let [x, y, z, w] = quaternion.to_array();
        Self::new(
            1.0 - 2.0 * (y * y + z * z), 2.0 * (x * y + z * w),       2.0 * (x * z - y * w),       0.0,
            2.0 * (x * y - z * w),       1.0 - 2.0 * (x * x + z * z), 2.0 * (y * z + x * w),       0.0,
            2.0 * (x * z + y * w),       2.0 * (y * z - x * w),       1.0 - 2.0 * (x * x + y * y), 0.0,
            0.0,                         0.0,                         0.0,                         1.0,
        )
    }

    /// Creates a rotation matrix from an axis-angle vector, where the
    /// x-, y- and z-components hold the rotation axis and w the angle in
    /// radians.
    pub fn from_axis_angle(axis_angle: &Vector4) -> Self {
        Self::from_quaternion(&Quaternion::from_axis_angle(axis_angle))
    }

    /// Creates a perspective projection matrix from the vertical field of
    /// view in radians, the width-to-height aspect ratio and the distances
    /// to the near and far clipping planes.
    ///
    /// # Panics
    /// If `far` is not larger than `near`, or if `fovy` or `aspect` is not
    /// positive.
    #[rustfmt::skip]
    pub fn perspective(fovy: f64, aspect: f64, near: f64, far: f64) -> Self {
        let dz = far - near;
        assert!(dz > 0.0, "far value must be greater than near value");
        assert!(fovy > 0.0, "field of view must be positive");
        assert!(aspect > 0.0, "aspect ratio must be positive");

        let y_scale = 1.0 / (fovy * 0.5).tan();
        let x_scale = y_scale / aspect;

        Self::new(
            x_scale, 0.0,     0.0,                     0.0,
            0.0,     y_scale, 0.0,                     0.0,
            0.0,     0.0,     -(far + near) / dz,      -1.0,
            0.0,     0.0,     -2.0 * far * near / dz,  0.0,
        )
    }

    /// Creates a perspective projection matrix from the horizontal and
    /// vertical fields of view in radians.
    ///
    /// # Panics
    /// See [`Self::perspective`].
    pub fn perspective_fovx_fovy(fovx: f64, fovy: f64, near: f64, far: f64) -> Self {
        Self::perspective(fovy, fovx / fovy, near, far)
    }

    /// Creates a perspective projection matrix from the horizontal field of
    /// view in radians and the width-to-height aspect ratio.
    ///
    /// # Panics
    /// See [`Self::perspective`].
    pub fn perspective_fovx_aspect(fovx: f64, aspect: f64, near: f64, far: f64) -> Self {
        Self::perspective(fovx / aspect, aspect, near, far)
    }

    /// Creates an orthographic projection matrix mapping the box bounded by
    /// the given clipping planes to the unit cube.
    #[rustfmt::skip]
    pub fn orthographic(top: f64, right: f64, bottom: f64, left: f64, near: f64, far: f64) -> Self {
        let dx = right - left;
        let dy = top - bottom;
        let dz = far - near;
        Self::new(
            2.0 / dx,              0.0,                   0.0,                 0.0,
            0.0,                   2.0 / dy,              0.0,                 0.0,
            0.0,                   0.0,                   -2.0 / dz,           0.0,
            -(right + left) / dx,  -(top + bottom) / dy,  -(far + near) / dz,  1.0,
        )
    }

    /// Returns the entry in the given row and column (zero-based).
    ///
    /// # Panics
    /// If the row or column is larger than 3.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f64 {
        assert!(row < 4 && column < 4, "invalid Matrix4 index ({row}, {column})");
        self.entries[row * 4 + column]
    }

    /// Returns the entries row by row.
    #[inline]
    pub const fn to_array(&self) -> [f64; 16] {
        self.entries
    }

    /// Computes the transpose of the matrix.
    pub fn transpose(&self) -> Self {
        Self::from_entries(std::array::from_fn(|index| {
            self.entries[(index % 4) * 4 + index / 4]
        }))
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> f64 {
        self.determinant_from_adjugate(&self.adjugate())
    }

    /// Computes the adjugate (transposed cofactor matrix) of the matrix.
    ///
    /// Each entry is the signed determinant of the complementary 3x3 minor,
    /// expanded along its first column.
    pub fn adjugate(&self) -> Self {
        let [
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        ] = self.entries;

        Self::from_entries([
            m22 * (m33 * m44 - m34 * m43)
                - m32 * (m23 * m44 - m24 * m43)
                + m42 * (m23 * m34 - m24 * m33),
            -m12 * (m33 * m44 - m34 * m43)
                + m32 * (m13 * m44 - m14 * m43)
                - m42 * (m13 * m34 - m14 * m33),
            m12 * (m23 * m44 - m24 * m43)
                - m22 * (m13 * m44 - m14 * m43)
                + m42 * (m13 * m24 - m14 * m23),
            -m12 * (m23 * m34 - m24 * m33)
                + m22 * (m13 * m34 - m14 * m33)
                - m32 * (m13 * m24 - m14 * m23),
            //
            -m21 * (m33 * m44 - m34 * m43)
                + m31 * (m23 * m44 - m24 * m43)
                - m41 * (m23 * m34 - m24 * m33),
            m11 * (m33 * m44 - m34 * m43)
                - m31 * (m13 * m44 - m14 * m43)
                + m41 * (m13 * m34 - m14 * m33),
            -m11 * (m23 * m44 - m24 * m43)
                + m21 * (m13 * m44 - m14 * m43)
                - m41 * (m13 * m24 - m14 * m23),
            m11 * (m23 * m34 - m24 * m33)
                - m21 * (m13 * m34 - m14 * m33)
                + m31 * (m13 * m24 - m14 * m23),
            //
            m21 * (m32 * m44 - m34 * m42)
                - m31 * (m22 * m44 - m24 * m42)
                + m41 * (m22 * m34 - m24 * m32),
            -m11 * (m32 * m44 - m34 * m42)
                + m31 * (m12 * m44 - m14 * m42)
                - m41 * (m12 * m34 - m14 * m32),
            m11 * (m22 * m44 - m24 * m42)
                - m21 * (m12 * m44 - m14 * m42)
                + m41 * (m12 * m24 - m14 * m22),
            -m11 * (m22 * m34 - m24 * m32)
                + m21 * (m12 * m34 - m14 * m32)
                - m31 * (m12 * m24 - m14 * m22),
            //
            -m21 * (m32 * m43 - m33 * m42)
                + m31 * (m22 * m43 - m23 * m42)
                - m41 * (m22 * m33 - m23 * m32),
            m11 * (m32 * m43 - m33 * m42)
                - m31 * (m12 * m43 - m13 * m42)
                + m41 * (m12 * m33 - m13 * m32),
            -m11 * (m22 * m43 - m23 * m42)
                + m21 * (m12 * m43 - m13 * m42)
                - m41 * (m12 * m23 - m13 * m22),
            m11 * (m22 * m33 - m23 * m32)
                - m21 * (m12 * m33 - m13 * m32)
                + m31 * (m12 * m23 - m13 * m22),
        ])
    }

    /// Computes the inverse of the matrix as its adjugate divided by its
    /// determinant. The adjugate is computed once and reused for the
    /// determinant.
    ///
    /// The determinant is not checked. A singular matrix gives infinite or
    /// NaN entries, so callers that need a finite result must check
    /// [`Self::determinant`] first.
    pub fn inverse(&self) -> Self {
        let adjugate = self.adjugate();
        let determinant = self.determinant_from_adjugate(&adjugate);
        if scalar::approx_eq(determinant, 0.0) {
            log::debug!("Inverting near-singular Matrix4 (determinant {determinant})");
        }
        adjugate * determinant.recip()
    }

    /// Linearly interpolates each entry from this matrix towards `other`.
    ///
    /// This does not preserve orthogonality, so rotations should be
    /// interpolated as quaternions instead.
    pub fn interpolated(&self, other: &Self, t: f64) -> Self {
        Self::from_entries(lerp_entries(&self.entries, &other.entries, t))
    }

    /// Dot product of the first row of this matrix with the first column of
    /// its adjugate.
    fn determinant_from_adjugate(&self, adjugate: &Self) -> f64 {
        (0..4)
            .map(|k| self.entries[k] * adjugate.entries[k * 4])
            .sum()
    }

    #[inline]
    const fn from_entries(entries: [f64; 16]) -> Self {
        Self {
            entries,
            hash_cache: LazyHashCache::new(Self::compute_hash),
        }
    }
}

impl From<[f64; 16]> for Matrix4 {
    #[inline]
    fn from(entries: [f64; 16]) -> Self {
        Self::from_entries(entries)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl_scalar_components!(Matrix4, 16);

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_entries(std::array::from_fn(|index| a.entries[index] + b.entries[index]))
});

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_entries(std::array::from_fn(|index| a.entries[index] - b.entries[index]))
});

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_entries(multiply_entries::<4, 16>(&a.entries, &b.entries))
});

impl_binop!(Mul, mul, Matrix4, f64, Matrix4, |a, b| {
    Matrix4::from_entries(a.entries.map(|entry| entry * b))
});

impl_binop!(Mul, mul, f64, Matrix4, Matrix4, |a, b| { b * a });

impl_binop!(Div, div, Matrix4, f64, Matrix4, |a, b| {
    Matrix4::from_entries(a.entries.map(|entry| entry / b))
});

impl_unary_op!(Neg, neg, Matrix4, Matrix4, |val| { val.inverse() });

impl_binop!(Mul, mul, Vector4, Matrix4, Vector4, |v, m| {
    let [x, y, z, w] = v.to_array();
    let [
        m11, m12, m13, m14,
        m21, m22, m23, m24,
        m31, m32, m33, m34,
        m41, m42, m43, m44,
    ] = m.entries;
    Vector4::new(
        x * m11 + y * m21 + z * m31 + w * m41,
        x * m12 + y * m22 + z * m32 + w * m42,
        x * m13 + y * m23 + z * m33 + w * m43,
        x * m14 + y * m24 + z * m34 + w * m44,
    )
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |m, v| { v * m });

// Treated as a point with w = 1, followed by the homogeneous divide
impl_binop!(Mul, mul, Vector3, Matrix4, Vector3, |v, m| {
    (Vector4::from_vector3(v, 1.0) * m).dehomogenized()
});

impl_binop!(Mul, mul, Matrix4, Vector3, Vector3, |m, v| { v * m });

impl fmt::Debug for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix4")
            .field("rows", &rows::<4, 16>(&self.entries))
            .finish()
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", rows::<4, 16>(&self.entries))
    }
}

/// Row-major product of two `N`x`N` matrices with `M = N * N` entries.
fn multiply_entries<const N: usize, const M: usize>(a: &[f64; M], b: &[f64; M]) -> [f64; M] {
    std::array::from_fn(|index| {
        let (row, column) = (index / N, index % N);
        (0..N).map(|k| a[row * N + k] * b[k * N + column]).sum()
    })
}

fn lerp_entries<const M: usize>(a: &[f64; M], b: &[f64; M], t: f64) -> [f64; M] {
    std::array::from_fn(|index| a[index] + (b[index] - a[index]) * t)
}

fn rows<const N: usize, const M: usize>(entries: &[f64; M]) -> [[f64; N]; N] {
    std::array::from_fn(|row| std::array::from_fn(|column| entries[row * N + column]))
}
