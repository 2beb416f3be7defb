//! Immutable vectors, matrices and quaternions for transform algebra.
//!
//! All value types compare with an absolute tolerance per component and hash
//! through a lazily computed, canonical-precision key, so they can be used
//! directly as hash map keys.

#[macro_use]
mod macros;

pub mod hash;
pub mod matrix;
pub mod quaternion;
pub mod scalar;
pub mod vector;

pub use matrix::{Matrix3, Matrix4};
pub use quaternion::Quaternion;
pub use vector::{Vector2, Vector3, Vector4};
