//! 3D Transform Mathematics
//!
//! This crate provides the matrix and vector helpers used to map
//! object-local coordinates into clip space.
//!
//! ## Conventions
//!
//! - Matrices are stored column-major: element `m[col * 4 + row]`.
//!   Translation lives in elements 12, 13 and 14.
//! - `multiply(a, b)` computes `A * B`, which applies `b` first, then `a`.
//! - Vectors are column vectors: `vector_multiply(v, m)` computes `M * v`.
//! - Rotations are right-handed; projections follow the GL depth range
//!   (near plane at NDC z = -1).
//!
//! ## Core Types
//!
//! - [`Mat4`] - 4x4 matrix for 3D transforms
//! - [`Mat3`] - 3x3 matrix for 2D transforms
//! - [`Vec4`] - Homogeneous vector with x, y, z, w components
//! - [`MathError`] - Domain errors for degenerate inputs

mod angle;
mod error;
mod vec4;
pub mod mat3;
pub mod mat4;
pub mod vec3;

pub use angle::{deg_to_rad, rad_to_deg, unit_circle};
pub use error::MathError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use vec4::Vec4;
