//! Clip-space depth correction
//!
//! The transform chain produces GL-style clip coordinates, where visible
//! depth spans `-w..w`. wgpu clips depth to `0..w`, so every matrix is
//! pre-multiplied by a remap of z before upload.

use transform3d_math::{mat4, Mat4};

/// Maps z from `[-w, w]` to `[0, w]`: z' = z / 2 + w / 2
pub const GL_TO_WGPU: Mat4 = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
];

/// Correct a GL clip-space matrix for wgpu
#[inline]
pub fn to_wgpu_clip(m: Mat4) -> Mat4 {
    mat4::multiply(GL_TO_WGPU, m)
}
