//! GPU-compatible data types for the letter pipeline
//!
//! These types match the layouts in `letter.wgsl`.

use bytemuck::{Pod, Zeroable};
use transform3d_core::GeometryVertex;

/// A vertex with position and color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    /// Position in model space
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl ColoredVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

impl From<GeometryVertex> for ColoredVertex {
    fn from(v: GeometryVertex) -> Self {
        Self::new(v.position, v.color)
    }
}

/// Size of one instance matrix in the storage buffer
pub const MATRIX_SIZE: u64 = std::mem::size_of::<[f32; 16]>() as u64;
