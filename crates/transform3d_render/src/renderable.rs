//! Renderable geometry - bridges core geometry to GPU vertex buffers

use transform3d_core::Geometry;
use crate::pipeline::ColoredVertex;

/// GPU-ready vertices for one shape
#[derive(Clone, Debug, Default)]
pub struct RenderableGeometry {
    pub vertices: Vec<ColoredVertex>,
}

impl RenderableGeometry {
    pub fn from_geometry(geometry: &Geometry) -> Self {
        Self {
            vertices: geometry.vertices.iter().copied().map(ColoredVertex::from).collect(),
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl From<&Geometry> for RenderableGeometry {
    fn from(geometry: &Geometry) -> Self {
        Self::from_geometry(geometry)
    }
}
