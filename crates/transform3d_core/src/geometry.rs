//! Tutorial geometry: the letter F and a rectangle
//!
//! All shapes are flat triangle lists (no index buffer), in model units
//! with +Y pointing down to match the pixel-space projections.

use std::f32::consts::PI;
use transform3d_math::{mat4, Mat4, Vec4};

/// A vertex with position and RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl GeometryVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Triangle list geometry
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<GeometryVertex>,
}

/// Outline of the flat F: left column, top rung, middle rung
const LETTER_F_2D: [[f32; 2]; 18] = [
    [0.0, 0.0], [30.0, 0.0], [0.0, 150.0],
    [0.0, 150.0], [30.0, 0.0], [30.0, 150.0],

    [30.0, 0.0], [100.0, 0.0], [30.0, 30.0],
    [30.0, 30.0], [100.0, 0.0], [100.0, 30.0],

    [30.0, 60.0], [67.0, 60.0], [30.0, 90.0],
    [30.0, 90.0], [67.0, 60.0], [67.0, 90.0],
];

/// Solid F, 16 faces of 6 vertices each
const LETTER_F_3D: [[f32; 3]; 96] = [
    // left column front
    [0.0, 0.0, 0.0], [30.0, 0.0, 0.0], [0.0, 150.0, 0.0],
    [0.0, 150.0, 0.0], [30.0, 0.0, 0.0], [30.0, 150.0, 0.0],
    // top rung front
    [30.0, 0.0, 0.0], [100.0, 0.0, 0.0], [30.0, 30.0, 0.0],
    [30.0, 30.0, 0.0], [100.0, 0.0, 0.0], [100.0, 30.0, 0.0],
    // middle rung front
    [30.0, 60.0, 0.0], [67.0, 60.0, 0.0], [30.0, 90.0, 0.0],
    [30.0, 90.0, 0.0], [67.0, 60.0, 0.0], [67.0, 90.0, 0.0],
    // left column back
    [0.0, 0.0, 30.0], [30.0, 0.0, 30.0], [0.0, 150.0, 30.0],
    [0.0, 150.0, 30.0], [30.0, 0.0, 30.0], [30.0, 150.0, 30.0],
    // top rung back
    [30.0, 0.0, 30.0], [100.0, 0.0, 30.0], [30.0, 30.0, 30.0],
    [30.0, 30.0, 30.0], [100.0, 0.0, 30.0], [100.0, 30.0, 30.0],
    // middle rung back
    [30.0, 60.0, 30.0], [67.0, 60.0, 30.0], [30.0, 90.0, 30.0],
    [30.0, 90.0, 30.0], [67.0, 60.0, 30.0], [67.0, 90.0, 30.0],
    // top
    [0.0, 0.0, 0.0], [100.0, 0.0, 0.0], [100.0, 0.0, 30.0],
    [0.0, 0.0, 0.0], [100.0, 0.0, 30.0], [0.0, 0.0, 30.0],
    // top rung right
    [100.0, 0.0, 0.0], [100.0, 30.0, 0.0], [100.0, 30.0, 30.0],
    [100.0, 0.0, 0.0], [100.0, 30.0, 30.0], [100.0, 0.0, 30.0],
    // under top rung
    [30.0, 30.0, 0.0], [30.0, 30.0, 30.0], [100.0, 30.0, 30.0],
    [30.0, 30.0, 0.0], [100.0, 30.0, 30.0], [100.0, 30.0, 0.0],
    // between top rung and middle
    [30.0, 30.0, 0.0], [30.0, 60.0, 30.0], [30.0, 30.0, 30.0],
    [30.0, 30.0, 0.0], [30.0, 60.0, 0.0], [30.0, 60.0, 30.0],
    // top of middle rung
    [30.0, 60.0, 0.0], [67.0, 60.0, 30.0], [30.0, 60.0, 30.0],
    [30.0, 60.0, 0.0], [67.0, 60.0, 0.0], [67.0, 60.0, 30.0],
    // right of middle rung
    [67.0, 60.0, 0.0], [67.0, 90.0, 30.0], [67.0, 60.0, 30.0],
    [67.0, 60.0, 0.0], [67.0, 90.0, 0.0], [67.0, 90.0, 30.0],
    // bottom of middle rung
    [30.0, 90.0, 0.0], [30.0, 90.0, 30.0], [67.0, 90.0, 30.0],
    [30.0, 90.0, 0.0], [67.0, 90.0, 30.0], [67.0, 90.0, 0.0],
    // right of bottom
    [30.0, 90.0, 0.0], [30.0, 150.0, 30.0], [30.0, 90.0, 30.0],
    [30.0, 90.0, 0.0], [30.0, 150.0, 0.0], [30.0, 150.0, 30.0],
    // bottom
    [0.0, 150.0, 0.0], [0.0, 150.0, 30.0], [30.0, 150.0, 30.0],
    [0.0, 150.0, 0.0], [30.0, 150.0, 30.0], [30.0, 150.0, 0.0],
    // left side
    [0.0, 0.0, 0.0], [0.0, 0.0, 30.0], [0.0, 150.0, 30.0],
    [0.0, 0.0, 0.0], [0.0, 150.0, 30.0], [0.0, 150.0, 0.0],
];

/// One RGB color per face of the solid F
const LETTER_F_3D_FACE_COLORS: [[u8; 3]; 16] = [
    [200, 70, 120],
    [200, 70, 120],
    [200, 70, 120],
    [80, 70, 200],
    [80, 70, 200],
    [80, 70, 200],
    [70, 200, 210],
    [200, 200, 70],
    [210, 100, 70],
    [210, 160, 70],
    [70, 180, 210],
    [100, 70, 210],
    [76, 210, 100],
    [140, 210, 80],
    [90, 130, 110],
    [160, 160, 220],
];

const VERTICES_PER_FACE: usize = 6;

fn rgb(c: [u8; 3]) -> [f32; 4] {
    [
        c[0] as f32 / 255.0,
        c[1] as f32 / 255.0,
        c[2] as f32 / 255.0,
        1.0,
    ]
}

impl Geometry {
    /// Flat F in the z = 0 plane, 100 x 150 units
    pub fn letter_f_2d(color: [f32; 4]) -> Self {
        let vertices = LETTER_F_2D
            .iter()
            .map(|&[x, y]| GeometryVertex::new([x, y, 0.0], color))
            .collect();
        Self { vertices }
    }

    /// Axis-aligned rectangle with its top-left corner at (x, y)
    pub fn rectangle(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Self {
        let (x1, x2) = (x, x + width);
        let (y1, y2) = (y, y + height);
        let vertices = [
            [x1, y1], [x2, y1], [x1, y2],
            [x1, y2], [x2, y1], [x2, y2],
        ]
        .iter()
        .map(|&[px, py]| GeometryVertex::new([px, py, 0.0], color))
        .collect();
        Self { vertices }
    }

    /// Solid F, 100 x 150 x 30 units, each face in its own color
    pub fn letter_f_3d() -> Self {
        let vertices = LETTER_F_3D
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                GeometryVertex::new(position, rgb(LETTER_F_3D_FACE_COLORS[i / VERTICES_PER_FACE]))
            })
            .collect();
        Self { vertices }
    }

    /// Solid F flipped upright (+Y up) and centered on the origin
    pub fn centered_letter_f() -> Self {
        let matrix = mat4::x_rotation(PI);
        let matrix = mat4::translate(matrix, -50.0, -75.0, -15.0);
        Self::letter_f_3d().transformed(matrix)
    }

    /// Apply a matrix to every vertex position
    pub fn transformed(&self, matrix: Mat4) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|v| {
                let [x, y, z] = v.position;
                let p = mat4::vector_multiply(Vec4::point(x, y, z), matrix);
                GeometryVertex::new(p.xyz(), v.color)
            })
            .collect();
        Self { vertices }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(mut lo, mut hi), v| {
            for i in 0..3 {
                lo[i] = lo[i].min(v.position[i]);
                hi[i] = hi[i].max(v.position[i]);
            }
            (lo, hi)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_vertex_counts() {
        assert_eq!(Geometry::letter_f_2d([1.0; 4]).vertex_count(), 18);
        assert_eq!(Geometry::rectangle(0.0, 0.0, 10.0, 20.0, [1.0; 4]).vertex_count(), 6);
        assert_eq!(Geometry::letter_f_3d().vertex_count(), 96);
    }

    #[test]
    fn test_letter_f_3d_bounds() {
        let (lo, hi) = Geometry::letter_f_3d().bounds().unwrap();
        assert_eq!(lo, [0.0, 0.0, 0.0]);
        assert_eq!(hi, [100.0, 150.0, 30.0]);
    }

    #[test]
    fn test_face_colors() {
        let f = Geometry::letter_f_3d();
        // Front faces share a color, back faces another
        assert_eq!(f.vertices[0].color, f.vertices[17].color);
        assert_eq!(f.vertices[18].color, f.vertices[35].color);
        assert_ne!(f.vertices[0].color, f.vertices[18].color);
        assert_eq!(f.vertices[95].color, rgb([160, 160, 220]));
        assert!(f.vertices.iter().all(|v| v.color[3] == 1.0));
    }

    #[test]
    fn test_rectangle_corners() {
        let (lo, hi) = Geometry::rectangle(10.0, 20.0, 30.0, 40.0, [1.0; 4]).bounds().unwrap();
        assert_eq!(lo, [10.0, 20.0, 0.0]);
        assert_eq!(hi, [40.0, 60.0, 0.0]);
    }

    #[test]
    fn test_centered_letter_f() {
        let (lo, hi) = Geometry::centered_letter_f().bounds().unwrap();
        for i in 0..3 {
            assert!((lo[i] + hi[i]).abs() < EPSILON, "axis {} not centered: {:?} {:?}", i, lo, hi);
        }
        assert!((hi[1] - 75.0).abs() < EPSILON);

        // Top-left of the front face ends up at the top (+Y)
        let first = Geometry::centered_letter_f().vertices[0].position;
        assert!((first[0] + 50.0).abs() < EPSILON);
        assert!((first[1] - 75.0).abs() < EPSILON);
        assert!((first[2] - 15.0).abs() < EPSILON);
    }

    #[test]
    fn test_empty_bounds() {
        assert!(Geometry::default().bounds().is_none());
    }
}
