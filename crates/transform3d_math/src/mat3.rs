//! 3x3 matrices for 2D homogeneous transforms
//!
//! Same conventions as [`crate::mat4`]: column-major storage and
//! `multiply(a, b)` applying `b` first.

use crate::MathError;

/// 3x3 matrix type (column-major, `m[col * 3 + row]`)
pub type Mat3 = [f32; 9];

pub const IDENTITY: Mat3 = [
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,
];

#[inline]
pub fn identity() -> Mat3 {
    IDENTITY
}

/// Maps pixel coordinates to clip space, with (0, 0) at the top-left
pub fn projection(width: f32, height: f32) -> Result<Mat3, MathError> {
    if !(width.is_finite() && height.is_finite()) {
        return Err(MathError::NonFinite("projection size"));
    }
    if width == 0.0 || height == 0.0 {
        return Err(MathError::DegenerateProjection(format!(
            "zero resolution {}x{}",
            width, height
        )));
    }
    Ok([
        2.0 / width, 0.0, 0.0,
        0.0, -2.0 / height, 0.0,
        -1.0, 1.0, 1.0,
    ])
}

pub fn translation(tx: f32, ty: f32) -> Mat3 {
    [
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        tx, ty, 1.0,
    ]
}

/// Rotation turning +X toward -Y
pub fn rotation(angle_radians: f32) -> Mat3 {
    from_unit_circle([angle_radians.sin(), angle_radians.cos()])
}

/// Rotation from a `[sin, cos]` pair, such as [`crate::unit_circle`] returns
pub fn from_unit_circle(rotation: [f32; 2]) -> Mat3 {
    let [s, c] = rotation;
    [
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    ]
}

pub fn scaling(sx: f32, sy: f32) -> Mat3 {
    [
        sx, 0.0, 0.0,
        0.0, sy, 0.0,
        0.0, 0.0, 1.0,
    ]
}

/// result = a * b
pub fn multiply(a: Mat3, b: Mat3) -> Mat3 {
    let mut result = [0.0f32; 9];
    for col in 0..3 {
        for row in 0..3 {
            result[col * 3 + row] = (0..3).map(|k| a[k * 3 + row] * b[col * 3 + k]).sum();
        }
    }
    result
}

pub fn translate(m: Mat3, tx: f32, ty: f32) -> Mat3 {
    multiply(m, translation(tx, ty))
}

pub fn rotate(m: Mat3, angle_radians: f32) -> Mat3 {
    multiply(m, rotation(angle_radians))
}

pub fn scale(m: Mat3, sx: f32, sy: f32) -> Mat3 {
    multiply(m, scaling(sx, sy))
}

/// Transform a 2D point (w = 1)
pub fn transform_point(m: Mat3, p: [f32; 2]) -> [f32; 2] {
    [
        m[0] * p[0] + m[3] * p[1] + m[6],
        m[1] * p[0] + m[4] * p[1] + m[7],
    ]
}

/// Embed a 2D transform in a 4x4 matrix (z passes through unchanged)
pub fn to_mat4(m: Mat3) -> crate::Mat4 {
    [
        m[0], m[1], 0.0, m[2],
        m[3], m[4], 0.0, m[5],
        0.0, 0.0, 1.0, 0.0,
        m[6], m[7], 0.0, m[8],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mat4, Vec4};

    #[test]
    fn test_projection_corners() {
        let p = projection(640.0, 480.0).unwrap();
        assert_eq!(transform_point(p, [0.0, 0.0]), [-1.0, 1.0]);
        let corner = transform_point(p, [640.0, 480.0]);
        assert!((corner[0] - 1.0).abs() < 1e-6);
        assert!((corner[1] + 1.0).abs() < 1e-6);
        assert!(projection(640.0, 0.0).is_err());
    }

    #[test]
    fn test_translate_rotate_scale_order() {
        // scale(2) -> rotate 90 deg -> translate (100, 50)
        let m = translate(identity(), 100.0, 50.0);
        let m = rotate(m, std::f32::consts::FRAC_PI_2);
        let m = scale(m, 2.0, 2.0);
        let p = transform_point(m, [1.0, 0.0]);
        // (1,0) -> (2,0) -> (0,-2) -> (100,48)
        assert!((p[0] - 100.0).abs() < 1e-4, "got {:?}", p);
        assert!((p[1] - 48.0).abs() < 1e-4, "got {:?}", p);
    }

    #[test]
    fn test_rotation_matches_unit_circle_vector() {
        // rotated = (x * cos + y * sin, y * cos - x * sin)
        let angle = 0.6f32;
        let (s, c) = angle.sin_cos();
        let p = transform_point(rotation(angle), [3.0, 4.0]);
        assert!((p[0] - (3.0 * c + 4.0 * s)).abs() < 1e-5);
        assert!((p[1] - (4.0 * c - 3.0 * s)).abs() < 1e-5);
    }

    #[test]
    fn test_to_mat4_agrees() {
        let m = scale(rotate(translation(5.0, 6.0), 0.3), 2.0, 3.0);
        let p2 = transform_point(m, [1.5, -2.0]);
        let p4 = mat4::vector_multiply(Vec4::point(1.5, -2.0, 7.0), to_mat4(m));
        assert!((p4.x - p2[0]).abs() < 1e-5);
        assert!((p4.y - p2[1]).abs() < 1e-5);
        assert_eq!(p4.z, 7.0);
        assert_eq!(p4.w, 1.0);
    }
}
