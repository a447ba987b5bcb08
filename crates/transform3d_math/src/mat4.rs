//! 4x4 matrix utilities for 3D transformations
//!
//! Every function here is pure: matrices are plain `[f32; 16]` values in
//! column-major order, so the result of any builder can be handed straight
//! to a GPU uniform or storage buffer.
//!
//! Composition follows the column-vector convention. `multiply(a, b)`
//! returns `A * B`, which transforms by `b` first and then by `a`. The
//! `translate`/`x_rotate`/... helpers post-multiply the local transform,
//! so a chain written as
//!
//! ```
//! use transform3d_math::mat4;
//! let m = mat4::identity();
//! let m = mat4::translate(m, 10.0, 20.0, 0.0);
//! let m = mat4::z_rotate(m, 0.5);
//! ```
//!
//! rotates the object about its own origin and then moves it.

use crate::{vec3, MathError, Vec4};

/// 4x4 matrix type (column-major, `m[col * 4 + row]`)
pub type Mat4 = [f32; 16];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// Determinant threshold, relative to the product of the column lengths,
/// below which a matrix is treated as singular
const SINGULAR_EPSILON: f64 = 1e-12;

/// The multiplicative identity
#[inline]
pub fn identity() -> Mat4 {
    IDENTITY
}

/// Pure translation by (tx, ty, tz)
pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        tx, ty, tz, 1.0,
    ]
}

/// Right-handed rotation about the X axis (Y turns toward Z)
pub fn x_rotation(angle_radians: f32) -> Mat4 {
    let c = angle_radians.cos();
    let s = angle_radians.sin();
    [
        1.0, 0.0, 0.0, 0.0,
        0.0, c, s, 0.0,
        0.0, -s, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Right-handed rotation about the Y axis (Z turns toward X, X toward -Z)
pub fn y_rotation(angle_radians: f32) -> Mat4 {
    let c = angle_radians.cos();
    let s = angle_radians.sin();
    [
        c, 0.0, -s, 0.0,
        0.0, 1.0, 0.0, 0.0,
        s, 0.0, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Right-handed rotation about the Z axis (X turns toward Y)
pub fn z_rotation(angle_radians: f32) -> Mat4 {
    let c = angle_radians.cos();
    let s = angle_radians.sin();
    [
        c, s, 0.0, 0.0,
        -s, c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Diagonal scale matrix
pub fn scaling(sx: f32, sy: f32, sz: f32) -> Mat4 {
    [
        sx, 0.0, 0.0, 0.0,
        0.0, sy, 0.0, 0.0,
        0.0, 0.0, sz, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [0.0f32; 16];

    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            result[col * 4 + row] = sum;
        }
    }

    result
}

/// `multiply(m, translation(tx, ty, tz))`
pub fn translate(m: Mat4, tx: f32, ty: f32, tz: f32) -> Mat4 {
    multiply(m, translation(tx, ty, tz))
}

/// `multiply(m, x_rotation(angle))`
pub fn x_rotate(m: Mat4, angle_radians: f32) -> Mat4 {
    multiply(m, x_rotation(angle_radians))
}

/// `multiply(m, y_rotation(angle))`
pub fn y_rotate(m: Mat4, angle_radians: f32) -> Mat4 {
    multiply(m, y_rotation(angle_radians))
}

/// `multiply(m, z_rotation(angle))`
pub fn z_rotate(m: Mat4, angle_radians: f32) -> Mat4 {
    multiply(m, z_rotation(angle_radians))
}

/// `multiply(m, scaling(sx, sy, sz))`
pub fn scale(m: Mat4, sx: f32, sy: f32, sz: f32) -> Mat4 {
    multiply(m, scaling(sx, sy, sz))
}

/// Perspective projection from a vertical field of view.
///
/// Maps the view-space frustum (camera looking down -Z) into GL clip
/// space: a point on the near plane ends up at NDC z = -1, a point on the
/// far plane at NDC z = +1.
///
/// # Errors
/// [`MathError::DegeneratePerspective`] when `fov` is outside `(0, π)`,
/// `aspect <= 0`, `near <= 0` or `far <= near`; [`MathError::NonFinite`]
/// for NaN/infinite arguments.
pub fn perspective(
    field_of_view_radians: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, MathError> {
    if ![field_of_view_radians, aspect, near, far]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(MathError::NonFinite("perspective parameters"));
    }
    if field_of_view_radians <= 0.0 || field_of_view_radians >= std::f32::consts::PI {
        return Err(MathError::DegeneratePerspective(format!(
            "field of view {} rad is outside (0, pi)",
            field_of_view_radians
        )));
    }
    if aspect <= 0.0 {
        return Err(MathError::DegeneratePerspective(format!(
            "aspect ratio {} must be positive",
            aspect
        )));
    }
    if near <= 0.0 {
        return Err(MathError::DegeneratePerspective(format!(
            "near plane {} must be positive",
            near
        )));
    }
    if far <= near {
        return Err(MathError::DegeneratePerspective(format!(
            "far plane {} must be greater than near plane {}",
            far, near
        )));
    }

    let f = 1.0 / (field_of_view_radians * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    Ok([
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (near + far) * range_inv, -1.0,
        0.0, 0.0, near * far * range_inv * 2.0, 0.0,
    ])
}

/// Orthographic projection of the box `[left, right] x [bottom, top] x [-near, -far]`
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, MathError> {
    if ![left, right, bottom, top, near, far].iter().all(|v| v.is_finite()) {
        return Err(MathError::NonFinite("orthographic parameters"));
    }
    if left == right || bottom == top || near == far {
        return Err(MathError::DegenerateProjection(format!(
            "empty box: x [{}, {}], y [{}, {}], z [{}, {}]",
            left, right, bottom, top, near, far
        )));
    }

    Ok([
        2.0 / (right - left), 0.0, 0.0, 0.0,
        0.0, 2.0 / (top - bottom), 0.0, 0.0,
        0.0, 0.0, 2.0 / (near - far), 0.0,
        (left + right) / (left - right),
        (bottom + top) / (bottom - top),
        (near + far) / (near - far),
        1.0,
    ])
}

/// Pixel-space projection: (0, 0) is the top-left corner, (width, height)
/// the bottom-right, and z in `[-depth/2, depth/2]` maps to NDC `[-1, 1]`.
pub fn projection(width: f32, height: f32, depth: f32) -> Result<Mat4, MathError> {
    if !(width.is_finite() && height.is_finite() && depth.is_finite()) {
        return Err(MathError::NonFinite("projection size"));
    }
    if width == 0.0 || height == 0.0 || depth == 0.0 {
        return Err(MathError::DegenerateProjection(format!(
            "zero extent {}x{}x{}",
            width, height, depth
        )));
    }

    Ok([
        2.0 / width, 0.0, 0.0, 0.0,
        0.0, -2.0 / height, 0.0, 0.0,
        0.0, 0.0, 2.0 / depth, 0.0,
        -1.0, 1.0, 0.0, 1.0,
    ])
}

/// Camera matrix placing a camera at `camera` looking toward `target`.
///
/// This is the camera's world transform; the view matrix is its
/// [`inverse`].
pub fn look_at(camera: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Result<Mat4, MathError> {
    let z_axis = vec3::normalize(vec3::subtract(camera, target)).ok_or_else(|| {
        MathError::DegenerateCamera("camera position coincides with target".to_string())
    })?;
    let x_axis = vec3::normalize(vec3::cross(up, z_axis)).ok_or_else(|| {
        MathError::DegenerateCamera("up vector is parallel to the view direction".to_string())
    })?;
    let y_axis = vec3::cross(z_axis, x_axis);

    Ok([
        x_axis[0], x_axis[1], x_axis[2], 0.0,
        y_axis[0], y_axis[1], y_axis[2], 0.0,
        z_axis[0], z_axis[1], z_axis[2], 0.0,
        camera[0], camera[1], camera[2], 1.0,
    ])
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    let mut result = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            result[row * 4 + col] = m[col * 4 + row];
        }
    }
    result
}

/// Adjugate (transposed cofactors) and determinant, computed in f64.
///
/// The expansion is layout-agnostic: the inverse of a transpose is the
/// transpose of the inverse, so the same formulas serve column-major data.
fn adjugate(m: &Mat4) -> ([f64; 16], f64) {
    let m: [f64; 16] = m.map(f64::from);
    let mut inv = [0.0f64; 16];

    inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
        + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
    inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
        - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
    inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
        + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
    inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
        - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];
    inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
        - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
    inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
        + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
    inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
        - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
    inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
        + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];
    inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
        + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
    inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
        - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
    inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
        + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
    inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
        - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];
    inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
        - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
    inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
        + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
    inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
        - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
    inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
        + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

    let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
    (inv, det)
}

/// Determinant of a matrix
pub fn determinant(m: Mat4) -> f32 {
    adjugate(&m).1 as f32
}

/// Product of the column lengths, an upper bound on `|det(m)|` (Hadamard)
fn column_norm_product(m: &Mat4) -> f64 {
    m.chunks_exact(4)
        .map(|col| col.iter().map(|&v| f64::from(v) * f64::from(v)).sum::<f64>().sqrt())
        .product()
}

/// Invert a matrix.
///
/// # Errors
/// [`MathError::SingularMatrix`] when the determinant is zero relative to
/// the length of the columns, so a large translation alone never makes a
/// matrix singular; [`MathError::NonFinite`] when the input holds NaN or
/// infinity.
pub fn inverse(m: Mat4) -> Result<Mat4, MathError> {
    if !is_finite(&m) {
        return Err(MathError::NonFinite("matrix to invert"));
    }

    let (adj, det) = adjugate(&m);

    let bound = column_norm_product(&m);
    if bound == 0.0 || det.abs() <= SINGULAR_EPSILON * bound {
        return Err(MathError::SingularMatrix { determinant: det });
    }

    let inv_det = 1.0 / det;
    let result = adj.map(|v| (v * inv_det) as f32);
    if !is_finite(&result) {
        return Err(MathError::NonFinite("inverted matrix"));
    }
    Ok(result)
}

/// Transform a vector by a matrix (column-major)
///
/// result = M * v
pub fn vector_multiply(v: Vec4, m: Mat4) -> Vec4 {
    Vec4::new(
        m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
        m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
        m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
        m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
    )
}

/// Transform a 3D point (w = 1) and apply the perspective divide
pub fn transform_point(m: Mat4, p: [f32; 3]) -> Option<[f32; 3]> {
    vector_multiply(Vec4::point(p[0], p[1], p[2]), m).to_cartesian()
}

/// True if all 16 elements are finite
pub fn is_finite(m: &Mat4) -> bool {
    m.iter().all(|v| v.is_finite())
}

/// Element-wise comparison within `epsilon`
pub fn approx_eq(a: &Mat4, b: &Mat4, epsilon: f32) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= epsilon)
}
