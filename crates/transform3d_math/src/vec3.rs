//! 3-component vector helpers used by camera construction
//!
//! Plain `[f32; 3]` arrays, matching how positions are stored in vertex data.

pub fn subtract(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn length(v: [f32; 3]) -> f32 {
    dot(v, v).sqrt()
}

/// Normalize to unit length.
///
/// Returns `None` for (near) zero-length vectors, which have no direction.
pub fn normalize(v: [f32; 3]) -> Option<[f32; 3]> {
    let len = length(v);
    if len > 1e-6 && len.is_finite() {
        Some([v[0] / len, v[1] / len, v[2] / len])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_of_axes() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([0.0, 1.0, 0.0], [0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalize() {
        let n = normalize([3.0, 0.0, 4.0]).unwrap();
        assert!((n[0] - 0.6).abs() < 1e-6);
        assert!((n[2] - 0.8).abs() < 1e-6);
        assert!(normalize([0.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn test_subtract_and_dot() {
        assert_eq!(subtract([5.0, 5.0, 5.0], [1.0, 2.0, 3.0]), [4.0, 3.0, 2.0]);
        assert_eq!(dot([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]), 32.0);
    }
}
