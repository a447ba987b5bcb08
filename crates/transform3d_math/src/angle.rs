//! Angle conversion helpers

use std::f32::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Rotation vector `[sin, cos]` for a 2D angle given in degrees.
///
/// The angle is measured clockwise on screen (pixel space has y pointing
/// down), so the vector is taken for `360 - degrees`.
pub fn unit_circle(degrees: f32) -> [f32; 2] {
    let radians = deg_to_rad(360.0 - degrees);
    [radians.sin(), radians.cos()]
}
