//! Frame transform chain
//!
//! Builds the clip-space matrices for one frame from the active stages and
//! the current parameters. The chain is
//!
//! ```text
//! clip = projection * view * ring_offset * model
//! model = translate * rotate_x * rotate_y * rotate_z * scale
//! ```
//!
//! where every model stage is skipped unless enabled, `view` is identity
//! unless the orbit camera is on, and `ring_offset` only exists for the
//! orbit demos. The planar stage swaps all of this for the 3x3 pixel-space
//! pipeline embedded in a 4x4 matrix.

use transform3d_math::{deg_to_rad, mat3, mat4, unit_circle, Mat4, MathError};

use crate::{SceneParams, TransformStages, MAX_INSTANCES};

/// Depth of the pixel-space orthographic projection
pub const PIXEL_DEPTH: f32 = 400.0;

/// Orbit camera distance relative to the ring radius
const CAMERA_DISTANCE_FACTOR: f32 = 1.5;

/// Drawable area in physical pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height (1.0 for an empty viewport)
    pub fn aspect(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Clip-space matrices for every instance drawn this frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameTransforms {
    matrices: Vec<Mat4>,
}

impl FrameTransforms {
    /// Run the transform chain.
    ///
    /// # Errors
    /// Fails on a zero-sized viewport, non-finite parameters, a degenerate
    /// projection or camera, or any output matrix that is not finite.
    pub fn compute(
        stages: TransformStages,
        params: &SceneParams,
        viewport: Viewport,
    ) -> Result<Self, MathError> {
        if viewport.is_empty() {
            return Err(MathError::DegenerateProjection(format!(
                "zero-sized viewport {}x{}",
                viewport.width, viewport.height
            )));
        }
        if !params.is_finite() {
            return Err(MathError::NonFinite("scene parameters"));
        }

        let matrices = if stages.contains(TransformStages::PLANAR) {
            vec![planar_matrix(stages, params, viewport)?]
        } else {
            spatial_matrices(stages, params, viewport)?
        };

        if !matrices.iter().all(mat4::is_finite) {
            return Err(MathError::NonFinite("frame transform"));
        }

        Ok(Self { matrices })
    }

    pub fn matrices(&self) -> &[Mat4] {
        &self.matrices
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}

fn planar_matrix(
    stages: TransformStages,
    params: &SceneParams,
    viewport: Viewport,
) -> Result<Mat4, MathError> {
    let mut m = mat3::projection(viewport.width as f32, viewport.height as f32)?;
    if stages.contains(TransformStages::TRANSLATION) {
        m = mat3::translate(m, params.translation[0], params.translation[1]);
    }
    if stages.contains(TransformStages::ROTATE_Z) {
        let rotation = mat3::from_unit_circle(unit_circle(params.rotation_deg[2]));
        m = mat3::multiply(m, rotation);
    }
    if stages.contains(TransformStages::SCALE) {
        m = mat3::scale(m, params.scale[0], params.scale[1]);
    }
    Ok(mat3::to_mat4(m))
}

fn projection_matrix(
    stages: TransformStages,
    params: &SceneParams,
    viewport: Viewport,
) -> Result<Mat4, MathError> {
    if stages.contains(TransformStages::PERSPECTIVE) {
        mat4::perspective(
            deg_to_rad(params.fov_deg),
            viewport.aspect(),
            params.near,
            params.far,
        )
    } else {
        mat4::projection(viewport.width as f32, viewport.height as f32, PIXEL_DEPTH)
    }
}

/// World transform of the orbiting camera
fn camera_matrix(stages: TransformStages, params: &SceneParams) -> Result<Mat4, MathError> {
    let orbit = mat4::translate(
        mat4::y_rotation(deg_to_rad(params.camera_angle_deg)),
        0.0,
        0.0,
        params.orbit_radius * CAMERA_DISTANCE_FACTOR,
    );
    if stages.contains(TransformStages::LOOK_AT) {
        let position = [orbit[12], orbit[13], orbit[14]];
        let first_instance = ring_offset(0, params.instance_count.max(1), params.orbit_radius);
        mat4::look_at(position, first_instance, [0.0, 1.0, 0.0])
    } else {
        Ok(orbit)
    }
}

fn model_matrix(stages: TransformStages, params: &SceneParams) -> Mat4 {
    let mut m = mat4::identity();
    if stages.contains(TransformStages::TRANSLATION) {
        let [tx, ty, tz] = params.translation;
        m = mat4::translate(m, tx, ty, tz);
    }
    if stages.contains(TransformStages::ROTATE_X) {
        m = mat4::x_rotate(m, deg_to_rad(params.rotation_deg[0]));
    }
    if stages.contains(TransformStages::ROTATE_Y) {
        m = mat4::y_rotate(m, deg_to_rad(params.rotation_deg[1]));
    }
    if stages.contains(TransformStages::ROTATE_Z) {
        m = mat4::z_rotate(m, deg_to_rad(params.rotation_deg[2]));
    }
    if stages.contains(TransformStages::SCALE) {
        let [sx, sy, sz] = params.scale;
        m = mat4::scale(m, sx, sy, sz);
    }
    m
}

/// Position of instance `index` on a ring of `count` evenly spaced slots
fn ring_offset(index: u32, count: u32, radius: f32) -> [f32; 3] {
    let angle = index as f32 * std::f32::consts::TAU / count as f32;
    [angle.cos() * radius, 0.0, angle.sin() * radius]
}

fn spatial_matrices(
    stages: TransformStages,
    params: &SceneParams,
    viewport: Viewport,
) -> Result<Vec<Mat4>, MathError> {
    let projection = projection_matrix(stages, params, viewport)?;
    let model = model_matrix(stages, params);

    if !stages.contains(TransformStages::ORBIT) {
        return Ok(vec![mat4::multiply(projection, model)]);
    }

    let view = mat4::inverse(camera_matrix(stages, params)?)?;
    let view_projection = mat4::multiply(projection, view);
    let count = params.instance_count.min(MAX_INSTANCES);

    Ok((0..count)
        .map(|i| {
            let [x, y, z] = ring_offset(i, count, params.orbit_radius);
            mat4::multiply(mat4::translate(view_projection, x, y, z), model)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, DemoPreset};

    const EPSILON: f32 = 1e-4;
    const VIEWPORT: Viewport = Viewport { width: 640, height: 480 };

    fn clip(transforms: &FrameTransforms, index: usize, p: [f32; 3]) -> [f32; 3] {
        mat4::transform_point(transforms.matrices()[index], p).unwrap()
    }

    #[test]
    fn test_every_preset_computes() {
        for preset in DemoPreset::ALL {
            let frame = FrameTransforms::compute(preset.stages(), &preset.default_params(), VIEWPORT)
                .unwrap_or_else(|e| panic!("{}: {}", preset.name(), e));
            assert!(!frame.is_empty());
            assert!(frame.matrices().iter().all(mat4::is_finite));
        }
    }

    #[test]
    fn test_zero_viewport_is_error() {
        let result = FrameTransforms::compute(
            TransformStages::MODEL,
            &SceneParams::default(),
            Viewport::new(0, 480),
        );
        assert!(matches!(result, Err(MathError::DegenerateProjection(_))));
    }

    #[test]
    fn test_non_finite_params_is_error() {
        let params = SceneParams::default().with_translation(Axis::X, f32::INFINITY);
        let result = FrameTransforms::compute(TransformStages::MODEL, &params, VIEWPORT);
        assert_eq!(result, Err(MathError::NonFinite("scene parameters")));
    }

    #[test]
    fn test_planar_translation_to_center() {
        let params = SceneParams::default()
            .with_translation(Axis::X, 320.0)
            .with_translation(Axis::Y, 240.0);
        let frame = FrameTransforms::compute(DemoPreset::Rectangle2d.stages(), &params, VIEWPORT).unwrap();
        let p = clip(&frame, 0, [0.0, 0.0, 0.0]);
        assert!(p[0].abs() < EPSILON && p[1].abs() < EPSILON, "got {:?}", p);
    }

    #[test]
    fn test_planar_rotation_turns_clockwise() {
        // 90 degrees on the dial turns +X toward +Y (down the screen)
        let params = SceneParams::default()
            .with_translation(Axis::X, 320.0)
            .with_translation(Axis::Y, 240.0)
            .with_rotation(Axis::Z, 90.0);
        let frame = FrameTransforms::compute(DemoPreset::Letter2d.stages(), &params, VIEWPORT).unwrap();
        let p = clip(&frame, 0, [100.0, 0.0, 0.0]);
        // (100, 0) -> (0, 100) pixels from the center -> 100 / 240 below
        assert!(p[0].abs() < EPSILON, "got {:?}", p);
        assert!((p[1] + 100.0 / 240.0).abs() < EPSILON, "got {:?}", p);
    }

    #[test]
    fn test_pixel_projection_without_stages() {
        let frame = FrameTransforms::compute(TransformStages::empty(), &SceneParams::default(), VIEWPORT).unwrap();
        let p = clip(&frame, 0, [0.0, 0.0, 0.0]);
        assert!((p[0] + 1.0).abs() < EPSILON);
        assert!((p[1] - 1.0).abs() < EPSILON);
        assert!(p[2].abs() < EPSILON);
    }

    #[test]
    fn test_model_stages_are_gated() {
        let params = SceneParams::default().with_translation(Axis::X, 320.0);
        let with = FrameTransforms::compute(TransformStages::TRANSLATION, &params, VIEWPORT).unwrap();
        let without = FrameTransforms::compute(TransformStages::SCALE, &params, VIEWPORT).unwrap();
        assert!((clip(&with, 0, [0.0; 3])[0]).abs() < EPSILON);
        assert!((clip(&without, 0, [0.0; 3])[0] + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_perspective_keeps_letter_in_depth_range() {
        let preset = DemoPreset::Perspective;
        let frame = FrameTransforms::compute(preset.stages(), &preset.default_params(), VIEWPORT).unwrap();
        for v in preset.geometry().vertices {
            let p = clip(&frame, 0, v.position);
            assert!(p[2] > -1.0 && p[2] < 1.0, "vertex {:?} clipped: {:?}", v.position, p);
        }
    }

    #[test]
    fn test_degenerate_fov_is_error() {
        let params = SceneParams {
            fov_deg: 0.0,
            ..SceneParams::default()
        };
        let result = FrameTransforms::compute(DemoPreset::Perspective.stages(), &params, VIEWPORT);
        assert!(matches!(result, Err(MathError::DegeneratePerspective(_))));

        let params = SceneParams::default().with_clip_planes(10.0, 10.0);
        let result = FrameTransforms::compute(DemoPreset::Perspective.stages(), &params, VIEWPORT);
        assert!(matches!(result, Err(MathError::DegeneratePerspective(_))));
    }

    #[test]
    fn test_orbit_instance_count() {
        let params = SceneParams::default().with_orbit(200.0, 7);
        let frame = FrameTransforms::compute(DemoPreset::OrbitCamera.stages(), &params, VIEWPORT).unwrap();
        assert_eq!(frame.len(), 7);
        assert_ne!(frame.matrices()[0], frame.matrices()[1]);

        let params = params.with_orbit(200.0, 0);
        let frame = FrameTransforms::compute(DemoPreset::OrbitCamera.stages(), &params, VIEWPORT).unwrap();
        assert!(frame.is_empty());
    }

    #[test]
    fn test_orbit_ring_center_in_front_of_camera() {
        // Camera at angle 0 sits on +Z looking at the ring center
        let params = SceneParams::default().with_orbit(200.0, 4);
        let frame = FrameTransforms::compute(DemoPreset::OrbitCamera.stages(), &params, VIEWPORT).unwrap();
        // Instance 1 sits at (0, 0, 200), straight ahead of the camera
        let p = clip(&frame, 1, [0.0, 0.0, 0.0]);
        assert!(p[0].abs() < EPSILON && p[1].abs() < EPSILON, "got {:?}", p);
        assert!(p[2] > -1.0 && p[2] < 1.0);
    }

    #[test]
    fn test_instance_count_beyond_cap_is_trimmed() {
        let params = SceneParams {
            instance_count: u32::MAX,
            ..SceneParams::default()
        };
        let frame = FrameTransforms::compute(DemoPreset::OrbitCamera.stages(), &params, VIEWPORT).unwrap();
        assert_eq!(frame.len(), MAX_INSTANCES as usize);
    }

    #[test]
    fn test_wide_orbit_computes() {
        let params = SceneParams::default()
            .with_orbit(1000.0, 5)
            .with_clip_planes(1.0, 5000.0);
        for preset in [DemoPreset::OrbitCamera, DemoPreset::OrbitLookAt] {
            let frame = FrameTransforms::compute(preset.stages(), &params, VIEWPORT).unwrap();
            assert_eq!(frame.len(), 5);
        }
    }

    #[test]
    fn test_look_at_centers_first_instance() {
        let params = DemoPreset::OrbitLookAt.default_params().with_camera_angle(75.0);
        let frame = FrameTransforms::compute(DemoPreset::OrbitLookAt.stages(), &params, VIEWPORT).unwrap();
        let p = clip(&frame, 0, [0.0, 0.0, 0.0]);
        assert!(p[0].abs() < EPSILON && p[1].abs() < EPSILON, "got {:?}", p);
    }

    #[test]
    fn test_look_at_zero_radius_is_error() {
        let params = SceneParams::default().with_orbit(0.0, 5);
        let result = FrameTransforms::compute(DemoPreset::OrbitLookAt.stages(), &params, VIEWPORT);
        assert!(matches!(result, Err(MathError::DegenerateCamera(_))));
    }

    #[test]
    fn test_viewport_aspect() {
        assert!((VIEWPORT.aspect() - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(Viewport::new(0, 0).aspect(), 1.0);
    }
}
