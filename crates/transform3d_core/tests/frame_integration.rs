//! Integration tests for the frame pipeline
//!
//! These tests push each preset's geometry through its own transform chain
//! and check where the vertices land in clip space:
//! 1. Pixel-space presets put the letter in the top-left of the screen
//! 2. Perspective presets keep every vertex in front of the camera
//! 3. The look-at camera keeps the first ring instance centered

use transform3d_core::{DemoPreset, FrameTransforms, Geometry, Viewport, Vec4};
use transform3d_math::mat4;

const VIEWPORT: Viewport = Viewport { width: 640, height: 480 };

/// Clip-space (x, y, z, w) of every vertex of every instance
fn clip_vertices(preset: DemoPreset) -> Vec<Vec4> {
    let params = preset.default_params();
    let geometry: Geometry = preset.geometry();
    let transforms = FrameTransforms::compute(preset.stages(), &params, VIEWPORT)
        .expect("default parameters should always compute");

    transforms
        .matrices()
        .iter()
        .flat_map(|&m| {
            geometry.vertices.iter().map(move |v| {
                let [x, y, z] = v.position;
                mat4::vector_multiply(Vec4::point(x, y, z), m)
            })
        })
        .collect()
}

// ==================== Pixel-space presets ====================

#[test]
fn test_letter_2d_lands_in_top_left() {
    let max_x = -1.0 + 2.0 * 100.0 / VIEWPORT.width as f32;
    let min_y = 1.0 - 2.0 * 150.0 / VIEWPORT.height as f32;

    for p in clip_vertices(DemoPreset::Letter2d) {
        assert!((p.w - 1.0).abs() < 1e-6, "planar frames are affine");
        assert!(p.x >= -1.0 - 1e-4 && p.x <= max_x + 1e-4, "x = {}", p.x);
        assert!(p.y <= 1.0 + 1e-4 && p.y >= min_y - 1e-4, "y = {}", p.y);
    }
}

#[test]
fn test_rectangle_keeps_its_size() {
    let clip = clip_vertices(DemoPreset::Rectangle2d);
    let width = clip.iter().map(|p| p.x).fold(f32::MIN, f32::max)
        - clip.iter().map(|p| p.x).fold(f32::MAX, f32::min);
    assert!((width - 2.0 * 100.0 / VIEWPORT.width as f32).abs() < 1e-4);
}

// ==================== Perspective presets ====================

#[test]
fn test_perspective_letter_is_in_front_of_camera() {
    for p in clip_vertices(DemoPreset::Perspective) {
        assert!(p.w > 0.0, "vertex behind the camera: w = {}", p.w);
        assert!((p.z / p.w).abs() < 1.0, "vertex outside depth range");
    }
}

#[test]
fn test_orbit_ring_is_in_front_of_camera() {
    let clip = clip_vertices(DemoPreset::OrbitCamera);
    let expected = DemoPreset::OrbitCamera.default_params().instance_count as usize
        * DemoPreset::OrbitCamera.geometry().vertex_count();
    assert_eq!(clip.len(), expected);

    for p in clip {
        assert!(p.w > 0.0, "vertex behind the camera: w = {}", p.w);
        assert!((p.z / p.w).abs() < 1.0, "vertex outside depth range");
    }
}

// ==================== Look-at camera ====================

#[test]
fn test_look_at_tracks_first_instance_at_any_angle() {
    let preset = DemoPreset::OrbitLookAt;
    for angle in [0.0, 37.0, 90.0, 181.0, 300.0] {
        let params = preset.default_params().with_camera_angle(angle);
        let transforms = FrameTransforms::compute(preset.stages(), &params, VIEWPORT).unwrap();
        let center = mat4::transform_point(transforms.matrices()[0], [0.0, 0.0, 0.0]).unwrap();
        assert!(center[0].abs() < 1e-3, "angle {}: x = {}", angle, center[0]);
        assert!(center[1].abs() < 1e-3, "angle {}: y = {}", angle, center[1]);
    }
}

#[test]
fn test_full_turn_returns_to_same_frame() {
    let preset = DemoPreset::OrbitCamera;
    let start = preset.default_params().with_camera_angle(45.0);
    let turned = start.with_camera_angle(45.0 + 360.0);

    let a = FrameTransforms::compute(preset.stages(), &start, VIEWPORT).unwrap();
    let b = FrameTransforms::compute(preset.stages(), &turned, VIEWPORT).unwrap();
    for (ma, mb) in a.matrices().iter().zip(b.matrices()) {
        assert!(mat4::approx_eq(ma, mb, 1e-4));
    }
}
