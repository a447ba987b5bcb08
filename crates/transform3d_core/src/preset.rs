//! Demo presets
//!
//! Each preset pairs a stage set with the geometry and starting parameters
//! of one step of the transform walkthrough.

use serde::{Serialize, Deserialize};

use crate::{Geometry, SceneParams, TransformStages};

/// Color used for the single-color 2D shapes
const FLAT_COLOR: [f32; 4] = [0.2, 0.6, 0.9, 1.0];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoPreset {
    /// Flat rectangle in pixel space
    #[serde(rename = "rectangle_2d")]
    Rectangle2d,
    /// Flat F in pixel space
    #[serde(rename = "letter_2d")]
    Letter2d,
    /// Solid F under the pixel-space orthographic projection
    #[serde(rename = "letter_3d")]
    Letter3d,
    /// Solid F under a perspective projection
    #[default]
    Perspective,
    /// Ring of F instances seen from an orbiting camera
    OrbitCamera,
    /// Orbiting camera that keeps the first F in view
    OrbitLookAt,
}

impl DemoPreset {
    pub const ALL: [DemoPreset; 6] = [
        DemoPreset::Rectangle2d,
        DemoPreset::Letter2d,
        DemoPreset::Letter3d,
        DemoPreset::Perspective,
        DemoPreset::OrbitCamera,
        DemoPreset::OrbitLookAt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DemoPreset::Rectangle2d => "rectangle_2d",
            DemoPreset::Letter2d => "letter_2d",
            DemoPreset::Letter3d => "letter_3d",
            DemoPreset::Perspective => "perspective",
            DemoPreset::OrbitCamera => "orbit_camera",
            DemoPreset::OrbitLookAt => "orbit_look_at",
        }
    }

    pub fn stages(&self) -> TransformStages {
        let planar = TransformStages::PLANAR
            | TransformStages::TRANSLATION
            | TransformStages::ROTATE_Z
            | TransformStages::SCALE;
        match self {
            DemoPreset::Rectangle2d => TransformStages::PLANAR | TransformStages::TRANSLATION,
            DemoPreset::Letter2d => planar,
            DemoPreset::Letter3d => TransformStages::MODEL,
            DemoPreset::Perspective => TransformStages::MODEL | TransformStages::PERSPECTIVE,
            DemoPreset::OrbitCamera => TransformStages::PERSPECTIVE | TransformStages::ORBIT,
            DemoPreset::OrbitLookAt => {
                TransformStages::PERSPECTIVE | TransformStages::ORBIT | TransformStages::LOOK_AT
            }
        }
    }

    pub fn geometry(&self) -> Geometry {
        match self {
            DemoPreset::Rectangle2d => Geometry::rectangle(0.0, 0.0, 100.0, 30.0, FLAT_COLOR),
            DemoPreset::Letter2d => Geometry::letter_f_2d(FLAT_COLOR),
            DemoPreset::Letter3d | DemoPreset::Perspective => Geometry::letter_f_3d(),
            DemoPreset::OrbitCamera | DemoPreset::OrbitLookAt => Geometry::centered_letter_f(),
        }
    }

    pub fn default_params(&self) -> SceneParams {
        let base = SceneParams::default();
        match self {
            DemoPreset::Rectangle2d | DemoPreset::Letter2d => base,
            DemoPreset::Letter3d => SceneParams {
                translation: [45.0, 150.0, 0.0],
                rotation_deg: [40.0, 25.0, 325.0],
                ..base
            },
            DemoPreset::Perspective => SceneParams {
                translation: [-150.0, 0.0, -360.0],
                rotation_deg: [190.0, 40.0, 320.0],
                ..base
            },
            DemoPreset::OrbitCamera | DemoPreset::OrbitLookAt => base,
        }
    }

    /// Next preset in cycle order, wrapping around
    pub fn next(&self) -> DemoPreset {
        let index = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_have_consistent_stages() {
        for preset in DemoPreset::ALL {
            assert!(
                preset.stages().conflict().is_none(),
                "{} has conflicting stages",
                preset.name()
            );
        }
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut preset = DemoPreset::Rectangle2d;
        for _ in 0..DemoPreset::ALL.len() {
            preset = preset.next();
        }
        assert_eq!(preset, DemoPreset::Rectangle2d);
        assert_eq!(DemoPreset::OrbitLookAt.next(), DemoPreset::Rectangle2d);
    }

    #[test]
    fn test_geometry_per_preset() {
        assert_eq!(DemoPreset::Rectangle2d.geometry().vertex_count(), 6);
        assert_eq!(DemoPreset::Letter2d.geometry().vertex_count(), 18);
        assert_eq!(DemoPreset::Perspective.geometry().vertex_count(), 96);
        assert_eq!(DemoPreset::OrbitCamera.geometry().vertex_count(), 96);
    }

    #[test]
    fn test_flat_presets_use_fixed_color() {
        for preset in [DemoPreset::Rectangle2d, DemoPreset::Letter2d] {
            let geometry = preset.geometry();
            assert!(geometry.vertices.iter().all(|v| v.color == FLAT_COLOR));
            assert_eq!(geometry, preset.geometry());
        }
    }

    #[test]
    fn test_perspective_defaults() {
        let p = DemoPreset::Perspective.default_params();
        assert_eq!(p.translation, [-150.0, 0.0, -360.0]);
        assert_eq!(p.fov_deg, 60.0);
    }

    #[test]
    fn test_names_match_serde() {
        #[derive(Deserialize)]
        struct Wrapper {
            preset: DemoPreset,
        }
        for preset in DemoPreset::ALL {
            let parsed: Wrapper = toml::from_str(&format!("preset = \"{}\"", preset.name())).unwrap();
            assert_eq!(parsed.preset, preset);
        }
    }
}
