//! Transform stage selection
//!
//! Each demo enables a subset of the transform chain. The set is a bitflag
//! value at runtime and a list of named stages in configuration files.

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

bitflags! {
    /// Stages of the transform chain that are active for a demo
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TransformStages: u16 {
        /// 2D pipeline: pixel-space 3x3 projection, rotation about Z only
        const PLANAR = 1 << 0;
        const TRANSLATION = 1 << 1;
        const ROTATE_X = 1 << 2;
        const ROTATE_Y = 1 << 3;
        const ROTATE_Z = 1 << 4;
        const SCALE = 1 << 5;
        /// Perspective projection instead of the pixel-space orthographic one
        const PERSPECTIVE = 1 << 6;
        /// Camera orbiting a ring of instances
        const ORBIT = 1 << 7;
        /// Orbiting camera aims at the first instance instead of the ring center
        const LOOK_AT = 1 << 8;

        const ROTATION = Self::ROTATE_X.bits() | Self::ROTATE_Y.bits() | Self::ROTATE_Z.bits();
        const MODEL = Self::TRANSLATION.bits() | Self::ROTATION.bits() | Self::SCALE.bits();
    }
}

/// A single named stage, as written in configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformStage {
    Planar,
    Translation,
    RotateX,
    RotateY,
    RotateZ,
    Scale,
    Perspective,
    Orbit,
    LookAt,
}

impl TransformStage {
    pub fn flag(self) -> TransformStages {
        match self {
            TransformStage::Planar => TransformStages::PLANAR,
            TransformStage::Translation => TransformStages::TRANSLATION,
            TransformStage::RotateX => TransformStages::ROTATE_X,
            TransformStage::RotateY => TransformStages::ROTATE_Y,
            TransformStage::RotateZ => TransformStages::ROTATE_Z,
            TransformStage::Scale => TransformStages::SCALE,
            TransformStage::Perspective => TransformStages::PERSPECTIVE,
            TransformStage::Orbit => TransformStages::ORBIT,
            TransformStage::LookAt => TransformStages::LOOK_AT,
        }
    }
}

impl FromIterator<TransformStage> for TransformStages {
    fn from_iter<I: IntoIterator<Item = TransformStage>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TransformStages::empty(), |acc, stage| acc | stage.flag())
    }
}

impl TransformStages {
    /// Check the stage combination for contradictions.
    ///
    /// Returns a description of the first problem found, if any.
    pub fn conflict(&self) -> Option<&'static str> {
        if self.contains(TransformStages::PLANAR)
            && self.intersects(
                TransformStages::PERSPECTIVE
                    | TransformStages::ORBIT
                    | TransformStages::ROTATE_X
                    | TransformStages::ROTATE_Y,
            )
        {
            return Some("planar stage only supports translation, rotate_z and scale");
        }
        if self.contains(TransformStages::LOOK_AT) && !self.contains(TransformStages::ORBIT) {
            return Some("look_at requires orbit");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_from_list() {
        let stages: TransformStages = [TransformStage::Translation, TransformStage::RotateY]
            .into_iter()
            .collect();
        assert!(stages.contains(TransformStages::TRANSLATION));
        assert!(stages.contains(TransformStages::ROTATE_Y));
        assert!(!stages.contains(TransformStages::SCALE));
    }

    #[test]
    fn test_composite_flags() {
        assert!(TransformStages::MODEL.contains(TransformStages::ROTATION));
        assert!(TransformStages::MODEL.contains(TransformStages::SCALE));
        assert!(!TransformStages::MODEL.contains(TransformStages::PERSPECTIVE));
    }

    #[test]
    fn test_conflicts() {
        assert!((TransformStages::PLANAR | TransformStages::PERSPECTIVE).conflict().is_some());
        assert!(TransformStages::LOOK_AT.conflict().is_some());
        assert!((TransformStages::ORBIT | TransformStages::LOOK_AT).conflict().is_none());
        assert!((TransformStages::PLANAR | TransformStages::ROTATE_Z).conflict().is_none());
    }

    #[test]
    fn test_stage_names_in_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            stages: Vec<TransformStage>,
        }
        let parsed: Wrapper = toml::from_str(r#"stages = ["rotate_x", "look_at"]"#).unwrap();
        assert_eq!(parsed.stages, vec![TransformStage::RotateX, TransformStage::LookAt]);
    }
}
