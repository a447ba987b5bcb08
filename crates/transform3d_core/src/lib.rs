//! Core types for the transform3d demos
//!
//! This crate turns a handful of scalar parameters into the matrices a
//! renderer uploads each frame:
//!
//! - [`SceneParams`] - Immutable per-frame parameters (translation, rotation, scale, camera)
//! - [`TransformStages`] - Which transform stages are active
//! - [`DemoPreset`] - Named stage/geometry/parameter combinations
//! - [`Geometry`] - Vertex data for the F letter and rectangle
//! - [`FrameTransforms`] - Per-instance clip-space matrices for one frame

mod frame;
mod geometry;
mod params;
mod preset;
mod stages;

pub use frame::{FrameTransforms, Viewport, PIXEL_DEPTH};
pub use geometry::{Geometry, GeometryVertex};
pub use params::{Axis, ParamKind, SceneParams, FOV_RANGE, MAX_INSTANCES, SCALE_RANGE};
pub use preset::DemoPreset;
pub use stages::{TransformStage, TransformStages};

// Re-export commonly used math types for convenience
pub use transform3d_math::{Mat4, MathError, Vec4};
