//! Rendering for the transform demos
//!
//! This crate draws tutorial geometry with one clip-space matrix per
//! instance, as produced by `transform3d_core::FrameTransforms`.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::LetterPipeline`] - Instanced colored-triangle pipeline with depth buffer
//! - [`clip`] - GL to wgpu clip-space depth correction
//! - [`renderable::RenderableGeometry`] - Converts core geometry to GPU vertices

pub mod clip;
pub mod context;
pub mod pipeline;
pub mod renderable;

pub use renderable::RenderableGeometry;
