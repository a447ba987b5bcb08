//! transform3d - interactive 3D transform demos
//!
//! Library half of the binary: configuration, logging and the window,
//! render and input systems the application loop is built from.

pub mod config;
pub mod input;
pub mod logging;
pub mod systems;
