//! Keyboard input for the transform demos
//!
//! Held keys nudge the scene parameters every frame; the controller never
//! owns the parameters themselves.

mod param_controller;

pub use param_controller::{ParamController, KEY_BINDINGS};
