//! Input mapping from raw events to semantic actions
//!
//! Parameter keys (arrows, WASD, IJKL, ...) are NOT mapped here; they go
//! directly to the ParamController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Restore the preset's starting parameters (R key)
    ResetParams,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Switch to the next demo preset (Tab)
    NextPreset,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetParams),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Tab => Some(InputAction::NextPreset),
            _ => None,
        }
    }
}
