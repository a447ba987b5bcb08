//! Parameter controller
//!
//! Controls:
//! - Arrows / WASD: translation X/Y (Up/W moves toward -Y, screen up in pixel space)
//! - Q/E: translation Z
//! - I/K, J/L, U/O: rotation about X, Y, Z
//! - Z/X: uniform scale
//! - -/=: field of view
//! - [/]: orbit camera angle

use transform3d_core::{Axis, ParamKind, SceneParams};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Key, parameter, and direction of change while held
pub const KEY_BINDINGS: [(KeyCode, ParamKind, f32); 22] = [
    (KeyCode::ArrowLeft, ParamKind::Translation(Axis::X), -1.0),
    (KeyCode::ArrowRight, ParamKind::Translation(Axis::X), 1.0),
    (KeyCode::KeyA, ParamKind::Translation(Axis::X), -1.0),
    (KeyCode::KeyD, ParamKind::Translation(Axis::X), 1.0),
    (KeyCode::ArrowUp, ParamKind::Translation(Axis::Y), -1.0),
    (KeyCode::ArrowDown, ParamKind::Translation(Axis::Y), 1.0),
    (KeyCode::KeyW, ParamKind::Translation(Axis::Y), -1.0),
    (KeyCode::KeyS, ParamKind::Translation(Axis::Y), 1.0),
    (KeyCode::KeyQ, ParamKind::Translation(Axis::Z), -1.0),
    (KeyCode::KeyE, ParamKind::Translation(Axis::Z), 1.0),
    (KeyCode::KeyI, ParamKind::Rotation(Axis::X), 1.0),
    (KeyCode::KeyK, ParamKind::Rotation(Axis::X), -1.0),
    (KeyCode::KeyL, ParamKind::Rotation(Axis::Y), 1.0),
    (KeyCode::KeyJ, ParamKind::Rotation(Axis::Y), -1.0),
    (KeyCode::KeyO, ParamKind::Rotation(Axis::Z), 1.0),
    (KeyCode::KeyU, ParamKind::Rotation(Axis::Z), -1.0),
    (KeyCode::KeyX, ParamKind::UniformScale, 1.0),
    (KeyCode::KeyZ, ParamKind::UniformScale, -1.0),
    (KeyCode::Equal, ParamKind::FieldOfView, 1.0),
    (KeyCode::Minus, ParamKind::FieldOfView, -1.0),
    (KeyCode::BracketRight, ParamKind::CameraAngle, 1.0),
    (KeyCode::BracketLeft, ParamKind::CameraAngle, -1.0),
];

/// Tracks held keys and turns them into parameter changes
pub struct ParamController {
    held: [bool; KEY_BINDINGS.len()],

    // Rates per second of held key
    pub translation_speed: f32,
    pub rotation_speed: f32,
    pub scale_speed: f32,
    pub fov_speed: f32,
    pub camera_speed: f32,
}

impl Default for ParamController {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamController {
    pub fn new() -> Self {
        Self {
            held: [false; KEY_BINDINGS.len()],
            translation_speed: 200.0,
            rotation_speed: 90.0,
            scale_speed: 1.0,
            fov_speed: 30.0,
            camera_speed: 60.0,
        }
    }

    /// Process keyboard input. Returns true if the key is bound.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        let mut bound = false;

        for (held, (binding, kind, direction)) in self.held.iter_mut().zip(KEY_BINDINGS.iter()) {
            if *binding != key {
                continue;
            }
            bound = true;
            if pressed && !*held {
                log::debug!("{:?} held: adjusting {:?} ({:+})", key, kind, direction);
            }
            *held = pressed;
        }

        bound
    }

    /// Rate of change per second for a parameter
    pub fn speed(&self, kind: ParamKind) -> f32 {
        match kind {
            ParamKind::Translation(_) => self.translation_speed,
            ParamKind::Rotation(_) => self.rotation_speed,
            ParamKind::Scale(_) | ParamKind::UniformScale => self.scale_speed,
            ParamKind::FieldOfView => self.fov_speed,
            ParamKind::CameraAngle => self.camera_speed,
        }
    }

    /// Apply `dt` seconds of held keys, returning the adjusted parameters
    pub fn apply(&self, params: SceneParams, dt: f32) -> SceneParams {
        self.held
            .iter()
            .zip(KEY_BINDINGS.iter())
            .filter(|(held, _)| **held)
            .fold(params, |p, (_, &(_, kind, direction))| {
                p.adjusted(kind, direction * self.speed(kind) * dt)
            })
    }

    /// Check if any bound key is held
    pub fn is_active(&self) -> bool {
        self.held.iter().any(|&h| h)
    }

    /// Forget all held keys (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held = [false; KEY_BINDINGS.len()];
    }

    /// Builder: set translation speed (units per second)
    pub fn with_translation_speed(mut self, speed: f32) -> Self {
        self.translation_speed = speed;
        self
    }

    /// Builder: set rotation speed (degrees per second)
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Builder: set scale speed (factor per second)
    pub fn with_scale_speed(mut self, speed: f32) -> Self {
        self.scale_speed = speed;
        self
    }

    /// Builder: set field of view speed (degrees per second)
    pub fn with_fov_speed(mut self, speed: f32) -> Self {
        self.fov_speed = speed;
        self
    }

    /// Builder: set orbit camera speed (degrees per second)
    pub fn with_camera_speed(mut self, speed: f32) -> Self {
        self.camera_speed = speed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: &mut ParamController, key: KeyCode) {
        assert!(c.process_keyboard(key, ElementState::Pressed));
    }

    fn release(c: &mut ParamController, key: KeyCode) {
        assert!(c.process_keyboard(key, ElementState::Released));
    }

    #[test]
    fn test_idle_controller_leaves_params_alone() {
        let c = ParamController::new();
        let p = SceneParams::default();
        assert_eq!(c.apply(p, 1.0), p);
        assert!(!c.is_active());
    }

    #[test]
    fn test_held_key_translates() {
        let mut c = ParamController::new().with_translation_speed(100.0);
        press(&mut c, KeyCode::KeyD);
        let p = c.apply(SceneParams::default(), 0.5);
        assert_eq!(p.translation, [50.0, 0.0, 0.0]);

        release(&mut c, KeyCode::KeyD);
        assert_eq!(c.apply(p, 0.5), p);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut c = ParamController::new();
        press(&mut c, KeyCode::KeyQ);
        press(&mut c, KeyCode::KeyE);
        let p = c.apply(SceneParams::default(), 1.0);
        assert_eq!(p.translation[2], 0.0);
    }

    #[test]
    fn test_up_moves_toward_negative_y() {
        let mut c = ParamController::new().with_translation_speed(10.0);
        press(&mut c, KeyCode::ArrowUp);
        let p = c.apply(SceneParams::default(), 1.0);
        assert_eq!(p.translation[1], -10.0);
    }

    #[test]
    fn test_rotation_keys_wrap() {
        let mut c = ParamController::new().with_rotation_speed(90.0);
        press(&mut c, KeyCode::KeyJ);
        let p = c.apply(SceneParams::default(), 1.0);
        assert!((p.rotation_deg[1] - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_scale_and_fov_ranges_hold() {
        let mut c = ParamController::new();
        press(&mut c, KeyCode::KeyX);
        press(&mut c, KeyCode::Minus);
        let p = c.apply(SceneParams::default(), 100.0);
        assert_eq!(p.scale, [5.0, 5.0, 5.0]);
        assert_eq!(p.fov_deg, 1.0);
    }

    #[test]
    fn test_camera_angle_keys() {
        let mut c = ParamController::new().with_camera_speed(45.0);
        press(&mut c, KeyCode::BracketRight);
        let p = c.apply(SceneParams::default(), 1.0);
        assert!((p.camera_angle_deg - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_unbound_key_not_consumed() {
        let mut c = ParamController::new();
        assert!(!c.process_keyboard(KeyCode::KeyR, ElementState::Pressed));
        assert!(!c.is_active());
    }

    #[test]
    fn test_release_all() {
        let mut c = ParamController::new();
        press(&mut c, KeyCode::ArrowLeft);
        press(&mut c, KeyCode::KeyI);
        assert!(c.is_active());
        c.release_all();
        assert!(!c.is_active());
    }

    #[test]
    fn test_every_binding_is_unique() {
        for (i, (key, _, _)) in KEY_BINDINGS.iter().enumerate() {
            assert!(
                KEY_BINDINGS[i + 1..].iter().all(|(other, _, _)| other != key),
                "{:?} bound twice",
                key
            );
        }
    }
}
