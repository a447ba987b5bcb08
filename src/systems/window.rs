//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use transform3d_core::{DemoPreset, SceneParams, TransformStages};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    title: TitleCache,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
            title: TitleCache::new(&config.title),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with the preset and current parameters.
    ///
    /// The window is only touched when the text changes.
    pub fn update_title(&mut self, preset: DemoPreset, stages: TransformStages, params: &SceneParams) {
        let title = format_title(&self.base_title, preset, stages, params);
        if let Some(title) = self.title.replace(title) {
            self.window.set_title(title);
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Last title handed to the window
struct TitleCache {
    current: String,
}

impl TitleCache {
    fn new(initial: &str) -> Self {
        Self {
            current: initial.to_string(),
        }
    }

    /// Store `title`, returning it only if it differs from the last one
    fn replace(&mut self, title: String) -> Option<&str> {
        if title == self.current {
            return None;
        }
        self.current = title;
        Some(&self.current)
    }
}

fn format_title(
    base: &str,
    preset: DemoPreset,
    stages: TransformStages,
    params: &SceneParams,
) -> String {
    let t = params.translation;
    let r = params.rotation_deg;
    let mut title = format!(
        "{} - {} - T({:.0}, {:.0}, {:.0}) R({:.0}, {:.0}, {:.0}) S{:.2}",
        base, preset.name(), t[0], t[1], t[2], r[0], r[1], r[2], params.scale[0]
    );
    if stages.contains(TransformStages::PERSPECTIVE) {
        title.push_str(&format!(" FOV {:.0}", params.fov_deg));
    }
    if stages.contains(TransformStages::ORBIT) {
        title.push_str(&format!(" Cam {:.0}", params.camera_angle_deg));
    }
    title
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_shows_preset_and_params() {
        let preset = DemoPreset::Letter3d;
        let title = format_title("Test", preset, preset.stages(), &preset.default_params());
        assert!(title.starts_with("Test - letter_3d"));
        assert!(title.contains("T(45, 150, 0)"));
        assert!(!title.contains("FOV"));
    }

    #[test]
    fn test_title_camera_fields() {
        let preset = DemoPreset::OrbitCamera;
        let title = format_title("Test", preset, preset.stages(), &preset.default_params());
        assert!(title.contains("FOV 60"));
        assert!(title.contains("Cam 0"));
    }

    #[test]
    fn test_title_cache_skips_repeats() {
        let preset = DemoPreset::Perspective;
        let params = preset.default_params();
        let mut cache = TitleCache::new("Test");

        let first = format_title("Test", preset, preset.stages(), &params);
        assert_eq!(cache.replace(first.clone()), Some(first.as_str()));
        assert_eq!(cache.replace(first), None);

        let moved = params.with_fov(75.0);
        let second = format_title("Test", preset, preset.stages(), &moved);
        assert!(cache.replace(second).is_some());
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
