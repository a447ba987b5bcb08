//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`T3D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use transform3d_core::{DemoPreset, SceneParams, TransformStage, TransformStages, MAX_INSTANCES};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Demo selection
    #[serde(default)]
    pub demo: DemoConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`T3D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // T3D_DEMO__PRESET=orbit_camera -> demo.preset = "orbit_camera"
        figment = figment.merge(Env::prefixed("T3D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Reject settings that cannot describe a demo
    pub fn validate(&self) -> Result<(), ConfigError> {
        let problem = self
            .stages_problem()
            .or_else(|| self.camera_problem())
            .or_else(|| self.instance_problem());
        match problem {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Replace every invalid setting with a usable one, returning what was wrong.
    ///
    /// A conflicting stage list falls back to the preset's stages, a bad
    /// camera section to the default camera, and an oversized ring to
    /// [`MAX_INSTANCES`].
    pub fn with_fallbacks(mut self) -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();
        if let Some(e) = self.stages_problem() {
            problems.push(e);
            self.demo.stages = None;
        }
        if let Some(e) = self.camera_problem() {
            problems.push(e);
            self.camera = CameraConfig::default();
        }
        if let Some(e) = self.instance_problem() {
            problems.push(e);
            self.demo.instance_count = MAX_INSTANCES;
        }
        (self, problems)
    }

    fn stages_problem(&self) -> Option<ConfigError> {
        let stages = self.demo.stages.as_ref()?;
        let flags: TransformStages = stages.iter().copied().collect();
        flags
            .conflict()
            .map(|problem| ConfigError::invalid(format!("demo.stages: {}", problem)))
    }

    fn camera_problem(&self) -> Option<ConfigError> {
        let (fov, near, far) = (self.camera.fov, self.camera.near, self.camera.far);
        if !(fov.is_finite() && fov > 0.0 && fov < 180.0) {
            return Some(ConfigError::invalid(format!(
                "camera.fov must be in (0, 180) degrees, got {}",
                fov
            )));
        }
        if !(near.is_finite() && far.is_finite() && near > 0.0 && far > near) {
            return Some(ConfigError::invalid(format!(
                "camera planes need 0 < near < far, got near {} far {}",
                near, far
            )));
        }
        None
    }

    fn instance_problem(&self) -> Option<ConfigError> {
        (self.demo.instance_count > MAX_INSTANCES).then(|| {
            ConfigError::invalid(format!(
                "demo.instance_count must be at most {}, got {}",
                MAX_INSTANCES, self.demo.instance_count
            ))
        })
    }

    /// Active stages for a preset (the stage override only applies to the configured preset)
    pub fn stages_for(&self, preset: DemoPreset) -> TransformStages {
        match &self.demo.stages {
            Some(stages) if preset == self.demo.preset => stages.iter().copied().collect(),
            _ => preset.stages(),
        }
    }

    /// Starting parameters for a preset with the camera and orbit settings applied
    pub fn params_for(&self, preset: DemoPreset) -> SceneParams {
        preset
            .default_params()
            .with_fov(self.camera.fov)
            .with_clip_planes(self.camera.near, self.camera.far)
            .with_orbit(self.demo.orbit_radius, self.demo.instance_count)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "transform3d".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 60.0,
            near: 1.0,
            far: 2000.0,
        }
    }
}

/// Demo selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Preset shown at startup
    pub preset: DemoPreset,
    /// Replaces the startup preset's stages when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<TransformStage>>,
    /// Radius of the instance ring
    pub orbit_radius: f32,
    /// Number of instances on the ring
    pub instance_count: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            preset: DemoPreset::Perspective,
            stages: None,
            orbit_radius: 200.0,
            instance_count: 5,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Translation speed (units per second)
    pub translation_speed: f32,
    /// Rotation speed (degrees per second)
    pub rotation_speed: f32,
    /// Scale speed (factor per second)
    pub scale_speed: f32,
    /// Field of view speed (degrees per second)
    pub fov_speed: f32,
    /// Orbit camera speed (degrees per second)
    pub camera_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            translation_speed: 200.0,
            rotation_speed: 90.0,
            scale_speed: 1.0,
            fov_speed: 30.0,
            camera_speed: 60.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Enable the depth test
    pub depth_test: bool,
    /// Cull back-facing triangles
    pub cull_back_faces: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.08, 1.0],
            depth_test: true,
            cull_back_faces: false,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
