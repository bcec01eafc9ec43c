//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`W4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
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
    /// 3. Environment variables (`W4D_*`)
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

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // W4D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("W4D_").split("__"));

        let config: AppConfig = figment.extract()?;
        config.input.validate()?;
        Ok(config)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
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
            title: "wire4d - 3D/4D Wireframe Viewer".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Which camera to start with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraKind {
    Orthographic,
    Perspective,
    Perspective4d,
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting camera
    pub kind: CameraKind,
    /// Starting position [x, y, z]
    pub start_position: [f32; 3],
    /// Starting rotation [pitch, yaw, roll] in radians
    pub start_rotation: [f32; 3],
    /// u position given to a 3D pose when switching to the 4D camera
    pub start_u: f32,
    /// Fourth rotation angle given when switching to the 4D camera
    pub start_u_rotation: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        use std::f32::consts::FRAC_PI_4;
        Self {
            kind: CameraKind::Perspective,
            start_position: [5.0, 5.0, 5.0],
            start_rotation: [FRAC_PI_4, -3.0 * FRAC_PI_4, 0.0],
            start_u: -5.0,
            start_u_rotation: 0.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Translation per frame while a movement key is held
    pub move_speed: f32,
    /// Radians per pixel of drag
    pub rot_speed: f32,
    /// Starting zoom
    pub zoom: f32,
    /// Smallest zoom the wheel reaches
    pub zoom_min: f32,
    /// Largest zoom the wheel reaches
    pub zoom_max: f32,
    /// Zoom change per wheel line
    pub zoom_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.1,
            rot_speed: 0.002,
            zoom: 500.0,
            zoom_min: 35.0,
            zoom_max: 1000.0,
            zoom_step: 25.0,
        }
    }
}

impl InputConfig {
    /// Reject zoom bounds the input state cannot clamp to
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [self.zoom_min, self.zoom_max];
        if bounds.iter().any(|b| !b.is_finite() || *b <= 0.0) {
            return Err(ConfigError::invalid(format!(
                "input.zoom_min and input.zoom_max must be positive, got {} and {}",
                self.zoom_min, self.zoom_max
            )));
        }
        if self.zoom_min > self.zoom_max {
            return Err(ConfigError::invalid(format!(
                "input.zoom_min ({}) is larger than input.zoom_max ({})",
                self.zoom_min, self.zoom_max
            )));
        }
        if !self.zoom.is_finite() || !self.zoom_step.is_finite() {
            return Err(ConfigError::invalid("input.zoom and input.zoom_step must be finite"));
        }
        Ok(())
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Plot points
    pub draw_points: bool,
    /// Stroke lines and polygon outlines
    pub draw_lines: bool,
    /// Fill polygons
    pub draw_polygons: bool,
    /// Skip points behind the camera
    pub crop: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let grey = 32.0 / 255.0;
        Self {
            background_color: [grey, grey, grey, 1.0],
            draw_points: true,
            draw_lines: true,
            draw_polygons: true,
            crop: true,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RON scene file loaded at startup; the selector object is used when empty
    pub path: String,
    /// Object selector entry shown when no scene file is given or it fails to load
    pub object: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            object: "Rot Toroid".to_string(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log the camera pose every this many frames; 0 disables it
    pub log_camera_every: u32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_camera_every: 0,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
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
