//! Runtime configuration for the camera and viewport.

use crate::picking::{Camera, Vec3, Viewport};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Camera section of the configuration.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera position in world units.
    #[serde(default = "default_camera_position")]
    position: [f32; 3],

    /// Point the camera looks at.
    #[serde(default = "default_camera_target")]
    target: [f32; 3],

    /// Vertical field of view, in degrees.
    #[serde(default = "default_fov_y")]
    fov_y_degrees: f32,
}

fn default_camera_position() -> [f32; 3] {
    [0.0, 5.0, 5.0]
}

fn default_camera_target() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

fn default_fov_y() -> f32 {
    45.0
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: default_camera_position(),
            target: default_camera_target(),
            fov_y_degrees: default_fov_y(),
        }
    }
}

/// Viewport section of the configuration.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Initial width in pixels.
    #[serde(default = "default_viewport_width")]
    width: f32,

    /// Initial height in pixels.
    #[serde(default = "default_viewport_height")]
    height: f32,
}

fn default_viewport_width() -> f32 {
    800.0
}

fn default_viewport_height() -> f32 {
    600.0
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera pose and field of view.
    #[serde(default)]
    camera: CameraConfig,

    /// Initial viewport dimensions.
    #[serde(default)]
    viewport: ViewportConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!(path = %path.as_ref().display(), "loading config");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("config loaded");
        Ok(config)
    }

    /// Builds the camera described by this configuration.
    pub fn build_camera(&self) -> Camera {
        Camera::new(
            Vec3::from(self.camera.position),
            Vec3::from(self.camera.target),
            self.camera.fov_y_degrees,
            self.build_viewport().aspect(),
        )
    }

    /// Builds the initial viewport described by this configuration.
    pub fn build_viewport(&self) -> Viewport {
        Viewport::new(self.viewport.width, self.viewport.height)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
