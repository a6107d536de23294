//! User settings.
//!
//! Settings are read from `settings.json` in the platform config directory (for example
//! `~/.config/gsgl/settings.json` on Linux). Every field is optional; anything missing takes its
//! default value, and a missing or broken file falls back to the defaults entirely.

use std::path::{Path, PathBuf};

use glam::Vec3;
use gsgl_core::{Camera, Projection};
use serde::{Deserialize, Serialize};

/// Window creation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Starting pose, controls and lens of the camera demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub sensitivity: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        let camera = Camera::default();
        let projection = Projection::default();
        Self {
            position: camera.position().to_array(),
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            movement_speed: camera.movement_speed(),
            sensitivity: camera.sensitivity(),
            fov: projection.fov,
            near: projection.near,
            far: projection.far,
        }
    }
}

impl CameraSettings {
    /// Builds a fresh camera from these settings.
    pub fn camera(&self) -> Camera {
        Camera::new(Vec3::from_array(self.position), self.yaw, self.pitch)
            .with_movement_speed(self.movement_speed)
            .with_sensitivity(self.sensitivity)
    }

    pub fn projection(&self) -> Projection {
        Projection {
            fov: self.fov,
            near: self.near,
            far: self.far,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    /// Directory the demo textures are loaded from.
    pub assets_dir: PathBuf,
    pub log_level: String,
    /// Extra log destination besides stdout.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            camera: CameraSettings::default(),
            assets_dir: PathBuf::from("assets"),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Where the active settings came from. Reported once logging is up.
#[derive(Debug)]
pub enum SettingsSource {
    File(PathBuf),
    Missing(Option<PathBuf>),
    Invalid(PathBuf, String),
}

impl SettingsSource {
    pub fn report(&self) {
        match self {
            SettingsSource::File(path) => log::info!("Loaded settings from {}", path.display()),
            SettingsSource::Missing(Some(path)) => {
                log::info!("No settings at {}, using defaults", path.display())
            }
            SettingsSource::Missing(None) => {
                log::info!("No config directory on this platform, using default settings")
            }
            SettingsSource::Invalid(path, e) => {
                log::warn!("Ignoring settings at {}: {e}", path.display())
            }
        }
    }
}

impl Settings {
    /// The settings file location, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gsgl").join("settings.json"))
    }

    pub fn from_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }

    /// Reads and parses the settings file at `path`.
    pub fn load(path: &Path) -> Result<Self, String> {
        let s = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::from_json(&s)
    }

    /// Loads the user's settings, falling back to the defaults when there are none or they
    /// cannot be read.
    pub fn resolve() -> (Self, SettingsSource) {
        let Some(path) = Self::path() else {
            return (Self::default(), SettingsSource::Missing(None));
        };
        if !path.exists() {
            return (Self::default(), SettingsSource::Missing(Some(path)));
        }
        match Self::load(&path) {
            Ok(settings) => (settings, SettingsSource::File(path)),
            Err(e) => (Self::default(), SettingsSource::Invalid(path, e)),
        }
    }

    /// The configured log level, if `log_level` names one.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        self.log_level.parse().ok()
    }
}
