//! Application Configuration
//!
//! User settings and preferences stored in TOML format.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::overlay::image::{
    clamp_size, ImageLimit, DEFAULT_IMAGE_SIZE_PERCENT, DEFAULT_MAX_IMAGES,
};

/// File name of the configuration inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Preview canvas settings
    pub preview: PreviewConfig,
    /// Image overlay settings
    pub images: ImagesConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
    /// Overlay URL copied by the navbar button
    pub overlay_url: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            window_width: 1400.0,
            window_height: 900.0,
            overlay_url: "https://overlay.example.com/stream/123456".to_string(),
        }
    }
}

/// Preview canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Logical canvas width overlays are laid out on
    pub canvas_width: f32,
    /// Logical canvas height overlays are laid out on
    pub canvas_height: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            canvas_width: 640.0,
            canvas_height: 360.0,
        }
    }
}

impl PreviewConfig {
    pub fn logical_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width.max(1.0), self.canvas_height.max(1.0))
    }
}

/// Image overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Number of images the overlay holds
    pub max_images: usize,
    /// Reject images past `max_images` instead of only warning
    pub enforce_limit: bool,
    /// Initial value of the image size slider (10 - 200)
    pub default_size_percent: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            max_images: DEFAULT_MAX_IMAGES,
            enforce_limit: true,
            default_size_percent: DEFAULT_IMAGE_SIZE_PERCENT,
        }
    }
}

impl ImagesConfig {
    pub fn limit(&self) -> ImageLimit {
        ImageLimit {
            max_images: self.max_images,
            enforce: self.enforce_limit,
        }
    }

    pub fn default_size(&self) -> u32 {
        clamp_size(self.default_size_percent)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set, e.g. "info" or "overlay_studio=debug"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Load configuration, falling back to defaults when the file is missing or invalid
pub fn load_or_default(path: &Path) -> AppConfig {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return AppConfig::default();
    }
    match load_config(path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("{:#}; using defaults", e);
            AppConfig::default()
        }
    }
}

/// Default configuration file location
pub fn default_config_path() -> Result<PathBuf> {
    Ok(crate::storage::get_config_dir()?.join(CONFIG_FILE_NAME))
}
