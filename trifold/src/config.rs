use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::ui::theme::ThemeChoice;

/// Errors emitted while reading or parsing the UI config.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
}

/// Geometry applied to open panels.
///
/// The page delegates styling of the `open` class to its surroundings;
/// these values are that collaborator expressed as data. Closed panels
/// always collapse to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PanelGeometry {
    pub(crate) left_width: f32,
    pub(crate) right_width: f32,
    pub(crate) bottom_height: f32,
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            left_width: 240.0,
            right_width: 240.0,
            bottom_height: 160.0,
        }
    }
}

/// Presentation-only configuration loaded at startup.
///
/// Open/closed panel state is deliberately absent: it never survives a
/// restart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct UiConfig {
    pub(crate) theme: ThemeChoice,
    pub(crate) panels: PanelGeometry,
}

/// Return the path to the UI config JSON file.
fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("trifold")
            .join("config.json");
    }
    std::env::temp_dir().join("trifold").join("config.json")
}

/// Load the UI config from disk. A missing file yields the defaults.
pub(crate) fn load_config() -> Result<UiConfig, ConfigError> {
    let path = config_path();
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(UiConfig::default());
        },
        Err(err) => return Err(err.into()),
    };
    let config: UiConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load the initial config, falling back to defaults on error.
pub(crate) fn load_initial_config() -> UiConfig {
    match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Failed to load UI config, using defaults: {err}");
            UiConfig::default()
        },
    }
}
