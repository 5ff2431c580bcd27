//! This module handles persisted surface settings: loading and saving the
//! transition presentation preferences to a TOML file chosen by the host.
//!
//! # Examples
//!
//! ```no_run
//! use popover_menu::config;
//! use std::path::Path;
//!
//! let mut config = config::load_from_path(Path::new("menu.toml")).unwrap_or_default();
//! config.transition_duration_ms = Some(150);
//! config::save_to_path(&config, Path::new("menu.toml")).expect("Failed to save config");
//!
//! let settings = config.settings();
//! assert_eq!(settings.duration_ms, 150);
//! ```

use crate::error::Result;
use crate::transition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Persisted presentation preferences. Every field is optional; absent
/// fields fall back to the [`transition::Settings`] defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub transition: Option<transition::Kind>,
    #[serde(default)]
    pub transition_duration_ms: Option<u64>,
    #[serde(default)]
    pub interpolate_size: Option<bool>,
    #[serde(default)]
    pub vertically_homogeneous: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = transition::Settings::default();
        Self {
            transition: Some(defaults.kind),
            transition_duration_ms: Some(defaults.duration_ms),
            interpolate_size: Some(defaults.interpolate_size),
            vertically_homogeneous: Some(defaults.vertically_homogeneous),
        }
    }
}

impl Config {
    /// Resolves the configuration into concrete transition settings,
    /// filling absent fields with the defaults.
    #[must_use]
    pub fn settings(&self) -> transition::Settings {
        let defaults = transition::Settings::default();
        transition::Settings {
            kind: self.transition.unwrap_or(defaults.kind),
            duration_ms: self.transition_duration_ms.unwrap_or(defaults.duration_ms),
            interpolate_size: self.interpolate_size.unwrap_or(defaults.interpolate_size),
            vertically_homogeneous: self
                .vertically_homogeneous
                .unwrap_or(defaults.vertically_homogeneous),
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
