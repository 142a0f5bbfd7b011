//! Configuration management for Deskcalc

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Event-loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long the "Error" sentinel stays on screen, in milliseconds
    #[serde(default = "default_error_clear_ms")]
    pub error_clear_ms: u64,

    /// Use colors in the TUI (also disabled by the NO_COLOR env var)
    #[serde(default = "default_colors")]
    pub colors: bool,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_error_clear_ms() -> u64 {
    900
}

fn default_colors() -> bool {
    true
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            error_clear_ms: default_error_clear_ms(),
            colors: default_colors(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("DESKCALC_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("deskcalc").join("config.toml"))
}
