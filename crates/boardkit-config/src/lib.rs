//! Configuration management for boardkit
//!
//! Handles the TOML configuration that tunes how the facade talks to the
//! vendor board services: model override, ethernet interface, screenshot
//! file names, vendor call flags and the log filter.

mod options;

pub use options::{DeviceConfig, DisplayConfig, HdmiTarget, InstallConfig, LoggingConfig, NetworkConfig};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Standard configuration paths
pub const CONFIG_DIR: &str = "/system/etc/boardkit";
pub const USER_CONFIG_DIR: &str = "/data/local/boardkit";

/// Main boardkit configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardKitConfig {
    #[serde(default)]
    pub device: DeviceConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub install: InstallConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BoardKitConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// The user file is layered over the system one; missing keys fall back
    /// to the built-in defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_layered(
            &Path::new(CONFIG_DIR).join("config.toml"),
            &Path::new(USER_CONFIG_DIR).join("config.toml"),
        )
    }

    /// Load `system`, then merge `user` on top; either may be missing
    pub fn load_layered(system: &Path, user: &Path) -> Result<Self, ConfigError> {
        let mut merged: Option<toml::Value> = None;

        for path in [system, user] {
            if !path.exists() {
                continue;
            }
            let contents = std::fs::read_to_string(path)?;
            let value = toml::Value::Table(toml::from_str::<toml::Table>(&contents)?);
            tracing::debug!("Loaded configuration layer {}", path.display());

            match merged.as_mut() {
                Some(base) => merge_toml(base, value),
                None => merged = Some(value),
            }
        }

        let Some(merged) = merged else {
            tracing::warn!("No configuration file found, using defaults");
            return Ok(Self::default());
        };

        let config: Self = merged.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        tracing::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject values the vendor services cannot accept
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.ethernet_interface.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "network.ethernet_interface must not be empty".into(),
            ));
        }
        if self.display.zc_screenshot_name.is_empty() || self.display.ys_screenshot_name.is_empty()
        {
            return Err(ConfigError::Invalid(
                "screenshot file names must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Model override from the config file, ignoring blank values
    pub fn model_override(&self) -> Option<&str> {
        self.device
            .model_override
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Helper function to merge TOML values
pub fn merge_toml(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(&key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key, value);
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
