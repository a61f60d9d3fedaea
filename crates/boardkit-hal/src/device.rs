//! Host device properties
//!
//! Reads the model string and Android build information the facade needs.
//! On Android these come from system properties; on other hosts the device
//! tree model is used instead.

use serde::Serialize;
use std::fs;
use std::process::Command;

/// Environment variable that overrides the detected model
pub const MODEL_ENV: &str = "BOARDKIT_MODEL";

/// Properties of the host device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceProperties {
    /// Device model, e.g. `ZC-3288` (may be empty)
    pub model: String,
    /// Android release, e.g. `11`
    pub android_release: Option<String>,
    /// Android SDK level
    pub sdk_int: Option<u32>,
}

impl DeviceProperties {
    /// Properties with only a model string
    pub fn from_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Read the properties of the running device
    pub fn detect() -> Self {
        let model = std::env::var(MODEL_ENV)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| getprop("ro.product.model"))
            .or_else(|| read_device_tree_string("/proc/device-tree/model"))
            .or_else(|| read_device_tree_string("/sys/firmware/devicetree/base/model"))
            .unwrap_or_default();

        let android_release = getprop("ro.build.version.release");
        let sdk_int = getprop("ro.build.version.sdk").and_then(|s| s.parse().ok());

        tracing::debug!(%model, ?android_release, ?sdk_int, "Read device properties");

        Self {
            model,
            android_release,
            sdk_int,
        }
    }

    /// Replace the model when an override is present
    pub fn with_model_override(mut self, model: Option<&str>) -> Self {
        if let Some(model) = model {
            tracing::info!("Model overridden: {} -> {}", self.model, model);
            self.model = model.to_string();
        }
        self
    }
}

/// Read one Android system property
fn getprop(key: &str) -> Option<String> {
    let output = Command::new("getprop").arg(key).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Read a null-terminated string from device tree
fn read_device_tree_string(path: &str) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    let s = String::from_utf8_lossy(&bytes);
    let value = s.trim_matches('\0').trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Combined device report
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceInfo {
    pub model: String,
    pub board_type: String,
    pub android_version: Option<String>,
    pub api_level: Option<u32>,
    pub board_model: Option<String>,
    pub serial_number: Option<String>,
    pub api_version: Option<String>,
    pub firmware_version: Option<String>,
    pub memory_size: Option<String>,
    pub storage_size: Option<String>,
}

impl DeviceInfo {
    /// Labelled entries in display order
    pub fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("Device model", Some(self.model.clone())),
            ("Board type", Some(self.board_type.clone())),
            ("Android version", self.android_version.clone()),
            ("API level", self.api_level.map(|l| l.to_string())),
            ("Board model", self.board_model.clone()),
            ("Serial number", self.serial_number.clone()),
            ("API version", self.api_version.clone()),
            ("Firmware version", self.firmware_version.clone()),
            ("Memory size", self.memory_size.clone()),
            ("Storage size", self.storage_size.clone()),
        ]
    }
}
