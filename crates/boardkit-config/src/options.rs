//! Configuration sections

use serde::{Deserialize, Serialize};

/// Device detection settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Use this model string instead of the one reported by the system
    #[serde(default)]
    pub model_override: Option<String>,
}

/// Ethernet settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Interface passed to services that address ethernet by name
    #[serde(default = "default_interface")]
    pub ethernet_interface: String,
}

fn default_interface() -> String {
    "eth0".to_string()
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ethernet_interface: default_interface(),
        }
    }
}

/// Which outputs a Zhuoce HDMI toggle drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HdmiTarget {
    /// Only the LCD backlight
    LcdOnly,
    /// HDMI and the LCD backlight together
    LcdAndHdmi,
    /// Only HDMI
    #[default]
    HdmiOnly,
}

impl HdmiTarget {
    /// Value of the `lcdOrHdmi` argument understood by the Zhuoce service
    pub fn vendor_code(self) -> i32 {
        match self {
            HdmiTarget::LcdOnly => 0,
            HdmiTarget::LcdAndHdmi => 1,
            HdmiTarget::HdmiOnly => -1,
        }
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Screenshot file name used on Zhuoce boards when none is given
    #[serde(default = "default_zc_screenshot")]
    pub zc_screenshot_name: String,
    /// Screenshot file name used on Yisheng boards when none is given
    #[serde(default = "default_ys_screenshot")]
    pub ys_screenshot_name: String,
    #[serde(default)]
    pub hdmi_target: HdmiTarget,
}

fn default_zc_screenshot() -> String {
    "screenshot.png".to_string()
}

fn default_ys_screenshot() -> String {
    "screenshot.jpg".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zc_screenshot_name: default_zc_screenshot(),
            ys_screenshot_name: default_ys_screenshot(),
            hdmi_target: HdmiTarget::default(),
        }
    }
}

/// APK installation flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Install with elevated rights on Zhuoce boards
    #[serde(default = "default_true")]
    pub zc_silent_mode: bool,
    /// Launch the app once a Yisheng silent install completes
    #[serde(default = "default_true")]
    pub ys_launch_after_install: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            zc_silent_mode: true,
            ys_launch_after_install: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}
