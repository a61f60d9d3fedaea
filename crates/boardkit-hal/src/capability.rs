//! Capability table
//!
//! Every facade operation is listed here together with the backends that
//! implement it, what the facade returns when the active backend does not,
//! and what happens when the vendor call itself fails.

use crate::board::{Backend, Board};
use serde::Serialize;
use std::fmt;

/// Result substituted when the active backend lacks an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fallback {
    /// Every backend implements the operation
    Always,
    /// Getter returns `None`
    Null,
    /// Boolean action returns `false`
    False,
    /// Fire-and-forget action logs a warning and does nothing
    Warn,
    /// Operation is too destructive to skip silently
    Fail,
}

/// Handling of a failure reported by the vendor service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailurePolicy {
    /// Return the vendor error to the caller
    Propagate,
    /// Report the failure as a `false` result
    NormalizeToFalse,
}

/// Operations exposed by [`crate::BoardKit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    Reboot,
    Shutdown,
    DeviceModel,
    SerialNumber,
    ApiVersion,
    FirmwareVersion,
    MemorySize,
    StorageSize,
    AndroidVersion,
    CpuTemperature,
    FactoryReset,
    OtaUpdate,
    FirmwareUpgrade,
    Screenshot,
    ScreenRotation,
    Backlight,
    BacklightState,
    HdmiOutput,
    HdmiStatus,
    NavigationBar,
    NavigationBarState,
    StatusBar,
    StatusBarState,
    SlideNavigationBar,
    SlideNavigationBarState,
    SlideNotificationBar,
    SlideNotificationBarState,
    ScreenBrightness,
    SilentInstall,
    SilentUninstall,
    EthernetDhcp,
    EthernetStaticIp,
    EthernetMacAddress,
    EthernetToggle,
    WeeklyPowerSchedule,
    OneTimePowerSchedule,
    ClearPowerSchedule,
    GpioDirection,
    GpioWrite,
    GpioRead,
    SuCommand,
    SystemTime,
    AutoStartApp,
    DaemonApp,
    DefaultLauncher,
    SystemLanguage,
    DefaultInputMethod,
    Watchdog,
}

impl Capability {
    /// Stable snake_case name, used in logs and reports
    pub fn name(&self) -> &'static str {
        use Capability::*;
        match self {
            Reboot => "reboot",
            Shutdown => "shutdown",
            DeviceModel => "device_model",
            SerialNumber => "serial_number",
            ApiVersion => "api_version",
            FirmwareVersion => "firmware_version",
            MemorySize => "memory_size",
            StorageSize => "storage_size",
            AndroidVersion => "android_version",
            CpuTemperature => "cpu_temperature",
            FactoryReset => "factory_reset",
            OtaUpdate => "ota_update",
            FirmwareUpgrade => "firmware_upgrade",
            Screenshot => "screenshot",
            ScreenRotation => "screen_rotation",
            Backlight => "backlight",
            BacklightState => "backlight_state",
            HdmiOutput => "hdmi_output",
            HdmiStatus => "hdmi_status",
            NavigationBar => "navigation_bar",
            NavigationBarState => "navigation_bar_state",
            StatusBar => "status_bar",
            StatusBarState => "status_bar_state",
            SlideNavigationBar => "slide_navigation_bar",
            SlideNavigationBarState => "slide_navigation_bar_state",
            SlideNotificationBar => "slide_notification_bar",
            SlideNotificationBarState => "slide_notification_bar_state",
            ScreenBrightness => "screen_brightness",
            SilentInstall => "silent_install",
            SilentUninstall => "silent_uninstall",
            EthernetDhcp => "ethernet_dhcp",
            EthernetStaticIp => "ethernet_static_ip",
            EthernetMacAddress => "ethernet_mac_address",
            EthernetToggle => "ethernet_toggle",
            WeeklyPowerSchedule => "weekly_power_schedule",
            OneTimePowerSchedule => "one_time_power_schedule",
            ClearPowerSchedule => "clear_power_schedule",
            GpioDirection => "gpio_direction",
            GpioWrite => "gpio_write",
            GpioRead => "gpio_read",
            SuCommand => "su_command",
            SystemTime => "system_time",
            AutoStartApp => "auto_start_app",
            DaemonApp => "daemon_app",
            DefaultLauncher => "default_launcher",
            SystemLanguage => "system_language",
            DefaultInputMethod => "default_input_method",
            Watchdog => "watchdog",
        }
    }

    /// Whether a backend implements this operation
    pub fn supported_by(&self, backend: Backend) -> bool {
        use Capability::*;
        match self {
            // Broadcast-only boards still reboot and shut down; Android
            // version falls back to the host property everywhere.
            Reboot | Shutdown | AndroidVersion => true,

            DeviceModel | SerialNumber | FactoryReset | Screenshot | Backlight | HdmiOutput
            | NavigationBar | StatusBar | SilentInstall | EthernetDhcp | EthernetStaticIp
            | EthernetMacAddress | OneTimePowerSchedule | GpioDirection | GpioWrite | GpioRead
            | SuCommand | SystemTime => matches!(backend, Backend::Ys | Backend::Zc),

            OtaUpdate | Watchdog => backend == Backend::Zc,

            ApiVersion | FirmwareVersion | MemorySize | StorageSize | CpuTemperature
            | FirmwareUpgrade | ScreenRotation | BacklightState | HdmiStatus
            | NavigationBarState | StatusBarState | SlideNavigationBar
            | SlideNavigationBarState | SlideNotificationBar | SlideNotificationBarState
            | ScreenBrightness | SilentUninstall | EthernetToggle | WeeklyPowerSchedule
            | ClearPowerSchedule | AutoStartApp | DaemonApp | DefaultLauncher | SystemLanguage
            | DefaultInputMethod => backend == Backend::Ys,
        }
    }

    /// What the facade returns when the active backend lacks this operation
    pub fn fallback(&self) -> Fallback {
        use Capability::*;
        match self {
            Reboot | Shutdown | AndroidVersion => Fallback::Always,

            FactoryReset | OtaUpdate => Fallback::Fail,

            DeviceModel | SerialNumber | ApiVersion | FirmwareVersion | MemorySize
            | StorageSize | CpuTemperature | BacklightState | HdmiStatus
            | NavigationBarState | StatusBarState | SlideNavigationBarState
            | SlideNotificationBarState | EthernetMacAddress | GpioRead => Fallback::Null,

            Screenshot | SilentInstall | SilentUninstall | GpioDirection | GpioWrite
            | DefaultInputMethod => Fallback::False,

            FirmwareUpgrade | ScreenRotation | Backlight | HdmiOutput
            | NavigationBar | StatusBar | SlideNavigationBar | SlideNotificationBar
            | ScreenBrightness | EthernetDhcp | EthernetStaticIp | EthernetToggle
            | WeeklyPowerSchedule | OneTimePowerSchedule | ClearPowerSchedule | SuCommand
            | SystemTime | AutoStartApp | DaemonApp | DefaultLauncher | SystemLanguage
            | Watchdog => Fallback::Warn,
        }
    }

    /// What happens when the vendor reports a failure for this operation
    pub fn failure_policy(&self) -> FailurePolicy {
        match self {
            Capability::SilentUninstall => FailurePolicy::NormalizeToFalse,
            _ => FailurePolicy::Propagate,
        }
    }

    /// All capabilities in declaration order
    pub fn all() -> &'static [Capability] {
        use Capability::*;
        &[
            Reboot,
            Shutdown,
            DeviceModel,
            SerialNumber,
            ApiVersion,
            FirmwareVersion,
            MemorySize,
            StorageSize,
            AndroidVersion,
            CpuTemperature,
            FactoryReset,
            OtaUpdate,
            FirmwareUpgrade,
            Screenshot,
            ScreenRotation,
            Backlight,
            BacklightState,
            HdmiOutput,
            HdmiStatus,
            NavigationBar,
            NavigationBarState,
            StatusBar,
            StatusBarState,
            SlideNavigationBar,
            SlideNavigationBarState,
            SlideNotificationBar,
            SlideNotificationBarState,
            ScreenBrightness,
            SilentInstall,
            SilentUninstall,
            EthernetDhcp,
            EthernetStaticIp,
            EthernetMacAddress,
            EthernetToggle,
            WeeklyPowerSchedule,
            OneTimePowerSchedule,
            ClearPowerSchedule,
            GpioDirection,
            GpioWrite,
            GpioRead,
            SuCommand,
            SystemTime,
            AutoStartApp,
            DaemonApp,
            DefaultLauncher,
            SystemLanguage,
            DefaultInputMethod,
            Watchdog,
        ]
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the facade performs a capability on this board
pub fn supports(board: Board, capability: Capability) -> bool {
    capability.supported_by(board.backend())
}

/// Hardware control on unrecognized models is unverified, so the control
/// queries below answer `false` for them.
fn supports_verified(board: Board, capability: Capability) -> bool {
    board.is_recognized() && supports(board, capability)
}

/// Capabilities advertised by a board
pub fn supported_capabilities(board: Board) -> Vec<Capability> {
    Capability::all()
        .iter()
        .copied()
        .filter(|c| supports(board, *c))
        .collect()
}

pub fn supports_gpio_control(board: Board) -> bool {
    [
        Capability::GpioDirection,
        Capability::GpioWrite,
        Capability::GpioRead,
    ]
    .into_iter()
    .all(|c| supports_verified(board, c))
}

pub fn supports_navigation_bar_control(board: Board) -> bool {
    supports_verified(board, Capability::NavigationBar)
}

pub fn supports_status_bar_control(board: Board) -> bool {
    supports_verified(board, Capability::StatusBar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everyone_reboots() {
        for backend in [Backend::Ys, Backend::Zc, Backend::LangGuo] {
            assert!(Capability::Reboot.supported_by(backend));
            assert!(Capability::Shutdown.supported_by(backend));
        }
    }

    #[test]
    fn test_langguo_is_reboot_only() {
        let supported = supported_capabilities(Board::LangGuo);
        assert_eq!(
            supported,
            vec![
                Capability::Reboot,
                Capability::Shutdown,
                Capability::AndroidVersion
            ]
        );
    }

    #[test]
    fn test_destructive_operations_fail() {
        let failing: Vec<_> = Capability::all()
            .iter()
            .filter(|c| c.fallback() == Fallback::Fail)
            .collect();
        assert_eq!(failing, [&Capability::FactoryReset, &Capability::OtaUpdate]);
    }

    #[test]
    fn test_only_uninstall_normalizes_failures() {
        for capability in Capability::all() {
            let expected = if *capability == Capability::SilentUninstall {
                FailurePolicy::NormalizeToFalse
            } else {
                FailurePolicy::Propagate
            };
            assert_eq!(capability.failure_policy(), expected, "{capability}");
        }
    }

    #[test]
    fn test_zc_only_operations() {
        assert!(Capability::OtaUpdate.supported_by(Backend::Zc));
        assert!(!Capability::OtaUpdate.supported_by(Backend::Ys));
        assert!(Capability::Watchdog.supported_by(Backend::Zc));
        assert!(!Capability::Watchdog.supported_by(Backend::Ys));
    }

    #[test]
    fn test_capability_queries() {
        assert!(supports_gpio_control(Board::Ys));
        assert!(supports_gpio_control(Board::Zc));
        assert!(!supports_gpio_control(Board::LangGuo));
        assert!(!supports_gpio_control(Board::Unknown));

        assert!(supports_navigation_bar_control(Board::Zc));
        assert!(!supports_navigation_bar_control(Board::Unknown));
        assert!(supports_status_bar_control(Board::Ys));
        assert!(!supports_status_bar_control(Board::LangGuo));
    }

    #[test]
    fn test_always_means_every_backend() {
        for capability in Capability::all() {
            let everywhere = [Backend::Ys, Backend::Zc, Backend::LangGuo]
                .into_iter()
                .all(|b| capability.supported_by(b));
            assert_eq!(
                capability.fallback() == Fallback::Always,
                everywhere,
                "{capability}"
            );
        }
    }

    #[test]
    fn test_unknown_board_runs_yisheng_operations() {
        assert!(supports(Board::Unknown, Capability::Reboot));
        assert!(supports(Board::Unknown, Capability::Shutdown));
        assert!(supports(Board::Unknown, Capability::Screenshot));
        assert!(!supports(Board::Unknown, Capability::Watchdog));
        assert_eq!(
            supported_capabilities(Board::Unknown),
            supported_capabilities(Board::Ys)
        );
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Capability::all().iter().map(|c| c.name()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
