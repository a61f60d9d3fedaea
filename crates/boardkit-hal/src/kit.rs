//! Unified board control facade
//!
//! [`BoardKit`] picks the backend once, from the device model, and forwards
//! every call to it. Operations the active backend lacks return the fallback
//! declared in [`crate::capability`]: `None`, `false`, a logged no-op, or
//! [`KitError::Unsupported`] for factory reset and OTA update.
//!
//! Calls are synchronous and unsynchronized; whether the vendor services
//! tolerate concurrent use from several threads is up to the vendor.

use crate::board::{self, Backend, Board};
use crate::capability::{Capability, FailurePolicy, Fallback};
use crate::device::{DeviceInfo, DeviceProperties};
use crate::display::Rotation;
use crate::gpio::{GpioDirection, GpioLevel, GpioPin};
use crate::langguo::LangGuoBoard;
use crate::network::StaticIpConfig;
use crate::power::{OneTimeSchedule, WeeklySchedule};
use crate::system::GuardInterval;
use crate::vendor::{ServiceProvider, VendorError, VendorResult};
use crate::ys::YsBoard;
use crate::zc::ZcBoard;
use boardkit_config::BoardKitConfig;
use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum KitError {
    #[error("{operation} is not supported on {board}")]
    Unsupported { operation: Capability, board: Board },

    #[error("Pin {pin} cannot be addressed on the {backend} backend")]
    InvalidPin { pin: GpioPin, backend: Backend },

    #[error(transparent)]
    Vendor(#[from] VendorError),
}

/// The adapter owned by a facade
pub enum ActiveBoard {
    Ys(YsBoard),
    Zc(ZcBoard),
    LangGuo(LangGuoBoard),
}

impl ActiveBoard {
    pub fn backend(&self) -> Backend {
        match self {
            ActiveBoard::Ys(_) => Backend::Ys,
            ActiveBoard::Zc(_) => Backend::Zc,
            ActiveBoard::LangGuo(_) => Backend::LangGuo,
        }
    }
}

/// Unified board control facade
pub struct BoardKit {
    board: Board,
    properties: DeviceProperties,
    config: BoardKitConfig,
    active: ActiveBoard,
}

impl BoardKit {
    /// Select the backend for `properties.model` and connect to it.
    ///
    /// The Yisheng service is bound before this returns.
    pub fn create(
        provider: &dyn ServiceProvider,
        properties: DeviceProperties,
        config: &BoardKitConfig,
    ) -> crate::Result<Self> {
        let board = board::select(&properties.model);
        let model = properties.model.to_uppercase();

        let active = match board {
            Board::Zc => {
                info!("Using Zhuoce board service, model: {}", model);
                ActiveBoard::Zc(ZcBoard::new(provider.zc()?))
            }
            Board::LangGuo => {
                info!("Using LangGuo board service, model: {}", model);
                ActiveBoard::LangGuo(LangGuoBoard::new(provider.langguo()?))
            }
            Board::Ys | Board::Unknown => {
                if board == Board::Ys {
                    info!("Using Yisheng board service, model: {}", model);
                } else {
                    info!("Using default Yisheng board service, model: {}", model);
                }
                let ys = YsBoard::new(provider.ys()?);
                ys.bind()?;
                ActiveBoard::Ys(ys)
            }
        };

        Ok(Self {
            board,
            properties,
            config: config.clone(),
            active,
        })
    }

    /// [`BoardKit::create`], logging the board type once ready
    pub fn create_with_validation(
        provider: &dyn ServiceProvider,
        properties: DeviceProperties,
        config: &BoardKitConfig,
    ) -> crate::Result<Self> {
        let kit = Self::create(provider, properties, config)?;
        debug!("BoardKit initialized, board type: {}", kit.board.board_type());
        Ok(kit)
    }

    /// Board identity chosen at construction
    pub fn board(&self) -> Board {
        self.board
    }

    /// The adapter in use, for vendor-specific calls
    pub fn active(&self) -> &ActiveBoard {
        &self.active
    }

    pub fn properties(&self) -> &DeviceProperties {
        &self.properties
    }

    /// Description of the running service
    pub fn service_info(&self) -> &'static str {
        match self.active {
            ActiveBoard::Zc(_) => "Zhuoce board service v2.x",
            ActiveBoard::Ys(_) => "Yisheng board service",
            ActiveBoard::LangGuo(_) => "LangGuo board service",
        }
    }

    /// Release the backend connection; unbinds the Yisheng service
    pub fn release(self) -> crate::Result<()> {
        match self.active {
            ActiveBoard::Ys(ys) => {
                ys.unbind()?;
                info!("Released Yisheng board service");
            }
            ActiveBoard::Zc(_) | ActiveBoard::LangGuo(_) => {
                debug!("Nothing to release for {}", self.board);
            }
        }
        Ok(())
    }

    fn unsupported_warn(&self, capability: Capability) {
        debug_assert_eq!(capability.fallback(), Fallback::Warn, "{capability}");
        warn!(
            "{} does not support {}, ignoring",
            self.board.board_type(),
            capability
        );
    }

    fn unsupported_error(&self, capability: Capability) -> KitError {
        debug_assert_eq!(capability.fallback(), Fallback::Fail, "{capability}");
        KitError::Unsupported {
            operation: capability,
            board: self.board,
        }
    }

    fn apply_policy(&self, capability: Capability, result: VendorResult<bool>) -> crate::Result<bool> {
        match capability.failure_policy() {
            FailurePolicy::Propagate => Ok(result?),
            FailurePolicy::NormalizeToFalse => Ok(result.unwrap_or_else(|e| {
                debug!("{} failed, reporting false: {}", capability, e);
                false
            })),
        }
    }

    // ========== System control ==========

    pub fn reboot(&self) -> crate::Result<()> {
        let result = match &self.active {
            ActiveBoard::Ys(ys) => ys.reboot(),
            ActiveBoard::Zc(zc) => zc.reboot(),
            ActiveBoard::LangGuo(lg) => lg.reboot(),
        };
        Ok(result.inspect_err(|e| error!("Reboot failed: {}", e))?)
    }

    pub fn shutdown(&self) -> crate::Result<()> {
        let result = match &self.active {
            ActiveBoard::Ys(ys) => ys.shutdown(),
            ActiveBoard::Zc(zc) => zc.shutdown(),
            ActiveBoard::LangGuo(lg) => lg.shutdown(),
        };
        Ok(result.inspect_err(|e| error!("Shutdown failed: {}", e))?)
    }

    /// Reboot, logging progress; failures are returned unchanged
    pub fn safe_reboot(&self) -> crate::Result<()> {
        info!("Starting safe reboot");
        self.reboot()?;
        info!("Reboot command sent");
        Ok(())
    }

    /// Shut down, logging progress; failures are returned unchanged
    pub fn safe_shutdown(&self) -> crate::Result<()> {
        info!("Starting safe shutdown");
        self.shutdown()?;
        info!("Shutdown command sent");
        Ok(())
    }

    /// Factory reset (Zhuoce) or reboot into recovery (Yisheng)
    pub fn factory_reset(&self) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Zc(zc) => Ok(zc.factory_reset()?),
            ActiveBoard::Ys(ys) => Ok(ys.reboot_recovery()?),
            ActiveBoard::LangGuo(_) => Err(self.unsupported_error(Capability::FactoryReset)),
        }
    }

    pub fn update_ota(&self) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Zc(zc) => Ok(zc.update_ota()?),
            _ => Err(self.unsupported_error(Capability::OtaUpdate)),
        }
    }

    /// Flash a firmware image
    pub fn upgrade_system(&self, update_path: &str) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.upgrade_system(update_path)?,
            _ => self.unsupported_warn(Capability::FirmwareUpgrade),
        }
        Ok(())
    }

    // ========== Device information ==========

    pub fn device_model(&self) -> crate::Result<Option<String>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.device_model()?),
            ActiveBoard::Zc(zc) => Some(zc.device_model()?),
            ActiveBoard::LangGuo(_) => None,
        })
    }

    pub fn serial_number(&self) -> crate::Result<Option<String>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.serial_number()?),
            ActiveBoard::Zc(zc) => Some(zc.serial_number()?),
            ActiveBoard::LangGuo(_) => None,
        })
    }

    pub fn api_version(&self) -> crate::Result<Option<String>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.api_version()?),
            _ => None,
        })
    }

    pub fn firmware_version(&self) -> crate::Result<Option<String>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.firmware_version()?),
            _ => None,
        })
    }

    pub fn memory_size(&self) -> crate::Result<Option<String>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.memory_size()?),
            _ => None,
        })
    }

    pub fn storage_size(&self) -> crate::Result<Option<String>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.storage_size()?),
            _ => None,
        })
    }

    /// Android release from the vendor service, else from the host
    pub fn android_version(&self) -> crate::Result<Option<String>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.android_version()?),
            _ => self.properties.android_release.clone(),
        })
    }

    pub fn cpu_temperature(&self) -> crate::Result<Option<String>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.cpu_temperature()?),
            _ => None,
        })
    }

    /// Gather every info getter into one report; the Android version is the
    /// host release, not the vendor's
    pub fn device_info(&self) -> crate::Result<DeviceInfo> {
        Ok(DeviceInfo {
            model: self.properties.model.clone(),
            board_type: self.board.board_type().to_string(),
            android_version: self.properties.android_release.clone(),
            api_level: self.properties.sdk_int,
            board_model: self.device_model()?,
            serial_number: self.serial_number()?,
            api_version: self.api_version()?,
            firmware_version: self.firmware_version()?,
            memory_size: self.memory_size()?,
            storage_size: self.storage_size()?,
        })
    }

    // ========== Display ==========

    /// Screenshot into `dir`, using the configured file name when none is given
    pub fn take_screenshot(&self, dir: &str, file_name: Option<&str>) -> crate::Result<bool> {
        let display = &self.config.display;
        match &self.active {
            ActiveBoard::Zc(zc) => {
                zc.screenshot(dir, file_name.unwrap_or(&display.zc_screenshot_name))?;
                Ok(true)
            }
            ActiveBoard::Ys(ys) => {
                Ok(ys.take_screenshot(dir, file_name.unwrap_or(&display.ys_screenshot_name))?)
            }
            ActiveBoard::LangGuo(_) => Ok(false),
        }
    }

    pub fn rotate_screen(&self, rotation: Rotation) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.rotate_screen(rotation)?,
            _ => self.unsupported_warn(Capability::ScreenRotation),
        }
        Ok(())
    }

    pub fn set_backlight(&self, enabled: bool) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_backlight(enabled)?,
            ActiveBoard::Zc(zc) => zc.set_lcd(enabled)?,
            ActiveBoard::LangGuo(_) => self.unsupported_warn(Capability::Backlight),
        }
        Ok(())
    }

    pub fn is_backlight_on(&self) -> crate::Result<Option<bool>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.is_backlight_on()?),
            _ => None,
        })
    }

    pub fn set_hdmi_output(&self, enabled: bool) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_hdmi_output(enabled)?,
            ActiveBoard::Zc(zc) => zc.set_hdmi(enabled, self.config.display.hdmi_target)?,
            ActiveBoard::LangGuo(_) => self.unsupported_warn(Capability::HdmiOutput),
        }
        Ok(())
    }

    pub fn hdmi_status(&self) -> crate::Result<Option<bool>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.hdmi_in_status()?),
            _ => None,
        })
    }

    pub fn set_navigation_bar_visible(&self, visible: bool) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_navigation_bar_visible(visible)?,
            ActiveBoard::Zc(zc) => zc.set_system_bars(visible)?,
            ActiveBoard::LangGuo(_) => self.unsupported_warn(Capability::NavigationBar),
        }
        Ok(())
    }

    pub fn navigation_bar_visible(&self) -> crate::Result<Option<bool>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.navigation_bar_visible()?),
            _ => None,
        })
    }

    pub fn set_status_bar_visible(&self, visible: bool) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_status_bar_visible(visible)?,
            ActiveBoard::Zc(zc) => zc.set_system_bars(visible)?,
            ActiveBoard::LangGuo(_) => self.unsupported_warn(Capability::StatusBar),
        }
        Ok(())
    }

    pub fn status_bar_visible(&self) -> crate::Result<Option<bool>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.status_bar_visible()?),
            _ => None,
        })
    }

    pub fn set_slide_navigation_bar(&self, enabled: bool) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_slide_navigation_bar(enabled)?,
            _ => self.unsupported_warn(Capability::SlideNavigationBar),
        }
        Ok(())
    }

    pub fn slide_navigation_bar_enabled(&self) -> crate::Result<Option<bool>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.slide_navigation_bar_enabled()?),
            _ => None,
        })
    }

    pub fn set_slide_notification_bar(&self, enabled: bool) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_slide_notification_bar(enabled)?,
            _ => self.unsupported_warn(Capability::SlideNotificationBar),
        }
        Ok(())
    }

    pub fn slide_notification_bar_enabled(&self) -> crate::Result<Option<bool>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.slide_notification_bar_enabled()?),
            _ => None,
        })
    }

    /// Brightness on a 1-100 scale
    pub fn set_screen_brightness(&self, level: u8) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_screen_brightness(level)?,
            _ => self.unsupported_warn(Capability::ScreenBrightness),
        }
        Ok(())
    }

    // ========== Install ==========

    pub fn silent_install_apk(&self, apk_path: &str) -> crate::Result<bool> {
        let install = &self.config.install;
        match &self.active {
            ActiveBoard::Ys(ys) => Ok(ys.silent_install_apk(apk_path, install.ys_launch_after_install)?),
            ActiveBoard::Zc(zc) => {
                zc.install_apk(apk_path, install.zc_silent_mode)?;
                Ok(true)
            }
            ActiveBoard::LangGuo(_) => Ok(false),
        }
    }

    /// Uninstall a package; a vendor failure is reported as `false`
    pub fn silent_uninstall_apk(&self, package_name: &str) -> crate::Result<bool> {
        match &self.active {
            ActiveBoard::Ys(ys) => {
                self.apply_policy(Capability::SilentUninstall, ys.uninstall_apk(package_name))
            }
            _ => Ok(false),
        }
    }

    // ========== Network ==========

    pub fn set_ethernet_dhcp(&self) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_dhcp()?,
            ActiveBoard::Zc(zc) => zc.set_dhcp(&self.config.network.ethernet_interface)?,
            ActiveBoard::LangGuo(_) => self.unsupported_warn(Capability::EthernetDhcp),
        }
        Ok(())
    }

    pub fn set_ethernet_static_ip(&self, config: &StaticIpConfig) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_static_ip(config)?,
            ActiveBoard::Zc(zc) => {
                zc.set_static_ip(config, &self.config.network.ethernet_interface)?
            }
            ActiveBoard::LangGuo(_) => self.unsupported_warn(Capability::EthernetStaticIp),
        }
        Ok(())
    }

    pub fn ethernet_mac_address(&self) -> crate::Result<Option<String>> {
        Ok(match &self.active {
            ActiveBoard::Ys(ys) => Some(ys.eth_mac_address()?),
            ActiveBoard::Zc(zc) => {
                Some(zc.eth_mac_address(&self.config.network.ethernet_interface)?)
            }
            ActiveBoard::LangGuo(_) => None,
        })
    }

    pub fn set_ethernet_enabled(&self, enabled: bool) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_ethernet_enabled(enabled)?,
            _ => self.unsupported_warn(Capability::EthernetToggle),
        }
        Ok(())
    }

    // ========== Scheduled power ==========

    pub fn set_weekly_power_schedule(&self, schedule: &WeeklySchedule) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_weekly_power_schedule(schedule)?,
            _ => self.unsupported_warn(Capability::WeeklyPowerSchedule),
        }
        Ok(())
    }

    pub fn set_one_time_power_schedule(&self, schedule: &OneTimeSchedule) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_one_time_power_schedule(schedule)?,
            ActiveBoard::Zc(zc) => zc.set_power_schedule(schedule)?,
            ActiveBoard::LangGuo(_) => self.unsupported_warn(Capability::OneTimePowerSchedule),
        }
        Ok(())
    }

    pub fn clear_power_schedule(&self) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.clear_power_schedule()?,
            _ => self.unsupported_warn(Capability::ClearPowerSchedule),
        }
        Ok(())
    }

    // ========== GPIO ==========

    fn invalid_pin(&self, pin: GpioPin) -> KitError {
        KitError::InvalidPin {
            pin,
            backend: self.active.backend(),
        }
    }

    pub fn set_gpio_direction(&self, pin: GpioPin, direction: GpioDirection) -> crate::Result<bool> {
        match (&self.active, pin) {
            (ActiveBoard::Ys(ys), GpioPin::Number(n)) => Ok(ys.set_gpio_direction(n, direction)?),
            (ActiveBoard::Zc(zc), GpioPin::Bank { group, index }) => {
                zc.set_gpio_direction(group, index, direction)?;
                Ok(true)
            }
            (ActiveBoard::LangGuo(_), _) => Ok(false),
            _ => Err(self.invalid_pin(pin)),
        }
    }

    pub fn write_gpio_value(&self, pin: GpioPin, level: GpioLevel) -> crate::Result<bool> {
        match (&self.active, pin) {
            (ActiveBoard::Ys(ys), GpioPin::Number(n)) => Ok(ys.write_gpio(n, level)?),
            (ActiveBoard::Zc(zc), GpioPin::Bank { group, index }) => {
                zc.write_gpio(group, index, level)?;
                Ok(true)
            }
            (ActiveBoard::LangGuo(_), _) => Ok(false),
            _ => Err(self.invalid_pin(pin)),
        }
    }

    /// Pin level as reported by the vendor, usually `"0"` or `"1"`
    pub fn read_gpio_value(&self, pin: GpioPin) -> crate::Result<Option<String>> {
        match (&self.active, pin) {
            (ActiveBoard::Ys(ys), GpioPin::Number(n)) => Ok(Some(ys.read_gpio(n)?)),
            (ActiveBoard::Zc(zc), GpioPin::Bank { group, index }) => {
                Ok(Some(zc.read_gpio(group, index)?.to_string()))
            }
            (ActiveBoard::LangGuo(_), _) => Ok(None),
            _ => Err(self.invalid_pin(pin)),
        }
    }

    // ========== Miscellaneous ==========

    /// Run a shell command with root rights
    pub fn execute_su_command(&self, command: &str) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.exec_su_command(command)?,
            ActiveBoard::Zc(zc) => zc.exec_shell_command(command)?,
            ActiveBoard::LangGuo(_) => self.unsupported_warn(Capability::SuCommand),
        }
        Ok(())
    }

    pub fn set_system_time(&self, at: &NaiveDateTime) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_system_time(at)?,
            ActiveBoard::Zc(zc) => zc.set_system_time(at)?,
            ActiveBoard::LangGuo(_) => self.unsupported_warn(Capability::SystemTime),
        }
        Ok(())
    }

    pub fn set_auto_start_app(&self, package_name: &str) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_auto_start_app(package_name)?,
            _ => self.unsupported_warn(Capability::AutoStartApp),
        }
        Ok(())
    }

    pub fn set_daemon_app(&self, package_name: &str, interval: GuardInterval) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_daemon_app(package_name, interval)?,
            _ => self.unsupported_warn(Capability::DaemonApp),
        }
        Ok(())
    }

    pub fn set_default_launcher(&self, package_and_class: &str) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_default_launcher(package_and_class)?,
            _ => self.unsupported_warn(Capability::DefaultLauncher),
        }
        Ok(())
    }

    pub fn set_system_language(&self, language: &str, country: &str) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Ys(ys) => ys.set_language(language, country)?,
            _ => self.unsupported_warn(Capability::SystemLanguage),
        }
        Ok(())
    }

    pub fn set_default_input_method(&self, input_method: &str) -> crate::Result<bool> {
        match &self.active {
            ActiveBoard::Ys(ys) => Ok(ys.set_default_input_method(input_method)?),
            _ => Ok(false),
        }
    }

    pub fn set_watchdog(&self, enabled: bool) -> crate::Result<()> {
        match &self.active {
            ActiveBoard::Zc(zc) => zc.set_watchdog(enabled)?,
            _ => self.unsupported_warn(Capability::Watchdog),
        }
        Ok(())
    }
}
