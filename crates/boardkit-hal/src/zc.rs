//! Zhuoce board adapter
//!
//! The `zcapi` handle is ready as soon as it is constructed and has no
//! teardown. It exposes no API/firmware version or memory queries.

use crate::gpio::{GpioDirection, GpioLevel};
use crate::network::StaticIpConfig;
use crate::power::{OneTimeSchedule, second_fields};
use crate::vendor::{VendorResult, ZcApi};
use boardkit_config::HdmiTarget;
use chrono::NaiveDateTime;

pub struct ZcBoard {
    service: Box<dyn ZcApi>,
}

impl ZcBoard {
    pub fn new(service: Box<dyn ZcApi>) -> Self {
        Self { service }
    }

    pub fn reboot(&self) -> VendorResult<()> {
        self.service.reboot()
    }

    pub fn shutdown(&self) -> VendorResult<()> {
        self.service.shut_down()
    }

    /// Do not run with USB storage attached: it gets formatted too
    pub fn factory_reset(&self) -> VendorResult<()> {
        self.service.factory_reset()
    }

    /// Apply the OTA package staged on the device; the package is deleted afterwards
    pub fn update_ota(&self) -> VendorResult<()> {
        self.service.update_ota()
    }

    pub fn device_model(&self) -> VendorResult<String> {
        self.service.build_model()
    }

    pub fn serial_number(&self) -> VendorResult<String> {
        self.service.build_serial()
    }

    pub fn eth_mac_address(&self, iface: &str) -> VendorResult<String> {
        self.service.eth_mac_address(iface)
    }

    pub fn wifi_mac_address(&self) -> VendorResult<String> {
        self.service.wifi_mac_address()
    }

    pub fn set_lcd(&self, enabled: bool) -> VendorResult<()> {
        self.service.set_lcd_on_off(enabled)
    }

    /// Only the 328/339 series support HDMI switching
    pub fn set_hdmi(&self, enabled: bool, target: HdmiTarget) -> VendorResult<()> {
        self.service
            .set_lcd_hdmi_on_off(enabled, target.vendor_code())
    }

    /// Show or hide both the navigation and status bars
    pub fn set_system_bars(&self, visible: bool) -> VendorResult<()> {
        self.service.set_status_bar(visible)
    }

    /// Allow pulling the status bar down with a swipe
    pub fn set_gesture_status_bar(&self, enabled: bool) -> VendorResult<()> {
        self.service.set_gesture_status_bar(enabled)
    }

    pub fn set_gpio_direction(
        &self,
        group: char,
        index: u32,
        direction: GpioDirection,
    ) -> VendorResult<()> {
        self.service
            .set_mul_sel_gpio(group, index, direction.zc_code())
    }

    pub fn read_gpio(&self, group: char, index: u32) -> VendorResult<i32> {
        self.service.read_gpio(group, index)
    }

    pub fn write_gpio(&self, group: char, index: u32, level: GpioLevel) -> VendorResult<()> {
        self.service.write_gpio(group, index, level.as_i32())
    }

    pub fn set_watchdog(&self, enabled: bool) -> VendorResult<()> {
        self.service.watch_dog_enable(enabled)
    }

    pub fn exec_shell_command(&self, command: &str) -> VendorResult<()> {
        self.service.exec_shell_cmd(command)
    }

    pub fn screenshot(&self, dir: &str, file_name: &str) -> VendorResult<()> {
        self.service.screenshot(dir, file_name)
    }

    pub fn install_apk(&self, apk_path: &str, silent: bool) -> VendorResult<()> {
        self.service.install_apk(apk_path, silent)
    }

    pub fn set_static_ip(&self, config: &StaticIpConfig, iface: &str) -> VendorResult<()> {
        let [ip, gateway, mask, dns1, dns2] = config.vendor_args();
        self.service
            .set_static_ip(&ip, &gateway, &mask, &dns1, &dns2, iface)
    }

    pub fn set_dhcp(&self, iface: &str) -> VendorResult<()> {
        self.service.set_dhcp(iface)
    }

    pub fn set_power_schedule(&self, schedule: &OneTimeSchedule) -> VendorResult<()> {
        self.service.set_power_on_off_time(
            true,
            &schedule.power_on_fields(),
            &schedule.power_off_fields(),
        )
    }

    pub fn set_system_time(&self, at: &NaiveDateTime) -> VendorResult<()> {
        self.service.set_system_time(&second_fields(at))
    }
}
