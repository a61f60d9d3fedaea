//! Vendor service surfaces
//!
//! Each board vendor ships its own SDK with its own method names. These
//! traits mirror those SDKs one-to-one so that the host can plug in the real
//! bindings (or the mocks in [`crate::mock`]) without the adapters caring.
//! Argument encodings follow the vendor documentation, not boardkit's types.

use thiserror::Error;

/// Failure reported by a vendor service call
#[derive(Debug, Error)]
pub enum VendorError {
    #[error("Vendor service is not bound")]
    NotBound,

    #[error("Vendor call {method} failed: {message}")]
    Call {
        method: &'static str,
        message: String,
    },

    #[error("Vendor service unavailable: {0}")]
    Unavailable(String),
}

/// Result of a vendor call
pub type VendorResult<T> = std::result::Result<T, VendorError>;

/// Yisheng `MyManager` service (AIDL-bound)
///
/// The service must be bound with [`YsApi::bind_aidl_service`] before most
/// calls return meaningful data.
pub trait YsApi: Send {
    fn bind_aidl_service(&self) -> VendorResult<()>;
    fn unbind_aidl_service(&self) -> VendorResult<()>;

    // System control
    fn reboot(&self) -> VendorResult<()>;
    fn shutdown(&self) -> VendorResult<()>;
    fn reboot_recovery(&self) -> VendorResult<()>;

    // System information
    fn api_version(&self) -> VendorResult<String>;
    fn android_model(&self) -> VendorResult<String>;
    fn android_version(&self) -> VendorResult<String>;
    fn running_memory(&self) -> VendorResult<String>;
    fn internal_storage_memory(&self) -> VendorResult<String>;
    fn firmware_version(&self) -> VendorResult<String>;
    fn sn(&self) -> VendorResult<String>;
    fn kernel_version(&self) -> VendorResult<String>;
    fn cpu_type(&self) -> VendorResult<String>;
    fn cpu_temperature(&self) -> VendorResult<f32>;

    // Display
    fn take_screenshot(&self, path: &str) -> VendorResult<bool>;
    fn vice_screenshot(&self, path: &str) -> VendorResult<bool>;
    /// `degree` is one of `"0"`, `"90"`, `"180"`, `"270"`
    fn rotate_screen(&self, degree: &str) -> VendorResult<()>;
    fn display_width(&self) -> VendorResult<i32>;
    fn display_height(&self) -> VendorResult<i32>;
    fn hide_nav_bar(&self, hide: bool) -> VendorResult<()>;
    /// `true` when the navigation bar is hidden
    fn nav_bar_hide_state(&self) -> VendorResult<bool>;
    fn set_slide_show_nav_bar(&self, enabled: bool) -> VendorResult<()>;
    fn is_slide_show_nav_bar_open(&self) -> VendorResult<bool>;
    fn set_slide_show_notification_bar(&self, enabled: bool) -> VendorResult<()>;
    fn is_slide_show_notification_bar_open(&self) -> VendorResult<bool>;
    /// Brightness on a 1-100 scale
    fn change_screen_light(&self, value: i32) -> VendorResult<()>;
    fn turn_on_backlight(&self) -> VendorResult<()>;
    fn turn_off_backlight(&self) -> VendorResult<()>;
    fn is_backlight_on(&self) -> VendorResult<bool>;
    fn turn_on_hdmi(&self) -> VendorResult<()>;
    fn turn_off_hdmi(&self) -> VendorResult<()>;
    fn hdmi_in_status(&self) -> VendorResult<bool>;
    fn hide_status_bar(&self, hide: bool) -> VendorResult<()>;
    /// `true` when the status bar is hidden
    fn status_bar_state(&self) -> VendorResult<bool>;

    // Install and upgrade
    fn upgrade_system(&self, absolute_path: &str) -> VendorResult<()>;
    fn silent_install_apk(&self, apk_path: &str, launch: bool) -> VendorResult<bool>;
    fn uninstall_apk(&self, package_name: &str) -> VendorResult<()>;

    // Ethernet
    fn eth_mac_address(&self) -> VendorResult<String>;
    fn eth_mode(&self) -> VendorResult<String>;
    fn eth_status(&self) -> VendorResult<bool>;
    fn net_mask(&self) -> VendorResult<String>;
    fn gateway(&self) -> VendorResult<String>;
    fn eth_dns1(&self) -> VendorResult<String>;
    fn eth_dns2(&self) -> VendorResult<String>;
    fn static_eth_ip_address(&self) -> VendorResult<String>;
    fn set_dhcp_ip_address(&self) -> VendorResult<()>;
    fn set_static_eth_ip_address(
        &self,
        ip: &str,
        gateway: &str,
        mask: &str,
        dns1: &str,
        dns2: &str,
    ) -> VendorResult<()>;
    fn eth_enabled(&self, enabled: bool) -> VendorResult<()>;

    // Scheduled power on/off
    /// Times are `[hour, minute]`, weekdays are Monday..Sunday flags of 0/1
    fn set_power_on_off_with_weekly(
        &self,
        power_on: &[i32],
        power_off: &[i32],
        weekdays: &[i32],
    ) -> VendorResult<()>;
    /// Times are `[year, month, day, hour, minute]`
    fn set_power_on_off(&self, power_on: &[i32], power_off: &[i32]) -> VendorResult<()>;
    fn power_on_time(&self) -> VendorResult<String>;
    fn power_off_time(&self) -> VendorResult<String>;
    fn is_set_power_on_time(&self) -> VendorResult<bool>;
    fn clear_power_on_off_time(&self) -> VendorResult<()>;

    // GPIO
    /// `arg`: 1 for input, 0 for output
    fn set_gpio_direction(&self, gpio: u32, arg: i32) -> VendorResult<bool>;
    /// `"in"` or `"out"`
    fn gpio_direction(&self, gpio: u32) -> VendorResult<String>;
    /// `value`: `"1"` high, `"0"` low
    fn write_gpio_value(&self, gpio: u32, value: &str) -> VendorResult<bool>;
    fn gpio_value(&self, gpio: u32) -> VendorResult<String>;

    // Miscellaneous
    fn set_time(
        &self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> VendorResult<()>;
    fn exec_su_cmd(&self, command: &str) -> VendorResult<()>;
    fn set_default_input_method(&self, input_method: &str) -> VendorResult<bool>;
    fn set_language(&self, language: &str, country: &str) -> VendorResult<()>;
    fn set_default_launcher(&self, package_and_class: &str) -> VendorResult<()>;
    fn self_start(&self, package_name: &str) -> VendorResult<()>;
    /// `value`: 0 = 30s, 1 = 60s, 2 = 180s
    fn daemon(&self, package_name: &str, value: i32) -> VendorResult<()>;
}

/// Zhuoce `zcapi` handle
///
/// Some calls require the host app to run with the system uid and platform
/// signature; that is the host's concern.
pub trait ZcApi: Send {
    fn reboot(&self) -> VendorResult<()>;
    fn shut_down(&self) -> VendorResult<()>;
    /// Formats any attached USB storage as well
    fn factory_reset(&self) -> VendorResult<()>;
    fn update_ota(&self) -> VendorResult<()>;
    /// Times are `[year, month, day, hour, minute]`
    fn set_power_on_off_time(
        &self,
        enable: bool,
        on_time: &[i32],
        off_time: &[i32],
    ) -> VendorResult<()>;
    /// `[year, month, day, hour, minute, second]`
    fn set_system_time(&self, time: &[i32]) -> VendorResult<()>;

    fn build_model(&self) -> VendorResult<String>;
    fn build_serial(&self) -> VendorResult<String>;
    fn eth_mac_address(&self, iface: &str) -> VendorResult<String>;
    /// Only available while WiFi is on
    fn wifi_mac_address(&self) -> VendorResult<String>;

    fn set_lcd_on_off(&self, enable: bool) -> VendorResult<()>;
    /// `lcd_or_hdmi`: 0 LCD only, 1 HDMI and LCD, -1 HDMI only
    fn set_lcd_hdmi_on_off(&self, enable: bool, lcd_or_hdmi: i32) -> VendorResult<()>;
    /// `true` shows both navigation and status bars
    fn set_status_bar(&self, enable: bool) -> VendorResult<()>;
    fn set_gesture_status_bar(&self, enable: bool) -> VendorResult<()>;

    /// `value`: 1 output, 0 input
    fn set_mul_sel_gpio(&self, group: char, num: u32, value: i32) -> VendorResult<()>;
    fn read_gpio(&self, group: char, num: u32) -> VendorResult<i32>;
    fn write_gpio(&self, group: char, num: u32, value: i32) -> VendorResult<()>;

    /// Once enabled the dog must be fed within two minutes
    fn watch_dog_enable(&self, enable: bool) -> VendorResult<()>;
    fn exec_shell_cmd(&self, command: &str) -> VendorResult<()>;
    fn screenshot(&self, path: &str, file_name: &str) -> VendorResult<()>;
    fn install_apk(&self, apk_path: &str, silent: bool) -> VendorResult<()>;
    fn set_static_ip(
        &self,
        ip: &str,
        gateway: &str,
        net_mask: &str,
        dns1: &str,
        dns2: &str,
        iface: &str,
    ) -> VendorResult<()>;
    fn set_dhcp(&self, iface: &str) -> VendorResult<()>;
}

/// LangGuo boards are driven by system broadcasts
pub trait LangGuoApi: Send {
    fn send_broadcast(&self, action: &str) -> VendorResult<()>;
}

/// Constructs vendor handles for the facade.
///
/// This is the host's application context: boardkit never inspects it, it
/// only asks for the handle of the backend it selected.
pub trait ServiceProvider {
    fn ys(&self) -> VendorResult<Box<dyn YsApi>>;
    fn zc(&self) -> VendorResult<Box<dyn ZcApi>>;
    fn langguo(&self) -> VendorResult<Box<dyn LangGuoApi>>;
}
