//! Yisheng board adapter
//!
//! Wraps the `MyManager` service. The AIDL connection has to be bound before
//! use and unbound when the host is done; a handful of queries re-bind first
//! because the service drops stale bindings on its own.

use crate::display::{Rotation, screenshot_path};
use crate::gpio::{GpioDirection, GpioLevel};
use crate::network::StaticIpConfig;
use crate::power::{OneTimeSchedule, WeeklySchedule, second_fields};
use crate::system::GuardInterval;
use crate::vendor::{VendorResult, YsApi};
use chrono::NaiveDateTime;

pub struct YsBoard {
    service: Box<dyn YsApi>,
}

impl YsBoard {
    pub fn new(service: Box<dyn YsApi>) -> Self {
        Self { service }
    }

    /// Bind the AIDL service
    pub fn bind(&self) -> VendorResult<()> {
        tracing::debug!("Binding Yisheng AIDL service");
        self.service.bind_aidl_service()
    }

    /// Unbind the AIDL service
    pub fn unbind(&self) -> VendorResult<()> {
        tracing::debug!("Unbinding Yisheng AIDL service");
        self.service.unbind_aidl_service()
    }

    pub fn reboot(&self) -> VendorResult<()> {
        self.service.reboot()
    }

    pub fn shutdown(&self) -> VendorResult<()> {
        self.service.shutdown()
    }

    /// Reboot into recovery
    pub fn reboot_recovery(&self) -> VendorResult<()> {
        self.service.reboot_recovery()
    }

    pub fn device_model(&self) -> VendorResult<String> {
        self.service.android_model()
    }

    pub fn serial_number(&self) -> VendorResult<String> {
        self.service.sn()
    }

    pub fn api_version(&self) -> VendorResult<String> {
        self.service.api_version()
    }

    pub fn firmware_version(&self) -> VendorResult<String> {
        self.service.firmware_version()
    }

    pub fn memory_size(&self) -> VendorResult<String> {
        self.service.running_memory()
    }

    pub fn storage_size(&self) -> VendorResult<String> {
        self.service.internal_storage_memory()
    }

    pub fn android_version(&self) -> VendorResult<String> {
        self.service.android_version()
    }

    pub fn kernel_version(&self) -> VendorResult<String> {
        self.service.kernel_version()
    }

    pub fn cpu_type(&self) -> VendorResult<String> {
        self.service.cpu_type()
    }

    pub fn cpu_temperature(&self) -> VendorResult<String> {
        self.service.cpu_temperature().map(|t| t.to_string())
    }

    /// Screenshot of the main display into `dir/file_name`
    pub fn take_screenshot(&self, dir: &str, file_name: &str) -> VendorResult<bool> {
        self.service.bind_aidl_service()?;
        self.service.take_screenshot(&screenshot_path(dir, file_name))
    }

    /// Screenshot of the secondary display
    pub fn vice_screenshot(&self, path: &str) -> VendorResult<bool> {
        self.service.bind_aidl_service()?;
        self.service.vice_screenshot(path)
    }

    pub fn rotate_screen(&self, rotation: Rotation) -> VendorResult<()> {
        self.service.rotate_screen(rotation.vendor_arg())
    }

    /// Display size in pixels
    pub fn display_size(&self) -> VendorResult<(i32, i32)> {
        Ok((self.service.display_width()?, self.service.display_height()?))
    }

    pub fn set_backlight(&self, enabled: bool) -> VendorResult<()> {
        if enabled {
            self.service.turn_on_backlight()
        } else {
            self.service.turn_off_backlight()
        }
    }

    pub fn is_backlight_on(&self) -> VendorResult<bool> {
        self.service.is_backlight_on()
    }

    pub fn set_hdmi_output(&self, enabled: bool) -> VendorResult<()> {
        if enabled {
            self.service.turn_on_hdmi()
        } else {
            self.service.turn_off_hdmi()
        }
    }

    /// HDMI-in signal present
    pub fn hdmi_in_status(&self) -> VendorResult<bool> {
        self.service.hdmi_in_status()
    }

    pub fn set_navigation_bar_visible(&self, visible: bool) -> VendorResult<()> {
        self.service.hide_nav_bar(!visible)
    }

    pub fn navigation_bar_visible(&self) -> VendorResult<bool> {
        self.service.nav_bar_hide_state().map(|hidden| !hidden)
    }

    pub fn set_status_bar_visible(&self, visible: bool) -> VendorResult<()> {
        self.service.hide_status_bar(!visible)
    }

    pub fn status_bar_visible(&self) -> VendorResult<bool> {
        self.service.status_bar_state().map(|hidden| !hidden)
    }

    pub fn set_slide_navigation_bar(&self, enabled: bool) -> VendorResult<()> {
        self.service.set_slide_show_nav_bar(enabled)
    }

    pub fn slide_navigation_bar_enabled(&self) -> VendorResult<bool> {
        self.service.is_slide_show_nav_bar_open()
    }

    pub fn set_slide_notification_bar(&self, enabled: bool) -> VendorResult<()> {
        self.service.set_slide_show_notification_bar(enabled)
    }

    pub fn slide_notification_bar_enabled(&self) -> VendorResult<bool> {
        self.service.is_slide_show_notification_bar_open()
    }

    /// Brightness on the vendor's 1-100 scale
    pub fn set_screen_brightness(&self, level: u8) -> VendorResult<()> {
        self.service.change_screen_light(i32::from(level))
    }

    pub fn upgrade_system(&self, absolute_path: &str) -> VendorResult<()> {
        self.service.upgrade_system(absolute_path)
    }

    pub fn silent_install_apk(&self, apk_path: &str, launch: bool) -> VendorResult<bool> {
        self.service.silent_install_apk(apk_path, launch)
    }

    /// Uninstall a package; the service reports success by not failing
    pub fn uninstall_apk(&self, package_name: &str) -> VendorResult<bool> {
        self.service.uninstall_apk(package_name).map(|()| true)
    }

    pub fn eth_mac_address(&self) -> VendorResult<String> {
        self.service.eth_mac_address()
    }

    pub fn eth_mode(&self) -> VendorResult<String> {
        self.service.eth_mode()
    }

    pub fn eth_status(&self) -> VendorResult<bool> {
        self.service.bind_aidl_service()?;
        self.service.eth_status()
    }

    pub fn net_mask(&self) -> VendorResult<String> {
        self.service.bind_aidl_service()?;
        self.service.net_mask()
    }

    pub fn gateway(&self) -> VendorResult<String> {
        self.service.bind_aidl_service()?;
        self.service.gateway()
    }

    /// Primary and secondary DNS
    pub fn dns_servers(&self) -> VendorResult<(String, String)> {
        self.service.bind_aidl_service()?;
        Ok((self.service.eth_dns1()?, self.service.eth_dns2()?))
    }

    pub fn static_ip_address(&self) -> VendorResult<String> {
        self.service.bind_aidl_service()?;
        self.service.static_eth_ip_address()
    }

    pub fn set_dhcp(&self) -> VendorResult<()> {
        self.service.set_dhcp_ip_address()
    }

    pub fn set_static_ip(&self, config: &StaticIpConfig) -> VendorResult<()> {
        let [ip, gateway, mask, dns1, dns2] = config.vendor_args();
        self.service
            .set_static_eth_ip_address(&ip, &gateway, &mask, &dns1, &dns2)
    }

    pub fn set_ethernet_enabled(&self, enabled: bool) -> VendorResult<()> {
        self.service.eth_enabled(enabled)
    }

    pub fn set_weekly_power_schedule(&self, schedule: &WeeklySchedule) -> VendorResult<()> {
        self.service.set_power_on_off_with_weekly(
            &schedule.power_on_fields(),
            &schedule.power_off_fields(),
            &schedule.weekday_flags(),
        )
    }

    pub fn set_one_time_power_schedule(&self, schedule: &OneTimeSchedule) -> VendorResult<()> {
        self.service
            .set_power_on_off(&schedule.power_on_fields(), &schedule.power_off_fields())
    }

    /// Currently scheduled power-on and power-off times, if any
    pub fn power_schedule(&self) -> VendorResult<Option<(String, String)>> {
        if !self.service.is_set_power_on_time()? {
            return Ok(None);
        }
        Ok(Some((
            self.service.power_on_time()?,
            self.service.power_off_time()?,
        )))
    }

    pub fn clear_power_schedule(&self) -> VendorResult<()> {
        self.service.clear_power_on_off_time()
    }

    pub fn set_gpio_direction(&self, gpio: u32, direction: GpioDirection) -> VendorResult<bool> {
        self.service.set_gpio_direction(gpio, direction.ys_code())
    }

    pub fn gpio_direction(&self, gpio: u32) -> VendorResult<Option<GpioDirection>> {
        self.service
            .gpio_direction(gpio)
            .map(|d| GpioDirection::parse(&d))
    }

    pub fn write_gpio(&self, gpio: u32, level: GpioLevel) -> VendorResult<bool> {
        self.service.write_gpio_value(gpio, level.as_str())
    }

    pub fn read_gpio(&self, gpio: u32) -> VendorResult<String> {
        self.service.gpio_value(gpio)
    }

    pub fn exec_su_command(&self, command: &str) -> VendorResult<()> {
        self.service.exec_su_cmd(command)
    }

    pub fn set_system_time(&self, at: &NaiveDateTime) -> VendorResult<()> {
        let [year, month, day, hour, minute, second] = second_fields(at);
        self.service
            .set_time(year, month, day, hour, minute, second)
    }

    pub fn set_auto_start_app(&self, package_name: &str) -> VendorResult<()> {
        self.service.self_start(package_name)
    }

    pub fn set_daemon_app(&self, package_name: &str, interval: GuardInterval) -> VendorResult<()> {
        self.service.daemon(package_name, interval.vendor_code())
    }

    pub fn set_default_launcher(&self, package_and_class: &str) -> VendorResult<()> {
        self.service.set_default_launcher(package_and_class)
    }

    pub fn set_language(&self, language: &str, country: &str) -> VendorResult<()> {
        self.service.set_language(language, country)
    }

    pub fn set_default_input_method(&self, input_method: &str) -> VendorResult<bool> {
        self.service.set_default_input_method(input_method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockProvider;
    use crate::vendor::ServiceProvider;

    fn bound_board() -> (YsBoard, MockProvider) {
        let provider = MockProvider::new();
        let board = YsBoard::new(provider.ys().unwrap());
        board.bind().unwrap();
        (board, provider)
    }

    #[test]
    fn test_ethernet_queries_rebind() {
        let (board, provider) = bound_board();

        assert!(board.eth_status().unwrap());
        assert_eq!(board.gateway().unwrap(), "192.168.1.1");
        assert_eq!(
            board.dns_servers().unwrap(),
            ("8.8.8.8".to_string(), "0.0.0.0".to_string())
        );

        let state = provider.state();
        assert_eq!(state.read().unwrap().calls_to("bind_aidl_service"), 4);
    }

    #[test]
    fn test_static_ip_switches_mode() {
        let (board, _provider) = bound_board();
        assert_eq!(board.eth_mode().unwrap(), "DHCP");

        let config = StaticIpConfig::new(
            "10.0.0.20".parse().unwrap(),
            "10.0.0.1".parse().unwrap(),
            "255.255.255.0".parse().unwrap(),
            "10.0.0.1".parse().unwrap(),
        );
        board.set_static_ip(&config).unwrap();
        assert_eq!(board.eth_mode().unwrap(), "STATIC");
        assert_eq!(board.static_ip_address().unwrap(), "10.0.0.20");

        board.set_dhcp().unwrap();
        assert_eq!(board.eth_mode().unwrap(), "DHCP");
    }

    #[test]
    fn test_power_schedule_query() {
        let (board, _provider) = bound_board();
        assert_eq!(board.power_schedule().unwrap(), None);

        let schedule = WeeklySchedule::new(
            chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            chrono::NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        );
        board.set_weekly_power_schedule(&schedule).unwrap();
        assert_eq!(
            board.power_schedule().unwrap(),
            Some(("[8, 0]".to_string(), "[20, 0]".to_string()))
        );
    }

    #[test]
    fn test_gpio_direction_round_trip() {
        let (board, _provider) = bound_board();
        assert!(board.set_gpio_direction(7, GpioDirection::Input).unwrap());
        assert_eq!(board.gpio_direction(7).unwrap(), Some(GpioDirection::Input));
    }

    #[test]
    fn test_display_queries() {
        let (board, provider) = bound_board();
        assert_eq!(board.display_size().unwrap(), (1920, 1080));
        assert!(board.vice_screenshot("/sdcard/vice.jpg").unwrap());
        assert_eq!(board.cpu_temperature().unwrap(), "45.5");

        board.rotate_screen(Rotation::Rotate270).unwrap();
        let state = provider.state();
        let state = state.read().unwrap();
        assert_eq!(state.last_call("rotate_screen").unwrap().args, vec!["270"]);
    }

    #[test]
    fn test_daemon_interval_code() {
        let (board, provider) = bound_board();
        board
            .set_daemon_app("com.example.kiosk", GuardInterval::Seconds180)
            .unwrap();

        let state = provider.state();
        let state = state.read().unwrap();
        assert_eq!(
            state.last_call("daemon").unwrap().args,
            vec!["com.example.kiosk", "2"]
        );
    }

    #[test]
    fn test_unbound_service_rejects_calls() {
        let provider = MockProvider::new();
        let board = YsBoard::new(provider.ys().unwrap());
        assert!(board.kernel_version().is_err());
        assert!(board.cpu_type().is_err());
    }
}
