//! Mock vendor services for testing without board hardware
//!
//! All three mocks share one [`MockState`] so a test can drive the facade and
//! then inspect every vendor call it produced. The Yisheng mock refuses calls
//! until it has been bound, like the real AIDL service.
//!
//! # Usage
//!
//! ```
//! use boardkit_config::BoardKitConfig;
//! use boardkit_hal::mock::MockProvider;
//! use boardkit_hal::{BoardKit, DeviceProperties};
//!
//! let provider = MockProvider::new();
//! let kit = BoardKit::create(
//!     &provider,
//!     DeviceProperties::from_model("ZC-3288"),
//!     &BoardKitConfig::default(),
//! )
//! .unwrap();
//! kit.reboot().unwrap();
//!
//! let state = provider.state();
//! assert_eq!(state.read().unwrap().calls_to("reboot"), 1);
//! ```

use crate::vendor::{
    LangGuoApi, ServiceProvider, VendorError, VendorResult, YsApi, ZcApi,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$($arg.to_string()),*]
    };
}

/// One recorded vendor call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub method: &'static str,
    pub args: Vec<String>,
}

/// Shared mock state for synchronized access
#[derive(Debug)]
pub struct MockState {
    /// Every call in order, including rejected ones
    pub calls: Vec<MockCall>,
    /// Methods that fail with [`VendorError::Call`]
    pub failing: HashSet<&'static str>,
    /// Provider refuses to hand out services
    pub unavailable: bool,
    /// Yisheng AIDL binding
    pub bound: bool,

    pub model: String,
    pub serial: String,
    pub api_version: String,
    pub firmware_version: String,
    pub android_version: String,
    pub memory: String,
    pub storage: String,
    pub cpu_temperature: f32,

    pub backlight_on: bool,
    pub hdmi_on: bool,
    pub hdmi_in: bool,
    pub nav_bar_hidden: bool,
    pub status_bar_hidden: bool,
    pub slide_nav_bar: bool,
    pub slide_notification_bar: bool,
    pub brightness: i32,

    pub installed: HashSet<String>,
    pub eth_enabled: bool,
    pub eth_mac: String,
    pub static_ip: Option<Vec<String>>,
    pub power_schedule: Option<(String, String)>,
    pub watchdog: bool,

    /// Yisheng pins: direction `"in"`/`"out"` and value `"0"`/`"1"`
    pub ys_gpio: HashMap<u32, (String, String)>,
    /// Zhuoce pins: direction code and level
    pub zc_gpio: HashMap<(char, u32), (i32, i32)>,
}

impl MockState {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            failing: HashSet::new(),
            unavailable: false,
            bound: false,
            model: "MOCK-BOARD".into(),
            serial: "MOCK0001".into(),
            api_version: "1.0.0".into(),
            firmware_version: "mock-fw-1.0".into(),
            android_version: "11".into(),
            memory: "2 GB".into(),
            storage: "16 GB".into(),
            cpu_temperature: 45.5,
            backlight_on: true,
            hdmi_on: true,
            hdmi_in: false,
            nav_bar_hidden: false,
            status_bar_hidden: false,
            slide_nav_bar: false,
            slide_notification_bar: false,
            brightness: 80,
            installed: HashSet::new(),
            eth_enabled: true,
            eth_mac: "02:00:00:00:00:01".into(),
            static_ip: None,
            power_schedule: None,
            watchdog: false,
            ys_gpio: HashMap::new(),
            zc_gpio: HashMap::new(),
        }
    }

    /// Number of recorded calls to `method`
    pub fn calls_to(&self, method: &str) -> usize {
        self.calls.iter().filter(|c| c.method == method).count()
    }

    /// Most recent call to `method`
    pub fn last_call(&self, method: &str) -> Option<&MockCall> {
        self.calls.iter().rev().find(|c| c.method == method)
    }

    /// Make every later call to `method` fail
    pub fn fail_on(&mut self, method: &'static str) {
        self.failing.insert(method);
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
struct Shared(Arc<RwLock<MockState>>);

impl Shared {
    fn lock(&self) -> VendorResult<RwLockWriteGuard<'_, MockState>> {
        self.0
            .write()
            .map_err(|_| VendorError::Unavailable("mock state lock poisoned".into()))
    }

    fn enter(
        &self,
        method: &'static str,
        args: Vec<String>,
        needs_binding: bool,
    ) -> VendorResult<RwLockWriteGuard<'_, MockState>> {
        let mut state = self.lock()?;
        tracing::debug!("[MOCK] {}({})", method, args.join(", "));
        state.calls.push(MockCall { method, args });

        if needs_binding && !state.bound {
            return Err(VendorError::NotBound);
        }
        if state.failing.contains(method) {
            return Err(VendorError::Call {
                method,
                message: "injected failure".into(),
            });
        }
        Ok(state)
    }

    fn call(
        &self,
        method: &'static str,
        args: Vec<String>,
    ) -> VendorResult<RwLockWriteGuard<'_, MockState>> {
        self.enter(method, args, false)
    }
}

/// Mock Yisheng `MyManager` service
pub struct MockYs {
    shared: Shared,
}

impl MockYs {
    fn bound_call(
        &self,
        method: &'static str,
        args: Vec<String>,
    ) -> VendorResult<RwLockWriteGuard<'_, MockState>> {
        self.shared.enter(method, args, true)
    }

    fn touch(&self, method: &'static str, args: Vec<String>) -> VendorResult<()> {
        self.bound_call(method, args).map(|_| ())
    }
}

impl YsApi for MockYs {
    fn bind_aidl_service(&self) -> VendorResult<()> {
        self.shared.call("bind_aidl_service", args![])?.bound = true;
        Ok(())
    }

    fn unbind_aidl_service(&self) -> VendorResult<()> {
        self.shared.call("unbind_aidl_service", args![])?.bound = false;
        Ok(())
    }

    fn reboot(&self) -> VendorResult<()> {
        self.touch("reboot", args![])
    }

    fn shutdown(&self) -> VendorResult<()> {
        self.touch("shutdown", args![])
    }

    fn reboot_recovery(&self) -> VendorResult<()> {
        self.touch("reboot_recovery", args![])
    }

    fn api_version(&self) -> VendorResult<String> {
        Ok(self.bound_call("api_version", args![])?.api_version.clone())
    }

    fn android_model(&self) -> VendorResult<String> {
        Ok(self.bound_call("android_model", args![])?.model.clone())
    }

    fn android_version(&self) -> VendorResult<String> {
        Ok(self.bound_call("android_version", args![])?.android_version.clone())
    }

    fn running_memory(&self) -> VendorResult<String> {
        Ok(self.bound_call("running_memory", args![])?.memory.clone())
    }

    fn internal_storage_memory(&self) -> VendorResult<String> {
        Ok(self.bound_call("internal_storage_memory", args![])?.storage.clone())
    }

    fn firmware_version(&self) -> VendorResult<String> {
        Ok(self.bound_call("firmware_version", args![])?.firmware_version.clone())
    }

    fn sn(&self) -> VendorResult<String> {
        Ok(self.bound_call("sn", args![])?.serial.clone())
    }

    fn kernel_version(&self) -> VendorResult<String> {
        self.touch("kernel_version", args![])?;
        Ok("4.19.232-mock".into())
    }

    fn cpu_type(&self) -> VendorResult<String> {
        self.touch("cpu_type", args![])?;
        Ok("rk3568".into())
    }

    fn cpu_temperature(&self) -> VendorResult<f32> {
        Ok(self.bound_call("cpu_temperature", args![])?.cpu_temperature)
    }

    fn take_screenshot(&self, path: &str) -> VendorResult<bool> {
        self.touch("take_screenshot", args![path])?;
        Ok(true)
    }

    fn vice_screenshot(&self, path: &str) -> VendorResult<bool> {
        self.touch("vice_screenshot", args![path])?;
        Ok(true)
    }

    fn rotate_screen(&self, degree: &str) -> VendorResult<()> {
        self.touch("rotate_screen", args![degree])
    }

    fn display_width(&self) -> VendorResult<i32> {
        self.touch("display_width", args![])?;
        Ok(1920)
    }

    fn display_height(&self) -> VendorResult<i32> {
        self.touch("display_height", args![])?;
        Ok(1080)
    }

    fn hide_nav_bar(&self, hide: bool) -> VendorResult<()> {
        self.bound_call("hide_nav_bar", args![hide])?.nav_bar_hidden = hide;
        Ok(())
    }

    fn nav_bar_hide_state(&self) -> VendorResult<bool> {
        Ok(self.bound_call("nav_bar_hide_state", args![])?.nav_bar_hidden)
    }

    fn set_slide_show_nav_bar(&self, enabled: bool) -> VendorResult<()> {
        self.bound_call("set_slide_show_nav_bar", args![enabled])?.slide_nav_bar = enabled;
        Ok(())
    }

    fn is_slide_show_nav_bar_open(&self) -> VendorResult<bool> {
        Ok(self.bound_call("is_slide_show_nav_bar_open", args![])?.slide_nav_bar)
    }

    fn set_slide_show_notification_bar(&self, enabled: bool) -> VendorResult<()> {
        self.bound_call("set_slide_show_notification_bar", args![enabled])?
            .slide_notification_bar = enabled;
        Ok(())
    }

    fn is_slide_show_notification_bar_open(&self) -> VendorResult<bool> {
        Ok(self
            .bound_call("is_slide_show_notification_bar_open", args![])?
            .slide_notification_bar)
    }

    fn change_screen_light(&self, value: i32) -> VendorResult<()> {
        self.bound_call("change_screen_light", args![value])?.brightness = value;
        Ok(())
    }

    fn turn_on_backlight(&self) -> VendorResult<()> {
        self.bound_call("turn_on_backlight", args![])?.backlight_on = true;
        Ok(())
    }

    fn turn_off_backlight(&self) -> VendorResult<()> {
        self.bound_call("turn_off_backlight", args![])?.backlight_on = false;
        Ok(())
    }

    fn is_backlight_on(&self) -> VendorResult<bool> {
        Ok(self.bound_call("is_backlight_on", args![])?.backlight_on)
    }

    fn turn_on_hdmi(&self) -> VendorResult<()> {
        self.bound_call("turn_on_hdmi", args![])?.hdmi_on = true;
        Ok(())
    }

    fn turn_off_hdmi(&self) -> VendorResult<()> {
        self.bound_call("turn_off_hdmi", args![])?.hdmi_on = false;
        Ok(())
    }

    fn hdmi_in_status(&self) -> VendorResult<bool> {
        Ok(self.bound_call("hdmi_in_status", args![])?.hdmi_in)
    }

    fn hide_status_bar(&self, hide: bool) -> VendorResult<()> {
        self.bound_call("hide_status_bar", args![hide])?.status_bar_hidden = hide;
        Ok(())
    }

    fn status_bar_state(&self) -> VendorResult<bool> {
        Ok(self.bound_call("status_bar_state", args![])?.status_bar_hidden)
    }

    fn upgrade_system(&self, absolute_path: &str) -> VendorResult<()> {
        self.touch("upgrade_system", args![absolute_path])
    }

    fn silent_install_apk(&self, apk_path: &str, launch: bool) -> VendorResult<bool> {
        let mut state = self.bound_call("silent_install_apk", args![apk_path, launch])?;
        state.installed.insert(apk_path.to_string());
        Ok(true)
    }

    fn uninstall_apk(&self, package_name: &str) -> VendorResult<()> {
        let mut state = self.bound_call("uninstall_apk", args![package_name])?;
        if state.installed.remove(package_name) {
            Ok(())
        } else {
            Err(VendorError::Call {
                method: "uninstall_apk",
                message: format!("{} is not installed", package_name),
            })
        }
    }

    fn eth_mac_address(&self) -> VendorResult<String> {
        Ok(self.bound_call("eth_mac_address", args![])?.eth_mac.clone())
    }

    fn eth_mode(&self) -> VendorResult<String> {
        let state = self.bound_call("eth_mode", args![])?;
        Ok(if state.static_ip.is_some() { "STATIC" } else { "DHCP" }.into())
    }

    fn eth_status(&self) -> VendorResult<bool> {
        Ok(self.bound_call("eth_status", args![])?.eth_enabled)
    }

    fn net_mask(&self) -> VendorResult<String> {
        self.touch("net_mask", args![])?;
        Ok("255.255.255.0".into())
    }

    fn gateway(&self) -> VendorResult<String> {
        self.touch("gateway", args![])?;
        Ok("192.168.1.1".into())
    }

    fn eth_dns1(&self) -> VendorResult<String> {
        self.touch("eth_dns1", args![])?;
        Ok("8.8.8.8".into())
    }

    fn eth_dns2(&self) -> VendorResult<String> {
        self.touch("eth_dns2", args![])?;
        Ok("0.0.0.0".into())
    }

    fn static_eth_ip_address(&self) -> VendorResult<String> {
        let state = self.bound_call("static_eth_ip_address", args![])?;
        Ok(state
            .static_ip
            .as_ref()
            .and_then(|args| args.first().cloned())
            .unwrap_or_default())
    }

    fn set_dhcp_ip_address(&self) -> VendorResult<()> {
        self.bound_call("set_dhcp_ip_address", args![])?.static_ip = None;
        Ok(())
    }

    fn set_static_eth_ip_address(
        &self,
        ip: &str,
        gateway: &str,
        mask: &str,
        dns1: &str,
        dns2: &str,
    ) -> VendorResult<()> {
        let args = args![ip, gateway, mask, dns1, dns2];
        let mut state = self.bound_call("set_static_eth_ip_address", args.clone())?;
        state.static_ip = Some(args);
        Ok(())
    }

    fn eth_enabled(&self, enabled: bool) -> VendorResult<()> {
        self.bound_call("eth_enabled", args![enabled])?.eth_enabled = enabled;
        Ok(())
    }

    fn set_power_on_off_with_weekly(
        &self,
        power_on: &[i32],
        power_off: &[i32],
        weekdays: &[i32],
    ) -> VendorResult<()> {
        let args = args![
            format!("{:?}", power_on),
            format!("{:?}", power_off),
            format!("{:?}", weekdays)
        ];
        let on = args[0].clone();
        let off = args[1].clone();
        let mut state = self.bound_call("set_power_on_off_with_weekly", args)?;
        state.power_schedule = Some((on, off));
        Ok(())
    }

    fn set_power_on_off(&self, power_on: &[i32], power_off: &[i32]) -> VendorResult<()> {
        let on = format!("{:?}", power_on);
        let off = format!("{:?}", power_off);
        let mut state = self.bound_call("set_power_on_off", args![on, off])?;
        state.power_schedule = Some((on, off));
        Ok(())
    }

    fn power_on_time(&self) -> VendorResult<String> {
        let state = self.bound_call("power_on_time", args![])?;
        Ok(state.power_schedule.as_ref().map(|(on, _)| on.clone()).unwrap_or_default())
    }

    fn power_off_time(&self) -> VendorResult<String> {
        let state = self.bound_call("power_off_time", args![])?;
        Ok(state.power_schedule.as_ref().map(|(_, off)| off.clone()).unwrap_or_default())
    }

    fn is_set_power_on_time(&self) -> VendorResult<bool> {
        Ok(self.bound_call("is_set_power_on_time", args![])?.power_schedule.is_some())
    }

    fn clear_power_on_off_time(&self) -> VendorResult<()> {
        self.bound_call("clear_power_on_off_time", args![])?.power_schedule = None;
        Ok(())
    }

    fn set_gpio_direction(&self, gpio: u32, arg: i32) -> VendorResult<bool> {
        let mut state = self.bound_call("set_gpio_direction", args![gpio, arg])?;
        let direction = if arg == 1 { "in" } else { "out" };
        state.ys_gpio.entry(gpio).or_insert_with(|| ("in".into(), "0".into())).0 =
            direction.into();
        Ok(true)
    }

    fn gpio_direction(&self, gpio: u32) -> VendorResult<String> {
        let state = self.bound_call("gpio_direction", args![gpio])?;
        Ok(state
            .ys_gpio
            .get(&gpio)
            .map(|(direction, _)| direction.clone())
            .unwrap_or_else(|| "in".into()))
    }

    fn write_gpio_value(&self, gpio: u32, value: &str) -> VendorResult<bool> {
        let mut state = self.bound_call("write_gpio_value", args![gpio, value])?;
        state.ys_gpio.entry(gpio).or_insert_with(|| ("out".into(), "0".into())).1 =
            value.into();
        Ok(true)
    }

    fn gpio_value(&self, gpio: u32) -> VendorResult<String> {
        let state = self.bound_call("gpio_value", args![gpio])?;
        Ok(state
            .ys_gpio
            .get(&gpio)
            .map(|(_, value)| value.clone())
            .unwrap_or_else(|| "0".into()))
    }

    fn set_time(
        &self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> VendorResult<()> {
        self.touch("set_time", args![year, month, day, hour, minute, second])
    }

    fn exec_su_cmd(&self, command: &str) -> VendorResult<()> {
        self.touch("exec_su_cmd", args![command])
    }

    fn set_default_input_method(&self, input_method: &str) -> VendorResult<bool> {
        self.touch("set_default_input_method", args![input_method])?;
        Ok(true)
    }

    fn set_language(&self, language: &str, country: &str) -> VendorResult<()> {
        self.touch("set_language", args![language, country])
    }

    fn set_default_launcher(&self, package_and_class: &str) -> VendorResult<()> {
        self.touch("set_default_launcher", args![package_and_class])
    }

    fn self_start(&self, package_name: &str) -> VendorResult<()> {
        self.touch("self_start", args![package_name])
    }

    fn daemon(&self, package_name: &str, value: i32) -> VendorResult<()> {
        self.touch("daemon", args![package_name, value])
    }
}

/// Mock Zhuoce `zcapi` handle
pub struct MockZc {
    shared: Shared,
}

impl MockZc {
    fn touch(&self, method: &'static str, args: Vec<String>) -> VendorResult<()> {
        self.shared.call(method, args).map(|_| ())
    }
}

impl ZcApi for MockZc {
    fn reboot(&self) -> VendorResult<()> {
        self.touch("reboot", args![])
    }

    fn shut_down(&self) -> VendorResult<()> {
        self.touch("shut_down", args![])
    }

    fn factory_reset(&self) -> VendorResult<()> {
        self.touch("factory_reset", args![])
    }

    fn update_ota(&self) -> VendorResult<()> {
        self.touch("update_ota", args![])
    }

    fn set_power_on_off_time(
        &self,
        enable: bool,
        on_time: &[i32],
        off_time: &[i32],
    ) -> VendorResult<()> {
        let on = format!("{:?}", on_time);
        let off = format!("{:?}", off_time);
        let mut state = self
            .shared
            .call("set_power_on_off_time", args![enable, on, off])?;
        state.power_schedule = enable.then_some((on, off));
        Ok(())
    }

    fn set_system_time(&self, time: &[i32]) -> VendorResult<()> {
        self.touch("set_system_time", args![format!("{:?}", time)])
    }

    fn build_model(&self) -> VendorResult<String> {
        Ok(self.shared.call("build_model", args![])?.model.clone())
    }

    fn build_serial(&self) -> VendorResult<String> {
        Ok(self.shared.call("build_serial", args![])?.serial.clone())
    }

    fn eth_mac_address(&self, iface: &str) -> VendorResult<String> {
        Ok(self.shared.call("eth_mac_address", args![iface])?.eth_mac.clone())
    }

    fn wifi_mac_address(&self) -> VendorResult<String> {
        self.touch("wifi_mac_address", args![])?;
        Ok("02:00:00:00:00:02".into())
    }

    fn set_lcd_on_off(&self, enable: bool) -> VendorResult<()> {
        self.shared.call("set_lcd_on_off", args![enable])?.backlight_on = enable;
        Ok(())
    }

    fn set_lcd_hdmi_on_off(&self, enable: bool, lcd_or_hdmi: i32) -> VendorResult<()> {
        self.shared
            .call("set_lcd_hdmi_on_off", args![enable, lcd_or_hdmi])?
            .hdmi_on = enable;
        Ok(())
    }

    fn set_status_bar(&self, enable: bool) -> VendorResult<()> {
        let mut state = self.shared.call("set_status_bar", args![enable])?;
        state.nav_bar_hidden = !enable;
        state.status_bar_hidden = !enable;
        Ok(())
    }

    fn set_gesture_status_bar(&self, enable: bool) -> VendorResult<()> {
        self.touch("set_gesture_status_bar", args![enable])
    }

    fn set_mul_sel_gpio(&self, group: char, num: u32, value: i32) -> VendorResult<()> {
        let mut state = self.shared.call("set_mul_sel_gpio", args![group, num, value])?;
        state.zc_gpio.entry((group, num)).or_insert((0, 0)).0 = value;
        Ok(())
    }

    fn read_gpio(&self, group: char, num: u32) -> VendorResult<i32> {
        let state = self.shared.call("read_gpio", args![group, num])?;
        Ok(state.zc_gpio.get(&(group, num)).map(|(_, level)| *level).unwrap_or(0))
    }

    fn write_gpio(&self, group: char, num: u32, value: i32) -> VendorResult<()> {
        let mut state = self.shared.call("write_gpio", args![group, num, value])?;
        state.zc_gpio.entry((group, num)).or_insert((1, 0)).1 = value;
        Ok(())
    }

    fn watch_dog_enable(&self, enable: bool) -> VendorResult<()> {
        self.shared.call("watch_dog_enable", args![enable])?.watchdog = enable;
        Ok(())
    }

    fn exec_shell_cmd(&self, command: &str) -> VendorResult<()> {
        self.touch("exec_shell_cmd", args![command])
    }

    fn screenshot(&self, path: &str, file_name: &str) -> VendorResult<()> {
        self.touch("screenshot", args![path, file_name])
    }

    fn install_apk(&self, apk_path: &str, silent: bool) -> VendorResult<()> {
        self.shared
            .call("install_apk", args![apk_path, silent])?
            .installed
            .insert(apk_path.to_string());
        Ok(())
    }

    fn set_static_ip(
        &self,
        ip: &str,
        gateway: &str,
        net_mask: &str,
        dns1: &str,
        dns2: &str,
        iface: &str,
    ) -> VendorResult<()> {
        let args = args![ip, gateway, net_mask, dns1, dns2, iface];
        let mut state = self.shared.call("set_static_ip", args.clone())?;
        state.static_ip = Some(args);
        Ok(())
    }

    fn set_dhcp(&self, iface: &str) -> VendorResult<()> {
        self.shared.call("set_dhcp", args![iface])?.static_ip = None;
        Ok(())
    }
}

/// Mock LangGuo broadcast sender
pub struct MockLangGuo {
    shared: Shared,
}

impl LangGuoApi for MockLangGuo {
    fn send_broadcast(&self, action: &str) -> VendorResult<()> {
        self.shared.call("send_broadcast", args![action]).map(|_| ())
    }
}

/// Hands out mocks backed by one shared state
pub struct MockProvider {
    state: Arc<RwLock<MockState>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockState::new())),
        }
    }

    /// Get shared state for manipulation in tests
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        Arc::clone(&self.state)
    }

    fn shared(&self) -> VendorResult<Shared> {
        let shared = Shared(Arc::clone(&self.state));
        if shared.lock()?.unavailable {
            return Err(VendorError::Unavailable("mock provider disabled".into()));
        }
        Ok(shared)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceProvider for MockProvider {
    fn ys(&self) -> VendorResult<Box<dyn YsApi>> {
        Ok(Box::new(MockYs {
            shared: self.shared()?,
        }))
    }

    fn zc(&self) -> VendorResult<Box<dyn ZcApi>> {
        Ok(Box::new(MockZc {
            shared: self.shared()?,
        }))
    }

    fn langguo(&self) -> VendorResult<Box<dyn LangGuoApi>> {
        Ok(Box::new(MockLangGuo {
            shared: self.shared()?,
        }))
    }
}
