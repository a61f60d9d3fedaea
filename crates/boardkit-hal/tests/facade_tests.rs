//! Integration tests for the board facade over mock vendor services

use boardkit_config::{BoardKitConfig, HdmiTarget};
use boardkit_hal::mock::{MockProvider, MockState};
use boardkit_hal::{
    ActiveBoard, Backend, Board, BoardKit, Capability, DeviceProperties, Fallback, GpioDirection,
    GpioLevel, GpioPin, KitError, OneTimeSchedule, Rotation, StaticIpConfig, VendorError, select,
};
use chrono::NaiveDate;
use std::net::Ipv4Addr;
use std::sync::{Arc, RwLock};

/// Facade plus the mock state behind it
struct FacadeTestEnv {
    kit: BoardKit,
    state: Arc<RwLock<MockState>>,
}

impl FacadeTestEnv {
    fn new(model: &str) -> Self {
        Self::with_config(model, BoardKitConfig::default())
    }

    fn with_config(model: &str, config: BoardKitConfig) -> Self {
        let provider = MockProvider::new();
        let state = provider.state();
        let kit = BoardKit::create(&provider, DeviceProperties::from_model(model), &config)
            .expect("Failed to create facade");
        Self { kit, state }
    }

    fn calls_to(&self, method: &str) -> usize {
        self.state.read().unwrap().calls_to(method)
    }

    fn last_args(&self, method: &str) -> Vec<String> {
        self.state
            .read()
            .unwrap()
            .last_call(method)
            .map(|c| c.args.clone())
            .unwrap_or_default()
    }
}

#[test]
fn test_zc_model_selects_zhuoce() {
    let env = FacadeTestEnv::new("ZC-3288");
    assert!(matches!(env.kit.active(), ActiveBoard::Zc(_)));
    assert_eq!(env.kit.board(), Board::Zc);
    assert_eq!(env.kit.service_info(), "Zhuoce board service v2.x");
    assert_eq!(env.calls_to("bind_aidl_service"), 0);
}

#[test]
fn test_lg_model_selects_langguo() {
    let env = FacadeTestEnv::new("lg-t10");
    assert!(matches!(env.kit.active(), ActiveBoard::LangGuo(_)));
    assert_eq!(env.kit.service_info(), "LangGuo board service");
}

#[test]
fn test_yisheng_models_bind_once() {
    for model in ["RK3568", "YS-A1", "A527-X", "ys-lower", "UNKNOWN-X", ""] {
        let env = FacadeTestEnv::new(model);
        assert_eq!(env.kit.active().backend(), Backend::Ys, "model {:?}", model);
        assert_eq!(env.calls_to("bind_aidl_service"), 1, "model {:?}", model);
        assert!(env.state.read().unwrap().bound);
    }
}

#[test]
fn test_board_matches_selector() {
    for model in ["ZC-3288", "zc339", "lg-t10", "LG-T10", "RK3568", "A527", "other", ""] {
        let env = FacadeTestEnv::new(model);
        assert_eq!(env.kit.board(), select(model), "model {:?}", model);
        assert_eq!(env.kit.active().backend(), select(model).backend());
    }
}

#[test]
fn test_unknown_model_reports_unknown_board() {
    let env = FacadeTestEnv::new("X1-TABLET");
    assert_eq!(env.kit.board(), Board::Unknown);
    assert_eq!(env.kit.service_info(), "Yisheng board service");
}

#[test]
fn test_release_unbinds_yisheng_once() {
    let env = FacadeTestEnv::new("RK3568");
    let FacadeTestEnv { kit, state } = env;

    kit.release().unwrap();

    let state = state.read().unwrap();
    assert_eq!(state.calls_to("unbind_aidl_service"), 1);
    assert!(!state.bound);
}

#[test]
fn test_release_is_noop_for_other_boards() {
    for model in ["ZC-3288", "lg-t10"] {
        let FacadeTestEnv { kit, state } = FacadeTestEnv::new(model);
        kit.release().unwrap();
        assert!(state.read().unwrap().calls.is_empty());
    }
}

#[test]
fn test_provider_failure_aborts_creation() {
    let provider = MockProvider::new();
    provider.state().write().unwrap().unavailable = true;

    let result = BoardKit::create(
        &provider,
        DeviceProperties::from_model("ZC-3288"),
        &BoardKitConfig::default(),
    );
    assert!(matches!(
        result,
        Err(KitError::Vendor(VendorError::Unavailable(_)))
    ));
}

#[test]
fn test_reboot_routes_to_each_vendor() {
    let zc = FacadeTestEnv::new("ZC-3288");
    zc.kit.safe_reboot().unwrap();
    assert_eq!(zc.calls_to("reboot"), 1);

    let lg = FacadeTestEnv::new("lg-t10");
    lg.kit.reboot().unwrap();
    lg.kit.shutdown().unwrap();
    assert_eq!(
        lg.state
            .read()
            .unwrap()
            .calls
            .iter()
            .map(|c| c.args[0].as_str())
            .collect::<Vec<_>>(),
        vec![
            "android.intent.action.reboot",
            "android.intent.action.shutdown"
        ]
    );

    let ys = FacadeTestEnv::new("YS-A1");
    ys.kit.safe_shutdown().unwrap();
    assert_eq!(ys.calls_to("shutdown"), 1);
}

#[test]
fn test_reboot_failure_propagates() {
    let env = FacadeTestEnv::new("ZC-3288");
    env.state.write().unwrap().fail_on("reboot");

    let err = env.kit.safe_reboot().unwrap_err();
    assert!(matches!(
        err,
        KitError::Vendor(VendorError::Call {
            method: "reboot",
            ..
        })
    ));
}

#[test]
fn test_shutdown_failure_propagates() {
    for (model, method) in [
        ("RK3568", "shutdown"),
        ("ZC-3288", "shut_down"),
        ("lg-t10", "send_broadcast"),
    ] {
        let env = FacadeTestEnv::new(model);
        env.state.write().unwrap().fail_on(method);

        let err = env.kit.safe_shutdown().unwrap_err();
        match err {
            KitError::Vendor(VendorError::Call { method: failed, .. }) => {
                assert_eq!(failed, method, "model {:?}", model)
            }
            other => panic!("unexpected error for {:?}: {:?}", model, other),
        }
        assert_eq!(env.calls_to(method), 1);
    }
}

#[test]
fn test_bind_failure_aborts_creation() {
    let provider = MockProvider::new();
    provider
        .state()
        .write()
        .unwrap()
        .fail_on("bind_aidl_service");

    let result = BoardKit::create(
        &provider,
        DeviceProperties::from_model("RK3568"),
        &BoardKitConfig::default(),
    );
    assert!(matches!(
        result,
        Err(KitError::Vendor(VendorError::Call {
            method: "bind_aidl_service",
            ..
        }))
    ));
    assert!(!provider.state().read().unwrap().bound);
}

/// Shape of a facade result
#[derive(Debug, PartialEq)]
enum Outcome {
    Null,
    False,
    Done,
    Unsupported,
    Value,
    Failed,
}

impl Outcome {
    fn expected_for(fallback: Fallback) -> Self {
        match fallback {
            Fallback::Null => Outcome::Null,
            Fallback::False => Outcome::False,
            Fallback::Warn => Outcome::Done,
            Fallback::Fail => Outcome::Unsupported,
            Fallback::Always => panic!("operation is never unsupported"),
        }
    }

    fn of_error(err: KitError) -> Self {
        match err {
            KitError::Unsupported { .. } => Outcome::Unsupported,
            _ => Outcome::Failed,
        }
    }

    fn optional<T>(result: boardkit_hal::Result<Option<T>>) -> Self {
        match result {
            Ok(None) => Outcome::Null,
            Ok(Some(_)) => Outcome::Value,
            Err(e) => Self::of_error(e),
        }
    }

    fn flag(result: boardkit_hal::Result<bool>) -> Self {
        match result {
            Ok(false) => Outcome::False,
            Ok(true) => Outcome::Value,
            Err(e) => Self::of_error(e),
        }
    }

    fn action(result: boardkit_hal::Result<()>) -> Self {
        match result {
            Ok(()) => Outcome::Done,
            Err(e) => Self::of_error(e),
        }
    }
}

const DRIVEN: &[Capability] = &[
    Capability::DeviceModel,
    Capability::SerialNumber,
    Capability::ApiVersion,
    Capability::FirmwareVersion,
    Capability::MemorySize,
    Capability::StorageSize,
    Capability::CpuTemperature,
    Capability::BacklightState,
    Capability::HdmiStatus,
    Capability::NavigationBarState,
    Capability::EthernetMacAddress,
    Capability::GpioRead,
    Capability::Screenshot,
    Capability::SilentInstall,
    Capability::SilentUninstall,
    Capability::GpioWrite,
    Capability::DefaultInputMethod,
    Capability::FactoryReset,
    Capability::OtaUpdate,
    Capability::FirmwareUpgrade,
    Capability::ScreenRotation,
    Capability::Backlight,
    Capability::HdmiOutput,
    Capability::ScreenBrightness,
    Capability::EthernetDhcp,
    Capability::EthernetToggle,
    Capability::ClearPowerSchedule,
    Capability::SuCommand,
    Capability::AutoStartApp,
    Capability::Watchdog,
];

fn drive(kit: &BoardKit, capability: Capability, pin: GpioPin) -> Outcome {
    match capability {
        Capability::DeviceModel => Outcome::optional(kit.device_model()),
        Capability::SerialNumber => Outcome::optional(kit.serial_number()),
        Capability::ApiVersion => Outcome::optional(kit.api_version()),
        Capability::FirmwareVersion => Outcome::optional(kit.firmware_version()),
        Capability::MemorySize => Outcome::optional(kit.memory_size()),
        Capability::StorageSize => Outcome::optional(kit.storage_size()),
        Capability::CpuTemperature => Outcome::optional(kit.cpu_temperature()),
        Capability::BacklightState => Outcome::optional(kit.is_backlight_on()),
        Capability::HdmiStatus => Outcome::optional(kit.hdmi_status()),
        Capability::NavigationBarState => Outcome::optional(kit.navigation_bar_visible()),
        Capability::EthernetMacAddress => Outcome::optional(kit.ethernet_mac_address()),
        Capability::GpioRead => Outcome::optional(kit.read_gpio_value(pin)),
        Capability::Screenshot => Outcome::flag(kit.take_screenshot("/sdcard", None)),
        Capability::SilentInstall => Outcome::flag(kit.silent_install_apk("/sdcard/app.apk")),
        Capability::SilentUninstall => Outcome::flag(kit.silent_uninstall_apk("com.example")),
        Capability::GpioWrite => Outcome::flag(kit.write_gpio_value(pin, GpioLevel::High)),
        Capability::DefaultInputMethod => Outcome::flag(kit.set_default_input_method("ime")),
        Capability::FactoryReset => Outcome::action(kit.factory_reset()),
        Capability::OtaUpdate => Outcome::action(kit.update_ota()),
        Capability::FirmwareUpgrade => Outcome::action(kit.upgrade_system("/sdcard/update.img")),
        Capability::ScreenRotation => Outcome::action(kit.rotate_screen(Rotation::Rotate90)),
        Capability::Backlight => Outcome::action(kit.set_backlight(true)),
        Capability::HdmiOutput => Outcome::action(kit.set_hdmi_output(true)),
        Capability::ScreenBrightness => Outcome::action(kit.set_screen_brightness(50)),
        Capability::EthernetDhcp => Outcome::action(kit.set_ethernet_dhcp()),
        Capability::EthernetToggle => Outcome::action(kit.set_ethernet_enabled(true)),
        Capability::ClearPowerSchedule => Outcome::action(kit.clear_power_schedule()),
        Capability::SuCommand => Outcome::action(kit.execute_su_command("id")),
        Capability::AutoStartApp => Outcome::action(kit.set_auto_start_app("com.example")),
        Capability::Watchdog => Outcome::action(kit.set_watchdog(true)),
        other => panic!("no driver for {other}"),
    }
}

#[test]
fn test_facade_matches_capability_table() {
    for model in ["RK3568", "ZC-3288", "lg-t10"] {
        let env = FacadeTestEnv::new(model);
        let backend = env.kit.active().backend();
        let pin = match backend {
            Backend::Zc => GpioPin::bank('B', 1),
            _ => GpioPin::Number(1),
        };

        for &capability in DRIVEN {
            let before = env.state.read().unwrap().calls.len();
            let outcome = drive(&env.kit, capability, pin);
            let after = env.state.read().unwrap().calls.len();

            if capability.supported_by(backend) {
                assert!(
                    after > before,
                    "{capability} on {backend} made no vendor call"
                );
            } else {
                assert_eq!(
                    outcome,
                    Outcome::expected_for(capability.fallback()),
                    "{capability} on {backend}"
                );
                assert_eq!(after, before, "{capability} on {backend} reached the vendor");
            }
        }
    }
}

#[test]
fn test_factory_reset_and_ota() {
    let zc = FacadeTestEnv::new("ZC-3288");
    zc.kit.factory_reset().unwrap();
    zc.kit.update_ota().unwrap();
    assert_eq!(zc.calls_to("factory_reset"), 1);
    assert_eq!(zc.calls_to("update_ota"), 1);

    let ys = FacadeTestEnv::new("RK3568");
    ys.kit.factory_reset().unwrap();
    assert_eq!(ys.calls_to("reboot_recovery"), 1);
    assert!(matches!(
        ys.kit.update_ota(),
        Err(KitError::Unsupported {
            operation: Capability::OtaUpdate,
            board: Board::Ys,
        })
    ));

    let lg = FacadeTestEnv::new("lg-t10");
    let err = lg.kit.factory_reset().unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("{} is not supported on {}", Capability::FactoryReset, Board::LangGuo)
    );
    assert!(lg.state.read().unwrap().calls.is_empty());
}

#[test]
fn test_unsupported_fallbacks_on_langguo() {
    let env = FacadeTestEnv::new("lg-t10");
    let kit = &env.kit;

    assert_eq!(kit.device_model().unwrap(), None);
    assert_eq!(kit.serial_number().unwrap(), None);
    assert_eq!(kit.ethernet_mac_address().unwrap(), None);
    assert!(!kit.take_screenshot("/sdcard", None).unwrap());
    assert!(!kit.silent_install_apk("/sdcard/app.apk").unwrap());
    assert!(!kit.silent_uninstall_apk("com.example.app").unwrap());
    assert!(!kit.set_default_input_method("com.example/.Ime").unwrap());
    assert!(
        !kit.write_gpio_value(GpioPin::Number(1), GpioLevel::High)
            .unwrap()
    );
    assert_eq!(kit.read_gpio_value(GpioPin::bank('b', 2)).unwrap(), None);

    kit.set_backlight(false).unwrap();
    kit.set_hdmi_output(true).unwrap();
    kit.set_ethernet_dhcp().unwrap();
    kit.execute_su_command("ls").unwrap();
    kit.set_watchdog(true).unwrap();

    assert!(env.state.read().unwrap().calls.is_empty());
}

#[test]
fn test_unsupported_fallbacks_on_zhuoce() {
    let env = FacadeTestEnv::new("ZC-3288");
    let kit = &env.kit;

    assert_eq!(kit.api_version().unwrap(), None);
    assert_eq!(kit.firmware_version().unwrap(), None);
    assert_eq!(kit.memory_size().unwrap(), None);
    assert_eq!(kit.storage_size().unwrap(), None);
    assert_eq!(kit.is_backlight_on().unwrap(), None);
    assert!(!kit.silent_uninstall_apk("com.example.app").unwrap());

    kit.rotate_screen(Rotation::Rotate90).unwrap();
    kit.upgrade_system("/sdcard/update.img").unwrap();
    kit.set_screen_brightness(50).unwrap();
    kit.clear_power_schedule().unwrap();

    assert!(env.state.read().unwrap().calls.is_empty());
}

#[test]
fn test_uninstall_failure_reports_false() {
    let env = FacadeTestEnv::new("RK3568");
    env.state
        .write()
        .unwrap()
        .installed
        .insert("com.example.app".into());

    assert!(env.kit.silent_uninstall_apk("com.example.app").unwrap());
    assert!(!env.kit.silent_uninstall_apk("com.example.app").unwrap());

    env.state.write().unwrap().fail_on("uninstall_apk");
    assert!(!env.kit.silent_uninstall_apk("com.example.other").unwrap());
}

#[test]
fn test_install_failure_propagates() {
    let env = FacadeTestEnv::new("ZC-3288");
    env.state.write().unwrap().fail_on("install_apk");

    assert!(env.kit.silent_install_apk("/sdcard/app.apk").is_err());
}

#[test]
fn test_silent_install_uses_config() {
    let mut config = BoardKitConfig::default();
    config.install.zc_silent_mode = false;
    config.install.ys_launch_after_install = false;

    let zc = FacadeTestEnv::with_config("ZC-3288", config.clone());
    assert!(zc.kit.silent_install_apk("/sdcard/app.apk").unwrap());
    assert_eq!(zc.last_args("install_apk"), vec!["/sdcard/app.apk", "false"]);

    let ys = FacadeTestEnv::with_config("RK3568", config);
    assert!(ys.kit.silent_install_apk("/sdcard/app.apk").unwrap());
    assert_eq!(
        ys.last_args("silent_install_apk"),
        vec!["/sdcard/app.apk", "false"]
    );
}

#[test]
fn test_screenshot_paths() {
    let zc = FacadeTestEnv::new("ZC-3288");
    assert!(zc.kit.take_screenshot("/sdcard/Pictures", None).unwrap());
    assert_eq!(
        zc.last_args("screenshot"),
        vec!["/sdcard/Pictures", "screenshot.png"]
    );

    let ys = FacadeTestEnv::new("RK3568");
    assert!(ys.kit.take_screenshot("/sdcard/Pictures", None).unwrap());
    assert_eq!(
        ys.last_args("take_screenshot"),
        vec!["/sdcard/Pictures/screenshot.jpg"]
    );
    assert!(ys.kit.take_screenshot("/sdcard", Some("shot.jpg")).unwrap());
    assert_eq!(ys.last_args("take_screenshot"), vec!["/sdcard/shot.jpg"]);
}

#[test]
fn test_yisheng_screenshot_rebinds() {
    let env = FacadeTestEnv::new("RK3568");
    env.kit.take_screenshot("/sdcard", None).unwrap();
    assert_eq!(env.calls_to("bind_aidl_service"), 2);
}

#[test]
fn test_hdmi_target_from_config() {
    let env = FacadeTestEnv::new("ZC-3288");
    env.kit.set_hdmi_output(true).unwrap();
    assert_eq!(env.last_args("set_lcd_hdmi_on_off"), vec!["true", "-1"]);

    let mut config = BoardKitConfig::default();
    config.display.hdmi_target = HdmiTarget::LcdAndHdmi;
    let env = FacadeTestEnv::with_config("ZC-3288", config);
    env.kit.set_hdmi_output(false).unwrap();
    assert_eq!(env.last_args("set_lcd_hdmi_on_off"), vec!["false", "1"]);
}

#[test]
fn test_bars_visibility_on_yisheng() {
    let env = FacadeTestEnv::new("YS-A1");
    let kit = &env.kit;

    kit.set_navigation_bar_visible(false).unwrap();
    assert_eq!(env.last_args("hide_nav_bar"), vec!["true"]);
    assert_eq!(kit.navigation_bar_visible().unwrap(), Some(false));

    kit.set_status_bar_visible(true).unwrap();
    assert_eq!(kit.status_bar_visible().unwrap(), Some(true));

    kit.set_slide_navigation_bar(true).unwrap();
    assert_eq!(kit.slide_navigation_bar_enabled().unwrap(), Some(true));
}

#[test]
fn test_bars_on_zhuoce_share_one_switch() {
    let env = FacadeTestEnv::new("ZC-3288");
    env.kit.set_navigation_bar_visible(false).unwrap();
    env.kit.set_status_bar_visible(true).unwrap();

    assert_eq!(env.calls_to("set_status_bar"), 2);
    assert_eq!(env.kit.navigation_bar_visible().unwrap(), None);
}

#[test]
fn test_ethernet_uses_configured_interface() {
    let mut config = BoardKitConfig::default();
    config.network.ethernet_interface = "eth1".into();
    let env = FacadeTestEnv::with_config("ZC-3288", config);

    env.kit.set_ethernet_dhcp().unwrap();
    assert_eq!(env.last_args("set_dhcp"), vec!["eth1"]);

    let static_ip = StaticIpConfig::new(
        Ipv4Addr::new(192, 168, 1, 50),
        Ipv4Addr::new(192, 168, 1, 1),
        Ipv4Addr::new(255, 255, 255, 0),
        Ipv4Addr::new(8, 8, 8, 8),
    );
    env.kit.set_ethernet_static_ip(&static_ip).unwrap();
    assert_eq!(
        env.last_args("set_static_ip"),
        vec![
            "192.168.1.50",
            "192.168.1.1",
            "255.255.255.0",
            "8.8.8.8",
            "0.0.0.0",
            "eth1"
        ]
    );

    assert_eq!(
        env.kit.ethernet_mac_address().unwrap().as_deref(),
        Some("02:00:00:00:00:01")
    );
    assert_eq!(env.last_args("eth_mac_address"), vec!["eth1"]);
}

#[test]
fn test_gpio_on_yisheng() {
    let env = FacadeTestEnv::new("RK3568");
    let pin = GpioPin::Number(42);

    assert!(env.kit.set_gpio_direction(pin, GpioDirection::Output).unwrap());
    assert_eq!(env.last_args("set_gpio_direction"), vec!["42", "0"]);
    assert!(env.kit.write_gpio_value(pin, GpioLevel::High).unwrap());
    assert_eq!(env.kit.read_gpio_value(pin).unwrap().as_deref(), Some("1"));
}

#[test]
fn test_gpio_on_zhuoce() {
    let env = FacadeTestEnv::new("ZC-3288");
    let pin = GpioPin::bank('b', 18);

    assert!(env.kit.set_gpio_direction(pin, GpioDirection::Output).unwrap());
    assert_eq!(env.last_args("set_mul_sel_gpio"), vec!["B", "18", "1"]);
    assert!(env.kit.write_gpio_value(pin, GpioLevel::High).unwrap());
    assert_eq!(env.kit.read_gpio_value(pin).unwrap().as_deref(), Some("1"));
}

#[test]
fn test_gpio_pin_shape_mismatch() {
    let ys = FacadeTestEnv::new("RK3568");
    assert!(matches!(
        ys.kit.read_gpio_value(GpioPin::bank('B', 18)),
        Err(KitError::InvalidPin {
            backend: Backend::Ys,
            ..
        })
    ));

    let zc = FacadeTestEnv::new("ZC-3288");
    assert!(matches!(
        zc.kit.write_gpio_value(GpioPin::Number(3), GpioLevel::Low),
        Err(KitError::InvalidPin {
            backend: Backend::Zc,
            ..
        })
    ));
    assert!(zc.state.read().unwrap().calls.is_empty());
}

#[test]
fn test_one_time_power_schedule() {
    let on = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let off = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(22, 30, 0)
        .unwrap();
    let schedule = OneTimeSchedule::new(on, off);

    let zc = FacadeTestEnv::new("ZC-3288");
    zc.kit.set_one_time_power_schedule(&schedule).unwrap();
    assert_eq!(
        zc.last_args("set_power_on_off_time"),
        vec!["true", "[2026, 3, 1, 8, 0]", "[2026, 3, 1, 22, 30]"]
    );

    let ys = FacadeTestEnv::new("RK3568");
    ys.kit.set_one_time_power_schedule(&schedule).unwrap();
    ys.kit.clear_power_schedule().unwrap();
    assert!(ys.state.read().unwrap().power_schedule.is_none());
}

#[test]
fn test_su_command_routing() {
    let ys = FacadeTestEnv::new("RK3568");
    ys.kit.execute_su_command("reboot -p").unwrap();
    assert_eq!(ys.last_args("exec_su_cmd"), vec!["reboot -p"]);

    let zc = FacadeTestEnv::new("ZC-3288");
    zc.kit.execute_su_command("ls /data").unwrap();
    assert_eq!(zc.last_args("exec_shell_cmd"), vec!["ls /data"]);
}

#[test]
fn test_device_info_on_yisheng() {
    let env = FacadeTestEnv::new("RK3568");
    let info = env.kit.device_info().unwrap();

    assert_eq!(info.model, "RK3568");
    assert_eq!(info.board_type, "Yisheng board");
    assert_eq!(info.serial_number.as_deref(), Some("MOCK0001"));
    assert_eq!(info.api_version.as_deref(), Some("1.0.0"));
    assert_eq!(info.android_version, None);
}

#[test]
fn test_device_info_reports_host_android_release() {
    let provider = MockProvider::new();
    let properties = DeviceProperties {
        model: "RK3568".into(),
        android_release: Some("12".into()),
        sdk_int: Some(31),
    };
    let kit = BoardKit::create(&provider, properties, &BoardKitConfig::default()).unwrap();

    let info = kit.device_info().unwrap();
    assert_eq!(info.android_version.as_deref(), Some("12"));
    assert_eq!(provider.state().read().unwrap().calls_to("android_version"), 0);

    // The standalone getter still asks the vendor first
    assert_eq!(kit.android_version().unwrap().as_deref(), Some("11"));
}

#[test]
fn test_device_info_on_langguo() {
    let provider = MockProvider::new();
    let properties = DeviceProperties {
        model: "lg-t10".into(),
        android_release: Some("9".into()),
        sdk_int: Some(28),
    };
    let kit = BoardKit::create(&provider, properties, &BoardKitConfig::default()).unwrap();

    let info = kit.device_info().unwrap();
    assert_eq!(info.board_type, "LangGuo board");
    assert_eq!(info.android_version.as_deref(), Some("9"));
    assert_eq!(info.api_level, Some(28));
    assert_eq!(info.serial_number, None);
    assert_eq!(info.memory_size, None);
}
