//! Board control facade
//!
//! One API over the board-support services shipped by three Android board
//! vendors, so an app can reboot, take screenshots, drive GPIO and so on
//! without knowing which board it runs on.
//!
//! # Supported Boards
//!
//! - Zhuoce (`zcapi`), models starting with `ZC`
//! - LangGuo (broadcast driven), models starting with `lg`
//! - Yisheng (`MyManager` AIDL service), models starting with `RK`, `YS`,
//!   `A527`, and every unrecognized model
//!
//! # Example
//!
//! ```no_run
//! use boardkit_config::BoardKitConfig;
//! use boardkit_hal::{BoardKit, DeviceProperties, ServiceProvider};
//!
//! fn run(provider: &dyn ServiceProvider) -> boardkit_hal::Result<()> {
//!     let kit = BoardKit::create(provider, DeviceProperties::detect(), &BoardKitConfig::default())?;
//!     println!("Running on {}", kit.board().board_type());
//!
//!     if kit.take_screenshot("/sdcard/Pictures", None)? {
//!         println!("Screenshot saved");
//!     }
//!     kit.release()
//! }
//! ```

pub mod board;
pub mod capability;
pub mod device;
pub mod display;
pub mod gpio;
pub mod kit;
pub mod langguo;
pub mod mock;
pub mod network;
pub mod power;
pub mod system;
pub mod vendor;
pub mod ys;
pub mod zc;

pub use board::{Backend, Board, select};
pub use capability::{Capability, FailurePolicy, Fallback};
pub use device::{DeviceInfo, DeviceProperties};
pub use display::Rotation;
pub use gpio::{GpioDirection, GpioLevel, GpioPin};
pub use kit::{ActiveBoard, BoardKit, KitError};
pub use network::StaticIpConfig;
pub use power::{OneTimeSchedule, WeeklySchedule};
pub use system::GuardInterval;
pub use vendor::{LangGuoApi, ServiceProvider, VendorError, VendorResult, YsApi, ZcApi};

/// Facade Result type
pub type Result<T> = std::result::Result<T, KitError>;
