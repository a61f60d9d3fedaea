//! Display types shared by the board adapters

use std::path::Path;

/// Display rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Normal,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    /// Get rotation angle in degrees
    pub fn degrees(&self) -> u32 {
        match self {
            Rotation::Normal => 0,
            Rotation::Rotate90 => 90,
            Rotation::Rotate180 => 180,
            Rotation::Rotate270 => 270,
        }
    }

    /// Degree string expected by `rotateScreen`
    pub fn vendor_arg(&self) -> &'static str {
        match self {
            Rotation::Normal => "0",
            Rotation::Rotate90 => "90",
            Rotation::Rotate180 => "180",
            Rotation::Rotate270 => "270",
        }
    }

    /// Parse from an angle in degrees
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Rotation::Normal),
            90 => Some(Rotation::Rotate90),
            180 => Some(Rotation::Rotate180),
            270 => Some(Rotation::Rotate270),
            _ => None,
        }
    }
}

/// Join a screenshot directory and file name into the absolute path Yisheng expects
pub fn screenshot_path(dir: &str, file_name: &str) -> String {
    Path::new(dir).join(file_name).to_string_lossy().into_owned()
}
