//! GPIO addressing
//!
//! Yisheng numbers its pins, Zhuoce addresses them by bank letter and index,
//! and the two services disagree on how a direction is encoded.

use std::fmt;

/// A GPIO pin address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpioPin {
    /// Linear pin number (Yisheng)
    Number(u32),
    /// Bank letter plus index, e.g. `B18` (Zhuoce)
    Bank { group: char, index: u32 },
}

impl GpioPin {
    pub fn bank(group: char, index: u32) -> Self {
        GpioPin::Bank {
            group: group.to_ascii_uppercase(),
            index,
        }
    }
}

impl fmt::Display for GpioPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioPin::Number(n) => write!(f, "gpio{n}"),
            GpioPin::Bank { group, index } => write!(f, "{group}{index}"),
        }
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioDirection {
    Input,
    Output,
}

impl GpioDirection {
    /// Yisheng encoding: 1 input, 0 output
    pub fn ys_code(self) -> i32 {
        match self {
            GpioDirection::Input => 1,
            GpioDirection::Output => 0,
        }
    }

    /// Zhuoce encoding: 1 output, 0 input
    pub fn zc_code(self) -> i32 {
        match self {
            GpioDirection::Input => 0,
            GpioDirection::Output => 1,
        }
    }

    /// Parse the `"in"`/`"out"` strings reported by Yisheng
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "in" => Some(GpioDirection::Input),
            "out" => Some(GpioDirection::Output),
            _ => None,
        }
    }
}

/// Logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioLevel {
    Low,
    High,
}

impl GpioLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            GpioLevel::Low => "0",
            GpioLevel::High => "1",
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            GpioLevel::Low => 0,
            GpioLevel::High => 1,
        }
    }

    /// Parse a level as returned by [`crate::BoardKit::read_gpio_value`]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "0" => Some(GpioLevel::Low),
            "1" => Some(GpioLevel::High),
            _ => None,
        }
    }
}

impl From<bool> for GpioLevel {
    fn from(high: bool) -> Self {
        if high { GpioLevel::High } else { GpioLevel::Low }
    }
}
