//! Board detection
//!
//! Maps the device model string onto one of the supported vendor boards.
//! The match is a fixed-priority prefix check, evaluated once per facade.

use serde::Serialize;
use std::fmt;

/// Prefix reported by Zhuoce boards (e.g. `ZC-3288`)
const ZC_PREFIX: &str = "ZC";

/// Prefixes reported by LangGuo boards
const LANGGUO_PREFIXES: [&str; 1] = ["lg"];

/// Prefixes reported by Yisheng boards
const YS_PREFIXES: [&str; 3] = ["RK", "YS", "A527"];

/// Vendor service that actually serves a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Backend {
    Ys,
    Zc,
    LangGuo,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Ys => "yisheng",
            Backend::Zc => "zhuoce",
            Backend::LangGuo => "langguo",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board identity derived from the device model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Board {
    /// Zhuoce board
    Zc,
    /// LangGuo board (broadcast-driven)
    LangGuo,
    /// Yisheng board
    Ys,
    /// Unrecognized model, served by the Yisheng backend
    Unknown,
}

impl Board {
    /// Backend used for this board
    pub fn backend(&self) -> Backend {
        match self {
            Board::Zc => Backend::Zc,
            Board::LangGuo => Backend::LangGuo,
            Board::Ys | Board::Unknown => Backend::Ys,
        }
    }

    /// Human readable board type
    pub fn board_type(&self) -> &'static str {
        match self {
            Board::Zc => "Zhuoce board",
            Board::LangGuo => "LangGuo board",
            Board::Ys => "Yisheng board",
            Board::Unknown => "Unknown board (defaulting to Yisheng)",
        }
    }

    /// Whether the model matched a known prefix
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Board::Unknown)
    }

    /// All board identities in selection priority order
    pub fn all() -> &'static [Board] {
        &[Board::Zc, Board::LangGuo, Board::Ys, Board::Unknown]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.board_type())
    }
}

/// Select the board for a device model string.
///
/// The Zhuoce and Yisheng prefixes are tested against the uppercased model,
/// while the LangGuo prefix is tested against the raw model. All comparisons
/// ignore ASCII case. Anything unrecognized falls back to [`Board::Unknown`].
pub fn select(model: &str) -> Board {
    let upper = model.to_uppercase();

    if starts_with_ignore_case(&upper, ZC_PREFIX) {
        Board::Zc
    } else if LANGGUO_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(model, prefix))
    {
        Board::LangGuo
    } else if YS_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(&upper, prefix))
    {
        Board::Ys
    } else {
        Board::Unknown
    }
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
