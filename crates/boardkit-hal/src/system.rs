//! Miscellaneous system setting types

/// How often the Yisheng daemon checks that a guarded app is alive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardInterval {
    Seconds30,
    Seconds60,
    Seconds180,
}

impl GuardInterval {
    pub fn vendor_code(self) -> i32 {
        match self {
            GuardInterval::Seconds30 => 0,
            GuardInterval::Seconds60 => 1,
            GuardInterval::Seconds180 => 2,
        }
    }

    pub fn from_secs(secs: u32) -> Option<Self> {
        match secs {
            30 => Some(GuardInterval::Seconds30),
            60 => Some(GuardInterval::Seconds60),
            180 => Some(GuardInterval::Seconds180),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_interval_codes() {
        assert_eq!(GuardInterval::Seconds30.vendor_code(), 0);
        assert_eq!(GuardInterval::from_secs(180), Some(GuardInterval::Seconds180));
        assert_eq!(GuardInterval::from_secs(90), None);
    }
}
