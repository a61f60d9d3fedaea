//! Scheduled power on/off
//!
//! Both vendors take schedules as bare integer arrays; these types build
//! those arrays from `chrono` values.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Repeating schedule: same on/off time on selected weekdays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    pub power_on: NaiveTime,
    pub power_off: NaiveTime,
    /// Monday first
    pub days: [bool; 7],
}

impl WeeklySchedule {
    /// Schedule active every day of the week
    pub fn new(power_on: NaiveTime, power_off: NaiveTime) -> Self {
        Self {
            power_on,
            power_off,
            days: [true; 7],
        }
    }

    /// Restrict the schedule to the given weekdays
    pub fn on_days(mut self, days: &[Weekday]) -> Self {
        self.days = [false; 7];
        for day in days {
            self.days[day.num_days_from_monday() as usize] = true;
        }
        self
    }

    pub fn is_active_on(&self, day: Weekday) -> bool {
        self.days[day.num_days_from_monday() as usize]
    }

    /// `[hour, minute]`
    pub fn power_on_fields(&self) -> [i32; 2] {
        clock_fields(&self.power_on)
    }

    /// `[hour, minute]`
    pub fn power_off_fields(&self) -> [i32; 2] {
        clock_fields(&self.power_off)
    }

    /// Monday..Sunday as 1/0 flags
    pub fn weekday_flags(&self) -> [i32; 7] {
        self.days.map(i32::from)
    }
}

/// One-shot schedule with absolute timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeSchedule {
    pub power_on: NaiveDateTime,
    pub power_off: NaiveDateTime,
}

impl OneTimeSchedule {
    pub fn new(power_on: NaiveDateTime, power_off: NaiveDateTime) -> Self {
        Self {
            power_on,
            power_off,
        }
    }

    /// `[year, month, day, hour, minute]`
    pub fn power_on_fields(&self) -> [i32; 5] {
        minute_fields(&self.power_on)
    }

    /// `[year, month, day, hour, minute]`
    pub fn power_off_fields(&self) -> [i32; 5] {
        minute_fields(&self.power_off)
    }
}

fn clock_fields(time: &NaiveTime) -> [i32; 2] {
    [time.hour() as i32, time.minute() as i32]
}

fn minute_fields(at: &NaiveDateTime) -> [i32; 5] {
    [
        at.year(),
        at.month() as i32,
        at.day() as i32,
        at.hour() as i32,
        at.minute() as i32,
    ]
}

/// `[year, month, day, hour, minute, second]`, as taken by the set-time calls
pub fn second_fields(at: &NaiveDateTime) -> [i32; 6] {
    [
        at.year(),
        at.month() as i32,
        at.day() as i32,
        at.hour() as i32,
        at.minute() as i32,
        at.second() as i32,
    ]
}
