//! Civil time, time zones, and Julian Dates.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (with the 1582 Gregorian cutover)
//! - Local civil time → Greenwich date / Universal Time conversion
//! - Gregorian leap-year and month-length tables
//!
//! All functions are pure; no time-zone database is consulted. The zone
//! correction and daylight-saving offset are caller-supplied numbers.

pub mod calendar;
pub mod julian;
pub mod local;

pub use calendar::{days_in_month, is_leap_year};
pub use julian::{
    calendar_to_jd, centuries_since_1900, jd_to_calendar, EPOCH_1900_JD, GREGORIAN_START_JD,
};
pub use local::{local_to_greenwich, GreenwichInstant};

/// Local civil (wall-clock) date and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl LocalTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Time of day as decimal hours.
    pub fn decimal_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, whole
        )
    }
}

/// Offset between local civil time and Greenwich.
///
/// Both components are whole hours and are applied additively when
/// converting local → Greenwich. The daylight-saving offset is 0 or 1
/// by convention but is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZone {
    pub zone_correction_hours: i32,
    pub daylight_saving_hours: i32,
}

impl TimeZone {
    pub fn new(zone_correction_hours: i32, daylight_saving_hours: i32) -> Self {
        Self {
            zone_correction_hours,
            daylight_saving_hours,
        }
    }

    /// Greenwich itself: no zone correction, no daylight saving.
    pub fn utc() -> Self {
        Self::new(0, 0)
    }
}
