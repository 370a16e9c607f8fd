//! Local civil time → Greenwich date and Universal Time.
//!
//! Applies the zone correction and daylight-saving offset to a local
//! wall-clock time, carrying any day-boundary overflow into the
//! Greenwich calendar date through the month-length table.

use crate::calendar::shift_date;
use crate::julian::calendar_to_jd;
use crate::{LocalTime, TimeZone};

/// A Greenwich-referenced instant: calendar date plus Universal Time
/// in decimal hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreenwichInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Universal Time in decimal hours, [0, 24).
    pub ut_hours: f64,
}

impl GreenwichInstant {
    /// Julian Date of this instant (date plus UT fraction of a day).
    pub fn julian_date(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.ut_hours / 24.0)
    }
}

/// Convert a local civil time to the Greenwich calendar date and
/// Universal Time.
///
/// UT = local − daylight saving − zone correction, in decimal hours.
/// A negative or ≥24h result rolls the Greenwich day backward or
/// forward, with month and year rollover following the Gregorian
/// month-length table.
pub fn local_to_greenwich(local: &LocalTime, zone: &TimeZone) -> GreenwichInstant {
    let ut = local.decimal_hours()
        - zone.daylight_saving_hours as f64
        - zone.zone_correction_hours as f64;

    let day_carry = (ut / 24.0).floor();
    let ut_hours = ut - 24.0 * day_carry;

    let (year, month, day) = shift_date(local.year, local.month, local.day, day_carry as i64);

    GreenwichInstant {
        year,
        month,
        day,
        ut_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_zone_is_identity() {
        let local = LocalTime::new(2003, 7, 27, 0, 0, 0.0);
        let g = local_to_greenwich(&local, &TimeZone::utc());
        assert_eq!((g.year, g.month, g.day), (2003, 7, 27));
        assert!(g.ut_hours.abs() < 1e-12);
    }

    #[test]
    fn book_example_zone_plus_four() {
        // Duffett-Smith §9: 2013 July 1, 03:37 local, zone +4, DST +1
        // → 2013 June 30, 22:37 UT
        let local = LocalTime::new(2013, 7, 1, 3, 37, 0.0);
        let zone = TimeZone::new(4, 1);
        let g = local_to_greenwich(&local, &zone);
        assert_eq!((g.year, g.month, g.day), (2013, 6, 30));
        assert!((g.ut_hours - (22.0 + 37.0 / 60.0)).abs() < 1e-9, "UT = {}", g.ut_hours);
    }

    #[test]
    fn rolls_forward_with_negative_zone() {
        // 23:30 local in zone -2 → 01:30 UT next day
        let local = LocalTime::new(2024, 12, 31, 23, 30, 0.0);
        let zone = TimeZone::new(-2, 0);
        let g = local_to_greenwich(&local, &zone);
        assert_eq!((g.year, g.month, g.day), (2025, 1, 1));
        assert!((g.ut_hours - 1.5).abs() < 1e-9);
    }

    #[test]
    fn rolls_back_over_leap_february() {
        let local = LocalTime::new(2024, 3, 1, 0, 30, 0.0);
        let zone = TimeZone::new(2, 0);
        let g = local_to_greenwich(&local, &zone);
        assert_eq!((g.year, g.month, g.day), (2024, 2, 29));
        assert!((g.ut_hours - 22.5).abs() < 1e-9);
    }

    #[test]
    fn daylight_saving_only() {
        let local = LocalTime::new(2024, 6, 10, 12, 0, 0.0);
        let zone = TimeZone::new(0, 1);
        let g = local_to_greenwich(&local, &zone);
        assert_eq!((g.year, g.month, g.day), (2024, 6, 10));
        assert!((g.ut_hours - 11.0).abs() < 1e-9);
    }

    #[test]
    fn ut_always_in_day_range() {
        for hour in 0..24 {
            for zc in -12..=12 {
                let local = LocalTime::new(2024, 6, 10, hour, 0, 0.0);
                let g = local_to_greenwich(&local, &TimeZone::new(zc, 0));
                assert!(
                    (0.0..24.0).contains(&g.ut_hours),
                    "UT out of range: {} (hour {hour}, zone {zc})",
                    g.ut_hours
                );
            }
        }
    }

    #[test]
    fn julian_date_includes_time_of_day() {
        let g = GreenwichInstant {
            year: 2000,
            month: 1,
            day: 1,
            ut_hours: 12.0,
        };
        assert!((g.julian_date() - 2_451_545.0).abs() < 1e-9);
    }
}
