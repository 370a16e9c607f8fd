//! Sexagesimal decomposition of decimal hours and degrees.
//!
//! Display-only representations: the triples carry no meaning beyond
//! the decimal value they were derived from. Decomposition is exact
//! (floor-based, fractional seconds preserved); rounding happens only
//! in the `Display` impls.

/// Hours-minutes-seconds representation of a time value.
///
/// Sign is carried on the hours component only; minutes and seconds
/// are magnitudes. A value with |x| < 1 therefore cannot represent a
/// negative sign (hours = 0), matching the classical routine set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    /// Whole hours, signed.
    pub hours: i32,
    /// Minutes (0..59).
    pub minutes: u32,
    /// Seconds [0.0, 60.0), may include fractional part.
    pub seconds: f64,
}

/// Degrees-minutes-seconds representation of an angle.
///
/// Same sign convention as [`Hms`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees, signed.
    pub degrees: i32,
    /// Arc-minutes (0..59).
    pub minutes: u32,
    /// Arc-seconds [0.0, 60.0), may include fractional part.
    pub seconds: f64,
}

/// Decompose a magnitude into (unit, minute, second).
fn split(value: f64) -> (u32, u32, f64) {
    let unit = value.floor();
    let remainder = (value - unit) * 60.0;
    let minutes = remainder.floor();
    let seconds = (remainder - minutes) * 60.0;
    (unit as u32, minutes as u32, seconds)
}

/// Convert decimal hours to hours-minutes-seconds.
pub fn decimal_hours_to_hms(dh: f64) -> Hms {
    let (h, m, s) = split(dh.abs());
    Hms {
        hours: if dh < 0.0 { -(h as i32) } else { h as i32 },
        minutes: m,
        seconds: s,
    }
}

/// Convert hours-minutes-seconds back to decimal hours.
pub fn hms_to_decimal_hours(hms: &Hms) -> f64 {
    let magnitude = hms.hours.abs() as f64 + hms.minutes as f64 / 60.0 + hms.seconds / 3600.0;
    if hms.hours < 0 { -magnitude } else { magnitude }
}

/// Convert decimal degrees to degrees-minutes-seconds.
pub fn decimal_degrees_to_dms(deg: f64) -> Dms {
    let (d, m, s) = split(deg.abs());
    Dms {
        degrees: if deg < 0.0 { -(d as i32) } else { d as i32 },
        minutes: m,
        seconds: s,
    }
}

/// Convert degrees-minutes-seconds back to decimal degrees.
pub fn dms_to_decimal_degrees(dms: &Dms) -> f64 {
    let magnitude = dms.degrees.abs() as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0;
    if dms.degrees < 0 { -magnitude } else { magnitude }
}

impl std::fmt::Display for Hms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (h, m, s) = carry_rounded(self.hours, self.minutes, self.seconds, 24);
        write!(f, "{h:02}h {m:02}m {s:02}s")
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.degrees < 0 { '-' } else { '+' };
        let (d, m, s) = carry_rounded(self.degrees.abs(), self.minutes, self.seconds, i32::MAX);
        write!(f, "{sign}{d:02}° {m:02}′ {s:02}″")
    }
}

/// Round seconds for display, carrying 60s → +1m and 60m → +1 unit.
fn carry_rounded(unit: i32, minutes: u32, seconds: f64, unit_wrap: i32) -> (i32, u32, u32) {
    let mut s = seconds.round() as u32;
    let mut m = minutes;
    let mut u = unit;
    if s == 60 {
        s = 0;
        m += 1;
    }
    if m == 60 {
        m = 0;
        u += 1;
        if u == unit_wrap {
            u = 0;
        }
    }
    (u, m, s)
}
