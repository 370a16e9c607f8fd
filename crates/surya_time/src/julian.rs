//! Julian Date ↔ civil calendar conversions.
//!
//! Implements the conventional civil-to-Julian-Date formula with the
//! Gregorian/Julian calendar branch (the Gregorian calendar starts on
//! 1582 October 15) and its inverse. The day argument may carry a
//! fractional part encoding time-of-day.
//!
//! Source: Duffett-Smith, _Practical Astronomy with your Calculator_,
//! sections 4-5. Public domain algorithm.

/// Julian Date of 1900 January 0.5 (1899 December 31, 12h UT).
///
/// Reference epoch of the obliquity and solar-longitude polynomials.
pub const EPOCH_1900_JD: f64 = 2_415_020.0;

/// Julian Date of the first day of the Gregorian calendar,
/// 1582 October 15.0.
pub const GREGORIAN_START_JD: f64 = 2_299_160.5;

/// Convert a civil calendar date to a Julian Date.
///
/// `day` may be fractional; the fraction carries time-of-day.
/// Dates on or after 1582 October 15 are treated as Gregorian,
/// earlier dates as Julian. Month and day are not validated; garbage
/// in, garbage out.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let gregorian = (year, month, day) >= (1582, 10, 15.0);
    let b = if gregorian {
        let a = (y as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    let c = if y < 0 {
        (365.25 * y as f64 - 0.75).floor()
    } else {
        (365.25 * y as f64).floor()
    };
    let d = (30.6001 * (m as f64 + 1.0)).floor();

    b + c + d + day + 1_720_994.5
}

/// Convert a Julian Date back to a civil calendar date.
///
/// Returns `(year, month, day)` where `day` carries the fractional
/// time-of-day. Inverse of [`calendar_to_jd`] across the Gregorian
/// cutover.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let i = (jd + 0.5).floor();
    let f = jd + 0.5 - i;

    let b = if i > 2_299_160.0 {
        let a = ((i - 1_867_216.25) / 36_524.25).floor();
        i + 1.0 + a - (a / 4.0).floor()
    } else {
        i
    };

    let c = b + 1524.0;
    let d = ((c - 122.1) / 365.25).floor();
    let e = (365.25 * d).floor();
    let g = ((c - e) / 30.6001).floor();

    let day = c - e + f - (30.6001 * g).floor();
    let month = if g < 13.5 { g - 1.0 } else { g - 13.0 };
    let year = if month > 2.5 { d - 4716.0 } else { d - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed from 1900 January 0.5 to `jd`.
pub fn centuries_since_1900(jd: f64) -> f64 {
    (jd - EPOCH_1900_JD) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        // 2000 January 1.5 = JD 2451545.0
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - 2_451_545.0).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn epoch_2010_day_zero() {
        // "Day 0" of 2010 January = 2009 December 31.0
        let jd = calendar_to_jd(2010, 1, 0.0);
        assert!((jd - 2_455_196.5).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn book_example_1985() {
        // Duffett-Smith §4: 1985 February 17.25 = JD 2446113.75
        let jd = calendar_to_jd(1985, 2, 17.25);
        assert!((jd - 2_446_113.75).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn gregorian_start() {
        let jd = calendar_to_jd(1582, 10, 15.0);
        assert!((jd - GREGORIAN_START_JD).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn monotonic_across_cutover() {
        // 1582 October 4 (Julian) is immediately followed by October 15
        // (Gregorian); the JD sequence must stay strictly increasing.
        let before = calendar_to_jd(1582, 10, 4.0);
        let after = calendar_to_jd(1582, 10, 15.0);
        assert!(before < after);
        assert!((after - before - 1.0).abs() < 1e-9, "gap = {}", after - before);
    }

    #[test]
    fn julian_calendar_date() {
        // 333 January 27.5 falls before the cutover (Julian branch).
        let jd = calendar_to_jd(333, 1, 27.5);
        assert!((jd - 1_842_713.0).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn roundtrip_modern() {
        let jd = calendar_to_jd(2024, 3, 20.75);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 3));
        assert!((d - 20.75).abs() < 1e-9, "day = {d}");
    }

    #[test]
    fn roundtrip_before_cutover() {
        let jd = calendar_to_jd(1582, 10, 4.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (1582, 10));
        assert!((d - 4.0).abs() < 1e-9, "day = {d}");
    }

    #[test]
    fn roundtrip_fractional_day() {
        for &frac in &[0.0, 0.25, 0.5, 0.999] {
            let jd = calendar_to_jd(1997, 6, 19.0 + frac);
            let (y, m, d) = jd_to_calendar(jd);
            assert_eq!((y, m), (1997, 6));
            assert!((d - 19.0 - frac).abs() < 1e-8, "day = {d}");
        }
    }

    #[test]
    fn centuries_at_epoch() {
        assert_eq!(centuries_since_1900(EPOCH_1900_JD), 0.0);
    }

    #[test]
    fn centuries_at_j2000() {
        let t = centuries_since_1900(2_451_545.0);
        assert!((t - 1.0).abs() < 0.0001, "T = {t}");
    }
}
