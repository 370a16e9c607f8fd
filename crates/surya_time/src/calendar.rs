//! Gregorian calendar tables: leap years and month lengths.

/// Gregorian leap-year rule: divisible by 4, except centuries not
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1-12) of a given year.
///
/// Months outside 1-12 are not validated; they fall back to 30 days,
/// consistent with the pass-through policy of the calendar layer.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Step a calendar date by a whole number of days, carrying month and
/// year rollover through the month-length table.
pub(crate) fn shift_date(year: i32, month: u32, day: u32, delta_days: i64) -> (i32, u32, u32) {
    // Signed working copies: out-of-range fields (month 0, day 0) are
    // passed through rather than rejected, so the carry must not wrap.
    let mut y = year;
    let mut m = month as i64;
    let mut d = day as i64 + delta_days;

    while d < 1 {
        m -= 1;
        if m < 1 {
            m = 12;
            y -= 1;
        }
        d += days_in_month(y, m as u32) as i64;
    }
    while d > days_in_month(y, m as u32) as i64 {
        d -= days_in_month(y, m as u32) as i64;
        m += 1;
        if m > 12 {
            m = 1;
            y += 1;
        }
    }

    (y, m as u32, d as u32)
}
