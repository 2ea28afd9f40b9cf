//! Julian Day ↔ proleptic Gregorian calendar conversions.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.
//! The Gregorian rule is applied to every date, including those before the
//! 1582 reform.

use crate::error::{CalendarField, TimeError};

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Julian Day from a calendar date with fractional day. No validation.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Calendar date `(year, month, day_frac)` from a Julian Day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Validate calendar fields, returning the first offending field.
pub fn validate_calendar(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<(), TimeError> {
    let invalid = |field, value: f64, min: f64, max: f64| TimeError::InvalidCalendar {
        field,
        value,
        min,
        max,
    };

    if !(1..=12).contains(&month) {
        return Err(invalid(CalendarField::Month, month as f64, 1.0, 12.0));
    }
    let max_day = days_in_month(year, month);
    if !(1..=max_day).contains(&day) {
        return Err(invalid(CalendarField::Day, day as f64, 1.0, max_day as f64));
    }
    if hour > 23 {
        return Err(invalid(CalendarField::Hour, hour as f64, 0.0, 23.0));
    }
    if minute > 59 {
        return Err(invalid(CalendarField::Minute, minute as f64, 0.0, 59.0));
    }
    if !second.is_finite() || !(0.0..60.0).contains(&second) {
        return Err(invalid(CalendarField::Second, second, 0.0, 60.0));
    }
    Ok(())
}

/// Julian Day from validated calendar fields.
///
/// Fails with [`TimeError::InvalidCalendar`] when any field is out of range.
pub fn to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<f64, TimeError> {
    validate_calendar(year, month, day, hour, minute, second)?;
    let day_frac = day as f64
        + hour as f64 / 24.0
        + minute as f64 / 1440.0
        + second / SECONDS_PER_DAY;
    Ok(calendar_to_jd(year, month, day_frac))
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
