//! Calendar and sidereal time conversions.
//!
//! This crate provides:
//! - Julian Day ↔ proleptic Gregorian calendar conversions with validation
//! - Julian centuries since J2000.0
//! - Greenwich and Local Mean Sidereal Time
//! - The immutable [`Instant`] value type

pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use error::{CalendarField, TimeError};
pub use instant::{CalendarTime, Instant};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year,
    jd_to_calendar, julian_centuries, to_julian_day, validate_calendar,
};
pub use sidereal::{greenwich_sidereal_time_deg, local_sidereal_time_at, local_sidereal_time_deg};
