//! Calendar time and the [`Instant`] value type.
//!
//! An `Instant` is a point on the Julian Day axis (UT). It is immutable and
//! only constructible from validated calendar fields or a finite Julian Day.
//! The approximation order of the rest of the workspace does not warrant a
//! UT/TT distinction, so no ΔT is applied.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, jd_to_calendar, julian_centuries, to_julian_day, validate_calendar,
};

/// UTC calendar date with sub-second precision.
///
/// Deserialization runs the same checks as [`CalendarTime::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalendarTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarTime {
    /// Build a validated calendar time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        validate_calendar(year, month, day, hour, minute, second)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Julian Day of this calendar time.
    pub fn to_julian_day(&self) -> Result<f64, TimeError> {
        to_julian_day(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Unchecked field layout shared by the serialized [`CalendarTime`].
#[derive(Deserialize)]
struct CalendarFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl<'de> Deserialize<'de> for CalendarTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let f = CalendarFields::deserialize(deserializer)?;
        Self::new(f.year, f.month, f.day, f.hour, f.minute, f.second)
            .map_err(serde::de::Error::custom)
    }
}

impl Display for CalendarTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// A point in time on the Julian Day axis.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Instant {
    jd: f64,
}

#[derive(Deserialize)]
struct InstantFields {
    jd: f64,
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let InstantFields { jd } = InstantFields::deserialize(deserializer)?;
        Self::from_jd(jd).map_err(serde::de::Error::custom)
    }
}

impl Instant {
    /// Build an instant from calendar fields, rejecting out-of-range values.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let jd = to_julian_day(year, month, day, hour, minute, second)?;
        Ok(Self { jd })
    }

    /// Build an instant from a [`CalendarTime`].
    pub fn from_calendar_time(time: &CalendarTime) -> Result<Self, TimeError> {
        Ok(Self {
            jd: time.to_julian_day()?,
        })
    }

    /// Build an instant from a Julian Day, which must be finite.
    pub fn from_jd(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::NonFiniteJulianDay(jd));
        }
        Ok(Self { jd })
    }

    /// Julian Day.
    pub fn jd(self) -> f64 {
        self.jd
    }

    /// Julian centuries since J2000.0.
    pub fn centuries(self) -> f64 {
        julian_centuries(self.jd)
    }

    /// This instant shifted by `days` (may be negative).
    pub fn add_days(self, days: f64) -> Result<Self, TimeError> {
        Self::from_jd(self.jd + days)
    }

    /// Days elapsed from `earlier` to `self` (negative if `self` is earlier).
    pub fn days_since(self, earlier: Instant) -> f64 {
        self.jd - earlier.jd
    }

    /// Calendar representation of this instant, rounded to the millisecond.
    pub fn to_calendar(self) -> CalendarTime {
        const MS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

        let (mut year, mut month, mut day_frac) = jd_to_calendar(self.jd);
        let mut ms = (day_frac.fract() * MS_PER_DAY).round();
        if ms >= MS_PER_DAY {
            // Rounded up to the next midnight
            (year, month, day_frac) = jd_to_calendar(self.jd + 1.0 / SECONDS_PER_DAY);
            ms = 0.0;
        }

        let day = day_frac.floor() as u32;
        let hour = (ms / 3_600_000.0).floor();
        let minute = ((ms - hour * 3_600_000.0) / 60_000.0).floor();
        let second = (ms - hour * 3_600_000.0 - minute * 60_000.0) / 1000.0;
        let (hour, minute) = (hour as u32, minute as u32);
        CalendarTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.to_calendar().fmt(f)
    }
}
