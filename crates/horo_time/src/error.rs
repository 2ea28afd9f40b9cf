//! Error types for calendar and time conversions.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// The calendar field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarField {
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Display for CalendarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        };
        f.write_str(name)
    }
}

/// Errors from calendar validation and Julian Day conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range. The range is
    /// `[min, max]` for integral fields and `[min, max)` for seconds.
    #[error("invalid calendar {field}: {value} (valid range {min}..{max})")]
    InvalidCalendar {
        field: CalendarField,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A Julian Day was NaN or infinite.
    #[error("non-finite Julian Day: {0}")]
    NonFiniteJulianDay(f64),
}
