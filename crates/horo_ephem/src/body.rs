//! Celestial bodies covered by the longitude series.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EphemError;

/// The 10 bodies with a longitude series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 10 bodies in conventional chart order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// All bodies in chart order.
    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Linear term of the longitude series, in degrees per day.
    ///
    /// Used as the first-guess rate for return searches and as the nominal
    /// period for sub-window enumeration.
    pub fn mean_daily_motion_deg(self) -> f64 {
        crate::mean_longitude::linear_rate_deg_per_century(self) / horo_time::DAYS_PER_CENTURY
    }

    /// Mean time in days for one full circuit of the zodiac.
    pub fn mean_period_days(self) -> f64 {
        360.0 / self.mean_daily_motion_deg()
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EphemError;

    /// Case-insensitive lookup by English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EphemError::UnsupportedBody(s.to_string()))
    }
}
