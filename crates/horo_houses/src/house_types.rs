//! Types for house cusp computation.
//!
//! Provides the house system enum, latitude limits and solver options, and
//! the result types returned by the solver.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use horo_math::{Longitude, directed_separation_deg};
use horo_time::Instant;
use serde::{Deserialize, Serialize};

use crate::error::HouseError;
use crate::geo::GeoCoordinate;

/// The 8 supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseSystem {
    /// Placidus: trisect each point's own diurnal/nocturnal semi-arc in time.
    Placidus,
    /// Koch: birthplace houses, timed by the semi-arc of the MC degree.
    Koch,
    /// Equal: each house spans exactly 30 degrees from the Ascendant.
    Equal,
    /// Porphyry: trisect the four quadrant arcs on the ecliptic.
    Porphyry,
    /// Regiomontanus: 30-degree equator arcs projected through the horizon points.
    Regiomontanus,
    /// Campanus: 30-degree prime vertical arcs projected through the horizon points.
    Campanus,
    /// Morinus: 30-degree equator arcs from the east point rotated onto the ecliptic.
    Morinus,
    /// Topocentric: Placidus on the observer's geocentric latitude.
    Topocentric,
}

/// All 8 house systems in enum order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 8] = [
    HouseSystem::Placidus,
    HouseSystem::Koch,
    HouseSystem::Equal,
    HouseSystem::Porphyry,
    HouseSystem::Regiomontanus,
    HouseSystem::Campanus,
    HouseSystem::Morinus,
    HouseSystem::Topocentric,
];

impl HouseSystem {
    /// All 8 defined house systems.
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
            Self::Equal => "Equal",
            Self::Porphyry => "Porphyry",
            Self::Regiomontanus => "Regiomontanus",
            Self::Campanus => "Campanus",
            Self::Morinus => "Morinus",
            Self::Topocentric => "Topocentric",
        }
    }

    /// Whether the system is bounded by [`LatitudeLimits::time_based_max_deg`].
    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::Placidus | Self::Koch | Self::Morinus | Self::Topocentric
        )
    }

    /// Whether the system is bounded by the polar circle.
    pub const fn is_polar_bounded(self) -> bool {
        matches!(
            self,
            Self::Porphyry | Self::Regiomontanus | Self::Campanus
        )
    }

    /// Whether cusp 1 is the Ascendant and cusp 10 the Midheaven.
    pub const fn is_quadrant(self) -> bool {
        !matches!(self, Self::Equal | Self::Morinus)
    }
}

impl Display for HouseSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = HouseError;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_HOUSE_SYSTEMS
            .iter()
            .copied()
            .find(|sys| sys.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HouseError::UnsupportedSystem(s.to_string()))
    }
}

/// Latitude bounds applied before solving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatitudeLimits {
    /// Maximum |latitude| for Placidus, Koch, Morinus and Topocentric.
    pub time_based_max_deg: f64,
    /// Distance kept inside the polar circle (90° − ε) for Porphyry,
    /// Regiomontanus and Campanus.
    pub polar_circle_margin_deg: f64,
}

impl Default for LatitudeLimits {
    fn default() -> Self {
        Self {
            time_based_max_deg: 60.0,
            polar_circle_margin_deg: 0.0,
        }
    }
}

impl LatitudeLimits {
    /// Validate the limits.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.time_based_max_deg.is_finite()
            || self.time_based_max_deg <= 0.0
            || self.time_based_max_deg >= 90.0
        {
            return Err("time_based_max_deg must be in (0, 90)");
        }
        if !self.polar_circle_margin_deg.is_finite()
            || self.polar_circle_margin_deg < 0.0
            || self.polar_circle_margin_deg >= 45.0
        {
            return Err("polar_circle_margin_deg must be in [0, 45)");
        }
        Ok(())
    }

    /// The largest |latitude| `system` accepts at obliquity `obliquity_deg`.
    ///
    /// Equal houses accept any latitude strictly below 90°.
    pub fn max_abs_latitude_deg(&self, system: HouseSystem, obliquity_deg: f64) -> f64 {
        if system.is_time_based() {
            self.time_based_max_deg
        } else if system.is_polar_bounded() {
            90.0 - obliquity_deg.abs() - self.polar_circle_margin_deg
        } else {
            90.0
        }
    }
}

/// Options for a house solve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseOptions {
    /// Observer height in metres, used by Topocentric.
    pub altitude_m: f64,
    pub limits: LatitudeLimits,
}

impl HouseOptions {
    /// Validate the options.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.altitude_m.is_finite() {
            return Err("altitude_m must be finite");
        }
        self.limits.validate()
    }
}

/// Solved cusps of one house system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub system: HouseSystem,
    /// Cusps 1..=12, indexed 0..12.
    pub cusps: [Longitude; 12],
    pub ascendant: Longitude,
    pub midheaven: Longitude,
    /// Right ascension of the Midheaven in degrees, [0, 360).
    pub ramc_deg: f64,
}

impl HouseCusps {
    /// Cusp of house `number` (1-12).
    pub fn cusp(&self, number: u8) -> Option<Longitude> {
        match number {
            1..=12 => Some(self.cusps[usize::from(number) - 1]),
            _ => None,
        }
    }

    /// Width of house `number` in degrees.
    pub fn house_width_deg(&self, number: u8) -> Option<f64> {
        let i = usize::from(number).checked_sub(1).filter(|&i| i < 12)?;
        let next = (i + 1) % 12;
        Some(directed_separation_deg(
            self.cusps[i].deg(),
            self.cusps[next].deg(),
        ))
    }

    /// House (1-12) containing `lon`.
    ///
    /// A longitude exactly on a cusp belongs to the house that cusp opens.
    pub fn house_of(&self, lon: Longitude) -> u8 {
        let from_first = directed_separation_deg(self.cusps[0].deg(), lon.deg());
        let mut start = 0.0;
        for i in 0..12 {
            let width = directed_separation_deg(self.cusps[i].deg(), self.cusps[(i + 1) % 12].deg());
            if from_first < start + width {
                return (i as u8) + 1;
            }
            start += width;
        }
        12
    }
}

/// House cusps cast for a specific instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCuspSet {
    pub houses: HouseCusps,
    pub instant: Instant,
    pub geo: GeoCoordinate,
    /// Local sidereal time in degrees.
    pub lst_deg: f64,
    /// Obliquity used for the solve, in degrees.
    pub obliquity_deg: f64,
}
