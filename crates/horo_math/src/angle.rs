//! Degree normalization and angular separations.
//!
//! Every other crate in the workspace routes angle wraparound through this
//! module. The functions are total over the reals: finite input always
//! produces an in-range result, non-finite input propagates as NaN.

use std::f64::consts::TAU;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Degrees in a half turn.
pub const HALF_TURN_DEG: f64 = 180.0;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if r >= FULL_TURN_DEG { 0.0 } else { r }
}

/// Normalize an angle to [0, 2π) radians.
pub fn normalize_rad(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}

/// Shortest angular distance between two directions, in [0, 180].
///
/// Symmetric: `shortest_distance_deg(a, b) == shortest_distance_deg(b, a)`.
pub fn shortest_distance_deg(a: f64, b: f64) -> f64 {
    let d = normalize_deg(b - a);
    if d > HALF_TURN_DEG { FULL_TURN_DEG - d } else { d }
}

/// Counter-clockwise arc from `from` to `to`, in [0, 360).
pub fn directed_separation_deg(from: f64, to: f64) -> f64 {
    normalize_deg(to - from)
}

/// Shortest signed arc from `from` to `to`, in (-180, 180].
///
/// Positive when `to` lies ahead of `from` in the direction of increasing
/// longitude.
pub fn signed_separation_deg(from: f64, to: f64) -> f64 {
    let d = directed_separation_deg(from, to);
    if d > HALF_TURN_DEG { d - FULL_TURN_DEG } else { d }
}

/// An ecliptic longitude in degrees, always in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Longitude(f64);

impl Longitude {
    /// Zero degrees (the vernal equinox).
    pub const ZERO: Longitude = Longitude(0.0);

    /// Build a longitude from any degree value, normalizing it.
    pub fn new(deg: f64) -> Self {
        Self(normalize_deg(deg))
    }

    /// Build a longitude from radians.
    pub fn from_rad(rad: f64) -> Self {
        Self::new(rad.to_degrees())
    }

    /// Value in degrees, [0, 360).
    pub fn deg(self) -> f64 {
        self.0
    }

    /// Value in radians, [0, 2π).
    pub fn rad(self) -> f64 {
        self.0.to_radians()
    }

    /// The diametrically opposite longitude.
    pub fn opposite(self) -> Self {
        self.offset(HALF_TURN_DEG)
    }

    /// This longitude advanced by `delta_deg` (may be negative).
    pub fn offset(self, delta_deg: f64) -> Self {
        Self::new(self.0 + delta_deg)
    }

    /// Shortest distance to `other`, in [0, 180].
    pub fn distance_to(self, other: Longitude) -> f64 {
        shortest_distance_deg(self.0, other.0)
    }

    /// Counter-clockwise arc from `self` to `other`, in [0, 360).
    pub fn arc_to(self, other: Longitude) -> f64 {
        directed_separation_deg(self.0, other.0)
    }

    /// Whether the value is finite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Longitude {
    fn from(deg: f64) -> Self {
        Self::new(deg)
    }
}

impl From<Longitude> for f64 {
    fn from(lon: Longitude) -> Self {
        lon.0
    }
}

impl Display for Longitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}°", self.0)
    }
}
