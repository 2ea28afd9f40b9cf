//! Types for aspect detection.
//!
//! Provides the aspect kinds, the caller-supplied orb table, the points
//! being compared, and the records returned by detection.

use std::fmt::{Display, Formatter};

use horo_ephem::Body;
use horo_math::Longitude;
use serde::{Deserialize, Serialize};

use crate::error::AspectError;

/// The 11 named aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    SemiSextile,
    SemiSquare,
    Sextile,
    Quintile,
    Square,
    Trine,
    Sesquiquadrate,
    Biquintile,
    Quincunx,
    Opposition,
}

/// All 11 aspect kinds in order of nominal angle.
pub const ALL_ASPECT_KINDS: [AspectKind; 11] = [
    AspectKind::Conjunction,
    AspectKind::SemiSextile,
    AspectKind::SemiSquare,
    AspectKind::Sextile,
    AspectKind::Quintile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Sesquiquadrate,
    AspectKind::Biquintile,
    AspectKind::Quincunx,
    AspectKind::Opposition,
];

impl AspectKind {
    pub const fn all() -> &'static [AspectKind] {
        &ALL_ASPECT_KINDS
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::SemiSextile => "Semi-sextile",
            Self::SemiSquare => "Semi-square",
            Self::Sextile => "Sextile",
            Self::Quintile => "Quintile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Sesquiquadrate => "Sesquiquadrate",
            Self::Biquintile => "Biquintile",
            Self::Quincunx => "Quincunx",
            Self::Opposition => "Opposition",
        }
    }

    /// Nominal separation in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::SemiSextile => 30.0,
            Self::SemiSquare => 45.0,
            Self::Sextile => 60.0,
            Self::Quintile => 72.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Sesquiquadrate => 135.0,
            Self::Biquintile => 144.0,
            Self::Quincunx => 150.0,
            Self::Opposition => 180.0,
        }
    }

    /// Conjunction, sextile, square, trine and opposition.
    pub const fn is_major(self) -> bool {
        matches!(
            self,
            Self::Conjunction | Self::Sextile | Self::Square | Self::Trine | Self::Opposition
        )
    }

    /// Conventional orb in degrees.
    pub const fn default_orb_deg(self) -> f64 {
        match self {
            Self::Conjunction | Self::Square | Self::Trine | Self::Opposition => 8.0,
            Self::Sextile => 6.0,
            Self::Quincunx => 3.0,
            Self::SemiSextile
            | Self::SemiSquare
            | Self::Quintile
            | Self::Sesquiquadrate
            | Self::Biquintile => 2.0,
        }
    }
}

impl Display for AspectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of an orb table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Nominal separation in degrees, [0, 180].
    pub angle_deg: f64,
    /// Allowed deviation from the nominal angle, inclusive.
    pub orb_deg: f64,
}

impl AspectDefinition {
    /// Definition at the kind's nominal angle with an explicit orb.
    pub const fn new(kind: AspectKind, orb_deg: f64) -> Self {
        Self {
            kind,
            angle_deg: kind.angle_deg(),
            orb_deg,
        }
    }
}

/// Ordered list of aspect definitions. Earlier entries win ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrbTable {
    definitions: Vec<AspectDefinition>,
}

impl Default for OrbTable {
    /// All 11 aspects with conventional orbs.
    fn default() -> Self {
        Self {
            definitions: ALL_ASPECT_KINDS
                .iter()
                .map(|&k| AspectDefinition::new(k, k.default_orb_deg()))
                .collect(),
        }
    }
}

impl OrbTable {
    /// Build a validated table.
    pub fn new(definitions: Vec<AspectDefinition>) -> Result<Self, AspectError> {
        let table = Self { definitions };
        table.validate()?;
        Ok(table)
    }

    /// The five major aspects with conventional orbs.
    pub fn major() -> Self {
        Self {
            definitions: ALL_ASPECT_KINDS
                .iter()
                .filter(|k| k.is_major())
                .map(|&k| AspectDefinition::new(k, k.default_orb_deg()))
                .collect(),
        }
    }

    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    /// Definition for `kind`, if present.
    pub fn get(&self, kind: AspectKind) -> Option<&AspectDefinition> {
        self.definitions.iter().find(|d| d.kind == kind)
    }

    /// Replace the orb of `kind`, adding the kind if absent.
    pub fn with_orb(mut self, kind: AspectKind, orb_deg: f64) -> Self {
        match self.definitions.iter_mut().find(|d| d.kind == kind) {
            Some(def) => def.orb_deg = orb_deg,
            None => self.definitions.push(AspectDefinition::new(kind, orb_deg)),
        }
        self
    }

    /// Validate every definition and reject duplicate kinds.
    pub fn validate(&self) -> Result<(), AspectError> {
        for (i, def) in self.definitions.iter().enumerate() {
            if !def.angle_deg.is_finite() || !(0.0..=180.0).contains(&def.angle_deg) {
                return Err(AspectError::InvalidOrbTable {
                    reason: "angle_deg must be within [0, 180]",
                });
            }
            if !def.orb_deg.is_finite() || def.orb_deg < 0.0 {
                return Err(AspectError::InvalidOrbTable {
                    reason: "orb_deg must be finite and non-negative",
                });
            }
            if self.definitions[..i].iter().any(|d| d.kind == def.kind) {
                return Err(AspectError::InvalidOrbTable {
                    reason: "duplicate aspect kind",
                });
            }
        }
        Ok(())
    }
}

/// A point that can take part in an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPoint {
    Body(Body),
    Ascendant,
    Midheaven,
}

impl Display for ChartPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Body(b) => f.write_str(b.name()),
            Self::Ascendant => f.write_str("Ascendant"),
            Self::Midheaven => f.write_str("Midheaven"),
        }
    }
}

impl From<Body> for ChartPoint {
    fn from(body: Body) -> Self {
        Self::Body(body)
    }
}

/// A chart point with its longitude and motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectPoint {
    pub point: ChartPoint,
    pub longitude: Longitude,
    /// Degrees per day; negative while retrograde, zero for fixed points.
    pub speed_deg_per_day: f64,
}

impl AspectPoint {
    pub fn new(point: impl Into<ChartPoint>, longitude: Longitude, speed_deg_per_day: f64) -> Self {
        Self {
            point: point.into(),
            longitude,
            speed_deg_per_day,
        }
    }

    /// A point with no motion.
    pub fn fixed(point: impl Into<ChartPoint>, longitude: Longitude) -> Self {
        Self::new(point, longitude, 0.0)
    }
}

/// Geometric match of a separation against an orb table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub kind: AspectKind,
    /// Shortest separation in degrees, [0, 180].
    pub separation_deg: f64,
    /// Separation minus the nominal angle.
    pub orb_deg: f64,
}

/// An aspect between two chart points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub a: ChartPoint,
    pub b: ChartPoint,
    pub kind: AspectKind,
    /// Shortest separation in degrees, [0, 180].
    pub separation_deg: f64,
    /// Separation minus the nominal angle.
    pub orb_deg: f64,
    /// True while |orb| is shrinking.
    pub applying: bool,
}

impl AspectRecord {
    /// Whether the record joins `p` and `q` in either order.
    pub fn involves(&self, p: ChartPoint, q: ChartPoint) -> bool {
        (self.a == p && self.b == q) || (self.a == q && self.b == p)
    }
}
