//! Body positions at an instant.

use horo_math::Longitude;
use horo_time::Instant;
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::error::EphemError;
use crate::source::EphemerisSource;

/// Longitude and speed of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    pub longitude: Longitude,
    /// Degrees per day; negative while retrograde.
    pub speed_deg_per_day: f64,
    pub instant: Instant,
}

impl BodyPosition {
    /// True when the longitude is decreasing.
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// Position of a single body.
pub fn body_position<S: EphemerisSource + ?Sized>(
    source: &S,
    body: Body,
    instant: Instant,
) -> Result<BodyPosition, EphemError> {
    let t = instant.centuries();
    Ok(BodyPosition {
        body,
        longitude: source.longitude(body, t)?,
        speed_deg_per_day: source.speed_deg_per_day(body, t)?,
        instant,
    })
}

/// Positions of `bodies` in the given order.
///
/// Fails on the first body the source cannot compute.
pub fn body_positions<S: EphemerisSource + ?Sized>(
    source: &S,
    instant: Instant,
    bodies: &[Body],
) -> Result<Vec<BodyPosition>, EphemError> {
    bodies
        .iter()
        .map(|&body| body_position(source, body, instant))
        .collect()
}
