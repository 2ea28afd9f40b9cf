//! Pluggable ephemeris sources.
//!
//! Every consumer of body longitudes goes through [`EphemerisSource`], so a
//! verified ephemeris can replace the built-in low-order series without
//! touching the house, aspect, or return solvers.

use horo_math::{Longitude, signed_separation_deg};
use horo_time::DAYS_PER_CENTURY;

use crate::body::Body;
use crate::error::EphemError;
use crate::mean_longitude::mean_longitude;
use crate::obliquity::obliquity_deg;

/// Half-width of the central difference used for longitude speed, in days.
pub const SPEED_STEP_DAYS: f64 = 0.01;

/// A provider of ecliptic longitudes and obliquity.
///
/// `t` is Julian centuries since J2000.0. Implementations must be pure: the
/// same inputs always produce the same output.
pub trait EphemerisSource {
    /// Ecliptic longitude of `body` at `t`.
    fn longitude(&self, body: Body, t: f64) -> Result<Longitude, EphemError>;

    /// Obliquity of the ecliptic at `t`, in degrees.
    fn obliquity_deg(&self, t: f64) -> f64 {
        obliquity_deg(t)
    }

    /// Longitude speed of `body` at `t`, in degrees per day.
    ///
    /// Central difference over ±[`SPEED_STEP_DAYS`].
    fn speed_deg_per_day(&self, body: Body, t: f64) -> Result<f64, EphemError> {
        let dt = SPEED_STEP_DAYS / DAYS_PER_CENTURY;
        let before = self.longitude(body, t - dt)?;
        let after = self.longitude(body, t + dt)?;
        Ok(signed_separation_deg(before.deg(), after.deg()) / (2.0 * SPEED_STEP_DAYS))
    }
}

/// The built-in low-order series from [`crate::mean_longitude`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanEphemeris;

impl EphemerisSource for MeanEphemeris {
    fn longitude(&self, body: Body, t: f64) -> Result<Longitude, EphemError> {
        Ok(mean_longitude(body, t))
    }
}

impl<S: EphemerisSource + ?Sized> EphemerisSource for &S {
    fn longitude(&self, body: Body, t: f64) -> Result<Longitude, EphemError> {
        (**self).longitude(body, t)
    }

    fn obliquity_deg(&self, t: f64) -> f64 {
        (**self).obliquity_deg(t)
    }

    fn speed_deg_per_day(&self, body: Body, t: f64) -> Result<f64, EphemError> {
        (**self).speed_deg_per_day(body, t)
    }
}

/// Longitude speed of `body` from the built-in series, in degrees per day.
pub fn longitude_speed_deg_per_day(body: Body, t: f64) -> f64 {
    let dt = SPEED_STEP_DAYS / DAYS_PER_CENTURY;
    let before = mean_longitude(body, t - dt);
    let after = mean_longitude(body, t + dt);
    signed_separation_deg(before.deg(), after.deg()) / (2.0 * SPEED_STEP_DAYS)
}
