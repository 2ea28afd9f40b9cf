//! Configuration and result types for return searches.

use horo_ephem::Body;
use horo_houses::GeoCoordinate;
use horo_math::Longitude;
use horo_time::Instant;
use serde::{Deserialize, Serialize};

/// Newton solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnConfig {
    /// Maximum Newton steps before giving up.
    pub max_iterations: u32,
    /// Timing tolerance in seconds. The longitude residual must be smaller
    /// than the arc the body covers in this time.
    pub tolerance_seconds: f64,
    /// Half-width of the central difference for the longitude rate, in days.
    pub derivative_step_days: f64,
}

impl Default for ReturnConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tolerance_seconds: 60.0,
            derivative_step_days: 0.01,
        }
    }
}

impl ReturnConfig {
    /// Validate the config.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.tolerance_seconds.is_finite() || self.tolerance_seconds <= 0.0 {
            return Err("tolerance_seconds must be positive");
        }
        if !self.derivative_step_days.is_finite()
            || self.derivative_step_days <= 0.0
            || self.derivative_step_days > 1.0
        {
            return Err("derivative_step_days must be in (0, 1]");
        }
        Ok(())
    }
}

/// A solved return: the instant `body` comes back to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnEvent {
    pub body: Body,
    pub target: Longitude,
    pub window_start: Instant,
    pub window_end: Instant,
    /// The solved instant, inside the window.
    pub instant: Instant,
    /// Newton steps taken.
    pub iterations: u32,
    /// Signed longitude error at `instant`, in degrees.
    pub residual_deg: f64,
    /// Observer the return chart is cast for.
    pub geo: GeoCoordinate,
}
