//! Approximate ecliptic longitudes for the Sun, Moon and planets.
//!
//! The built-in series are closed-form and low-order. Callers needing
//! higher accuracy implement [`EphemerisSource`] and pass it wherever a
//! source is accepted.

pub mod body;
pub mod error;
pub mod mean_longitude;
pub mod obliquity;
pub mod position;
pub mod source;

pub use body::{ALL_BODIES, Body};
pub use error::EphemError;
pub use mean_longitude::{mean_longitude, mean_longitude_by_name};
pub use obliquity::{OBLIQUITY_J2000_DEG, obliquity_deg};
pub use position::{BodyPosition, body_position, body_positions};
pub use source::{EphemerisSource, MeanEphemeris, SPEED_STEP_DAYS, longitude_speed_deg_per_day};
