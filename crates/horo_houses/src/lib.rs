//! House cusp solver.
//!
//! This crate provides:
//! - Ascendant and Midheaven from sidereal time, latitude and obliquity
//! - Twelve cusps under eight house systems with explicit latitude domains
//! - Observer coordinates and geocentric latitude reduction
//! - Chart-level casting from an [`horo_time::Instant`] and place

pub mod angles;
pub mod error;
pub mod geo;
pub mod house_types;
pub mod houses;

pub use angles::{ascendant_rad, cusp_from_ra_pole, midheaven_rad};
pub use error::HouseError;
pub use geo::{GeoCoordinate, geocentric_latitude_deg};
pub use house_types::{
    ALL_HOUSE_SYSTEMS, HouseCuspSet, HouseCusps, HouseOptions, HouseSystem, LatitudeLimits,
};
pub use houses::{
    CLOSURE_TOLERANCE_DEG, MIN_CUSP_SEPARATION_DEG, cusps_in_cyclic_order, equal_cusps,
    houses_for, solve,
};
