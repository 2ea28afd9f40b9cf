//! Pure angle algebra shared by every horoscope computation crate.
//!
//! This crate provides:
//! - Degree/radian normalization
//! - Shortest, directed, and signed angular separations
//! - The [`Longitude`] newtype, always in [0, 360)
//! - Circular midpoints for composite charts

pub mod angle;
pub mod midpoint;

pub use angle::{
    FULL_TURN_DEG, HALF_TURN_DEG, Longitude, directed_separation_deg, normalize_deg,
    normalize_rad, shortest_distance_deg, signed_separation_deg,
};
pub use midpoint::{circular_midpoint, circular_midpoint_deg};
