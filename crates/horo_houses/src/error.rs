//! Error types for house computation.

use thiserror::Error;

use crate::house_types::HouseSystem;

/// Errors from the house cusp solver.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum HouseError {
    /// The name does not match any supported house system.
    #[error("unsupported house system: {0}")]
    UnsupportedSystem(String),
    /// The latitude lies outside the domain of the system, or the solved
    /// cusps degenerate there.
    #[error("latitude {latitude_deg}° outside the {system} domain (|φ| limit {max_abs_deg}°)")]
    LatitudeDomain {
        system: HouseSystem,
        latitude_deg: f64,
        max_abs_deg: f64,
    },
    /// A coordinate or angle input is out of range or not finite.
    #[error("invalid {field}: {value}")]
    InvalidCoordinate { field: &'static str, value: f64 },
    /// Solver options failed validation.
    #[error("invalid house options: {0}")]
    InvalidOptions(&'static str),
}
