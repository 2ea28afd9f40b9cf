//! Unified error type for the convenience layer.

use horo_config::ConfigError;
use horo_ephem::EphemError;
use horo_houses::HouseError;
use horo_search::SearchError;
use horo_time::TimeError;
use thiserror::Error;

/// Any failure from the underlying crates.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum HoroError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Ephemeris(#[from] EphemError),
    #[error(transparent)]
    House(#[from] HouseError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The Sun's return falls in the neighbouring years on either side, so
    /// `year` holds none. Happens for births within hours of New Year.
    #[error("no solar return falls in calendar year {year}")]
    NoSolarReturn { year: i32 },
}
