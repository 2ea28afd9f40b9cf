//! Error types for return searches.

use horo_ephem::{Body, EphemError};
use horo_time::TimeError;
use thiserror::Error;

/// Errors from the return solver.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Newton iteration did not reach the tolerance inside the window.
    #[error(
        "{body} return did not converge after {iterations} iterations (residual {residual_deg}°)"
    )]
    ConvergenceFailure {
        body: Body,
        iterations: u32,
        residual_deg: f64,
    },
    /// The window end does not lie after its start.
    #[error("invalid search window: start JD {start_jd}, end JD {end_jd}")]
    InvalidWindow { start_jd: f64, end_jd: f64 },
    /// A [`crate::ReturnConfig`] field is out of range.
    #[error("invalid return config: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Ephemeris(#[from] EphemError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
