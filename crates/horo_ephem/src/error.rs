//! Error types for ephemeris lookups.

use thiserror::Error;

/// Errors from body lookup or an ephemeris source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EphemError {
    /// The identifier does not name a body this source can compute.
    #[error("unsupported body: {0}")]
    UnsupportedBody(String),
}
