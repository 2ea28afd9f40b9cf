//! Error types for aspect tables.

use thiserror::Error;

/// Errors from orb table validation. Detection itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AspectError {
    #[error("invalid orb table: {reason}")]
    InvalidOrbTable { reason: &'static str },
}
