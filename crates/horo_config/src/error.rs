//! Error types for configuration loading.

use thiserror::Error;

/// Errors from reading, parsing, or validating a [`crate::ChartConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file '{path}': {message}")]
    Io { path: String, message: String },
    /// The TOML is malformed or has the wrong shape.
    #[error("failed to parse config: {0}")]
    Parse(String),
    /// A section parsed but holds out-of-range values.
    #[error("invalid config: {0}")]
    Invalid(String),
}
