//! Error types for diameter computation.

use thiserror::Error;

/// Errors raised while preparing or measuring a ring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input cannot be measured at all (e.g. an empty ring).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input contains coordinates the metric cannot work with.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
