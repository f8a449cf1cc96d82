//! Crate-level error type
//!
//! Aggregates the module errors so callers spanning several modules can
//! use a single `?`-compatible type.

use crate::config::ConfigError;
use crate::split::SplitError;
use crate::tracing::TracingError;

/// Any error raised by `stagesplit-core`.
#[derive(Debug, thiserror::Error)]
pub enum StageSplitError {
    /// Invalid staging value or geometry.
    #[error(transparent)]
    Split(#[from] SplitError),

    /// Settings could not be read or written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be set up.
    #[error(transparent)]
    Tracing(#[from] TracingError),
}

/// Result type alias using [`StageSplitError`].
pub type Result<T> = std::result::Result<T, StageSplitError>;
