//! Error types for split staging operations
//!
//! This module defines the errors raised at the integer and geometry
//! boundaries of the split staging model.

use std::fmt;

/// Axis along which a split layout is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal extent (left to right).
    Width,
    /// Vertical extent (top to bottom).
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

/// Errors that can occur while building split staging values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// Integer does not name a stage position.
    #[error("invalid stage position: {0} (must be -1, 0 or 1)")]
    InvalidStagePosition(i32),

    /// Integer does not name a stage type.
    #[error("invalid stage type: {0} (must be -1, 0 or 1)")]
    InvalidStageType(i32),

    /// The combined extent of both panes and the divider is zero.
    #[error("degenerate split bounds: total {axis} is zero")]
    DegenerateBounds {
        /// Axis whose total extent is zero.
        axis: Axis,
    },

    /// A rectangle could not be parsed.
    #[error("invalid rectangle: {0}")]
    InvalidRect(String),

    /// A degenerate-layout policy name was not recognised.
    #[error("invalid degenerate policy `{0}` (expected propagate or reject)")]
    InvalidPolicy(String),
}
