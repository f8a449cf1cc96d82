//! `stagesplit` Core Library
//!
//! This crate provides the value types a launcher-style host uses to
//! describe split-screen staging and the geometry of a two-pane split
//! layout, together with the settings and logging plumbing shared by the
//! command-line front end.
//!
//! # Crate Structure
//!
//! - [`split`] - Stage enumerations, menu entries, split bounds, task slots
//! - [`config`] - Settings file and persistence
//! - [`tracing`] - Structured logging setup
//! - [`error`] - Crate-level error type

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod split;
pub mod tracing;

pub use config::{ConfigError, ConfigManager, SplitSettings};
pub use error::StageSplitError;
pub use split::{
    Axis, DegeneratePolicy, INVALID_TASK_ID, Rect, SplitError, SplitOrientation,
    SplitPositionOption, SplitRects, StagePosition, StageType, StagedSplitBounds,
    StagedSplitTaskPosition,
};
