//! Core type definitions for split-screen staging
//!
//! This module contains the closed enumerations used to tag stages and
//! the orientation hint callers use to map them onto a concrete axis.
//! Both stage enums travel across process boundaries as their integer
//! tag, so each one converts to and from `i32`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::SplitError;

/// Task id meaning "no task assigned".
pub const INVALID_TASK_ID: i32 = -1;

/// Which half of the display a stage occupies.
///
/// Positions are orientation-agnostic: the caller decides whether
/// `TopOrLeft` means the top half (portrait) or the left half (landscape).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub enum StagePosition {
    /// Not specified, normally meaning "keep whatever is currently set".
    #[default]
    Undefined,
    /// Top half in portrait, left half in landscape.
    TopOrLeft,
    /// Bottom half in portrait, right half in landscape.
    BottomOrRight,
}

impl StagePosition {
    /// All positions in declaration order.
    pub const ALL: [Self; 3] = [Self::Undefined, Self::TopOrLeft, Self::BottomOrRight];

    /// Returns the integer tag used by the window-management layer.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Undefined => -1,
            Self::TopOrLeft => 0,
            Self::BottomOrRight => 1,
        }
    }

    /// Returns true unless this is `Undefined`.
    #[must_use]
    pub const fn is_defined(self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// Returns the position on the other side of the divider.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Undefined => Self::Undefined,
            Self::TopOrLeft => Self::BottomOrRight,
            Self::BottomOrRight => Self::TopOrLeft,
        }
    }

    /// Returns the concrete side name for the given orientation.
    #[must_use]
    pub const fn label(self, orientation: SplitOrientation) -> &'static str {
        match (self, orientation) {
            (Self::Undefined, _) => "undefined",
            (Self::TopOrLeft, SplitOrientation::Portrait) => "top",
            (Self::TopOrLeft, SplitOrientation::Landscape) => "left",
            (Self::BottomOrRight, SplitOrientation::Portrait) => "bottom",
            (Self::BottomOrRight, SplitOrientation::Landscape) => "right",
        }
    }
}

impl TryFrom<i32> for StagePosition {
    type Error = SplitError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Undefined),
            0 => Ok(Self::TopOrLeft),
            1 => Ok(Self::BottomOrRight),
            other => Err(SplitError::InvalidStagePosition(other)),
        }
    }
}

impl From<StagePosition> for i32 {
    fn from(position: StagePosition) -> Self {
        position.as_i32()
    }
}

impl fmt::Display for StagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "Undefined"),
            Self::TopOrLeft => write!(f, "TopOrLeft"),
            Self::BottomOrRight => write!(f, "BottomOrRight"),
        }
    }
}

/// Semantic role of a stage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub enum StageType {
    /// Not specified, normally meaning "use the default",
    /// e.g. exit split-screen and launch the task fullscreen.
    #[default]
    Undefined,
    /// The main stage.
    Main,
    /// The side stage.
    Side,
}

impl StageType {
    /// All stage types in declaration order.
    pub const ALL: [Self; 3] = [Self::Undefined, Self::Main, Self::Side];

    /// Returns the integer tag used by the window-management layer.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Undefined => -1,
            Self::Main => 0,
            Self::Side => 1,
        }
    }

    /// Returns true unless this is `Undefined`.
    #[must_use]
    pub const fn is_defined(self) -> bool {
        !matches!(self, Self::Undefined)
    }
}

impl TryFrom<i32> for StageType {
    type Error = SplitError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Undefined),
            0 => Ok(Self::Main),
            1 => Ok(Self::Side),
            other => Err(SplitError::InvalidStageType(other)),
        }
    }
}

impl From<StageType> for i32 {
    fn from(stage_type: StageType) -> Self {
        stage_type.as_i32()
    }
}

impl fmt::Display for StageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "Undefined"),
            Self::Main => write!(f, "Main"),
            Self::Side => write!(f, "Side"),
        }
    }
}

/// Device orientation used to interpret orientation-agnostic values.
///
/// In portrait the stages are stacked (top/bottom); in landscape they sit
/// side by side (left/right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitOrientation {
    /// Stages stacked vertically.
    #[default]
    Portrait,
    /// Stages side by side.
    Landscape,
}

impl fmt::Display for SplitOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portrait => write!(f, "portrait"),
            Self::Landscape => write!(f, "landscape"),
        }
    }
}
