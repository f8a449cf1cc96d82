//! Axis-aligned rectangles in integer screen coordinates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SplitError;

/// An axis-aligned rectangle described by its four edges.
///
/// Width and height are `right - left` and `bottom - top`, computed in
/// `i64` so any pair of `i32` edges has an exact extent. Neither is
/// clamped, so an inverted rectangle reports a negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// Creates a rectangle from its edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns `right - left`.
    #[must_use]
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    /// Returns `bottom - top`.
    #[must_use]
    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    /// Returns true if the rectangle encloses no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {} - {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Parses `"left,top,right,bottom"`; whitespace around each edge is ignored.
impl FromStr for Rect {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let edges = s
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SplitError::InvalidRect(format!("`{s}`: {e}")))?;

        match edges.as_slice() {
            [left, top, right, bottom] => Ok(Self::new(*left, *top, *right, *bottom)),
            _ => Err(SplitError::InvalidRect(format!(
                "`{s}`: expected 4 comma-separated edges, got {}",
                edges.len()
            ))),
        }
    }
}
