//! Computed geometry of a two-pane split layout
//!
//! [`StagedSplitBounds`] captures the two pane rectangles and the divider
//! between them, and derives how much of the total width and height the
//! top/left pane occupies. Both shares are computed regardless of how the
//! panes are actually arranged; the host picks the one that matters for
//! the current orientation (see [`StagedSplitBounds::first_task_percent`]).
//!
//! # Example
//!
//! ```
//! use stagesplit_core::split::{Rect, StagedSplitBounds};
//!
//! let bounds = StagedSplitBounds::new(
//!     Rect::new(0, 0, 100, 400),
//!     Rect::new(0, 400, 100, 800),
//!     Rect::new(0, 400, 100, 410),
//! );
//!
//! assert!((bounds.top_task_percent() - 400.0 / 810.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize, Serializer};

use super::error::{Axis, SplitError};
use super::geometry::Rect;
use super::types::SplitOrientation;

/// How a degenerate layout (zero total width or height) is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Keep the non-finite percentage produced by the division.
    #[default]
    Propagate,
    /// Refuse to build the bounds.
    Reject,
}

impl std::str::FromStr for DegeneratePolicy {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "propagate" => Ok(Self::Propagate),
            "reject" => Ok(Self::Reject),
            _ => Err(SplitError::InvalidPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Propagate => write!(f, "propagate"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// The three rectangles a split layout is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRects {
    /// Top pane in portrait, left pane in landscape.
    pub top_left_bounds: Rect,
    /// Bottom pane in portrait, right pane in landscape.
    pub bottom_right_bounds: Rect,
    /// Divider between the panes.
    pub divider_bounds: Rect,
}

/// Writes a pane share, using the strings `"NaN"`, `"inf"` and `"-inf"`
/// for non-finite values so formats without them (JSON) keep the distinction.
///
/// # Errors
///
/// Returns the serializer's error.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize_share<S: Serializer>(share: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    if share.is_nan() {
        serializer.serialize_str("NaN")
    } else if share.is_infinite() {
        serializer.serialize_str(if share.is_sign_positive() { "inf" } else { "-inf" })
    } else {
        serializer.serialize_f32(*share)
    }
}

/// Immutable split geometry with derived pane shares.
///
/// The percentages are fixed at construction. A geometry change is
/// expressed by building a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SplitRects")]
pub struct StagedSplitBounds {
    top_left_bounds: Rect,
    bottom_right_bounds: Rect,
    divider_bounds: Rect,
    #[serde(serialize_with = "serialize_share")]
    top_task_percent: f32,
    #[serde(serialize_with = "serialize_share")]
    left_task_percent: f32,
}

/// Total width and height of both panes plus the divider.
fn extent_totals(top_left: &Rect, bottom_right: &Rect, divider: &Rect) -> (i64, i64) {
    (
        top_left.width() + bottom_right.width() + divider.width(),
        top_left.height() + bottom_right.height() + divider.height(),
    )
}

impl StagedSplitBounds {
    /// Builds the bounds and derives both pane shares.
    ///
    /// Totals are summed exactly in integers and converted to `f32` once,
    /// so a share is non-finite only when its total is zero (`NaN` for
    /// `0 / 0`, infinity otherwise). Use [`Self::try_new`] to reject such input.
    #[must_use]
    pub fn new(top_left_bounds: Rect, bottom_right_bounds: Rect, divider_bounds: Rect) -> Self {
        let (total_width, total_height) =
            extent_totals(&top_left_bounds, &bottom_right_bounds, &divider_bounds);

        let left_task_percent = top_left_bounds.width() as f32 / total_width as f32;
        let top_task_percent = top_left_bounds.height() as f32 / total_height as f32;

        if !left_task_percent.is_finite() || !top_task_percent.is_finite() {
            tracing::warn!(
                top_left = %top_left_bounds,
                bottom_right = %bottom_right_bounds,
                divider = %divider_bounds,
                "Degenerate split bounds produce a non-finite pane share"
            );
        } else {
            tracing::trace!(
                top_task_percent,
                left_task_percent,
                "Computed split bounds"
            );
        }

        Self {
            top_left_bounds,
            bottom_right_bounds,
            divider_bounds,
            top_task_percent,
            left_task_percent,
        }
    }

    /// Builds the bounds, rejecting a layout whose total width or height is zero.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::DegenerateBounds` naming the first axis
    /// (width, then height) whose total extent is zero.
    pub fn try_new(
        top_left_bounds: Rect,
        bottom_right_bounds: Rect,
        divider_bounds: Rect,
    ) -> Result<Self, SplitError> {
        let (total_width, total_height) =
            extent_totals(&top_left_bounds, &bottom_right_bounds, &divider_bounds);
        if total_width == 0 {
            return Err(SplitError::DegenerateBounds { axis: Axis::Width });
        }
        if total_height == 0 {
            return Err(SplitError::DegenerateBounds { axis: Axis::Height });
        }

        Ok(Self::new(top_left_bounds, bottom_right_bounds, divider_bounds))
    }

    /// Builds the bounds using the given degenerate-input policy.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::DegenerateBounds` only under
    /// `DegeneratePolicy::Reject`.
    pub fn with_policy(
        top_left_bounds: Rect,
        bottom_right_bounds: Rect,
        divider_bounds: Rect,
        policy: DegeneratePolicy,
    ) -> Result<Self, SplitError> {
        match policy {
            DegeneratePolicy::Propagate => Ok(Self::new(
                top_left_bounds,
                bottom_right_bounds,
                divider_bounds,
            )),
            DegeneratePolicy::Reject => {
                Self::try_new(top_left_bounds, bottom_right_bounds, divider_bounds)
            }
        }
    }

    /// Top pane in portrait, left pane in landscape.
    #[must_use]
    pub const fn top_left_bounds(&self) -> Rect {
        self.top_left_bounds
    }

    /// Bottom pane in portrait, right pane in landscape.
    #[must_use]
    pub const fn bottom_right_bounds(&self) -> Rect {
        self.bottom_right_bounds
    }

    /// Divider between the panes.
    #[must_use]
    pub const fn divider_bounds(&self) -> Rect {
        self.divider_bounds
    }

    /// Share of the total height taken by the top/left pane.
    #[must_use]
    pub const fn top_task_percent(&self) -> f32 {
        self.top_task_percent
    }

    /// Share of the total width taken by the top/left pane.
    #[must_use]
    pub const fn left_task_percent(&self) -> f32 {
        self.left_task_percent
    }

    /// Returns the share that is meaningful for the given orientation:
    /// height in portrait, width in landscape.
    #[must_use]
    pub const fn first_task_percent(&self, orientation: SplitOrientation) -> f32 {
        match orientation {
            SplitOrientation::Portrait => self.top_task_percent,
            SplitOrientation::Landscape => self.left_task_percent,
        }
    }

    /// Returns true if either share is non-finite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.top_task_percent.is_finite() || !self.left_task_percent.is_finite()
    }

    /// Returns the rectangles the bounds were built from.
    #[must_use]
    pub const fn rects(&self) -> SplitRects {
        SplitRects {
            top_left_bounds: self.top_left_bounds,
            bottom_right_bounds: self.bottom_right_bounds,
            divider_bounds: self.divider_bounds,
        }
    }
}

impl From<SplitRects> for StagedSplitBounds {
    fn from(rects: SplitRects) -> Self {
        Self::new(
            rects.top_left_bounds,
            rects.bottom_right_bounds,
            rects.divider_bounds,
        )
    }
}
