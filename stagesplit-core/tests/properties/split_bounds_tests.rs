//! Property-based tests for split bounds geometry
//!
//! The pane shares must partition the total extent with the divider
//! included, independently of where the rectangles sit on screen.

use proptest::prelude::*;
use stagesplit_core::split::{
    Axis, DegeneratePolicy, Rect, SplitError, SplitOrientation, StagedSplitBounds,
};

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for a rectangle with the given extent ranges at an arbitrary origin
fn rect_strategy(
    width: std::ops::Range<i32>,
    height: std::ops::Range<i32>,
) -> impl Strategy<Value = Rect> {
    (-5000i32..5000, -5000i32..5000, width, height)
        .prop_map(|(left, top, w, h)| Rect::new(left, top, left + w, top + h))
}

/// Strategy for a positive-size pane
fn pane_strategy() -> impl Strategy<Value = Rect> {
    rect_strategy(1..4000, 1..4000)
}

/// Strategy for a divider, which may be zero-sized along either axis
fn divider_strategy() -> impl Strategy<Value = Rect> {
    rect_strategy(0..100, 0..100)
}

fn width_share(bounds: &StagedSplitBounds) -> f32 {
    let rects = bounds.rects();
    let total = rects.top_left_bounds.width()
        + rects.bottom_right_bounds.width()
        + rects.divider_bounds.width();
    (rects.bottom_right_bounds.width() + rects.divider_bounds.width()) as f32 / total as f32
}

fn height_share(bounds: &StagedSplitBounds) -> f32 {
    let rects = bounds.rects();
    let total = rects.top_left_bounds.height()
        + rects.bottom_right_bounds.height()
        + rects.divider_bounds.height();
    (rects.bottom_right_bounds.height() + rects.divider_bounds.height()) as f32 / total as f32
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn width_shares_partition_total_width(
        top_left in pane_strategy(),
        bottom_right in pane_strategy(),
        divider in divider_strategy(),
    ) {
        let bounds = StagedSplitBounds::new(top_left, bottom_right, divider);
        let sum = bounds.left_task_percent() + width_share(&bounds);
        prop_assert!((sum - 1.0).abs() < 1e-5, "sum was {}", sum);
    }

    #[test]
    fn height_shares_partition_total_height(
        top_left in pane_strategy(),
        bottom_right in pane_strategy(),
        divider in divider_strategy(),
    ) {
        let bounds = StagedSplitBounds::new(top_left, bottom_right, divider);
        let sum = bounds.top_task_percent() + height_share(&bounds);
        prop_assert!((sum - 1.0).abs() < 1e-5, "sum was {}", sum);
    }

    #[test]
    fn shares_stay_in_unit_interval(
        top_left in pane_strategy(),
        bottom_right in pane_strategy(),
        divider in divider_strategy(),
    ) {
        let bounds = StagedSplitBounds::new(top_left, bottom_right, divider);
        prop_assert!(bounds.left_task_percent() > 0.0 && bounds.left_task_percent() < 1.0);
        prop_assert!(bounds.top_task_percent() > 0.0 && bounds.top_task_percent() < 1.0);
        prop_assert!(!bounds.is_degenerate());
    }

    #[test]
    fn shares_ignore_translation(
        top_left in pane_strategy(),
        bottom_right in pane_strategy(),
        divider in divider_strategy(),
        dx in -1000i32..1000,
        dy in -1000i32..1000,
    ) {
        let shift = |r: Rect| Rect::new(r.left + dx, r.top + dy, r.right + dx, r.bottom + dy);
        let original = StagedSplitBounds::new(top_left, bottom_right, divider);
        let moved = StagedSplitBounds::new(shift(top_left), shift(bottom_right), shift(divider));
        prop_assert_eq!(original.left_task_percent(), moved.left_task_percent());
        prop_assert_eq!(original.top_task_percent(), moved.top_task_percent());
    }

    #[test]
    fn try_new_agrees_with_new_on_regular_input(
        top_left in pane_strategy(),
        bottom_right in pane_strategy(),
        divider in divider_strategy(),
    ) {
        let checked = StagedSplitBounds::try_new(top_left, bottom_right, divider).unwrap();
        prop_assert_eq!(checked, StagedSplitBounds::new(top_left, bottom_right, divider));
    }

    #[test]
    fn first_task_percent_matches_axis(
        top_left in pane_strategy(),
        bottom_right in pane_strategy(),
        divider in divider_strategy(),
    ) {
        let bounds = StagedSplitBounds::new(top_left, bottom_right, divider);
        prop_assert_eq!(
            bounds.first_task_percent(SplitOrientation::Portrait),
            bounds.top_task_percent()
        );
        prop_assert_eq!(
            bounds.first_task_percent(SplitOrientation::Landscape),
            bounds.left_task_percent()
        );
    }

    #[test]
    fn zero_width_layout_is_rejected_or_nan(
        left in -1000i32..1000,
        height in 1i32..1000,
    ) {
        let column = |top: i32, h: i32| Rect::new(left, top, left, top + h);
        let top_left = column(0, height);
        let divider = column(height, 0);
        let bottom_right = column(height, height);

        let bounds = StagedSplitBounds::new(top_left, bottom_right, divider);
        prop_assert!(bounds.left_task_percent().is_nan());
        prop_assert!(bounds.is_degenerate());

        let rejected = StagedSplitBounds::with_policy(
            top_left,
            bottom_right,
            divider,
            DegeneratePolicy::Reject,
        );
        prop_assert_eq!(
            rejected.unwrap_err(),
            SplitError::DegenerateBounds { axis: Axis::Width }
        );
    }
}

// ============================================================================
// Fixed scenarios
// ============================================================================

#[test]
fn side_by_side_with_zero_width_divider() {
    let bounds = StagedSplitBounds::new(
        Rect::new(0, 0, 100, 50),
        Rect::new(100, 0, 200, 50),
        Rect::new(100, 0, 100, 50),
    );
    assert!((bounds.left_task_percent() - 0.5).abs() < f32::EPSILON);
}

#[test]
fn stacked_with_ten_pixel_divider() {
    let bounds = StagedSplitBounds::new(
        Rect::new(0, 0, 100, 400),
        Rect::new(0, 400, 100, 800),
        Rect::new(0, 400, 100, 410),
    );
    assert!((bounds.top_task_percent() - 0.493_827).abs() < 1e-5);
}
