//! Split bounds command.

use std::path::Path;

use serde::Serialize;
use stagesplit_core::split::{
    DegeneratePolicy, Rect, SplitOrientation, StagedSplitBounds, serialize_share,
};

use crate::cli::{OrientationArg, OutputFormat};
use crate::error::CliError;
use crate::util::{format_percent, load_settings, print_json};

/// Rectangles and options for the bounds command
pub struct BoundsParams {
    pub top_left: Rect,
    pub bottom_right: Rect,
    pub divider: Rect,
    pub orientation: OrientationArg,
    pub format: OutputFormat,
    pub reject_degenerate: bool,
}

#[derive(Serialize)]
struct BoundsReport {
    #[serde(flatten)]
    bounds: StagedSplitBounds,
    orientation: SplitOrientation,
    #[serde(serialize_with = "serialize_share")]
    first_task_percent: f32,
    degenerate: bool,
}

/// Compute and print the pane shares of a split layout
pub fn cmd_bounds(config_path: Option<&Path>, params: BoundsParams) -> Result<(), CliError> {
    let policy = if params.reject_degenerate {
        DegeneratePolicy::Reject
    } else {
        load_settings(config_path)?.bounds.degenerate
    };

    let bounds = StagedSplitBounds::with_policy(
        params.top_left,
        params.bottom_right,
        params.divider,
        policy,
    )?;
    let orientation = SplitOrientation::from(params.orientation);

    tracing::debug!(%policy, %orientation, "Computed split bounds");

    match params.format {
        OutputFormat::Json => print_json(&BoundsReport {
            bounds,
            orientation,
            first_task_percent: bounds.first_task_percent(orientation),
            degenerate: bounds.is_degenerate(),
        }),
        OutputFormat::Text => {
            println!("Top/left:     {}", bounds.top_left_bounds());
            println!("Bottom/right: {}", bounds.bottom_right_bounds());
            println!("Divider:      {}", bounds.divider_bounds());
            println!();
            println!(
                "top_task_percent:  {}",
                format_percent(bounds.top_task_percent())
            );
            println!(
                "left_task_percent: {}",
                format_percent(bounds.left_task_percent())
            );
            println!(
                "first_task_percent ({orientation}): {}",
                format_percent(bounds.first_task_percent(orientation))
            );
            if bounds.is_degenerate() {
                println!("warning: degenerate layout, a share is not finite");
            }
            Ok(())
        }
    }
}
