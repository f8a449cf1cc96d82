//! Task slot command.

use stagesplit_core::split::{StagePosition, StageType, StagedSplitTaskPosition};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::util::print_json;

/// Validate integer tags and print the resulting task slot
pub fn cmd_task(
    task_id: i32,
    position: i32,
    stage_type: i32,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut slot = StagedSplitTaskPosition::default();
    slot.assign(
        task_id,
        StagePosition::try_from(position)?,
        StageType::try_from(stage_type)?,
    );

    match format {
        OutputFormat::Json => print_json(&slot),
        OutputFormat::Text => {
            println!("{slot}");
            if !slot.has_task() {
                println!("(no task assigned)");
            } else if !slot.stage_position.is_defined() || !slot.stage_type.is_defined() {
                println!("warning: task has no defined stage");
            }
            Ok(())
        }
    }
}
