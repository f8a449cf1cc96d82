//! Split menu entries command.

use std::path::Path;

use serde::Serialize;
use stagesplit_core::split::{SplitOrientation, SplitPositionOption};

use crate::cli::{OrientationArg, OutputFormat};
use crate::error::CliError;
use crate::util::{load_settings, print_json};

#[derive(Serialize)]
struct OptionEntry {
    #[serde(flatten)]
    option: SplitPositionOption,
    side: &'static str,
}

/// List the split menu entries from the settings file
pub fn cmd_options(
    config_path: Option<&Path>,
    orientation: OrientationArg,
    format: OutputFormat,
) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let orientation = SplitOrientation::from(orientation);

    let entries: Vec<OptionEntry> = settings
        .position_options
        .iter()
        .map(|option| OptionEntry {
            option: *option,
            side: option.stage_position.label(orientation),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No split options configured.");
                return Ok(());
            }

            println!(
                "{:<10} {:<8} {:>10} {:>10}",
                "SIDE", "STAGE", "ICON", "TEXT"
            );
            println!("{}", "-".repeat(41));
            for entry in &entries {
                println!(
                    "{:<10} {:<8} {:>10} {:>10}",
                    entry.side,
                    entry.option.stage_type.to_string(),
                    entry.option.icon_res_id,
                    entry.option.text_res_id
                );
            }
            Ok(())
        }
    }
}
