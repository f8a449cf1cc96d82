//! Command handler modules for the CLI.

mod bounds;
mod completions;
mod config;
mod options;
mod task;

use std::path::Path;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config_path: Option<&Path>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Bounds {
            top_left,
            bottom_right,
            divider,
            orientation,
            format,
            reject_degenerate,
        } => bounds::cmd_bounds(
            config_path,
            bounds::BoundsParams {
                top_left,
                bottom_right,
                divider,
                orientation,
                format,
                reject_degenerate,
            },
        ),
        Commands::Options {
            orientation,
            format,
        } => options::cmd_options(config_path, orientation, format),
        Commands::Task {
            task_id,
            position,
            stage_type,
            format,
        } => task::cmd_task(task_id, position, stage_type, format),
        Commands::Config(command) => config::cmd_config(config_path, command),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
