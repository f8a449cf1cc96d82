//! Settings file commands.

use std::path::Path;

use stagesplit_core::config::SplitSettings;

use crate::cli::ConfigCommands;
use crate::error::CliError;
use crate::util::{create_config_manager, load_settings};

/// Dispatch a `config` subcommand
pub fn cmd_config(config_path: Option<&Path>, command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => {
            let manager = create_config_manager(config_path)?;
            println!("{}", manager.settings_path().display());
            Ok(())
        }
        ConfigCommands::Show => {
            let settings = load_settings(config_path)?;
            print!("{}", settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { force } => cmd_init(config_path, force),
    }
}

fn cmd_init(config_path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let manager = create_config_manager(config_path)?;
    let path = manager.settings_path();

    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    manager.save_settings(&SplitSettings::default())?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}
