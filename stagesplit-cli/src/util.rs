//! Shared utility functions used across command modules.

use std::path::Path;

use serde::Serialize;
use stagesplit_core::config::{ConfigManager, SplitSettings};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads settings from the optional custom config directory.
pub fn load_settings(config_path: Option<&Path>) -> Result<SplitSettings, CliError> {
    let manager = create_config_manager(config_path)?;
    manager
        .load_settings()
        .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Formats a pane share, keeping non-finite values readable.
pub fn format_percent(value: f32) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else {
        format!("{value:.6}")
    }
}
