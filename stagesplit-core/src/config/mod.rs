//! Configuration management for `stagesplit`
//!
//! This module provides the `ConfigManager` for loading and saving the
//! settings file in TOML format.

mod manager;
pub mod settings;

pub use manager::{CONFIG_DIR_ENV, ConfigError, ConfigManager, ConfigResult, SETTINGS_FILE};
pub use settings::{BoundsSettings, LoggingSettings, SplitSettings, default_position_options};
