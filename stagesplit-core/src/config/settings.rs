//! Settings file model
//!
//! [`SplitSettings`] is the root of `stagesplit.toml`. Every section has a
//! default so a partial (or missing) file is valid.

use serde::{Deserialize, Serialize};

use super::manager::{ConfigError, ConfigResult};
use crate::split::{DegeneratePolicy, SplitPositionOption, StagePosition, StageType};
use crate::tracing::{TracingConfig, TracingLevel, TracingOutput};

/// Root settings structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSettings {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Split geometry configuration.
    #[serde(default)]
    pub bounds: BoundsSettings,
    /// Menu entries offered to start a split.
    #[serde(default = "default_position_options")]
    pub position_options: Vec<SplitPositionOption>,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            logging: LoggingSettings::default(),
            bounds: BoundsSettings::default(),
            position_options: default_position_options(),
        }
    }
}

impl SplitSettings {
    /// Renders the settings as TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if the settings cannot be encoded.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Logging section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level to emit.
    #[serde(default)]
    pub level: TracingLevel,
    /// Custom `EnvFilter` directive, overrides `level` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Log destination: `"stderr"`, `"stdout"` or `{ file = "..." }`.
    #[serde(default)]
    pub output: TracingOutput,
}

impl LoggingSettings {
    /// Builds a tracing configuration from these settings.
    #[must_use]
    pub fn to_tracing_config(&self) -> TracingConfig {
        let config = TracingConfig::new()
            .with_level(self.level)
            .with_output(self.output.clone());
        match &self.filter {
            Some(filter) => config.with_filter(filter.clone()),
            None => config,
        }
    }
}

/// Split geometry section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsSettings {
    /// How layouts with zero total width or height are handled.
    #[serde(default)]
    pub degenerate: DegeneratePolicy,
}

/// One entry per side of the screen, both targeting the main stage.
#[must_use]
pub fn default_position_options() -> Vec<SplitPositionOption> {
    vec![
        SplitPositionOption::new(0, 0, StagePosition::TopOrLeft, StageType::Main),
        SplitPositionOption::new(0, 0, StagePosition::BottomOrRight, StageType::Main),
    ]
}
