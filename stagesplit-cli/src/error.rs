//! CLI error types and exit codes.

use stagesplit_core::config::ConfigError;
use stagesplit_core::split::SplitError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, I/O or output errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Invalid input - bad rectangle, unknown enum tag, rejected geometry
    pub const INVALID_INPUT: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid staging input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Output could not be produced
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SplitError> for CliError {
    fn from(err: SplitError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, output, IO)
    /// - 2: Invalid input
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
            Self::Config(_) | Self::Output(_) | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
