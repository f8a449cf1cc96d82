//! Tracing integration for structured logging
//!
//! This module wires the `tracing` crate into `stagesplit`: a small
//! configuration type and a one-shot subscriber initializer shared by the
//! library and the command-line front end.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Set once a subscriber has been installed by [`init_tracing`]
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur while setting up logging
#[derive(Debug, Error)]
pub enum TracingError {
    /// The filter directive is invalid or the subscriber could not be installed
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// The log file could not be opened
    #[error("Failed to open log file {}: {source}", path.display())]
    LogFile {
        /// Configured log file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A level name was not recognised
    #[error("invalid log level `{0}` (expected error, warn, info, debug or trace)")]
    InvalidLevel(String),
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Minimum level of emitted events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Errors, warnings and info (default)
    #[default]
    Info,
    /// All of the above plus debug
    Debug,
    /// Everything
    Trace,
}

impl TracingLevel {
    /// Maps a `-v` count to a level: 0 keeps `self`, then info, debug, trace.
    #[must_use]
    pub const fn raised_by(self, verbosity: u8) -> Self {
        match verbosity {
            0 => self,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = TracingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(TracingError::InvalidLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Where log lines are written
///
/// In `stagesplit.toml` this is `"stderr"`, `"stdout"` or
/// `{ file = "/path/to/log" }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingOutput {
    /// Standard output
    Stdout,
    /// Standard error
    #[default]
    Stderr,
    /// Appended to a file, without ANSI colours
    File(PathBuf),
}

impl TracingOutput {
    fn make_writer(&self) -> TracingResult<BoxMakeWriter> {
        Ok(match self {
            Self::Stdout => BoxMakeWriter::new(std::io::stdout),
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
            Self::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| TracingError::LogFile {
                        path: path.clone(),
                        source,
                    })?;
                BoxMakeWriter::new(Mutex::new(file))
            }
        })
    }
}

/// Configuration for [`init_tracing`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TracingConfig {
    /// Log level
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Custom filter string (overrides level if set)
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a new tracing configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Returns the `EnvFilter` directive this configuration produces.
    #[must_use]
    pub fn filter_directive(&self) -> String {
        self.filter.clone().unwrap_or_else(|| {
            format!(
                "stagesplit_core={level},stagesplit={level}",
                level = self.level
            )
        })
    }
}

/// Installs the global subscriber described by `config`
///
/// Only the first successful call installs anything. A call that fails on
/// a bad filter or log file leaves tracing uninitialized, so it can be
/// retried with a corrected configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Tracing has already been initialized
/// - The filter directive is invalid or the subscriber fails to install
/// - The log file cannot be opened
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.load(Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_new(config.filter_directive())
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;
    let writer = config.output.make_writer()?;
    let ansi = !matches!(config.output, TracingOutput::File(_));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    TRACING_INITIALIZED.store(true, Ordering::SeqCst);
    tracing::debug!(level = %config.level, output = ?config.output, "Tracing initialized");

    Ok(())
}
