//! Locating, loading and saving the settings file

use std::fs;
use std::path::{Path, PathBuf};

use super::settings::SplitSettings;

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "STAGESPLIT_CONFIG_DIR";

/// File name of the settings file inside the configuration directory.
pub const SETTINGS_FILE: &str = "stagesplit.toml";

/// Errors raised while reading or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No configuration directory could be determined.
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid.
    #[error("failed to parse {}: {message}", path.display())]
    Parse {
        /// Settings file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The settings could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Loads and saves [`SplitSettings`] in a configuration directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the default configuration directory.
    ///
    /// Uses `$STAGESPLIT_CONFIG_DIR` when set, otherwise
    /// `<platform config dir>/stagesplit`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if neither is available.
    pub fn new() -> ConfigResult<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_config_dir(PathBuf::from(dir)));
        }

        let dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("stagesplit");
        Ok(Self::with_config_dir(dir))
    }

    /// Creates a manager for an explicit configuration directory.
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the configuration directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the full path of the settings file.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> ConfigResult<SplitSettings> {
        let path = self.settings_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(SplitSettings::default());
        }

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let settings = toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Writes settings, creating the configuration directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_settings(&self, settings: &SplitSettings) -> ConfigResult<()> {
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })?;

        let text = settings.to_toml()?;
        let path = self.settings_path();
        fs::write(&path, text).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "Saved settings");
        Ok(())
    }
}
