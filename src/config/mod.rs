//! Configuration module for imgtag
//!
//! Manages where the tag set and the rename log live, the default image
//! root and display preferences. Configuration is stored in the user's
//! config directory.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the tag set inside the data directory
pub const TAGS_FILE_NAME: &str = "tags.txt";

/// File name of the rename log inside the data directory
pub const LOG_FILE_NAME: &str = "log.txt";

/// Keys accepted by `config set` / `config get`
pub const CONFIG_KEYS: [&str; 5] = ["default_root", "tags_file", "log_file", "quiet", "path_format"];

/// Path display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    /// Display absolute paths
    #[default]
    Absolute,
    /// Display relative paths (relative to current directory)
    Relative,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ImgtagConfig {
    /// Directory listed when no root is given on the command line
    #[serde(default)]
    pub default_root: Option<PathBuf>,

    /// Tag set file (defaults to the data directory)
    #[serde(default)]
    pub tags_file: Option<PathBuf>,

    /// Rename log file (defaults to the data directory)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default format for displaying paths (absolute or relative)
    #[serde(default)]
    pub path_format: PathFormat,
}

impl ImgtagConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("imgtag").join("config.toml"))
    }

    /// Directory holding the default tag set and rename log
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        dirs::data_local_dir()
            .map(|dir| dir.join("imgtag"))
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default file if needed
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        if Self::config_path()?.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Tag set file in effect
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no file is configured and the data directory
    /// cannot be determined.
    pub fn tags_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.tags_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join(TAGS_FILE_NAME)),
        }
    }

    /// Rename log file in effect
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no file is configured and the data directory
    /// cannot be determined.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join(LOG_FILE_NAME)),
        }
    }

    /// Directory to list when none is given
    #[must_use]
    pub fn root(&self) -> PathBuf {
        self.default_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Set a value by key from its textual form (does not save)
    ///
    /// An empty value clears the optional path keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value is invalid.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let optional_path = |value: &str| (!value.is_empty()).then(|| PathBuf::from(value));

        match key {
            "default_root" => self.default_root = optional_path(value),
            "tags_file" => self.tags_file = optional_path(value),
            "log_file" => self.log_file = optional_path(value),
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "path_format" => {
                self.path_format = match value {
                    "absolute" => PathFormat::Absolute,
                    "relative" => PathFormat::Relative,
                    _ => {
                        return Err(ConfigError::Message(format!(
                            "Invalid value for path_format: '{value}'. Use 'absolute' or 'relative'"
                        )));
                    }
                };
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Textual form of a value by key
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        let optional_path = |path: &Option<PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };

        Ok(match key {
            "default_root" => optional_path(&self.default_root),
            "tags_file" => optional_path(&self.tags_file),
            "log_file" => optional_path(&self.log_file),
            "quiet" => self.quiet.to_string(),
            "path_format" => match self.path_format {
                PathFormat::Absolute => "absolute".to_string(),
                PathFormat::Relative => "relative".to_string(),
            },
            _ => return Err(unknown_key(key)),
        })
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
