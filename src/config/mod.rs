//! Configuration module for Detective Quest.
//!
//! The defaults reproduce the built-in case exactly, so a plain run reads no
//! file and no environment variable. A TOML or JSON file passed explicitly on
//! the command line is layered over the defaults. Every loaded configuration is
//! validated before use.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError as ExternalConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;

pub mod case;

pub use case::{CaseConfig, ClueAssociation};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Detective Quest.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DetectiveConfig {
    /// Suspects and seed clue associations
    pub case: CaseConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for DetectiveConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.case.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            // Diagnostics share the terminal with the game, keep them quiet
            level: "warn".to_string(),
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Detective Quest.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to a TOML or JSON configuration file
    pub fn new<P: AsRef<Path>>(config_path: Option<P>) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
        }
    }

    /// Loads the defaults, overlays the configuration file if one was given,
    /// and validates the result.
    pub fn load(&self) -> ConfigResult<DetectiveConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&DetectiveConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.clone()).format(format));
        }

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            parse @ ExternalConfigError::FileParse { .. } => {
                ConfigError::FileReadError(parse.to_string())
            }
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let detective_config: DetectiveConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        detective_config.validate()?;

        for suspect in detective_config.case.undeclared_suspects() {
            tracing::warn!(
                suspect,
                "Suspect is associated with a clue but not declared; its mentions will not be counted"
            );
        }

        Ok(detective_config)
    }

    /// Renders the default configuration in the format implied by `path`.
    ///
    /// `.json` produces pretty JSON, anything else TOML.
    pub fn render_default(path: &Path) -> crate::error::DetectiveResult<String> {
        let defaults = DetectiveConfig::default();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::to_string_pretty(&defaults)?),
            _ => toml::to_string_pretty(&defaults).map_err(|e| {
                crate::error::DetectiveError::Custom(format!("Failed to serialize config: {e}"))
            }),
        }
    }
}
