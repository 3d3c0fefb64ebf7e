//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/quantumnexus/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive for normal runs (e.g. "info" or "quantumnexus=debug,warn")
    #[serde(default = "default_level")]
    pub level: String,

    /// Filter directive for --verbose runs
    #[serde(default = "default_verbose_level")]
    pub verbose_level: String,

    /// Emit ANSI colors in log output; unset means "only when stderr is a terminal"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ansi: Option<bool>,
}

// Default value functions for serde
fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}
fn default_verbose_level() -> String {
    DEFAULT_VERBOSE_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            verbose_level: default_verbose_level(),
            ansi: None,
        }
    }
}

impl LoggingConfig {
    /// Filter directive for the requested verbosity
    pub fn directive(&self, verbose: bool) -> &str {
        if verbose {
            &self.verbose_level
        } else {
            &self.level
        }
    }

    /// Whether log output should carry ANSI colors
    pub fn use_ansi(&self) -> bool {
        self.ansi.unwrap_or_else(|| std::io::stderr().is_terminal())
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    ///
    /// Creates default config at `path` if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }
}
