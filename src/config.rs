//! Pathsort Configuration Module
//!
//! Persistent defaults for the CLI, stored in `~/.config/pathsort/config.toml`.
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. CLI flags
//! 2. Environment variables (`PATHSORT_EMPTY_INPUT`, `PATHSORT_FORMAT`)
//! 3. Config file (`~/.config/pathsort/config.toml`)
//! 4. Defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PathsortError, Result};
use crate::output::OutputFormat;
use crate::path::{EmptyInput, SortOptions};

/// Env var overriding `sort.empty_input`
pub const ENV_EMPTY_INPUT: &str = "PATHSORT_EMPTY_INPUT";

/// Env var overriding `output.format`
pub const ENV_FORMAT: &str = "PATHSORT_FORMAT";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathsortConfig {
    #[serde(default)]
    pub sort: SortSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// `[sort]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SortSection {
    /// reject (fail with a cycle error) or allow (empty result)
    #[serde(default)]
    pub empty_input: EmptyInput,
}

/// `[output]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

impl PathsortConfig {
    /// Get the config directory path
    ///
    /// Returns `~/.config/pathsort/` on Unix, `%APPDATA%/pathsort/` on Windows
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pathsort")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from the default location
    ///
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`
    ///
    /// Returns default config if file doesn't exist.
    /// Returns error if file exists but is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| PathsortError::ConfigError {
            reason: format!("Failed to read config file: {}", e),
        })?;

        toml::from_str(&content).map_err(|e| PathsortError::ConfigError {
            reason: format!("Failed to parse config file: {}", e),
        })
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| PathsortError::ConfigError {
                    reason: format!("Failed to create config directory: {}", e),
                })?;
            }
        }

        let content = toml::to_string_pretty(self).map_err(|e| PathsortError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, content).map_err(|e| PathsortError::ConfigError {
            reason: format!("Failed to write config file: {}", e),
        })?;

        Ok(())
    }

    /// Merge with environment variables
    ///
    /// Environment variables take precedence over config file values.
    /// Unparseable values are ignored with a warning.
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(ENV_EMPTY_INPUT).filter(|v| !v.is_empty()) {
            match raw.parse::<EmptyInput>() {
                Ok(value) => self.sort.empty_input = value,
                Err(reason) => warn!(var = ENV_EMPTY_INPUT, %reason, "ignoring invalid value"),
            }
        }

        if let Some(raw) = lookup(ENV_FORMAT).filter(|v| !v.is_empty()) {
            match raw.parse::<OutputFormat>() {
                Ok(value) => self.output.format = value,
                Err(reason) => warn!(var = ENV_FORMAT, %reason, "ignoring invalid value"),
            }
        }

        self
    }

    /// Options handed to `PathOrderer`
    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            empty_input: self.sort.empty_input,
        }
    }
}
