//! Configuration management for cctr
//!
//! cctr stores configuration in ~/.cctr/config.toml

use crate::range::RangeBoundaries;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// cctr configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Spec expansion settings
    #[serde(default)]
    pub expansion: ExpansionConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionConfig {
    /// Range boundary policy: "any" or "alnum"
    #[serde(default = "default_ranges")]
    pub ranges: Option<String>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            ranges: default_ranges(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write debug logs to ~/.cctr/cctr.log
    #[serde(default = "default_debug")]
    pub debug: Option<bool>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: default_debug(),
        }
    }
}

// Default functions for serde
fn default_ranges() -> Option<String> { Some("any".to_string()) }
fn default_debug() -> Option<bool> { Some(false) }

impl Config {
    /// The configured range boundary policy, `any` when unset
    pub fn range_boundaries(&self) -> Result<RangeBoundaries> {
        match &self.expansion.ranges {
            Some(ranges) => ranges.parse(),
            None => Ok(RangeBoundaries::default()),
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.logging.debug.unwrap_or(false)
    }
}

/// Get the cctr directory (~/.cctr), creating it if needed
pub fn cctr_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;

    let dir = home_dir.join(".cctr");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

    Ok(dir)
}

/// Get the configuration file path
pub fn config_file_path() -> Result<PathBuf> {
    Ok(cctr_dir()?.join("config.toml"))
}

/// Get the default configuration file content with comments
fn get_default_config_content() -> &'static str {
    r#"# cctr Configuration File
#
# Values set here can be overridden by command-line flags.

[expansion]
# Which characters may bound a range in class definitions (default: "any")
# any   - any character, so [:cntrl:], [:print:] and [:space:] are complete
# alnum - only letters and digits; [:cntrl:], [:print:] and [:space:] are empty
ranges = "any"

[logging]
# Write debug logs to ~/.cctr/cctr.log (default: false)
debug = false
"#
}

/// Write the default commented configuration file to `path`
fn save_default_config_to(path: &Path) -> Result<()> {
    fs::write(path, get_default_config_content())
        .with_context(|| format!("Failed to write default config file: {}", path.display()))
}

/// Load configuration from file, creating default if needed
///
/// If the config file doesn't exist, creates it with defaults and returns them.
/// If the config file is malformed, recreates it with defaults.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_file_path()?)
}

/// Load configuration from an explicit path, with the same fallbacks as [`load_config`]
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        save_default_config_to(path)?;
    }

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = match toml::from_str(&config_str) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed config, restoring defaults");
            save_default_config_to(path)?;
            return Ok(Config::default());
        }
    };

    Ok(config)
}

/// Validate configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    config
        .range_boundaries()
        .context("Invalid [expansion] ranges")?;

    Ok(())
}
