//! Configuration schema for logstrip
//!
//! A config file carries a `version` key and an optional `[strip]` section:
//!
//! ```toml
//! version = "1"
//!
//! [strip]
//! root = "src"
//! extensions = ["ts", "tsx"]
//! exclude_dirs = ["node_modules"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unsupported config version '{version}' (supported: {supported})")]
    UnsupportedVersion { version: String, supported: String },
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    /// Tree stripping configuration
    #[serde(default)]
    pub strip: Option<StripConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            strip: None,
        }
    }
}

impl Config {
    /// Parse a config document, rejecting unknown schema versions
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if !SUPPORTED_CONFIG_VERSIONS.contains(&config.version.as_str()) {
            return Err(ConfigError::UnsupportedVersion {
                version: config.version,
                supported: SUPPORTED_CONFIG_VERSIONS.join(", "),
            });
        }
        Ok(config)
    }
}

/// Settings for the `[strip]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripConfig {
    #[serde(default = "default_root")]
    pub root: String,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_root() -> String {
    "src".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["ts".to_string(), "tsx".to_string()]
}

fn default_exclude_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

/// Get the config home directory.
/// Respects XDG_CONFIG_HOME, falls back to ~/.config
pub fn get_config_home() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg));
        }
    }
    dirs::home_dir().map(|home| home.join(".config"))
}
