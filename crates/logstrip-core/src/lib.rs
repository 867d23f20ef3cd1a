//! Core configuration and utilities for logstrip
//!
//! ## Modules
//!
//! - `config`: root config schema with the `[strip]` section
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod logging;

pub use config::{
    get_config_home, Config, ConfigError, StripConfig, CURRENT_CONFIG_VERSION,
    SUPPORTED_CONFIG_VERSIONS,
};
pub use logging::{init_logging, parse_level, InitError};
