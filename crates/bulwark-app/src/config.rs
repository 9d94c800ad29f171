//! Loading a `SimConfig` from a JSON file.
//!
//! Every field is optional; missing ones take their defaults, so
//! `{"seed": 7, "tuning": {"wave_interval_secs": 10.0}}` is a complete file.

use std::fmt;
use std::path::Path;

use bulwark_sim::engine::SimConfig;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub fn parse_config(json: &str) -> Result<SimConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_config(path: &Path) -> Result<SimConfig, ConfigError> {
    let json = std::fs::read_to_string(path)?;
    parse_config(&json)
}

/// Config from an optional path; defaults when none is given.
pub fn resolve_config(path: Option<&Path>) -> Result<SimConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(SimConfig::default()),
    }
}
