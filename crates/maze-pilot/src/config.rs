//! Strategy Configuration
//!
//! Tuning knobs for the hunter strategy, loadable from a TOML file.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Tuning knobs for [`HunterPilot`](crate::HunterPilot).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PilotConfig {
    /// Euclidean radius within which a non-vulnerable pursuer triggers the
    /// escape behavior.
    pub danger_radius: f64,
    /// A power item is preferred over the nearest plain item when its BFS
    /// distance is within this many cells of it.
    pub power_item_bias: i32,
    /// Avoid reversing the previous direction when a non-reversing legal
    /// alternative exists.
    pub avoid_reversal: bool,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            danger_radius: 5.0,
            power_item_bias: 3,
            avoid_reversal: true,
        }
    }
}

impl PilotConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }
}

/// Errors raised while loading strategy configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the config file
    Io(std::io::Error),
    /// Error parsing the TOML content
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "TOML parse error: {}", e),
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
