//! Configuration
//!
//! Simulation tuning loaded from TOML, with per-section defaults so
//! partial files work.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use maze_grid::Topology;

/// Top-level simulation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub board: BoardConfig,
    pub rules: RuleConfig,
    pub pursuers: PursuerSetup,
    /// Random seed for reproducible runs.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            rules: RuleConfig::default(),
            pursuers: PursuerSetup::default(),
            seed: 42,
        }
    }
}

/// Board geometry and topology.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    pub topology: Topology,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 19,
            height: 15,
            topology: Topology::Flat,
        }
    }
}

/// Tick-rule tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Power episode length in ticks.
    pub power_duration: u32,
    /// Pursuers move once every this many ticks.
    pub pursuer_cadence: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            power_duration: 40,
            pursuer_cadence: 1,
        }
    }
}

/// Pursuer roster configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PursuerSetup {
    /// Number of pursuers placed in the holding zone.
    pub count: usize,
    /// Default probability of a pursuer ignoring the chase rule in favor
    /// of a random move.
    pub random_move_chance: f64,
    /// Per-pursuer overrides of `random_move_chance`, by index.
    pub personalities: Vec<f64>,
}

impl Default for PursuerSetup {
    fn default() -> Self {
        Self {
            count: 4,
            random_move_chance: 0.1,
            personalities: Vec::new(),
        }
    }
}

impl PursuerSetup {
    /// Returns the random-move probability for the pursuer at `index`.
    pub fn chance_for(&self, index: usize) -> f64 {
        self.personalities
            .get(index)
            .copied()
            .unwrap_or(self.random_move_chance)
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SimConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads from the given path, falling back to defaults when the file
    /// is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("could not load simulation config: {}; using defaults", e);
            Self::default()
        })
    }
}
