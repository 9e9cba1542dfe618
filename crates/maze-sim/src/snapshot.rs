//! Game Snapshot
//!
//! The serializable read boundary handed to decision strategies and
//! external hosts.

use serde::{Deserialize, Serialize};

use maze_grid::{Grid, Position};

use crate::pursuer::PursuerSnapshot;
use crate::state::Status;

/// A copy of everything a decision strategy may read.
///
/// Snapshots own a copy of the grid, so planning on one never aliases the
/// authoritative board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub tick: u64,
    pub status: Status,
    pub score: u32,
    pub power_timer: u32,
    pub grid: Grid,
    pub seeker: Position,
    pub pursuers: Vec<PursuerSnapshot>,
}

impl GameSnapshot {
    /// Serializes the snapshot to a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a snapshot from a JSON line.
    pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
