//! Tick Events
//!
//! What happened during the most recent simulation tick.

use serde::{Deserialize, Serialize};

use maze_grid::Position;

/// Why a seeker move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// The candidate cell fell outside the grid.
    OutOfBounds,
    /// The candidate cell is a wall.
    Wall,
}

/// A notable occurrence within one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TickEvent {
    /// The seeker's move was rejected; state is unchanged.
    SeekerBlocked { reason: BlockReason },
    /// An item was collected.
    ItemCollected { position: Position, points: u32 },
    /// A power item was collected; a power episode begins.
    PowerItemCollected { position: Position, points: u32 },
    /// The power timer ran out; pursuers are dangerous again.
    PowerFaded,
    /// A vulnerable pursuer was eaten and sent back to the holding zone.
    PursuerCaptured { index: usize, points: u32 },
    /// A pursuer caught the seeker; the run is over.
    SeekerCaught { index: usize },
    /// The last collectible was taken; the seeker wins.
    BoardCleared,
}
