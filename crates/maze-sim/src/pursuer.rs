//! Pursuer Entities
//!
//! Plain value-type pursuers owned by the simulation.

use serde::{Deserialize, Serialize};

use maze_grid::Position;

/// An adversarial entity trying to catch the seeker.
///
/// Identity is the pursuer's index in the simulation's roster, stable
/// across ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pursuer {
    /// Current cell.
    pub position: Position,
    /// Set once the pursuer is eaten during the current power episode;
    /// cleared when the episode ends.
    pub eaten: bool,
    /// Probability of ignoring the chase rule in favor of a random move.
    pub random_move_chance: f64,
}

impl Pursuer {
    /// Creates a pursuer at `position`.
    pub fn new(position: Position, random_move_chance: f64) -> Self {
        Self {
            position,
            eaten: false,
            random_move_chance,
        }
    }

    /// A pursuer is vulnerable only while a power episode is active and it
    /// has not already been eaten during that episode.
    pub fn is_vulnerable(&self, power_timer: u32) -> bool {
        power_timer > 0 && !self.eaten
    }
}

/// Read-only pursuer view exposed at the snapshot boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PursuerSnapshot {
    pub position: Position,
    pub vulnerable: bool,
    pub eaten: bool,
}
