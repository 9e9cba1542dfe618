//! Direction Vocabulary
//!
//! The cardinal movement directions plus the explicit no-move.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A movement direction.
///
/// The vertical axis follows screen convention and is fixed for the whole
/// workspace: `Up` decreases y, `Down` increases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Stay,
}

impl Direction {
    /// The four cardinal directions in the fixed order used for BFS
    /// expansion and every tie-break: +x, -x, +y, -y.
    pub const CARDINALS: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Returns the `(dx, dy)` offset of this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Stay => (0, 0),
        }
    }

    /// Returns the opposite direction. `Stay` is its own opposite.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Stay => Direction::Stay,
        }
    }

    /// Maps a host-side integer command to a direction.
    ///
    /// Out-of-range codes degrade to `Stay` instead of failing, so a
    /// malformed host command never stops the simulation.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Direction::Left,
            1 => Direction::Right,
            2 => Direction::Up,
            3 => Direction::Down,
            _ => Direction::Stay,
        }
    }

    /// The integer command code for this direction.
    pub fn code(self) -> i32 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
            Direction::Stay => 4,
        }
    }

    /// Returns the direction leading from one cell to an orthogonally
    /// adjacent cell.
    ///
    /// Returns `Stay` when the cells are identical or not adjacent.
    pub fn between(from: Position, to: Position) -> Self {
        match (to.x - from.x, to.y - from.y) {
            (1, 0) => Direction::Right,
            (-1, 0) => Direction::Left,
            (0, 1) => Direction::Down,
            (0, -1) => Direction::Up,
            _ => Direction::Stay,
        }
    }
}
