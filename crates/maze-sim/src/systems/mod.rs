//! Per-tick simulation systems.
//!
//! Free functions invoked by the tick state machine in a fixed order, plus
//! the movement helpers every entity shares.

pub mod collision;
pub mod pursuit;

use maze_grid::{cell, Direction, Grid, Position};

/// Applies a movement direction with the maze tunnel convention: the x
/// coordinate wraps at the vertical edges, y never wraps.
pub fn tunnel_target(grid: &Grid, from: Position, direction: Direction) -> Position {
    let mut target = from.step(direction);
    if target.x < 0 {
        target.x = grid.width() - 1;
    } else if target.x >= grid.width() {
        target.x = 0;
    }
    target
}

/// Returns true when an entity may occupy `p`: inside the grid and not a
/// wall.
pub fn passable(grid: &Grid, p: Position) -> bool {
    matches!(grid.get(p), Some(code) if code != cell::WALL)
}
