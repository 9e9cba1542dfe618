//! Distance Map
//!
//! Per-cell BFS hop counts from a fixed source cell.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Sentinel value for cells BFS never reached.
pub const UNREACHED: i32 = -1;

/// A grid of BFS hop counts from a designated source.
///
/// Has the same dimensions as the grid it was computed from; obstacle cells
/// and cells cut off from the source hold [`UNREACHED`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMap {
    width: i32,
    height: i32,
    cells: Vec<i32>,
}

impl DistanceMap {
    /// Creates an all-unreached map of the given dimensions.
    pub(crate) fn unreached(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![UNREACHED; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, p: Position) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            None
        } else {
            Some((p.y * self.width + p.x) as usize)
        }
    }

    /// Returns the hop count at `p`, or `None` when `p` is out of bounds.
    pub fn get(&self, p: Position) -> Option<i32> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Returns true when BFS reached `p`.
    pub fn is_reached(&self, p: Position) -> bool {
        matches!(self.get(p), Some(d) if d != UNREACHED)
    }

    pub(crate) fn set(&mut self, p: Position, value: i32) {
        if let Some(i) = self.index(p) {
            self.cells[i] = value;
        }
    }
}
