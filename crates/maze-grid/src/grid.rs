//! Raster Grid
//!
//! The 2D integer grid the rest of the workspace is built on, with the
//! traversals the simulation and the strategies share: neighbor
//! enumeration, flood fill, single-source BFS distances and shortest-path
//! reconstruction.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distance::{DistanceMap, UNREACHED};
use crate::position::Position;

/// Whether grid edges wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Edges are hard boundaries; border cells have fewer neighbors.
    #[default]
    Flat,
    /// Both axes wrap, so every cell has exactly four neighbors.
    Toroidal,
}

/// Errors raised when constructing a grid from invalid input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A fixed-size rectangular grid of integer cell codes.
///
/// Dimensions are immutable after construction and every cell access is
/// bounds-checked. Cells are stored row-major (`rows[y][x]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    topology: Topology,
    cells: Vec<i32>,
}

impl Grid {
    /// Creates a `width` x `height` grid filled with `fill`.
    ///
    /// Non-positive dimensions are a configuration error and fail fast.
    pub fn new(width: i32, height: i32, fill: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            topology: Topology::Flat,
            cells: vec![fill; (width * height) as usize],
        })
    }

    /// Builds a grid from row-major data (`rows[y][x]`).
    ///
    /// Empty input and ragged rows fail fast.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, GridError> {
        let height = rows.len() as i32;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as i32;
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width as usize {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width as usize,
                    found: row.len(),
                });
            }
        }
        let cells = rows.iter().flatten().copied().collect();
        Ok(Self {
            width,
            height,
            topology: Topology::Flat,
            cells,
        })
    }

    /// Sets the topology, builder-style.
    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    /// Returns true when `p` lies inside the grid bounds.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    fn index(&self, p: Position) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// Returns the cell code at `p`, or `None` when out of bounds.
    pub fn get(&self, p: Position) -> Option<i32> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Sets the cell at `p`. Returns false when `p` is out of bounds.
    pub fn set(&mut self, p: Position, value: i32) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Exports the cells as row-major data (`rows[y][x]`).
    pub fn rows(&self) -> Vec<Vec<i32>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cells[(y * self.width + x) as usize])
                    .collect()
            })
            .collect()
    }

    /// Counts the cells holding `value`.
    pub fn count(&self, value: i32) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Returns every cell position holding `value`, in row-major order.
    pub fn cells_with(&self, value: i32) -> Vec<Position> {
        let mut result = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[(y * self.width + x) as usize] == value {
                    result.push(Position::new(x, y));
                }
            }
        }
        result
    }

    /// Returns up to four orthogonal neighbors of `p` in the fixed order
    /// +x, -x, +y, -y.
    ///
    /// With `wrap`, coordinates wrap modulo the dimensions (toroidal), so
    /// exactly four neighbors are always returned; without it, neighbors
    /// falling outside the grid are omitted.
    pub fn neighbors(&self, p: Position, wrap: bool) -> Vec<Position> {
        const OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        let mut result = Vec::with_capacity(4);
        for (dx, dy) in OFFSETS {
            let mut n = p.offset(dx, dy);
            if wrap {
                n.x = n.x.rem_euclid(self.width);
                n.y = n.y.rem_euclid(self.height);
                result.push(n);
            } else if self.contains(n) {
                result.push(n);
            }
        }
        result
    }

    fn wraps(&self) -> bool {
        self.topology == Topology::Toroidal
    }

    /// Flood-fills the 4-connected region of `start`'s original value with
    /// `new_value`, returning the number of cells changed.
    ///
    /// Returns 0 when `start` is out of bounds or already holds
    /// `new_value`. Uses an explicit worklist, so cost is bounded by the
    /// region size rather than recursion depth.
    pub fn flood_fill(&mut self, start: Position, new_value: i32) -> usize {
        let old = match self.get(start) {
            Some(v) => v,
            None => return 0,
        };
        if old == new_value {
            return 0;
        }

        let wrap = self.wraps();
        let mut queue = VecDeque::new();
        self.set(start, new_value);
        queue.push_back(start);
        let mut changed = 1;

        while let Some(current) = queue.pop_front() {
            for n in self.neighbors(current, wrap) {
                if self.get(n) == Some(old) {
                    self.set(n, new_value);
                    queue.push_back(n);
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Computes BFS hop counts from `start`, treating cells equal to
    /// `obstacle` as impassable.
    ///
    /// The first time a cell is dequeued its distance is final; no cell is
    /// visited twice. When `start` is out of bounds or itself an obstacle,
    /// the whole map is unreached.
    pub fn all_distance(&self, start: Position, obstacle: i32) -> DistanceMap {
        let mut distances = DistanceMap::unreached(self.width, self.height);
        match self.get(start) {
            Some(v) if v != obstacle => {}
            _ => return distances,
        }

        let wrap = self.wraps();
        let mut queue = VecDeque::new();
        distances.set(start, 0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let next_distance = distances.get(current).unwrap_or(UNREACHED) + 1;
            for n in self.neighbors(current, wrap) {
                if distances.is_reached(n) {
                    continue;
                }
                if self.get(n) == Some(obstacle) {
                    continue;
                }
                distances.set(n, next_distance);
                queue.push_back(n);
            }
        }
        distances
    }

    /// Returns the shortest path from `p1` to `p2` inclusive, or `None`
    /// when no path exists.
    ///
    /// `None` is returned when either endpoint is out of bounds, either
    /// endpoint equals `obstacle`, or BFS from `p1` never reaches `p2`.
    /// When `p1 == p2` the path is the single cell. Among equal-length
    /// paths the result is the one induced by the fixed neighbor order, so
    /// repeated queries are reproducible.
    pub fn shortest_path(
        &self,
        p1: Position,
        p2: Position,
        obstacle: i32,
    ) -> Option<Vec<Position>> {
        if !self.contains(p1) || !self.contains(p2) {
            return None;
        }
        if self.get(p1) == Some(obstacle) || self.get(p2) == Some(obstacle) {
            return None;
        }
        if p1 == p2 {
            return Some(vec![p1]);
        }

        let wrap = self.wraps();
        let size = (self.width * self.height) as usize;
        let mut visited = vec![false; size];
        let mut parent: Vec<Option<Position>> = vec![None; size];
        let mut queue = VecDeque::new();

        visited[self.index(p1)?] = true;
        queue.push_back(p1);

        'search: while let Some(current) = queue.pop_front() {
            for n in self.neighbors(current, wrap) {
                let i = self.index(n)?;
                if visited[i] || self.get(n) == Some(obstacle) {
                    continue;
                }
                visited[i] = true;
                parent[i] = Some(current);
                if n == p2 {
                    break 'search;
                }
                queue.push_back(n);
            }
        }

        if !visited[self.index(p2)?] {
            return None;
        }

        let mut path = vec![p2];
        let mut current = p2;
        while current != p1 {
            current = parent[self.index(current)?]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}
