//! Board Setup
//!
//! Default arena generation and the holding-zone geometry.

use serde::{Deserialize, Serialize};

use maze_grid::{cell, Grid, GridError, Position};

use crate::config::BoardConfig;

/// The reserved rectangle pursuers start in and leave through forced
/// movement. Chase and scatter movement never re-enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingZone {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl HoldingZone {
    /// Creates a zone spanning the inclusive rectangle.
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Returns true when `p` lies inside the zone.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// The column pursuers line up on before leaving.
    pub fn exit_column(&self) -> i32 {
        (self.x_min + self.x_max) / 2
    }

    /// The first cell above the zone, where exiting pursuers emerge.
    pub fn exit(&self) -> Position {
        Position::new(self.exit_column(), self.y_min - 1)
    }

    /// The interior cell eaten pursuers are teleported back to.
    pub fn respawn(&self) -> Position {
        Position::new(self.exit_column(), self.y_min)
    }

    /// Interior cells in row-major order.
    pub fn cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        for y in self.y_min..=self.y_max {
            for x in self.x_min..=self.x_max {
                cells.push(Position::new(x, y));
            }
        }
        cells
    }
}

/// A complete starting arrangement: grid, entity starts and the zone.
#[derive(Debug, Clone)]
pub struct BoardLayout {
    pub grid: Grid,
    pub seeker_start: Position,
    pub pursuer_starts: Vec<Position>,
    pub holding_zone: Option<HoldingZone>,
}

impl BoardLayout {
    /// Assembles a layout from explicit parts, for hosts with custom maps.
    pub fn from_parts(
        grid: Grid,
        seeker_start: Position,
        pursuer_starts: Vec<Position>,
        holding_zone: Option<HoldingZone>,
    ) -> Self {
        Self {
            grid,
            seeker_start,
            pursuer_starts,
            holding_zone,
        }
    }

    /// Generates the default arena for the configured dimensions.
    ///
    /// Border walls, items on every interior cell, power items in the four
    /// interior corners, a centered holding zone kept free of items, the
    /// seeker starting near the bottom and pursuers cycling through the
    /// zone interior. A playable arena needs at least a 7x7 board.
    pub fn generate(config: &BoardConfig, pursuer_count: usize) -> Result<Self, GridError> {
        let width = config.width;
        let height = config.height;
        if width < 7 || height < 7 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let mut grid = Grid::new(width, height, cell::ITEM)?.with_topology(config.topology);

        for x in 0..width {
            grid.set(Position::new(x, 0), cell::WALL);
            grid.set(Position::new(x, height - 1), cell::WALL);
        }
        for y in 0..height {
            grid.set(Position::new(0, y), cell::WALL);
            grid.set(Position::new(width - 1, y), cell::WALL);
        }

        for corner in [
            Position::new(1, 1),
            Position::new(width - 2, 1),
            Position::new(1, height - 2),
            Position::new(width - 2, height - 2),
        ] {
            grid.set(corner, cell::POWER_ITEM);
        }

        let zone = HoldingZone::new(
            width / 2 - 1,
            height / 2 - 1,
            width / 2 + 1,
            height / 2,
        );
        for p in zone.cells() {
            grid.set(p, cell::EMPTY);
        }
        // keep the emergence cell clear so forced exits always land somewhere
        grid.set(zone.exit(), cell::EMPTY);

        let seeker_start = Position::new(width / 2, height - 2);
        grid.set(seeker_start, cell::EMPTY);

        let zone_cells = zone.cells();
        let pursuer_starts = (0..pursuer_count)
            .map(|i| zone_cells[i % zone_cells.len()])
            .collect();

        Ok(Self {
            grid,
            seeker_start,
            pursuer_starts,
            holding_zone: Some(zone),
        })
    }
}
