//! Shared grid types and pathfinding for the maze-chase workspace.
//!
//! This crate contains the raster grid data model and the breadth-first
//! traversals built on top of it. It has no simulation logic and is a
//! dependency for all other crates in the workspace.

pub mod cell;
pub mod direction;
pub mod distance;
pub mod grid;
pub mod position;

// Re-export the core vocabulary
pub use direction::Direction;
pub use distance::{DistanceMap, UNREACHED};
pub use grid::{Grid, GridError, Topology};
pub use position::{ParsePositionError, Position};
