//! Seeker decision strategies.
//!
//! The decision layer sits between a host harness and the simulation: it
//! reads a [`GameSnapshot`] and answers with one [`Direction`] per tick.
//! It never mutates simulation state.
//!
//! ```text
//! ┌──────────┐    GameSnapshot     ┌────────────┐    Direction
//! │ maze-sim │ ──────────────────▶ │ maze-pilot │ ──────────────▶ host
//! └──────────┘                     └────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: strategy tuning knobs
//! - [`hunter`]: threat-avoiding, BFS goal-seeking strategy
//! - [`random`]: random-legal-move baseline

pub mod config;
pub mod hunter;
pub mod random;

pub use config::{ConfigError, PilotConfig};
pub use hunter::HunterPilot;
pub use random::RandomPilot;

use maze_grid::Direction;
use maze_sim::GameSnapshot;

/// A seeker decision policy: snapshot in, direction out.
///
/// Implementations are plain values picked at composition time; the
/// simulation never knows which one is driving.
pub trait SeekerStrategy {
    /// Short human-readable strategy name.
    fn info(&self) -> &str;

    /// Chooses the next direction for the given snapshot.
    fn decide(&mut self, snapshot: &GameSnapshot) -> Direction;
}
