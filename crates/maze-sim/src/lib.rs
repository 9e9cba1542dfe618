//! Turn-based maze-chase simulation engine.
//!
//! Owns the authoritative game state and advances it one tick per
//! [`Simulation::step`] call: seeker movement with the horizontal tunnel,
//! item pickup and scoring, the timed power episode, collision resolution
//! and the pursuer AI.

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod board;
pub mod config;
pub mod events;
pub mod pursuer;
pub mod snapshot;
pub mod state;
pub mod systems;

pub use board::{BoardLayout, HoldingZone};
pub use config::{BoardConfig, ConfigError, PursuerSetup, RuleConfig, SimConfig};
pub use events::{BlockReason, TickEvent};
pub use pursuer::{Pursuer, PursuerSnapshot};
pub use snapshot::GameSnapshot;
pub use state::{SimError, Simulation, Status};
pub use systems::{passable, tunnel_target};

/// Seeded random number generator owned by the simulation.
///
/// All randomness (scatter moves, personality rolls) flows through one of
/// these, so a run is fully reproducible from its seed.
#[derive(Debug)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    /// Creates a generator from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}
