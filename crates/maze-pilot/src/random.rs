//! Random Baseline
//!
//! Uniformly random legal movement, for comparison runs and tests.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use maze_grid::Direction;
use maze_sim::{passable, tunnel_target, GameSnapshot};

use crate::SeekerStrategy;

/// Picks a random legal direction each tick.
///
/// Owns its own seeded generator, independent of the simulation's, so the
/// two random streams stay reproducible separately.
#[derive(Debug)]
pub struct RandomPilot {
    rng: SmallRng,
}

impl RandomPilot {
    /// Creates a pilot seeded from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl SeekerStrategy for RandomPilot {
    fn info(&self) -> &str {
        "random"
    }

    fn decide(&mut self, snapshot: &GameSnapshot) -> Direction {
        let mut directions = Direction::CARDINALS;
        directions.shuffle(&mut self.rng);
        directions
            .into_iter()
            .find(|&d| {
                let landed = tunnel_target(&snapshot.grid, snapshot.seeker, d);
                passable(&snapshot.grid, landed)
            })
            .unwrap_or(Direction::Stay)
    }
}
