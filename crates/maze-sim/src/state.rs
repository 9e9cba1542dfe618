//! Simulation State
//!
//! The authoritative game state and the tick state machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use maze_grid::{cell, Direction, Grid, GridError, Position};

use crate::board::{BoardLayout, HoldingZone};
use crate::config::SimConfig;
use crate::events::{BlockReason, TickEvent};
use crate::pursuer::{Pursuer, PursuerSnapshot};
use crate::snapshot::GameSnapshot;
use crate::systems;
use crate::SimRng;

/// Points for a regular item.
pub const ITEM_POINTS: u32 = 10;
/// Points for a power item.
pub const POWER_ITEM_POINTS: u32 = 50;
/// Points for eating a vulnerable pursuer.
pub const CAPTURE_POINTS: u32 = 200;

/// Simulation lifecycle status.
///
/// Transitions are one-way: Init -> Running -> Finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Init,
    Running,
    Finished,
}

/// Errors raised while assembling a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("board construction failed: {0}")]
    Board(#[from] GridError),
}

/// The authoritative game state.
///
/// Mutated exclusively through [`Simulation::step`]; every other public
/// method is a side-effect-free read. Once the status reaches
/// [`Status::Finished`] the state no longer changes.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    seeker: Position,
    pursuers: Vec<Pursuer>,
    holding_zone: Option<HoldingZone>,
    respawn: Position,
    score: u32,
    power_timer: u32,
    power_duration: u32,
    pursuer_cadence: u32,
    tick: u64,
    status: Status,
    rng: SimRng,
    events: Vec<TickEvent>,
}

impl Simulation {
    /// Builds a simulation with the default arena for `config`.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        let layout = BoardLayout::generate(&config.board, config.pursuers.count)?;
        Ok(Self::from_layout(layout, config))
    }

    /// Builds a simulation from an explicit starting layout.
    pub fn from_layout(layout: BoardLayout, config: &SimConfig) -> Self {
        let pursuers: Vec<Pursuer> = layout
            .pursuer_starts
            .iter()
            .enumerate()
            .map(|(i, &p)| Pursuer::new(p, config.pursuers.chance_for(i)))
            .collect();
        let respawn = layout
            .holding_zone
            .map(|z| z.respawn())
            .or_else(|| pursuers.first().map(|p| p.position))
            .unwrap_or(layout.seeker_start);

        Self {
            grid: layout.grid,
            seeker: layout.seeker_start,
            pursuers,
            holding_zone: layout.holding_zone,
            respawn,
            score: 0,
            power_timer: 0,
            power_duration: config.rules.power_duration,
            pursuer_cadence: config.rules.pursuer_cadence.max(1),
            tick: 0,
            status: Status::Init,
            rng: SimRng::from_seed(config.seed),
            events: Vec::new(),
        }
    }

    /// Moves the state machine from Init to Running.
    ///
    /// Does nothing once the simulation has started.
    pub fn start(&mut self) {
        if self.status == Status::Init {
            self.status = Status::Running;
        }
    }

    // --- read accessors -------------------------------------------------

    pub fn board(&self) -> &Grid {
        &self.grid
    }

    pub fn seeker_position(&self) -> Position {
        self.seeker
    }

    pub fn pursuers(&self) -> &[Pursuer] {
        &self.pursuers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn power_timer(&self) -> u32 {
        self.power_timer
    }

    pub fn holding_zone(&self) -> Option<&HoldingZone> {
        self.holding_zone.as_ref()
    }

    /// Events recorded during the most recent tick.
    pub fn last_events(&self) -> &[TickEvent] {
        &self.events
    }

    /// Captures the full read boundary as one serializable snapshot.
    ///
    /// The snapshot owns a copy of the grid, so planning on it never
    /// aliases the authoritative board.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tick: self.tick,
            status: self.status,
            score: self.score,
            power_timer: self.power_timer,
            grid: self.grid.clone(),
            seeker: self.seeker,
            pursuers: self
                .pursuers
                .iter()
                .map(|p| PursuerSnapshot {
                    position: p.position,
                    vulnerable: p.is_vulnerable(self.power_timer),
                    eaten: p.eaten,
                })
                .collect(),
        }
    }

    // --- tick machine ---------------------------------------------------

    /// Advances the simulation by one tick.
    ///
    /// Calling `step` when the simulation is not running is a no-op that
    /// returns the current status.
    pub fn step(&mut self, direction: Direction) -> Status {
        if self.status != Status::Running {
            return self.status;
        }

        self.events.clear();
        self.tick += 1;

        // candidate cell, with the horizontal tunnel applied
        let candidate = systems::tunnel_target(&self.grid, self.seeker, direction);

        // power countdown; an expiring episode clears every eaten flag
        if self.power_timer > 0 {
            self.power_timer -= 1;
            if self.power_timer == 0 {
                for pursuer in &mut self.pursuers {
                    pursuer.eaten = false;
                }
                self.events.push(TickEvent::PowerFaded);
                tracing::debug!(tick = self.tick, "power episode faded");
            }
        }

        self.apply_seeker_move(candidate);

        if self.resolve_collisions() {
            return self.status;
        }

        if self.tick % u64::from(self.pursuer_cadence) == 0 {
            systems::pursuit::advance_pursuers(
                &self.grid,
                &mut self.pursuers,
                self.seeker,
                self.holding_zone.as_ref(),
                self.power_timer,
                &mut self.rng.0,
            );
        }

        if self.resolve_collisions() {
            return self.status;
        }

        if self.grid.count(cell::ITEM) == 0 && self.grid.count(cell::POWER_ITEM) == 0 {
            self.status = Status::Finished;
            self.events.push(TickEvent::BoardCleared);
            tracing::info!(tick = self.tick, score = self.score, "board cleared");
        }

        self.status
    }

    /// Validates the candidate cell and commits the move, resolving any
    /// item pickup. An invalid candidate leaves the seeker in place.
    fn apply_seeker_move(&mut self, candidate: Position) {
        let code = match self.grid.get(candidate) {
            None => {
                self.events.push(TickEvent::SeekerBlocked {
                    reason: BlockReason::OutOfBounds,
                });
                return;
            }
            Some(cell::WALL) => {
                self.events.push(TickEvent::SeekerBlocked {
                    reason: BlockReason::Wall,
                });
                return;
            }
            Some(code) => code,
        };

        self.seeker = candidate;
        match code {
            cell::ITEM => {
                self.grid.set(candidate, cell::EMPTY);
                self.score += ITEM_POINTS;
                self.events.push(TickEvent::ItemCollected {
                    position: candidate,
                    points: ITEM_POINTS,
                });
            }
            cell::POWER_ITEM => {
                self.grid.set(candidate, cell::EMPTY);
                self.score += POWER_ITEM_POINTS;
                // a fresh episode starts even if one is already active
                self.power_timer = self.power_duration;
                for pursuer in &mut self.pursuers {
                    pursuer.eaten = false;
                }
                self.events.push(TickEvent::PowerItemCollected {
                    position: candidate,
                    points: POWER_ITEM_POINTS,
                });
                tracing::debug!(tick = self.tick, "power episode started");
            }
            _ => {}
        }
    }

    fn resolve_collisions(&mut self) -> bool {
        let caught = systems::collision::resolve_collisions(
            self.seeker,
            &mut self.pursuers,
            self.power_timer,
            self.respawn,
            &mut self.score,
            &mut self.events,
        );
        if caught {
            self.status = Status::Finished;
            tracing::info!(tick = self.tick, score = self.score, "seeker caught");
        }
        caught
    }
}
