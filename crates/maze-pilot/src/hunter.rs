//! Hunter Strategy
//!
//! Greedy escape when a pursuer is close; otherwise BFS toward the best
//! collectible over a planning grid that keeps a safety margin around
//! every pursuer.

use std::cmp::Ordering;

use maze_grid::{cell, Direction, DistanceMap, Grid, Position, Topology, UNREACHED};
use maze_sim::{passable, tunnel_target, GameSnapshot, PursuerSnapshot};

use crate::config::PilotConfig;
use crate::SeekerStrategy;

/// Threat-avoiding, goal-seeking seeker strategy.
///
/// Keeps one tick of memory (the previous direction) for the
/// anti-oscillation rule; everything else is a pure function of the
/// snapshot.
#[derive(Debug)]
pub struct HunterPilot {
    config: PilotConfig,
    last_direction: Option<Direction>,
}

impl HunterPilot {
    /// Creates a pilot with the given tuning.
    pub fn new(config: PilotConfig) -> Self {
        Self {
            config,
            last_direction: None,
        }
    }

    /// Creates a pilot with default tuning.
    pub fn with_defaults() -> Self {
        Self::new(PilotConfig::default())
    }

    /// The closest non-vulnerable pursuer within the danger radius.
    fn nearest_threat(&self, snapshot: &GameSnapshot) -> Option<Position> {
        snapshot
            .pursuers
            .iter()
            .filter(|p| !p.vulnerable)
            .map(|p| p.position)
            .filter(|&p| snapshot.seeker.euclidean_distance(p) < self.config.danger_radius)
            .min_by(|a, b| {
                let da = snapshot.seeker.euclidean_distance(*a);
                let db = snapshot.seeker.euclidean_distance(*b);
                da.partial_cmp(&db).unwrap_or(Ordering::Equal)
            })
    }

    /// Greedy escape: the legal direction whose resulting cell maximizes
    /// the distance to the threat, ties resolved by the fixed order.
    fn escape_direction(&self, snapshot: &GameSnapshot, threat: Position) -> Direction {
        let grid = &snapshot.grid;
        let mut best: Option<(f64, Direction)> = None;
        for direction in Direction::CARDINALS {
            let candidate = tunnel_target(grid, snapshot.seeker, direction);
            if !passable(grid, candidate) {
                continue;
            }
            let distance = candidate.euclidean_distance(threat);
            match best {
                Some((best_distance, _)) if distance <= best_distance => {}
                _ => best = Some((distance, direction)),
            }
        }
        best.map(|(_, d)| d).unwrap_or(Direction::Stay)
    }

    /// BFS route toward the best collectible on the safety-marked grid,
    /// retrying on the raw grid when the safe plan reaches nothing.
    fn route_direction(&self, snapshot: &GameSnapshot) -> Option<Direction> {
        let safe = mark_threats(&snapshot.grid, &snapshot.pursuers, snapshot.seeker);
        self.plan_on(&safe, snapshot)
            .or_else(|| self.plan_on(&snapshot.grid, snapshot))
    }

    fn plan_on(&self, planning: &Grid, snapshot: &GameSnapshot) -> Option<Direction> {
        let distances = planning.all_distance(snapshot.seeker, cell::WALL);
        let target = self.pick_target(planning, &distances)?;
        let path = planning.shortest_path(snapshot.seeker, target, cell::WALL)?;
        if path.len() < 2 {
            return None;
        }
        direction_of_step(planning, path[0], path[1])
    }

    /// The nearest reachable collectible, preferring a power item whose
    /// distance is within the configured bias of the nearest plain item.
    fn pick_target(&self, planning: &Grid, distances: &DistanceMap) -> Option<Position> {
        let nearest_item = nearest_of(planning, distances, cell::ITEM);
        let nearest_power = nearest_of(planning, distances, cell::POWER_ITEM);

        match (nearest_item, nearest_power) {
            (Some((item_dist, item)), Some((power_dist, power))) => {
                if power_dist <= item_dist + self.config.power_item_bias {
                    Some(power)
                } else {
                    Some(item)
                }
            }
            (Some((_, item)), None) => Some(item),
            (None, Some((_, power))) => Some(power),
            (None, None) => None,
        }
    }

    /// Avoids reversing the previous direction when a non-reversing legal
    /// alternative exists.
    fn apply_stability(&self, snapshot: &GameSnapshot, chosen: Direction) -> Direction {
        if !self.config.avoid_reversal {
            return chosen;
        }
        let last = match self.last_direction {
            Some(d) if d != Direction::Stay => d,
            _ => return chosen,
        };
        if chosen != last.opposite() {
            return chosen;
        }

        let grid = &snapshot.grid;
        // keep going straight while the road ahead is open
        let ahead = tunnel_target(grid, snapshot.seeker, last);
        if passable(grid, ahead) {
            return last;
        }
        // otherwise any legal turn beats flip-flopping
        Direction::CARDINALS
            .into_iter()
            .filter(|&d| d != chosen)
            .find(|&d| passable(grid, tunnel_target(grid, snapshot.seeker, d)))
            .unwrap_or(chosen)
    }
}

impl SeekerStrategy for HunterPilot {
    fn info(&self) -> &str {
        "hunter"
    }

    fn decide(&mut self, snapshot: &GameSnapshot) -> Direction {
        let chosen = match self.nearest_threat(snapshot) {
            Some(threat) => self.escape_direction(snapshot, threat),
            None => self
                .route_direction(snapshot)
                .unwrap_or_else(|| fallback_direction(&snapshot.grid, snapshot.seeker)),
        };

        let chosen = self.apply_stability(snapshot, chosen);
        self.last_direction = Some(chosen);
        tracing::debug!(tick = snapshot.tick, direction = ?chosen, "hunter decision");
        chosen
    }
}

/// Clones the board and walls off every pursuer cell plus its four
/// orthogonal neighbors, biasing routes away from close calls. The seeker's
/// own cell is never blocked, and the marking lives only in this private
/// copy.
fn mark_threats(grid: &Grid, pursuers: &[PursuerSnapshot], seeker: Position) -> Grid {
    let mut planning = grid.clone();
    for pursuer in pursuers {
        planning.set(pursuer.position, cell::WALL);
        for neighbor in grid.neighbors(pursuer.position, false) {
            planning.set(neighbor, cell::WALL);
        }
    }
    if let Some(code) = grid.get(seeker) {
        planning.set(seeker, code);
    }
    planning
}

/// The nearest reachable cell holding `code`, with its BFS distance.
fn nearest_of(grid: &Grid, distances: &DistanceMap, code: i32) -> Option<(i32, Position)> {
    grid.cells_with(code)
        .into_iter()
        .filter_map(|p| match distances.get(p) {
            Some(d) if d != UNREACHED => Some((d, p)),
            _ => None,
        })
        .min_by_key(|&(d, _)| d)
}

/// Direction leading from `from` to the adjacent cell `to`, honoring the
/// grid's wrap semantics the way BFS neighbor expansion does.
fn direction_of_step(grid: &Grid, from: Position, to: Position) -> Option<Direction> {
    Direction::CARDINALS.into_iter().find(|&d| {
        let mut dest = from.step(d);
        if grid.topology() == Topology::Toroidal {
            dest.x = dest.x.rem_euclid(grid.width());
            dest.y = dest.y.rem_euclid(grid.height());
        }
        dest == to
    })
}

/// First adjacent non-wall cell in the fixed direction order, or `Stay`
/// when fully boxed in.
fn fallback_direction(grid: &Grid, seeker: Position) -> Direction {
    Direction::CARDINALS
        .into_iter()
        .find(|&d| passable(grid, tunnel_target(grid, seeker, d)))
        .unwrap_or(Direction::Stay)
}
