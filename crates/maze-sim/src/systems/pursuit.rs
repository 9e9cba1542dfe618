//! Pursuer Movement
//!
//! Per-pursuer decision rules, applied in priority order: forced
//! holding-zone exit, scared scatter, personality-driven random moves,
//! BFS chase toward the seeker.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use maze_grid::{cell, Direction, DistanceMap, Grid, Position, UNREACHED};

use crate::board::HoldingZone;
use crate::pursuer::Pursuer;

use super::{passable, tunnel_target};

/// Moves every due pursuer in index order against the current board.
///
/// Pursuers moved earlier in the pass are visible to later ones. The chase
/// distance map is seeded at the seeker and computed once per pass, since
/// the seeker does not move while pursuers do.
pub fn advance_pursuers(
    grid: &Grid,
    pursuers: &mut [Pursuer],
    seeker: Position,
    zone: Option<&HoldingZone>,
    power_timer: u32,
    rng: &mut SmallRng,
) {
    let chase_map = chase_distances(grid, seeker, zone);

    for pursuer in pursuers.iter_mut() {
        let current = pursuer.position;

        if let Some(zone) = zone {
            if zone.contains(current) {
                pursuer.position = exit_step(grid, zone, current);
                continue;
            }
        }

        if pursuer.is_vulnerable(power_timer) {
            pursuer.position = random_step(grid, zone, current, rng).unwrap_or(current);
            continue;
        }

        if rng.gen::<f64>() < pursuer.random_move_chance {
            pursuer.position = random_step(grid, zone, current, rng).unwrap_or(current);
            continue;
        }

        pursuer.position = chase_step(grid, zone, &chase_map, current)
            .or_else(|| random_step(grid, zone, current, rng))
            .unwrap_or(current);
    }
}

/// Distance-to-seeker map with walls and the holding zone impassable.
fn chase_distances(grid: &Grid, seeker: Position, zone: Option<&HoldingZone>) -> DistanceMap {
    let mut planning = grid.clone();
    if let Some(zone) = zone {
        for p in zone.cells() {
            planning.set(p, cell::WALL);
        }
    }
    planning.all_distance(seeker, cell::WALL)
}

/// Forced exit: line up on the exit column, then move up and out.
fn exit_step(grid: &Grid, zone: &HoldingZone, current: Position) -> Position {
    let target = if current.x < zone.exit_column() {
        current.offset(1, 0)
    } else if current.x > zone.exit_column() {
        current.offset(-1, 0)
    } else {
        current.offset(0, -1)
    };
    if passable(grid, target) {
        target
    } else {
        current
    }
}

/// Uniformly random legal step: shuffled direction order, first legal cell.
fn random_step(
    grid: &Grid,
    zone: Option<&HoldingZone>,
    current: Position,
    rng: &mut SmallRng,
) -> Option<Position> {
    let mut directions = Direction::CARDINALS;
    directions.shuffle(rng);
    directions
        .iter()
        .map(|&d| tunnel_target(grid, current, d))
        .find(|&p| legal_move(grid, zone, p))
}

/// The neighbor with the strictly smallest distance to the seeker, ties
/// resolved by the fixed direction order.
fn chase_step(
    grid: &Grid,
    zone: Option<&HoldingZone>,
    chase_map: &DistanceMap,
    current: Position,
) -> Option<Position> {
    let mut best: Option<(i32, Position)> = None;
    for direction in Direction::CARDINALS {
        let candidate = tunnel_target(grid, current, direction);
        if !legal_move(grid, zone, candidate) {
            continue;
        }
        let distance = match chase_map.get(candidate) {
            Some(d) if d != UNREACHED => d,
            _ => continue,
        };
        match best {
            Some((best_distance, _)) if distance >= best_distance => {}
            _ => best = Some((distance, candidate)),
        }
    }
    best.map(|(_, p)| p)
}

/// Movement legality for chase and scatter: walls block and the holding
/// zone is never re-entered.
fn legal_move(grid: &Grid, zone: Option<&HoldingZone>, p: Position) -> bool {
    passable(grid, p) && zone.map_or(true, |z| !z.contains(p))
}
