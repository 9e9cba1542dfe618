//! Collision Resolution
//!
//! The eat-or-die tie-break applied whenever the seeker and a pursuer
//! share a cell.

use maze_grid::Position;

use crate::events::TickEvent;
use crate::pursuer::Pursuer;
use crate::state::CAPTURE_POINTS;

/// Resolves every seeker/pursuer overlap in index order.
///
/// A vulnerable pursuer is eaten: flagged, worth capture points and
/// teleported to the respawn cell. An overlap with a non-vulnerable
/// pursuer ends the run; returns true in that case.
pub fn resolve_collisions(
    seeker: Position,
    pursuers: &mut [Pursuer],
    power_timer: u32,
    respawn: Position,
    score: &mut u32,
    events: &mut Vec<TickEvent>,
) -> bool {
    for (index, pursuer) in pursuers.iter_mut().enumerate() {
        if pursuer.position != seeker {
            continue;
        }
        if pursuer.is_vulnerable(power_timer) {
            pursuer.eaten = true;
            pursuer.position = respawn;
            *score += CAPTURE_POINTS;
            events.push(TickEvent::PursuerCaptured {
                index,
                points: CAPTURE_POINTS,
            });
            tracing::debug!(index, "pursuer captured");
        } else {
            events.push(TickEvent::SeekerCaught { index });
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vulnerable_pursuer_is_eaten() {
        let seeker = Position::new(2, 2);
        let respawn = Position::new(5, 5);
        let mut pursuers = vec![Pursuer::new(seeker, 0.0)];
        let mut score = 0;
        let mut events = Vec::new();

        let caught = resolve_collisions(seeker, &mut pursuers, 10, respawn, &mut score, &mut events);

        assert!(!caught);
        assert!(pursuers[0].eaten);
        assert_eq!(pursuers[0].position, respawn);
        assert_eq!(score, CAPTURE_POINTS);
        assert_eq!(
            events,
            vec![TickEvent::PursuerCaptured {
                index: 0,
                points: CAPTURE_POINTS
            }]
        );
    }

    #[test]
    fn test_deadly_pursuer_ends_the_run() {
        let seeker = Position::new(2, 2);
        let mut pursuers = vec![
            Pursuer::new(Position::new(0, 0), 0.0),
            Pursuer::new(seeker, 0.0),
        ];
        let mut score = 0;
        let mut events = Vec::new();

        let caught = resolve_collisions(
            seeker,
            &mut pursuers,
            0,
            Position::new(5, 5),
            &mut score,
            &mut events,
        );

        assert!(caught);
        assert_eq!(score, 0);
        assert_eq!(events, vec![TickEvent::SeekerCaught { index: 1 }]);
    }

    #[test]
    fn test_eaten_pursuer_is_deadly_again() {
        // already eaten this episode: the overlap is fatal despite the timer
        let seeker = Position::new(2, 2);
        let mut pursuers = vec![Pursuer::new(seeker, 0.0)];
        pursuers[0].eaten = true;
        let mut score = 0;
        let mut events = Vec::new();

        let caught = resolve_collisions(
            seeker,
            &mut pursuers,
            10,
            Position::new(5, 5),
            &mut score,
            &mut events,
        );

        assert!(caught);
        assert_eq!(events, vec![TickEvent::SeekerCaught { index: 0 }]);
    }

    #[test]
    fn test_no_overlap_no_effect() {
        let mut pursuers = vec![Pursuer::new(Position::new(0, 0), 0.0)];
        let mut score = 0;
        let mut events = Vec::new();

        let caught = resolve_collisions(
            Position::new(2, 2),
            &mut pursuers,
            10,
            Position::new(5, 5),
            &mut score,
            &mut events,
        );

        assert!(!caught);
        assert_eq!(score, 0);
        assert!(events.is_empty());
    }
}
