//! The first organism: seeds four wall builders, then one forager.

use lineage_core::{Action, Direction, Result};
use lineage_genome::{Caste, OriginTracker};
use tracing::debug;

/// Origin clock value at which the forager lineage is released
pub const FORAGER_RELEASE_TICK: u32 = 6;

/// Direction the forager lineage is released towards
pub const FORAGER_HEADING: Direction = Direction::North;

/// Ticks 1 to 4 spawn a wall builder in the direction numbered like the
/// tick, tick 6 spawns the forager, every other tick stays put.
pub fn decide(tracker: &OriginTracker) -> Result<Action> {
    match tracker.origin_clock {
        clock @ 1..=4 => {
            let direction = Direction::from_index(clock)?;
            debug!(%direction, clock, "Ancestor seeding wall builder");
            Ok(Action::reproduce(
                direction,
                tracker.child_genome(Caste::WallBuilder, direction, direction),
            ))
        }
        FORAGER_RELEASE_TICK => {
            debug!(direction = %FORAGER_HEADING, "Ancestor releasing forager");
            Ok(Action::reproduce(
                FORAGER_HEADING,
                tracker.child_genome(Caste::Forager, FORAGER_HEADING, FORAGER_HEADING),
            ))
        }
        _ => Ok(Action::Stay),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_genome::GenomeView;

    fn at_clock(clock: u32) -> Action {
        decide(&OriginTracker::default().with_clock(clock)).unwrap()
    }

    #[test]
    fn test_seeds_walls_in_numbered_directions() {
        for clock in 1..=4 {
            match at_clock(clock) {
                Action::Reproduce { direction, genome } => {
                    assert_eq!(direction.index(), clock);
                    let view = GenomeView::decode(genome);
                    assert_eq!(view.generation, 0);
                    assert_eq!(view.initial_direction, clock);
                    assert_eq!(view.origin_clock, clock);
                }
                other => panic!("clock {}: expected reproduce, got {:?}", clock, other),
            }
        }
    }

    #[test]
    fn test_releases_forager_north() {
        match at_clock(6) {
            Action::Reproduce { direction, genome } => {
                assert_eq!(direction, Direction::North);
                let view = GenomeView::decode(genome);
                assert_eq!(view.generation, 1);
                assert_eq!(view.vertical_dist_from_origin, 1);
                assert_eq!(view.horizontal_dist_from_origin, 0);
            }
            other => panic!("expected reproduce, got {:?}", other),
        }
    }

    #[test]
    fn test_idle_ticks() {
        for clock in [0, 5, 7, 18] {
            assert_eq!(at_clock(clock), Action::Stay);
        }
    }
}
