//! Wall builders grow a barrier outward from the lineage origin.
//!
//! A builder walks along its preferred direction while it is within the
//! current growth threshold. At the growing edge it fills the gap beside it
//! by reproducing sideways, unless two wall neighbours already touch it.

use lineage_core::{Action, Cardinal, Direction, NeighborCode};
use lineage_genome::{exceeds_boundary, Caste, OriginTracker};
use tracing::{debug, trace};

pub fn decide(
    preferred: Direction,
    tracker: &OriginTracker,
    threshold: i32,
    neighbors: &Cardinal<NeighborCode>,
) -> Action {
    if !tracker.exceeds_boundary(threshold) {
        return Action::movement(preferred);
    }

    let edge = threshold + 1;
    if !tracker.exceeds_boundary(edge) {
        if double_contact(neighbors) {
            trace!("Gap already held by neighbouring wall segments");
            return Action::Stay;
        }

        for turn in [preferred.clockwise(), preferred.counter_clockwise()] {
            if viable(tracker, turn, neighbors, edge) {
                debug!(%preferred, %turn, threshold, "Filling wall gap");
                return Action::reproduce(
                    turn,
                    tracker.child_genome(Caste::WallBuilder, preferred, turn),
                );
            }
        }
    }

    Action::Stay
}

/// At least two adjacent cells report the wall code for their side
pub fn double_contact(neighbors: &Cardinal<NeighborCode>) -> bool {
    neighbors
        .iter()
        .filter(|(side, code)| code.is_wall_segment_on(*side))
        .count()
        > 1
}

/// A child born towards `proposed` stays inside `threshold` and lands on an empty cell
pub fn viable(
    tracker: &OriginTracker,
    proposed: Direction,
    neighbors: &Cardinal<NeighborCode>,
    threshold: i32,
) -> bool {
    let (horizontal, vertical) = tracker.project(proposed);
    !exceeds_boundary(threshold, vertical, horizontal) && neighbors.get(proposed).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Cardinal<NeighborCode> {
        Cardinal::default()
    }

    #[test]
    fn test_walks_inside_threshold() {
        let tracker = OriginTracker::new(0, 1, 10);
        assert_eq!(
            decide(Direction::North, &tracker, 2, &empty()),
            Action::movement(Direction::North)
        );
    }

    #[test]
    fn test_gap_prefers_clockwise() {
        let tracker = OriginTracker::new(2, 3, 10);
        match decide(Direction::North, &tracker, 2, &empty()) {
            Action::Reproduce { direction, genome } => {
                assert_eq!(direction, Direction::East);
                let child = OriginTracker::from_genome(genome);
                assert_eq!((child.horizontal, child.vertical), (3, 3));
            }
            other => panic!("expected reproduce, got {:?}", other),
        }
    }

    #[test]
    fn test_gap_falls_back_to_counter_clockwise() {
        let tracker = OriginTracker::new(0, 3, 10);
        let neighbors = Cardinal::new(
            NeighborCode::EMPTY,
            NeighborCode(17),
            NeighborCode::EMPTY,
            NeighborCode::EMPTY,
        );
        assert!(matches!(
            decide(Direction::North, &tracker, 2, &neighbors),
            Action::Reproduce {
                direction: Direction::West,
                ..
            }
        ));
    }

    #[test]
    fn test_gap_turn_must_stay_inside_edge() {
        // clockwise of North is East, which would reach horizontal 4 > 3
        let tracker = OriginTracker::new(3, 3, 10);
        assert!(matches!(
            decide(Direction::North, &tracker, 2, &empty()),
            Action::Reproduce {
                direction: Direction::West,
                ..
            }
        ));
    }

    #[test]
    fn test_double_contact_stays() {
        let tracker = OriginTracker::new(0, 3, 10);
        let neighbors = Cardinal::new(
            NeighborCode(4353),
            NeighborCode::EMPTY,
            NeighborCode(4553),
            NeighborCode::EMPTY,
        );
        assert!(double_contact(&neighbors));
        assert_eq!(
            decide(Direction::North, &tracker, 2, &neighbors),
            Action::Stay
        );
    }

    #[test]
    fn test_single_contact_still_fills() {
        let neighbors = Cardinal::new(
            NeighborCode(4553),
            NeighborCode::EMPTY,
            NeighborCode::EMPTY,
            NeighborCode::EMPTY,
        );
        assert!(!double_contact(&neighbors));
    }

    #[test]
    fn test_wall_codes_count_only_on_their_side() {
        // north reports 4353 and the other sides 4553, so these swapped codes are no contact
        let swapped = Cardinal::new(
            NeighborCode(4553),
            NeighborCode::EMPTY,
            NeighborCode(4353),
            NeighborCode::EMPTY,
        );
        assert!(!double_contact(&swapped));

        let tracker = OriginTracker::new(0, 3, 10);
        assert!(matches!(
            decide(Direction::North, &tracker, 2, &swapped),
            Action::Reproduce {
                direction: Direction::East,
                ..
            }
        ));

        let sides = Cardinal::new(
            NeighborCode::EMPTY,
            NeighborCode(4553),
            NeighborCode::EMPTY,
            NeighborCode(4553),
        );
        assert!(double_contact(&sides));
    }

    #[test]
    fn test_no_viable_turn_stays() {
        let tracker = OriginTracker::new(0, 3, 10);
        let occupied = NeighborCode(99);
        let neighbors = Cardinal::new(NeighborCode::EMPTY, occupied, NeighborCode::EMPTY, occupied);
        assert_eq!(
            decide(Direction::North, &tracker, 2, &neighbors),
            Action::Stay
        );
    }

    #[test]
    fn test_beyond_edge_stays() {
        let tracker = OriginTracker::new(0, 5, 10);
        assert_eq!(decide(Direction::North, &tracker, 2, &empty()), Action::Stay);
    }
}
