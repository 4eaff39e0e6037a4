//! A live organism: its role, where it is, and the per-tick entry point.

use crate::role::{Inheritance, Role};
use crate::{ancestor, forager, wall};
use lineage_core::{Action, GameEconomy, PlayerConfig, Result, Sensors};
use lineage_genome::OriginTracker;
use rand::Rng;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct Player {
    role: Role,
    tracker: OriginTracker,
    config: PlayerConfig,
}

impl Player {
    /// Create an organism from what its parent handed down
    pub fn register(inheritance: Inheritance, config: PlayerConfig) -> Result<Self> {
        let (role, tracker) = Role::from_inheritance(inheritance)?;
        debug!(
            role = role.name(),
            horizontal = tracker.horizontal,
            vertical = tracker.vertical,
            origin_clock = tracker.origin_clock,
            "Organism registered"
        );

        Ok(Self {
            role,
            tracker,
            config,
        })
    }

    /// Choose this tick's action.
    ///
    /// The growth threshold is read before the origin clock advances; the
    /// chosen action is applied to the displacement before returning.
    #[instrument(level = "debug", skip(self, sensors, economy, rng), fields(role = self.role.name()))]
    pub fn decide<E, R>(&mut self, sensors: &Sensors, economy: &E, rng: &mut R) -> Result<Action>
    where
        E: GameEconomy + ?Sized,
        R: Rng,
    {
        let threshold = self.tracker.growth_threshold(self.config.growth_divisor);
        self.tracker.advance_clock(self.config.origin_clock_cap);

        let action = match &mut self.role {
            Role::Ancestor => ancestor::decide(&self.tracker)?,
            Role::WallBuilder { preferred } => {
                wall::decide(*preferred, &self.tracker, threshold, &sensors.neighbors)
            }
            Role::Forager(state) => {
                forager::decide(state, &self.tracker, sensors, economy, &self.config, rng)?
            }
        };

        self.tracker.apply(&action);
        debug!(
            %action,
            origin_clock = self.tracker.origin_clock,
            energy = sensors.energy,
            "Action decided"
        );
        Ok(action)
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn role_name(&self) -> &'static str {
        self.role.name()
    }

    pub fn tracker(&self) -> &OriginTracker {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_core::{Cardinal, Direction, EconomyConfig, NeighborCode};
    use lineage_genome::{Caste, GenomeView};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn wall_builder(tracker: OriginTracker, preferred: Direction) -> Player {
        // the child lands one step along `preferred` from `tracker`
        let genome = tracker.child_genome(Caste::WallBuilder, preferred, preferred);
        Player::register(Inheritance::Genome(genome), PlayerConfig::default()).unwrap()
    }

    #[test]
    fn test_ancestor_third_tick_seeds_south_wall() {
        let economy = EconomyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = Player::register(Inheritance::First, PlayerConfig::default()).unwrap();

        let actions: Vec<Action> = (0..3)
            .map(|_| player.decide(&Sensors::new(0, 100), &economy, &mut rng).unwrap())
            .collect();

        match actions[2] {
            Action::Reproduce { direction, genome } => {
                assert_eq!(direction, Direction::South);
                assert_eq!(direction.index(), 3);
                assert_eq!(GenomeView::decode(genome).generation, 0);
            }
            other => panic!("expected reproduce, got {:?}", other),
        }
        assert_eq!(player.tracker().origin_clock, 3);
        assert_eq!((player.tracker().horizontal, player.tracker().vertical), (0, 0));
    }

    #[test]
    fn test_ancestor_sixth_tick_releases_forager() {
        let economy = EconomyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = Player::register(Inheritance::First, PlayerConfig::default()).unwrap();

        let mut last = Action::Stay;
        for _ in 0..6 {
            last = player.decide(&Sensors::new(0, 100), &economy, &mut rng).unwrap();
        }

        match last {
            Action::Reproduce { direction, genome } => {
                assert_eq!(direction, Direction::North);
                assert_eq!(direction.index(), 1);
                assert_eq!(GenomeView::decode(genome).generation, 1);
            }
            other => panic!("expected reproduce, got {:?}", other),
        }
    }

    #[test]
    fn test_wall_builder_gap_at_clock_ten() {
        let economy = EconomyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // lands at horizontal 2, vertical 3 with clock 10, so threshold 2
        let mut player = wall_builder(OriginTracker::new(2, 2, 10), Direction::North);
        assert_eq!(player.tracker().vertical, 3);

        let action = player
            .decide(&Sensors::new(0, 100), &economy, &mut rng)
            .unwrap();
        assert!(matches!(
            action,
            Action::Reproduce {
                direction: Direction::East,
                ..
            }
        ));
        assert_eq!(player.tracker().origin_clock, 11);
    }

    #[test]
    fn test_wall_builder_walks_and_tracks_displacement() {
        let economy = EconomyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = wall_builder(OriginTracker::new(0, 0, 10), Direction::West);

        let action = player
            .decide(&Sensors::new(0, 100), &economy, &mut rng)
            .unwrap();
        assert_eq!(action, Action::movement(Direction::West));
        assert_eq!(player.tracker().horizontal, -2);
    }

    #[test]
    fn test_wall_builder_double_contact_holds() {
        let economy = EconomyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = wall_builder(OriginTracker::new(0, 2, 10), Direction::North);
        let sensors = Sensors::new(0, 100).with_neighbors(Cardinal::new(
            NeighborCode::EMPTY,
            NeighborCode(4553),
            NeighborCode::EMPTY,
            NeighborCode(4553),
        ));

        assert_eq!(
            player.decide(&sensors, &economy, &mut rng).unwrap(),
            Action::Stay
        );
    }

    #[test]
    fn test_forager_always_reproduces_at_high_energy() {
        let economy = EconomyConfig::default();
        let genome = OriginTracker::default().child_genome(
            Caste::Forager,
            Direction::North,
            Direction::North,
        );

        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut player =
                Player::register(Inheritance::Genome(genome), PlayerConfig::default()).unwrap();
            let sensors = Sensors::new(seed as i32, 500)
                .with_food(Cardinal::new(seed % 2 == 0, true, false, seed % 3 == 0));

            for _ in 0..5 {
                assert!(player.decide(&sensors, &economy, &mut rng).unwrap().is_reproduce());
            }
            assert_eq!(player.tracker().vertical, 1);
        }
    }

    #[test]
    fn test_released_forager_stays_on_first_tick() {
        let economy = EconomyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let genome = OriginTracker::default().child_genome(
            Caste::Forager,
            Direction::North,
            Direction::North,
        );
        let mut player =
            Player::register(Inheritance::Genome(genome), PlayerConfig::default()).unwrap();

        let action = player
            .decide(&Sensors::new(0, 100), &economy, &mut rng)
            .unwrap();
        assert_eq!(action, Action::Stay);
        assert_eq!(player.tracker().vertical, 1);
        match player.role() {
            Role::Forager(state) => {
                assert_eq!(state.pending_order, None);
                assert_eq!(state.steps_without_food, 0);
            }
            other => panic!("expected forager, got {:?}", other),
        }
    }

    #[test]
    fn test_forager_on_food_keeps_eating() {
        let economy = EconomyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let genome = OriginTracker::default().child_genome(
            Caste::Forager,
            Direction::North,
            Direction::North,
        );
        let mut player =
            Player::register(Inheritance::Genome(genome), PlayerConfig::default()).unwrap();

        for _ in 0..10 {
            let action = player
                .decide(&Sensors::new(4, 200), &economy, &mut rng)
                .unwrap();
            assert_eq!(action, Action::Stay);
            match player.role() {
                Role::Forager(state) => assert_eq!(state.steps_without_food, 0),
                other => panic!("expected forager, got {:?}", other),
            }
        }
    }
}
