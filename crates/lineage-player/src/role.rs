//! Roles and how they are derived from an inherited genome.

use lineage_core::{Action, Direction, Genome, Result};
use lineage_genome::{read, Caste, OriginTracker, Region};
use serde::{Deserialize, Serialize};

/// What an organism is handed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inheritance {
    /// First organism of the simulation, no parent
    First,
    Genome(Genome),
}

impl Inheritance {
    /// Raw value the engine uses for an organism without a parent
    pub const FIRST_SENTINEL: i32 = -1;

    pub fn from_raw(raw: i32) -> Self {
        if raw == Self::FIRST_SENTINEL {
            Inheritance::First
        } else {
            Inheritance::Genome(Genome(raw as u32))
        }
    }
}

/// Per-forager counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForagerState {
    /// Ticks spent without eating
    pub steps_without_food: u32,
    /// Drought reproductions already performed
    pub drought_reproductions: u32,
    /// One-shot movement ordered by the parent
    pub pending_order: Option<Action>,
}

impl ForagerState {
    /// Order carried by the whole inherited word: 0 is none, 1..=4 a direction,
    /// anything else still consumes one tick standing still.
    pub fn from_order(order: u32) -> Self {
        let pending_order = match order {
            0 => None,
            code => Some(
                Direction::from_index(code)
                    .map(Action::movement)
                    .unwrap_or(Action::Stay),
            ),
        };

        Self {
            pending_order,
            ..Default::default()
        }
    }
}

/// Behaviour an organism follows for its whole life
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Ancestor,
    WallBuilder { preferred: Direction },
    Forager(ForagerState),
}

impl Role {
    /// Decode the role and starting position carried by `inheritance`
    pub fn from_inheritance(inheritance: Inheritance) -> Result<(Role, OriginTracker)> {
        let genome = match inheritance {
            Inheritance::First => return Ok((Role::Ancestor, OriginTracker::default())),
            Inheritance::Genome(genome) => genome,
        };

        let tracker = OriginTracker::from_genome(genome);
        match Caste::from_generation(read(genome, Region::Generation))? {
            Caste::WallBuilder => {
                let preferred = Direction::from_index(read(genome, Region::InitialDirection))?;
                let tracker = tracker.with_clock(read(genome, Region::OriginClock));
                Ok((Role::WallBuilder { preferred }, tracker))
            }
            Caste::Forager => {
                // only displacement is decoded from the regions
                let state = ForagerState::from_order(genome.raw());
                Ok((Role::Forager(state), tracker))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Ancestor => "ancestor",
            Role::WallBuilder { .. } => "wall_builder",
            Role::Forager(_) => "forager",
        }
    }
}
