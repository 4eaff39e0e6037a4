//! Core type definitions for the player.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cardinal direction an organism can move or reproduce in.
///
/// The numeric index is the one the simulation uses on the wire, with 0
/// reserved for staying in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn index(self) -> u32 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 3,
            Direction::West => 4,
        }
    }

    pub fn from_index(index: u32) -> Result<Self> {
        match index {
            1 => Ok(Direction::North),
            2 => Ok(Direction::East),
            3 => Ok(Direction::South),
            4 => Ok(Direction::West),
            other => Err(Error::InvalidArgument(format!(
                "direction index {} not recognised",
                other
            ))),
        }
    }

    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
    }

    /// Quarter turn clockwise
    pub fn clockwise(self) -> Self {
        match self {
            Direction::West => Direction::North,
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        self.turn(3)
    }

    /// Apply `quarter_turns` clockwise quarter turns
    pub fn turn(self, quarter_turns: u32) -> Self {
        (0..quarter_turns % 4).fold(self, |dir, _| dir.clockwise())
    }

    /// (horizontal, vertical) step; north and east are positive
    pub fn to_delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        };
        f.write_str(name)
    }
}

/// Packed 32-bit inheritance word handed from parent to child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genome(pub u32);

impl Genome {
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for Genome {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032b}", self.0)
    }
}

/// The single decision an organism returns for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Stay,
    Move { direction: Direction },
    Reproduce { direction: Direction, genome: Genome },
}

impl Action {
    pub fn movement(direction: Direction) -> Self {
        Action::Move { direction }
    }

    pub fn reproduce(direction: Direction, genome: Genome) -> Self {
        Action::Reproduce { direction, genome }
    }

    /// Direction the organism itself relocates in, if any
    pub fn step(&self) -> Option<Direction> {
        match self {
            Action::Move { direction } => Some(*direction),
            Action::Stay | Action::Reproduce { .. } => None,
        }
    }

    pub fn is_reproduce(&self) -> bool {
        matches!(self, Action::Reproduce { .. })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Stay => f.write_str("STAY_PUT"),
            Action::Move { direction } => write!(f, "{}", direction),
            Action::Reproduce { direction, genome } => {
                write!(f, "REPRODUCE {} [{}]", direction, genome)
            }
        }
    }
}

/// Occupant code reported by the engine for an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeighborCode(pub i32);

impl NeighborCode {
    pub const EMPTY: NeighborCode = NeighborCode(-1);

    /// Wall neighbour as reported on the north side
    pub const NORTH_WALL: NeighborCode = NeighborCode(4353);
    /// Wall neighbour as reported on the east, south and west sides
    pub const SIDE_WALL: NeighborCode = NeighborCode(4553);

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Code the engine reports for a wall segment seen on `side`
    pub fn wall_segment(side: Direction) -> NeighborCode {
        match side {
            Direction::North => Self::NORTH_WALL,
            Direction::East | Direction::South | Direction::West => Self::SIDE_WALL,
        }
    }

    /// Whether this code, read on `side`, marks a wall segment
    pub fn is_wall_segment_on(self, side: Direction) -> bool {
        self == Self::wall_segment(side)
    }
}

impl Default for NeighborCode {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// What a candidate action would land the organism on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Empty,
    OtherOrganism,
    Food,
}

/// One value per adjacent cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cardinal<T> {
    pub north: T,
    pub east: T,
    pub south: T,
    pub west: T,
}

impl<T> Cardinal<T> {
    pub fn new(north: T, east: T, south: T, west: T) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    pub fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }

    /// Iterate north, east, south, west
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> + '_ {
        Direction::all().into_iter().map(move |dir| (dir, self.get(dir)))
    }
}

/// Local sensory snapshot supplied by the engine each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensors {
    /// Food units on the current cell
    pub food_here: i32,
    /// Remaining energy
    pub energy: i32,
    /// Whether each adjacent cell holds food
    #[serde(default)]
    pub food: Cardinal<bool>,
    /// Occupant code of each adjacent cell
    #[serde(default)]
    pub neighbors: Cardinal<NeighborCode>,
}

impl Sensors {
    pub fn new(food_here: i32, energy: i32) -> Self {
        Self {
            food_here,
            energy,
            ..Default::default()
        }
    }

    pub fn with_food(mut self, food: Cardinal<bool>) -> Self {
        self.food = food;
        self
    }

    pub fn with_neighbors(mut self, neighbors: Cardinal<NeighborCode>) -> Self {
        self.neighbors = neighbors;
        self
    }

    /// Adjacent directions that currently hold food
    pub fn food_directions(&self) -> Vec<Direction> {
        self.food
            .iter()
            .filter(|(_, has_food)| **has_food)
            .map(|(dir, _)| dir)
            .collect()
    }
}
