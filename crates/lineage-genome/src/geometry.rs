//! Displacement from the lineage origin and child genome construction.

use crate::codec::{read, write, Region};
use lineage_core::{Action, Direction, Error, Genome, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Raw values above this are negative displacements
pub const SIGNED_BIAS: u32 = 20;

/// Signed displacement stored in an unsigned region.
///
/// 0..=20 are themselves, 21..=40 are -1..=-20. Anything larger still
/// decodes, just not to a meaningful distance.
pub fn interpret_signed(raw: u32) -> i32 {
    if raw > SIGNED_BIAS {
        ((raw - SIGNED_BIAS) as i32).wrapping_neg()
    } else {
        raw as i32
    }
}

/// Inverse of [`interpret_signed`] for |distance| <= 20
pub fn rebias_unsigned(distance: i32) -> u32 {
    if distance < 0 {
        SIGNED_BIAS + distance.unsigned_abs()
    } else {
        distance as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Displacement along `axis` after one step towards `direction`
pub fn project_delta(direction: Direction, current: i32, axis: Axis) -> i32 {
    let (dh, dv) = direction.to_delta();
    match axis {
        Axis::Horizontal => current + dh,
        Axis::Vertical => current + dv,
    }
}

/// True iff either axis is strictly further than `threshold` from the origin
pub fn exceeds_boundary(threshold: i32, vertical: i32, horizontal: i32) -> bool {
    vertical > threshold
        || vertical < -threshold
        || horizontal > threshold
        || horizontal < -threshold
}

/// Heritable role tag written into the generation region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Caste {
    WallBuilder,
    Forager,
}

impl Caste {
    pub fn generation(self) -> u32 {
        match self {
            Caste::WallBuilder => 0,
            Caste::Forager => 1,
        }
    }

    pub fn from_generation(generation: u32) -> Result<Self> {
        match generation {
            0 => Ok(Caste::WallBuilder),
            1 => Ok(Caste::Forager),
            other => Err(Error::InvalidArgument(format!(
                "generation {} not recognised",
                other
            ))),
        }
    }
}

/// Where an organism is relative to its lineage origin, and how long
/// the lineage has existed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginTracker {
    pub horizontal: i32,
    pub vertical: i32,
    pub origin_clock: u32,
}

impl OriginTracker {
    pub fn new(horizontal: i32, vertical: i32, origin_clock: u32) -> Self {
        Self {
            horizontal,
            vertical,
            origin_clock,
        }
    }

    /// Displacement stored in `genome`; the clock starts at zero
    pub fn from_genome(genome: Genome) -> Self {
        Self {
            horizontal: interpret_signed(read(genome, Region::HorizontalDistFromOrigin)),
            vertical: interpret_signed(read(genome, Region::VerticalDistFromOrigin)),
            origin_clock: 0,
        }
    }

    pub fn with_clock(mut self, origin_clock: u32) -> Self {
        self.origin_clock = origin_clock;
        self
    }

    /// (horizontal, vertical) after one step towards `direction`
    pub fn project(&self, direction: Direction) -> (i32, i32) {
        (
            project_delta(direction, self.horizontal, Axis::Horizontal),
            project_delta(direction, self.vertical, Axis::Vertical),
        )
    }

    /// Record the action actually taken this tick
    pub fn apply(&mut self, action: &Action) {
        if let Some(direction) = action.step() {
            let (horizontal, vertical) = self.project(direction);
            self.horizontal = horizontal;
            self.vertical = vertical;
            trace!(
                horizontal = self.horizontal,
                vertical = self.vertical,
                "Displacement updated"
            );
        }
    }

    pub fn exceeds_boundary(&self, threshold: i32) -> bool {
        exceeds_boundary(threshold, self.vertical, self.horizontal)
    }

    /// Advance the clock by one tick unless it has reached `cap`
    pub fn advance_clock(&mut self, cap: u32) {
        if self.origin_clock < cap {
            self.origin_clock += 1;
        }
    }

    /// How far from the origin the wall may currently reach
    pub fn growth_threshold(&self, divisor: u32) -> i32 {
        self.origin_clock.checked_div(divisor).unwrap_or(0) as i32
    }

    /// Genome for a child born one step towards `birth`
    pub fn child_genome(&self, caste: Caste, preferred: Direction, birth: Direction) -> Genome {
        let (horizontal, vertical) = self.project(birth);

        let mut genome = Genome::default();
        genome = write(genome, Region::Generation, caste.generation());
        genome = write(
            genome,
            Region::HorizontalDistFromOrigin,
            rebias_unsigned(horizontal),
        );
        genome = write(
            genome,
            Region::VerticalDistFromOrigin,
            rebias_unsigned(vertical),
        );
        genome = write(genome, Region::InitialDirection, preferred.index());
        write(genome, Region::OriginClock, self.origin_clock)
    }
}

/// Every region of a genome, decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeView {
    pub raw: u32,
    pub binary: String,
    pub generation: u32,
    pub horizontal_dist_from_origin: i32,
    pub vertical_dist_from_origin: i32,
    pub initial_direction: u32,
    pub origin_clock: u32,
}

impl GenomeView {
    pub fn decode(genome: Genome) -> Self {
        Self {
            raw: genome.raw(),
            binary: genome.to_string(),
            generation: read(genome, Region::Generation),
            horizontal_dist_from_origin: interpret_signed(read(
                genome,
                Region::HorizontalDistFromOrigin,
            )),
            vertical_dist_from_origin: interpret_signed(read(
                genome,
                Region::VerticalDistFromOrigin,
            )),
            initial_direction: read(genome, Region::InitialDirection),
            origin_clock: read(genome, Region::OriginClock),
        }
    }
}
