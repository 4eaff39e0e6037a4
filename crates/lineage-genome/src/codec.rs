//! Fixed-width bit-field codec for genomes.
//!
//! Regions are laid out from the most significant bit downward, six bits
//! each. Five regions use bits 31..2; the two lowest bits are reserved and
//! never written.

use lineage_core::{Error, Genome, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width in bits of every region
pub const FIELD_WIDTH: u32 = 6;

const FIELD_MASK: u32 = (1 << FIELD_WIDTH) - 1;

/// A named region of the genome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Generation,
    HorizontalDistFromOrigin,
    VerticalDistFromOrigin,
    InitialDirection,
    OriginClock,
}

impl Region {
    pub fn all() -> [Region; 5] {
        [
            Region::Generation,
            Region::HorizontalDistFromOrigin,
            Region::VerticalDistFromOrigin,
            Region::InitialDirection,
            Region::OriginClock,
        ]
    }

    /// Bit positions as a half-open slice counted from the most significant bit
    pub fn slice(self) -> (u32, u32) {
        match self {
            Region::Generation => (0, 6),
            Region::HorizontalDistFromOrigin => (6, 12),
            Region::VerticalDistFromOrigin => (12, 18),
            Region::InitialDirection => (18, 24),
            Region::OriginClock => (24, 30),
        }
    }

    fn shift(self) -> u32 {
        32 - self.slice().1
    }

    fn mask(self) -> u32 {
        FIELD_MASK << self.shift()
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Generation => "generation",
            Region::HorizontalDistFromOrigin => "horizontal_dist_from_origin",
            Region::VerticalDistFromOrigin => "vertical_dist_from_origin",
            Region::InitialDirection => "initial_direction",
            Region::OriginClock => "origin_clock",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Region::all()
            .into_iter()
            .find(|region| region.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("region '{}' not recognised", s)))
    }
}

/// Value stored in `region` of `source`
pub fn extract(source: u32, region: Region) -> u32 {
    (source & region.mask()) >> region.shift()
}

/// `target` with `region` replaced by the low six bits of `value`.
///
/// Higher bits of `value` are discarded, not clamped.
pub fn store(target: u32, region: Region, value: u32) -> u32 {
    (target & !region.mask()) | ((value & FIELD_MASK) << region.shift())
}

pub fn read(genome: Genome, region: Region) -> u32 {
    extract(genome.raw(), region)
}

pub fn write(genome: Genome, region: Region, value: u32) -> Genome {
    Genome(store(genome.raw(), region, value))
}
