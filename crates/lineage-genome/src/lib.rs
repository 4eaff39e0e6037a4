//! Heredity for lineage organisms.
//!
//! A genome is a single 32-bit word split into fixed 6-bit regions. It is the
//! only state a parent can hand to its child, so this crate provides:
//! - The bit-field codec that reads and writes those regions
//! - The origin tracker that keeps an organism's signed displacement from
//!   its lineage's origin and packs it into a child's genome

pub mod codec;
pub mod geometry;

pub use codec::{extract, read, store, write, Region, FIELD_WIDTH};
pub use geometry::{
    exceeds_boundary, interpret_signed, project_delta, rebias_unsigned, Axis, Caste, GenomeView,
    OriginTracker,
};
