//! Decision engine for lineage organisms.
//!
//! Every organism plays exactly one role for its whole life, fixed when it
//! is registered from its parent's genome:
//! - Ancestor: the first organism, which seeds the other two lineages
//! - Wall builder: extends a barrier away from the origin
//! - Forager: hunts food, steered by a biased cost/benefit model

pub mod role;
pub mod ancestor;
pub mod wall;
pub mod forager;
pub mod utility;
pub mod player;

pub use role::{ForagerState, Inheritance, Role};
pub use utility::{apply_bias, best_move, net_benefit, Biases, Candidate, CostOverride};
pub use player::Player;
