//! Biased cost/benefit model used by foragers when nothing more urgent applies.
//!
//! Energy picks three weights in [0, 10] (food, energy, reproduction). The
//! weights shift the game's economic constants, and every candidate action is
//! scored as gain minus cost under the shifted constants.

use lineage_core::{Action, Direction, Error, GameEconomy, Occupant, PlayerConfig, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Weighting applied to the economy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biases {
    pub food: f64,
    pub energy: f64,
    pub reproduction: f64,
}

impl Biases {
    pub const MAX: f64 = 10.0;

    pub fn new(food: f64, energy: f64, reproduction: f64) -> Self {
        Self {
            food,
            energy,
            reproduction,
        }
    }

    /// Richer organisms favour cheap reproduction, poorer ones favour food
    /// and conserving energy.
    pub fn for_energy(energy: i32, config: &PlayerConfig) -> Self {
        if energy >= config.high_energy_threshold {
            Self::new(2.5, 5.0, 10.0)
        } else if energy >= config.medium_energy_threshold {
            Self::new(5.0, 10.0, 7.5)
        } else if energy >= config.low_energy_threshold {
            Self::new(7.5, 10.0, 2.5)
        } else {
            Self::new(10.0, 10.0, 1.0)
        }
    }

    pub fn validate(&self) -> Result<()> {
        let range = 0.0..=Self::MAX;
        if [self.food, self.energy, self.reproduction]
            .iter()
            .all(|bias| range.contains(bias))
        {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "biases must be between 0 and {}, got {:?}",
                Self::MAX,
                self
            )))
        }
    }
}

/// Economic constants after biasing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostOverride {
    /// v1
    pub move_cost: f64,
    /// v2
    pub reproduce_cost: f64,
    /// s
    pub stay_cost: f64,
    /// u
    pub food_utility: f64,
}

impl CostOverride {
    pub fn unbiased<E: GameEconomy + ?Sized>(economy: &E) -> Self {
        Self {
            move_cost: economy.move_cost(),
            reproduce_cost: economy.reproduce_cost(),
            stay_cost: economy.stay_cost(),
            food_utility: economy.food_utility(),
        }
    }
}

/// Shift the economy by `biases`, each scaled against `config.bias_scale`.
///
/// Move cost is never shifted.
pub fn apply_bias<E: GameEconomy + ?Sized>(
    economy: &E,
    biases: &Biases,
    config: &PlayerConfig,
) -> Result<CostOverride> {
    biases.validate()?;

    let food_share = biases.food / config.bias_scale;
    let energy_share = biases.energy / config.bias_scale;
    let reproduction_share = biases.reproduction / config.bias_scale;

    Ok(CostOverride {
        move_cost: economy.move_cost(),
        reproduce_cost: economy.reproduce_cost() - economy.move_cost_range() * reproduction_share,
        stay_cost: economy.stay_cost() - economy.stay_cost_span() * energy_share,
        food_utility: economy.food_utility() + economy.food_utility_range() * food_share,
    })
}

/// The kind of action being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub moving: bool,
    pub occupant: Occupant,
    pub reproduce: bool,
}

impl Candidate {
    pub fn stay(occupant: Occupant) -> Self {
        Self {
            moving: false,
            occupant,
            reproduce: false,
        }
    }

    pub fn step(occupant: Occupant) -> Self {
        Self {
            moving: true,
            occupant,
            reproduce: false,
        }
    }

    pub fn reproduce() -> Self {
        Self {
            moving: false,
            occupant: Occupant::Empty,
            reproduce: true,
        }
    }
}

/// Gain minus cost of `candidate`.
///
/// Reproducing while moving, or staying on or reproducing into another
/// organism, is rejected. Moving onto another organism is allowed but costs
/// the unbiased move cost.
pub fn net_benefit<E: GameEconomy + ?Sized>(
    economy: &E,
    candidate: Candidate,
    costs: Option<&CostOverride>,
    energy: i32,
    config: &PlayerConfig,
) -> Result<f64> {
    let costs = costs
        .copied()
        .unwrap_or_else(|| CostOverride::unbiased(economy));

    if candidate.reproduce {
        if candidate.moving {
            return Err(Error::InvalidArgument(
                "conflicting values for reproduce and move".to_string(),
            ));
        }
        if candidate.occupant == Occupant::OtherOrganism {
            return Err(Error::InvalidArgument(
                "conflicting values for reproduce and occupant".to_string(),
            ));
        }
        return Ok(-costs.reproduce_cost);
    }

    if !candidate.moving {
        let penalty = if energy > config.high_energy_threshold {
            config.high_energy_stay_penalty
        } else {
            0.0
        };

        return match candidate.occupant {
            Occupant::Food => Ok(costs.food_utility - costs.stay_cost - penalty),
            Occupant::Empty => Ok(-costs.stay_cost - penalty),
            Occupant::OtherOrganism => Err(Error::InvalidArgument(
                "conflicting values for move and occupant".to_string(),
            )),
        };
    }

    match candidate.occupant {
        Occupant::Food => Ok(costs.food_utility - costs.move_cost),
        Occupant::Empty => Ok(-costs.move_cost),
        Occupant::OtherOrganism => {
            warn!("Move onto another organism has poor efficiency, consider staying");
            Ok(-economy.move_cost())
        }
    }
}

/// Actions ranked by [`best_move`], in tie-breaking order
pub const CANDIDATE_ACTIONS: [Action; 5] = [
    Action::Stay,
    Action::Move {
        direction: Direction::West,
    },
    Action::Move {
        direction: Direction::East,
    },
    Action::Move {
        direction: Direction::North,
    },
    Action::Move {
        direction: Direction::South,
    },
];

/// Highest scoring of [`CANDIDATE_ACTIONS`] under the biases for `energy`.
///
/// Each candidate is scored against an empty target; ties keep the
/// earliest candidate.
pub fn best_move<E: GameEconomy + ?Sized>(
    economy: &E,
    energy: i32,
    config: &PlayerConfig,
) -> Result<Action> {
    let costs = apply_bias(economy, &Biases::for_energy(energy, config), config)?;

    let mut best_action = Action::Stay;
    let mut max_benefit = f64::NEG_INFINITY;

    for action in CANDIDATE_ACTIONS {
        let candidate = match action.step() {
            Some(_) => Candidate::step(Occupant::Empty),
            None => Candidate::stay(Occupant::Empty),
        };

        let benefit = net_benefit(economy, candidate, Some(&costs), energy, config)?;
        if benefit > max_benefit {
            max_benefit = benefit;
            best_action = action;
        }
    }

    debug!(action = %best_action, benefit = max_benefit, "Action chosen based on net benefit");
    Ok(best_action)
}
