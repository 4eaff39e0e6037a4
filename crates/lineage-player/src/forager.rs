//! Foragers roam for food, evaluating a fixed ladder of rules each tick.

use crate::role::ForagerState;
use crate::utility::best_move;
use lineage_core::{Action, Direction, Error, GameEconomy, PlayerConfig, Result, Sensors};
use lineage_genome::{Caste, OriginTracker};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

/// First matching rule wins:
/// 1. reproduce when energy reaches the reproduction threshold
/// 2. eat food on the current cell
/// 3. step onto a random adjacent food cell
/// 4. after a drought, reproduce once (later droughts only reset the counter)
/// 5. follow the parent's one-shot order
/// 6. take the best move of the utility model
pub fn decide<E, R>(
    state: &mut ForagerState,
    tracker: &OriginTracker,
    sensors: &Sensors,
    economy: &E,
    config: &PlayerConfig,
    rng: &mut R,
) -> Result<Action>
where
    E: GameEconomy + ?Sized,
    R: Rng,
{
    if sensors.energy >= config.reproduction_energy {
        return controlled_reproduction(tracker, rng);
    }

    if sensors.food_here > 0 {
        state.steps_without_food = 0;
        return Ok(Action::Stay);
    }

    let food_directions = sensors.food_directions();
    if !food_directions.is_empty() {
        let direction = food_directions
            .choose(rng)
            .copied()
            .ok_or_else(|| Error::InvalidState("no adjacent food to move towards".to_string()))?;
        return Ok(Action::movement(direction));
    }

    if state.steps_without_food >= config.steps_without_food_threshold {
        if state.drought_reproductions < config.max_drought_reproductions {
            state.drought_reproductions += 1;
            debug!(
                steps_without_food = state.steps_without_food,
                "Drought reproduction"
            );
            return controlled_reproduction(tracker, rng);
        }
        // allotment spent: reset and keep evaluating this tick
        state.steps_without_food = 0;
    }

    if let Some(order) = state.pending_order.take() {
        trace!(%order, "Following inherited order");
        return Ok(order);
    }

    state.steps_without_food += 1;
    best_move(economy, sensors.energy, config)
}

/// Reproduce in a uniformly random direction; the child inherits that
/// direction as its first move.
fn controlled_reproduction<R: Rng>(tracker: &OriginTracker, rng: &mut R) -> Result<Action> {
    let direction = Direction::from_index(rng.gen_range(1..=4))?;
    Ok(Action::reproduce(
        direction,
        tracker.child_genome(Caste::Forager, direction, direction),
    ))
}
