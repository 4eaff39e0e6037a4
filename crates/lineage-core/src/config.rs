//! Configuration types for the player.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Read-only view of the game's economic constants.
///
/// The engine owns these values; the player only queries them.
pub trait GameEconomy {
    /// Energy spent moving one cell
    fn move_cost(&self) -> f64;
    /// Energy spent reproducing
    fn reproduce_cost(&self) -> f64;
    /// Energy spent staying in place for a tick
    fn stay_cost(&self) -> f64;
    /// Energy gained from one unit of food
    fn food_utility(&self) -> f64;

    /// Spread between the cheapest and dearest move cost the game allows
    fn move_cost_range(&self) -> f64 {
        18.0
    }

    /// Spread between the smallest and largest food utility the game allows
    fn food_utility_range(&self) -> f64 {
        490.0
    }

    /// How far a full energy bias may discount the stay cost
    fn stay_cost_span(&self) -> f64 {
        1.0
    }
}

/// Economic constants plus the ranges the game may draw them from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Cost to move one cell (v)
    pub move_cost: f64,
    /// Cost to reproduce
    pub reproduce_cost: f64,
    /// Cost to stay put (s)
    pub stay_cost: f64,
    /// Energy per unit of food (u)
    pub food_utility: f64,
    /// Smallest move cost the game allows
    pub move_cost_min: f64,
    /// Largest move cost the game allows
    pub move_cost_max: f64,
    /// Smallest food utility the game allows
    pub food_utility_min: f64,
    /// Largest food utility the game allows
    pub food_utility_max: f64,
    /// How far the stay cost may be discounted by a full energy bias
    pub stay_cost_span: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            move_cost: 2.0,
            reproduce_cost: 2.0,
            stay_cost: 1.0,
            food_utility: 20.0,
            move_cost_min: 2.0,
            move_cost_max: 20.0,
            food_utility_min: 10.0,
            food_utility_max: 500.0,
            stay_cost_span: 1.0,
        }
    }
}

impl GameEconomy for EconomyConfig {
    fn move_cost(&self) -> f64 {
        self.move_cost
    }

    fn reproduce_cost(&self) -> f64 {
        self.reproduce_cost
    }

    fn stay_cost(&self) -> f64 {
        self.stay_cost
    }

    fn food_utility(&self) -> f64 {
        self.food_utility
    }

    fn move_cost_range(&self) -> f64 {
        self.move_cost_max - self.move_cost_min
    }

    fn food_utility_range(&self) -> f64 {
        self.food_utility_max - self.food_utility_min
    }

    fn stay_cost_span(&self) -> f64 {
        self.stay_cost_span
    }
}

/// Behavioural thresholds of the player
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Energy at which a forager always reproduces
    pub reproduction_energy: i32,
    /// Energy tiers used to pick utility biases
    pub high_energy_threshold: i32,
    pub medium_energy_threshold: i32,
    pub low_energy_threshold: i32,
    /// Foodless ticks before a forager considers a drought reproduction
    pub steps_without_food_threshold: u32,
    /// Drought reproductions allowed per forager
    pub max_drought_reproductions: u32,
    /// Penalty for staying put while energy is above the high tier
    pub high_energy_stay_penalty: f64,
    /// Origin clock stops advancing here
    pub origin_clock_cap: u32,
    /// Origin clock ticks per unit of wall growth
    pub growth_divisor: u32,
    /// Divisor turning a bias in [0, 10] into a scaling factor
    pub bias_scale: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            reproduction_energy: 490,
            high_energy_threshold: 300,
            medium_energy_threshold: 150,
            low_energy_threshold: 75,
            steps_without_food_threshold: 5,
            max_drought_reproductions: 1,
            high_energy_stay_penalty: 50.0,
            origin_clock_cap: 18,
            growth_divisor: 5,
            bias_scale: 30.0,
        }
    }
}

/// Everything a player run needs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineageConfig {
    #[serde(default)]
    pub economy: EconomyConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    /// Random seed for reproducible direction choices
    #[serde(default)]
    pub seed: u64,
}

impl LineageConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a JSON configuration file; absent fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
