//! Feed a scripted series of sensor snapshots through one organism.

use anyhow::{Context, Result};
use lineage_core::{Action, LineageConfig, Sensors};
use lineage_player::{Inheritance, Player};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// What the organism did on one tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: usize,
    pub role: String,
    pub action: Action,
    pub horizontal: i32,
    pub vertical: i32,
    pub origin_clock: u32,
}

pub fn load_trace(path: &Path) -> Result<Vec<Sensors>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading trace {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing trace {}", path.display()))
}

pub fn load_config(path: Option<&Path>) -> Result<LineageConfig> {
    match path {
        Some(path) => LineageConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(LineageConfig::default()),
    }
}

pub fn replay(
    trace: &[Sensors],
    inheritance: Inheritance,
    config: &LineageConfig,
) -> Result<Vec<TickRecord>> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut player = Player::register(inheritance, config.player.clone())?;
    info!(
        role = player.role_name(),
        ticks = trace.len(),
        seed = config.seed,
        "Starting replay"
    );

    let mut records = Vec::with_capacity(trace.len());
    for (tick, sensors) in trace.iter().enumerate() {
        let action = player
            .decide(sensors, &config.economy, &mut rng)
            .with_context(|| format!("tick {}", tick))?;
        let tracker = player.tracker();

        records.push(TickRecord {
            tick,
            role: player.role_name().to_string(),
            action,
            horizontal: tracker.horizontal,
            vertical: tracker.vertical,
            origin_clock: tracker.origin_clock,
        });
    }

    Ok(records)
}
