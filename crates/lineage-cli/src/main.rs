//! Operator tooling for the lineage player.

mod telemetry;
mod replay;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lineage_core::{Genome, LineageConfig};
use lineage_genome::GenomeView;
use lineage_player::Inheritance;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "lineage", version, about = "Inspect genomes and replay lineage organisms")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, env = "LINEAGE_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a raw genome into its regions.
    Decode {
        /// Genome as a signed or unsigned 32-bit integer (-1 is the first organism).
        #[arg(allow_hyphen_values = true)]
        genome: i64,
    },
    /// Print the default configuration as JSON.
    Config,
    /// Run one organism over a JSON array of sensor snapshots.
    Replay {
        /// Path to the trace file.
        trace: PathBuf,
        /// Optional configuration file (JSON).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Inherited genome; -1 starts from the first organism.
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        inheritance: i64,
        /// Override the configured random seed.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_telemetry(cli.log_json)?;

    match cli.command {
        Command::Decode { genome } => {
            match inheritance_from_arg(genome)? {
                Inheritance::First => println!("{}", serde_json::json!({ "first": true })),
                Inheritance::Genome(genome) => {
                    println!("{}", serde_json::to_string_pretty(&GenomeView::decode(genome))?)
                }
            }
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&LineageConfig::default())?);
        }
        Command::Replay {
            trace,
            config,
            inheritance,
            seed,
        } => {
            let mut config = replay::load_config(config.as_deref())?;
            if let Some(seed) = seed {
                config.seed = seed;
            }
            let sensors = replay::load_trace(&trace)?;
            let records = replay::replay(&sensors, inheritance_from_arg(inheritance)?, &config)?;

            for record in &records {
                println!("{}", serde_json::to_string(record)?);
            }
            info!(ticks = records.len(), "Replay complete");
        }
    }

    Ok(())
}

/// Accept both the engine's signed view and the unsigned bit pattern
fn inheritance_from_arg(raw: i64) -> Result<Inheritance> {
    if raw == i64::from(Inheritance::FIRST_SENTINEL) {
        return Ok(Inheritance::First);
    }
    let word = u32::try_from(raw)
        .or_else(|_| i32::try_from(raw).map(|signed| signed as u32))
        .with_context(|| format!("{} does not fit in 32 bits", raw))?;
    Ok(Inheritance::Genome(Genome(word)))
}
