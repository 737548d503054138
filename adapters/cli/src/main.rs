#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs EXOBOUND campaigns headlessly.

mod config;
mod export;
mod session;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{ArgAction, Args, Parser, Subcommand};
use exobound_system_campaign_generation::{session_seed, CampaignGenerator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use crate::{config::ExperimentConfig, session::Policy};

/// Headless driver for the EXOBOUND fleet-allocation experiment.
#[derive(Debug, Parser)]
#[command(name = "exobound", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Generate a campaign and print it as JSON.
    Generate {
        #[command(flatten)]
        session: SessionArgs,
        /// Write the campaign to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Play a full session with a scripted participant and export the history.
    Simulate {
        #[command(flatten)]
        session: SessionArgs,
        /// Allocation strategy of the scripted participant.
        #[arg(long, value_enum, default_value = "balanced")]
        policy: Policy,
        /// Export the history to a .csv or .json file.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct SessionArgs {
    /// Seed for the session random source.
    #[arg(long, conflicts_with = "participant")]
    seed: Option<u64>,
    /// Participant identifier the session seed is derived from.
    #[arg(long)]
    participant: Option<String>,
    /// TOML experiment file with [campaign] and [scoring] tables.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl SessionArgs {
    fn resolve_seed(&self) -> u64 {
        let seed = match (&self.participant, self.seed) {
            (Some(participant), _) => session_seed(participant),
            (None, Some(seed)) => seed,
            (None, None) => rand::random(),
        };
        tracing::info!(seed, participant = ?self.participant, "session seed resolved");
        seed
    }
}

/// Entry point for the EXOBOUND command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        CliCommand::Generate { session: args, out } => {
            let config = ExperimentConfig::load(args.config.as_deref())?;
            let mut rng = ChaCha8Rng::seed_from_u64(args.resolve_seed());
            let trials = CampaignGenerator::new(config.campaign).generate(&mut rng)?;
            let json =
                serde_json::to_string_pretty(&trials).context("failed to serialise campaign")?;
            match out {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("failed to write campaign to {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        CliCommand::Simulate {
            session: args,
            policy,
            out,
        } => {
            let config = ExperimentConfig::load(args.config.as_deref())?;
            let mut rng = ChaCha8Rng::seed_from_u64(args.resolve_seed());
            let report = session::run_session(&config, policy, &mut rng, Utc::now)?;
            if let Some(path) = out {
                export::export_to_path(&path, &report.rows)?;
            }
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialise report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let directive = match verbose {
        0 => "exobound=info",
        1 => "exobound=debug",
        _ => "exobound=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}
