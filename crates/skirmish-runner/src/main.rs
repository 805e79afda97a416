//! Headless skirmish runner.
//!
//! Drives a training session with a seeded random policy and prints the
//! match counters as JSON. Useful for smoke-running the engine and for
//! eyeballing episode lengths under a given arena config.

use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use skirmish_core::config::ArenaConfig;
use skirmish_core::enums::EpisodeOutcome;
use skirmish_sim::decision::{AgentAction, ACTION_FIELDS};
use skirmish_sim::{MatchStats, TrainingSession};

/// Headless Skirmish Runner - random-policy episodes across many arenas
#[derive(Parser, Debug)]
#[command(name = "skirmish-runner")]
#[command(about = "Run random-policy skirmish episodes and report win counters")]
struct Args {
    /// Number of arenas simulated side by side
    #[arg(long, default_value_t = 4)]
    arenas: usize,

    /// Ticks to simulate in every arena
    #[arg(long, default_value_t = 3000)]
    ticks: u64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Arena config JSON (defaults are used for missing fields)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chance per decision that an agent attacks
    #[arg(long, default_value_t = 0.1)]
    attack_chance: f64,
}

#[derive(Serialize)]
struct RunReport {
    seed: u64,
    arenas: usize,
    ticks: u64,
    episodes: u64,
    draws: u64,
    stats: MatchStats,
}

fn main() -> skirmish_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skirmish=info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = match &args.config {
        Some(path) => ArenaConfig::from_json_file(path)?,
        None => ArenaConfig::default(),
    };
    let attack_chance = args.attack_chance.clamp(0.0, 1.0);

    info!(seed, arenas = args.arenas, ticks = args.ticks, "starting session");
    let mut session = TrainingSession::new(args.arenas, seed, config);
    session.reset_all();

    let mut policy = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);
    let mut episodes = 0;
    let mut draws = 0;

    for _ in 0..args.ticks {
        for (index, arena) in session.arenas_mut().iter_mut().enumerate() {
            let requests = arena.request_decisions();
            let actions: Vec<AgentAction> = requests
                .iter()
                .filter(|r| r.alive)
                .map(|r| AgentAction::new(r.agent, random_action(&mut policy, attack_chance)))
                .collect();

            let report = arena.tick(&actions)?;
            if let Some(summary) = report.episode {
                episodes += 1;
                if summary.outcome == EpisodeOutcome::Draw {
                    draws += 1;
                }
                info!(arena = index, tick = summary.tick, outcome = ?summary.outcome, "episode decided");
            }
            for event in arena.take_events() {
                debug!(arena = index, ?event);
            }
        }
    }

    let report = RunReport {
        seed,
        arenas: args.arenas,
        ticks: args.ticks,
        episodes,
        draws,
        stats: session.stats(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Uniform movement branches plus an attack with the given probability.
fn random_action(rng: &mut ChaCha8Rng, attack_chance: f64) -> Vec<f32> {
    let mut values: Vec<f32> = (0..ACTION_FIELDS - 1)
        .map(|_| rng.gen_range(0..3) as f32)
        .collect();
    values.push(if rng.gen_bool(attack_chance) { 1.0 } else { 0.0 });
    values
}
