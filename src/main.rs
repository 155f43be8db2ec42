//! Headless battle runner
//!
//! Runs one free-for-all battle over the fixed five-entrant roster and
//! writes the narration (or a JSON summary) to stdout. Supplying a seed
//! reproduces a battle exactly; without one a random seed is drawn and
//! echoed so any run can be replayed.

use arena_royale::battle::{narration, BattleOutcome, BattleState, Roster};
use arena_royale::core::error::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "arena-royale")]
#[command(about = "Run a randomized free-for-all battle to its conclusion")]
struct Args {
    /// Random seed for a reproducible battle
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct BattleReport {
    outcome: String,
    winner: Option<String>,
    remaining_hp: Option<u32>,
    rounds: u32,
    seed: u64,
}

fn main() -> Result<()> {
    // Tracing goes to stderr so the narration stream stays clean
    tracing_subscriber::fmt()
        .with_env_filter("arena_royale=info")
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    tracing::info!(seed, "battle starting");

    let roster = Roster::default_lineup(&mut rng);
    let mut state = BattleState::new(roster);
    let outcome = state.run_to_completion(&mut rng);

    tracing::info!(rounds = state.round, "battle over");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.format.as_str() {
        "json" => {
            let report = battle_report(&outcome, state.round, seed);
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        "text" => {
            narration::write_battle_log(&mut out, &state.battle_log.events)?;
            writeln!(out, "Seed: {}", seed)?;
        }
        other => {
            eprintln!("Unknown format '{}', defaulting to text", other);
            narration::write_battle_log(&mut out, &state.battle_log.events)?;
            writeln!(out, "Seed: {}", seed)?;
        }
    }

    Ok(())
}

fn battle_report(outcome: &BattleOutcome, rounds: u32, seed: u64) -> BattleReport {
    match outcome {
        BattleOutcome::Winner {
            name, remaining_hp, ..
        } => BattleReport {
            outcome: "winner".to_string(),
            winner: Some(name.clone()),
            remaining_hp: Some(*remaining_hp),
            rounds,
            seed,
        },
        BattleOutcome::Draw => BattleReport {
            outcome: "draw".to_string(),
            winner: None,
            remaining_hp: None,
            rounds,
            seed,
        },
    }
}
