//! Seeded skirmish
//!
//! Throws random hits between a small party and a pack of enemies, runs
//! them through the combat hooks, and totals what landed per pairing.
//! Handy for comparing presets before a session.

use clap::Parser;
use damage_rules::combat::{CombatHooks, HitEvent, Preset};
use damage_rules::core::config::{DEFAULT_LOG_FILTER, DEFAULT_RULES_PATH};
use damage_rules::core::{Channel, EntityId, Result};
use damage_rules::roster::{Roster, Side};
use damage_rules::rules::load_rules;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Simulate random hits and total the damage each pairing dealt")]
struct Args {
    /// Rules file to load
    #[arg(long, default_value = DEFAULT_RULES_PATH)]
    config: PathBuf,

    /// Apply a preset on top of the loaded rules
    #[arg(long)]
    preset: Option<Preset>,

    #[arg(long, default_value_t = 4)]
    players: usize,

    #[arg(long, default_value_t = 6)]
    enemies: usize,

    #[arg(long, default_value_t = 500)]
    hits: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Default, Serialize)]
struct Tally {
    hits: u32,
    blocked: u32,
    friendly_fire: u32,
    raw_health: f32,
    health: f32,
    raw_stability: f32,
    stability: f32,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    preset: Option<String>,
    pairings: BTreeMap<String, Tally>,
}

fn pairing(dealer: Option<Side>, receiver: Side) -> String {
    let name = |side: Side| format!("{:?}", side).to_lowercase();
    match dealer {
        Some(side) => format!("{}->{}", name(side), name(receiver)),
        None => format!("environment->{}", name(receiver)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut rules = load_rules(&args.config)?;
    if let Some(preset) = args.preset {
        preset.apply(&mut rules);
    }

    let mut roster = Roster::new();
    let mut everyone: Vec<EntityId> = Vec::new();
    for _ in 0..args.players {
        everyone.push(roster.spawn(Side::Player));
    }
    for _ in 0..args.enemies {
        everyone.push(roster.spawn(Side::Enemy));
    }
    if everyone.is_empty() {
        tracing::warn!("Nobody to fight, nothing to do");
        return Ok(());
    }

    let hooks = CombatHooks::new(&rules, &roster);
    let mut pairings: BTreeMap<String, Tally> = BTreeMap::new();

    for _ in 0..args.hits {
        let receiver = everyone[rng.gen_range(0..everyone.len())];
        // One hit in ten comes from the environment (falls, traps, fire)
        let dealer = if rng.gen_bool(0.1) {
            None
        } else {
            Some(everyone[rng.gen_range(0..everyone.len())])
        };

        let receiver_side = roster.side(receiver).unwrap_or(Side::Neutral);
        let dealer_side = dealer.and_then(|id| roster.side(id));
        let tally = pairings.entry(pairing(dealer_side, receiver_side)).or_default();
        tally.hits += 1;

        // Host rule: only opposing sides or the environment can hit
        let host_eligible = match dealer_side {
            Some(side) => side != receiver_side,
            None => true,
        };
        if !hooks.eligible_faction(host_eligible, &receiver, dealer.as_ref()) {
            tally.blocked += 1;
            continue;
        }

        let raw_health: f32 = rng.gen_range(5.0..40.0);
        let raw_stability: f32 = rng.gen_range(0.0..30.0);
        let health = hooks
            .engine()
            .resolve(&HitEvent::health(dealer, receiver, raw_health));
        let stability = hooks
            .engine()
            .apply(Channel::Stability, dealer.as_ref(), &receiver, raw_stability);

        if health.is_friendly_fire() {
            tally.friendly_fire += 1;
        }
        tally.raw_health += raw_health;
        tally.health += health.amount;
        tally.raw_stability += raw_stability;
        tally.stability += stability;
    }

    let report = Report {
        seed,
        preset: args.preset.map(|p| p.to_string()),
        pairings,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
