//! Damage Rules - command line front end
//!
//! Inspects and edits the persisted rule file, and previews how a hit
//! would be scaled under the current rules.

use clap::{Parser, Subcommand};
use damage_rules::combat::{CombatHooks, HitEvent, Preset, SettingField};
use damage_rules::core::config::{DEFAULT_LOG_FILTER, DEFAULT_RULES_PATH};
use damage_rules::core::{Channel, EntityId, Result, Team};
use damage_rules::roster::{Roster, Side};
use damage_rules::rules::{to_toml_string, RulesStore};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Per-faction damage multipliers and friendly fire
#[derive(Parser, Debug)]
#[command(name = "damage-rules")]
#[command(about = "Inspect, edit and preview combat damage rules")]
struct Args {
    /// Rules file (created on first save)
    #[arg(long, default_value = DEFAULT_RULES_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current rules
    Show,
    /// Apply a named preset and save
    Preset { name: Preset },
    /// Set one multiplier (percent, clamped to 0-200) and save
    Set {
        team: Team,
        field: SettingField,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Turn the rules on or off and save
    Enable {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Preview a single hit
    Hit {
        /// player, enemy, neutral or none
        #[arg(long, default_value = "none")]
        dealer: String,
        /// player, enemy or neutral
        #[arg(long)]
        receiver: Side,
        #[arg(long)]
        amount: f32,
        #[arg(long, default_value = "health")]
        channel: Channel,
    },
    /// Print every dealer/receiver/channel combination as JSON
    Table {
        #[arg(long, default_value_t = 100.0)]
        amount: f32,
    },
}

#[derive(Serialize)]
struct TableRow {
    dealer: String,
    receiver: Side,
    channel: Channel,
    dealing_team: Team,
    friendly_fire: bool,
    eligible: bool,
    amount: f32,
}

/// Host stand-in: two of each side so same-side hits have distinct parties
struct Cast {
    roster: Roster,
    first: [(Side, EntityId); 3],
    second: [(Side, EntityId); 3],
}

impl Cast {
    fn new() -> Self {
        let mut roster = Roster::new();
        let sides = [Side::Player, Side::Enemy, Side::Neutral];
        let first = sides.map(|side| (side, roster.spawn(side)));
        let second = sides.map(|side| (side, roster.spawn(side)));
        Self {
            roster,
            first,
            second,
        }
    }

    fn dealer(&self, side: Side) -> EntityId {
        self.pick(&self.first, side)
    }

    fn receiver(&self, side: Side) -> EntityId {
        self.pick(&self.second, side)
    }

    fn pick(&self, slots: &[(Side, EntityId); 3], side: Side) -> EntityId {
        slots
            .iter()
            .find(|(s, _)| *s == side)
            .map(|(_, id)| *id)
            .unwrap_or_default()
    }
}

fn parse_dealer(value: &str) -> Result<Option<Side>> {
    if value.eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        Ok(Some(value.parse()?))
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
    let store = RulesStore::open(&args.config)?;

    match args.command {
        Command::Show => {
            print!("{}", to_toml_string(&store.snapshot())?);
        }
        Command::Preset { name } => {
            store.apply_preset(name);
            store.save()?;
            println!("Applied preset {} to {:?}", name, args.config);
        }
        Command::Set { team, field, value } => {
            let stored = store.set_value(team, field, value);
            store.save()?;
            if stored.value() as i64 != value {
                println!("{}.{} = {} (clamped from {})", team, field, stored, value);
            } else {
                println!("{}.{} = {}", team, field, stored);
            }
        }
        Command::Enable { enabled } => {
            store.set_enabled(enabled);
            store.save()?;
            println!("Damage rules {}", if enabled { "enabled" } else { "disabled" });
        }
        Command::Hit {
            dealer,
            receiver,
            amount,
            channel,
        } => {
            let dealer = parse_dealer(&dealer)?;
            let cast = Cast::new();
            let rules = store.snapshot();
            let hooks = CombatHooks::new(&rules, &cast.roster);

            let dealer_id = dealer.map(|side| cast.dealer(side));
            let receiver_id = cast.receiver(receiver);
            let hit = hooks.engine().resolve(&HitEvent {
                dealer: dealer_id,
                receiver: receiver_id,
                channel,
                amount,
            });
            let eligible = hooks.eligible_faction(false, &receiver_id, dealer_id.as_ref());

            println!("dealing team:   {}", hit.dealing_team);
            println!("receiving team: {}", hit.receiving_team);
            println!("base factor:    {:.2}", hit.base_factor);
            match hit.friendly_fire_factor {
                Some(factor) => println!("friendly fire:  {:.2}", factor),
                None => println!("friendly fire:  -"),
            }
            println!("{}: {} -> {}", channel, hit.raw, hit.amount);
            println!("friendly fire eligible: {}", eligible);
        }
        Command::Table { amount } => {
            let cast = Cast::new();
            let rules = store.snapshot();
            let hooks = CombatHooks::new(&rules, &cast.roster);
            let dealers = [None, Some(Side::Player), Some(Side::Enemy), Some(Side::Neutral)];
            let receivers = [Side::Player, Side::Enemy, Side::Neutral];

            let mut rows = Vec::new();
            for dealer in dealers {
                for receiver in receivers {
                    for channel in Channel::ALL {
                        let dealer_id = dealer.map(|side| cast.dealer(side));
                        let receiver_id = cast.receiver(receiver);
                        let hit = hooks.engine().breakdown(
                            channel,
                            dealer_id.as_ref(),
                            &receiver_id,
                            amount,
                        );
                        rows.push(TableRow {
                            dealer: dealer
                                .map(|side| format!("{:?}", side).to_lowercase())
                                .unwrap_or_else(|| "none".to_string()),
                            receiver,
                            channel,
                            dealing_team: hit.dealing_team,
                            friendly_fire: hit.is_friendly_fire(),
                            eligible: hooks.eligible_faction(
                                false,
                                &receiver_id,
                                dealer_id.as_ref(),
                            ),
                            amount: hit.amount,
                        });
                    }
                }
            }
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
