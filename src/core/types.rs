//! Core type definitions used throughout the codebase

use crate::core::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse faction bucket used for multiplier lookup
///
/// Distinct from any in-simulation hostility graph: every combat-capable
/// entity lands in exactly one of these two buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Players,
    Enemies,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Players, Team::Enemies];

    pub fn name(&self) -> &'static str {
        match self {
            Team::Players => "players",
            Team::Enemies => "enemies",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Team {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "players" | "player" => Ok(Team::Players),
            "enemies" | "enemy" => Ok(Team::Enemies),
            _ => Err(RulesError::UnknownTeam(s.to_string())),
        }
    }
}

/// Which resource a hit drains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Vitality damage
    #[default]
    Health,
    /// Poise / knockback
    Stability,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Health, Channel::Stability];

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Health => "health",
            Channel::Stability => "stability",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "health" => Ok(Channel::Health),
            "stability" | "knockback" => Ok(Channel::Stability),
            _ => Err(RulesError::UnknownChannel(s.to_string())),
        }
    }
}
