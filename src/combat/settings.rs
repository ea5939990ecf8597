//! Per-team multiplier settings
//!
//! Multipliers are whole percents in `[0, 200]`. Values are clamped where
//! they enter the system (setters and rule files) so the engine can use
//! them without checking.

use crate::core::config::{PERCENT_MAX, PERCENT_MIN, PERCENT_NEUTRAL, PERCENT_SCALE};
use crate::core::{Channel, RulesError, Team};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// A multiplier stored as a bounded percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(PERCENT_MIN);
    pub const NEUTRAL: Percent = Percent(PERCENT_NEUTRAL);
    pub const MAX: Percent = Percent(PERCENT_MAX);

    /// Clamp any integer into range
    pub fn new(value: i64) -> Self {
        Self(value.clamp(PERCENT_MIN as i64, PERCENT_MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Factor applied to a raw hit (0.0 to 2.0)
    pub fn as_factor(&self) -> f32 {
        self.0 as f32 / PERCENT_SCALE
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        let percent = Percent::new(raw);
        if percent.0 as i64 != raw {
            tracing::warn!("Multiplier {} out of range, clamped to {}", raw, percent);
        }
        Ok(percent)
    }
}

/// Names of the four editable multipliers of a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    HealthDamage,
    StabilityDamage,
    FfHealthDamage,
    FfStabilityDamage,
}

impl SettingField {
    pub const ALL: [SettingField; 4] = [
        SettingField::HealthDamage,
        SettingField::StabilityDamage,
        SettingField::FfHealthDamage,
        SettingField::FfStabilityDamage,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SettingField::HealthDamage => "health_damage",
            SettingField::StabilityDamage => "stability_damage",
            SettingField::FfHealthDamage => "ff_health_damage",
            SettingField::FfStabilityDamage => "ff_stability_damage",
        }
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingField {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "health_damage" | "health" => Ok(SettingField::HealthDamage),
            "stability_damage" | "stability" => Ok(SettingField::StabilityDamage),
            "ff_health_damage" | "ff_health" => Ok(SettingField::FfHealthDamage),
            "ff_stability_damage" | "ff_stability" => Ok(SettingField::FfStabilityDamage),
            _ => Err(RulesError::UnknownField(s.to_string())),
        }
    }
}

/// Multipliers for damage dealt by one team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamSettings {
    pub health_damage: Percent,
    pub stability_damage: Percent,
    /// Extra multiplier when the receiver is on the same team
    pub ff_health_damage: Percent,
    pub ff_stability_damage: Percent,
}

impl TeamSettings {
    /// Out-of-the-box values: players can't hurt each other, enemies can
    pub fn default_for(team: Team) -> Self {
        let ff = match team {
            Team::Players => Percent::ZERO,
            Team::Enemies => Percent::NEUTRAL,
        };
        Self {
            health_damage: Percent::NEUTRAL,
            stability_damage: Percent::NEUTRAL,
            ff_health_damage: ff,
            ff_stability_damage: ff,
        }
    }

    pub fn from_values(health: i64, stability: i64, ff_health: i64, ff_stability: i64) -> Self {
        Self {
            health_damage: Percent::new(health),
            stability_damage: Percent::new(stability),
            ff_health_damage: Percent::new(ff_health),
            ff_stability_damage: Percent::new(ff_stability),
        }
    }

    pub fn base(&self, channel: Channel) -> Percent {
        match channel {
            Channel::Health => self.health_damage,
            Channel::Stability => self.stability_damage,
        }
    }

    pub fn friendly_fire(&self, channel: Channel) -> Percent {
        match channel {
            Channel::Health => self.ff_health_damage,
            Channel::Stability => self.ff_stability_damage,
        }
    }

    pub fn get(&self, field: SettingField) -> Percent {
        match field {
            SettingField::HealthDamage => self.health_damage,
            SettingField::StabilityDamage => self.stability_damage,
            SettingField::FfHealthDamage => self.ff_health_damage,
            SettingField::FfStabilityDamage => self.ff_stability_damage,
        }
    }

    /// Set a field, clamping the value into range
    pub fn set(&mut self, field: SettingField, value: i64) -> Percent {
        let percent = Percent::new(value);
        let slot = match field {
            SettingField::HealthDamage => &mut self.health_damage,
            SettingField::StabilityDamage => &mut self.stability_damage,
            SettingField::FfHealthDamage => &mut self.ff_health_damage,
            SettingField::FfStabilityDamage => &mut self.ff_stability_damage,
        };
        *slot = percent;
        percent
    }

    /// True if any friendly-fire multiplier lets same-team hits through
    pub fn friendly_fire_enabled(&self) -> bool {
        !self.ff_health_damage.is_zero() || !self.ff_stability_damage.is_zero()
    }
}

/// A complete rule set: one [`TeamSettings`] per [`Team`]
///
/// The two teams are plain fields so the mapping is total by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRules")]
pub struct DamageRules {
    /// When false every hook passes host values through untouched
    pub enabled: bool,
    pub players: TeamSettings,
    pub enemies: TeamSettings,
}

impl DamageRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Players' friendly fire gate, shared by every eligibility checkpoint
    pub fn players_friendly_fire_enabled(&self) -> bool {
        self.players.friendly_fire_enabled()
    }

    pub fn set(&mut self, team: Team, field: SettingField, value: i64) -> Percent {
        self[team].set(field, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Team, &TeamSettings)> {
        Team::ALL.into_iter().map(move |team| (team, &self[team]))
    }
}

impl Default for DamageRules {
    fn default() -> Self {
        Self {
            enabled: true,
            players: TeamSettings::default_for(Team::Players),
            enemies: TeamSettings::default_for(Team::Enemies),
        }
    }
}

impl Index<Team> for DamageRules {
    type Output = TeamSettings;

    fn index(&self, team: Team) -> &TeamSettings {
        match team {
            Team::Players => &self.players,
            Team::Enemies => &self.enemies,
        }
    }
}

impl IndexMut<Team> for DamageRules {
    fn index_mut(&mut self, team: Team) -> &mut TeamSettings {
        match team {
            Team::Players => &mut self.players,
            Team::Enemies => &mut self.enemies,
        }
    }
}

/// On-disk shape; any missing value falls back to its team default
#[derive(Deserialize)]
struct RawRules {
    enabled: Option<bool>,
    players: Option<RawTeamSettings>,
    enemies: Option<RawTeamSettings>,
}

#[derive(Deserialize, Default)]
struct RawTeamSettings {
    health_damage: Option<Percent>,
    stability_damage: Option<Percent>,
    ff_health_damage: Option<Percent>,
    ff_stability_damage: Option<Percent>,
}

impl RawTeamSettings {
    fn resolve(self, team: Team) -> TeamSettings {
        let defaults = TeamSettings::default_for(team);
        TeamSettings {
            health_damage: self.health_damage.unwrap_or(defaults.health_damage),
            stability_damage: self.stability_damage.unwrap_or(defaults.stability_damage),
            ff_health_damage: self.ff_health_damage.unwrap_or(defaults.ff_health_damage),
            ff_stability_damage: self
                .ff_stability_damage
                .unwrap_or(defaults.ff_stability_damage),
        }
    }
}

impl From<RawRules> for DamageRules {
    fn from(raw: RawRules) -> Self {
        Self {
            enabled: raw.enabled.unwrap_or(true),
            players: raw.players.unwrap_or_default().resolve(Team::Players),
            enemies: raw.enemies.unwrap_or_default().resolve(Team::Enemies),
        }
    }
}
