//! Named multiplier presets

use crate::combat::settings::{DamageRules, TeamSettings};
use crate::core::{RulesError, Team};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Softer players, harder-hitting enemies, light friendly fire on both sides
    CoopSurvival,
}

impl Preset {
    pub const ALL: [Preset; 1] = [Preset::CoopSurvival];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::CoopSurvival => "coop-survival",
        }
    }

    pub fn settings(&self, team: Team) -> TeamSettings {
        match (self, team) {
            (Preset::CoopSurvival, Team::Players) => TeamSettings::from_values(50, 50, 20, 40),
            (Preset::CoopSurvival, Team::Enemies) => TeamSettings::from_values(80, 120, 20, 40),
        }
    }

    /// Overwrite every team's multipliers and switch the rules on
    pub fn apply(&self, rules: &mut DamageRules) {
        rules.enabled = true;
        for team in Team::ALL {
            rules[team] = self.settings(team);
        }
        tracing::debug!("Applied preset {}", self);
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "coop-survival" | "cooperative-survival" => Ok(Preset::CoopSurvival),
            _ => Err(RulesError::UnknownPreset(s.to_string())),
        }
    }
}
