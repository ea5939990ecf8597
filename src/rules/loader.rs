//! Load and save damage rules as TOML

use crate::combat::settings::DamageRules;
use crate::core::Result;
use std::fs;
use std::path::Path;

/// Load rules from a TOML file
///
/// A missing file is not an error: the defaults are used until the first save.
pub fn load_rules(path: &Path) -> Result<DamageRules> {
    if !path.exists() {
        tracing::info!("No rules file at {:?}, using defaults", path);
        return Ok(DamageRules::default());
    }

    let content = fs::read_to_string(path)?;
    let rules = parse_rules(&content)?;
    tracing::debug!("Loaded damage rules from {:?}", path);
    Ok(rules)
}

/// Write rules to a TOML file, creating parent directories
pub fn save_rules(path: &Path, rules: &DamageRules) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_toml_string(rules)?)?;
    tracing::debug!("Saved damage rules to {:?}", path);
    Ok(())
}

pub fn parse_rules(content: &str) -> Result<DamageRules> {
    Ok(toml::from_str(content)?)
}

pub fn to_toml_string(rules: &DamageRules) -> Result<String> {
    Ok(toml::to_string_pretty(rules)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::settings::{Percent, SettingField};
    use crate::core::{RulesError, Team};

    #[test]
    fn test_parse_full_file() {
        let content = r#"
enabled = true

[players]
health_damage = 50
stability_damage = 50
ff_health_damage = 20
ff_stability_damage = 40

[enemies]
health_damage = 80
stability_damage = 120
ff_health_damage = 20
ff_stability_damage = 40
"#;
        let rules = parse_rules(content).unwrap();
        assert_eq!(rules.players.health_damage, Percent::new(50));
        assert_eq!(rules.enemies.stability_damage, Percent::new(120));
        assert!(rules.players_friendly_fire_enabled());
    }

    #[test]
    fn test_missing_values_use_team_defaults() {
        let rules = parse_rules("[enemies]\nhealth_damage = 80\n").unwrap();
        assert!(rules.enabled);
        assert_eq!(rules.enemies.health_damage, Percent::new(80));
        assert_eq!(rules.enemies.ff_health_damage, Percent::NEUTRAL);
        assert_eq!(rules.players.ff_health_damage, Percent::ZERO);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let rules = parse_rules("[players]\nhealth_damage = 500\nff_health_damage = -3\n").unwrap();
        assert_eq!(rules.players.health_damage, Percent::MAX);
        assert_eq!(rules.players.ff_health_damage, Percent::ZERO);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let result = parse_rules("[players\nhealth_damage = ");
        assert!(matches!(result, Err(RulesError::ParseError(_))));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let result = parse_rules("[players]\nhealth_damage = \"lots\"\n");
        assert!(matches!(result, Err(RulesError::ParseError(_))));
    }

    #[test]
    fn test_written_rules_read_back() {
        let mut rules = DamageRules::default();
        rules.set(Team::Enemies, SettingField::FfStabilityDamage, 15);
        rules.enabled = false;

        let text = to_toml_string(&rules).unwrap();
        assert_eq!(parse_rules(&text).unwrap(), rules);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir()
            .join(format!("damage-rules-missing-{}.toml", uuid::Uuid::new_v4()));
        assert_eq!(load_rules(&path).unwrap(), DamageRules::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("damage-rules-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("damage.toml");

        let mut rules = DamageRules::default();
        rules.set(Team::Players, SettingField::HealthDamage, 75);
        save_rules(&path, &rules).unwrap();

        assert_eq!(load_rules(&path).unwrap(), rules);
        let _ = fs::remove_dir_all(&dir);
    }
}
