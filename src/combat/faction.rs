//! Faction policy
//!
//! Decides which team a hit counts as dealt by, and whether a hit between
//! two player-side entities may register at all. Allegiance itself belongs
//! to the host; it is consulted through [`Allegiance`].

use crate::combat::settings::DamageRules;
use crate::core::Team;

/// Host-owned allegiance classifier
///
/// `is_ally` and `is_enemy` must never both be true for one entity.
pub trait Allegiance<E> {
    fn is_ally(&self, entity: &E) -> bool;
    fn is_enemy(&self, entity: &E) -> bool;
}

/// Team bucket of a single entity
///
/// Entities the host can't place are treated as players so a hit never fails.
pub fn team_of<E, A>(allegiance: &A, entity: &E) -> Team
where
    A: Allegiance<E> + ?Sized,
{
    if allegiance.is_enemy(entity) {
        Team::Enemies
    } else if allegiance.is_ally(entity) {
        Team::Players
    } else {
        tracing::debug!("Entity has no resolvable team, treating as players");
        Team::Players
    }
}

/// Whether the host classifies an entity as a member of `team`
///
/// Unlike [`team_of`] there is no fallback: an entity the host can't place
/// belongs to neither team.
pub fn is_member<E, A>(allegiance: &A, entity: &E, team: Team) -> bool
where
    A: Allegiance<E> + ?Sized,
{
    match team {
        Team::Players => allegiance.is_ally(entity),
        Team::Enemies => allegiance.is_enemy(entity),
    }
}

/// Team whose multipliers apply to a hit
///
/// Unattributed damage (no dealer) to a player-side receiver counts as
/// enemy-dealt. Unattributed damage to anyone else counts as player-dealt.
/// Presets are tuned against this asymmetry.
pub fn classify_dealing_team<E, A>(allegiance: &A, dealer: Option<&E>, receiver: &E) -> Team
where
    A: Allegiance<E> + ?Sized,
{
    match dealer {
        Some(dealer) if allegiance.is_enemy(dealer) => Team::Enemies,
        None if allegiance.is_ally(receiver) => Team::Enemies,
        _ => Team::Players,
    }
}

/// Whether a player-side defender may be hit by another entity
///
/// Only ever widens the host's own rules: true requires a distinct attacker,
/// a player-side defender and a non-zero players friendly-fire multiplier.
pub fn is_friendly_fire_eligible<E, A>(
    rules: &DamageRules,
    allegiance: &A,
    defender: &E,
    attacker: Option<&E>,
) -> bool
where
    E: PartialEq,
    A: Allegiance<E> + ?Sized,
{
    let Some(attacker) = attacker else {
        return false;
    };

    rules.enabled
        && attacker != defender
        && allegiance.is_ally(defender)
        && rules.players_friendly_fire_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::preset::Preset;
    use crate::combat::settings::SettingField;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Unit {
        Ally(u8),
        Foe(u8),
        Stray,
    }

    struct UnitAllegiance;

    impl Allegiance<Unit> for UnitAllegiance {
        fn is_ally(&self, entity: &Unit) -> bool {
            matches!(entity, Unit::Ally(_))
        }

        fn is_enemy(&self, entity: &Unit) -> bool {
            matches!(entity, Unit::Foe(_))
        }
    }

    fn coop_rules() -> DamageRules {
        let mut rules = DamageRules::default();
        Preset::CoopSurvival.apply(&mut rules);
        rules
    }

    #[test]
    fn test_enemy_dealer_is_enemies() {
        let a = UnitAllegiance;
        assert_eq!(
            classify_dealing_team(&a, Some(&Unit::Foe(1)), &Unit::Ally(1)),
            Team::Enemies
        );
        assert_eq!(
            classify_dealing_team(&a, Some(&Unit::Foe(1)), &Unit::Foe(2)),
            Team::Enemies
        );
    }

    #[test]
    fn test_ally_dealer_is_players() {
        let a = UnitAllegiance;
        assert_eq!(
            classify_dealing_team(&a, Some(&Unit::Ally(1)), &Unit::Foe(1)),
            Team::Players
        );
        assert_eq!(
            classify_dealing_team(&a, Some(&Unit::Ally(1)), &Unit::Ally(2)),
            Team::Players
        );
    }

    #[test]
    fn test_unattributed_damage_is_asymmetric() {
        let a = UnitAllegiance;
        assert_eq!(classify_dealing_team(&a, None, &Unit::Ally(1)), Team::Enemies);
        assert_eq!(classify_dealing_team(&a, None, &Unit::Foe(1)), Team::Players);
    }

    #[test]
    fn test_unclassified_dealer_falls_to_players() {
        let a = UnitAllegiance;
        assert_eq!(
            classify_dealing_team(&a, Some(&Unit::Stray), &Unit::Ally(1)),
            Team::Players
        );
        assert_eq!(team_of(&a, &Unit::Stray), Team::Players);
    }

    #[test]
    fn test_unclassified_entity_is_member_of_no_team() {
        let a = UnitAllegiance;
        assert!(!is_member(&a, &Unit::Stray, Team::Players));
        assert!(!is_member(&a, &Unit::Stray, Team::Enemies));
        assert!(is_member(&a, &Unit::Ally(1), Team::Players));
        assert!(is_member(&a, &Unit::Foe(1), Team::Enemies));
        assert!(!is_member(&a, &Unit::Foe(1), Team::Players));
    }

    #[test]
    fn test_team_of() {
        let a = UnitAllegiance;
        assert_eq!(team_of(&a, &Unit::Ally(3)), Team::Players);
        assert_eq!(team_of(&a, &Unit::Foe(3)), Team::Enemies);
    }

    #[test]
    fn test_self_hit_is_never_friendly_fire() {
        let rules = coop_rules();
        let me = Unit::Ally(1);
        assert!(!is_friendly_fire_eligible(&rules, &UnitAllegiance, &me, Some(&me)));
    }

    #[test]
    fn test_distinct_allies_eligible_when_configured() {
        let rules = coop_rules();
        assert!(is_friendly_fire_eligible(
            &rules,
            &UnitAllegiance,
            &Unit::Ally(1),
            Some(&Unit::Ally(2)),
        ));
    }

    #[test]
    fn test_zero_player_ff_disables_eligibility() {
        let mut rules = coop_rules();
        rules.set(Team::Players, SettingField::FfHealthDamage, 0);
        rules.set(Team::Players, SettingField::FfStabilityDamage, 0);
        assert!(!is_friendly_fire_eligible(
            &rules,
            &UnitAllegiance,
            &Unit::Ally(1),
            Some(&Unit::Ally(2)),
        ));
    }

    #[test]
    fn test_enemy_defender_never_widened() {
        let rules = coop_rules();
        assert!(!is_friendly_fire_eligible(
            &rules,
            &UnitAllegiance,
            &Unit::Foe(1),
            Some(&Unit::Foe(2)),
        ));
    }

    #[test]
    fn test_missing_attacker_not_eligible() {
        let rules = coop_rules();
        assert!(!is_friendly_fire_eligible(
            &rules,
            &UnitAllegiance,
            &Unit::Ally(1),
            None,
        ));
    }

    #[test]
    fn test_disabled_rules_never_eligible() {
        let mut rules = coop_rules();
        rules.enabled = false;
        assert!(!is_friendly_fire_eligible(
            &rules,
            &UnitAllegiance,
            &Unit::Ally(1),
            Some(&Unit::Ally(2)),
        ));
    }
}
