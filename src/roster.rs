//! Reference host - a registry of entities and their allegiance

use crate::combat::faction::Allegiance;
use crate::core::{EntityId, RulesError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
    /// Neither ally nor enemy (critters, props)
    Neutral,
}

impl FromStr for Side {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "player" | "ally" => Ok(Side::Player),
            "enemy" => Ok(Side::Enemy),
            "neutral" => Ok(Side::Neutral),
            _ => Err(RulesError::UnknownTeam(s.to_string())),
        }
    }
}

/// All combat-capable entities known to the host
#[derive(Debug, Default)]
pub struct Roster {
    sides: AHashMap<EntityId, Side>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, side: Side) -> EntityId {
        let id = EntityId::new();
        self.sides.insert(id, side);
        id
    }

    pub fn side(&self, id: EntityId) -> Option<Side> {
        self.sides.get(&id).copied()
    }

    /// Change allegiance at runtime (charm, betrayal)
    pub fn set_side(&mut self, id: EntityId, side: Side) -> bool {
        match self.sides.get_mut(&id) {
            Some(slot) => {
                *slot = side;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    pub fn members(&self, side: Side) -> impl Iterator<Item = EntityId> + '_ {
        self.sides
            .iter()
            .filter(move |(_, s)| **s == side)
            .map(|(id, _)| *id)
    }
}

impl Allegiance<EntityId> for Roster {
    fn is_ally(&self, entity: &EntityId) -> bool {
        self.side(*entity) == Some(Side::Player)
    }

    fn is_enemy(&self, entity: &EntityId) -> bool {
        self.side(*entity) == Some(Side::Enemy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_classify() {
        let mut roster = Roster::new();
        let hero = roster.spawn(Side::Player);
        let wolf = roster.spawn(Side::Enemy);
        let deer = roster.spawn(Side::Neutral);

        assert!(roster.is_ally(&hero) && !roster.is_enemy(&hero));
        assert!(roster.is_enemy(&wolf) && !roster.is_ally(&wolf));
        assert!(!roster.is_ally(&deer) && !roster.is_enemy(&deer));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_unknown_entity_is_neither() {
        let roster = Roster::new();
        let ghost = EntityId::new();
        assert!(!roster.is_ally(&ghost));
        assert!(!roster.is_enemy(&ghost));
    }

    #[test]
    fn test_set_side() {
        let mut roster = Roster::new();
        let bandit = roster.spawn(Side::Enemy);
        assert!(roster.set_side(bandit, Side::Player));
        assert!(roster.is_ally(&bandit));
        assert!(!roster.set_side(EntityId::new(), Side::Player));
    }

    #[test]
    fn test_members() {
        let mut roster = Roster::new();
        roster.spawn(Side::Player);
        roster.spawn(Side::Player);
        roster.spawn(Side::Enemy);
        assert_eq!(roster.members(Side::Player).count(), 2);
        assert_eq!(roster.members(Side::Enemy).count(), 1);
    }
}
