//! Shared rule store
//!
//! Readers take an `Arc` snapshot and keep using it for the whole hit, so a
//! reload swapping in a new rule set never shows a half-written one.

use crate::combat::preset::Preset;
use crate::combat::settings::{DamageRules, Percent, SettingField};
use crate::core::{Result, Team};
use crate::rules::loader::{load_rules, save_rules};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct RulesStore {
    current: RwLock<Arc<DamageRules>>,
    path: Option<PathBuf>,
}

impl RulesStore {
    /// In-memory store, never touches disk
    pub fn new(rules: DamageRules) -> Self {
        Self {
            current: RwLock::new(Arc::new(rules)),
            path: None,
        }
    }

    /// Store backed by a rules file; loads it now
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let rules = load_rules(&path)?;
        Ok(Self {
            current: RwLock::new(Arc::new(rules)),
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn snapshot(&self) -> Arc<DamageRules> {
        Arc::clone(&self.current.read())
    }

    pub fn replace(&self, rules: DamageRules) {
        *self.current.write() = Arc::new(rules);
    }

    /// Edit a copy of the current rules and swap it in
    pub fn update<F>(&self, edit: F) -> Arc<DamageRules>
    where
        F: FnOnce(&mut DamageRules),
    {
        let mut guard = self.current.write();
        let mut next = **guard;
        edit(&mut next);
        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        next
    }

    pub fn set_value(&self, team: Team, field: SettingField, value: i64) -> Percent {
        let rules = self.update(|rules| {
            rules.set(team, field, value);
        });
        let stored = rules[team].get(field);
        tracing::debug!("Set {}.{} = {}", team, field, stored);
        stored
    }

    pub fn apply_preset(&self, preset: Preset) -> Arc<DamageRules> {
        self.update(|rules| preset.apply(rules))
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.update(|rules| rules.enabled = enabled);
    }

    /// Re-read the backing file; in-memory stores keep their rules
    pub fn reload(&self) -> Result<Arc<DamageRules>> {
        if let Some(path) = &self.path {
            let rules = load_rules(path)?;
            self.replace(rules);
            tracing::info!("Reloaded damage rules from {:?}", path);
        }
        Ok(self.snapshot())
    }

    /// Persist to the backing file; in-memory stores do nothing
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.path {
            save_rules(path, &self.snapshot())?;
        }
        Ok(())
    }
}

impl Default for RulesStore {
    fn default() -> Self {
        Self::new(DamageRules::default())
    }
}
