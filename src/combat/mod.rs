pub mod faction;
pub mod hooks;
pub mod multiplier;
pub mod preset;
pub mod settings;

pub use faction::{
    classify_dealing_team, is_friendly_fire_eligible, is_member, team_of, Allegiance,
};
pub use hooks::CombatHooks;
pub use multiplier::{AdjustedHit, HitEvent, MultiplierEngine};
pub use preset::Preset;
pub use settings::{DamageRules, Percent, SettingField, TeamSettings};
