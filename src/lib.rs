//! Damage Rules - per-faction combat damage and friendly-fire rules engine

pub mod combat;
pub mod core;
pub mod roster;
pub mod rules;
