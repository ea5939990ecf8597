//! Damage rules persisted as TOML and shared at runtime

mod loader;
pub mod store;

pub use loader::{load_rules, parse_rules, save_rules, to_toml_string};
pub use store::RulesStore;
