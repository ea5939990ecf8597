//! Damage rule constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

/// Lowest accepted multiplier (percent)
///
/// A value of 0 fully disables the channel it applies to. For a
/// friendly-fire multiplier this turns off intra-team damage without
/// touching damage between teams.
pub const PERCENT_MIN: u8 = 0;

/// Highest accepted multiplier (percent)
///
/// 200 doubles a hit. Any value entered above this is clamped down,
/// both from the command line and from a hand-edited rules file.
pub const PERCENT_MAX: u8 = 200;

/// Neutral multiplier (percent)
///
/// Base multipliers start here for both teams, as do the enemies'
/// friendly-fire multipliers.
pub const PERCENT_NEUTRAL: u8 = 100;

/// Divisor turning a stored percent into the factor applied to a hit
pub const PERCENT_SCALE: f32 = 100.0;

/// Rules file used when no `--config` path is given
pub const DEFAULT_RULES_PATH: &str = "data/damage.toml";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "damage_rules=info";
