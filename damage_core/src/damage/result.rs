//! DamageResult - snapshot of one damage calculation

use serde::{Deserialize, Serialize};

/// Every intermediate multiplier applied during a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Multiplier from the player/enemy level gap
    pub level_scaling: f64,
    /// Multiplier from the selected difficulty tier
    pub difficulty_modifier: f64,
    /// Multiplier from damage type vs enemy defense category
    pub elemental_modifier: f64,
    /// Weapon critical multiplier, or 1.0 on a non-crit
    pub critical_modifier: f64,
    /// Product of the three resolved percentage-bonus multipliers
    pub bonus_modifiers: f64,
}

/// Result of one damage calculation
///
/// A pure snapshot: every field is derived from the input, nothing is
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Base damage after pellet multiplication, before any scaling
    pub base_damage: f64,
    /// Base damage after weapon-level and level-gap scaling, before
    /// difficulty/elemental/crit/bonus multipliers
    pub scaled_damage: f64,
    /// Raw elemental effectiveness multiplier that was applied
    pub elemental_effectiveness: f64,
    /// Equal to final_damage on a critical hit, 0.0 otherwise
    pub critical_damage: f64,
    /// Damage per hit, rounded to the nearest integer
    pub final_damage: f64,
    /// Damage per second (final damage x fire rate), rounded
    pub dps: f64,
    /// Every intermediate multiplier
    pub breakdown: DamageBreakdown,
}
