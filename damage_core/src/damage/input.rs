//! Calculation request - weapon, target, and optional bonus modifiers

use super::finite_or_zero;
use crate::difficulty::Difficulty;
use crate::types::{EnemyType, Weapon};
use serde::{Deserialize, Serialize};

/// Optional percentage bonuses supplied by the caller
///
/// Each field is a percentage (25.0 = +25%), defaulting to 0. The critical
/// damage bonus only takes effect on critical hits; it resolves to a
/// neutral multiplier otherwise, even when a non-zero percentage was
/// supplied. Negative percentages are accepted and reduce damage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusModifiers {
    /// Bonus to all weapon damage
    #[serde(default)]
    pub weapon_damage_bonus: f64,
    /// Bonus to elemental damage
    #[serde(default)]
    pub elemental_damage_bonus: f64,
    /// Bonus to critical hit damage
    #[serde(default)]
    pub critical_damage_bonus: f64,
}

impl BonusModifiers {
    /// Resolved weapon damage multiplier (1 + pct/100)
    pub fn weapon_damage_multiplier(&self) -> f64 {
        percent_to_multiplier(self.weapon_damage_bonus)
    }

    /// Resolved elemental damage multiplier (1 + pct/100)
    pub fn elemental_damage_multiplier(&self) -> f64 {
        percent_to_multiplier(self.elemental_damage_bonus)
    }

    /// Resolved critical damage multiplier, forced to 1.0 on non-crits
    pub fn critical_damage_multiplier(&self, is_critical_hit: bool) -> f64 {
        if is_critical_hit {
            percent_to_multiplier(self.critical_damage_bonus)
        } else {
            1.0
        }
    }

    /// Product of all three resolved multipliers
    pub fn combined_multiplier(&self, is_critical_hit: bool) -> f64 {
        self.weapon_damage_multiplier()
            * self.elemental_damage_multiplier()
            * self.critical_damage_multiplier(is_critical_hit)
    }
}

fn percent_to_multiplier(percent: f64) -> f64 {
    1.0 + finite_or_zero(percent) / 100.0
}

/// One damage calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageInput {
    /// The weapon being fired
    pub weapon: Weapon,
    /// Selected difficulty tier
    pub difficulty: Difficulty,
    /// Defense category of the target
    pub enemy_type: EnemyType,
    /// Whether this hit lands on a critical spot
    pub is_critical_hit: bool,
    /// Attacker level
    pub player_level: i32,
    /// Target level
    pub enemy_level: i32,
    /// Optional percentage bonuses
    #[serde(default)]
    pub bonuses: BonusModifiers,
}
