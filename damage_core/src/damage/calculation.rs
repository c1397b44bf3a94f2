//! Damage calculation - turning a request into a DamageResult
//!
//! The pipeline is a chain of independent multipliers over the weapon's
//! base damage:
//!
//! 1. Pellet count folds into base damage (shotgun-style weapons)
//! 2. Weapon-level scaling and player/enemy level-gap scaling
//! 3. Difficulty tier multiplier
//! 4. Elemental effectiveness vs the enemy defense category
//! 5. Critical multiplier (flag-driven, never rolled)
//! 6. Resolved percentage bonuses
//!
//! Every step is deterministic; identical inputs produce identical results.

use super::finite_or_zero;
use super::input::DamageInput;
use super::result::{DamageBreakdown, DamageResult};
use crate::difficulty::Difficulty;
use crate::effectiveness::elemental_effectiveness;
use crate::scaling::{calculate_level_scaling, calculate_weapon_scaling};
use std::collections::BTreeMap;

/// Calculate damage per hit and per second for one request
pub fn calculate_damage(input: &DamageInput) -> DamageResult {
    let stats = &input.weapon.stats;

    // Pellet count multiplies base damage before any scaling
    let mut base_damage = finite_or_zero(stats.base_damage);
    if let Some(pellet_count) = stats.pellet_count {
        base_damage *= pellet_count as f64;
    }

    let level_scaling = calculate_level_scaling(input.player_level, input.enemy_level);
    let weapon_scaling = calculate_weapon_scaling(input.weapon.level);

    let difficulty_modifier = input.difficulty.damage_multiplier();
    let elemental_modifier = elemental_effectiveness(input.enemy_type, stats.damage_type);
    let critical_modifier = if input.is_critical_hit {
        stats.critical_multiplier
    } else {
        1.0
    };

    let weapon_bonus = input.bonuses.weapon_damage_multiplier();
    let elemental_bonus = input.bonuses.elemental_damage_multiplier();
    let critical_bonus = input
        .bonuses
        .critical_damage_multiplier(input.is_critical_hit);

    // Damage before difficulty/elemental/crit/bonus multipliers
    let scaled_damage = base_damage * weapon_scaling * level_scaling;

    let raw_final = scaled_damage
        * difficulty_modifier
        * elemental_modifier
        * critical_modifier
        * weapon_bonus
        * elemental_bonus
        * critical_bonus;

    // A zero or negative fire rate reports zero DPS, never a sign-flipped one
    let fire_rate = finite_or_zero(stats.fire_rate).max(0.0);

    // Rounding happens only at the reporting edge
    let final_damage = raw_final.round();
    let dps = (raw_final * fire_rate).round();
    let critical_damage = if input.is_critical_hit {
        final_damage
    } else {
        0.0
    };

    DamageResult {
        base_damage,
        scaled_damage,
        elemental_effectiveness: elemental_modifier,
        critical_damage,
        final_damage,
        dps,
        breakdown: DamageBreakdown {
            level_scaling,
            difficulty_modifier,
            elemental_modifier,
            critical_modifier,
            bonus_modifiers: weapon_bonus * elemental_bonus * critical_bonus,
        },
    }
}

/// Calculate the same request across every difficulty tier
///
/// The supplied input's own difficulty selection is ignored; every other
/// field is held fixed. The returned map iterates in the canonical
/// 13-tier escalation order.
pub fn calculate_damage_comparison(input: &DamageInput) -> BTreeMap<Difficulty, DamageResult> {
    let mut results = BTreeMap::new();

    for &difficulty in Difficulty::all() {
        let tier_input = DamageInput {
            difficulty,
            ..input.clone()
        };
        results.insert(difficulty, calculate_damage(&tier_input));
    }

    results
}
