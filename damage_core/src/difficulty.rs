//! Difficulty tiers and their per-tier modifier table
//!
//! Thirteen fixed tiers: Normal, two Vault Hunter playthroughs, and ten
//! Mayhem levels. Each carries a health/damage/experience/loot modifier
//! record; only the damage axis feeds the damage pipeline. Tier order is
//! the escalation order, so the derived `Ord` gives the canonical sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Normal,
    TrueVaultHunter,
    UltimateVaultHunter,
    Mayhem1,
    Mayhem2,
    Mayhem3,
    Mayhem4,
    Mayhem5,
    Mayhem6,
    Mayhem7,
    Mayhem8,
    Mayhem9,
    Mayhem10,
}

/// Per-tier enemy and reward modifiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyModifiers {
    /// Enemy health multiplier
    pub health_multiplier: f64,
    /// Damage multiplier applied to outgoing damage
    pub damage_multiplier: f64,
    /// Experience gain multiplier
    pub experience_multiplier: f64,
    /// Loot quality/quantity multiplier
    pub loot_multiplier: f64,
}

impl DifficultyModifiers {
    /// Modifier record with the same multiplier on every axis (Mayhem tiers)
    pub fn uniform(multiplier: f64) -> DifficultyModifiers {
        DifficultyModifiers {
            health_multiplier: multiplier,
            damage_multiplier: multiplier,
            experience_multiplier: multiplier,
            loot_multiplier: multiplier,
        }
    }
}

impl Difficulty {
    /// All tiers in escalation order
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Normal,
            Difficulty::TrueVaultHunter,
            Difficulty::UltimateVaultHunter,
            Difficulty::Mayhem1,
            Difficulty::Mayhem2,
            Difficulty::Mayhem3,
            Difficulty::Mayhem4,
            Difficulty::Mayhem5,
            Difficulty::Mayhem6,
            Difficulty::Mayhem7,
            Difficulty::Mayhem8,
            Difficulty::Mayhem9,
            Difficulty::Mayhem10,
        ]
    }

    /// Modifier record for this tier
    pub fn modifiers(self) -> DifficultyModifiers {
        match self {
            Difficulty::Normal => DifficultyModifiers::uniform(1.0),
            Difficulty::TrueVaultHunter => DifficultyModifiers {
                health_multiplier: 2.5,
                damage_multiplier: 1.5,
                experience_multiplier: 1.5,
                loot_multiplier: 1.2,
            },
            Difficulty::UltimateVaultHunter => DifficultyModifiers {
                health_multiplier: 4.0,
                damage_multiplier: 2.0,
                experience_multiplier: 2.0,
                loot_multiplier: 1.5,
            },
            Difficulty::Mayhem1 => DifficultyModifiers::uniform(3.0),
            Difficulty::Mayhem2 => DifficultyModifiers::uniform(4.5),
            Difficulty::Mayhem3 => DifficultyModifiers::uniform(6.8),
            Difficulty::Mayhem4 => DifficultyModifiers::uniform(10.0),
            Difficulty::Mayhem5 => DifficultyModifiers::uniform(15.0),
            Difficulty::Mayhem6 => DifficultyModifiers::uniform(22.0),
            Difficulty::Mayhem7 => DifficultyModifiers::uniform(33.0),
            Difficulty::Mayhem8 => DifficultyModifiers::uniform(50.0),
            Difficulty::Mayhem9 => DifficultyModifiers::uniform(75.0),
            Difficulty::Mayhem10 => DifficultyModifiers::uniform(112.0),
        }
    }

    /// Outgoing damage multiplier for this tier
    pub fn damage_multiplier(self) -> f64 {
        self.modifiers().damage_multiplier
    }

    /// Game-facing display name
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Normal => "Normal",
            Difficulty::TrueVaultHunter => "True Vault Hunter Mode",
            Difficulty::UltimateVaultHunter => "Ultimate Vault Hunter Mode",
            Difficulty::Mayhem1 => "Mayhem 1",
            Difficulty::Mayhem2 => "Mayhem 2",
            Difficulty::Mayhem3 => "Mayhem 3",
            Difficulty::Mayhem4 => "Mayhem 4",
            Difficulty::Mayhem5 => "Mayhem 5",
            Difficulty::Mayhem6 => "Mayhem 6",
            Difficulty::Mayhem7 => "Mayhem 7",
            Difficulty::Mayhem8 => "Mayhem 8",
            Difficulty::Mayhem9 => "Mayhem 9",
            Difficulty::Mayhem10 => "Mayhem 10",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
