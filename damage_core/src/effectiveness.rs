//! Elemental effectiveness - damage type vs enemy defense category
//!
//! Every (enemy type, damage type) pair in the 5x6 domain has a defined
//! multiplier; the exhaustive match makes a missing entry a compile error
//! rather than a silent neutral fallback. Highlights:
//! - Shock shreds shields (2.0), Corrosive melts armor and robots (1.75)
//! - Robots barely notice radiation (0.1)
//! - Frozen enemies shatter under almost anything (3.0), except more cryo

use crate::types::{DamageType, EnemyType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Effectiveness multiplier for a damage type against an enemy defense category
pub fn elemental_effectiveness(enemy_type: EnemyType, damage_type: DamageType) -> f64 {
    use DamageType::*;
    use EnemyType::*;

    match (enemy_type, damage_type) {
        (Flesh, Kinetic) => 1.0,
        (Flesh, Incendiary) => 1.5,
        (Flesh, Shock) => 0.65,
        (Flesh, Corrosive) => 0.65,
        (Flesh, Cryo) => 1.0,
        (Flesh, Radiation) => 1.0,

        (Armor, Kinetic) => 1.0,
        (Armor, Incendiary) => 0.65,
        (Armor, Shock) => 0.65,
        (Armor, Corrosive) => 1.75,
        (Armor, Cryo) => 1.0,
        (Armor, Radiation) => 1.0,

        (Shield, Kinetic) => 1.0,
        (Shield, Incendiary) => 0.65,
        (Shield, Shock) => 2.0,
        (Shield, Corrosive) => 0.65,
        (Shield, Cryo) => 0.5,
        (Shield, Radiation) => 1.0,

        (Robot, Kinetic) => 1.0,
        (Robot, Incendiary) => 0.65,
        (Robot, Shock) => 1.5,
        (Robot, Corrosive) => 1.75,
        (Robot, Cryo) => 0.5,
        (Robot, Radiation) => 0.1,

        (Frozen, Kinetic) => 3.0,
        (Frozen, Incendiary) => 3.0,
        (Frozen, Shock) => 3.0,
        (Frozen, Corrosive) => 3.0,
        (Frozen, Cryo) => 1.0,
        (Frozen, Radiation) => 3.0,
    }
}

/// Qualitative effectiveness band for a multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    VeryEffective,
    Effective,
    SlightlyEffective,
    Normal,
    Resisted,
    HighlyResisted,
}

impl Effectiveness {
    /// Classify a multiplier into one of the six fixed bands
    ///
    /// Band thresholds: >= 2.0 very effective, >= 1.5 effective, > 1.0
    /// slightly effective, exactly 1.0 normal, >= 0.65 resisted, anything
    /// lower highly resisted.
    pub fn from_multiplier(multiplier: f64) -> Effectiveness {
        if multiplier >= 2.0 {
            Effectiveness::VeryEffective
        } else if multiplier >= 1.5 {
            Effectiveness::Effective
        } else if multiplier > 1.0 {
            Effectiveness::SlightlyEffective
        } else if multiplier >= 1.0 {
            Effectiveness::Normal
        } else if multiplier >= 0.65 {
            Effectiveness::Resisted
        } else {
            Effectiveness::HighlyResisted
        }
    }

    /// Game-facing description of this band
    pub fn description(self) -> &'static str {
        match self {
            Effectiveness::VeryEffective => "Very Effective",
            Effectiveness::Effective => "Effective",
            Effectiveness::SlightlyEffective => "Slightly Effective",
            Effectiveness::Normal => "Normal",
            Effectiveness::Resisted => "Resisted",
            Effectiveness::HighlyResisted => "Highly Resisted",
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Description for a raw multiplier, for callers that never touch the enum
pub fn effectiveness_description(multiplier: f64) -> &'static str {
    Effectiveness::from_multiplier(multiplier).description()
}
