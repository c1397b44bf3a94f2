//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Core types
pub use crate::types::{DamageType, EnemyType, Weapon, WeaponStats, WeaponType};

// Damage engine
pub use crate::damage::{
    calculate_damage, calculate_damage_comparison, BonusModifiers, DamageBreakdown, DamageInput,
    DamageResult,
};

// Lookup tables
pub use crate::difficulty::{Difficulty, DifficultyModifiers};
pub use crate::effectiveness::{effectiveness_description, elemental_effectiveness, Effectiveness};

// Scaling
pub use crate::scaling::{calculate_level_scaling, calculate_weapon_scaling, clamp_level};

// Display helpers
pub use crate::format::format_damage;

// Config
pub use crate::config::default_weapons;
