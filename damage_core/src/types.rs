//! Core types - weapons and the closed damage/enemy classifications

use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage type dealt by a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Kinetic,
    Incendiary,
    Shock,
    Corrosive,
    Cryo,
    Radiation,
}

impl DamageType {
    /// Get all damage types
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Kinetic,
            DamageType::Incendiary,
            DamageType::Shock,
            DamageType::Corrosive,
            DamageType::Cryo,
            DamageType::Radiation,
        ]
    }

    /// Game-facing display name
    pub fn name(self) -> &'static str {
        match self {
            DamageType::Kinetic => "Kinetic",
            DamageType::Incendiary => "Incendiary",
            DamageType::Shock => "Shock",
            DamageType::Corrosive => "Corrosive",
            DamageType::Cryo => "Cryo",
            DamageType::Radiation => "Radiation",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weapon class - informational only, does not feed the damage pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    AssaultRifle,
    Shotgun,
    Pistol,
    Smg,
    SniperRifle,
    RocketLauncher,
    GrenadeMod,
}

impl WeaponType {
    /// Get all weapon types
    pub fn all() -> &'static [WeaponType] {
        &[
            WeaponType::AssaultRifle,
            WeaponType::Shotgun,
            WeaponType::Pistol,
            WeaponType::Smg,
            WeaponType::SniperRifle,
            WeaponType::RocketLauncher,
            WeaponType::GrenadeMod,
        ]
    }

    /// Game-facing display name
    pub fn name(self) -> &'static str {
        match self {
            WeaponType::AssaultRifle => "Assault Rifle",
            WeaponType::Shotgun => "Shotgun",
            WeaponType::Pistol => "Pistol",
            WeaponType::Smg => "SMG",
            WeaponType::SniperRifle => "Sniper Rifle",
            WeaponType::RocketLauncher => "Rocket Launcher",
            WeaponType::GrenadeMod => "Grenade Mod",
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enemy defense category targeted by an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyType {
    Flesh,
    Armor,
    Shield,
    Robot,
    Frozen,
}

impl EnemyType {
    /// Get all enemy types
    pub fn all() -> &'static [EnemyType] {
        &[
            EnemyType::Flesh,
            EnemyType::Armor,
            EnemyType::Shield,
            EnemyType::Robot,
            EnemyType::Frozen,
        ]
    }

    /// Game-facing display name
    pub fn name(self) -> &'static str {
        match self {
            EnemyType::Flesh => "Flesh",
            EnemyType::Armor => "Armor",
            EnemyType::Shield => "Shield",
            EnemyType::Robot => "Robot",
            EnemyType::Frozen => "Frozen",
        }
    }
}

impl fmt::Display for EnemyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Combat stats of a weapon instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Damage per projectile before any scaling
    pub base_damage: f64,
    /// Element carried by every projectile
    pub damage_type: DamageType,
    /// Weapon class (informational)
    pub weapon_type: WeaponType,
    /// Hits per second
    pub fire_rate: f64,
    /// Accuracy rating (informational)
    pub accuracy: f64,
    /// Damage multiplier applied on critical hits (>= 1.0)
    pub critical_multiplier: f64,
    /// Projectiles per shot for multi-projectile weapons
    #[serde(default)]
    pub pellet_count: Option<u32>,
    /// Splash damage amount (carried for catalog fidelity, unused by the calculation)
    #[serde(default)]
    pub splash_damage: Option<f64>,
    /// Splash radius (carried for catalog fidelity, unused by the calculation)
    #[serde(default)]
    pub splash_radius: Option<f64>,
}

/// A weapon instance from the catalog
///
/// Identity fields (id, name, manufacturer, rarity) are display-only;
/// only `level` and `stats` feed the damage pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Unique catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Manufacturer name
    pub manufacturer: String,
    /// Rarity tier name
    pub rarity: String,
    /// Item level, clamped to the valid level range when used for scaling
    pub level: i32,
    /// Combat stats
    pub stats: WeaponStats,
}

impl Weapon {
    /// Minimal level-1 sidearm, used as the catalog fallback and test fixture
    pub fn basic_pistol() -> Weapon {
        Weapon {
            id: "basic-pistol".to_string(),
            name: "Basic Pistol".to_string(),
            manufacturer: "None".to_string(),
            rarity: "Common".to_string(),
            level: 1,
            stats: WeaponStats {
                base_damage: 100.0,
                damage_type: DamageType::Kinetic,
                weapon_type: WeaponType::Pistol,
                fire_rate: 2.0,
                accuracy: 90.0,
                critical_multiplier: 1.5,
                pellet_count: None,
                splash_damage: None,
                splash_radius: None,
            },
        }
    }
}
