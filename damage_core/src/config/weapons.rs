//! Weapon catalog loading

use super::ConfigError;
use crate::scaling::constants::{MAX_LEVEL, MIN_LEVEL};
use crate::types::Weapon;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for weapon catalog entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponsConfig {
    #[serde(rename = "weapons")]
    pub weapons: Vec<Weapon>,
}

/// Load a weapon catalog from a TOML file
pub fn load_weapon_configs(path: &Path) -> Result<HashMap<String, Weapon>, ConfigError> {
    let config: WeaponsConfig = super::load_toml(path)?;
    build_catalog(config)
}

/// Load a weapon catalog from a TOML string
pub fn parse_weapon_configs(content: &str) -> Result<HashMap<String, Weapon>, ConfigError> {
    let config: WeaponsConfig = super::parse_toml(content)?;
    build_catalog(config)
}

fn build_catalog(config: WeaponsConfig) -> Result<HashMap<String, Weapon>, ConfigError> {
    let mut map = HashMap::new();
    for weapon in config.weapons {
        validate_weapon(&weapon)?;
        if map.contains_key(&weapon.id) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate weapon id '{}'",
                weapon.id
            )));
        }
        map.insert(weapon.id.clone(), weapon);
    }
    Ok(map)
}

/// Reject catalog entries the engine would only be able to neutralize
///
/// The engine itself clamps and falls back rather than failing, so bad
/// data has to be caught here at the loading edge.
fn validate_weapon(weapon: &Weapon) -> Result<(), ConfigError> {
    let stats = &weapon.stats;

    if !stats.base_damage.is_finite() || stats.base_damage <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "weapon '{}' has non-positive base damage",
            weapon.id
        )));
    }
    if !stats.fire_rate.is_finite() || stats.fire_rate <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "weapon '{}' has non-positive fire rate",
            weapon.id
        )));
    }
    if !stats.critical_multiplier.is_finite() || stats.critical_multiplier < 1.0 {
        return Err(ConfigError::ValidationError(format!(
            "weapon '{}' has critical multiplier below 1.0",
            weapon.id
        )));
    }
    if weapon.level < MIN_LEVEL || weapon.level > MAX_LEVEL {
        return Err(ConfigError::ValidationError(format!(
            "weapon '{}' has level {} outside [{}, {}]",
            weapon.id, weapon.level, MIN_LEVEL, MAX_LEVEL
        )));
    }
    if stats.pellet_count == Some(0) {
        return Err(ConfigError::ValidationError(format!(
            "weapon '{}' has a zero pellet count",
            weapon.id
        )));
    }

    Ok(())
}

/// Get the built-in sample weapon catalog
pub fn default_weapons() -> HashMap<String, Weapon> {
    let toml = include_str!("../../config/weapons.toml");
    parse_weapon_configs(toml).unwrap_or_else(|_| {
        let pistol = Weapon::basic_pistol();
        let mut map = HashMap::new();
        map.insert(pistol.id.clone(), pistol);
        map
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DamageType, WeaponType};

    #[test]
    fn test_parse_weapons() {
        let toml = r#"
[[weapons]]
id = "maliwan-smg-1"
name = "Maliwan Pulsar"
manufacturer = "Maliwan"
rarity = "Rare"
level = 50

[weapons.stats]
base_damage = 850.0
damage_type = "shock"
weapon_type = "smg"
fire_rate = 8.5
accuracy = 75.0
critical_multiplier = 1.5
"#;

        let weapons = parse_weapon_configs(toml).unwrap();
        assert!(weapons.contains_key("maliwan-smg-1"));

        let pulsar = &weapons["maliwan-smg-1"];
        assert_eq!(pulsar.name, "Maliwan Pulsar");
        assert_eq!(pulsar.stats.damage_type, DamageType::Shock);
        assert_eq!(pulsar.stats.weapon_type, WeaponType::Smg);
        assert!((pulsar.stats.fire_rate - 8.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let toml = r#"
[[weapons]]
id = "broken"
name = "Broken"
manufacturer = "None"
rarity = "Common"
level = 10

[weapons.stats]
base_damage = -5.0
damage_type = "kinetic"
weapon_type = "pistol"
fire_rate = 1.0
accuracy = 50.0
critical_multiplier = 1.5
"#;

        let err = parse_weapon_configs(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let toml = r#"
[[weapons]]
id = "dup"
name = "First"
manufacturer = "None"
rarity = "Common"
level = 10

[weapons.stats]
base_damage = 100.0
damage_type = "kinetic"
weapon_type = "pistol"
fire_rate = 1.0
accuracy = 50.0
critical_multiplier = 1.5

[[weapons]]
id = "dup"
name = "Second"
manufacturer = "None"
rarity = "Common"
level = 10

[weapons.stats]
base_damage = 100.0
damage_type = "kinetic"
weapon_type = "pistol"
fire_rate = 1.0
accuracy = 50.0
critical_multiplier = 1.5
"#;

        let err = parse_weapon_configs(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_default_weapons_loads_all() {
        let weapons = default_weapons();

        // Should have 5 weapons from config
        assert_eq!(weapons.len(), 5, "Expected 5 weapons from config");

        let expected = [
            "jakobs-pistol-1",
            "maliwan-smg-1",
            "hyperion-shotgun-1",
            "vladof-assault-1",
            "dahl-sniper-1",
        ];

        for id in expected {
            assert!(weapons.contains_key(id), "Missing weapon: {}", id);
        }
    }

    #[test]
    fn test_default_catalog_details() {
        let weapons = default_weapons();

        let butcher = &weapons["hyperion-shotgun-1"];
        assert_eq!(butcher.stats.pellet_count, Some(8));
        assert_eq!(butcher.stats.weapon_type, WeaponType::Shotgun);

        let sandhawk = &weapons["dahl-sniper-1"];
        assert_eq!(sandhawk.stats.damage_type, DamageType::Corrosive);
        assert_eq!(sandhawk.rarity, "Legendary");
        assert!((sandhawk.stats.critical_multiplier - 3.5).abs() < f64::EPSILON);
    }
}
