//! Weapon-level scaling - higher-level weapon instances hit exponentially harder

use super::constants::LEVEL_SCALING_BASE;
use super::level::clamp_level;

/// Calculate the damage scaling for a weapon of the given item level
///
/// A level-1 weapon scales at 1.0; each level above that compounds at
/// LEVEL_SCALING_BASE. Unlike the player/enemy gap scaling this is
/// uncapped: a level-72 weapon scales at 1.13^71.
pub fn calculate_weapon_scaling(weapon_level: i32) -> f64 {
    let clamped_level = clamp_level(weapon_level);
    LEVEL_SCALING_BASE.powi(clamped_level - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_is_neutral() {
        let scaling = calculate_weapon_scaling(1);
        assert!((scaling - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_level_fifty() {
        // 1.13^49 = 398.9
        let scaling = calculate_weapon_scaling(50);
        assert!((scaling - 1.13f64.powi(49)).abs() < f64::EPSILON);
        assert!(scaling > 398.0);
        assert!(scaling < 400.0);
    }

    #[test]
    fn test_uncapped_at_max_level() {
        // No 2x cap here: level 72 scales at 1.13^71
        let scaling = calculate_weapon_scaling(72);
        assert!((scaling - 1.13f64.powi(71)).abs() < 1e-9);
        assert!(scaling > 2.0);
    }

    #[test]
    fn test_out_of_range_levels_clamp() {
        let below = calculate_weapon_scaling(0);
        assert!((below - 1.0).abs() < f64::EPSILON);

        let above = calculate_weapon_scaling(100);
        assert!((above - calculate_weapon_scaling(72)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strictly_increasing() {
        let mut previous = calculate_weapon_scaling(1);
        for level in 2..=72 {
            let scaling = calculate_weapon_scaling(level);
            assert!(scaling > previous);
            previous = scaling;
        }
    }
}
