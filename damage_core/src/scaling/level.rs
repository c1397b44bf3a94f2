//! Level scaling - damage adjustment from the player/enemy level gap
//!
//! Scaling compounds at LEVEL_SCALING_BASE per level of difference, in the
//! player's favor when over-leveled and against them when under-leveled.
//!
//! Examples (with base 1.13):
//! - Equal levels: 1.0 (no adjustment)
//! - Player 5 levels above: 1.13^5 = 1.84
//! - Player 10 levels above: capped at 2.0
//! - Enemy 3 levels above: 1.13^-3 = 0.69
//! - Enemy 30 levels above: floored at 0.1

use super::constants::{
    LEVEL_SCALING_BASE, MAX_LEVEL, MIN_LEVEL, OVERLEVEL_CAP, UNDERLEVEL_FLOOR,
};

/// Clamp a level into the valid [MIN_LEVEL, MAX_LEVEL] range
///
/// Out-of-range levels are silently clamped, never rejected.
pub fn clamp_level(level: i32) -> i32 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Calculate the level scaling multiplier from player and enemy levels
///
/// Both levels are clamped before the gap is taken. Over-leveling rewards
/// cap at OVERLEVEL_CAP; under-leveling penalties floor at UNDERLEVEL_FLOOR
/// no matter how large the gap grows.
pub fn calculate_level_scaling(player_level: i32, enemy_level: i32) -> f64 {
    let clamped_player = clamp_level(player_level);
    let clamped_enemy = clamp_level(enemy_level);
    let difference = clamped_enemy - clamped_player;

    if difference <= 0 {
        // Player at or above enemy level: increased damage, capped at 2x
        return LEVEL_SCALING_BASE.powi(-difference).min(OVERLEVEL_CAP);
    }

    // Enemy above player level: reduced damage, never below 10%
    LEVEL_SCALING_BASE.powi(-difference).max(UNDERLEVEL_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_levels() {
        let scaling = calculate_level_scaling(50, 50);
        assert!((scaling - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overlevel_bonus() {
        // Player 3 levels above: 1.13^3 = 1.442897
        let scaling = calculate_level_scaling(53, 50);
        assert!((scaling - 1.13f64.powi(3)).abs() < f64::EPSILON);
        assert!(scaling > 1.0);
        assert!(scaling < 2.0);
    }

    #[test]
    fn test_overlevel_cap() {
        // 1.13^6 = 2.08 already exceeds the 2x cap
        let scaling = calculate_level_scaling(56, 50);
        assert!((scaling - 2.0).abs() < f64::EPSILON);

        // A massive lead still caps at 2x
        let scaling = calculate_level_scaling(72, 1);
        assert!((scaling - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_underlevel_penalty() {
        // Enemy 3 levels above: 1.13^-3 = 0.693
        let scaling = calculate_level_scaling(50, 53);
        assert!((scaling - 1.13f64.powi(-3)).abs() < f64::EPSILON);
        assert!(scaling < 1.0);
        assert!(scaling > 0.1);
    }

    #[test]
    fn test_underlevel_floor() {
        // 1.13^-19 = 0.098, below the floor
        let scaling = calculate_level_scaling(1, 20);
        assert!((scaling - 0.1).abs() < f64::EPSILON);

        // Maximum possible gap still yields exactly the floor
        let scaling = calculate_level_scaling(1, 72);
        assert!((scaling - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_levels_clamp() {
        // Levels clamp to [1, 72] before the gap is taken:
        // -50 -> 1 and 500 -> 72, a 71-level gap, floored at 0.1
        let scaling = calculate_level_scaling(-50, 500);
        assert!((scaling - 0.1).abs() < f64::EPSILON);

        // Both past the cap collapse to an equal-level match
        let scaling = calculate_level_scaling(100, 200);
        assert!((scaling - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_penalty_decreases_with_gap() {
        let mut previous = calculate_level_scaling(50, 51);
        for enemy_level in 52..=72 {
            let scaling = calculate_level_scaling(50, enemy_level);
            assert!(scaling <= previous);
            previous = scaling;
        }
    }

    #[test]
    fn test_clamp_level() {
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(-10), 1);
        assert_eq!(clamp_level(1), 1);
        assert_eq!(clamp_level(50), 50);
        assert_eq!(clamp_level(72), 72);
        assert_eq!(clamp_level(73), 72);
    }
}
