//! Pure damage arithmetic shared by move resolution and the move-choice AI.

/// (2 * level / 5 + 2), unfloored.
fn level_factor(level: u8) -> f64 {
    2.0 * level as f64 / 5.0 + 2.0
}

/// floor(floor(level_factor * power * attack / defense) / 50) + 2
pub fn base_damage(level: u8, power: u8, attack: u16, defense: u16) -> f64 {
    let defense = defense.max(1) as f64;
    let raw = (level_factor(level) * power as f64 * attack as f64 / defense).floor();
    (raw / 50.0).floor() + 2.0
}

/// Apply the combined modifier and floor; any hit that lands deals at least 1.
pub fn final_damage(base: f64, modifier: f64) -> u16 {
    let damage = (base * modifier).floor();
    damage.clamp(1.0, u16::MAX as f64) as u16
}

/// Deterministic damage estimate without crit or random roll.
pub fn expected_damage(
    level: u8,
    power: u8,
    attack: u16,
    defense: u16,
    stab: f64,
    type_multiplier: f64,
) -> f64 {
    let ratio = attack as f64 / defense.max(1) as f64;
    let base = level_factor(level) * power as f64 * ratio;
    ((base / 50.0 + 2.0) * stab * type_multiplier).floor().max(1.0)
}

/// 0.85 + unit * 0.15
pub fn damage_roll(unit: f64) -> f64 {
    0.85 + unit * 0.15
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_damage_formula() {
        // level 5: factor 4; 4 * 40 * 11 / 9 = 195.5 -> 195; 195 / 50 = 3.9 -> 3; + 2
        assert_eq!(base_damage(5, 40, 11, 9), 5.0);
        // level 50: factor 22; 22 * 90 * 100 / 100 = 1980; 1980 / 50 = 39.6 -> 39; + 2
        assert_eq!(base_damage(50, 90, 100, 100), 41.0);
    }

    #[test]
    fn test_final_damage_floors_and_has_floor_of_one() {
        assert_eq!(final_damage(5.0, 0.5 * 0.85), 2);
        assert_eq!(final_damage(2.0, 0.25 * 0.85), 1);
        assert_eq!(final_damage(41.0, 1.5 * 2.0), 123);
    }

    #[test]
    fn test_expected_damage() {
        // 22 * 90 * 1.0 / 50 + 2 = 41.6; * 1.5 * 2 = 124.8
        assert_eq!(expected_damage(50, 90, 100, 100, 1.5, 2.0), 124.0);
        assert_eq!(expected_damage(1, 10, 5, 500, 1.0, 0.25), 1.0);
    }

    #[test]
    fn test_damage_roll_range() {
        assert_eq!(damage_roll(0.0), 0.85);
        assert!((damage_roll(1.0) - 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_damage_never_rounds_up(
            level in 1u8..=100,
            attack in 1u16..400,
            defense in 1u16..400,
            roll in 0.0f64..1.0,
        ) {
            // A 40-power Fire move into a Grass/Poison defender: STAB, 0.5x
            let base = base_damage(level, 40, attack, defense);
            let modifier = 1.5 * 0.5 * damage_roll(roll);
            let damage = final_damage(base, modifier) as f64;
            prop_assert!(damage >= 1.0);
            prop_assert!(damage <= (base * modifier).max(1.0));
        }
    }
}
