//! Hit calculation - Base damage, dexterity bias and the random hit factor

use crate::config::CombatConstants;
use rand::Rng;

/// Damage before the hit factor: strength left over after the defender's armour
pub fn base_damage(strength: u32, armour: u32) -> u32 {
    strength.saturating_sub(armour)
}

/// Hit-factor bias from the dexterity difference between attacker and defender
///
/// Uses a saturating curve:
/// `bias = max_bias * d / (|d| + scale)` where `d = attacker - defender`
///
/// Strictly increasing in `d`, zero for equal dexterity, and always inside
/// `(-max_bias, max_bias)`.
pub fn dexterity_bias(attacker_dexterity: u32, defender_dexterity: u32, constants: &CombatConstants) -> f64 {
    let d = attacker_dexterity as f64 - defender_dexterity as f64;
    constants.max_dexterity_bias * d / (d.abs() + constants.dexterity_scale)
}

/// Roll the multiplier applied to base damage
///
/// `roll * (1 + bias)` with `roll` uniform in `[roll_min, roll_max]`, so the
/// factor never exceeds [`CombatConstants::max_hit_factor`].
pub fn hit_factor(
    attacker_dexterity: u32,
    defender_dexterity: u32,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> f64 {
    let roll = rng.gen_range(constants.roll_min..=constants.roll_max);
    roll * (1.0 + dexterity_bias(attacker_dexterity, defender_dexterity, constants))
}

/// Final damage of one exchange; never less than 1
pub fn exchange_damage(base: u32, factor: f64) -> u32 {
    let scaled = (base as f64 * factor).round();
    // `as` saturates on out-of-range floats
    (scaled as u32).max(1)
}
