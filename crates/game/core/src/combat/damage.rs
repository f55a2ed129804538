//! Damage calculation.

use crate::state::Attributes;

/// Offset applied per point of attack above defense, in per-mille.
const ADVANTAGE_PER_POINT: i64 = 50;
/// Offset applied per point of attack below defense, in per-mille.
const DISADVANTAGE_PER_POINT: i64 = 25;

/// Damage one strike of `attacker` deals to `defender`.
///
/// # Formula
///
/// ```text
/// off  = (attack - defense) * 0.05    if attack > defense
///      = (attack - defense) * 0.025   if attack < defense
///      = 0                            otherwise
/// hurt = floor(base_damage * (1 + off))
/// ```
///
/// Evaluated in per-mille integers so the floor is exact.
pub fn hurt(attacker: &Attributes, defender: &Attributes) -> i32 {
    let gap = i64::from(attacker.attack) - i64::from(defender.defense);
    let offset = match gap {
        gap if gap > 0 => gap * ADVANTAGE_PER_POINT,
        gap if gap < 0 => gap * DISADVANTAGE_PER_POINT,
        _ => 0,
    };
    let scaled = i64::from(attacker.base_damage) * (1000 + offset);
    scaled
        .div_euclid(1000)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Strikes needed beyond the first to bring `health` to zero.
///
/// `hurt <= 0` never kills and yields `i32::MAX`.
pub fn kill_time(health: i32, hurt: i32) -> i32 {
    if hurt <= 0 {
        return i32::MAX;
    }
    (health - 1).max(0).div_euclid(hurt)
}
