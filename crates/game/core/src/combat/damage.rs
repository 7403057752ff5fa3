//! Damage calculation and application.

use crate::state::Unit;

use super::round_display;

/// Smallest share of the attacker's attack that always gets through.
pub const MIN_DAMAGE_RATIO: f64 = 0.1;

/// Calculate damage from an attack.
///
/// ```text
/// damage = max(attack - defence, attack * MIN_DAMAGE_RATIO)
/// ```
pub fn calculate_damage(attack: f64, defence: f64) -> f64 {
    (attack - defence).max(attack * MIN_DAMAGE_RATIO)
}

/// Returns health after taking `damage`, clamped to zero.
pub fn apply_damage(health: f64, damage: f64) -> f64 {
    (health - damage).max(0.0)
}

/// What a single attack did to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    /// Exact damage subtracted from the defender's health.
    pub damage: f64,
    /// `damage` rounded for the floating damage label.
    pub displayed_damage: u32,
    /// True when the defender's health reached zero.
    pub died: bool,
}

/// Resolves one attack of `attacker` against `defender`.
pub fn resolve_attack(attacker: &Unit, defender: &mut Unit) -> AttackOutcome {
    let damage = calculate_damage(attacker.attack(), defender.defence());
    defender.set_health(apply_damage(defender.health(), damage));

    AttackOutcome {
        damage,
        displayed_damage: round_display(damage),
        died: defender.is_dead(),
    }
}
