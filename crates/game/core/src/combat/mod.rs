//! Combat resolution and progression.
//!
//! Pure functions over [`Unit`](crate::state::Unit) values. Attacks lower the
//! defender's health and report death; they never remove anything from the
//! roster. Removal and end-of-roster handling belong to the engine.
//!
//! - `calculate_damage`: attack minus defence, floored at a tenth of attack
//! - `resolve_attack`: applies damage to the defender
//! - `level_up`: promotes a surviving unit between levels

pub mod damage;
pub mod progression;

pub use damage::{AttackOutcome, MIN_DAMAGE_RATIO, apply_damage, calculate_damage, resolve_attack};
pub use progression::level_up;

/// Rounds to the nearest integer with halves going up, as displayed damage
/// and score are shown.
pub(crate) fn round_display(value: f64) -> u32 {
    let rounded = (value + 0.5).floor();
    if rounded <= 0.0 { 0 } else { rounded as u32 }
}
