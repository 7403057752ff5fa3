use crate::state::Unit;

/// Promotes a unit that survived a cleared level.
///
/// Attack and defence grow by a factor of `(80 + health) / 100` but never
/// drop; health is restored by 80 up to the cap. Every formula reads the
/// health from before the promotion.
pub fn level_up(unit: &mut Unit) {
    let health = unit.health();
    let grow = |stat: f64| stat.max(stat * (80.0 + health) / 100.0);

    let level = unit.level().saturating_add(1).min(Unit::MAX_LEVEL);
    let attack = grow(unit.attack());
    let defence = grow(unit.defence());

    unit.set_progression(level, attack, defence);
    unit.set_health((health + 80.0).min(Unit::MAX_HEALTH));
}
