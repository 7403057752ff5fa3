//! Property-based tests for board geometry, combat and progression.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use game_core::{
    Board, BorderSide, Position, Unit, UnitKind, calculate_damage, level_up, resolve_attack,
};

fn kind_strategy() -> impl Strategy<Value = UnitKind> {
    prop::sample::select(UnitKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Chebyshev distance is symmetric and zero exactly on the diagonal.
    #[test]
    fn prop_distance_symmetric(size in 2usize..16, a in 0usize..256, b in 0usize..256) {
        let board = Board::new(size);
        let (a, b) = (Position::new(a % board.cell_count()), Position::new(b % board.cell_count()));

        prop_assert_eq!(board.distance(a, b), board.distance(b, a));
        prop_assert_eq!(board.distance(a, a), 0);
        prop_assert_eq!(board.distance(a, b) == 0, a == b);
    }

    /// Border columns hold the two outermost columns and never overlap on
    /// boards of side four or more.
    #[test]
    fn prop_border_columns_disjoint(size in 4usize..16) {
        let board = Board::new(size);
        let first = board.border_columns(BorderSide::First);
        let last = board.border_columns(BorderSide::Last);

        prop_assert_eq!(first.len(), 2 * size);
        prop_assert!(first.iter().all(|cell| board.col(*cell) < 2));
        prop_assert!(last.iter().all(|cell| board.col(*cell) >= size - 2));
        prop_assert!(first.iter().all(|cell| !last.contains(cell)));
    }

    /// Stepping stays on the board, within budget, and off occupied cells.
    #[test]
    fn prop_step_toward_respects_budget_and_occupancy(
        size in 2usize..12,
        from in 0usize..144,
        to in 0usize..144,
        budget in 0usize..6,
        blocked in prop::collection::vec(0usize..144, 0..12),
    ) {
        let board = Board::new(size);
        let cells = board.cell_count();
        let (from, to) = (Position::new(from % cells), Position::new(to % cells));
        let blocked: Vec<Position> = blocked
            .into_iter()
            .map(|cell| Position::new(cell % cells))
            .filter(|cell| *cell != from)
            .collect();

        let step = board.step_toward(from, to, budget, |cell| blocked.contains(&cell));

        prop_assert!(board.contains(step));
        prop_assert!(board.distance(from, step) <= budget);
        prop_assert!(step == from || !blocked.contains(&step));
    }

    /// Damage always lets a tenth of the attack through and health never goes
    /// negative.
    #[test]
    fn prop_damage_floor_and_health_clamp(
        attack in 0.0f64..200.0,
        defence in 0.0f64..200.0,
        health in 0.0f64..=100.0,
        kind in kind_strategy(),
    ) {
        prop_assert!(calculate_damage(attack, defence) >= attack * 0.1);

        let attacker = Unit::from_parts(kind, 1, attack, 10.0, 50.0).unwrap();
        let mut defender = Unit::from_parts(kind, 1, 10.0, defence, health).unwrap();
        let outcome = resolve_attack(&attacker, &mut defender);

        prop_assert!(defender.health() >= 0.0);
        prop_assert!(defender.health() <= health);
        prop_assert_eq!(outcome.died, defender.health() == 0.0);
    }

    /// Level-up never lowers a stat and raises the level by one up to the cap.
    #[test]
    fn prop_level_up_monotonic(
        level in 1u8..=4,
        attack in 0.0f64..200.0,
        defence in 0.0f64..200.0,
        health in 0.0f64..=100.0,
        kind in kind_strategy(),
    ) {
        let mut unit = Unit::from_parts(kind, level, attack, defence, health).unwrap();
        level_up(&mut unit);

        prop_assert_eq!(unit.level(), (level + 1).min(Unit::MAX_LEVEL));
        prop_assert!(unit.attack() >= attack);
        prop_assert!(unit.defence() >= defence);
        prop_assert!(unit.health() >= health);
        prop_assert!(unit.health() <= Unit::MAX_HEALTH);
    }
}
