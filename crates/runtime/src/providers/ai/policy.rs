use game_core::{Action, Board, GameConfig, MatchState, RosterEntry, RosterStore, Side, UnitTable};

/// Picks one action for `side`, or `None` when no unit can do anything.
///
/// Runs in `O(units × enemies)`. Ties on target health or distance go to the
/// enemy that comes first in roster order.
pub fn choose_action(side: Side, state: &MatchState, config: &GameConfig) -> Option<Action> {
    let units = &config.units;
    let board = config.board();
    let teams = state.teams(units);
    let (own, enemies) = match side {
        Side::Player => (teams.player, teams.computer),
        Side::Computer => (teams.computer, teams.player),
    };

    strike(&own, &enemies, board, units)
        .or_else(|| advance(&own, &enemies, state.roster(), board, units))
}

/// First unit with something in reach attacks the weakest enemy it reaches.
fn strike(
    own: &[&RosterEntry],
    enemies: &[&RosterEntry],
    board: Board,
    units: &UnitTable,
) -> Option<Action> {
    own.iter().find_map(|actor| {
        let range = units.attack_range(actor.unit.kind());
        enemies
            .iter()
            .filter(|enemy| board.distance(actor.position, enemy.position) <= range)
            .min_by(|a, b| a.unit.health().total_cmp(&b.unit.health()))
            .map(|target| Action::attack(actor.position, target.position))
    })
}

/// First unit that can close in on its nearest enemy steps toward it.
fn advance(
    own: &[&RosterEntry],
    enemies: &[&RosterEntry],
    roster: &RosterStore,
    board: Board,
    units: &UnitTable,
) -> Option<Action> {
    own.iter().find_map(|actor| {
        let nearest = enemies
            .iter()
            .min_by_key(|enemy| board.distance(actor.position, enemy.position))?;
        let range = units.move_range(actor.unit.kind());
        let destination = board.step_toward(actor.position, nearest.position, range, |cell| {
            roster.is_occupied(cell)
        });

        let reachable = destination != actor.position
            && !roster.is_occupied(destination)
            && board.distance(actor.position, destination) <= range;
        reachable.then(|| Action::movement(actor.position, destination))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ActionKind, Position, TurnState, Unit, UnitKind};

    fn p(index: usize) -> Position {
        Position::new(index)
    }

    fn state_with(units: &[(UnitKind, f64, usize)]) -> MatchState {
        let table = UnitTable::standard();
        let mut roster = RosterStore::new();
        for (kind, health, cell) in units {
            let profile = table.profile(*kind);
            let unit =
                Unit::from_parts(*kind, 1, profile.base_attack, profile.base_defence, *health)
                    .unwrap();
            roster.add(unit, p(*cell));
        }
        MatchState::new(TurnState::new(), roster)
    }

    #[test]
    fn attacks_weakest_reachable_enemy_with_first_capable_unit() {
        let config = GameConfig::new();
        let state = state_with(&[
            (UnitKind::Skeleton, 50.0, 63),
            (UnitKind::Vampire, 50.0, 20),
            (UnitKind::Archer, 40.0, 4),
            (UnitKind::Mage, 12.0, 36),
            (UnitKind::Swordsman, 12.0, 38),
        ]);

        let action = choose_action(Side::Computer, &state, &config).unwrap();

        assert_eq!(action, Action::attack(p(20), p(36)));
    }

    #[test]
    fn advances_toward_nearest_enemy_when_nothing_is_in_reach() {
        let config = GameConfig::new();
        let state = state_with(&[(UnitKind::Skeleton, 50.0, 7), (UnitKind::Archer, 50.0, 0)]);

        let action = choose_action(Side::Computer, &state, &config).unwrap();

        assert_eq!(action.kind, ActionKind::Move);
        assert_eq!(action, Action::movement(p(7), p(3)));
    }

    #[test]
    fn skips_units_that_cannot_move() {
        let config = GameConfig::new();
        // The demon's only step toward the mage lands on a skeleton, so the
        // vampire listed after it moves instead.
        let state = state_with(&[
            (UnitKind::Demon, 50.0, 7),
            (UnitKind::Vampire, 50.0, 55),
            (UnitKind::Skeleton, 50.0, 6),
            (UnitKind::Skeleton, 50.0, 14),
            (UnitKind::Skeleton, 50.0, 15),
            (UnitKind::Mage, 50.0, 48),
        ]);

        let action = choose_action(Side::Computer, &state, &config).unwrap();

        assert_eq!(action, Action::movement(p(55), p(53)));
    }

    #[test]
    fn passes_without_enemies() {
        let config = GameConfig::new();
        let state = state_with(&[(UnitKind::Skeleton, 50.0, 7)]);
        assert_eq!(choose_action(Side::Computer, &state, &config), None);
    }

    #[test]
    fn works_for_the_player_side_too() {
        let config = GameConfig::new();
        let state = state_with(&[(UnitKind::Archer, 50.0, 0), (UnitKind::Demon, 50.0, 2)]);
        assert_eq!(
            choose_action(Side::Player, &state, &config),
            Some(Action::attack(p(0), p(2)))
        );
    }
}
