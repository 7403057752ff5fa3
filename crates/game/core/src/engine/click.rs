use crate::action::{Action, ActionError};
use crate::state::{MatchOutcome, Position, Side, TurnState, Unit};

use super::GameEngine;

/// Coarse state-machine phase derived from [`TurnState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Player's turn, no unit chosen.
    AwaitingSelection,
    /// Player's turn with the unit on this cell chosen.
    UnitSelected(Position),
    /// Computer holds the turn.
    ComputerTurn,
    GameOver { won: bool },
}

impl Phase {
    pub fn of(turn: &TurnState) -> Self {
        if let Some(outcome) = turn.outcome {
            return Self::GameOver {
                won: outcome == MatchOutcome::Victory,
            };
        }
        match (turn.current_turn, turn.selected) {
            (Side::Computer, _) => Self::ComputerTurn,
            (Side::Player, Some(cell)) => Self::UnitSelected(cell),
            (Side::Player, None) => Self::AwaitingSelection,
        }
    }
}

/// Result of interpreting a player click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A player unit became selected; `previous` lost its selection.
    Selected {
        position: Position,
        previous: Option<Position>,
    },
    /// The click asks for this action; pass it to [`GameEngine::execute`].
    Action(Action),
    /// Nothing to do (e.g. an empty cell with nothing selected).
    Ignored,
}

/// Click handling for GameEngine.
impl<'a> GameEngine<'a> {
    pub fn phase(&self) -> Phase {
        Phase::of(self.state.turn())
    }

    /// Interprets a click on `cell` during the player's turn.
    ///
    /// Only selection changes mutate state here; moves and attacks are
    /// returned as an [`Action`] so the caller can run them through
    /// [`GameEngine::execute`]. A selection whose unit disappeared is cleared
    /// and reported as [`ActionError::StaleSelection`].
    pub fn click(&mut self, cell: Position) -> Result<ClickOutcome, ActionError> {
        let turn = self.state.turn();
        if turn.is_game_over() {
            return Err(ActionError::GameOver);
        }
        if turn.current_turn != Side::Player {
            return Err(ActionError::NotPlayerTurn);
        }
        let board = self.config.board();
        if !board.contains(cell) {
            return Err(ActionError::OutOfBoard { position: cell });
        }

        let Some(selected) = turn.selected else {
            if self.is_player_unit(cell) {
                self.state.turn_mut().selected = Some(cell);
                return Ok(ClickOutcome::Selected {
                    position: cell,
                    previous: None,
                });
            }
            return Ok(ClickOutcome::Ignored);
        };

        let Some(kind) = self.player_unit(selected).map(Unit::kind) else {
            let turn = self.state.turn_mut();
            turn.selected = None;
            turn.hovered = None;
            return Err(ActionError::StaleSelection { position: selected });
        };

        if self.is_player_unit(cell) {
            if cell == selected {
                return Ok(ClickOutcome::Ignored);
            }
            self.state.turn_mut().selected = Some(cell);
            return Ok(ClickOutcome::Selected {
                position: cell,
                previous: Some(selected),
            });
        }

        let distance = board.distance(selected, cell);
        let units = &self.config.units;
        if self.state.roster().is_occupied(cell) {
            let range = units.attack_range(kind);
            if distance <= range {
                return Ok(ClickOutcome::Action(Action::attack(selected, cell)));
            }
            return Err(ActionError::OutOfAttackRange {
                target: cell,
                distance,
                range,
            });
        }

        let range = units.move_range(kind);
        if distance <= range {
            return Ok(ClickOutcome::Action(Action::movement(selected, cell)));
        }
        Err(ActionError::OutOfMoveRange {
            target: cell,
            distance,
            range,
        })
    }

    pub(super) fn player_unit(&self, cell: Position) -> Option<&Unit> {
        self.state
            .roster()
            .unit_at(cell)
            .filter(|unit| self.config.units.side_of(unit.kind()) == Side::Player)
    }

    pub(super) fn is_player_unit(&self, cell: Position) -> bool {
        self.player_unit(cell).is_some()
    }
}
