//! Unit actions: one move or one attack per turn.
//!
//! An [`Action`] is plain data naming the acting cell and the destination or
//! target cell. Validation and mutation follow the two-phase
//! [`ActionTransition`] contract so callers never observe a partially applied
//! action.

pub mod error;

pub use error::ActionError;

use crate::combat::{AttackOutcome, resolve_attack};
use crate::config::GameConfig;
use crate::state::{MatchState, Position, Unit};

/// Defines how an action mutates match state.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &MatchState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action. Implementations assume `pre_validate` succeeded.
    fn apply(&self, state: &mut MatchState, config: &GameConfig)
    -> Result<Self::Result, Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Move,
    Attack,
}

/// One move or attack by the unit standing on `from`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub kind: ActionKind,
    pub from: Position,
    pub to: Position,
}

impl Action {
    pub const fn movement(from: Position, to: Position) -> Self {
        Self {
            kind: ActionKind::Move,
            from,
            to,
        }
    }

    pub const fn attack(from: Position, to: Position) -> Self {
        Self {
            kind: ActionKind::Attack,
            from,
            to,
        }
    }
}

/// What an applied action changed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    Moved {
        from: Position,
        to: Position,
    },
    Attacked {
        attacker: Position,
        target: Position,
        outcome: AttackOutcome,
    },
}

impl ActionOutcome {
    /// Cell whose unit died in this action, if any.
    pub fn casualty(&self) -> Option<Position> {
        match self {
            Self::Attacked {
                target, outcome, ..
            } if outcome.died => Some(*target),
            _ => None,
        }
    }
}

impl Action {
    fn source<'s>(&self, state: &'s MatchState) -> Result<&'s Unit, ActionError> {
        state
            .roster()
            .unit_at(self.from)
            .ok_or(ActionError::SourceMissing {
                position: self.from,
            })
    }
}

impl ActionTransition for Action {
    type Error = ActionError;
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &MatchState, config: &GameConfig) -> Result<(), Self::Error> {
        if state.turn().is_game_over() {
            return Err(ActionError::GameOver);
        }
        let board = config.board();
        for position in [self.from, self.to] {
            if !board.contains(position) {
                return Err(ActionError::OutOfBoard { position });
            }
        }

        let actor = self.source(state)?;
        let actor_side = config.units.side_of(actor.kind());
        if actor_side != state.turn().current_turn {
            return Err(ActionError::WrongSide {
                position: self.from,
                side: actor_side,
            });
        }

        let distance = board.distance(self.from, self.to);
        match self.kind {
            ActionKind::Move => {
                if state.roster().is_occupied(self.to) {
                    return Err(ActionError::Occupied { position: self.to });
                }
                let range = config.units.move_range(actor.kind());
                if distance > range {
                    return Err(ActionError::OutOfMoveRange {
                        target: self.to,
                        distance,
                        range,
                    });
                }
            }
            ActionKind::Attack => {
                let target = state
                    .roster()
                    .unit_at(self.to)
                    .ok_or(ActionError::TargetMissing { position: self.to })?;
                if config.units.side_of(target.kind()) == actor_side {
                    return Err(ActionError::FriendlyFire { target: self.to });
                }
                let range = config.units.attack_range(actor.kind());
                if distance > range {
                    return Err(ActionError::OutOfAttackRange {
                        target: self.to,
                        distance,
                        range,
                    });
                }
            }
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut MatchState,
        _config: &GameConfig,
    ) -> Result<Self::Result, Self::Error> {
        match self.kind {
            ActionKind::Move => {
                if !state.roster_mut().move_unit(self.from, self.to) {
                    return Err(ActionError::SourceMissing {
                        position: self.from,
                    });
                }
                Ok(ActionOutcome::Moved {
                    from: self.from,
                    to: self.to,
                })
            }
            ActionKind::Attack => {
                let attacker = self.source(state)?.clone();
                let defender = state
                    .roster_mut()
                    .unit_at_mut(self.to)
                    .ok_or(ActionError::TargetMissing { position: self.to })?;
                let outcome = resolve_attack(&attacker, defender);
                Ok(ActionOutcome::Attacked {
                    attacker: self.from,
                    target: self.to,
                    outcome,
                })
            }
        }
    }
}
