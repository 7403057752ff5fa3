//! Action validation errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, Side};

/// Reasons an action or a click was refused.
///
/// None of these leave the match half-mutated: validation runs before any
/// state change.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The match already ended.
    #[error("the game is over")]
    GameOver,

    /// Input arrived while the computer holds the turn.
    #[error("it is not the player's turn")]
    NotPlayerTurn,

    /// A cell index lies outside the board.
    #[error("cell {position} is outside the board")]
    OutOfBoard { position: Position },

    /// No unit stands on the acting cell.
    #[error("no unit at {position}")]
    SourceMissing { position: Position },

    /// No unit stands on the attacked cell.
    #[error("no target at {position}")]
    TargetMissing { position: Position },

    /// The selected cell no longer holds a player unit.
    #[error("selection at {position} is stale")]
    StaleSelection { position: Position },

    /// The acting unit belongs to the side that is not on turn.
    #[error("unit at {position} belongs to the {side} roster")]
    WrongSide { position: Position, side: Side },

    /// Destination already holds a unit.
    #[error("cell {position} is occupied")]
    Occupied { position: Position },

    /// Destination is farther than the unit can move.
    #[error("cell {target} is {distance} steps away, move range is {range}")]
    OutOfMoveRange {
        target: Position,
        distance: usize,
        range: usize,
    },

    /// Target is farther than the unit can strike.
    #[error("target {target} is {distance} steps away, attack range is {range}")]
    OutOfAttackRange {
        target: Position,
        distance: usize,
        range: usize,
    },

    /// Attacker and target belong to the same roster.
    #[error("unit at {target} is an ally")]
    FriendlyFire { target: Position },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            SourceMissing { .. } | TargetMissing { .. } | StaleSelection { .. } => {
                ErrorSeverity::StaleReference
            }
            GameOver | NotPlayerTurn | OutOfBoard { .. } | WrongSide { .. } => {
                ErrorSeverity::InvalidAction
            }
            Occupied { .. } | OutOfMoveRange { .. } | OutOfAttackRange { .. } => {
                ErrorSeverity::InvalidAction
            }
            FriendlyFire { .. } => ErrorSeverity::InvalidAction,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            GameOver => "ACTION_GAME_OVER",
            NotPlayerTurn => "ACTION_NOT_PLAYER_TURN",
            OutOfBoard { .. } => "ACTION_OUT_OF_BOARD",
            SourceMissing { .. } => "ACTION_SOURCE_MISSING",
            TargetMissing { .. } => "ACTION_TARGET_MISSING",
            StaleSelection { .. } => "ACTION_STALE_SELECTION",
            WrongSide { .. } => "ACTION_WRONG_SIDE",
            Occupied { .. } => "ACTION_OCCUPIED",
            OutOfMoveRange { .. } => "ACTION_OUT_OF_MOVE_RANGE",
            OutOfAttackRange { .. } => "ACTION_OUT_OF_ATTACK_RANGE",
            FriendlyFire { .. } => "ACTION_FRIENDLY_FIRE",
        }
    }
}
