use thiserror::Error;

use super::Side;
use crate::error::{ErrorSeverity, GameError};

/// Unit invariants violated while constructing or restoring a unit.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum UnitError {
    #[error("unit level {level} is outside 1..=4")]
    LevelOutOfRange { level: u8 },

    #[error("unit health {health} is outside 0..=100")]
    HealthOutOfRange { health: f64 },

    #[error("unit {stat} must be a finite non-negative number, got {value}")]
    InvalidStat { stat: &'static str, value: f64 },
}

impl GameError for UnitError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::CorruptedState
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LevelOutOfRange { .. } => "UNIT_LEVEL_OUT_OF_RANGE",
            Self::HealthOutOfRange { .. } => "UNIT_HEALTH_OUT_OF_RANGE",
            Self::InvalidStat { .. } => "UNIT_INVALID_STAT",
        }
    }
}

/// Reasons a persisted snapshot cannot be turned back into a match.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SnapshotError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("unknown unit kind `{0}`")]
    UnknownUnitKind(String),

    #[error("position {position} is outside a board of {cells} cells")]
    PositionOutOfBoard { position: usize, cells: usize },

    #[error("two units share position {position}")]
    DuplicatePosition { position: usize },

    #[error("invalid unit at position {position}: {source}")]
    InvalidUnit {
        position: usize,
        #[source]
        source: UnitError,
    },

    #[error("selected cell {index} is outside a board of {cells} cells")]
    SelectionOutOfBoard { index: usize, cells: usize },

    #[error("unfinished match has no {side} units")]
    EmptyRoster { side: Side },
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::CorruptedState
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTheme(_) => "SNAPSHOT_UNKNOWN_THEME",
            Self::UnknownUnitKind(_) => "SNAPSHOT_UNKNOWN_UNIT_KIND",
            Self::PositionOutOfBoard { .. } => "SNAPSHOT_POSITION_OUT_OF_BOARD",
            Self::DuplicatePosition { .. } => "SNAPSHOT_DUPLICATE_POSITION",
            Self::InvalidUnit { .. } => "SNAPSHOT_INVALID_UNIT",
            Self::SelectionOutOfBoard { .. } => "SNAPSHOT_SELECTION_OUT_OF_BOARD",
            Self::EmptyRoster { .. } => "SNAPSHOT_EMPTY_ROSTER",
        }
    }
}
