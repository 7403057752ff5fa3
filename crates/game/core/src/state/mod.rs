//! Authoritative match state representation.
//!
//! This module owns the data structures that describe units, rosters and turn
//! bookkeeping, plus the snapshot projection used for persistence. Runtime
//! layers clone or query this state but mutate it exclusively through the
//! engine.
pub mod error;
pub mod roster;
pub mod snapshot;
pub mod team;
pub mod types;

pub use error::{SnapshotError, UnitError};
pub use roster::{Partition, RosterEntry, RosterStore};
pub use snapshot::{PositionedUnit, Snapshot, UnitRecord};
pub use team::{Team, generate_team};
pub use types::{
    HealthLevel, MatchOutcome, Position, Side, TurnState, Unit, UnitKind, UnitProfile, UnitTable,
};

/// Canonical state of one match: turn bookkeeping plus every unit on the board.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchState {
    turn: TurnState,
    roster: RosterStore,
}

impl MatchState {
    /// Creates a state from its parts (used by scenarios and snapshot restore).
    pub fn new(turn: TurnState, roster: RosterStore) -> Self {
        Self { turn, roster }
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn into_parts(self) -> (TurnState, RosterStore) {
        (self.turn, self.roster)
    }

    pub(crate) fn turn_mut(&mut self) -> &mut TurnState {
        &mut self.turn
    }

    pub(crate) fn roster_mut(&mut self) -> &mut RosterStore {
        &mut self.roster
    }

    /// Splits the roster into player and computer entries using the unit table.
    pub fn teams<'a>(&'a self, units: &UnitTable) -> Partition<'a> {
        self.roster.partition(|unit| units.side_of(unit.kind()) == Side::Player)
    }
}
