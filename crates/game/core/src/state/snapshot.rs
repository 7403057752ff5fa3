//! Persistable projection of a match.
//!
//! The wire shape is camelCase JSON compatible with saves written by earlier
//! clients: unit kinds travel as free-form strings (legacy tags included) and
//! "no hovered cell" is encoded as `-1`.
use super::{
    MatchOutcome, MatchState, Position, RosterStore, Side, SnapshotError, TurnState, Unit,
    UnitKind,
};
use crate::config::GameConfig;

/// Persisted unit fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitRecord {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub level: u8,
    pub attack: f64,
    pub defence: f64,
    pub health: f64,
}

impl From<&Unit> for UnitRecord {
    fn from(unit: &Unit) -> Self {
        Self {
            kind: unit.kind().to_string(),
            level: unit.level(),
            attack: unit.attack(),
            defence: unit.defence(),
            health: unit.health(),
        }
    }
}

impl UnitRecord {
    fn to_unit(&self, position: usize) -> Result<Unit, SnapshotError> {
        let kind: UnitKind = self
            .kind
            .parse()
            .map_err(|_| SnapshotError::UnknownUnitKind(self.kind.clone()))?;
        Unit::from_parts(kind, self.level, self.attack, self.defence, self.health)
            .map_err(|source| SnapshotError::InvalidUnit { position, source })
    }
}

/// A unit and the cell it occupies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionedUnit {
    pub position: usize,
    pub character: UnitRecord,
}

/// Serializable projection of [`TurnState`] plus every roster entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Snapshot {
    pub current_theme: String,
    pub current_turn: Side,
    pub character_positions: Vec<PositionedUnit>,
    pub selected_character_index: Option<usize>,
    pub active_select_cell: i64,
    pub game_over: bool,
    pub max_score: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub score: u32,
}

impl Snapshot {
    pub const NO_CELL: i64 = -1;

    /// Projects `state` into its persisted form.
    pub fn capture(state: &MatchState, config: &GameConfig) -> Self {
        let turn = state.turn();
        let current_theme = config
            .theme(turn.theme_index)
            .map(str::to_owned)
            .unwrap_or_default();

        Self {
            current_theme,
            current_turn: turn.current_turn,
            character_positions: state
                .roster()
                .entries()
                .iter()
                .map(|entry| PositionedUnit {
                    position: entry.position.index(),
                    character: UnitRecord::from(&entry.unit),
                })
                .collect(),
            selected_character_index: turn.selected.map(Position::index),
            active_select_cell: turn
                .hovered
                .and_then(|cell| i64::try_from(cell.index()).ok())
                .unwrap_or(Self::NO_CELL),
            game_over: turn.is_game_over(),
            max_score: turn.max_score.max(turn.score),
            score: turn.score,
        }
    }

    /// Rebuilds a match, rejecting anything that violates the state invariants.
    ///
    /// A selection pointing at an empty cell is dropped rather than rejected,
    /// matching how a stale selection is handled during play. For a finished
    /// match the outcome is a victory iff player units remain.
    pub fn restore(&self, config: &GameConfig) -> Result<MatchState, SnapshotError> {
        let theme_index = config
            .theme_index(&self.current_theme)
            .ok_or_else(|| SnapshotError::UnknownTheme(self.current_theme.clone()))?;
        let board = config.board();
        let cells = board.cell_count();

        let mut roster = RosterStore::new();
        for placed in &self.character_positions {
            let position = Position::new(placed.position);
            if !board.contains(position) {
                return Err(SnapshotError::PositionOutOfBoard {
                    position: placed.position,
                    cells,
                });
            }
            if roster.is_occupied(position) {
                return Err(SnapshotError::DuplicatePosition {
                    position: placed.position,
                });
            }
            roster.add(placed.character.to_unit(placed.position)?, position);
        }

        let selected = match self.selected_character_index {
            Some(index) if index >= cells => {
                return Err(SnapshotError::SelectionOutOfBoard { index, cells });
            }
            Some(index) => Some(Position::new(index)).filter(|cell| {
                roster
                    .unit_at(*cell)
                    .is_some_and(|unit| config.units.side_of(unit.kind()) == Side::Player)
            }),
            None => None,
        };

        let hovered = usize::try_from(self.active_select_cell)
            .ok()
            .map(Position::new)
            .filter(|cell| board.contains(*cell));

        let fielded = |side: Side| {
            roster
                .entries()
                .iter()
                .any(|entry| config.units.side_of(entry.unit.kind()) == side)
        };
        // A match still in play must have someone on each side to move.
        if !self.game_over {
            for side in [Side::Player, Side::Computer] {
                if !fielded(side) {
                    return Err(SnapshotError::EmptyRoster { side });
                }
            }
        }
        let outcome = self.game_over.then(|| {
            if fielded(Side::Player) {
                MatchOutcome::Victory
            } else {
                MatchOutcome::Defeat
            }
        });

        let turn = TurnState {
            current_turn: self.current_turn,
            selected,
            hovered,
            theme_index,
            outcome,
            score: self.score,
            max_score: self.max_score.max(self.score),
        };

        Ok(MatchState::new(turn, roster))
    }
}
