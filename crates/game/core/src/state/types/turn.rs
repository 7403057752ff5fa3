use super::{Position, Side};

/// How a finished match ended, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MatchOutcome {
    Victory,
    Defeat,
}

/// Per-match turn bookkeeping.
///
/// Created with defaults at match start, mutated only by the engine and
/// replaced wholesale on "new game" or "load game".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Roster allowed to act next.
    pub current_turn: Side,

    /// Cell of the player unit currently chosen, if any.
    pub selected: Option<Position>,

    /// Last cell hovered while a unit was selected; its highlight is cleared
    /// on the next hover.
    pub hovered: Option<Position>,

    /// Ordinal into `GameConfig::themes`.
    pub theme_index: usize,

    /// `Some` once the match has ended.
    pub outcome: Option<MatchOutcome>,

    /// Score accumulated in this match.
    pub score: u32,

    /// Best score seen by this runtime; survives "new game".
    pub max_score: u32,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            current_turn: Side::Player,
            selected: None,
            hovered: None,
            theme_index: 0,
            outcome: None,
            score: 0,
            max_score: 0,
        }
    }

    /// Fresh turn state that keeps the best score of the previous match.
    pub fn carry_over(previous: &TurnState) -> Self {
        Self {
            max_score: previous.max_score.max(previous.score),
            ..Self::new()
        }
    }

    pub const fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.max_score = self.max_score.max(self.score);
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
