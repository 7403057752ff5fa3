use game_core::{Action, ActionOutcome, MatchOutcome, Settlement, Side};

/// High-level occurrences in a match.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A fresh match started on the first theme.
    MatchStarted { theme: String },

    /// A unit of `side` moved or attacked.
    ActionResolved {
        side: Side,
        action: Action,
        outcome: ActionOutcome,
        settlement: Settlement,
    },

    /// A side had nothing to do and gave up its turn.
    TurnSkipped { side: Side },

    /// The computer roster was wiped out and play moved to `theme`.
    LevelCleared { theme: String, score_gained: u32 },

    /// The match ended.
    MatchEnded {
        outcome: MatchOutcome,
        score: u32,
        max_score: u32,
    },

    /// The snapshot was written to storage.
    Saved,

    /// A stored snapshot replaced the running match.
    Loaded,
}
