//! Turn state machine and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`MatchState`]. Each
//! step is pure and synchronous; the runtime decides when to call the next
//! one (for example after a damage animation finished or a pacing delay
//! elapsed):
//!
//! ```text
//! click ──▶ execute ──▶ (await damage display) ──▶ settle
//!                                                   │
//!             computer turn: provider ─▶ execute ───┘ or pass_turn
//! ```

mod click;
mod hover;
mod turns;

pub use click::{ClickOutcome, Phase};
pub use hover::{HighlightColor, HoverHint, PointerStyle};
pub use turns::Settlement;

use crate::action::{Action, ActionError, ActionOutcome, ActionTransition};
use crate::config::GameConfig;
use crate::state::MatchState;

/// Game engine that validates and applies actions and drives turn hand-off.
///
/// Borrows the state mutably for the duration of one step, so a single
/// owner (the runtime worker) serialises every mutation.
pub struct GameEngine<'a> {
    state: &'a mut MatchState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut MatchState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &MatchState {
        self.state
    }

    /// Validates and applies one action.
    ///
    /// On success the selection and hover marker are cleared. When the acting
    /// unit or its target vanished the selection is cleared as well and the
    /// error is returned; every other rejection leaves the state untouched.
    /// Dead units stay on the board until [`GameEngine::settle`].
    pub fn execute(&mut self, action: Action) -> Result<ActionOutcome, ActionError> {
        if let Err(error) = action.pre_validate(self.state, self.config) {
            if matches!(
                error,
                ActionError::SourceMissing { .. } | ActionError::TargetMissing { .. }
            ) {
                self.clear_selection();
            }
            return Err(error);
        }

        let outcome = action.apply(self.state, self.config)?;
        self.clear_selection();
        Ok(outcome)
    }

    fn clear_selection(&mut self) {
        let turn = self.state.turn_mut();
        turn.selected = None;
        turn.hovered = None;
    }
}
