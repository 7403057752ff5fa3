//! Asynchronous abstraction for sourcing computer (or scripted) intent.
//!
//! Runtime users plug in [`ActionProvider`] implementations so the computer
//! side can run the built-in policy, scripted fixtures, or a remote agent.
use async_trait::async_trait;
use game_core::{Action, GameConfig, MatchState, Side};

use super::errors::Result;

/// Trait for providing actions based on the current match state.
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Picks at most one action for `side`.
    ///
    /// `Ok(None)` means the side has nothing useful to do; its turn is still
    /// consumed.
    async fn provide_action(
        &self,
        side: Side,
        state: &MatchState,
        config: &GameConfig,
    ) -> Result<Option<Action>>;
}

/// A provider that never acts.
/// Useful for testing or as a fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleActionProvider;

#[async_trait]
impl ActionProvider for IdleActionProvider {
    async fn provide_action(
        &self,
        _side: Side,
        _state: &MatchState,
        _config: &GameConfig,
    ) -> Result<Option<Action>> {
        Ok(None)
    }
}
