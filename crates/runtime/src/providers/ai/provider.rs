//! Greedy AI action provider.

use async_trait::async_trait;
use game_core::{Action, GameConfig, MatchState, Side};

use super::policy::choose_action;
use crate::api::{ActionProvider, Result};

/// Provider that runs [`choose_action`] for whichever side asks.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAiProvider;

impl GreedyAiProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ActionProvider for GreedyAiProvider {
    async fn provide_action(
        &self,
        side: Side,
        state: &MatchState,
        config: &GameConfig,
    ) -> Result<Option<Action>> {
        let action = choose_action(side, state, config);
        match &action {
            Some(action) => tracing::debug!(
                "{} AI chose {} {} -> {}",
                side,
                action.kind,
                action.from,
                action.to
            ),
            None => tracing::debug!("{} AI found nothing to do", side),
        }
        Ok(action)
    }
}
