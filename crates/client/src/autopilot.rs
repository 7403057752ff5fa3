//! Plays player turns with the built-in policy by issuing real clicks.
use anyhow::Result;
use game_core::{GameConfig, Side};
use runtime::{RuntimeHandle, choose_action};
use tracing::info;

/// Plays up to `turns` player turns. Returns how many were played.
pub async fn play(handle: &RuntimeHandle, config: &GameConfig, turns: u32) -> Result<u32> {
    for played in 0..turns {
        let state = handle.query_state().await?;
        if state.turn().is_game_over() {
            return Ok(played);
        }

        let Some(action) = choose_action(Side::Player, &state, config) else {
            info!("Autopilot has no move left after {} turns", played);
            return Ok(played);
        };

        if state.turn().selected != Some(action.from) {
            handle.cell_click(action.from).await?;
        }
        handle.cell_enter(action.to).await?;
        handle.cell_click(action.to).await?;
        handle.cell_leave(action.to).await?;
    }
    Ok(turns)
}
