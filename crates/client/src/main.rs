//! Terminal client for the skirmish tactics game.
//!
//! Composition root: loads configuration, sets up logging, assembles the
//! runtime with a text surface and a file-backed save store, then hands
//! control to the input loop (or the autopilot when `AUTOPLAY_TURNS` is set).
mod app;
mod autopilot;
mod config;
mod logging;
mod surface;

use std::sync::Arc;

use anyhow::Result;
use runtime::Runtime;

use crate::config::ClientConfig;
use crate::surface::TextSurface;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.session_id.as_deref())?;

    let store = config.open_store()?;
    tracing::info!("Save directory: {}", store.base_dir().display());

    let runtime = Runtime::builder()
        .config(config.runtime_config())
        .surface(TextSurface::new(config.board_size, config.damage_display))
        .store(Arc::new(store))
        .resume_saved(config.resume)
        .build()
        .await?;
    let handle = runtime.handle();
    let game_config = config.game_config();

    match config.autoplay_turns {
        Some(turns) => {
            let played = autopilot::play(&handle, &game_config, turns).await?;
            let state = handle.query_state().await?;
            println!(
                "autopilot played {} turn(s); score {}, best {}",
                played,
                state.turn().score,
                state.turn().max_score
            );
        }
        None => app::run(&handle, &game_config).await?,
    }

    drop(handle);
    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    Ok(())
}
