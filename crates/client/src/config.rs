//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use game_core::GameConfig;
use runtime::{FileStore, RuntimeConfig};

pub const APP_NAME: &str = "skirmish";

/// Everything the binary needs to assemble a runtime and its surface.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub board_size: usize,
    pub seed: Option<u64>,
    pub turn_delay: Duration,
    pub damage_display: Duration,
    pub autosave: bool,
    pub resume: bool,
    pub session_id: Option<String>,
    pub save_data_dir: Option<PathBuf>,
    /// Play this many player turns automatically, then exit.
    pub autoplay_turns: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            board_size: GameConfig::DEFAULT_BOARD_SIZE,
            seed: None,
            turn_delay: Duration::from_millis(1000),
            damage_display: Duration::from_millis(500),
            autosave: true,
            resume: true,
            session_id: None,
            save_data_dir: None,
            autoplay_turns: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOARD_SIZE` - Side length of the board (default: 8)
    /// - `GAME_SEED` - Fixed RNG seed for reproducible matches
    /// - `TURN_DELAY_MS` - Pause before the computer acts (default: 1000)
    /// - `DAMAGE_DISPLAY_MS` - How long damage labels stay up (default: 500)
    /// - `ENABLE_AUTOSAVE` - Save whenever the turn returns to you (default: true)
    /// - `RESUME_SAVED` - Start from the stored match if any (default: true)
    /// - `GAME_SESSION_ID` - Session identifier for log files
    /// - `SAVE_DATA_DIR` - Directory for save data (default: platform-specific)
    /// - `AUTOPLAY_TURNS` - Let the built-in policy play for you
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(size) = read_env::<usize>("BOARD_SIZE") {
            config.board_size = size;
        }
        config.seed = read_env::<u64>("GAME_SEED");
        if let Some(millis) = read_env::<u64>("TURN_DELAY_MS") {
            config.turn_delay = Duration::from_millis(millis);
        }
        if let Some(millis) = read_env::<u64>("DAMAGE_DISPLAY_MS") {
            config.damage_display = Duration::from_millis(millis);
        }
        if let Some(enable) = read_env::<bool>("ENABLE_AUTOSAVE") {
            config.autosave = enable;
        }
        if let Some(resume) = read_env::<bool>("RESUME_SAVED") {
            config.resume = resume;
        }

        config.session_id = env::var("GAME_SESSION_ID").ok();
        config.save_data_dir = env::var("SAVE_DATA_DIR").ok().map(PathBuf::from);
        config.autoplay_turns = read_env::<u32>("AUTOPLAY_TURNS");

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            game_config: self.game_config(),
            turn_delay: self.turn_delay,
            seed: self.seed,
            autosave: self.autosave,
            ..RuntimeConfig::default()
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new().with_board_size(self.board_size)
    }

    /// Opens the save store, creating its directory if needed.
    pub fn open_store(&self) -> Result<FileStore> {
        let store = match &self.save_data_dir {
            Some(dir) => FileStore::new(dir),
            None => FileStore::in_data_dir(APP_NAME),
        };
        store.context("failed to open the save directory")
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
