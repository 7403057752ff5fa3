//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up the command channel and
//! event bus, and exposes a builder-based API for embedding the match behind
//! any [`BoardSurface`].

use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use game_core::{GameConfig, GameEngine, GameError, MatchState};

use crate::api::{ActionProvider, BoardSurface, Result, RuntimeError, RuntimeHandle};
use crate::events::{EventBus, GameEvent};
use crate::providers::GreedyAiProvider;
use crate::repository::{DEFAULT_STATE_KEY, GameStateService, InMemoryStore, KeyValueStore};
use crate::workers::{Command, SimulationWorker, WorkerSettings};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Rules configuration. `board_size` is overwritten by the surface's size.
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Pause before the computer acts, so its move is readable.
    pub turn_delay: Duration,
    /// Fixed RNG seed for reproducible team generation.
    pub seed: Option<u64>,
    /// Key the snapshot is stored under.
    pub storage_key: String,
    /// Persist automatically whenever the turn returns to the player.
    pub autosave: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            turn_delay: Duration::from_millis(1000),
            seed: None,
            storage_key: DEFAULT_STATE_KEY.to_owned(),
            autosave: true,
        }
    }
}

/// Main runtime that orchestrates the match.
///
/// Design: Runtime owns the worker task and coordinates its lifetime.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to match events
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// The worker stops once every [`RuntimeHandle`] clone is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<MatchState>,
    surface: Option<Box<dyn BoardSurface>>,
    store: Option<Arc<dyn KeyValueStore>>,
    provider: Option<Box<dyn ActionProvider>>,
    resume_saved: bool,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            surface: None,
            store: None,
            provider: None,
            resume_saved: false,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required board surface
    pub fn surface(mut self, surface: impl BoardSurface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    /// Set the snapshot store (default: in-memory)
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the computer action provider (default: [`GreedyAiProvider`])
    pub fn provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Provide initial match state instead of generating a new match
    pub fn initial_state(mut self, state: MatchState) -> Self {
        self.state = Some(state);
        self
    }

    /// Start from the stored snapshot when one is usable.
    ///
    /// Ignored when [`RuntimeBuilder::initial_state`] is set.
    pub fn resume_saved(mut self, resume: bool) -> Self {
        self.resume_saved = resume;
        self
    }

    /// Build the runtime and spawn its worker
    pub async fn build(self) -> Result<Runtime> {
        let surface = self.surface.ok_or(RuntimeError::MissingSurface)?;

        let mut config = self.config;
        config.game_config.board_size = surface.board_size();
        config.game_config.validate()?;
        let game_config = config.game_config;

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryStore::new()));
        let saves = GameStateService::with_key(store, config.storage_key);
        let provider = self
            .provider
            .unwrap_or_else(|| Box::new(GreedyAiProvider::new()));

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let resumed = match self.state {
            Some(state) => Some(state),
            None if self.resume_saved => saves.load().and_then(|snapshot| {
                snapshot
                    .restore(&game_config)
                    .inspect_err(|error| {
                        warn!(
                            "Stored snapshot unusable ({}): {}",
                            error.error_code(),
                            error
                        )
                    })
                    .ok()
            }),
            None => None,
        };

        let initial_state = match resumed {
            Some(state) => state,
            None => {
                let mut state = MatchState::default();
                GameEngine::new(&mut state, &game_config).start_match(&mut rng);
                state
            }
        };

        info!(
            "Runtime starting on a {}x{} board ({} units)",
            game_config.board_size,
            game_config.board_size,
            initial_state.roster().len()
        );

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size);
        let event_bus = EventBus::with_capacity(config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let settings = WorkerSettings {
            game_config,
            turn_delay: config.turn_delay,
            autosave: config.autosave,
        };
        let sim_worker = SimulationWorker::new(
            initial_state,
            settings,
            command_rx,
            event_bus,
            surface,
            provider,
            saves,
            rng,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}
