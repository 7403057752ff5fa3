//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers one async method per
//! surface input. Each call resolves once the worker finished reacting to it,
//! including any computer turn the input triggered.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{ClickOutcome, HoverHint, MatchState, Position, Snapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, GameEvent};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Pointer entered `cell`; returns the hints that were rendered.
    pub async fn cell_enter(&self, cell: Position) -> Result<HoverHint> {
        self.request(|reply| Command::CellEnter { cell, reply }).await?
    }

    /// Pointer left `cell`.
    pub async fn cell_leave(&self, cell: Position) -> Result<()> {
        self.request(|reply| Command::CellLeave { cell, reply }).await?
    }

    /// Click on `cell` during the player's turn.
    ///
    /// Resolves after the resulting action, its damage display and the
    /// computer's reply have all completed.
    pub async fn cell_click(&self, cell: Position) -> Result<ClickOutcome> {
        self.request(|reply| Command::CellClick { cell, reply }).await?
    }

    /// Discards the running match and starts a new one.
    pub async fn new_game(&self) -> Result<()> {
        self.request(|reply| Command::NewGame { reply }).await?
    }

    /// Persists the running match.
    pub async fn save_game(&self) -> Result<()> {
        self.request(|reply| Command::Save { reply }).await?
    }

    /// Replaces the running match with the stored one.
    ///
    /// Returns `false` (and leaves the match untouched) when no usable save
    /// exists.
    pub async fn load_game(&self) -> Result<bool> {
        self.request(|reply| Command::Load { reply }).await?
    }

    /// Query the current match state (read-only copy)
    pub async fn query_state(&self) -> Result<MatchState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Persistable projection of the current match.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Subscribe to match events
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.event_bus.subscribe()
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
