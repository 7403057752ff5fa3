//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories and rule validation
//! so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ActionError, ConfigError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Input arrived while a turn was still resolving.
    #[error("a turn is still resolving, input rejected")]
    Busy,

    #[error("match worker command channel closed")]
    CommandChannelClosed,

    #[error("match worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("match worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("runtime requires a board surface before building")]
    MissingSurface,
}
