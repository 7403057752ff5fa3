//! Runtime orchestration for the grid tactics match.
//!
//! This crate wires together the board surface abstraction, the computer
//! action provider, snapshot persistence and the simulation worker into a
//! cohesive runtime API. Consumers embed [`Runtime`] to drive a match, forward
//! pointer input through [`RuntimeHandle`] and subscribe to [`GameEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] broadcasts match events to observers
//! - [`providers`] holds the built-in computer policy
//! - [`repository`] provides storage adapters for save/load
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod providers;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{
    ActionProvider, BoardSurface, IdleActionProvider, Result, RuntimeError, RuntimeHandle,
};
pub use events::{EventBus, GameEvent};
pub use providers::{GreedyAiProvider, choose_action};
pub use repository::{
    DEFAULT_STATE_KEY, FileStore, GameStateService, InMemoryStore, KeyValueStore, RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
