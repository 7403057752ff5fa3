//! Repository layer for persisted match data.
//!
//! Storage is modelled as a string key-value store; [`GameStateService`]
//! layers the JSON snapshot format and the fixed storage key on top.

mod error;
mod file;
mod memory;
mod snapshot;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use snapshot::{DEFAULT_STATE_KEY, GameStateService};
pub use traits::KeyValueStore;
