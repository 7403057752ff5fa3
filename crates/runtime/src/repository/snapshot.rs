//! Save/load of the single persisted match snapshot.

use std::sync::Arc;

use game_core::Snapshot;

use super::{KeyValueStore, Result};

/// Key the snapshot is stored under unless configured otherwise.
pub const DEFAULT_STATE_KEY: &str = "state";

/// Facade over a [`KeyValueStore`] that reads and writes one JSON snapshot.
///
/// Loading never fails: a missing, unreadable or malformed value is reported
/// as `None` and logged.
#[derive(Clone)]
pub struct GameStateService {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl GameStateService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, DEFAULT_STATE_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serializes `snapshot` and stores it, replacing any previous save.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        self.store.set_item(&self.key, &json)
    }

    /// Returns the stored snapshot, or `None` when there is nothing usable.
    pub fn load(&self) -> Option<Snapshot> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!("Failed to read saved state `{}`: {}", self.key, error);
                return None;
            }
        };

        match serde_json::from_str::<Option<Snapshot>>(&raw) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::warn!("Ignoring unparsable saved state `{}`: {}", self.key, error);
                None
            }
        }
    }

    /// Deletes the stored snapshot.
    pub fn clear(&self) -> Result<()> {
        self.store.remove_item(&self.key)
    }
}
