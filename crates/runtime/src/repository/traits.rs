//! Repository contracts for persisting match data.

use super::Result;

/// String key-value storage, the shape of a browser's local storage.
///
/// Implementations must be safe to share between the runtime worker and the
/// code that built it.
pub trait KeyValueStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// Check if a value exists under `key`.
    fn contains(&self, key: &str) -> bool {
        matches!(self.get_item(key), Ok(Some(_)))
    }
}
