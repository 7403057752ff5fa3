//! File-based KeyValueStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{KeyValueStore, RepositoryError, Result};

/// File-based implementation of [`KeyValueStore`].
///
/// Each key is stored as `{key}.json` under the base directory. Writes go to
/// a temporary file first and are then renamed over the target, so a crash
/// never leaves a half-written value behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a new file-backed store, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Create a store under the platform data directory for `app_name`.
    pub fn in_data_dir(app_name: &str) -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", app_name)
            .ok_or(RepositoryError::NoDataDir)?;
        Self::new(dirs.data_dir().join("saves"))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path backing `key`.
    fn item_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RepositoryError::InvalidKey(key.to_owned()));
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved `{}` to {}", key, path.display());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        tracing::debug!("Loaded `{}` from {}", key, path.display());
        Ok(Some(value))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;
        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Removed `{}`", key);
        }
        Ok(())
    }
}
