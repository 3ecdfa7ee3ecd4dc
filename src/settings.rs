//! JSON-file settings backend.
//!
//! A small key-value store backing the persisted limit for embedders that
//! have no native settings storage. Values are cached in memory and written
//! through to disk on modification, with a best-effort flush on drop.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{TabWardenError, TabWardenResult};
use crate::host::SettingsStore;

struct Inner {
    cache: HashMap<String, Value>,
    dirty: bool,
}

/// File-backed [`SettingsStore`].
pub struct JsonSettingsStore {
    settings_path: PathBuf,
    inner: Mutex<Inner>,
}

impl JsonSettingsStore {
    /// Default settings file location under the platform data dir.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("tabwarden").join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("~/.tabwarden/settings.json"))
    }

    /// Open a store backed by `settings_path`.
    ///
    /// An existing file is loaded into cache; a missing or unparseable file
    /// starts empty.
    pub fn new(settings_path: PathBuf) -> Self {
        let cache = if settings_path.exists() {
            match fs::read_to_string(&settings_path) {
                Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
                Err(_) => HashMap::new(),
            }
        } else {
            HashMap::new()
        };

        Self {
            settings_path,
            inner: Mutex::new(Inner {
                cache,
                dirty: false,
            }),
        }
    }

    fn flush_inner(&self, inner: &mut Inner) -> TabWardenResult<()> {
        if !inner.dirty {
            return Ok(());
        }

        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&inner.cache)?;
        fs::write(&self.settings_path, contents)?;

        inner.dirty = false;
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn get(&self, key: &str) -> Option<Value> {
        self.inner.lock().ok()?.cache.get(key).cloned()
    }

    async fn set(&self, key: &str, value: Value) -> TabWardenResult<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| TabWardenError::Settings(format!("Settings lock poisoned: {}", e)))?;

        inner.cache.insert(key.to_string(), value);
        inner.dirty = true;
        self.flush_inner(&mut inner)
    }
}

impl Drop for JsonSettingsStore {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.lock() {
            let _ = self.flush_inner(&mut inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::config::{self, MAX_TABS_KEY};

    #[tokio::test]
    async fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let store = JsonSettingsStore::new(temp.path().join("settings.json"));

        store.set(MAX_TABS_KEY, json!(7)).await.unwrap();
        assert_eq!(store.get(MAX_TABS_KEY).await, Some(json!(7)));
        assert_eq!(store.get("missing").await, None);
    }

    #[tokio::test]
    async fn test_values_persist_across_instances() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");

        {
            let store = JsonSettingsStore::new(path.clone());
            store.set(MAX_TABS_KEY, json!(42)).await.unwrap();
        }

        let store = JsonSettingsStore::new(path);
        assert_eq!(store.get(MAX_TABS_KEY).await, Some(json!(42)));
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("settings.json");

        let store = JsonSettingsStore::new(path.clone());
        store.set(MAX_TABS_KEY, json!(3)).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonSettingsStore::new(path);
        assert_eq!(store.get(MAX_TABS_KEY).await, None);
    }

    #[tokio::test]
    async fn test_limit_round_trip_through_store() {
        let temp = TempDir::new().unwrap();
        let store = JsonSettingsStore::new(temp.path().join("settings.json"));

        assert_eq!(config::get_limit(&store).await, config::DEFAULT_MAX_TABS);
        config::set_limit(&store, 15).await.unwrap();
        assert_eq!(config::get_limit(&store).await, 15);
    }
}
