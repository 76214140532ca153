//! File-backed store
//!
//! All entries live in a single JSON object on disk. The file is read once on
//! open and rewritten in full after every mutation, so the last writer wins if
//! two processes share it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::KeyValueStore;
use crate::config::Config;

/// Key-value store persisted as `storage.json`
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store in the default data directory
    pub fn open_default() -> Result<Self> {
        Self::open(Config::data_dir()?.join("storage.json"))
    }

    /// Open the store at `path`, starting empty if the file does not exist.
    ///
    /// A file that does not decode as a JSON object of strings (bad UTF-8
    /// included) is treated as empty; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let contents = std::fs::read(&path)
                .with_context(|| format!("Failed to read storage from {:?}", path))?;
            match serde_json::from_slice(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Ignoring malformed storage file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(&self.entries)
            .with_context(|| "Failed to serialize storage")?;

        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write storage to {:?}", self.path))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("storage.json")).unwrap();
        assert!(store.keys().is_empty());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("topic_dns_progress", "42".into()).unwrap();
        drop(store);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("topic_dns_progress").as_deref(), Some("42"));
    }

    #[test]
    fn remove_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("a", "1".into()).unwrap();
        assert!(store.remove("a").unwrap());

        let store = FileStore::open(&path).unwrap();
        assert!(store.get("a").is_none());
    }

    #[test]
    fn non_utf8_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, [0xff, 0xfe, b'{']).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.keys().is_empty());

        // The next write replaces the unreadable file
        store.set("a", "1".into()).unwrap();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
    }

    #[test]
    fn malformed_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.keys().is_empty());
    }
}
