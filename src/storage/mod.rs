//! Local key-value storage
//!
//! A flat string namespace standing in for browser local storage. Progress
//! tracking and anything else that needs to survive between sessions goes
//! through the [`KeyValueStore`] trait.

pub mod file;
pub mod memory;

use anyhow::Result;

pub use file::FileStore;
pub use memory::MemoryStore;

/// A flat string-to-string store
pub trait KeyValueStore {
    /// Get the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Remove `key`, returning whether it was present
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// All keys currently stored, in sorted order
    fn keys(&self) -> Vec<String>;
}
