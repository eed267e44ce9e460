//! Key-value store trait
//!
//! Defines the get/set-string contract the task store persists through.

use crate::Result;

/// Storage interface for serialized board state
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing was stored
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
