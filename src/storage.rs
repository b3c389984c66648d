//! Persistence collaborator.
//!
//! The store is persisted as one opaque JSON object under a single key. Writes
//! from elsewhere (another device syncing, another window) arrive as
//! [`StorageChange`] notifications; whichever write is applied last wins.

use crate::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Key/value persistence used by [`Session`](crate::Session).
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// Storage area a change originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Sync,
    Managed,
    Session,
}

impl StorageArea {
    /// Only local and synced areas hold the alias map.
    pub fn holds_aliases(self) -> bool {
        matches!(self, StorageArea::Local | StorageArea::Sync)
    }
}

/// Change notification delivered by the host storage.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageChange {
    pub key: String,
    pub new_value: Option<Value>,
    pub area: StorageArea,
}

/// In-memory [`Storage`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, Value>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: Value) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value);
        Self { values }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
