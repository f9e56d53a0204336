use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStore;
use crate::error::{PilotError, Result};

/// Process-local namespace. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> PilotError {
    PilotError::Storage("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}
