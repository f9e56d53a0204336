//! Persistence adapter: named blobs in a durable key-value namespace.
//!
//! Adapters know nothing about the values they hold. The typed helpers in
//! this module turn every read problem into "no value" and every write
//! problem into `false`, logging both, so callers fall back to defaults
//! instead of aborting.

mod memory_store;
mod sqlite_store;

pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub mod keys {
    pub const SAVED_PROMPTS: &str = "SavedPrompts";
    pub const SAVED_COLLECTIONS: &str = "SavedCollections";
    pub const HAS_INITIALIZED_DATA: &str = "HasInitializedData";
    pub const SAMPLE_PROMPTS_VERSION: &str = "SamplePromptsVersion";
    pub const DAILY_CHALLENGES: &str = "DailyChallenges";
    pub const LAST_CHALLENGE_DATE: &str = "LastChallengeDate";
}

pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    fn save(&self, key: &str, value: &[u8]) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Decode the JSON value stored under `key`.
///
/// Missing keys, adapter errors and undecodable blobs all yield `None`.
pub fn read_json<T: DeserializeOwned>(kv: &dyn KeyValueStore, key: &str) -> Option<T> {
    let bytes = match kv.load(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted value");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding undecodable persisted value");
            None
        }
    }
}

/// Encode `value` as JSON under `key`. Returns false if it was not stored.
pub fn write_json<T: Serialize + ?Sized>(kv: &dyn KeyValueStore, key: &str, value: &T) -> bool {
    let bytes = match serde_json::to_vec(value) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to encode value");
            return false;
        }
    };

    match kv.save(key, &bytes) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to persist value");
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::PilotError;

    /// Reads succeed from an inner memory store; writes always fail.
    #[derive(Default)]
    pub struct ReadOnlyStore {
        pub inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
            self.inner.load(key)
        }

        fn save(&self, key: &str, _value: &[u8]) -> Result<()> {
            Err(PilotError::Storage(format!("read-only: {}", key)))
        }

        fn remove(&self, key: &str) -> Result<()> {
            Err(PilotError::Storage(format!("read-only: {}", key)))
        }
    }
}
