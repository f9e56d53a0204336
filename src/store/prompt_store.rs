use std::sync::Arc;

use crossbeam_channel::Receiver;
use serde::Serialize;
use uuid::Uuid;

use crate::entity::{Collection, Prompt};
use crate::error::{PilotError, Result};
use crate::events::{EventBus, StoreEvent};
use crate::seed::{sample_collections, sample_prompts, SAMPLE_PROMPTS_VERSION};
use crate::storage::{keys, read_json, write_json, KeyValueStore};

/// What `initialize` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Sample data replaced everything; `previous_version` is the marker found
    Seeded { previous_version: Option<i64> },
    /// Persisted data was used; a `true` flag means that set fell back to samples
    Loaded {
        prompts_fallback: bool,
        collections_fallback: bool,
    },
    AlreadyInitialized,
}

/// Authoritative owner of prompts and collections.
///
/// Every mutation is applied in memory, written through to the adapter
/// before returning, then announced on the event bus.
pub struct PromptStore {
    kv: Arc<dyn KeyValueStore>,
    events: EventBus,
    prompts: Vec<Prompt>,
    collections: Vec<Collection>,
    initialized: bool,
}

impl PromptStore {
    /// Create an empty, uninitialized store.
    pub fn new(kv: Arc<dyn KeyValueStore>, events: EventBus) -> Self {
        Self {
            kv,
            events,
            prompts: Vec::new(),
            collections: Vec::new(),
            initialized: false,
        }
    }

    /// Create a store and run `initialize` on it.
    pub fn open(kv: Arc<dyn KeyValueStore>, events: EventBus) -> Self {
        let mut store = Self::new(kv, events);
        store.initialize();
        store
    }

    /// Seed or load persisted data. Only the first call on an instance does work.
    ///
    /// A store that was never seeded, or whose stored sample version is older
    /// than [`SAMPLE_PROMPTS_VERSION`], is overwritten with the samples. User
    /// edits do not survive a version bump.
    pub fn initialize(&mut self) -> InitOutcome {
        if self.initialized {
            tracing::debug!("store already initialized");
            return InitOutcome::AlreadyInitialized;
        }
        self.initialized = true;

        let has_initialized: bool =
            read_json(self.kv.as_ref(), keys::HAS_INITIALIZED_DATA).unwrap_or(false);
        let stored_version: Option<i64> =
            read_json(self.kv.as_ref(), keys::SAMPLE_PROMPTS_VERSION);

        if !has_initialized || stored_version.unwrap_or(0) < SAMPLE_PROMPTS_VERSION {
            tracing::info!(
                ?stored_version,
                current = SAMPLE_PROMPTS_VERSION,
                "seeding sample prompts and collections"
            );
            self.install_samples();
            self.persist(keys::HAS_INITIALIZED_DATA, &true);
            self.persist(keys::SAMPLE_PROMPTS_VERSION, &SAMPLE_PROMPTS_VERSION);
            return InitOutcome::Seeded {
                previous_version: stored_version,
            };
        }

        let prompts_fallback =
            match read_json::<Vec<Prompt>>(self.kv.as_ref(), keys::SAVED_PROMPTS) {
                Some(prompts) => {
                    self.prompts = prompts;
                    false
                }
                None => {
                    tracing::warn!("saved prompts unavailable, using samples");
                    self.prompts = sample_prompts();
                    true
                }
            };

        let collections_fallback =
            match read_json::<Vec<Collection>>(self.kv.as_ref(), keys::SAVED_COLLECTIONS) {
                Some(mut collections) => {
                    collections.iter_mut().for_each(Collection::dedup_members);
                    self.collections = collections;
                    false
                }
                None => {
                    tracing::warn!("saved collections unavailable, using samples");
                    self.collections = sample_collections();
                    true
                }
            };

        tracing::debug!(
            prompts = self.prompts.len(),
            collections = self.collections.len(),
            "loaded persisted data"
        );
        self.events.publish(StoreEvent::PromptsChanged);
        self.events.publish(StoreEvent::CollectionsChanged);

        InitOutcome::Loaded {
            prompts_fallback,
            collections_fallback,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    // ========== Prompts ==========

    pub fn list_prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn get_prompt(&self, id: &Uuid) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == *id)
    }

    pub fn is_favorite(&self, id: &Uuid) -> bool {
        self.get_prompt(id).map(|p| p.is_favorite).unwrap_or(false)
    }

    /// Flip the favorite flag. Returns the new value, or `None` for an unknown id.
    pub fn toggle_favorite(&mut self, id: &Uuid) -> Option<bool> {
        let prompt = self.prompts.iter_mut().find(|p| p.id == *id)?;
        prompt.is_favorite = !prompt.is_favorite;
        let now_favorite = prompt.is_favorite;

        self.save_prompts();
        self.events.publish(StoreEvent::PromptsChanged);
        Some(now_favorite)
    }

    pub fn list_favorites(&self) -> Vec<&Prompt> {
        self.prompts.iter().filter(|p| p.is_favorite).collect()
    }

    // ========== Collections ==========

    pub fn list_collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn get_collection(&self, id: &Uuid) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == *id)
    }

    /// Member prompts of a collection, in store order. Dangling ids are skipped.
    pub fn collection_prompts(&self, collection_id: &Uuid) -> Vec<&Prompt> {
        match self.get_collection(collection_id) {
            Some(collection) => self
                .prompts
                .iter()
                .filter(|p| collection.contains(&p.id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn collections_containing(&self, prompt_id: &Uuid) -> Vec<&Collection> {
        self.collections
            .iter()
            .filter(|c| c.contains(prompt_id))
            .collect()
    }

    pub fn create_collection(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Collection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PilotError::Validation(
                "collection name must not be empty".to_string(),
            ));
        }

        let collection = Collection::new(
            name.to_string(),
            description.map(|d| d.trim().to_string()),
        );
        self.collections.push(collection.clone());

        tracing::info!(id = %collection.id, name = %collection.name, "created collection");
        self.save_collections();
        self.events.publish(StoreEvent::CollectionsChanged);
        Ok(collection)
    }

    /// Returns true if a collection was removed.
    pub fn delete_collection(&mut self, id: &Uuid) -> bool {
        let before = self.collections.len();
        self.collections.retain(|c| c.id != *id);
        if self.collections.len() == before {
            tracing::debug!(%id, "delete: no such collection");
            return false;
        }

        self.save_collections();
        self.events.publish(StoreEvent::CollectionsChanged);
        true
    }

    /// Returns true if membership changed. Unknown collections and existing
    /// members leave everything untouched. The prompt id is not checked.
    pub fn add_to_collection(&mut self, collection_id: &Uuid, prompt_id: &Uuid) -> bool {
        let Some(collection) = self.collections.iter_mut().find(|c| c.id == *collection_id) else {
            tracing::debug!(%collection_id, "add: no such collection");
            return false;
        };
        if !collection.add_prompt(*prompt_id) {
            return false;
        }

        self.save_collections();
        self.events.publish(StoreEvent::CollectionsChanged);
        true
    }

    /// Returns true if membership changed.
    pub fn remove_from_collection(&mut self, collection_id: &Uuid, prompt_id: &Uuid) -> bool {
        let Some(collection) = self.collections.iter_mut().find(|c| c.id == *collection_id) else {
            tracing::debug!(%collection_id, "remove: no such collection");
            return false;
        };
        if !collection.remove_prompt(prompt_id) {
            return false;
        }

        self.save_collections();
        self.events.publish(StoreEvent::CollectionsChanged);
        true
    }

    // ========== Defaults ==========

    /// Overwrite prompts and collections with the samples. Markers are untouched.
    pub fn reset_to_defaults(&mut self) {
        tracing::info!("resetting prompts and collections to defaults");
        self.install_samples();
    }

    /// Like `reset_to_defaults`, and also records the current sample version.
    pub fn force_reload_samples(&mut self) {
        tracing::info!(version = SAMPLE_PROMPTS_VERSION, "reloading sample data");
        self.install_samples();
        self.persist(keys::SAMPLE_PROMPTS_VERSION, &SAMPLE_PROMPTS_VERSION);
    }

    fn install_samples(&mut self) {
        self.prompts = sample_prompts();
        self.collections = sample_collections();
        self.save_prompts();
        self.save_collections();
        self.events.publish(StoreEvent::PromptsChanged);
        self.events.publish(StoreEvent::CollectionsChanged);
    }

    // ========== Persistence ==========

    fn save_prompts(&self) {
        self.persist(keys::SAVED_PROMPTS, &self.prompts);
    }

    fn save_collections(&self) {
        self.persist(keys::SAVED_COLLECTIONS, &self.collections);
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if !write_json(self.kv.as_ref(), key, value) {
            self.events.publish(StoreEvent::PersistFailed {
                key: key.to_string(),
            });
        }
    }
}
