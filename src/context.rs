//! Wiring: builds every component once from a [`Config`] and hands them out.

use std::sync::Arc;

use crate::challenge::{selector_for, ChallengeCache};
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::events::EventBus;
use crate::storage::{KeyValueStore, SqliteStore};
use crate::store::{InitOutcome, PromptStore};

/// One process's view of the prompt library.
pub struct Library {
    pub store: PromptStore,
    pub challenges: ChallengeCache,
    pub events: EventBus,
    init_outcome: InitOutcome,
}

impl Library {
    /// Open the SQLite namespace under `config.data_dir` and initialize the store.
    pub fn open(config: &Config) -> Result<Self> {
        let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open(&config.data_dir)?);
        tracing::debug!(data_dir = %config.data_dir.display(), "opened library");
        Ok(Self::with_store(kv, config))
    }

    /// Build on an existing adapter, taking clock, selection and retention from `config`.
    pub fn with_store(kv: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        let clock: Arc<dyn Clock> = match config.today {
            Some(day) => Arc::new(FixedClock::new(day)),
            None => Arc::new(SystemClock),
        };
        let events = EventBus::new();

        let mut store = PromptStore::new(kv.clone(), events.clone());
        let init_outcome = store.initialize();

        let selector = selector_for(config.selection);
        let challenges = ChallengeCache::new(kv, events.clone(), clock, selector)
            .with_history_days(config.history_days);

        Self {
            store,
            challenges,
            events,
            init_outcome,
        }
    }

    pub fn init_outcome(&self) -> InitOutcome {
        self.init_outcome
    }
}
