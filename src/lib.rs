pub mod challenge;
pub mod cli;
pub mod clock;
pub mod config;
pub mod context;
pub mod entity;
pub mod error;
pub mod events;
pub mod search;
pub mod seed;
pub mod storage;
pub mod store;

pub use challenge::ChallengeCache;
pub use config::{Config, SelectionPolicy};
pub use context::Library;
pub use error::{PilotError, Result};
pub use events::{EventBus, StoreEvent};
pub use store::{InitOutcome, PromptStore};
