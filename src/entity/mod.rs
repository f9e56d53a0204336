mod challenge;
mod collection;
mod prompt;

pub use challenge::{DailyChallenge, Difficulty};
pub use collection::{Collection, DEFAULT_COLLECTION_COLOR};
pub use prompt::Prompt;
