//! Compiled-in sample data.
//!
//! Seed records get stable ids (UUID v5 over [`SEED_NAMESPACE`]) and a fixed
//! creation time, so seeding twice yields identical records.

mod collections;
mod prompts;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use collections::sample_collections;
pub use prompts::{sample_prompt_id, sample_prompts};

/// Version of the compiled sample set. Bumping it makes every existing store
/// discard its prompts and collections and reseed on next start.
pub const SAMPLE_PROMPTS_VERSION: i64 = 2;

const SEED_NAMESPACE: Uuid = Uuid::from_u128(0x7d44_1c2e_9f0b_4a8e_b6a1_52c3_0e9d_f417);

/// 2025-08-04T00:00:00Z
const SEED_EPOCH_SECS: i64 = 1_754_265_600;

fn seed_id(kind: &str, name: &str) -> Uuid {
    Uuid::new_v5(&SEED_NAMESPACE, format!("{}:{}", kind, name).as_bytes())
}

fn seed_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(SEED_EPOCH_SECS, 0).unwrap_or_default()
}
