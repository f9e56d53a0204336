//! Daily challenge cache.
//!
//! Exactly one challenge exists per calendar day. The first request on a
//! day with no entry generates one from the pool and appends it to the
//! persisted history; later requests that day return that entry unchanged.
//! History is pruned to a trailing window on every write and filtered by the
//! same window on every read.

mod pool;
mod selector;

pub use pool::{default_pool, ChallengeTemplate};
pub use selector::{selector_for, ChallengeSelector, RandomSelector, RotationSelector};

use std::sync::Arc;

use chrono::NaiveDate;
use crossbeam_channel::Receiver;

use crate::clock::Clock;
use crate::config::DEFAULT_HISTORY_DAYS;
use crate::entity::DailyChallenge;
use crate::error::{PilotError, Result};
use crate::events::{EventBus, StoreEvent};
use crate::storage::{keys, read_json, write_json, KeyValueStore};

pub struct ChallengeCache {
    kv: Arc<dyn KeyValueStore>,
    events: EventBus,
    clock: Arc<dyn Clock>,
    selector: Box<dyn ChallengeSelector>,
    pool: Vec<ChallengeTemplate>,
    history_days: u32,
    current: Option<DailyChallenge>,
}

impl ChallengeCache {
    pub fn new(
        kv: Arc<dyn KeyValueStore>,
        events: EventBus,
        clock: Arc<dyn Clock>,
        selector: Box<dyn ChallengeSelector>,
    ) -> Self {
        Self {
            kv,
            events,
            clock,
            selector,
            pool: default_pool(),
            history_days: DEFAULT_HISTORY_DAYS,
            current: None,
        }
    }

    /// Replace the compiled-in pool. The pool must not be empty.
    pub fn with_pool(mut self, pool: Vec<ChallengeTemplate>) -> Result<Self> {
        if pool.is_empty() {
            return Err(PilotError::Validation(
                "challenge pool must not be empty".to_string(),
            ));
        }
        self.pool = pool;
        Ok(self)
    }

    /// Number of days (today included) a challenge stays in history.
    pub fn with_history_days(mut self, days: u32) -> Self {
        self.history_days = days.max(1);
        self
    }

    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// The challenge for the current calendar day, generating it if needed.
    pub fn todays_challenge(&mut self) -> DailyChallenge {
        let today = self.clock.today();

        if let Some(current) = self.current.as_ref().filter(|c| c.is_on(today)) {
            return current.clone();
        }

        if let Some(stored) = self.load_history().into_iter().find(|c| c.is_on(today)) {
            tracing::debug!(%today, title = %stored.title, "using stored challenge");
            self.current = Some(stored.clone());
            self.events.publish(StoreEvent::ChallengeChanged);
            return stored;
        }

        let index = self.selector.select(today, self.pool.len()) % self.pool.len();
        let challenge = self.pool[index].stamp(today);
        tracing::info!(%today, title = %challenge.title, "generated daily challenge");

        self.record(challenge.clone());
        challenge
    }

    /// Re-run the day check. Same as `todays_challenge`.
    pub fn refresh(&mut self) -> DailyChallenge {
        self.todays_challenge()
    }

    /// Last challenge handed out by this cache, without touching storage.
    pub fn current(&self) -> Option<&DailyChallenge> {
        self.current.as_ref()
    }

    /// Retained challenges other than today's, most recent first.
    pub fn past_challenges(&self) -> Vec<DailyChallenge> {
        let today = self.clock.today();
        let mut past: Vec<DailyChallenge> = self
            .load_history()
            .into_iter()
            .filter(|c| !c.is_on(today))
            .collect();
        past.sort_by(|a, b| b.date.cmp(&a.date));
        past
    }

    /// Retained challenges in stored order.
    pub fn history(&self) -> Vec<DailyChallenge> {
        self.load_history()
    }

    /// Upsert `challenge` by date, prune, and persist.
    ///
    /// Any entry already stamped with the same date is replaced.
    pub fn record(&mut self, challenge: DailyChallenge) {
        let today = self.clock.today();

        let mut history = self.load_history();
        history.retain(|c| c.date != challenge.date);
        history.push(challenge.clone());
        history.retain(|c| self.is_retained(c.date, today));

        if !write_json(self.kv.as_ref(), keys::DAILY_CHALLENGES, &history) {
            self.report_failure(keys::DAILY_CHALLENGES);
        }
        if challenge.is_on(today) {
            if !write_json(
                self.kv.as_ref(),
                keys::LAST_CHALLENGE_DATE,
                &self.clock.now(),
            ) {
                self.report_failure(keys::LAST_CHALLENGE_DATE);
            }
            self.current = Some(challenge);
        }
        self.events.publish(StoreEvent::ChallengeChanged);
    }

    /// Advisory timestamp of the last generation. Not used for the day check.
    pub fn last_generated_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        read_json(self.kv.as_ref(), keys::LAST_CHALLENGE_DATE)
    }

    fn load_history(&self) -> Vec<DailyChallenge> {
        let today = self.clock.today();
        let history: Vec<DailyChallenge> =
            read_json(self.kv.as_ref(), keys::DAILY_CHALLENGES).unwrap_or_default();
        history
            .into_iter()
            .filter(|c| self.is_retained(c.date, today))
            .collect()
    }

    fn is_retained(&self, date: NaiveDate, today: NaiveDate) -> bool {
        (today - date).num_days() < i64::from(self.history_days)
    }

    fn report_failure(&self, key: &str) {
        self.events.publish(StoreEvent::PersistFailed {
            key: key.to_string(),
        });
    }
}
