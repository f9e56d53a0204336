// src/challenge/selector.rs
use std::sync::Mutex;

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SelectionPolicy;

/// Picks which pool entry becomes the challenge for a day.
pub trait ChallengeSelector: Send + Sync {
    /// Return an index below `pool_len`. Callers guarantee `pool_len > 0`.
    fn select(&self, date: NaiveDate, pool_len: usize) -> usize;
}

/// Uniform random pick, either from the thread RNG or a seeded generator.
#[derive(Debug, Default)]
pub struct RandomSelector {
    seeded: Option<Mutex<StdRng>>,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reproducible sequence of picks for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl ChallengeSelector for RandomSelector {
    fn select(&self, _date: NaiveDate, pool_len: usize) -> usize {
        match &self.seeded {
            Some(rng) => match rng.lock() {
                Ok(mut rng) => rng.gen_range(0..pool_len),
                Err(poisoned) => poisoned.into_inner().gen_range(0..pool_len),
            },
            None => rand::thread_rng().gen_range(0..pool_len),
        }
    }
}

/// Day-of-year modulo pool size.
#[derive(Debug, Default, Clone, Copy)]
pub struct RotationSelector;

impl ChallengeSelector for RotationSelector {
    fn select(&self, date: NaiveDate, pool_len: usize) -> usize {
        date.ordinal0() as usize % pool_len
    }
}

pub fn selector_for(policy: SelectionPolicy) -> Box<dyn ChallengeSelector> {
    match policy {
        SelectionPolicy::Random => Box::new(RandomSelector::new()),
        SelectionPolicy::Rotation => Box::new(RotationSelector),
    }
}
