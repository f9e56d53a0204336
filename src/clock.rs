//! Calendar source for the daily challenge.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

/// Supplies "today" at day granularity, plus a wall-clock instant for
/// advisory timestamps.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The process clock, using the local calendar day.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a given day that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    day: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day: Mutex::new(day),
        }
    }

    pub fn set(&self, day: NaiveDate) {
        if let Ok(mut current) = self.day.lock() {
            *current = day;
        }
    }

    pub fn advance_days(&self, days: i64) {
        if let Ok(mut current) = self.day.lock() {
            *current += Duration::days(days);
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        match self.day.lock() {
            Ok(day) => *day,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        let midday = self.today().and_hms_opt(12, 0, 0).unwrap_or_default();
        DateTime::from_naive_utc_and_offset(midday, Utc)
    }
}
