//! Runtime configuration.
//!
//! Everything is read from environment variables with defaults; the CLI can
//! override the data directory.

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{PilotError, Result};

const DATA_DIR_NAME: &str = ".promptpilot";
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// How the daily challenge is picked from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Uniform random pick, like the original app
    #[default]
    Random,
    /// Day-of-year modulo pool size; reproducible
    Rotation,
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionPolicy::Random => write!(f, "random"),
            SelectionPolicy::Rotation => write!(f, "rotation"),
        }
    }
}

impl std::str::FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(SelectionPolicy::Random),
            "rotation" | "rotate" => Ok(SelectionPolicy::Rotation),
            _ => Err(format!("Invalid selection policy: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding promptpilot.db
    pub data_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub selection: SelectionPolicy,
    /// Days of challenge history kept, counting today
    pub history_days: u32,
    /// Pins the calendar day instead of reading the system clock
    pub today: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: "warn".to_string(),
            selection: SelectionPolicy::default(),
            history_days: DEFAULT_HISTORY_DAYS,
            today: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(dir) = lookup("PROMPTPILOT_HOME").filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("PROMPTPILOT_LOG") {
            config.log_level = level;
        }

        if let Some(selection) = lookup("PROMPTPILOT_SELECTION") {
            config.selection = selection.parse().map_err(PilotError::Config)?;
        }

        if let Some(days) = lookup("PROMPTPILOT_HISTORY_DAYS") {
            let days: u32 = days
                .parse()
                .map_err(|_| PilotError::Config(format!("Invalid history days: {}", days)))?;
            if days == 0 {
                return Err(PilotError::Config(
                    "PROMPTPILOT_HISTORY_DAYS must be at least 1".to_string(),
                ));
            }
            config.history_days = days;
        }

        if let Some(today) = lookup("PROMPTPILOT_TODAY") {
            let date = NaiveDate::parse_from_str(&today, "%Y-%m-%d")
                .map_err(|_| PilotError::Config(format!("Invalid date: {}", today)))?;
            config.today = Some(date);
        }

        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME))
}
