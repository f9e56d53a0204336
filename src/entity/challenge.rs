// src/entity/challenge.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("Invalid difficulty: {}", s)),
        }
    }
}

/// One practice exercise, stamped with the calendar day it was issued for.
///
/// Immutable once generated; the history log holds at most one per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub hints: Vec<String>,
    pub sample_solution: String,
}

impl DailyChallenge {
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date == day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(
            "beginner".parse::<Difficulty>().unwrap(),
            Difficulty::Beginner
        );
        assert_eq!(
            "Advanced".parse::<Difficulty>().unwrap(),
            Difficulty::Advanced
        );
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Intermediate.to_string(), "Intermediate");
    }

    #[test]
    fn test_date_serializes_as_calendar_day() {
        let challenge = DailyChallenge {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
            title: "T".to_string(),
            description: "D".to_string(),
            difficulty: Difficulty::Beginner,
            prompt: "P".to_string(),
            hints: vec!["h".to_string()],
            sample_solution: "S".to_string(),
        };

        let json = serde_json::to_string(&challenge).unwrap();
        assert!(json.contains("\"date\":\"2025-08-04\""));
        assert!(json.contains("\"difficulty\":\"beginner\""));
    }
}
