// src/entity/collection.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_COLLECTION_COLOR: &str = "pilotBlue";

/// A user-named grouping of prompts, referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Member prompt ids in insertion order, never duplicated
    #[serde(default)]
    pub prompt_ids: Vec<Uuid>,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Collection {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description: description.filter(|d| !d.is_empty()),
            prompt_ids: Vec::new(),
            color: DEFAULT_COLLECTION_COLOR.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn contains(&self, prompt_id: &Uuid) -> bool {
        self.prompt_ids.contains(prompt_id)
    }

    /// Append `prompt_id` unless already present. Returns true if membership changed.
    pub fn add_prompt(&mut self, prompt_id: Uuid) -> bool {
        if self.contains(&prompt_id) {
            return false;
        }
        self.prompt_ids.push(prompt_id);
        true
    }

    /// Drop `prompt_id` if present. Returns true if membership changed.
    pub fn remove_prompt(&mut self, prompt_id: &Uuid) -> bool {
        let before = self.prompt_ids.len();
        self.prompt_ids.retain(|id| id != prompt_id);
        self.prompt_ids.len() != before
    }

    /// Collapse repeated ids left behind by hand-edited or older data.
    pub(crate) fn dedup_members(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.prompt_ids.retain(|id| seen.insert(*id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collection_is_empty() {
        let collection = Collection::new("Work".to_string(), Some("desc".to_string()));
        assert!(collection.prompt_ids.is_empty());
        assert_eq!(collection.color, DEFAULT_COLLECTION_COLOR);
        assert_eq!(collection.description.as_deref(), Some("desc"));
    }

    #[test]
    fn test_empty_description_is_none() {
        let collection = Collection::new("Work".to_string(), Some(String::new()));
        assert!(collection.description.is_none());
    }

    #[test]
    fn test_add_prompt_is_idempotent() {
        let mut collection = Collection::new("Work".to_string(), None);
        let id = Uuid::new_v4();

        assert!(collection.add_prompt(id));
        assert!(!collection.add_prompt(id));
        assert_eq!(collection.prompt_ids, vec![id]);
    }

    #[test]
    fn test_remove_prompt_is_idempotent() {
        let mut collection = Collection::new("Work".to_string(), None);
        let id = Uuid::new_v4();
        collection.add_prompt(id);

        assert!(collection.remove_prompt(&id));
        assert!(!collection.remove_prompt(&id));
        assert!(collection.prompt_ids.is_empty());
    }

    #[test]
    fn test_dedup_members_keeps_first_occurrence() {
        let mut collection = Collection::new("Work".to_string(), None);
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        collection.prompt_ids = vec![a, b, a, b, a];

        collection.dedup_members();
        assert_eq!(collection.prompt_ids, vec![a, b]);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut collection = Collection::new("Work".to_string(), Some("desc".to_string()));
        collection.add_prompt(Uuid::new_v4());

        let json = serde_json::to_string(&collection).unwrap();
        let parsed: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, collection);
    }
}
