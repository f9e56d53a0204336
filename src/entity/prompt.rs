// src/entity/prompt.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: Uuid,
    pub title: String,
    /// Body text, copied verbatim when the prompt is used
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Model names this prompt is tuned for ("ChatGPT", "Claude", ...)
    pub recommended_ai: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Prompt {
    pub fn new(title: String, content: String, category: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            category,
            tags: Vec::new(),
            recommended_ai: Vec::new(),
            is_favorite: false,
        }
    }

    /// Whether `model` is listed verbatim in `recommended_ai`.
    pub fn recommends(&self, model: &str) -> bool {
        self.recommended_ai.iter().any(|m| m == model)
    }
}
