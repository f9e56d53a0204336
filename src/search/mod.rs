//! Search module: free-text query plus one active filter over a prompt list.
//!
//! Everything here is pure. Results borrow from the input slice and keep its
//! order.

use std::collections::BTreeSet;

use crate::entity::Prompt;

/// The single active narrowing applied after the text query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PromptFilter {
    #[default]
    All,
    /// Exact category match
    Category(String),
    /// Exact entry in `recommended_ai`
    AiModel(String),
    Favorites,
}

impl PromptFilter {
    pub fn matches(&self, prompt: &Prompt) -> bool {
        match self {
            PromptFilter::All => true,
            PromptFilter::Category(category) => prompt.category == *category,
            PromptFilter::AiModel(model) => prompt.recommends(model),
            PromptFilter::Favorites => prompt.is_favorite,
        }
    }
}

impl std::fmt::Display for PromptFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptFilter::All => write!(f, "All Prompts"),
            PromptFilter::Category(category) => write!(f, "Category: {}", category),
            PromptFilter::AiModel(model) => write!(f, "AI: {}", model),
            PromptFilter::Favorites => write!(f, "Favorites"),
        }
    }
}

impl std::str::FromStr for PromptFilter {
    type Err = String;

    /// Accepts `all`, `favorites`, `category:<name>` and `ai:<model>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(category) = s.strip_prefix("category:") {
            return non_empty(category).map(PromptFilter::Category);
        }
        if let Some(model) = s.strip_prefix("ai:") {
            return non_empty(model).map(PromptFilter::AiModel);
        }
        match s.to_lowercase().as_str() {
            "all" => Ok(PromptFilter::All),
            "favorites" | "favourites" | "favorite" => Ok(PromptFilter::Favorites),
            _ => Err(format!("Invalid filter: {}", s)),
        }
    }
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.is_empty() {
        Err("Filter value must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

/// Case-insensitive containment over title, category, tags and recommended AI.
pub fn matches_query(prompt: &Prompt, query: &str) -> bool {
    let needle = query.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&needle);

    contains(&prompt.title)
        || contains(&prompt.category)
        || prompt.tags.iter().any(|t| contains(t.as_str()))
        || prompt.recommended_ai.iter().any(|m| contains(m.as_str()))
}

/// Narrow `prompts` by `query` (ignored when empty), then by `filter`.
pub fn filter_prompts<'a>(
    prompts: &'a [Prompt],
    query: &str,
    filter: &PromptFilter,
) -> Vec<&'a Prompt> {
    prompts
        .iter()
        .filter(|p| query.is_empty() || matches_query(p, query))
        .filter(|p| filter.matches(p))
        .collect()
}

/// Sorted, deduplicated category labels.
pub fn distinct_categories(prompts: &[Prompt]) -> Vec<String> {
    let set: BTreeSet<&str> = prompts.iter().map(|p| p.category.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Sorted, deduplicated model names across all `recommended_ai` lists.
pub fn distinct_ai_models(prompts: &[Prompt]) -> Vec<String> {
    let set: BTreeSet<&str> = prompts
        .iter()
        .flat_map(|p| p.recommended_ai.iter().map(String::as_str))
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Split a raw search line into (remaining query text, filter).
///
/// Tokens `category:<name>`, `ai:<model>` and `is:favorite` set the filter;
/// when several appear the last one wins. Everything else is query text.
///
/// # Examples
///
/// ```ignore
/// let (query, filter) = parse_query("ai:Claude email campaign");
/// assert_eq!(query, "email campaign");
/// assert_eq!(filter, PromptFilter::AiModel("Claude".to_string()));
/// ```
pub fn parse_query(raw: &str) -> (String, PromptFilter) {
    let mut filter = PromptFilter::All;
    let mut remaining = Vec::new();

    for token in raw.split_whitespace() {
        if let Some(value) = token.strip_prefix("category:").filter(|v| !v.is_empty()) {
            filter = PromptFilter::Category(value.to_string());
        } else if let Some(value) = token.strip_prefix("ai:").filter(|v| !v.is_empty()) {
            filter = PromptFilter::AiModel(value.to_string());
        } else if matches!(token, "is:favorite" | "is:favorites") {
            filter = PromptFilter::Favorites;
        } else {
            remaining.push(token);
        }
    }

    (remaining.join(" "), filter)
}
