use uuid::Uuid;

use crate::config::Config;
use crate::context::Library;
use crate::entity::{Collection, DailyChallenge, Prompt};
use crate::error::{PilotError, Result};
use crate::search::{distinct_ai_models, distinct_categories, filter_prompts, parse_query};

fn open_library(config: &Config) -> Result<Library> {
    Library::open(config)
}

/// Resolve a 1-based list position or a UUID prefix against `items`.
fn resolve_id<T>(items: &[T], raw: &str, kind: &str, id_of: impl Fn(&T) -> Uuid) -> Result<Uuid> {
    let raw = raw.trim();

    // Try list position first, then UUID prefix
    let found = if let Ok(position) = raw.parse::<usize>() {
        position
            .checked_sub(1)
            .and_then(|index| items.get(index))
            .map(&id_of)
    } else if raw.is_empty() {
        None
    } else {
        let prefix = raw.to_lowercase();
        let mut matches = items
            .iter()
            .map(&id_of)
            .filter(|id| id.to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(id), None) => Some(id),
            (Some(_), Some(_)) => {
                let message = format!("{} id '{}' is ambiguous", kind, raw);
                return Err(PilotError::Validation(message));
            }
            _ => None,
        }
    };

    found.ok_or_else(|| PilotError::NotFound(format!("{} '{}'", kind, raw)))
}

fn resolve_prompt(library: &Library, raw: &str) -> Result<Uuid> {
    resolve_id(library.store.list_prompts(), raw, "prompt", |p| p.id)
}

fn resolve_collection(library: &Library, raw: &str) -> Result<Uuid> {
    let collections = library.store.list_collections();
    resolve_id(collections, raw, "collection", |c| c.id)
}

fn position_of(prompts: &[Prompt], id: &Uuid) -> usize {
    prompts
        .iter()
        .position(|p| p.id == *id)
        .map_or(0, |i| i + 1)
}

fn print_prompt_line(position: usize, prompt: &Prompt) {
    println!(
        "  {:>3}. {} [{}]{}",
        position,
        prompt.title,
        prompt.category,
        if prompt.is_favorite { " *" } else { "" }
    );
}

pub fn handle_list(
    config: &Config,
    query: Vec<String>,
    filter: Option<String>,
    json: bool,
) -> Result<()> {
    let library = open_library(config)?;
    let prompts = library.store.list_prompts();

    let (text, mut active) = parse_query(&query.join(" "));
    if let Some(raw) = filter {
        active = raw.parse().map_err(PilotError::Validation)?;
    }

    let matching = filter_prompts(prompts, &text, &active);

    if json {
        println!("{}", serde_json::to_string_pretty(&matching)?);
        return Ok(());
    }

    if matching.is_empty() {
        println!("No prompts found.");
        return Ok(());
    }

    println!("{} ({} of {}):\n", active, matching.len(), prompts.len());
    for prompt in matching {
        print_prompt_line(position_of(prompts, &prompt.id), prompt);
    }

    Ok(())
}

pub fn handle_get(config: &Config, id: String, json: bool) -> Result<()> {
    let library = open_library(config)?;
    let prompt_id = resolve_prompt(&library, &id)?;
    let prompt = library
        .store
        .get_prompt(&prompt_id)
        .ok_or_else(|| PilotError::NotFound(format!("prompt '{}'", id)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(prompt)?);
        return Ok(());
    }

    println!("{} ({})", prompt.title, prompt.id);
    println!("Category: {}", prompt.category);
    if !prompt.tags.is_empty() {
        println!("Tags: {}", prompt.tags.join(", "));
    }
    if !prompt.recommended_ai.is_empty() {
        println!("Recommended AI: {}", prompt.recommended_ai.join(", "));
    }
    if prompt.is_favorite {
        println!("Favorite: yes");
    }
    let collections: Vec<&str> = library
        .store
        .collections_containing(&prompt.id)
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();
    if !collections.is_empty() {
        println!("Collections: {}", collections.join(", "));
    }
    println!("\n{}", prompt.content);

    Ok(())
}

pub fn handle_favorite(config: &Config, id: String) -> Result<()> {
    let mut library = open_library(config)?;
    let prompt_id = resolve_prompt(&library, &id)?;

    let now_favorite = library
        .store
        .toggle_favorite(&prompt_id)
        .ok_or_else(|| PilotError::NotFound(format!("prompt '{}'", id)))?;
    let title = library
        .store
        .get_prompt(&prompt_id)
        .map(|p| p.title.clone())
        .unwrap_or_default();

    if now_favorite {
        println!("Added '{}' to favorites", title);
    } else {
        println!("Removed '{}' from favorites", title);
    }

    Ok(())
}

pub fn handle_favorites(config: &Config, json: bool) -> Result<()> {
    let library = open_library(config)?;
    let favorites = library.store.list_favorites();

    if json {
        println!("{}", serde_json::to_string_pretty(&favorites)?);
    } else if favorites.is_empty() {
        println!("No favorites yet.");
    } else {
        let prompts = library.store.list_prompts();
        println!("Favorites:\n");
        for prompt in favorites {
            print_prompt_line(position_of(prompts, &prompt.id), prompt);
        }
    }

    Ok(())
}

pub fn handle_categories(config: &Config) -> Result<()> {
    let library = open_library(config)?;
    for category in distinct_categories(library.store.list_prompts()) {
        println!("{}", category);
    }
    Ok(())
}

pub fn handle_models(config: &Config) -> Result<()> {
    let library = open_library(config)?;
    for model in distinct_ai_models(library.store.list_prompts()) {
        println!("{}", model);
    }
    Ok(())
}

// ========== Collections ==========

fn print_collection_line(position: usize, collection: &Collection) {
    let count = collection.prompt_ids.len();
    println!(
        "  {:>3}. {} ({} prompt{})",
        position,
        collection.name,
        count,
        if count == 1 { "" } else { "s" }
    );
    if let Some(ref description) = collection.description {
        println!("       {}", description);
    }
}

pub fn handle_collection_list(config: &Config, json: bool) -> Result<()> {
    let library = open_library(config)?;
    let collections = library.store.list_collections();

    if json {
        println!("{}", serde_json::to_string_pretty(collections)?);
    } else if collections.is_empty() {
        println!("No collections found.");
    } else {
        println!("Collections:\n");
        for (i, collection) in collections.iter().enumerate() {
            print_collection_line(i + 1, collection);
        }
    }

    Ok(())
}

pub fn handle_collection_show(config: &Config, id: String, json: bool) -> Result<()> {
    let library = open_library(config)?;
    let collection_id = resolve_collection(&library, &id)?;
    let collection = library
        .store
        .get_collection(&collection_id)
        .ok_or_else(|| PilotError::NotFound(format!("collection '{}'", id)))?;
    let members = library.store.collection_prompts(&collection_id);

    if json {
        let output = serde_json::json!({
            "collection": collection,
            "prompts": members,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} ({})", collection.name, collection.id);
    if let Some(ref description) = collection.description {
        println!("{}", description);
    }
    println!(
        "Created: {}",
        collection.created_at.format("%Y-%m-%d %H:%M")
    );

    if members.is_empty() {
        println!("\nNo prompts in this collection.");
    } else {
        let prompts = library.store.list_prompts();
        println!();
        for prompt in members {
            print_prompt_line(position_of(prompts, &prompt.id), prompt);
        }
    }

    Ok(())
}

pub fn handle_collection_create(
    config: &Config,
    name: String,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let mut library = open_library(config)?;
    let collection = library
        .store
        .create_collection(&name, description.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&collection)?);
    } else {
        println!(
            "Created collection '{}' ({})",
            collection.name, collection.id
        );
    }

    Ok(())
}

pub fn handle_collection_delete(config: &Config, id: String) -> Result<()> {
    let mut library = open_library(config)?;
    let collection_id = resolve_collection(&library, &id)?;
    let name = library
        .store
        .get_collection(&collection_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();

    if !library.store.delete_collection(&collection_id) {
        return Err(PilotError::NotFound(format!("collection '{}'", id)));
    }
    println!("Deleted collection '{}'", name);

    Ok(())
}

fn membership_names(library: &Library, collection_id: &Uuid, prompt_id: &Uuid) -> (String, String) {
    let collection = library
        .store
        .get_collection(collection_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let prompt = library
        .store
        .get_prompt(prompt_id)
        .map(|p| p.title.clone())
        .unwrap_or_default();
    (collection, prompt)
}

pub fn handle_collection_add(config: &Config, collection: String, prompt: String) -> Result<()> {
    let mut library = open_library(config)?;
    let collection_id = resolve_collection(&library, &collection)?;
    let prompt_id = resolve_prompt(&library, &prompt)?;
    let (collection_name, prompt_title) = membership_names(&library, &collection_id, &prompt_id);

    if library.store.add_to_collection(&collection_id, &prompt_id) {
        println!("Added '{}' to '{}'", prompt_title, collection_name);
    } else {
        println!("'{}' is already in '{}'", prompt_title, collection_name);
    }

    Ok(())
}

pub fn handle_collection_remove(config: &Config, collection: String, prompt: String) -> Result<()> {
    let mut library = open_library(config)?;
    let collection_id = resolve_collection(&library, &collection)?;
    let prompt_id = resolve_prompt(&library, &prompt)?;
    let (collection_name, prompt_title) = membership_names(&library, &collection_id, &prompt_id);

    let removed = library
        .store
        .remove_from_collection(&collection_id, &prompt_id);
    if removed {
        println!("Removed '{}' from '{}'", prompt_title, collection_name);
    } else {
        println!("'{}' is not in '{}'", prompt_title, collection_name);
    }

    Ok(())
}

// ========== Challenges ==========

fn print_challenge(challenge: &DailyChallenge) {
    println!("Daily Challenge for {}", challenge.date.format("%Y-%m-%d"));
    println!("Title: {}", challenge.title);
    println!("Difficulty: {}", challenge.difficulty);
    println!("\n{}", challenge.description);
    println!("\nPrompt:\n{}", challenge.prompt);
    if !challenge.hints.is_empty() {
        println!("\nHints:");
        for hint in &challenge.hints {
            println!("  - {}", hint);
        }
    }
    if !challenge.sample_solution.is_empty() {
        println!("\nSample solution:\n{}", challenge.sample_solution);
    }
}

pub fn handle_challenge_today(config: &Config, json: bool) -> Result<()> {
    let mut library = open_library(config)?;
    let challenge = library.challenges.todays_challenge();

    if json {
        println!("{}", serde_json::to_string_pretty(&challenge)?);
    } else {
        print_challenge(&challenge);
    }

    Ok(())
}

pub fn handle_challenge_refresh(config: &Config, json: bool) -> Result<()> {
    let mut library = open_library(config)?;
    let challenge = library.challenges.refresh();

    if json {
        println!("{}", serde_json::to_string_pretty(&challenge)?);
    } else {
        print_challenge(&challenge);
    }

    Ok(())
}

pub fn handle_challenge_past(config: &Config, json: bool) -> Result<()> {
    let library = open_library(config)?;
    let past = library.challenges.past_challenges();

    if json {
        println!("{}", serde_json::to_string_pretty(&past)?);
    } else if past.is_empty() {
        println!("No past challenges.");
    } else {
        println!("Past challenges:\n");
        for challenge in past {
            println!(
                "  {}  {} ({})",
                challenge.date.format("%Y-%m-%d"),
                challenge.title,
                challenge.difficulty
            );
        }
    }

    Ok(())
}

// ========== Defaults ==========

pub fn handle_reset(config: &Config) -> Result<()> {
    let mut library = open_library(config)?;
    library.store.reset_to_defaults();
    println!(
        "Reset library to {} sample prompts and {} collections",
        library.store.list_prompts().len(),
        library.store.list_collections().len()
    );
    Ok(())
}

pub fn handle_reload_samples(config: &Config) -> Result<()> {
    let mut library = open_library(config)?;
    library.store.force_reload_samples();
    println!("Reloaded {} sample prompts", library.store.list_prompts().len());
    Ok(())
}
