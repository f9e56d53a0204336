// src/seed/collections.rs
use super::{seed_epoch, seed_id};
use crate::entity::Collection;

fn sample(name: &str, description: &str, color: &str) -> Collection {
    Collection {
        id: seed_id("collection", name),
        name: name.to_string(),
        description: Some(description.to_string()),
        prompt_ids: Vec::new(),
        color: color.to_string(),
        created_at: seed_epoch(),
    }
}

pub fn sample_collections() -> Vec<Collection> {
    vec![
        sample(
            "Startup Essentials",
            "Key prompts for launching your startup",
            "pilotBlue",
        ),
        sample(
            "Content Creator Kit",
            "Everything you need for social media and blogging",
            "lightBlue",
        ),
        sample(
            "Developer Tools",
            "Code review, debugging, and documentation prompts",
            "pilotBlue",
        ),
    ]
}
