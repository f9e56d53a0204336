mod commands;
mod handlers;

pub use commands::{
    ChallengeAction, ChallengeCommand, Cli, CollectionAction, CollectionCommand, Commands,
};
pub use handlers::{
    handle_categories, handle_challenge_past, handle_challenge_refresh, handle_challenge_today,
    handle_collection_add, handle_collection_create, handle_collection_delete,
    handle_collection_list, handle_collection_remove, handle_collection_show, handle_favorite,
    handle_favorites, handle_get, handle_list, handle_models, handle_reload_samples, handle_reset,
};
