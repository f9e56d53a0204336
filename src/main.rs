use clap::Parser;
use promptpilot::cli::{
    handle_categories, handle_challenge_past, handle_challenge_refresh, handle_challenge_today,
    handle_collection_add, handle_collection_create, handle_collection_delete,
    handle_collection_list, handle_collection_remove, handle_collection_show, handle_favorite,
    handle_favorites, handle_get, handle_list, handle_models, handle_reload_samples, handle_reset,
    ChallengeAction, Cli, CollectionAction, Commands,
};
use promptpilot::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    // stdout is reserved for command output
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::List {
            query,
            filter,
            json,
        } => handle_list(&config, query, filter, json),
        Commands::Get { id, json } => handle_get(&config, id, json),
        Commands::Favorite { id } => handle_favorite(&config, id),
        Commands::Favorites { json } => handle_favorites(&config, json),
        Commands::Categories => handle_categories(&config),
        Commands::Models => handle_models(&config),
        Commands::Collection(collection_cmd) => match collection_cmd.action {
            CollectionAction::List { json } => handle_collection_list(&config, json),
            CollectionAction::Show { id, json } => handle_collection_show(&config, id, json),
            CollectionAction::Create {
                name,
                description,
                json,
            } => handle_collection_create(&config, name, description, json),
            CollectionAction::Delete { id } => handle_collection_delete(&config, id),
            CollectionAction::Add { collection, prompt } => {
                handle_collection_add(&config, collection, prompt)
            }
            CollectionAction::Remove { collection, prompt } => {
                handle_collection_remove(&config, collection, prompt)
            }
        },
        Commands::Challenge(challenge_cmd) => match challenge_cmd.action {
            ChallengeAction::Today { json } => handle_challenge_today(&config, json),
            ChallengeAction::Past { json } => handle_challenge_past(&config, json),
            ChallengeAction::Refresh { json } => handle_challenge_refresh(&config, json),
        },
        Commands::Reset => handle_reset(&config),
        Commands::ReloadSamples => handle_reload_samples(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
