use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "promptpilot")]
#[command(
    version,
    about = "A local library of AI prompts with collections and daily challenges"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the library database (overrides PROMPTPILOT_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List prompts, optionally narrowed by a search query and a filter
    List {
        /// Search text; may contain "category:X", "ai:X" or "is:favorite" tokens
        query: Vec<String>,

        /// Filter (all, favorites, category:<name>, ai:<model>)
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single prompt
    Get {
        /// Prompt ID (list position like "3" or UUID prefix like "a1b2c")
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle the favorite flag of a prompt
    Favorite {
        /// Prompt ID (list position or UUID prefix)
        id: String,
    },

    /// List favorite prompts
    Favorites {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List distinct prompt categories
    Categories,

    /// List distinct recommended AI models
    Models,

    /// Manage collections
    Collection(CollectionCommand),

    /// Daily prompt-writing challenge
    Challenge(ChallengeCommand),

    /// Replace prompts and collections with the sample data
    Reset,

    /// Replace prompts and collections with the sample data and record the sample version
    ReloadSamples,
}

#[derive(Args, Debug)]
pub struct CollectionCommand {
    #[command(subcommand)]
    pub action: CollectionAction,
}

#[derive(Subcommand, Debug)]
pub enum CollectionAction {
    /// List collections
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a collection and its prompts
    Show {
        /// Collection ID (list position or UUID prefix)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new, empty collection
    Create {
        /// Collection name
        name: String,

        /// Optional description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a collection (its prompts are kept)
    Delete {
        /// Collection ID (list position or UUID prefix)
        id: String,
    },

    /// Add a prompt to a collection
    Add {
        /// Collection ID (list position or UUID prefix)
        collection: String,

        /// Prompt ID (list position or UUID prefix)
        prompt: String,
    },

    /// Remove a prompt from a collection
    Remove {
        /// Collection ID (list position or UUID prefix)
        collection: String,

        /// Prompt ID (list position or UUID prefix)
        prompt: String,
    },
}

#[derive(Args, Debug)]
pub struct ChallengeCommand {
    #[command(subcommand)]
    pub action: ChallengeAction,
}

#[derive(Subcommand, Debug)]
pub enum ChallengeAction {
    /// Show today's challenge, generating it on first request
    Today {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show retained challenges from earlier days
    Past {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-check the calendar day and show the current challenge
    Refresh {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
