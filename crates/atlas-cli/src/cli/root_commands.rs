use clap::{Args, Subcommand};

use crate::cli::subcommands::FavCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the route table, redirects first.
    Routes,
    /// Resolve a path, URL, or hash location to its route.
    Resolve(ResolveArgs),
    /// Favorites.
    Fav {
        #[command(subcommand)]
        action: FavCommands,
    },
    /// Replay navigation events and show the active route after each.
    Nav(NavArgs),
    /// Show what a shell menu command opens.
    Menu(MenuArgs),
    /// Print the JSON Schema of the stored favorites value.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct ResolveArgs {
    /// Location, e.g. `/about` or `index.html#/preferences`.
    pub location: String,
}

#[derive(Clone, Debug, Args)]
pub struct NavArgs {
    /// Locations to visit in order; `back` pops the history.
    #[arg(required = true)]
    pub locations: Vec<String>,
    /// Start location (defaults to `general.start_path`).
    #[arg(long)]
    pub from: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct MenuArgs {
    /// preferences, about, or documentation.
    pub command: String,
}
