use clap::Subcommand;

/// Favorites management.
#[derive(Clone, Debug, Subcommand)]
pub enum FavCommands {
    /// List favorites in insertion order.
    List,
    /// Check whether an item is a favorite.
    Check {
        /// Item name.
        name: String,
    },
    /// Add the item if absent, remove it if present.
    Toggle {
        /// Item name.
        name: String,
        /// Extra payload field stored with the item (repeatable). Values are
        /// parsed as JSON and fall back to plain strings.
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
}
