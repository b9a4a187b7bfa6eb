use atlas_core::FavoriteItem;
use atlas_core::responses::{FavoritesListResponse, MembershipResponse, ToggleResponse};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FavCommands;
use crate::commands::shared::fields::parse_fields;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atlas fav`.
pub fn handle(action: &FavCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FavCommands::List => {
            let favorites = ctx.favorites.favorites().to_vec();
            let total = favorites.len();
            output(&FavoritesListResponse { favorites, total }, flags)
        }
        FavCommands::Check { name } => {
            let response = MembershipResponse {
                name: name.clone(),
                favorite: ctx.favorites.contains(name),
            };
            output(&response, flags)
        }
        FavCommands::Toggle { name, fields } => {
            let item = FavoriteItem::new(name.clone()).with_payload(parse_fields(fields)?);
            let toggled = ctx.favorites.toggle_favorite(item.clone());
            if !toggled.persisted {
                tracing::warn!(name = %item.name, "favorite changed for this session only; storage write failed");
            }
            let response = ToggleResponse {
                item,
                action: toggled.action,
                persisted: toggled.persisted,
                total: ctx.favorites.len(),
            };
            output(&response, flags)
        }
    }
}
