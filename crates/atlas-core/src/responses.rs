//! CLI response types returned as JSON by `atlas` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::favorite::{FavoriteItem, ToggleAction};
use crate::page::PageId;

/// Response from `atlas fav toggle`.
///
/// `persisted` is false when the write to durable storage failed; the
/// in-memory collection still reflects the toggle for the rest of the session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ToggleResponse {
    pub item: FavoriteItem,
    pub action: ToggleAction,
    pub persisted: bool,
    pub total: usize,
}

/// Response from `atlas fav check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MembershipResponse {
    pub name: String,
    pub favorite: bool,
}

/// Response from `atlas fav list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FavoritesListResponse {
    pub favorites: Vec<FavoriteItem>,
    pub total: usize,
}

/// One row of `atlas routes` and the body of `atlas resolve`.
///
/// Redirect rows have no `name`/`page` and carry the target path instead.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RouteView {
    pub path: String,
    pub name: Option<String>,
    pub page: Option<PageId>,
    pub redirect: Option<String>,
}

/// One step of `atlas nav`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NavigationStep {
    pub requested: String,
    pub active: String,
    pub page: PageId,
    pub found: bool,
}
