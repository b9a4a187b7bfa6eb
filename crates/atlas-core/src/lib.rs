//! # atlas-core
//!
//! Core types and error types shared by the Atlas crates.
//!
//! - [`FavoriteItem`]: a catalog entry a user has pinned, keyed by `name`
//! - [`PageId`]: the fixed set of catalog pages a navigation shell can render
//! - Cross-cutting error types
//! - CLI response types

pub mod errors;
pub mod favorite;
pub mod page;
pub mod responses;

pub use errors::CoreError;
pub use favorite::{FavoriteItem, ToggleAction};
pub use page::PageId;
