//! # atlas-store
//!
//! The favorites state container and the durable key-value slot behind it.
//!
//! [`FavoritesStore`] owns the ordered, name-unique collection of favorites.
//! It is constructed once per session over any [`KeyValueStore`] and handed by
//! reference to whatever needs it. Every toggle rewrites the whole collection
//! under the `favorites` key. Persistence is best-effort: a failed write keeps
//! the in-memory state and is reported through [`FavoritesStore::is_persisted`].

pub mod codec;
pub mod error;
pub mod favorites;
pub mod file;
pub mod kv;

pub use error::StoreError;
pub use favorites::{FAVORITES_KEY, FavoritesStore, Toggled};
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
