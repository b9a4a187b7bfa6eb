//! The favorites state container.

use atlas_core::{FavoriteItem, ToggleAction};

use crate::codec;
use crate::kv::KeyValueStore;

/// Storage key holding the serialized collection.
pub const FAVORITES_KEY: &str = "favorites";

/// Result of [`FavoritesStore::toggle_favorite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    pub action: ToggleAction,
    /// Whether the collection was written back to storage.
    pub persisted: bool,
}

/// Ordered, name-unique collection of favorites backed by a key-value slot.
///
/// One instance lives for the whole session. The in-memory collection is
/// the source of truth: when a write fails, memory and storage disagree
/// until the next successful write, and [`Self::is_persisted`] reports it.
#[derive(Debug)]
pub struct FavoritesStore<S> {
    storage: S,
    favorites: Vec<FavoriteItem>,
    persisted: bool,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load the collection from `storage`.
    ///
    /// Never fails: a missing key, an unreadable slot, or malformed data all
    /// produce an empty collection.
    pub fn load(storage: S) -> Self {
        let favorites = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => codec::decode(&raw).unwrap_or_else(|error| {
                tracing::warn!(%error, "stored favorites unreadable; starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "failed to read favorites; starting empty");
                Vec::new()
            }
        };
        tracing::debug!(count = favorites.len(), "loaded favorites");

        Self {
            storage,
            favorites,
            persisted: true,
        }
    }

    /// Whether an entry with `item.name` is in the collection.
    #[must_use]
    pub fn is_favorite(&self, item: &FavoriteItem) -> bool {
        self.contains(&item.name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Append `item` if its name is absent, otherwise remove the entry with
    /// that name. The full collection is then written back before returning.
    pub fn toggle_favorite(&mut self, item: FavoriteItem) -> Toggled {
        let action = match self.position(&item.name) {
            Some(index) => {
                let removed = self.favorites.remove(index);
                tracing::debug!(name = %removed.name, "removed favorite");
                ToggleAction::Removed
            }
            None => {
                tracing::debug!(name = %item.name, "added favorite");
                self.favorites.push(item);
                ToggleAction::Added
            }
        };

        let persisted = self.persist();
        Toggled { action, persisted }
    }

    /// Favorites in insertion order.
    #[must_use]
    pub fn favorites(&self) -> &[FavoriteItem] {
        &self.favorites
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FavoriteItem> {
        self.favorites.iter().find(|item| item.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// False after a failed write, until a later write succeeds.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.persisted
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the backing store, e.g. to simulate storage faults.
    pub const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.favorites.iter().position(|item| item.name == name)
    }

    fn persist(&mut self) -> bool {
        let result = codec::encode(&self.favorites)
            .and_then(|raw| self.storage.set(FAVORITES_KEY, &raw));
        self.persisted = match result {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(
                    %error,
                    count = self.favorites.len(),
                    "failed to persist favorites; keeping in-memory state"
                );
                false
            }
        };
        self.persisted
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::kv::MemoryStore;

    fn names<S: KeyValueStore>(store: &FavoritesStore<S>) -> Vec<String> {
        store.favorites().iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn starts_empty_without_key() {
        let store = FavoritesStore::load(MemoryStore::new());
        assert!(store.is_empty());
        assert!(store.is_persisted());
    }

    #[test]
    fn starts_empty_on_garbage() {
        let store = FavoritesStore::load(MemoryStore::new().with_value(FAVORITES_KEY, "not json"));
        assert!(store.is_empty());
    }

    #[test]
    fn loads_existing_collection() {
        let storage = MemoryStore::new()
            .with_value(FAVORITES_KEY, r#"[{"name":"Kimi"},{"name":"Claude","vendor":"Anthropic"}]"#);
        let store = FavoritesStore::load(storage);
        assert_eq!(names(&store), vec!["Kimi", "Claude"]);
        assert_eq!(
            store.get("Claude").unwrap().field("vendor"),
            Some(&json!("Anthropic"))
        );
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        let added = store.toggle_favorite(FavoriteItem::new("a"));
        store.toggle_favorite(FavoriteItem::new("b"));
        store.toggle_favorite(FavoriteItem::new("c"));
        assert_eq!(added.action, ToggleAction::Added);
        assert_eq!(names(&store), vec!["a", "b", "c"]);

        let removed = store.toggle_favorite(FavoriteItem::new("b"));
        assert_eq!(removed.action, ToggleAction::Removed);
        assert_eq!(names(&store), vec!["a", "c"]);
    }

    #[test]
    fn removal_matches_by_name_only() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        store.toggle_favorite(FavoriteItem::new("Suno").with_field("kind", "audio"));
        let toggled = store.toggle_favorite(FavoriteItem::new("Suno").with_field("kind", "other"));
        assert_eq!(toggled.action, ToggleAction::Removed);
        assert!(store.is_empty());
    }

    #[test]
    fn every_toggle_writes_once() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        store.toggle_favorite(FavoriteItem::new("a"));
        store.toggle_favorite(FavoriteItem::new("b"));
        store.toggle_favorite(FavoriteItem::new("a"));
        assert_eq!(store.storage().writes(), 3);
        assert_eq!(store.storage().raw(FAVORITES_KEY), Some(r#"[{"name":"b"}]"#));
    }

    #[test]
    fn write_failure_keeps_memory_state() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        store.toggle_favorite(FavoriteItem::new("a"));
        store.storage_mut().set_fail_writes(true);

        let toggled = store.toggle_favorite(FavoriteItem::new("b"));
        assert_eq!(toggled.action, ToggleAction::Added);
        assert!(!toggled.persisted);
        assert!(!store.is_persisted());
        assert!(store.contains("b"));
        assert_eq!(store.storage().raw(FAVORITES_KEY), Some(r#"[{"name":"a"}]"#));

        store.storage_mut().set_fail_writes(false);
        let healed = store.toggle_favorite(FavoriteItem::new("c"));
        assert!(healed.persisted);
        assert!(store.is_persisted());
        assert_eq!(
            store.storage().raw(FAVORITES_KEY),
            Some(r#"[{"name":"a"},{"name":"b"},{"name":"c"}]"#)
        );
    }
}
