//! Favorite catalog items.

use std::fmt;
use std::hash::{Hash, Hasher};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

const NAME_KEY: &str = "name";

/// A catalog entry the user has pinned.
///
/// `name` is the identity of the item. Every other attribute is carried in
/// the payload verbatim and never inspected. The payload never holds a
/// `name` key, so the identity survives a write and reload. Equality and hashing only look at
/// `name`, so two items with the same name and different payloads are the
/// same favorite.
///
/// On the wire the payload is flattened next to `name`:
///
/// ```text
/// {"name": "GPT-4", "vendor": "OpenAI", "url": "https://..."}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FavoriteItem {
    pub name: String,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl FavoriteItem {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Map::new(),
        }
    }

    /// Attach an opaque payload field. `name` is reserved for the identity.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != NAME_KEY {
            self.payload.insert(key, value.into());
        }
        self
    }

    /// Replace the payload. A `name` entry in `payload` is discarded.
    #[must_use]
    pub fn with_payload(mut self, mut payload: Map<String, Value>) -> Self {
        payload.remove(NAME_KEY);
        self.payload = payload;
        self
    }

    #[must_use]
    pub const fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Check whether `other` refers to the same favorite.
    #[must_use]
    pub fn same_name(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl PartialEq for FavoriteItem {
    fn eq(&self, other: &Self) -> bool {
        self.same_name(other)
    }
}

impl Eq for FavoriteItem {}

impl Hash for FavoriteItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl TryFrom<Value> for FavoriteItem {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut map) = value else {
            return Err(CoreError::Validation(
                "favorite item must be a JSON object".into(),
            ));
        };
        let name = match map.remove(NAME_KEY) {
            Some(Value::String(name)) => name,
            Some(_) => {
                return Err(CoreError::Validation(
                    "favorite item `name` must be a string".into(),
                ));
            }
            None => {
                return Err(CoreError::Validation(
                    "favorite item is missing `name`".into(),
                ));
            }
        };
        Ok(Self { name, payload: map })
    }
}

/// What a toggle did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    Added,
    Removed,
}

impl ToggleAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
