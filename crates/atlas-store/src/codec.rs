//! Wire format of the `favorites` slot: a JSON array of objects, each with a
//! string `name` and any extra fields.

use std::collections::HashSet;

use atlas_core::FavoriteItem;
use serde_json::Value;

use crate::error::StoreError;

/// Serialize the whole collection, preserving order.
pub fn encode(favorites: &[FavoriteItem]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(favorites)?)
}

/// Parse a stored value.
///
/// Blank input is an empty collection. Input that is not JSON, or JSON that
/// is not an array, is `Malformed`. Inside a valid array, elements without a
/// string `name` and repeated names are dropped (first occurrence wins) so
/// the result always satisfies the uniqueness invariant.
pub fn decode(raw: &str) -> Result<Vec<FavoriteItem>, StoreError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_json::from_str(raw).map_err(|e| StoreError::Malformed(e.to_string()))?;
    let Value::Array(elements) = value else {
        return Err(StoreError::Malformed(format!(
            "expected a JSON array, found {}",
            kind_of(&value)
        )));
    };

    let mut seen = HashSet::with_capacity(elements.len());
    let mut favorites = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        match FavoriteItem::try_from(element) {
            Ok(item) => {
                if seen.insert(item.name.clone()) {
                    favorites.push(item);
                } else {
                    tracing::warn!(index, name = %item.name, "dropping duplicate stored favorite");
                }
            }
            Err(error) => {
                tracing::warn!(index, %error, "dropping unreadable stored favorite");
            }
        }
    }
    Ok(favorites)
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn names(items: &[FavoriteItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn blank_is_empty() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("  \n").unwrap().is_empty());
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn garbage_and_non_arrays_are_malformed() {
        for raw in ["not json", "{\"name\":\"x\"}", "null", "42", "\"[]\""] {
            assert!(
                matches!(decode(raw), Err(StoreError::Malformed(_))),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn keeps_order_and_payload() {
        let raw = r#"[{"name":"b","rank":2},{"name":"a","tags":["x"]}]"#;
        let items = decode(raw).unwrap();
        assert_eq!(names(&items), vec!["b", "a"]);
        assert_eq!(items[0].field("rank"), Some(&json!(2)));
        assert_eq!(items[1].field("tags"), Some(&json!(["x"])));
    }

    #[test]
    fn drops_nameless_elements_and_duplicates() {
        let raw = r#"[{"name":"a","v":1},7,{"title":"no name"},{"name":"a","v":2},{"name":"b"}]"#;
        let items = decode(raw).unwrap();
        assert_eq!(names(&items), vec!["a", "b"]);
        assert_eq!(items[0].field("v"), Some(&json!(1)));
    }

    #[test]
    fn encode_is_compact_array() {
        let items = vec![FavoriteItem::new("GPT-4")];
        assert_eq!(encode(&items).unwrap(), r#"[{"name":"GPT-4"}]"#);
        assert_eq!(encode(&[]).unwrap(), "[]");
    }
}
