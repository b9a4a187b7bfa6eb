use serde_json::{Map, Value};

/// Parse repeated `KEY=VALUE` arguments into a payload map.
///
/// Values are read as JSON when they parse (`5`, `true`, `["a"]`) and kept as
/// plain strings otherwise. `name` is reserved for the item identity.
pub fn parse_fields(raw: &[String]) -> anyhow::Result<Map<String, Value>> {
    let mut fields = Map::new();
    for entry in raw {
        let Some((key, value)) = entry.split_once('=') else {
            anyhow::bail!("invalid field '{entry}': expected KEY=VALUE");
        };
        let key = key.trim();
        if key.is_empty() {
            anyhow::bail!("invalid field '{entry}': empty key");
        }
        if key == "name" {
            anyhow::bail!("invalid field '{entry}': 'name' is the item identity");
        }
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        fields.insert(key.to_string(), value);
    }
    Ok(fields)
}
