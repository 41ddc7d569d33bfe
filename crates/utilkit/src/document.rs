// File: src/document.rs
// Purpose: Turn a serializable model into a partial-update document

use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};

/// Keys treated as the document identifier
const ID_KEYS: [&str; 2] = ["_id", "id"];

/// Serialize `model` into a JSON object.
///
/// With `strip_id`, `_id` / `id` keys are dropped, and with `strip_empty`
/// blank entries (see [`is_blank`]); both apply to nested objects as well.
/// Models that do not serialize to an object yield an empty map.
pub fn to_document<T: Serialize + ?Sized>(
    model: &T,
    strip_id: bool,
    strip_empty: bool,
) -> Result<Map<String, JsonValue>, serde_json::Error> {
    let JsonValue::Object(doc) = serde_json::to_value(model)? else {
        return Ok(Map::new());
    };

    Ok(prune(doc, strip_id, strip_empty))
}

/// `{"$set": ...}` update for `model`, without its id or blank fields
pub fn update_document<T: Serialize + ?Sized>(model: &T) -> Result<JsonValue, serde_json::Error> {
    let doc = to_document(model, true, true)?;
    Ok(json!({ "$set": doc }))
}

fn prune(doc: Map<String, JsonValue>, strip_id: bool, strip_empty: bool) -> Map<String, JsonValue> {
    doc.into_iter()
        .filter(|(key, _)| !(strip_id && ID_KEYS.contains(&key.as_str())))
        .filter_map(|(key, value)| {
            let value = match value {
                JsonValue::Object(inner) => JsonValue::Object(prune(inner, strip_id, strip_empty)),
                other => other,
            };
            (!(strip_empty && is_blank(&value))).then_some((key, value))
        })
        .collect()
}

/// Zero-ish values: `null`, `false`, `0`, whitespace-only strings, and
/// empty arrays or objects
pub fn is_blank(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => utilkit_validation::is_empty(s),
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::Object(map) => map.is_empty(),
    }
}
