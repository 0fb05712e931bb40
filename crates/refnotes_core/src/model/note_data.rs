//! Structured payload attached to a note.
//!
//! The registry never interprets payload contents; the shape is agreed
//! between the producer that records it and the renderer that reads it.

use indexmap::IndexMap;
use serde_json::Value;

/// String-keyed, insertion-ordered map of opaque JSON values.
pub type NoteData = IndexMap<String, Value>;

/// Builds a `NoteData` from key/value pairs, keeping pair order.
pub fn note_data<K, V, I>(pairs: I) -> NoteData
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Converts a JSON object into `NoteData`.
///
/// Returns `None` for any non-object value.
pub fn note_data_from_json(value: Value) -> Option<NoteData> {
    match value {
        Value::Object(map) => Some(map.into_iter().collect()),
        _ => None,
    }
}

/// Shallow merge: `incoming` entries replace same-keyed entries in `target`.
///
/// Existing keys keep their position; new keys are appended in `incoming` order.
pub(crate) fn merge_into(target: &mut NoteData, incoming: NoteData) {
    for (key, value) in incoming {
        target.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::{merge_into, note_data, note_data_from_json};
    use serde_json::json;

    #[test]
    fn merge_is_last_write_wins_and_keeps_key_order() {
        let mut target = note_data([("x", 1), ("y", 2)]);
        merge_into(&mut target, note_data([("z", 3), ("x", 9)]));

        let keys: Vec<&str> = target.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["x", "y", "z"]);
        assert_eq!(target["x"], json!(9));
        assert_eq!(target["z"], json!(3));
    }

    #[test]
    fn from_json_accepts_objects_only() {
        let data = note_data_from_json(json!({"url": "https://example.com", "page": 4}))
            .expect("object should convert");
        assert_eq!(data["page"], json!(4));
        assert!(note_data_from_json(json!([1, 2])).is_none());
        assert!(note_data_from_json(json!("text")).is_none());
    }
}
