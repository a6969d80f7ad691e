//! Field normalizer
//!
//! Turns an arbitrary JSON value into a bounded, trimmed string before any
//! rule looks at it. Over-long input is cut silently, never rejected.

use serde_json::Value;

/// Coerce a payload value to trimmed text of at most `max` characters
///
/// Absent and `null` become the empty string. Strings are taken as is,
/// any other JSON value uses its compact textual form, so arrays and
/// objects keep their brackets (`["a","b"]`).
pub fn normalize(value: Option<&Value>, max: usize) -> String {
    let text = match value {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) => s.trim(),
        Some(other) => return truncate(other.to_string().trim(), max),
    };
    truncate(text, max)
}

/// Keep the first `max` characters
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

/// Normalize `key` from a JSON object
pub fn normalize_field(payload: &serde_json::Map<String, Value>, key: &str, max: usize) -> String {
    normalize(payload.get(key), max)
}
