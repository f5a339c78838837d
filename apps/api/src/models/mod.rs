pub mod candidate;
pub mod feedback;
pub mod job;
pub mod score;

use serde_json::Value;

/// Reads a JSONB column that should hold an array of strings.
/// Non-string items and non-array values are ignored rather than rejected.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
