//! Field-alias resolution for raw criteria documents.
//!
//! Criteria were authored manually over several years, so the same logical
//! field appears under different names (including French-localized ones).
//! Each lookup is "first present value among known aliases, else default",
//! kept in one place so the aliasing table stays auditable and easy to
//! extend when another legacy shape surfaces.

use oscesim_core::models::criterion::DEFAULT_MAX_SCORE;
use serde_json::{Map, Value};

pub const NAME_KEYS: &[&str] = &["name", "title", "label", "id"];
pub const DESCRIPTION_KEYS: &[&str] = &["description", "desc"];
pub const INDICATOR_KEYS: &[&str] = &["indicators", "elements"];
pub const WEIGHT_KEYS: &[&str] = &["weight", "poids"];
pub const MAX_SCORE_KEYS: &[&str] = &["maxScore", "max_score"];

/// First non-empty string among the given keys, trimmed.
pub fn first_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        obj.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// First finite numeric value among the given keys.
pub fn first_number(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| {
        obj.get(*key)
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
    })
}

/// Criterion weight: `weight` or French `poids`, first numeric wins.
/// `None` when the document carried no usable weight.
pub fn weight(obj: &Map<String, Value>) -> Option<f64> {
    first_number(obj, WEIGHT_KEYS)
}

/// Raw-score ceiling, defaulting to 4 when absent or non-numeric.
pub fn max_score(obj: &Map<String, Value>) -> u32 {
    match first_number(obj, MAX_SCORE_KEYS) {
        Some(n) if n >= 1.0 => n.round() as u32,
        _ => DEFAULT_MAX_SCORE,
    }
}

/// Indicator list: `indicators` or French `elements`.
pub fn indicators(obj: &Map<String, Value>) -> Vec<String> {
    INDICATOR_KEYS
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_array))
        .map(|items| flatten_indicators(items))
        .unwrap_or_default()
}

/// Flatten indicator entries to plain strings.
///
/// Entries may be strings or `{description|name}` objects; anything else,
/// and empty strings, are dropped.
pub fn flatten_indicators(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            Value::Object(obj) => first_string(obj, &["description", "name"]),
            _ => None,
        })
        .collect()
}
