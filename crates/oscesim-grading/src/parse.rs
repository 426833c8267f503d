//! Defensive parsing of grading-capability responses.
//!
//! The capability usually returns well-formed JSON, but not always: it may
//! wrap the object in a markdown code fence, rename fields, return scores
//! as strings, or omit whole sections. Every field is optional here with a
//! safe default; anything unusable degrades to the default rather than
//! failing the parse. Field aliases are resolved through one table per
//! field, same policy as the rubric normalizer.

use oscesim_core::models::grading::{GradingOverall, GradingResult, RawCriterionScore};
use serde_json::{Map, Value};

const SCORE_KEYS: &[&str] = &["score", "note"];
const MAX_SCORE_KEYS: &[&str] = &["maxScore", "max_score"];
const ACTION_KEYS: &[&str] = &["actions", "recommendations"];
const SUMMARY_KEYS: &[&str] = &["summary", "comment"];
const OVERALL_PERCENT_KEYS: &[&str] = &["overall_score_percent", "overallScorePercent"];

/// Parse a raw capability response into a grading result.
///
/// Returns `None` when the response is not a JSON object at all; a
/// well-formed object with missing or malformed fields parses to defaults
/// instead.
pub fn parse_grading_response(raw: &str) -> Option<GradingResult> {
    let cleaned = strip_code_fence(raw);
    let value: Value = serde_json::from_str(cleaned).ok()?;
    let obj = value.as_object()?;

    let criteria = obj
        .get("criteria")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_criterion_entry).collect())
        .unwrap_or_default();

    Some(GradingResult {
        criteria,
        overall: parse_overall(obj),
        overall_score_percent: first_number(obj, OVERALL_PERCENT_KEYS),
    })
}

/// Strip a leading/trailing markdown code fence (```json ... ```).
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline.
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

fn parse_criterion_entry(item: &Value) -> Option<RawCriterionScore> {
    let obj = item.as_object()?;

    Some(RawCriterionScore {
        id: string_field(obj, "id"),
        name: string_field(obj, "name"),
        score: first_number(obj, SCORE_KEYS),
        max_score: first_number(obj, MAX_SCORE_KEYS),
        strengths: string_list(obj.get("strengths")),
        weaknesses: string_list(obj.get("weaknesses")),
        actions: first_list(obj, ACTION_KEYS),
        justification: string_field(obj, "justification").unwrap_or_default(),
    })
}

fn parse_overall(obj: &Map<String, Value>) -> GradingOverall {
    let Some(overall) = obj.get("overall").and_then(Value::as_object) else {
        return GradingOverall::default();
    };

    GradingOverall {
        strengths: string_list(overall.get("strengths")),
        weaknesses: string_list(overall.get("weaknesses")),
        recommendations: string_list(overall.get("recommendations")),
        summary: SUMMARY_KEYS
            .iter()
            .find_map(|key| string_field(overall, key))
            .unwrap_or_default(),
    }
}

// ── Coercion helpers ─────────────────────────────────────────────────────────

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// First numeric value among the given keys. Numeric strings count.
fn first_number(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| number(obj.get(*key)?))
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// First non-null value among the given keys, coerced to a string list.
fn first_list(obj: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .find_map(|key| match obj.get(*key) {
            Some(value) if !value.is_null() => Some(string_list(Some(value))),
            _ => None,
        })
        .unwrap_or_default()
}

/// Coerce a value to a string list: arrays keep their non-empty string
/// entries, a bare string becomes a one-element list, anything else is
/// empty.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Vec::new()
            } else {
                vec![s.to_string()]
            }
        }
        _ => Vec::new(),
    }
}
