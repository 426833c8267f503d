//! Raw criteria-document normalization.
//!
//! Scenario records carry their evaluation criteria as free-form JSON.
//! At least five incompatible shapes exist in production data: a document
//! with an `evaluation_criteria` array, a bare array, a `categories`
//! array, a `criteria` array, and a plain keyed object (sometimes with
//! French field names). Each shape has its own parser; the parsers are
//! tried in priority order and the first match wins, with no merging
//! across shapes.

use std::collections::HashSet;

use oscesim_core::models::criterion::{CanonicalCriterion, DEFAULT_MAX_SCORE};
use serde_json::{Map, Value};

use crate::fields;

/// Normalize a scenario's raw criteria document.
///
/// Never panics and never errors: any input that matches none of the
/// recognized shapes yields an empty list, which callers replace with
/// [`crate::fallback_criteria`].
pub fn normalize(raw: Option<&Value>) -> Vec<CanonicalCriterion> {
    let Some(value) = raw else {
        return Vec::new();
    };

    let candidates = parse_evaluation_criteria_field(value)
        .or_else(|| parse_top_level_array(value))
        .or_else(|| parse_categories(value))
        .or_else(|| parse_criteria_field(value))
        .or_else(|| parse_keyed_object(value))
        .unwrap_or_default();

    finalize(candidates)
}

/// A criterion candidate extracted by one shape parser, before slugging
/// and collision handling.
struct Candidate {
    name: String,
    description: String,
    max_score: u32,
    weight: Option<f64>,
    indicators: Vec<String>,
}

// ── Shape parsers ────────────────────────────────────────────────────────────

/// Shape 1: `{ "evaluation_criteria": [...] }`.
fn parse_evaluation_criteria_field(value: &Value) -> Option<Vec<Candidate>> {
    let items = value.get("evaluation_criteria")?.as_array()?;
    Some(candidates_from_elements(items))
}

/// Shape 2: the document is itself an array of criteria.
fn parse_top_level_array(value: &Value) -> Option<Vec<Candidate>> {
    value.as_array().map(|items| candidates_from_elements(items))
}

/// Shape 3: `{ "categories": [...] }` — each category becomes a criterion.
///
/// When a category has no explicit description, the descriptions of its
/// indicators are joined with `" ; "` to form one.
fn parse_categories(value: &Value) -> Option<Vec<Candidate>> {
    let items = value.get("categories")?.as_array()?;

    let candidates = items
        .iter()
        .filter_map(Value::as_object)
        .map(|obj| {
            let indicators = fields::indicators(obj);
            let description = fields::first_string(obj, fields::DESCRIPTION_KEYS)
                .unwrap_or_else(|| indicators.join(" ; "));
            Candidate {
                name: category_name(obj),
                description,
                max_score: fields::max_score(obj),
                weight: fields::weight(obj),
                indicators,
            }
        })
        .collect();

    Some(candidates)
}

/// Shape 4: `{ "criteria": [...] }`.
fn parse_criteria_field(value: &Value) -> Option<Vec<Candidate>> {
    let items = value.get("criteria")?.as_array()?;
    Some(candidates_from_elements(items))
}

/// Shape 5: a plain object — each own key is one criterion.
///
/// The key becomes the name; a string value becomes the description, and
/// an object value may carry description, indicators (or `elements`), and
/// weight (or `poids`).
fn parse_keyed_object(value: &Value) -> Option<Vec<Candidate>> {
    let obj = value.as_object()?;

    let candidates = obj
        .iter()
        .map(|(key, entry)| match entry {
            Value::Object(body) => Candidate {
                name: key.clone(),
                description: fields::first_string(body, fields::DESCRIPTION_KEYS)
                    .unwrap_or_default(),
                max_score: fields::max_score(body),
                weight: fields::weight(body),
                indicators: fields::indicators(body),
            },
            Value::String(text) => Candidate {
                name: key.clone(),
                description: text.trim().to_string(),
                max_score: DEFAULT_MAX_SCORE,
                weight: None,
                indicators: Vec::new(),
            },
            _ => Candidate {
                name: key.clone(),
                description: String::new(),
                max_score: DEFAULT_MAX_SCORE,
                weight: None,
                indicators: Vec::new(),
            },
        })
        .collect();

    Some(candidates)
}

// ── Element extraction ───────────────────────────────────────────────────────

/// Map array elements to candidates, shared by shapes 1, 2, and 4.
///
/// Elements are usually objects; a bare string element is treated as a
/// name-only criterion. Anything else is dropped.
fn candidates_from_elements(items: &[Value]) -> Vec<Candidate> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(obj) => Some(Candidate {
                name: fields::first_string(obj, fields::NAME_KEYS).unwrap_or_default(),
                description: fields::first_string(obj, fields::DESCRIPTION_KEYS)
                    .unwrap_or_default(),
                max_score: fields::max_score(obj),
                weight: fields::weight(obj),
                indicators: fields::indicators(obj),
            }),
            Value::String(text) if !text.trim().is_empty() => Some(Candidate {
                name: text.trim().to_string(),
                description: String::new(),
                max_score: DEFAULT_MAX_SCORE,
                weight: None,
                indicators: Vec::new(),
            }),
            _ => None,
        })
        .collect()
}

fn category_name(obj: &Map<String, Value>) -> String {
    fields::first_string(obj, &["name", "title", "category", "id"]).unwrap_or_default()
}

// ── Finalization ─────────────────────────────────────────────────────────────

/// Assign slugs, resolve collisions, and produce canonical criteria.
fn finalize(candidates: Vec<Candidate>) -> Vec<CanonicalCriterion> {
    let mut seen: HashSet<String> = HashSet::new();

    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            let name = if candidate.name.trim().is_empty() {
                format!("Criterion {}", index + 1)
            } else {
                candidate.name
            };

            let mut id = slugify(&name);
            if id.is_empty() {
                id = format!("criterion_{index}");
            }
            if !seen.insert(id.clone()) {
                id = format!("{id}_{index}");
                seen.insert(id.clone());
            }

            CanonicalCriterion {
                id,
                name,
                description: candidate.description,
                max_score: candidate.max_score,
                weight: candidate.weight,
                indicators: candidate.indicators,
            }
        })
        .collect()
}

/// Lower-case, collapse whitespace runs (and separators) to single
/// underscores, drop other punctuation.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.trim().to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        }
    }

    slug
}
