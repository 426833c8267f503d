use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single exchange in a training-session transcript.
///
/// Message records arrive from the session collaborator in legacy shapes:
/// the text lives under `content`, `question`, or `response` depending on
/// when the session was recorded, and the timestamp (when present) under
/// `timestamp`, `created`, or `updated`. [`TranscriptMessage::from_record`]
/// absorbs those variants; the rest of the engine only sees this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptMessage {
    /// Raw role string as recorded, preserved for programmatic use.
    pub role: String,
    pub content: String,
    /// Pass-through legacy timestamp, never parsed or fabricated.
    pub timestamp: Option<String>,
}

/// Which side of the simulated encounter a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Student,
    Patient,
}

impl Speaker {
    /// Classify a raw role string. Anything not recognizably the student
    /// is attributed to the virtual patient.
    pub fn from_role(role: &str) -> Speaker {
        match role.to_ascii_lowercase().as_str() {
            "student" | "user" | "candidate" => Speaker::Student,
            _ => Speaker::Patient,
        }
    }

    /// Human label used in prompts and report evidence.
    pub fn label(self) -> &'static str {
        match self {
            Speaker::Student => "Student",
            Speaker::Patient => "Patient",
        }
    }
}

impl TranscriptMessage {
    /// Build a message from a raw session record.
    ///
    /// Content is the first non-empty of `content` / `question` /
    /// `response`; records with none of them are dropped. Timestamp is the
    /// first non-null of `timestamp` / `created` / `updated`, coerced to a
    /// string when the legacy record stored a number.
    pub fn from_record(record: &Value) -> Option<TranscriptMessage> {
        let obj = record.as_object()?;

        let role = obj
            .get("role")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let content = ["content", "question", "response"]
            .iter()
            .find_map(|key| {
                obj.get(*key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
            })?
            .to_string();

        let timestamp = ["timestamp", "created", "updated"]
            .iter()
            .find_map(|key| coerce_timestamp(obj.get(*key)?));

        Some(TranscriptMessage {
            role,
            content,
            timestamp,
        })
    }

    pub fn speaker(&self) -> Speaker {
        Speaker::from_role(&self.role)
    }
}

/// Convert a list of raw session records into transcript messages,
/// dropping records with no usable text.
pub fn transcript_from_records(records: &[Value]) -> Vec<TranscriptMessage> {
    records
        .iter()
        .filter_map(TranscriptMessage::from_record)
        .collect()
}

fn coerce_timestamp(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
