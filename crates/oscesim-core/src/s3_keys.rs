//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the oscesim S3 bucket.

use uuid::Uuid;

pub fn evaluation(session_id: Uuid) -> String {
    format!("evaluations/{session_id}.json")
}

pub const EVALUATIONS_PREFIX: &str = "evaluations/";

pub fn scenario(id: Uuid) -> String {
    format!("scenarios/{id}.json")
}

pub const SCENARIOS_PREFIX: &str = "scenarios/";
