use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::report::EvaluationReport;

/// Identifies the session an evaluation belongs to.
///
/// A session owns at most one stored evaluation; re-grading overwrites it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionContext {
    pub session_id: Uuid,
    pub scenario_id: Uuid,
    pub student_id: Uuid,
}

/// The persisted evaluation row, keyed by session identifier.
///
/// Carries the full report plus enough context to rebuild a display-ready
/// view later without re-reading the live transcript.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredEvaluation {
    pub session_id: Uuid,
    pub scenario_id: Uuid,
    pub student_id: Uuid,
    pub report: EvaluationReport,
    pub created_at: jiff::Timestamp,
}
