use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A short, verbatim transcript snippet attached to a report as
/// justification. Chosen by position in the conversation, not by content
/// matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceExcerpt {
    /// Raw role string as recorded in the transcript.
    pub role: String,
    /// Human label ("Student" / "Patient").
    pub speaker: String,
    /// Verbatim text, truncated to 220 characters.
    pub excerpt: String,
    /// Pass-through legacy timestamp, if the message carried one.
    pub timestamp: Option<String>,
}

/// The competency report computed for one training session.
///
/// Immutable once persisted, except for being overwritten wholesale when
/// grading is re-run for the same session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationReport {
    /// Final overall percentage shown to the student (0–100).
    pub overall_score_percent: u32,
    pub criteria: Vec<CriterionReport>,
    /// Aggregate narratives, deduplicated across criteria and capped at 3.
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    /// Model-provided summary, verbatim. Empty when none was returned.
    pub summary: String,
    /// Model-reported overall percentage, kept for audit.
    pub llm_score_percent: Option<u32>,
    /// Criterion-weight-normalized recomputation, kept for audit.
    /// May diverge from `llm_score_percent`.
    pub weighted_score_percent: u32,
}

/// One graded criterion inside an [`EvaluationReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionReport {
    pub id: String,
    pub name: String,
    pub description: String,
    pub indicators: Vec<String>,
    /// Share of the total weight, as a percentage rounded to 2 decimals.
    pub weight: f64,
    /// The canonical weight before renormalization.
    pub raw_weight: f64,
    pub max_score: u32,
    /// Displayed score. Equal to `raw_score` — the model's judgment is
    /// authoritative when present.
    pub score: u32,
    /// Grading-capability score clamped to `[0, max_score]`, or the
    /// neutral default when the criterion went unmatched.
    pub raw_score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub actions: Vec<String>,
    pub justification: String,
    /// The session-representative evidence sample. The same excerpts are
    /// attached to every criterion.
    pub evidence: Vec<EvidenceExcerpt>,
}
