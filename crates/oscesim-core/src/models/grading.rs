use serde::{Deserialize, Serialize};

/// The defensively-parsed output of one grading-capability invocation.
///
/// Every field is optional in the wire form; the parser substitutes safe
/// defaults so the score combiner never has to re-validate. A grading call
/// that failed outright is represented as the absence of this value, not
/// as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingResult {
    pub criteria: Vec<RawCriterionScore>,
    pub overall: GradingOverall,
    /// Model-reported overall percentage, when it chose to provide one.
    pub overall_score_percent: Option<f64>,
}

/// One per-criterion entry as returned by the grading capability.
///
/// Matched against canonical criteria by `id`, else by case-insensitive
/// `name`. The score is unbounded as received — clamping happens in the
/// combiner against the canonical `max_score`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCriterionScore {
    pub id: Option<String>,
    pub name: Option<String>,
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub actions: Vec<String>,
    pub justification: String,
}

/// Top-level narrative block of a grading result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingOverall {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
}
