use serde::{Deserialize, Serialize};

/// The normalized, shape-independent representation of one evaluation
/// dimension.
///
/// Scenario authors have written criteria documents in several incompatible
/// JSON shapes over the years; the rubric normalizer reconciles all of them
/// into this type so every downstream component works against one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalCriterion {
    /// Stable slug, unique within one scenario's criteria set.
    /// Lower-cased, whitespace collapsed to underscores, never empty.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Free text, may be empty.
    pub description: String,
    /// Integer upper bound for this criterion's raw score.
    pub max_score: u32,
    /// Relative importance. `None` when the source document carried no
    /// numeric weight; the score combiner defaults it to 1.
    pub weight: Option<f64>,
    /// Ordered sub-behaviors a grader should look for. May be empty —
    /// legacy criteria formats had none.
    pub indicators: Vec<String>,
}

/// Default raw-score ceiling when a source format omits `max_score`.
pub const DEFAULT_MAX_SCORE: u32 = 4;

impl CanonicalCriterion {
    /// Effective weight: the source value, or 1 when none was given.
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => 1.0,
        }
    }
}
