//! The end-to-end evaluation pipeline for one session:
//! normalize criteria → sample evidence → grade → combine → persist.
//!
//! One sequential flow per session, no shared state between concurrent
//! sessions. Only the empty-transcript precondition is fatal; every other
//! failure degrades (fallback rubric, neutral scores, unstored report).

use oscesim_core::models::evaluation::SessionContext;
use oscesim_core::models::transcript::TranscriptMessage;
use serde_json::Value;
use tracing::info;

use crate::combine;
use crate::error::GradingError;
use crate::evidence;
use crate::grade::{self, GradingCapability};
use crate::persist::{self, EvaluationStore, PersistOutcome};

/// Evaluate one completed training session.
///
/// The caller supplies the scenario's raw criteria document (as stored,
/// possibly absent) and the full transcript. Returns the computed report
/// with its persistence outcome; returns an error only when there is
/// nothing to grade.
pub async fn evaluate<G: GradingCapability, S: EvaluationStore>(
    grader: &G,
    store: &S,
    ctx: &SessionContext,
    scenario_title: &str,
    raw_criteria: Option<&Value>,
    transcript: &[TranscriptMessage],
) -> Result<PersistOutcome, GradingError> {
    if transcript.is_empty() {
        return Err(GradingError::EmptyTranscript);
    }

    let mut criteria = oscesim_rubric::normalize(raw_criteria);
    if criteria.is_empty() {
        info!(
            session_id = %ctx.session_id,
            "criteria document unusable, substituting fallback rubric"
        );
        criteria = oscesim_rubric::fallback_criteria();
    }

    info!(
        session_id = %ctx.session_id,
        criteria_count = criteria.len(),
        messages = transcript.len(),
        "starting evaluation"
    );

    let evidence = evidence::sample(transcript, evidence::DEFAULT_MAX_EXCERPTS);
    let grading = grade::grade(grader, scenario_title, &criteria, transcript).await;
    let report = combine::combine(&criteria, grading.as_ref(), &evidence);

    info!(
        session_id = %ctx.session_id,
        overall_score_percent = report.overall_score_percent,
        graded = grading.is_some(),
        "evaluation computed"
    );

    Ok(persist::persist(store, ctx, report).await)
}
