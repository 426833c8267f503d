//! Grading orchestration.
//!
//! Builds one grading request, invokes the external text-grading
//! capability, and defensively parses its response. Grading failure is an
//! expected condition: any transport error or unusable response becomes
//! `None`, logged at `warn`, and the score combiner proceeds with neutral
//! defaults. No exception crosses this boundary.

use std::future::Future;

use oscesim_core::models::criterion::CanonicalCriterion;
use oscesim_core::models::grading::GradingResult;
use oscesim_core::models::transcript::TranscriptMessage;
use tracing::{info, warn};

use crate::error::GradingError;
use crate::parse;
use crate::prompt;

/// The external text-grading capability.
///
/// One text-in/text-out operation, assumed to usually (but not always)
/// return well-formed JSON. Implemented by `oscesim-bedrock` in production
/// and by in-memory fakes in tests.
pub trait GradingCapability: Send + Sync {
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<String, GradingError>> + Send;
}

/// Run one grading call for a session.
///
/// Returns `None` on any capability failure or unusable response.
pub async fn grade<G: GradingCapability>(
    grader: &G,
    scenario_title: &str,
    criteria: &[CanonicalCriterion],
    transcript: &[TranscriptMessage],
) -> Option<GradingResult> {
    let user_prompt = prompt::build_user_prompt(scenario_title, criteria, transcript);

    let raw = match grader.complete(prompt::SYSTEM_PROMPT, &user_prompt).await {
        Ok(raw) => raw,
        Err(err) => {
            warn!(error = %err, "grading capability call failed");
            return None;
        }
    };

    match parse::parse_grading_response(&raw) {
        Some(result) => {
            info!(
                criteria_returned = result.criteria.len(),
                has_overall_percent = result.overall_score_percent.is_some(),
                "grading response parsed"
            );
            Some(result)
        }
        None => {
            warn!(
                response_len = raw.len(),
                "grading response was not a JSON object"
            );
            None
        }
    }
}
