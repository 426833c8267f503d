//! Grading prompt construction.
//!
//! One textual request per evaluation: fixed instructions with the scoring
//! scale, the rubric rendered one line per criterion, and the full
//! transcript as alternating speaker lines. The capability is required to
//! answer with a single JSON object and no prose.

use oscesim_core::models::criterion::CanonicalCriterion;
use oscesim_core::models::transcript::TranscriptMessage;

/// Fixed grading instructions sent as the system prompt.
pub const SYSTEM_PROMPT: &str = "\
You are an examiner grading a student's performance in a simulated clinical \
encounter with a virtual patient. Grade the student against the rubric in \
the user message.

Score each criterion with an integer from 0 to its stated maximum, using \
this coverage scale:
0 = none of the criterion's indicators addressed
1 = less than 25% of the indicators addressed
2 = 25-50% of the indicators addressed
3 = 50-75% of the indicators addressed
4 = more than 75% of the indicators addressed, with quality

Ground every score in evidence quoted from the transcript. Do not invent \
exchanges that did not occur.

Respond with a single JSON object and nothing else, in this shape:
{
  \"criteria\": [
    {
      \"id\": \"criterion id from the rubric\",
      \"score\": 0,
      \"strengths\": [\"...\"],
      \"weaknesses\": [\"...\"],
      \"actions\": [\"...\"],
      \"justification\": \"... with quoted evidence ...\"
    }
  ],
  \"overall\": {
    \"strengths\": [\"...\"],
    \"weaknesses\": [\"...\"],
    \"recommendations\": [\"...\"],
    \"summary\": \"...\"
  },
  \"overall_score_percent\": 0
}";

/// Assemble the user prompt for one grading request.
pub fn build_user_prompt(
    scenario_title: &str,
    criteria: &[CanonicalCriterion],
    transcript: &[TranscriptMessage],
) -> String {
    format!(
        "Scenario: {scenario_title}\n\nRubric:\n{}\nTranscript:\n{}",
        render_rubric(criteria),
        render_transcript(transcript),
    )
}

/// Render the rubric, one line per criterion plus its indicator list.
pub fn render_rubric(criteria: &[CanonicalCriterion]) -> String {
    let total_weight: f64 = criteria.iter().map(CanonicalCriterion::effective_weight).sum();

    let mut out = String::new();
    for criterion in criteria {
        let pct = criterion.effective_weight() / total_weight * 100.0;
        out.push_str(&format!(
            "- {} ({}) [{}%] — max {}\n",
            criterion.name,
            criterion.id,
            pct.round() as u32,
            criterion.max_score,
        ));
        if !criterion.description.is_empty() {
            out.push_str(&format!("  {}\n", criterion.description));
        }
        for indicator in &criterion.indicators {
            out.push_str(&format!("    * {indicator}\n"));
        }
    }
    out
}

/// Render the transcript as alternating `Student:` / `Patient:` lines.
pub fn render_transcript(transcript: &[TranscriptMessage]) -> String {
    let mut out = String::new();
    for message in transcript {
        out.push_str(&format!(
            "{}: {}\n",
            message.speaker().label(),
            message.content,
        ));
    }
    out
}
