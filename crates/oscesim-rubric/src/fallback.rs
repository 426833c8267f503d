//! Fallback rubric.
//!
//! Substituted whenever a scenario's criteria document normalizes to
//! nothing — a missing document, an empty object, or a shape nobody has
//! taught the normalizer yet. Grading always has a rubric to work with.

use oscesim_core::models::criterion::{CanonicalCriterion, DEFAULT_MAX_SCORE};

/// The four-criterion default rubric for a simulated clinical encounter.
pub fn fallback_criteria() -> Vec<CanonicalCriterion> {
    vec![
        criterion(
            "communication",
            "Communication",
            "Clarity, structure, and adaptation of language to the patient.",
            &[
                "Introduces themselves and frames the encounter",
                "Asks open questions before closed ones",
                "Avoids unexplained medical jargon",
                "Summarizes and checks patient understanding",
            ],
        ),
        criterion(
            "clinical_reasoning",
            "Clinical Reasoning",
            "Relevance and organization of history taking and hypothesis testing.",
            &[
                "Explores the presenting complaint systematically",
                "Screens for red flags",
                "Questions follow a recognizable diagnostic thread",
            ],
        ),
        criterion(
            "empathy",
            "Empathy",
            "Recognition of and response to the patient's emotions and concerns.",
            &[
                "Acknowledges expressed emotions",
                "Legitimizes the patient's concerns",
                "Leaves room for the patient to speak",
            ],
        ),
        criterion(
            "professionalism",
            "Professionalism",
            "Respect, honesty, and appropriate conduct throughout the encounter.",
            &[
                "Maintains a respectful tone",
                "Is honest about uncertainty",
                "Keeps the encounter patient-centered",
            ],
        ),
    ]
}

fn criterion(
    id: &str,
    name: &str,
    description: &str,
    indicators: &[&str],
) -> CanonicalCriterion {
    CanonicalCriterion {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        max_score: DEFAULT_MAX_SCORE,
        weight: None,
        indicators: indicators.iter().map(|s| s.to_string()).collect(),
    }
}
