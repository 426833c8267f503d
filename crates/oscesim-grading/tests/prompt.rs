use oscesim_core::models::criterion::CanonicalCriterion;
use oscesim_core::models::transcript::TranscriptMessage;
use oscesim_grading::prompt::{SYSTEM_PROMPT, build_user_prompt, render_rubric, render_transcript};

fn criterion(id: &str, name: &str, weight: Option<f64>) -> CanonicalCriterion {
    CanonicalCriterion {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        max_score: 4,
        weight,
        indicators: vec!["asks open questions".to_string()],
    }
}

fn message(role: &str, content: &str) -> TranscriptMessage {
    TranscriptMessage {
        role: role.to_string(),
        content: content.to_string(),
        timestamp: None,
    }
}

#[test]
fn system_prompt_fixes_the_scoring_bands_and_json_requirement() {
    assert!(SYSTEM_PROMPT.contains("0 = none"));
    assert!(SYSTEM_PROMPT.contains("less than 25%"));
    assert!(SYSTEM_PROMPT.contains("25-50%"));
    assert!(SYSTEM_PROMPT.contains("50-75%"));
    assert!(SYSTEM_PROMPT.contains("more than 75%"));
    assert!(SYSTEM_PROMPT.contains("single JSON object"));
    assert!(SYSTEM_PROMPT.contains("quoted from the transcript"));
}

#[test]
fn rubric_lines_carry_id_weight_percent_and_max() {
    let criteria = vec![
        criterion("history_taking", "History Taking", Some(2.0)),
        criterion("empathy", "Empathy", Some(1.0)),
    ];

    let rubric = render_rubric(&criteria);
    assert!(rubric.contains("History Taking (history_taking) [67%] — max 4"));
    assert!(rubric.contains("Empathy (empathy) [33%] — max 4"));
    assert!(rubric.contains("    * asks open questions"));
}

#[test]
fn transcript_renders_as_speaker_lines() {
    let transcript = vec![
        message("user", "What brings you in today?"),
        message("assistant", "My chest hurts."),
    ];

    let rendered = render_transcript(&transcript);
    assert_eq!(rendered, "Student: What brings you in today?\nPatient: My chest hurts.\n");
}

#[test]
fn user_prompt_contains_scenario_rubric_and_transcript() {
    let criteria = vec![criterion("empathy", "Empathy", None)];
    let transcript = vec![message("user", "Hello, I'm a medical student.")];

    let prompt = build_user_prompt("Acute Chest Pain", &criteria, &transcript);
    assert!(prompt.starts_with("Scenario: Acute Chest Pain"));
    assert!(prompt.contains("Rubric:"));
    assert!(prompt.contains("Empathy (empathy)"));
    assert!(prompt.contains("Transcript:"));
    assert!(prompt.contains("Student: Hello, I'm a medical student."));
}
