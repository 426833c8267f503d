use oscesim_grading::parse::{parse_grading_response, strip_code_fence};

#[test]
fn plain_json_object_parses() {
    let raw = r#"{
        "criteria": [
            {"id": "communication", "score": 3, "strengths": ["clear opening"], "justification": "asked open questions"}
        ],
        "overall": {"summary": "solid encounter", "recommendations": ["practice summarizing"]},
        "overall_score_percent": 71
    }"#;

    let result = parse_grading_response(raw).unwrap();
    assert_eq!(result.criteria.len(), 1);
    assert_eq!(result.criteria[0].id.as_deref(), Some("communication"));
    assert_eq!(result.criteria[0].score, Some(3.0));
    assert_eq!(result.criteria[0].strengths, vec!["clear opening"]);
    assert_eq!(result.criteria[0].justification, "asked open questions");
    assert_eq!(result.overall.summary, "solid encounter");
    assert_eq!(result.overall.recommendations, vec!["practice summarizing"]);
    assert_eq!(result.overall_score_percent, Some(71.0));
}

#[test]
fn fenced_json_is_unwrapped() {
    let raw = "```json\n{\"criteria\": [], \"overall\": {\"summary\": \"ok\"}}\n```";
    let result = parse_grading_response(raw).unwrap();
    assert_eq!(result.overall.summary, "ok");

    let raw = "```\n{\"overall_score_percent\": 50}\n```\n";
    let result = parse_grading_response(raw).unwrap();
    assert_eq!(result.overall_score_percent, Some(50.0));
}

#[test]
fn strip_code_fence_leaves_plain_text_alone() {
    assert_eq!(strip_code_fence("  {\"a\": 1} "), "{\"a\": 1}");
    assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
}

#[test]
fn non_json_responses_yield_none() {
    assert!(parse_grading_response("The student did well overall.").is_none());
    assert!(parse_grading_response("").is_none());
    assert!(parse_grading_response("[1, 2, 3]").is_none());
    assert!(parse_grading_response("\"just a string\"").is_none());
}

#[test]
fn empty_object_parses_to_defaults() {
    let result = parse_grading_response("{}").unwrap();
    assert!(result.criteria.is_empty());
    assert!(result.overall.summary.is_empty());
    assert_eq!(result.overall_score_percent, None);
}

#[test]
fn score_accepts_french_note_alias_and_numeric_strings() {
    let raw = r#"{"criteria": [{"id": "a", "note": 2}, {"id": "b", "score": "3"}]}"#;
    let result = parse_grading_response(raw).unwrap();
    assert_eq!(result.criteria[0].score, Some(2.0));
    assert_eq!(result.criteria[1].score, Some(3.0));
}

#[test]
fn actions_accepts_recommendations_alias() {
    let raw = r#"{"criteria": [{"id": "a", "recommendations": ["slow down"]}]}"#;
    let result = parse_grading_response(raw).unwrap();
    assert_eq!(result.criteria[0].actions, vec!["slow down"]);

    // `actions` wins when both are present.
    let raw = r#"{"criteria": [{"id": "a", "actions": ["x"], "recommendations": ["y"]}]}"#;
    let result = parse_grading_response(raw).unwrap();
    assert_eq!(result.criteria[0].actions, vec!["x"]);
}

#[test]
fn overall_summary_accepts_comment_alias() {
    let raw = r#"{"overall": {"comment": "good rapport"}}"#;
    let result = parse_grading_response(raw).unwrap();
    assert_eq!(result.overall.summary, "good rapport");
}

#[test]
fn malformed_entries_degrade_instead_of_failing() {
    let raw = r#"{
        "criteria": [
            {"id": "a", "score": "not a number", "strengths": [1, true, "kept", ""]},
            "not an object",
            {"name": "B"}
        ]
    }"#;

    let result = parse_grading_response(raw).unwrap();
    assert_eq!(result.criteria.len(), 2);
    assert_eq!(result.criteria[0].score, None);
    assert_eq!(result.criteria[0].strengths, vec!["kept"]);
    assert_eq!(result.criteria[1].name.as_deref(), Some("B"));
    assert_eq!(result.criteria[1].score, None);
}

#[test]
fn bare_string_narrative_becomes_single_entry_list() {
    let raw = r#"{"overall": {"strengths": "stayed calm"}}"#;
    let result = parse_grading_response(raw).unwrap();
    assert_eq!(result.overall.strengths, vec!["stayed calm"]);
}
