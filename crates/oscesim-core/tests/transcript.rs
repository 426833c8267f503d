use oscesim_core::models::transcript::{Speaker, TranscriptMessage, transcript_from_records};
use serde_json::json;

#[test]
fn content_read_from_legacy_question_field() {
    let record = json!({"role": "user", "question": "Where does it hurt?"});
    let message = TranscriptMessage::from_record(&record).unwrap();
    assert_eq!(message.content, "Where does it hurt?");
    assert_eq!(message.role, "user");
}

#[test]
fn content_read_from_legacy_response_field() {
    let record = json!({"role": "assistant", "response": "It hurts in my chest."});
    let message = TranscriptMessage::from_record(&record).unwrap();
    assert_eq!(message.content, "It hurts in my chest.");
}

#[test]
fn content_field_wins_over_legacy_names() {
    let record = json!({
        "role": "user",
        "content": "modern",
        "question": "legacy",
    });
    let message = TranscriptMessage::from_record(&record).unwrap();
    assert_eq!(message.content, "modern");
}

#[test]
fn record_without_text_is_dropped() {
    let records = vec![
        json!({"role": "user", "content": "hello"}),
        json!({"role": "user", "content": "   "}),
        json!({"role": "user"}),
        json!("not even an object"),
    ];
    let transcript = transcript_from_records(&records);
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].content, "hello");
}

#[test]
fn timestamp_falls_back_through_created_and_updated() {
    let record = json!({"role": "user", "content": "x", "created": "2024-03-01T10:00:00Z"});
    let message = TranscriptMessage::from_record(&record).unwrap();
    assert_eq!(message.timestamp.as_deref(), Some("2024-03-01T10:00:00Z"));

    let record = json!({"role": "user", "content": "x", "updated": 1709287200});
    let message = TranscriptMessage::from_record(&record).unwrap();
    assert_eq!(message.timestamp.as_deref(), Some("1709287200"));

    let record = json!({"role": "user", "content": "x"});
    let message = TranscriptMessage::from_record(&record).unwrap();
    assert_eq!(message.timestamp, None);
}

#[test]
fn speaker_classification() {
    assert_eq!(Speaker::from_role("user"), Speaker::Student);
    assert_eq!(Speaker::from_role("Student"), Speaker::Student);
    assert_eq!(Speaker::from_role("candidate"), Speaker::Student);
    assert_eq!(Speaker::from_role("assistant"), Speaker::Patient);
    assert_eq!(Speaker::from_role("patient"), Speaker::Patient);
    assert_eq!(Speaker::from_role(""), Speaker::Patient);
    assert_eq!(Speaker::label(Speaker::Student), "Student");
    assert_eq!(Speaker::label(Speaker::Patient), "Patient");
}
