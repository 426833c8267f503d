use oscesim_core::models::transcript::TranscriptMessage;
use oscesim_grading::evidence::{DEFAULT_MAX_EXCERPTS, MAX_EXCERPT_CHARS, sample};

fn message(role: &str, content: &str) -> TranscriptMessage {
    TranscriptMessage {
        role: role.to_string(),
        content: content.to_string(),
        timestamp: None,
    }
}

#[test]
fn short_transcript_is_returned_whole_in_order() {
    let transcript = vec![
        message("user", "first"),
        message("assistant", "second"),
        message("user", "third"),
    ];

    let excerpts = sample(&transcript, DEFAULT_MAX_EXCERPTS);
    assert_eq!(excerpts.len(), 3);
    assert_eq!(excerpts[0].excerpt, "first");
    assert_eq!(excerpts[1].excerpt, "second");
    assert_eq!(excerpts[2].excerpt, "third");
}

#[test]
fn seven_messages_sample_first_middle_last() {
    let transcript: Vec<TranscriptMessage> = (0..7)
        .map(|i| message("user", &format!("message {i}")))
        .collect();

    let excerpts = sample(&transcript, DEFAULT_MAX_EXCERPTS);
    assert_eq!(excerpts.len(), 3);
    assert_eq!(excerpts[0].excerpt, "message 0");
    assert_eq!(excerpts[1].excerpt, "message 3");
    assert_eq!(excerpts[2].excerpt, "message 6");
}

#[test]
fn excerpts_are_truncated_to_220_chars() {
    let long = "x".repeat(500);
    let transcript = vec![message("user", &long)];

    let excerpts = sample(&transcript, DEFAULT_MAX_EXCERPTS);
    assert_eq!(excerpts[0].excerpt.chars().count(), MAX_EXCERPT_CHARS);
}

#[test]
fn truncation_respects_multibyte_boundaries() {
    let long = "é".repeat(300);
    let transcript = vec![message("user", &long)];

    let excerpts = sample(&transcript, DEFAULT_MAX_EXCERPTS);
    assert_eq!(excerpts[0].excerpt.chars().count(), MAX_EXCERPT_CHARS);
}

#[test]
fn excerpt_carries_speaker_label_and_raw_role() {
    let transcript = vec![message("assistant", "I feel dizzy."), message("user", "Since when?")];

    let excerpts = sample(&transcript, DEFAULT_MAX_EXCERPTS);
    assert_eq!(excerpts[0].role, "assistant");
    assert_eq!(excerpts[0].speaker, "Patient");
    assert_eq!(excerpts[1].speaker, "Student");
}

#[test]
fn timestamps_pass_through_unchanged() {
    let mut msg = message("user", "hello");
    msg.timestamp = Some("2024-01-01T00:00:00Z".to_string());

    let excerpts = sample(&[msg], DEFAULT_MAX_EXCERPTS);
    assert_eq!(excerpts[0].timestamp.as_deref(), Some("2024-01-01T00:00:00Z"));
}

#[test]
fn empty_transcript_yields_no_excerpts() {
    assert!(sample(&[], DEFAULT_MAX_EXCERPTS).is_empty());
}
