//! Evidence sampling.
//!
//! Reports carry short verbatim transcript excerpts as justification.
//! Excerpts are chosen by position (opening, mid-conversation, closing)
//! rather than by keyword matching against criteria — keyword-to-criterion
//! matching proved unreliable, so the same conversation-representative
//! sample is attached to every criterion.

use oscesim_core::models::report::EvidenceExcerpt;
use oscesim_core::models::transcript::TranscriptMessage;

/// Maximum excerpt length, in characters.
pub const MAX_EXCERPT_CHARS: usize = 220;

/// Default number of excerpts per report.
pub const DEFAULT_MAX_EXCERPTS: usize = 3;

/// Sample representative excerpts from a transcript.
///
/// Transcripts of `max_excerpts` messages or fewer are returned whole, in
/// order. Longer transcripts yield the first, middle, and last messages
/// (indices `0`, `n / 2`, `n - 1`).
pub fn sample(transcript: &[TranscriptMessage], max_excerpts: usize) -> Vec<EvidenceExcerpt> {
    if transcript.is_empty() || max_excerpts == 0 {
        return Vec::new();
    }

    if transcript.len() <= max_excerpts {
        return transcript.iter().map(to_excerpt).collect();
    }

    let n = transcript.len();
    [0, n / 2, n - 1]
        .iter()
        .map(|&index| to_excerpt(&transcript[index]))
        .collect()
}

fn to_excerpt(message: &TranscriptMessage) -> EvidenceExcerpt {
    EvidenceExcerpt {
        role: message.role.clone(),
        speaker: message.speaker().label().to_string(),
        excerpt: truncate_chars(&message.content, MAX_EXCERPT_CHARS),
        timestamp: message.timestamp.clone(),
    }
}

/// Truncate to at most `max` characters, on a character boundary.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
