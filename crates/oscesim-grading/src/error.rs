use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradingError {
    #[error("transcript has no gradable messages")]
    EmptyTranscript,

    #[error("grading capability error: {0}")]
    Capability(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
