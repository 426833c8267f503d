//! oscesim-bedrock
//!
//! Bedrock-backed grading capability. Thin wrapper around the Converse
//! API; all grading semantics live in `oscesim-grading`.

pub mod error;
pub mod grader;

pub use grader::BedrockGrader;
