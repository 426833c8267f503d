//! oscesim-rubric
//!
//! Evaluation-criteria normalization. Pure data — no AWS dependency.
//! Reconciles the historical JSON shapes scenario authors have used for
//! evaluation criteria into the canonical form the grading engine consumes,
//! and supplies the fallback rubric used when a scenario has none.

pub mod fallback;
pub mod fields;
pub mod normalize;

pub use fallback::fallback_criteria;
pub use normalize::normalize;
