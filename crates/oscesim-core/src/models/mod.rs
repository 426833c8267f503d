pub mod criterion;
pub mod evaluation;
pub mod grading;
pub mod report;
pub mod transcript;
