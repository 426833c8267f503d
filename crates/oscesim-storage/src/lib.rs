//! oscesim-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK, plus the production
//! implementations of the evaluation-store and scenario-directory seams.

pub mod error;
pub mod evaluations;
pub mod objects;
pub mod scenarios;
pub mod state;
