//! Evaluation persistence gate.
//!
//! The gate guarantees a computed report is returned to the caller even
//! when its storage write fails: a transient outage must never make a
//! just-computed grading result invisible to the student who waited for
//! it. Failure is surfaced as an explicit flag, not an error.

use std::future::Future;

use oscesim_core::models::evaluation::{SessionContext, StoredEvaluation};
use oscesim_core::models::report::EvaluationReport;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::GradingError;

/// The persistence collaborator for evaluation reports.
///
/// Implemented by `oscesim-storage` in production and by in-memory fakes
/// in tests. A session owns at most one stored evaluation; saving again
/// overwrites it.
pub trait EvaluationStore: Send + Sync {
    fn save_evaluation(
        &self,
        ctx: &SessionContext,
        report: &EvaluationReport,
    ) -> impl Future<Output = Result<(), GradingError>> + Send;

    fn load_evaluation(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<StoredEvaluation>, GradingError>> + Send;
}

/// Result of a persistence attempt. The report is always present,
/// whatever happened to the write.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersistOutcome {
    pub stored: bool,
    /// The storage failure, when `stored` is false.
    pub storage_error: Option<String>,
    pub report: EvaluationReport,
}

/// Attempt to store a computed report.
///
/// On failure the report is returned untouched alongside the error, so the
/// caller can still present the grading outcome and decide whether to
/// retry persistence.
pub async fn persist<S: EvaluationStore>(
    store: &S,
    ctx: &SessionContext,
    report: EvaluationReport,
) -> PersistOutcome {
    match store.save_evaluation(ctx, &report).await {
        Ok(()) => {
            info!(session_id = %ctx.session_id, "evaluation stored");
            PersistOutcome {
                stored: true,
                storage_error: None,
                report,
            }
        }
        Err(err) => {
            warn!(
                session_id = %ctx.session_id,
                error = %err,
                "evaluation could not be stored; returning computed report"
            );
            PersistOutcome {
                stored: false,
                storage_error: Some(err.to_string()),
                report,
            }
        }
    }
}
